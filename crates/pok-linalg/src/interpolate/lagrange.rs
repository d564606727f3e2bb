use crate::error::{LinalgError, Result};
use crate::interpolate::base::Base;
use crate::interpolate::interpolator_trait::Interpolator;

/// Lagrange polynomial interpolation through every fitted sample.
///
/// The polynomial has degree `n - 1` for `n` samples and reproduces any
/// polynomial of at most that degree exactly.
#[derive(Clone, Debug, Default)]
pub struct Lagrange {
    base: Base,
}

impl Lagrange {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base(&self) -> &Base {
        &self.base
    }
}

impl Interpolator for Lagrange {
    fn fit(&mut self, x: &[f64], y: &[f64]) -> Result<()> {
        self.base.fit(x, y)
    }

    /// Sum over samples of `y_i * prod_{j != i} (val - x_j) / (x_i - x_j)`.
    fn interpolate(&self, val: f64) -> f64 {
        let x = self.base.x();
        let y = self.base.y();

        let mut est = 0.0;
        for i in 0..x.len() {
            let mut prod = y[i];
            for j in 0..x.len() {
                if i != j {
                    prod = prod * (val - x[j]) / (x[i] - x[j]);
                }
            }
            est += prod;
        }
        est
    }

    fn validate(&self, val: f64) -> Result<()> {
        if self.base.is_empty() {
            return Err(LinalgError::NoData);
        }
        if let Some(dup) = self.base.duplicate_x() {
            return Err(LinalgError::DuplicateAbscissa(dup));
        }
        self.base.check_range(val)
    }

    fn name(&self) -> &str {
        "lagrange"
    }
}
