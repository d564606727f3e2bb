use crate::error::{LinalgError, Result};
use crate::interpolate::base::Base;
use crate::interpolate::interpolator_trait::Interpolator;

/// Piecewise-linear interpolation between neighbouring samples (sorted by x).
#[derive(Clone, Debug, Default)]
pub struct Linear {
    base: Base,
}

impl Linear {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base(&self) -> &Base {
        &self.base
    }
}

impl Interpolator for Linear {
    fn fit(&mut self, x: &[f64], y: &[f64]) -> Result<()> {
        self.base.fit(x, y)
    }

    fn interpolate(&self, val: f64) -> f64 {
        let pairs = self.base.pairs();
        match pairs.len() {
            0 => f64::NAN,
            1 => pairs[0].y,
            n => {
                // Index of the right end of the segment containing `val`,
                // clamped so out-of-range values extend the end segments.
                let hi = pairs.partition_point(|p| p.x < val).clamp(1, n - 1);
                let (p0, p1) = (pairs[hi - 1], pairs[hi]);
                let t = (val - p0.x) / (p1.x - p0.x);
                p0.y + t * (p1.y - p0.y)
            }
        }
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
        "linear"
    }
}
