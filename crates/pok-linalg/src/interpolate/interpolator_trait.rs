use rayon::prelude::*;

use crate::error::Result;

/// Common contract for interpolation strategies.
///
/// Implementations own a [`crate::interpolate::Base`] holding the fitted
/// samples. `interpolate` performs no checks of its own; callers are
/// expected to run `validate` first, or use `estimate`, which does both.
pub trait Interpolator: Send + Sync {
    /// Fit the strategy to paired samples, replacing any previous fit.
    fn fit(&mut self, x: &[f64], y: &[f64]) -> Result<()>;

    /// Evaluate the fitted function at `val` without any validation.
    fn interpolate(&self, val: f64) -> f64;

    /// Check that `interpolate(val)` is meaningful for the fitted samples.
    fn validate(&self, val: f64) -> Result<()>;

    /// Optional human readable name for the strategy
    fn name(&self) -> &str {
        "interpolator"
    }

    fn estimate(&self, val: f64) -> Result<f64> {
        self.validate(val)?;
        Ok(self.interpolate(val))
    }

    /// `estimate` over many values in parallel. Fails if any value fails.
    fn estimate_batch(&self, values: &[f64]) -> Result<Vec<f64>> {
        values.par_iter().map(|&v| self.estimate(v)).collect()
    }
}
