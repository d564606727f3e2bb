use serde::{Deserialize, Serialize};

use crate::error::{Dim, LinalgError, Result};

/// A single `(x, y)` sample.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CoordinatePair {
    pub x: f64,
    pub y: f64,
}

impl CoordinatePair {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Zip two equal-length slices into coordinate pairs, preserving order.
pub fn to_coordinate_pairs(x: &[f64], y: &[f64]) -> Result<Vec<CoordinatePair>> {
    if x.len() != y.len() {
        return Err(LinalgError::DimensionMismatch {
            expected: Dim::Len(x.len()),
            found: Dim::Len(y.len()),
        });
    }
    Ok(x.iter()
        .zip(y.iter())
        .map(|(&px, &py)| CoordinatePair::new(px, py))
        .collect())
}

/// Sort pairs ascending by x. The sort is stable, so samples sharing an x
/// keep their input order.
pub fn sort_coordinate_pairs(pairs: &mut [CoordinatePair]) {
    pairs.sort_by(|a, b| a.x.total_cmp(&b.x));
}

/// Fitted samples shared by every interpolation strategy.
///
/// Keeps the caller's X and Y sequences as given, plus the same samples
/// paired and sorted by x.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Base {
    x: Vec<f64>,
    y: Vec<f64>,
    xy_pairs: Vec<CoordinatePair>,
}

impl Base {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `x` and `y`, replacing anything fitted before.
    ///
    /// On a length mismatch the previous state is left untouched.
    pub fn fit(&mut self, x: &[f64], y: &[f64]) -> Result<()> {
        let mut pairs = to_coordinate_pairs(x, y)?;
        sort_coordinate_pairs(&mut pairs);

        self.x = x.to_vec();
        self.y = y.to_vec();
        self.xy_pairs = pairs;
        log::debug!("Fitted {} coordinate pairs", self.xy_pairs.len());
        Ok(())
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Samples sorted ascending by x.
    pub fn pairs(&self) -> &[CoordinatePair] {
        &self.xy_pairs
    }

    pub fn len(&self) -> usize {
        self.xy_pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xy_pairs.is_empty()
    }

    pub fn min_x(&self) -> Option<f64> {
        self.xy_pairs.first().map(|p| p.x)
    }

    pub fn max_x(&self) -> Option<f64> {
        self.xy_pairs.last().map(|p| p.x)
    }

    /// First x value that occurs more than once, if any.
    pub fn duplicate_x(&self) -> Option<f64> {
        self.xy_pairs
            .windows(2)
            .find(|w| w[0].x == w[1].x)
            .map(|w| w[0].x)
    }

    /// Check that `val` is finite and lies within `[min_x, max_x]`.
    pub fn check_range(&self, val: f64) -> Result<()> {
        let (min, max) = match (self.min_x(), self.max_x()) {
            (Some(min), Some(max)) => (min, max),
            _ => return Err(LinalgError::NoData),
        };
        if !val.is_finite() {
            return Err(LinalgError::NotFinite(val));
        }
        if val < min {
            return Err(LinalgError::BelowRange { value: val, min });
        }
        if val > max {
            return Err(LinalgError::AboveRange { value: val, max });
        }
        Ok(())
    }
}
