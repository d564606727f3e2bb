use std::fmt;
use std::iter::FromIterator;
use std::ops::Index;
use std::slice::Iter;

use serde::{Deserialize, Serialize};

use crate::error::{Dim, LinalgError, Result};

/// Ordered sequence of `f64` values.
///
/// Every arithmetic operation allocates and returns a new `Vector`; the
/// receiver and the argument are left untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector {
    data: Vec<f64>,
}

impl Vector {
    pub fn from_vec(data: Vec<f64>) -> Self {
        Self { data }
    }

    pub fn zeros(len: usize) -> Self {
        Vector::from_vec(vec![0.0; len])
    }

    /// Number of elements.
    pub fn dim(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, f64> {
        self.data.iter()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.data.clone()
    }

    pub fn are_dims_equal(&self, other: &Vector) -> bool {
        self.dim() == other.dim()
    }

    fn ensure_same_dim(&self, other: &Vector) -> Result<()> {
        if self.are_dims_equal(other) {
            Ok(())
        } else {
            Err(LinalgError::DimensionMismatch {
                expected: Dim::Len(self.dim()),
                found: Dim::Len(other.dim()),
            })
        }
    }

    fn zip_map<F>(&self, other: &Vector, f: F) -> Result<Vector>
    where
        F: Fn(f64, f64) -> f64,
    {
        self.ensure_same_dim(other)?;
        Ok(self
            .iter()
            .zip(other.iter())
            .map(|(a, b)| f(*a, *b))
            .collect())
    }

    pub fn mapv<F>(&self, f: F) -> Vector
    where
        F: FnMut(&f64) -> f64,
    {
        Vector::from_vec(self.data.iter().map(f).collect())
    }

    pub fn add(&self, other: &Vector) -> Result<Vector> {
        self.zip_map(other, |a, b| a + b)
    }

    pub fn subtract(&self, other: &Vector) -> Result<Vector> {
        self.zip_map(other, |a, b| a - b)
    }

    pub fn dot(&self, other: &Vector) -> Result<f64> {
        self.ensure_same_dim(other)?;
        Ok(dot_slices(self.as_slice(), other.as_slice()))
    }

    pub fn multiply_by_scalar(&self, k: f64) -> Vector {
        self.mapv(|v| v * k)
    }

    pub fn divide_by_scalar(&self, k: f64) -> Result<Vector> {
        if k == 0.0 {
            return Err(LinalgError::DivideByZero);
        }
        Ok(self.mapv(|v| v / k))
    }

    /// Raise every element to `p`.
    pub fn power(&self, p: f64) -> Vector {
        self.mapv(|v| v.powf(p))
    }

    /// True when both vectors have the same length and every pair of
    /// elements differs by at most `tol`.
    pub fn is_similar(&self, other: &Vector, tol: f64) -> bool {
        self.are_dims_equal(other)
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| (a - b).abs() <= tol)
    }
}

pub(crate) fn dot_slices(lhs: &[f64], rhs: &[f64]) -> f64 {
    lhs.iter().zip(rhs.iter()).map(|(a, b)| a * b).sum()
}

impl From<Vec<f64>> for Vector {
    fn from(value: Vec<f64>) -> Self {
        Vector::from_vec(value)
    }
}

impl From<Vector> for Vec<f64> {
    fn from(value: Vector) -> Self {
        value.data
    }
}

impl From<&[f64]> for Vector {
    fn from(value: &[f64]) -> Self {
        Vector::from_vec(value.to_vec())
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Vector::from_vec(iter.into_iter().collect())
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, value) in self.data.iter().enumerate() {
            write!(f, "{}", value)?;
            if idx + 1 != self.data.len() {
                write!(f, ", ")?;
            }
        }
        write!(f, "]")
    }
}
