//! pok-linalg: small dense linear algebra and 1-D interpolation.
//!
//! The crate provides an owned `f64` [`Matrix`] and [`Vector`] with
//! elementwise arithmetic, products, Gauss-Jordan inversion and a
//! MATLAB-style left division that falls back to normal-equation least
//! squares for over-determined systems. On top of a shared coordinate-pair
//! [`interpolate::Base`] it offers Lagrange and piecewise-linear
//! interpolators behind the [`Interpolator`] trait.
//!
//! Every fallible operation returns [`error::Result`] carrying a
//! [`LinalgError`] with the offending shapes or indices.
pub mod config;
pub mod error;
pub mod interpolate;
pub mod math;

pub use error::{Dim, LinalgError, Result};
pub use interpolate::Interpolator;
pub use math::{Matrix, Vector};
