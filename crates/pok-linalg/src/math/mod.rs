//! Dense `Matrix` and `Vector` types.
//!
//! Both are owned `f64` containers whose operations return fresh values and
//! report shape problems through [`crate::error::LinalgError`] instead of
//! panicking. `Matrix` additionally carries the elimination-based solvers
//! (`invert`, `left_divide`).
pub mod matrix;
pub mod vector;

pub use matrix::Matrix;
pub use vector::Vector;
