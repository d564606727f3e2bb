//! Coordinate-pair fitting and interpolation strategies.
pub mod base;
pub mod factory;
pub mod interpolator_trait;
pub mod lagrange;
pub mod linear;

pub use base::{sort_coordinate_pairs, to_coordinate_pairs, Base, CoordinatePair};
pub use factory::build_interpolator;
pub use interpolator_trait::Interpolator;
pub use lagrange::Lagrange;
pub use linear::Linear;
