use crate::config::InterpolationKind;
use crate::interpolate::interpolator_trait::Interpolator;
use crate::interpolate::lagrange::Lagrange;
use crate::interpolate::linear::Linear;

/// Build an unfitted, boxed interpolator for the requested strategy.
pub fn build_interpolator(kind: InterpolationKind) -> Box<dyn Interpolator> {
    match kind {
        InterpolationKind::Lagrange => Box::new(Lagrange::new()),
        InterpolationKind::Linear => Box::new(Linear::new()),
    }
}
