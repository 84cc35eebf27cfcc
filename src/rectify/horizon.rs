use crate::error::RectifyError;
use crate::types::{RectifyingTransform, VanishingPair};
use log::debug;
use nalgebra::Vector3;

/// Image of the line at infinity, `V1 × V2`, scaled to unit Euclidean norm.
///
/// Fails when the two vanishing points coincide (or are both null), since no
/// unique line passes through them.
pub fn horizon_line(pair: &VanishingPair, eps: f64) -> Result<Vector3<f64>, RectifyError> {
    let l_inf = pair.width.pos.cross(&pair.height.pos);
    let norm = l_inf.norm();
    if norm < eps {
        debug!("Rectify: horizon norm {norm:e} below {eps:e}");
        return Err(RectifyError::DegenerateVanishingPoints { norm });
    }
    Ok(l_inf / norm)
}

/// Horizon line plus the transform that sends it to `(0, 0, 1)`.
pub fn rectifying_transform(
    pair: &VanishingPair,
    eps: f64,
) -> Result<RectifyingTransform, RectifyError> {
    let horizon = horizon_line(pair, eps)?;
    Ok(RectifyingTransform::from_horizon(&horizon))
}
