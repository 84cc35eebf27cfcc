use crate::error::RectifyError;
use crate::types::{HomogeneousLine, Quad, Side};
use log::debug;

/// Normalised side lines in the order L01, L12, L23, L30.
pub fn side_lines(quad: &Quad, eps: f64) -> Result<[HomogeneousLine; 4], RectifyError> {
    let pts = quad.homogeneous();
    let mut lines = [HomogeneousLine {
        coeffs: Default::default(),
    }; 4];
    for (slot, side) in lines.iter_mut().zip(Side::ALL) {
        let (i, j) = side.corners();
        let raw = HomogeneousLine::through(&pts[i], &pts[j]);
        *slot = raw.normalized(eps).ok_or_else(|| {
            debug!("Rectify: side {side} is degenerate");
            RectifyError::DegenerateGeometry {
                side,
                magnitude: raw.normal_norm(),
            }
        })?;
    }
    Ok(lines)
}
