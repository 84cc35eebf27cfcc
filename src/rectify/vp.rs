use crate::error::RectifyWarning;
use crate::types::{HomogeneousLine, VanishingPair, VanishingPoint};
use log::{debug, warn};

/// Intersects opposite side lines: `V1 = L01 × L23`, `V2 = L12 × L30`.
///
/// A vanishing point whose `|w|` falls below `eps` is kept and flagged; the
/// corresponding sides are already parallel in the image, which is an
/// affine view of the rectangle or a degenerate one.
pub fn solve_vanishing_points(
    lines: &[HomogeneousLine; 4],
    eps: f64,
) -> (VanishingPair, Vec<RectifyWarning>) {
    let [l01, l12, l23, l30] = lines;
    let pair = VanishingPair {
        width: vanishing_point(l01, l23, eps),
        height: vanishing_point(l12, l30, eps),
    };
    let warnings = pair.warnings();
    for w in &warnings {
        warn!("Rectify: {w}");
    }
    debug!(
        "Rectify: vanishing points width={:?} height={:?}",
        pair.width.pos.as_slice(),
        pair.height.pos.as_slice()
    );
    (pair, warnings)
}

fn vanishing_point(a: &HomogeneousLine, b: &HomogeneousLine, eps: f64) -> VanishingPoint {
    let pos = a.intersect(b);
    VanishingPoint {
        pos,
        at_infinity: pos[2].abs() < eps,
    }
}
