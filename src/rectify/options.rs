//! Numerical thresholds of the rectification pipeline.
//!
//! Each epsilon is the boundary between "degenerate" (the stage fails or
//! flags its output) and "valid but possibly imprecise". All default to
//! `f64::EPSILON`; raise them to reject near-degenerate input earlier.

use serde::{Deserialize, Serialize};

/// Minimum `sqrt(a² + b²)` of a side line before normalisation.
pub const LINE_NORM_EPS: f64 = f64::EPSILON;
/// `|w|` of a vanishing point below which the two sides are image-parallel.
pub const PARALLEL_EPS: f64 = f64::EPSILON;
/// Minimum Euclidean norm of the horizon line `V1 × V2`.
pub const HORIZON_EPS: f64 = f64::EPSILON;
/// `|w|` of a rectified corner below which it lies at infinity.
pub const DIVISION_EPS: f64 = f64::EPSILON;
/// Minimum averaged rectified width.
pub const WIDTH_EPS: f64 = f64::EPSILON;
/// Minimum averaged rectified height.
pub const HEIGHT_EPS: f64 = f64::EPSILON;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RectifyOptions {
    pub line_eps: f64,
    pub parallel_eps: f64,
    pub horizon_eps: f64,
    pub division_eps: f64,
    pub width_eps: f64,
    pub height_eps: f64,
}

impl Default for RectifyOptions {
    fn default() -> Self {
        Self {
            line_eps: LINE_NORM_EPS,
            parallel_eps: PARALLEL_EPS,
            horizon_eps: HORIZON_EPS,
            division_eps: DIVISION_EPS,
            width_eps: WIDTH_EPS,
            height_eps: HEIGHT_EPS,
        }
    }
}
