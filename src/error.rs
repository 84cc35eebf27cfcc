use crate::types::{Side, SidePair};
use serde::Serialize;
use thiserror::Error;

/// Fatal outcomes of the rectification pipeline. No ratio is produced.
#[derive(Clone, Copy, Debug, Error, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RectifyError {
    #[error("expected exactly 4 corners, got {count}")]
    InvalidInput { count: usize },
    #[error("side {side} has coincident endpoints (|(a, b)| = {magnitude:e})")]
    DegenerateGeometry { side: Side, magnitude: f64 },
    #[error("vanishing points are coincident or degenerate (|l_inf| = {norm:e}); cannot compute horizon line")]
    DegenerateVanishingPoints { norm: f64 },
    #[error("corner {corner} maps to infinity under the rectifying transform (w = {w:e})")]
    PointAtInfinity { corner: usize, w: f64 },
    #[error("only {valid} of 4 corners survived perspective division")]
    IncompleteTransform { valid: usize },
    #[error("rectified width is close to zero ({width:e})")]
    DegenerateWidth { width: f64 },
    #[error("rectified height is close to zero ({height:e})")]
    DegenerateHeight { height: f64 },
}

/// Non-fatal conditions reported alongside a computed ratio.
#[derive(Clone, Copy, Debug, Error, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RectifyWarning {
    #[error(
        "{pair} sides are parallel in the image (|w| = {w:e}); the view may be affine or degenerate"
    )]
    ParallelSides { pair: SidePair, w: f64 },
}
