#![doc = include_str!("../README.md")]

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod homography;
pub mod io;
pub mod rectify;
pub mod types;

// --- High-level re-exports -------------------------------------------------

pub use crate::diagnostics::{RectificationReport, RectificationTrace};
pub use crate::error::{RectifyError, RectifyWarning};
pub use crate::rectify::{compute_aspect_ratio, Rectifier, RectifyOptions};
pub use crate::types::{AspectRatio, Pt2, Quad};

/// Small prelude for quick experiments.
///
/// ```
/// use quad_aspect::prelude::*;
///
/// let quad = [
///     Pt2::new(0.0, 0.0),
///     Pt2::new(16.0, 0.0),
///     Pt2::new(16.0, 9.0),
///     Pt2::new(0.0, 9.0),
/// ];
/// let ratio = Rectifier::default().compute(&quad, Pt2::new(8.0, 4.5)).unwrap();
/// assert!((ratio.value() - 16.0 / 9.0).abs() < 1e-12);
/// ```
pub mod prelude {
    pub use crate::{AspectRatio, Pt2, Rectifier, RectifyError, RectifyOptions};
}
