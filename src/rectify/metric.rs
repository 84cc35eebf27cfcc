use crate::error::RectifyError;
use crate::homography::{apply_homography_point, Projected};
use crate::types::{Pt2, Quad, RectifyingTransform};
use log::debug;
use nalgebra::distance;
use serde::Serialize;

/// Side lengths of the rectified quad.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SideLengths {
    /// |PT0 − PT1|
    pub width1: f64,
    /// |PT1 − PT2|
    pub height1: f64,
    /// |PT2 − PT3|
    pub width2: f64,
    /// |PT3 − PT0|
    pub height2: f64,
}

impl SideLengths {
    pub fn from_corners(pts: &[Pt2; 4]) -> Self {
        Self {
            width1: distance(&pts[0], &pts[1]),
            height1: distance(&pts[1], &pts[2]),
            width2: distance(&pts[2], &pts[3]),
            height2: distance(&pts[3], &pts[0]),
        }
    }

    pub fn avg_width(&self) -> f64 {
        (self.width1 + self.width2) / 2.0
    }

    pub fn avg_height(&self) -> f64 {
        (self.height1 + self.height2) / 2.0
    }

    /// `avg_width / avg_height`, strictly positive.
    ///
    /// A singular transform (horizon through the image origin) can fold a
    /// whole side onto one point, so the width is checked as well as the
    /// height.
    pub fn aspect_ratio(&self, width_eps: f64, height_eps: f64) -> Result<f64, RectifyError> {
        let width = self.avg_width();
        if width < width_eps {
            debug!("Rectify: averaged width {width:e} below {width_eps:e}");
            return Err(RectifyError::DegenerateWidth { width });
        }
        let height = self.avg_height();
        if height < height_eps {
            debug!("Rectify: averaged height {height:e} below {height_eps:e}");
            return Err(RectifyError::DegenerateHeight { height });
        }
        Ok(width / height)
    }
}

/// Maps the quad corners through the rectifying transform.
///
/// Any corner landing on the horizon is fatal. Corners whose division is not
/// finite are dropped, and the transform then counts as incomplete.
pub fn rectified_corners(
    transform: &RectifyingTransform,
    quad: &Quad,
    eps: f64,
) -> Result<[Pt2; 4], RectifyError> {
    let mut out = Vec::with_capacity(4);
    for (corner, p) in quad.homogeneous().iter().enumerate() {
        match apply_homography_point(&transform.hmtx, p, eps) {
            Projected::Finite(q) => out.push(q),
            Projected::AtInfinity { w } => {
                debug!("Rectify: corner {corner} maps to infinity (w={w:e})");
                return Err(RectifyError::PointAtInfinity { corner, w });
            }
            Projected::NonFinite => debug!("Rectify: corner {corner} is not finite after division"),
        }
    }
    let valid = out.len();
    out.try_into()
        .map_err(|_| RectifyError::IncompleteTransform { valid })
}
