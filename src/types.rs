use crate::error::{RectifyError, RectifyWarning};
use nalgebra::{Matrix3, Point2, Vector3};
use serde::Serialize;
use std::fmt;

/// Pixel coordinate in the image plane.
pub type Pt2 = Point2<f64>;

/// One side of a [`Quad`], named after its bounding corners.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Side {
    P0P1,
    P1P2,
    P2P3,
    P3P0,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::P0P1, Side::P1P2, Side::P2P3, Side::P3P0];

    /// Corner indices bounding this side, in traversal order.
    pub fn corners(self) -> (usize, usize) {
        match self {
            Side::P0P1 => (0, 1),
            Side::P1P2 => (1, 2),
            Side::P2P3 => (2, 3),
            Side::P3P0 => (3, 0),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (a, b) = self.corners();
        write!(f, "P{a}P{b}")
    }
}

/// Pair of opposite sides assumed parallel in the real rectangle.
///
/// `Width` covers P0P1 and P2P3, `Height` covers P1P2 and P3P0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SidePair {
    Width,
    Height,
}

impl fmt::Display for SidePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SidePair::Width => f.write_str("width (P0P1/P2P3)"),
            SidePair::Height => f.write_str("height (P1P2/P3P0)"),
        }
    }
}

/// Four consecutive corners of a quadrilateral, either winding.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Quad {
    corners: [Pt2; 4],
}

impl Quad {
    pub fn new(corners: [Pt2; 4]) -> Self {
        Self { corners }
    }

    /// Builds a quad from an arbitrary point list, rejecting any length but 4.
    pub fn from_points(points: &[Pt2]) -> Result<Self, RectifyError> {
        let corners: [Pt2; 4] = points
            .try_into()
            .map_err(|_| RectifyError::InvalidInput { count: points.len() })?;
        Ok(Self { corners })
    }

    pub fn corners(&self) -> &[Pt2; 4] {
        &self.corners
    }

    /// Corners lifted to homogeneous coordinates (w = 1).
    pub fn homogeneous(&self) -> [Vector3<f64>; 4] {
        self.corners.map(|p| p.to_homogeneous())
    }

    /// Same quad with the corner order shifted left by `k` positions.
    pub fn rotated(&self, k: usize) -> Self {
        let mut corners = self.corners;
        corners.rotate_left(k % 4);
        Self { corners }
    }
}

impl TryFrom<&[Pt2]> for Quad {
    type Error = RectifyError;

    fn try_from(points: &[Pt2]) -> Result<Self, Self::Error> {
        Self::from_points(points)
    }
}

/// Line `a·x + b·y + c = 0` in homogeneous form.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct HomogeneousLine {
    pub coeffs: Vector3<f64>,
}

impl HomogeneousLine {
    /// Line through two homogeneous points (`p × q`).
    pub fn through(p: &Vector3<f64>, q: &Vector3<f64>) -> Self {
        Self { coeffs: p.cross(q) }
    }

    /// Magnitude of the `(a, b)` normal.
    pub fn normal_norm(&self) -> f64 {
        self.coeffs[0].hypot(self.coeffs[1])
    }

    /// Rescales so that `a² + b² = 1`. Returns `None` when the normal is
    /// shorter than `eps`, i.e. the line was built from coincident points.
    pub fn normalized(&self, eps: f64) -> Option<Self> {
        let n = self.normal_norm();
        if n < eps {
            return None;
        }
        Some(Self {
            coeffs: self.coeffs / n,
        })
    }

    /// Homogeneous intersection point (`self × other`).
    pub fn intersect(&self, other: &HomogeneousLine) -> Vector3<f64> {
        self.coeffs.cross(&other.coeffs)
    }

    /// Signed algebraic residual `a·x + b·y + c`; a distance for normalised lines.
    pub fn residual(&self, p: &Pt2) -> f64 {
        self.coeffs[0] * p.x + self.coeffs[1] * p.y + self.coeffs[2]
    }
}

/// Intersection of the images of two parallel sides.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct VanishingPoint {
    pub pos: Vector3<f64>,
    /// Set when `|w|` fell below the parallel threshold.
    pub at_infinity: bool,
}

impl VanishingPoint {
    /// Cartesian position, unless the point lies at infinity.
    pub fn finite(&self) -> Option<Pt2> {
        if self.at_infinity {
            None
        } else {
            Pt2::from_homogeneous(self.pos)
        }
    }
}

/// Vanishing points of the width and height side pairs.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct VanishingPair {
    pub width: VanishingPoint,
    pub height: VanishingPoint,
}

impl VanishingPair {
    /// One `ParallelSides` warning per vanishing point at infinity.
    pub fn warnings(&self) -> Vec<RectifyWarning> {
        [(SidePair::Width, &self.width), (SidePair::Height, &self.height)]
            .into_iter()
            .filter(|(_, vp)| vp.at_infinity)
            .map(|(pair, vp)| RectifyWarning::ParallelSides { pair, w: vp.pos[2] })
            .collect()
    }
}

/// Projective rectification `H = [1 0 0; 0 1 0; l1 l2 l3]`.
///
/// Sends the unit horizon line `(l1, l2, l3)` to the canonical line at
/// infinity. Only projective distortion is removed; the affine part stays.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RectifyingTransform {
    pub hmtx: Matrix3<f64>,
}

impl RectifyingTransform {
    pub fn from_horizon(horizon: &Vector3<f64>) -> Self {
        let mut hmtx = Matrix3::identity();
        hmtx.set_row(2, &horizon.transpose());
        Self { hmtx }
    }

    pub fn horizon(&self) -> Vector3<f64> {
        self.hmtx.row(2).transpose()
    }
}

/// Width/height of the rectified rectangle.
///
/// `Flagged` still carries a usable ratio, but one or more stages reported a
/// condition that makes it less trustworthy.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum AspectRatio {
    Reliable {
        ratio: f64,
    },
    Flagged {
        ratio: f64,
        warnings: Vec<RectifyWarning>,
    },
}

impl AspectRatio {
    pub fn new(ratio: f64, warnings: Vec<RectifyWarning>) -> Self {
        if warnings.is_empty() {
            AspectRatio::Reliable { ratio }
        } else {
            AspectRatio::Flagged { ratio, warnings }
        }
    }

    pub fn value(&self) -> f64 {
        match self {
            AspectRatio::Reliable { ratio } | AspectRatio::Flagged { ratio, .. } => *ratio,
        }
    }

    pub fn warnings(&self) -> &[RectifyWarning] {
        match self {
            AspectRatio::Reliable { .. } => &[],
            AspectRatio::Flagged { warnings, .. } => warnings,
        }
    }

    pub fn is_reliable(&self) -> bool {
        matches!(self, AspectRatio::Reliable { .. })
    }
}
