use nalgebra::{Matrix3, Rotation2};
use quad_aspect::homography::apply_homography_points;
use quad_aspect::Pt2;

/// Corners of an axis-aligned `width`×`height` rectangle anchored at `origin`,
/// in clockwise image order starting top-left.
pub fn rectangle(origin: (f64, f64), width: f64, height: f64) -> Vec<Pt2> {
    assert!(width > 0.0 && height > 0.0, "rectangle sides must be positive");
    let (x0, y0) = origin;
    vec![
        Pt2::new(x0, y0),
        Pt2::new(x0 + width, y0),
        Pt2::new(x0 + width, y0 + height),
        Pt2::new(x0, y0 + height),
    ]
}

/// Homography `Rot(angle) · [1 0 0; 0 1 0; g1 g2 1]`: a pure projective
/// skew followed by a rotation about the origin.
pub fn skew_then_rotate(g1: f64, g2: f64, angle_rad: f64) -> Matrix3<f64> {
    let skew = Matrix3::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0, g1, g2, 1.0);
    let rot = Rotation2::new(angle_rad).to_homogeneous();
    rot * skew
}

/// Images `corners` through `h`; panics if a corner leaves the finite plane.
pub fn view(h: &Matrix3<f64>, corners: &[Pt2]) -> Vec<Pt2> {
    apply_homography_points(h, corners, 1e-9).expect("corner mapped to infinity")
}

pub fn approx(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}
