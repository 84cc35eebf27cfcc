use crate::types::Pt2;
use nalgebra::{Matrix3, Vector3};

/// Result of mapping one homogeneous point through a 3×3 projective matrix.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Projected {
    Finite(Pt2),
    /// `|w|` fell below the division threshold.
    AtInfinity { w: f64 },
    /// Division produced NaN or an infinite coordinate.
    NonFinite,
}

/// Maps `p` through `h` and performs the perspective division.
pub fn apply_homography_point(h: &Matrix3<f64>, p: &Vector3<f64>, eps: f64) -> Projected {
    let v = h * p;
    let w = v[2];
    if !w.is_finite() {
        return Projected::NonFinite;
    }
    if w.abs() < eps {
        return Projected::AtInfinity { w };
    }
    let x = v[0] / w;
    let y = v[1] / w;
    if !x.is_finite() || !y.is_finite() {
        return Projected::NonFinite;
    }
    Projected::Finite(Pt2::new(x, y))
}

/// Maps every point of `pts` through `h`. Returns `None` as soon as one of
/// them cannot be brought back to a finite image position.
pub fn apply_homography_points(h: &Matrix3<f64>, pts: &[Pt2], eps: f64) -> Option<Vec<Pt2>> {
    let mut out = Vec::with_capacity(pts.len());
    for p in pts {
        match apply_homography_point(h, &p.to_homogeneous(), eps) {
            Projected::Finite(q) => out.push(q),
            _ => return None,
        }
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_keeps_points() {
        let pts = [Pt2::new(3.0, 4.0), Pt2::new(-2.5, 10.0)];
        let out = apply_homography_points(&Matrix3::identity(), &pts, f64::EPSILON).unwrap();
        assert_eq!(out, pts.to_vec());
    }

    #[test]
    fn division_by_w() {
        let h = Matrix3::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 2.0);
        match apply_homography_point(&h, &Vector3::new(4.0, 6.0, 1.0), f64::EPSILON) {
            Projected::Finite(p) => assert_eq!(p, Pt2::new(2.0, 3.0)),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn point_on_vanishing_line_goes_to_infinity() {
        // Third row (0, 1, -5): every point with y = 5 maps to w = 0.
        let h = Matrix3::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, -5.0);
        let r = apply_homography_point(&h, &Vector3::new(2.0, 5.0, 1.0), f64::EPSILON);
        assert!(matches!(r, Projected::AtInfinity { .. }));
        assert!(apply_homography_points(&h, &[Pt2::new(2.0, 5.0)], f64::EPSILON).is_none());
    }

    #[test]
    fn nan_is_reported_as_non_finite() {
        let r = apply_homography_point(
            &Matrix3::identity(),
            &Vector3::new(f64::NAN, 1.0, 1.0),
            f64::EPSILON,
        );
        assert_eq!(r, Projected::NonFinite);
    }
}
