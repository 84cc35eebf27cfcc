//! Aspect-ratio recovery of a perspective-distorted rectangle.
//!
//! Overview
//! - `lines`: homogeneous side lines `L01`, `L12`, `L23`, `L30` through
//!   consecutive corners, normalised by `sqrt(a² + b²)`.
//! - `vp`: vanishing points `V1 = L01 × L23` and `V2 = L12 × L30`. Points at
//!   infinity (image-parallel sides) are flagged and the pipeline continues.
//! - `horizon`: `L∞ = V1 × V2` normalised to unit length, installed as the
//!   third row of an otherwise identity matrix `H`.
//! - `metric`: corners mapped through `H`, opposite side lengths averaged,
//!   `width / height` returned.
//!
//! Notes
//! - `H` sends the observed horizon to the canonical line at infinity and so
//!   removes projective distortion only. Scale, shear and rotation of the
//!   affine remainder are not corrected.
//! - Every stage either hands a value to the next one or terminates the run
//!   with a [`RectifyError`]. Warnings do not terminate; they end up in
//!   [`AspectRatio::Flagged`].
//! - The principal point is accepted and recorded but not used. Centering
//!   the corners on it was considered and left out; the ratio produced by
//!   this method does not depend on it.

pub mod horizon;
pub mod lines;
pub mod metric;
pub mod options;
pub mod vp;

pub use metric::SideLengths;
pub use options::RectifyOptions;

use crate::diagnostics::{RectificationReport, RectificationTrace};
use crate::error::RectifyError;
use crate::types::{AspectRatio, Pt2, Quad};
use log::debug;
use rayon::prelude::*;
use std::time::Instant;

/// Four-stage rectifier with configurable degeneracy thresholds.
///
/// Holds no state between calls; one instance may be shared across threads.
#[derive(Clone, Debug, Default)]
pub struct Rectifier {
    pub options: RectifyOptions,
}

impl Rectifier {
    pub fn new(options: RectifyOptions) -> Self {
        Self { options }
    }

    /// Aspect ratio of the rectangle imaged as `points`.
    ///
    /// `points` must hold exactly four consecutive corners. `principal_point`
    /// is accepted for interface stability and ignored by the geometry.
    pub fn compute(
        &self,
        points: &[Pt2],
        principal_point: Pt2,
    ) -> Result<AspectRatio, RectifyError> {
        let mut trace = RectificationTrace::default();
        self.run(points, principal_point, &mut trace)
    }

    /// Same as [`compute`](Self::compute), additionally recording the output
    /// and timing of every stage that ran.
    pub fn process(&self, points: &[Pt2], principal_point: Pt2) -> RectificationReport {
        let t0 = Instant::now();
        let mut trace = RectificationTrace::default();
        let outcome = self.run(points, principal_point, &mut trace);
        trace.timings.total_ms = t0.elapsed().as_secs_f64() * 1000.0;
        RectificationReport {
            corners: points.to_vec(),
            principal_point,
            outcome,
            trace,
        }
    }

    /// Processes independent quads in parallel. Reports keep the input order.
    pub fn process_batch<Q>(&self, quads: &[Q], principal_point: Pt2) -> Vec<RectificationReport>
    where
        Q: AsRef<[Pt2]> + Sync,
    {
        quads
            .par_iter()
            .map(|q| self.process(q.as_ref(), principal_point))
            .collect()
    }

    fn run(
        &self,
        points: &[Pt2],
        _principal_point: Pt2,
        trace: &mut RectificationTrace,
    ) -> Result<AspectRatio, RectifyError> {
        let opts = &self.options;
        let quad = Quad::from_points(points)?;

        let t = Instant::now();
        let side_lines = lines::side_lines(&quad, opts.line_eps)?;
        trace.side_lines = Some(side_lines);
        trace.timings.push("lines", elapsed_ms(t));

        let t = Instant::now();
        let (pair, warnings) = vp::solve_vanishing_points(&side_lines, opts.parallel_eps);
        trace.vanishing_points = Some(pair);
        trace.timings.push("vanishing_points", elapsed_ms(t));

        let t = Instant::now();
        let transform = horizon::rectifying_transform(&pair, opts.horizon_eps)?;
        trace.horizon = Some(transform.horizon());
        trace.transform = Some(transform.hmtx);
        trace.timings.push("horizon", elapsed_ms(t));

        let t = Instant::now();
        let corners = metric::rectified_corners(&transform, &quad, opts.division_eps)?;
        trace.rectified_corners = Some(corners);
        let lengths = SideLengths::from_corners(&corners);
        trace.side_lengths = Some(lengths);
        let ratio = lengths.aspect_ratio(opts.width_eps, opts.height_eps)?;
        trace.timings.push("metric", elapsed_ms(t));

        debug!(
            "Rectify: width={:.3} height={:.3} ratio={ratio:.6} warnings={}",
            lengths.avg_width(),
            lengths.avg_height(),
            warnings.len()
        );
        Ok(AspectRatio::new(ratio, warnings))
    }
}

fn elapsed_ms(t: Instant) -> f64 {
    t.elapsed().as_secs_f64() * 1000.0
}

/// Aspect ratio (width / height) of the rectangle imaged as `points`, using
/// the default thresholds.
///
/// Returns `Ok(AspectRatio::Flagged { .. })` when a ratio was computed but
/// some side pair is parallel in the image, and `Err` when no ratio exists.
pub fn compute_aspect_ratio(
    points: &[Pt2],
    principal_point: Pt2,
) -> Result<AspectRatio, RectifyError> {
    Rectifier::default().compute(points, principal_point)
}
