use crate::diagnostics::TimingBreakdown;
use crate::error::RectifyError;
use crate::rectify::metric::SideLengths;
use crate::types::{AspectRatio, HomogeneousLine, Pt2, VanishingPair};
use nalgebra::{Matrix3, Vector3};
use serde::{Serialize, Serializer};

/// Result produced by [`Rectifier::process`](crate::Rectifier::process).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RectificationReport {
    pub corners: Vec<Pt2>,
    /// Recorded as given; it does not take part in the computation.
    pub principal_point: Pt2,
    #[serde(serialize_with = "serialize_outcome")]
    pub outcome: Result<AspectRatio, RectifyError>,
    pub trace: RectificationTrace,
}

impl RectificationReport {
    pub fn ratio(&self) -> Option<f64> {
        self.outcome.as_ref().ok().map(AspectRatio::value)
    }

    /// Single-line human readable summary.
    pub fn summary(&self) -> String {
        match &self.outcome {
            Ok(AspectRatio::Reliable { ratio }) => format!("aspect={ratio:.4}"),
            Ok(AspectRatio::Flagged { ratio, warnings }) => {
                format!("aspect={ratio:.4} ({} warning(s))", warnings.len())
            }
            Err(err) => format!("failed: {err}"),
        }
    }
}

/// Output of every stage the pipeline got through. Stages after a failure
/// stay `None`.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RectificationTrace {
    pub timings: TimingBreakdown,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side_lines: Option<[HomogeneousLine; 4]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vanishing_points: Option<VanishingPair>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizon: Option<Vector3<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform: Option<Matrix3<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rectified_corners: Option<[Pt2; 4]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side_lengths: Option<SideLengths>,
}

#[derive(Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
enum OutcomeRef<'a> {
    Success {
        #[serde(rename = "aspectRatio")]
        aspect_ratio: &'a AspectRatio,
    },
    Failure {
        error: &'a RectifyError,
        message: String,
    },
}

fn serialize_outcome<S: Serializer>(
    outcome: &Result<AspectRatio, RectifyError>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match outcome {
        Ok(aspect_ratio) => OutcomeRef::Success { aspect_ratio },
        Err(error) => OutcomeRef::Failure {
            error,
            message: error.to_string(),
        },
    }
    .serialize(serializer)
}
