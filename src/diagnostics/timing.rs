use serde::{Deserialize, Serialize};

/// Wall-clock time of one rectifier stage (`lines`, `vanishing_points`,
/// `horizon` or `metric`).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

impl StageTiming {
    pub fn new(label: impl Into<String>, elapsed_ms: f64) -> Self {
        Self {
            label: label.into(),
            elapsed_ms,
        }
    }
}

/// Per-quad timing recorded by [`Rectifier::process`](crate::Rectifier::process).
///
/// `total_ms` also covers corner validation, which has no stage entry.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    pub fn push(&mut self, label: impl Into<String>, elapsed_ms: f64) {
        self.stages.push(StageTiming::new(label, elapsed_ms));
    }

    /// Timing of the named rectifier stage, if that stage ran.
    pub fn stage(&self, label: &str) -> Option<&StageTiming> {
        self.stages.iter().find(|s| s.label == label)
    }
}
