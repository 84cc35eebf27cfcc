//! Diagnostics data model returned by [`Rectifier::process`](crate::Rectifier::process).
//!
//! `RectificationReport` bundles the outcome with a `RectificationTrace`
//! holding the intermediate geometry of each stage, so a failed or flagged
//! run can be inspected after the fact.

pub mod report;
pub mod timing;

pub use report::{RectificationReport, RectificationTrace};
pub use timing::{StageTiming, TimingBreakdown};
