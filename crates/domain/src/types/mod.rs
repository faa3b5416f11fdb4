//! Domain types and models
//!
//! Request side ([`report`]) and response side ([`analysis`]) of the single
//! exchange with the analysis service.

pub mod analysis;
pub mod report;
pub mod sample;

pub use analysis::{AnalysisResult, Breakdown, Dimension, SummaryMetrics};
pub use report::{AppUsage, ReportPayload, Session, UsageReport};
pub use sample::{sample_report, SAMPLE_REPORT_JSON};
