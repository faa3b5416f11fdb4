//! # Wellscope Core
//!
//! Pure presentation logic - no infrastructure dependencies.
//!
//! This crate contains:
//! - Input validation for usage reports
//! - The numeric animator driving the score display
//! - The result renderer mapping an analysis result onto display regions
//! - The UI controller owning the idle/busy/error state
//! - Port interfaces (traits) for the analysis service and the display
//!   surface
//!
//! ## Architecture Principles
//! - Only depends on `wellscope-common` and `wellscope-domain`
//! - No HTTP or terminal code
//! - All external dependencies via traits
//! - Pure, testable presentation logic

pub mod animation;
pub mod controller;
pub mod ports;
pub mod render;
pub mod validation;

// Re-export specific items to avoid ambiguity
pub use animation::{NumericAnimator, NumericField};
pub use controller::{ReportController, UiState};
pub use ports::{AnalysisService, Region, RegionItem, ReportSurface, TriggerState};
pub use render::{Accent, RenderSettings, ResultRenderer, ScoreField, ScoreTier};
pub use validation::{parse_report, validate, REQUIRED_FIELDS};
