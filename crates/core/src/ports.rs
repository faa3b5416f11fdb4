//! Port interfaces for the report client
//!
//! These traits define the boundaries between the presentation logic and
//! its two collaborators: the remote analysis service and the display
//! surface the report is drawn on.

use std::time::Duration;

use async_trait::async_trait;
use wellscope_domain::{AnalysisResult, ReportPayload, Result};

use crate::render::ScoreTier;

/// Trait for submitting a usage report to the analysis service
#[async_trait]
pub trait AnalysisService: Send + Sync {
    /// Submit one report and wait for its analysis.
    ///
    /// # Errors
    /// `ReportError::Network` when the service cannot be reached,
    /// `ReportError::Service` for a non-success status, and
    /// `ReportError::Format` when the response body is not an analysis result.
    async fn analyze(&self, payload: &ReportPayload) -> Result<AnalysisResult>;
}

/// List-like display regions of the results surface.
///
/// The score and status live in their own fields (see
/// [`ReportSurface::write_score`] and [`ReportSurface::set_status`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Breakdown,
    Tags,
    Patterns,
    Insight,
    Metrics,
}

/// One entry inside a display region.
#[derive(Debug, Clone, PartialEq)]
pub enum RegionItem {
    /// Labelled value in a grid (breakdown and metrics).
    Stat { label: String, value: String },
    /// Tag chip, revealed after the given delay.
    Chip { text: String, reveal_after: Duration },
    /// List entry (patterns).
    Entry(String),
    /// Block of prose (insight).
    Prose(String),
}

/// State of the analyze trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerState {
    /// Enabled, showing the idle label.
    Idle,
    /// Disabled, showing the in-progress label.
    Busy,
}

/// Render context the controller and renderer draw on.
///
/// Injected once at startup. Implementations own all display state;
/// the core never holds references to individual display elements.
pub trait ReportSurface: Send + Sync {
    /// Current contents of the report input.
    fn input_text(&self) -> String;

    /// Replace the contents of the report input.
    fn set_input_text(&self, text: &str);

    fn set_trigger(&self, state: TriggerState);

    /// Show the error banner with the given message.
    fn show_error(&self, message: &str);

    /// Hide the error banner.
    fn clear_error(&self);

    /// Remove every item from a region.
    fn clear_region(&self, region: Region);

    /// Append one item to a region.
    fn push_item(&self, region: Region, item: RegionItem);

    /// Write the displayed score text.
    fn write_score(&self, text: &str);

    fn set_status(&self, tier: ScoreTier);

    /// Make the results surface visible and bring it into view.
    fn reveal_report(&self);
}
