//! Shared test helpers for `wellscope-core` integration tests.
//!
//! In-memory doubles for the two ports plus canned analysis results, so the
//! flow tests can focus on behaviour instead of wiring.

#![allow(dead_code)]

pub mod service;
pub mod surface;

use std::sync::Arc;

use serde_json::json;
use wellscope_core::{NumericAnimator, RenderSettings, ReportController, ResultRenderer};
use wellscope_domain::AnalysisResult;

pub use service::MockAnalysisService;
pub use surface::RecordingSurface;

/// Analysis result matching what the service returns for the sample report.
pub fn sample_result() -> AnalysisResult {
    serde_json::from_value(json!({
        "overall_score": 85,
        "breakdown": {
            "screen_time": 70,
            "diversity": 100,
            "timing": 85,
            "balance": 90,
            "breaks": 100
        },
        "tags": ["balanced", "focused"],
        "patterns": [],
        "llm_insight": "Your wellness score of 85/100 reflects strong digital habits.",
        "metrics": {
            "total_screen_time_hours": 9,
            "app_count": 5,
            "session_count": 3
        }
    }))
    .expect("valid analysis fixture")
}

/// A weaker result with different content in every region.
pub fn concerning_result() -> AnalysisResult {
    serde_json::from_value(json!({
        "overall_score": 32.46,
        "breakdown": {
            "screen_time": 20,
            "diversity": 45.5,
            "timing": 30,
            "balance": 25,
            "breaks": 40
        },
        "tags": ["heavy-user"],
        "patterns": ["Late night usage detected in 2 session(s)", "Long sessions without breaks"],
        "llm_insight": "Consider scheduling screen-free evenings.",
        "metrics": {
            "total_screen_time_hours": 13.5,
            "app_count": 2,
            "session_count": 6
        }
    }))
    .expect("valid analysis fixture")
}

/// Controller wired to the given doubles with default timings.
pub fn controller(
    service: Arc<MockAnalysisService>,
    surface: Arc<RecordingSurface>,
) -> ReportController {
    let renderer =
        ResultRenderer::new(surface.clone(), NumericAnimator::default(), RenderSettings::default());
    ReportController::new(service, surface, renderer)
}
