//! Result renderer
//!
//! Maps an [`AnalysisResult`] onto the display regions of a
//! [`ReportSurface`]. Each region function clears its region before writing,
//! so rendering a second result never leaves entries from the first one.

pub mod format;
pub mod tier;

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};
use wellscope_domain::constants::{MISSING_VALUE, NO_PATTERNS_PLACEHOLDER};
use wellscope_domain::{AnalysisResult, Breakdown, Dimension, DisplayConfig, SummaryMetrics};

pub use self::tier::{Accent, ScoreTier};
use self::format::format_number;
use crate::animation::{NumericAnimator, NumericField};
use crate::ports::{Region, RegionItem, ReportSurface};

/// Timing knobs for the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSettings {
    /// How long the score takes to count up from zero.
    pub score_duration: Duration,
    /// Delay added per tag position before its chip is revealed.
    pub tag_stagger: Duration,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self::from(&DisplayConfig::default())
    }
}

impl From<&DisplayConfig> for RenderSettings {
    fn from(display: &DisplayConfig) -> Self {
        Self { score_duration: display.score_animation(), tag_stagger: display.tag_stagger() }
    }
}

/// The score display of a surface, as an animation target.
pub struct ScoreField {
    surface: Arc<dyn ReportSurface>,
}

impl ScoreField {
    pub const KEY: &'static str = "overall-score";

    pub fn new(surface: Arc<dyn ReportSurface>) -> Self {
        Self { surface }
    }
}

impl NumericField for ScoreField {
    fn field_key(&self) -> &'static str {
        Self::KEY
    }

    fn write(&self, text: &str) {
        self.surface.write_score(text);
    }
}

/// Renders analysis results onto a surface.
pub struct ResultRenderer {
    surface: Arc<dyn ReportSurface>,
    score_field: Arc<ScoreField>,
    animator: NumericAnimator,
    settings: RenderSettings,
}

impl ResultRenderer {
    pub fn new(
        surface: Arc<dyn ReportSurface>,
        animator: NumericAnimator,
        settings: RenderSettings,
    ) -> Self {
        let score_field = Arc::new(ScoreField::new(surface.clone()));
        Self { surface, score_field, animator, settings }
    }

    /// Populate every region from `result`, then reveal the report.
    pub fn render(&self, result: &AnalysisResult) {
        debug!(
            score = result.overall_score,
            tags = result.tags.len(),
            patterns = result.patterns.len(),
            "rendering analysis result"
        );

        self.render_score(result.overall_score);
        self.render_breakdown(&result.breakdown);
        self.render_tags(&result.tags);
        self.render_patterns(&result.patterns);
        self.render_insight(&result.llm_insight);
        self.render_metrics(&result.metrics);
        self.surface.reveal_report();
    }

    /// Set the status tier, then count the score up from zero.
    ///
    /// The tier goes first so that a score written without animation is
    /// never shown next to the previous result's tier.
    pub fn render_score(&self, score: f64) {
        self.surface.set_status(ScoreTier::from_score(score));
        self.animator.animate(self.score_field.clone(), 0.0, score, self.settings.score_duration);
    }

    /// One stat per dimension, always in [`Dimension::ALL`] order.
    pub fn render_breakdown(&self, breakdown: &Breakdown) {
        for key in breakdown.unknown_keys() {
            warn!(key, "ignoring breakdown key outside the known dimensions");
        }

        for dimension in breakdown.missing_dimensions() {
            warn!(dimension = dimension.key(), "breakdown is missing a dimension");
        }

        self.surface.clear_region(Region::Breakdown);
        for dimension in Dimension::ALL {
            let value = breakdown
                .score(dimension)
                .map_or_else(|| MISSING_VALUE.to_string(), format_number);
            self.surface.push_item(
                Region::Breakdown,
                RegionItem::Stat { label: dimension.label().to_string(), value },
            );
        }
    }

    pub fn render_tags(&self, tags: &[String]) {
        self.surface.clear_region(Region::Tags);
        for (position, tag) in tags.iter().enumerate() {
            let position = u32::try_from(position).unwrap_or(u32::MAX);
            let reveal_after = self.settings.tag_stagger.saturating_mul(position);
            self.surface
                .push_item(Region::Tags, RegionItem::Chip { text: tag.clone(), reveal_after });
        }
    }

    /// Patterns in order, or a single placeholder entry when there are none.
    pub fn render_patterns(&self, patterns: &[String]) {
        self.surface.clear_region(Region::Patterns);
        if patterns.is_empty() {
            self.surface
                .push_item(Region::Patterns, RegionItem::Entry(NO_PATTERNS_PLACEHOLDER.to_string()));
            return;
        }
        for pattern in patterns {
            self.surface.push_item(Region::Patterns, RegionItem::Entry(pattern.clone()));
        }
    }

    pub fn render_insight(&self, insight: &str) {
        self.surface.clear_region(Region::Insight);
        self.surface.push_item(Region::Insight, RegionItem::Prose(insight.to_string()));
    }

    pub fn render_metrics(&self, metrics: &SummaryMetrics) {
        let entries = [
            ("Screen Time", format!("{}h", format_number(metrics.total_screen_time_hours))),
            ("Apps Used", metrics.app_count.to_string()),
            ("Sessions", metrics.session_count.to_string()),
        ];

        self.surface.clear_region(Region::Metrics);
        for (label, value) in entries {
            self.surface
                .push_item(Region::Metrics, RegionItem::Stat { label: label.to_string(), value });
        }
    }

    /// Whether the score is still counting up.
    pub fn is_animating(&self) -> bool {
        self.animator.is_animating(ScoreField::KEY)
    }
}
