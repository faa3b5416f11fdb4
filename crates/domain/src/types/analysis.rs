//! Analysis result returned by the analysis service

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::impl_wire_key_enum;

/// Scored, annotated output of the analysis service.
///
/// Consumed opaquely: the client never recomputes or cross-checks any of
/// these values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub overall_score: f64,
    pub breakdown: Breakdown,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub patterns: Vec<String>,
    #[serde(default)]
    pub llm_insight: String,
    pub metrics: SummaryMetrics,
}

/// Quick summary figures shown alongside the score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryMetrics {
    pub total_screen_time_hours: f64,
    pub app_count: u32,
    pub session_count: u32,
}

/// The five scored dimensions the analysis service reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Dimension {
    ScreenTime,
    Diversity,
    Timing,
    Balance,
    Breaks,
}

impl_wire_key_enum!(Dimension {
    ScreenTime => "screen_time",
    Diversity => "diversity",
    Timing => "timing",
    Balance => "balance",
    Breaks => "breaks",
});

impl Dimension {
    /// Human-readable label for the breakdown grid.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::ScreenTime => "Screen Time",
            Self::Diversity => "App Diversity",
            Self::Timing => "Usage Timing",
            Self::Balance => "Category Balance",
            Self::Breaks => "Break Patterns",
        }
    }
}

/// Per-dimension scores keyed by wire key.
///
/// Kept as a raw map so that a payload with extra or missing keys still
/// deserializes; the renderer decides what to do with either case.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Breakdown(BTreeMap<String, f64>);

impl Breakdown {
    /// Score for a known dimension, if the service sent one.
    pub fn score(&self, dimension: Dimension) -> Option<f64> {
        self.0.get(dimension.key()).copied()
    }

    /// Keys that do not exactly match a [`Dimension`] wire key.
    ///
    /// Matching is case-sensitive, like [`Breakdown::score`], so a key that
    /// differs only in case is reported here rather than silently dropped.
    pub fn unknown_keys(&self) -> impl Iterator<Item = &str> {
        self.0
            .keys()
            .map(String::as_str)
            .filter(|key| !Dimension::ALL.iter().any(|dimension| dimension.key() == *key))
    }

    /// Dimensions the service did not report.
    pub fn missing_dimensions(&self) -> impl Iterator<Item = Dimension> + '_ {
        Dimension::ALL.into_iter().filter(|dimension| self.score(*dimension).is_none())
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for Breakdown {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(key, value)| (key.into(), value)).collect())
    }
}
