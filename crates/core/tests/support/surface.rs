//! In-memory `ReportSurface` double

use std::collections::HashMap;

use parking_lot::Mutex;
use wellscope_core::{Region, RegionItem, ReportSurface, ScoreTier, TriggerState};

#[derive(Debug, Default)]
struct SurfaceState {
    input: String,
    trigger: Option<TriggerState>,
    trigger_history: Vec<TriggerState>,
    error: Option<String>,
    regions: HashMap<Region, Vec<RegionItem>>,
    score_writes: Vec<String>,
    status: Option<ScoreTier>,
    reveals: usize,
}

/// Records everything drawn on it.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    state: Mutex<SurfaceState>,
}

impl RecordingSurface {
    pub fn with_input(text: &str) -> Self {
        let surface = Self::default();
        surface.state.lock().input = text.to_string();
        surface
    }

    pub fn input_text_snapshot(&self) -> String {
        self.state.lock().input.clone()
    }

    pub fn region(&self, region: Region) -> Vec<RegionItem> {
        self.state.lock().regions.get(&region).cloned().unwrap_or_default()
    }

    /// `(label, value)` pairs of a stat grid region.
    pub fn stats(&self, region: Region) -> Vec<(String, String)> {
        self.region(region)
            .into_iter()
            .filter_map(|item| match item {
                RegionItem::Stat { label, value } => Some((label, value)),
                _ => None,
            })
            .collect()
    }

    /// Text of every entry, chip or prose block in a region.
    pub fn texts(&self, region: Region) -> Vec<String> {
        self.region(region)
            .into_iter()
            .map(|item| match item {
                RegionItem::Stat { label, value } => format!("{label}: {value}"),
                RegionItem::Chip { text, .. } | RegionItem::Entry(text) | RegionItem::Prose(text) => {
                    text
                }
            })
            .collect()
    }

    pub fn score(&self) -> Option<String> {
        self.state.lock().score_writes.last().cloned()
    }

    pub fn score_writes(&self) -> Vec<String> {
        self.state.lock().score_writes.clone()
    }

    pub fn status(&self) -> Option<ScoreTier> {
        self.state.lock().status
    }

    pub fn error(&self) -> Option<String> {
        self.state.lock().error.clone()
    }

    pub fn trigger(&self) -> Option<TriggerState> {
        self.state.lock().trigger
    }

    pub fn trigger_history(&self) -> Vec<TriggerState> {
        self.state.lock().trigger_history.clone()
    }

    pub fn reveals(&self) -> usize {
        self.state.lock().reveals
    }
}

impl ReportSurface for RecordingSurface {
    fn input_text(&self) -> String {
        self.state.lock().input.clone()
    }

    fn set_input_text(&self, text: &str) {
        self.state.lock().input = text.to_string();
    }

    fn set_trigger(&self, trigger: TriggerState) {
        let mut state = self.state.lock();
        state.trigger = Some(trigger);
        state.trigger_history.push(trigger);
    }

    fn show_error(&self, message: &str) {
        self.state.lock().error = Some(message.to_string());
    }

    fn clear_error(&self) {
        self.state.lock().error = None;
    }

    fn clear_region(&self, region: Region) {
        self.state.lock().regions.remove(&region);
    }

    fn push_item(&self, region: Region, item: RegionItem) {
        self.state.lock().regions.entry(region).or_default().push(item);
    }

    fn write_score(&self, text: &str) {
        self.state.lock().score_writes.push(text.to_string());
    }

    fn set_status(&self, tier: ScoreTier) {
        self.state.lock().status = Some(tier);
    }

    fn reveal_report(&self) {
        self.state.lock().reveals += 1;
    }
}
