//! Terminal implementation of [`ReportSurface`]
//!
//! Region contents are kept in memory and the whole report is drawn once
//! when it is revealed. The score is drawn last on a line of its own so
//! that animation ticks can rewrite it in place with a carriage return.

use std::collections::HashMap;
use std::io::Write;

use parking_lot::Mutex;
use tracing::{trace, warn};
use wellscope_core::{Accent, Region, RegionItem, ReportSurface, ScoreTier, TriggerState};
use wellscope_domain::constants::{ANALYZE_LABEL, ANALYZING_LABEL};

const REGION_ORDER: [(Region, &str); 5] = [
    (Region::Breakdown, "Score Breakdown"),
    (Region::Tags, "Tags"),
    (Region::Patterns, "Detected Patterns"),
    (Region::Insight, "Insight"),
    (Region::Metrics, "Quick Metrics"),
];

const LABEL_WIDTH: usize = 18;

/// Everything currently shown on a surface.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SurfaceSnapshot {
    pub input: String,
    pub trigger: Option<TriggerState>,
    pub error: Option<String>,
    pub regions: HashMap<Region, Vec<RegionItem>>,
    pub score: Option<String>,
    pub status: Option<ScoreTier>,
    pub revealed: bool,
}

impl SurfaceSnapshot {
    pub fn region(&self, region: Region) -> &[RegionItem] {
        self.regions.get(&region).map_or(&[][..], Vec::as_slice)
    }

    /// Label of the analyze trigger in its current state.
    pub fn trigger_label(&self) -> &'static str {
        match self.trigger {
            Some(TriggerState::Busy) => ANALYZING_LABEL,
            _ => ANALYZE_LABEL,
        }
    }
}

/// Draws the report to any writer, usually stdout.
pub struct TerminalSurface<W> {
    state: Mutex<SurfaceSnapshot>,
    out: Mutex<W>,
    color: bool,
}

impl<W: Write + Send> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        Self { state: Mutex::new(SurfaceSnapshot::default()), out: Mutex::new(out), color: false }
    }

    /// Enable ANSI colour for the status accent and error banner.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn snapshot(&self) -> SurfaceSnapshot {
        self.state.lock().clone()
    }

    /// End the live score line. Call once the score animation has finished.
    pub fn finish(&self) {
        if self.state.lock().revealed {
            self.emit("\n");
        }
    }

    /// Give back the writer.
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    fn emit(&self, text: &str) {
        let mut out = self.out.lock();
        if let Err(e) = out.write_all(text.as_bytes()).and_then(|()| out.flush()) {
            warn!(error = %e, "failed to write to terminal");
        }
    }

    fn paint(&self, text: &str, accent: Accent) -> String {
        if !self.color {
            return text.to_string();
        }
        let code = match accent {
            Accent::Green => 32,
            Accent::Blue => 34,
            Accent::Amber => 33,
            Accent::Red => 31,
        };
        format!("\x1b[1;{code}m{text}\x1b[0m")
    }

    fn score_line(&self, state: &SurfaceSnapshot) -> String {
        let score = state.score.as_deref().unwrap_or("0");
        let status = state
            .status
            .map(|tier| format!("  {}", self.paint(tier.label(), tier.accent())))
            .unwrap_or_default();
        format!("\rWellness Score    {score:>5} / 100{status}")
    }

    fn draw_report(&self, state: &SurfaceSnapshot) -> String {
        let mut text = String::from("\nDigital Wellbeing Report\n========================\n");

        for (region, title) in REGION_ORDER {
            text.push_str(&format!("\n{title}\n"));
            let items = state.region(region);
            if region == Region::Tags {
                let chips: Vec<String> = items
                    .iter()
                    .filter_map(|item| match item {
                        RegionItem::Chip { text, .. } => Some(format!("[{text}]")),
                        _ => None,
                    })
                    .collect();
                if !chips.is_empty() {
                    text.push_str(&format!("  {}\n", chips.join(" ")));
                }
                continue;
            }
            for item in items {
                text.push_str(&draw_item(item));
            }
        }

        text.push('\n');
        text.push_str(&self.score_line(state));
        text
    }
}

fn draw_item(item: &RegionItem) -> String {
    match item {
        RegionItem::Stat { label, value } => format!("  {label:<LABEL_WIDTH$}{value}\n"),
        RegionItem::Chip { text, .. } => format!("  [{text}]\n"),
        RegionItem::Entry(text) => format!("  - {text}\n"),
        RegionItem::Prose(text) => format!("  {text}\n"),
    }
}

impl<W: Write + Send> ReportSurface for TerminalSurface<W> {
    fn input_text(&self) -> String {
        self.state.lock().input.clone()
    }

    fn set_input_text(&self, text: &str) {
        self.state.lock().input = text.to_string();
    }

    fn set_trigger(&self, trigger: TriggerState) {
        let mut state = self.state.lock();
        state.trigger = Some(trigger);
        trace!(label = state.trigger_label(), "trigger updated");
    }

    fn show_error(&self, message: &str) {
        self.state.lock().error = Some(message.to_string());
        let banner = self.paint(&format!("Error: {message}"), Accent::Red);
        self.emit(&format!("{banner}\n"));
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
        let line = {
            let mut state = self.state.lock();
            state.score = Some(text.to_string());
            state.revealed.then(|| self.score_line(&state))
        };
        if let Some(line) = line {
            self.emit(&line);
        }
    }

    fn set_status(&self, tier: ScoreTier) {
        self.state.lock().status = Some(tier);
    }

    fn reveal_report(&self) {
        let report = {
            let mut state = self.state.lock();
            state.revealed = true;
            self.draw_report(&state)
        };
        self.emit(&report);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn stat(label: &str, value: &str) -> RegionItem {
        RegionItem::Stat { label: label.into(), value: value.into() }
    }

    fn output(surface: TerminalSurface<Vec<u8>>) -> String {
        String::from_utf8(surface.into_inner()).unwrap()
    }

    #[test]
    fn nothing_is_drawn_before_reveal() {
        let surface = TerminalSurface::new(Vec::<u8>::new());
        surface.push_item(Region::Metrics, stat("Apps Used", "5"));
        surface.write_score("42");

        assert!(!surface.snapshot().revealed);
        assert_eq!(output(surface), "");
    }

    #[test]
    fn reveal_draws_regions_in_order_then_score() {
        let surface = TerminalSurface::new(Vec::<u8>::new());
        surface.push_item(Region::Metrics, stat("Sessions", "3"));
        surface.push_item(Region::Breakdown, stat("Screen Time", "70"));
        surface.push_item(
            Region::Tags,
            RegionItem::Chip { text: "balanced".into(), reveal_after: Duration::ZERO },
        );
        surface.push_item(Region::Patterns, RegionItem::Entry("Late night usage".into()));
        surface.push_item(Region::Insight, RegionItem::Prose("Keep it up.".into()));
        surface.set_status(ScoreTier::Excellent);
        surface.reveal_report();
        surface.write_score("85");
        surface.finish();

        let text = output(surface);
        let breakdown = text.find("Score Breakdown").unwrap();
        let metrics = text.find("Quick Metrics").unwrap();
        assert!(breakdown < metrics);
        assert!(text.contains("  [balanced]\n"));
        assert!(text.contains("  - Late night usage\n"));
        assert!(text.contains("  Sessions          3\n"));
        assert!(text.ends_with("\rWellness Score       85 / 100  Excellent\n"));
    }

    #[test]
    fn clear_region_drops_previous_items() {
        let surface = TerminalSurface::new(Vec::<u8>::new());
        surface.push_item(Region::Patterns, RegionItem::Entry("old".into()));
        surface.clear_region(Region::Patterns);
        surface.push_item(Region::Patterns, RegionItem::Entry("new".into()));

        assert_eq!(
            surface.snapshot().region(Region::Patterns),
            &[RegionItem::Entry("new".into())]
        );
    }

    #[test]
    fn error_banner_is_written_and_tracked() {
        let surface = TerminalSurface::new(Vec::<u8>::new()).with_color(true);
        surface.show_error("Invalid JSON format.");
        assert_eq!(surface.snapshot().error.as_deref(), Some("Invalid JSON format."));

        surface.clear_error();
        assert_eq!(surface.snapshot().error, None);
        assert_eq!(output(surface), "\x1b[1;31mError: Invalid JSON format.\x1b[0m\n");
    }

    #[test]
    fn trigger_label_follows_state() {
        let surface = TerminalSurface::new(Vec::<u8>::new());
        assert_eq!(surface.snapshot().trigger_label(), "Analyze");

        surface.set_trigger(TriggerState::Busy);
        assert_eq!(surface.snapshot().trigger_label(), "Analyzing...");

        surface.set_trigger(TriggerState::Idle);
        assert_eq!(surface.snapshot().trigger_label(), "Analyze");
    }
}
