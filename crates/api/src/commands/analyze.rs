//! `wellscope analyze`

use std::io::{Read, Write};
use std::time::Instant;

use anyhow::Context;
use wellscope_core::ReportSurface;
use wellscope_domain::{AnalysisResult, Result};

use super::ReportSource;
use crate::context::AppContext;
use crate::utils::logging::log_command_execution;

/// Load the report text for `source` into the input.
///
/// # Errors
/// Fails when the file or stdin cannot be read.
pub fn load_input<W: Write + Send + 'static>(
    context: &AppContext<W>,
    source: &ReportSource,
) -> anyhow::Result<()> {
    match source {
        ReportSource::Sample => context.controller.load_sample(),
        ReportSource::Stdin => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text).context("failed to read report from stdin")?;
            context.surface.set_input_text(&text);
        }
        ReportSource::File(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read report file {}", path.display()))?;
            context.surface.set_input_text(&text);
        }
    }
    Ok(())
}

/// Analyze whatever is in the input and draw the report.
///
/// Waits for the score animation to finish before ending the score line.
///
/// # Errors
/// Any validation, transport or service error. The error banner has already
/// been drawn when this returns.
pub async fn run<W: Write + Send + 'static>(context: &AppContext<W>) -> Result<AnalysisResult> {
    let started = Instant::now();
    let outcome = context.controller.analyze().await;
    log_command_execution("analyze", started.elapsed(), outcome.as_ref().map(|_| ()));

    let result = outcome?;

    let tick = context.config.display.tick();
    while context.controller.renderer().is_animating() {
        tokio::time::sleep(tick).await;
    }
    context.surface.finish();

    Ok(result)
}
