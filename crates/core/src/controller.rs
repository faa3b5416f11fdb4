//! UI controller
//!
//! Wires the two user actions (load sample, analyze) to validation, the
//! analysis service and the renderer, and owns the idle/busy/error state.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, info, warn};
use wellscope_domain::{AnalysisResult, ReportError, Result, SAMPLE_REPORT_JSON};

use crate::ports::{AnalysisService, ReportSurface, TriggerState};
use crate::render::ResultRenderer;
use crate::validation::parse_report;

/// Controller state as seen by the user.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UiState {
    #[default]
    Idle,
    /// A request is outstanding; the trigger is disabled.
    Busy,
    /// The last attempt failed with this banner message.
    Error(String),
}

/// Drives one report surface.
pub struct ReportController {
    service: Arc<dyn AnalysisService>,
    surface: Arc<dyn ReportSurface>,
    renderer: ResultRenderer,
    state: Mutex<UiState>,
}

impl ReportController {
    pub fn new(
        service: Arc<dyn AnalysisService>,
        surface: Arc<dyn ReportSurface>,
        renderer: ResultRenderer,
    ) -> Self {
        Self { service, surface, renderer, state: Mutex::new(UiState::Idle) }
    }

    pub fn state(&self) -> UiState {
        self.state.lock().clone()
    }

    pub fn renderer(&self) -> &ResultRenderer {
        &self.renderer
    }

    /// Put the canned sample report into the input.
    ///
    /// Clears a displayed error. An outstanding request is left alone.
    pub fn load_sample(&self) {
        self.surface.set_input_text(SAMPLE_REPORT_JSON);

        let mut state = self.state.lock();
        if matches!(*state, UiState::Error(_)) {
            self.surface.clear_error();
            *state = UiState::Idle;
        }
        debug!("sample report loaded");
    }

    /// Validate the input, submit it and render the result.
    ///
    /// On failure the error banner shows the user message and the state moves
    /// to [`UiState::Error`]. The trigger is restored to idle whatever the
    /// outcome.
    ///
    /// # Errors
    /// `ReportError::Busy` when a request is already outstanding (nothing is
    /// changed), otherwise whatever validation or the service returned.
    pub async fn analyze(&self) -> Result<AnalysisResult> {
        {
            let mut state = self.state.lock();
            if *state == UiState::Busy {
                debug!("analyze refused while a request is outstanding");
                return Err(ReportError::Busy);
            }
            *state = UiState::Busy;
        }

        self.surface.clear_error();
        self.surface.set_trigger(TriggerState::Busy);
        let _guard = IdleGuard { controller: self };

        match self.submit().await {
            Ok(result) => {
                self.renderer.render(&result);
                info!(score = result.overall_score, "analysis rendered");
                Ok(result)
            }
            Err(err) => {
                let message = err.user_message();
                if err.is_input_error() {
                    info!(error_type = err.label(), error = %err, "report input rejected");
                } else {
                    warn!(error_type = err.label(), error = %err, "analysis attempt failed");
                }
                self.surface.show_error(&message);
                *self.state.lock() = UiState::Error(message);
                Err(err)
            }
        }
    }

    async fn submit(&self) -> Result<AnalysisResult> {
        let payload = parse_report(&self.surface.input_text())?;
        self.service.analyze(&payload).await
    }
}

/// Restores the idle trigger when an attempt ends, including on
/// cancellation of the `analyze` future.
struct IdleGuard<'a> {
    controller: &'a ReportController,
}

impl Drop for IdleGuard<'_> {
    fn drop(&mut self) {
        self.controller.surface.set_trigger(TriggerState::Idle);
        let mut state = self.controller.state.lock();
        if *state == UiState::Busy {
            *state = UiState::Idle;
        }
    }
}
