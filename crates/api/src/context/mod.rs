//! Application context - dependency injection container

use std::io::Write;
use std::sync::Arc;

use tracing::debug;
use wellscope_core::{NumericAnimator, RenderSettings, ReportController, ResultRenderer};
use wellscope_domain::{Config, Result};
use wellscope_infra::{HttpAnalysisClient, TerminalSurface};

/// Application context - holds all services and dependencies
pub struct AppContext<W: Write + Send + 'static> {
    pub config: Config,
    pub client: Arc<HttpAnalysisClient>,
    pub surface: Arc<TerminalSurface<W>>,
    pub controller: ReportController,
}

impl<W: Write + Send + 'static> AppContext<W> {
    /// Wire the analysis client, the terminal surface and the controller.
    ///
    /// # Errors
    /// `ReportError::Config` if the service URL is invalid or the HTTP
    /// client cannot be built.
    pub fn new(config: Config, out: W, color: bool) -> Result<Self> {
        let client = Arc::new(HttpAnalysisClient::new(&config.service)?);
        let surface = Arc::new(TerminalSurface::new(out).with_color(color));

        let renderer = ResultRenderer::new(
            surface.clone(),
            NumericAnimator::new(config.display.tick()),
            RenderSettings::from(&config.display),
        );
        let controller = ReportController::new(client.clone(), surface.clone(), renderer);

        debug!(url = %client.analyze_url(), animate = config.display.animate, "context initialized");

        Ok(Self { config, client, surface, controller })
    }
}
