//! `wellscope health`

use std::io::Write;
use std::time::Instant;

use wellscope_domain::Result;

use crate::context::AppContext;
use crate::utils::logging::log_command_execution;

/// Check the analysis service health endpoint.
///
/// # Errors
/// `ReportError::Network` when the service is unreachable.
pub async fn check<W: Write + Send + 'static>(context: &AppContext<W>) -> Result<bool> {
    let started = Instant::now();
    let outcome = context.client.health_check().await;
    log_command_execution("health", started.elapsed(), outcome.as_ref().map(|_| ()));
    outcome
}
