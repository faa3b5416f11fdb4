//! HTTP adapter for the analysis service
//!
//! Sends the report as a JSON body to `{base_url}/analyze` and decodes the
//! scored result. Non-success statuses carry the service's `{"error": ...}`
//! detail when it sends one.

use async_trait::async_trait;
use reqwest::{Method, Response};
use serde::Deserialize;
use tracing::{debug, info, instrument, warn};
use url::Url;
use wellscope_core::AnalysisService;
use wellscope_domain::constants::{ANALYZE_PATH, HEALTH_PATH};
use wellscope_domain::{AnalysisResult, ReportError, ReportPayload, Result, ServiceConfig};

use crate::http::HttpClient;

const USER_AGENT: &str = concat!("wellscope/", env!("CARGO_PKG_VERSION"));

/// Error body returned by the service on failure.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Client for the remote analysis service.
#[derive(Debug, Clone)]
pub struct HttpAnalysisClient {
    http: HttpClient,
    analyze_url: Url,
    health_url: Url,
}

impl HttpAnalysisClient {
    /// Build a client for the service described by `config`.
    ///
    /// # Errors
    /// `ReportError::Config` when the base URL is not a valid http(s) URL.
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        let http = HttpClient::builder()
            .maybe_timeout(config.timeout())
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            http,
            analyze_url: endpoint(&config.base_url, ANALYZE_PATH)?,
            health_url: endpoint(&config.base_url, HEALTH_PATH)?,
        })
    }

    pub fn analyze_url(&self) -> &Url {
        &self.analyze_url
    }

    /// Probe the service health endpoint.
    ///
    /// Returns `true` on a success status and `false` on any other status.
    ///
    /// # Errors
    /// `ReportError::Network` when the service cannot be reached.
    #[instrument(skip(self), fields(url = %self.health_url))]
    pub async fn health_check(&self) -> Result<bool> {
        let response = self.http.send(self.http.request(Method::GET, self.health_url.clone())).await?;
        let status = response.status();

        if status.is_success() {
            info!(status = status.as_u16(), "analysis service is healthy");
            Ok(true)
        } else {
            warn!(status = status.as_u16(), "analysis service reported unhealthy");
            Ok(false)
        }
    }
}

#[async_trait]
impl AnalysisService for HttpAnalysisClient {
    #[instrument(skip(self, payload), fields(url = %self.analyze_url))]
    async fn analyze(&self, payload: &ReportPayload) -> Result<AnalysisResult> {
        debug!("POST analysis request");

        let request = self.http.request(Method::POST, self.analyze_url.clone()).json(payload);
        let response = self.http.send(request).await?;

        let status = response.status();
        if !status.is_success() {
            let err = status_error(response).await;
            warn!(error_type = err.label(), error = %err, "analysis request rejected");
            return Err(err);
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ReportError::Network(format!("failed to read response body: {e}")))?;

        let result: AnalysisResult = serde_json::from_slice(&body).map_err(|e| {
            warn!(error = %e, "analysis response did not match the expected shape");
            ReportError::Format(format!("unexpected response body: {e}"))
        })?;

        info!(score = result.overall_score, "analysis request successful");
        Ok(result)
    }
}

/// Classify a non-success response, keeping the service's error detail.
async fn status_error(response: Response) -> ReportError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    let detail = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .map(|body| body.error)
        .filter(|detail| !detail.is_empty());

    ReportError::Service { status, detail }
}

fn endpoint(base_url: &str, path: &str) -> Result<Url> {
    let joined = format!("{}{}", base_url.trim_end_matches('/'), path);
    let url = Url::parse(&joined)
        .map_err(|e| ReportError::Config(format!("Invalid service URL '{base_url}': {e}")))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ReportError::Config(format!(
            "Unsupported service URL scheme '{other}' in '{base_url}'"
        ))),
    }
}
