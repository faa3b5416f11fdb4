//! Conversions from external infrastructure errors into domain errors.

use std::io::Error as IoError;

use reqwest::Error as HttpError;
use wellscope_domain::ReportError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub ReportError);

impl From<InfraError> for ReportError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<ReportError> for InfraError {
    fn from(value: ReportError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoReportError {
    fn into_report_error(self) -> ReportError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → ReportError */
/* -------------------------------------------------------------------------- */

impl IntoReportError for HttpError {
    fn into_report_error(self) -> ReportError {
        if self.is_timeout() {
            return ReportError::Network("HTTP request timed out".into());
        }

        #[cfg(not(target_arch = "wasm32"))]
        if self.is_connect() {
            return ReportError::Network("HTTP connection failure".into());
        }

        if let Some(status) = self.status() {
            return ReportError::Service { status: status.as_u16(), detail: None };
        }

        if self.is_decode() {
            return ReportError::Format(format!("undecodable response body: {self}"));
        }

        if self.is_builder() {
            return ReportError::Config(format!("invalid HTTP request: {self}"));
        }

        ReportError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_report_error())
    }
}

/* -------------------------------------------------------------------------- */
/* config parsing and I/O → ReportError */
/* -------------------------------------------------------------------------- */

impl IntoReportError for IoError {
    fn into_report_error(self) -> ReportError {
        ReportError::Config(format!("I/O failure: {self}"))
    }
}

impl From<IoError> for InfraError {
    fn from(value: IoError) -> Self {
        InfraError(value.into_report_error())
    }
}

impl IntoReportError for toml::de::Error {
    fn into_report_error(self) -> ReportError {
        ReportError::Config(format!("Invalid TOML format: {}", self.message()))
    }
}

impl From<toml::de::Error> for InfraError {
    fn from(value: toml::de::Error) -> Self {
        InfraError(value.into_report_error())
    }
}

impl IntoReportError for serde_json::Error {
    fn into_report_error(self) -> ReportError {
        ReportError::Config(format!("Invalid JSON format: {self}"))
    }
}

impl From<serde_json::Error> for InfraError {
    fn from(value: serde_json::Error) -> Self {
        InfraError(value.into_report_error())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
