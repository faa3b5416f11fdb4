//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{INVALID_JSON_MESSAGE, MISSING_FIELDS_MESSAGE, SERVICE_HINT};

/// Main error type for Wellscope
///
/// Every failure of an analysis attempt maps onto one of these variants. The
/// user-facing wording comes from [`ReportError::user_message`].
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum ReportError {
    /// Input text is not valid JSON. The payload keeps the parser detail for
    /// logs; the display text is fixed.
    #[error("Invalid JSON format.")]
    Parse(String),

    #[error("{}", MISSING_FIELDS_MESSAGE)]
    Validation,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Service error: HTTP {status}{}", detail_suffix(.detail))]
    Service { status: u16, detail: Option<String> },

    #[error("Format error: {0}")]
    Format(String),

    #[error("An analysis is already in progress")]
    Busy,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ReportError {
    /// Text shown in the error banner.
    ///
    /// Input errors are shown verbatim. Transport and service failures get a
    /// prompt to check that the analysis service is running.
    pub fn user_message(&self) -> String {
        match self {
            Self::Parse(_) => INVALID_JSON_MESSAGE.to_string(),
            Self::Validation => MISSING_FIELDS_MESSAGE.to_string(),
            Self::Network(_) | Self::Service { .. } | Self::Format(_) => {
                format!("Error analyzing data: {self}. {SERVICE_HINT}")
            }
            Self::Busy | Self::Config(_) | Self::Internal(_) => self.to_string(),
        }
    }

    /// Stable label suitable for structured logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Parse(_) => "parse",
            Self::Validation => "validation",
            Self::Network(_) => "network",
            Self::Service { .. } => "service",
            Self::Format(_) => "format",
            Self::Busy => "busy",
            Self::Config(_) => "config",
            Self::Internal(_) => "internal",
        }
    }

    /// Whether the failure happened before any request left the client.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::Parse(_) | Self::Validation)
    }
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail.as_deref().map(|d| format!(" ({d})")).unwrap_or_default()
}

/// Result type alias for Wellscope operations
pub type Result<T> = std::result::Result<T, ReportError>;
