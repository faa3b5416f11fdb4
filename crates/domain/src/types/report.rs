//! Usage report sent to the analysis service

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{ReportError, Result};

/// One day of device usage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageReport {
    /// Calendar day (`YYYY-MM-DD`); forwarded verbatim when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub total_screen_time_minutes: f64,
    pub apps: Vec<AppUsage>,
    pub sessions: Vec<Session>,
}

/// Minutes spent in one application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppUsage {
    pub name: String,
    pub category: String, // free-form: "productivity" | "social" | "entertainment" | ...
    pub minutes: f64,
}

/// A contiguous usage session, hours on a 0-23 clock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub start_hour: u8,
    pub end_hour: u8,
    pub minutes: f64,
}

impl UsageReport {
    /// Convert into the payload shape the analysis client sends.
    ///
    /// # Errors
    /// Returns `ReportError::Internal` if serialization fails.
    pub fn to_payload(&self) -> Result<ReportPayload> {
        serde_json::to_value(self)
            .map(ReportPayload::new)
            .map_err(|e| ReportError::Internal(format!("Failed to encode usage report: {e}")))
    }
}

/// The JSON object submitted to the analysis service.
///
/// Validation only checks that the three required fields are present, so the
/// payload carries the user's parsed JSON exactly as written, including any
/// extra fields, rather than a re-typed [`UsageReport`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ReportPayload(Value);

impl ReportPayload {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}
