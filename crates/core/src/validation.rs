//! Shallow validation of user-supplied report text
//!
//! Only the presence of the three top-level fields is checked. Element shapes
//! inside `apps` and `sessions` are left to the analysis service.

use serde_json::Value;
use tracing::debug;
use wellscope_domain::{ReportError, ReportPayload, Result};

/// Top-level fields a report must carry, each with a truthy value.
pub const REQUIRED_FIELDS: [&str; 3] = ["total_screen_time_minutes", "apps", "sessions"];

/// Parse raw input text and validate it into a submittable payload.
///
/// # Errors
/// `ReportError::Parse` if the text is not JSON, `ReportError::Validation` if
/// any required field is absent or falsy.
pub fn parse_report(text: &str) -> Result<ReportPayload> {
    let value: Value = serde_json::from_str(text).map_err(|e| {
        debug!(error = %e, "report text is not valid JSON");
        ReportError::Parse(e.to_string())
    })?;

    validate(&value)?;
    Ok(ReportPayload::new(value))
}

/// Check that every required field is present and truthy.
///
/// A zero `total_screen_time_minutes` counts as missing. The error never says
/// which field failed.
///
/// # Errors
/// `ReportError::Validation` when any field is absent or falsy.
pub fn validate(value: &Value) -> Result<()> {
    let missing = REQUIRED_FIELDS
        .iter()
        .filter(|field| !value.get(**field).is_some_and(is_truthy))
        .count();

    if missing == 0 {
        Ok(())
    } else {
        debug!(missing, "report is missing required fields");
        Err(ReportError::Validation)
    }
}

/// Loose truthiness: `null`, `false`, `0` and `""` are falsy; arrays and
/// objects are truthy even when empty.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
