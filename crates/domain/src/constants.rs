//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Analysis service
pub const DEFAULT_SERVICE_URL: &str = "http://localhost:5000";
pub const ANALYZE_PATH: &str = "/analyze";
pub const HEALTH_PATH: &str = "/health";

// User-facing messages
pub const INVALID_JSON_MESSAGE: &str = "Invalid JSON format.";
pub const MISSING_FIELDS_MESSAGE: &str =
    "Missing required fields: total_screen_time_minutes, apps, sessions";
pub const SERVICE_HINT: &str = "Make sure the analysis service is running.";
pub const NO_PATTERNS_PLACEHOLDER: &str = "No significant patterns detected";

// Trigger affordance labels
pub const ANALYZE_LABEL: &str = "Analyze";
pub const ANALYZING_LABEL: &str = "Analyzing...";

// Animation timings
pub const ANIMATION_TICK_MS: u64 = 16; // ~one frame
pub const SCORE_ANIMATION_MS: u64 = 1000;
pub const TAG_STAGGER_MS: u64 = 100;

// Blank value for a breakdown dimension missing from the result
pub const MISSING_VALUE: &str = "-";
