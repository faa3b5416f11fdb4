//! Canned usage report used by the "load sample" action

use super::report::{AppUsage, Session, UsageReport};

/// Sample report text placed into the input verbatim.
pub const SAMPLE_REPORT_JSON: &str = r#"{
  "date": "2025-11-28",
  "total_screen_time_minutes": 540,
  "apps": [
    { "name": "VS Code", "category": "productivity", "minutes": 240 },
    { "name": "Chrome", "category": "productivity", "minutes": 120 },
    { "name": "Instagram", "category": "social", "minutes": 90 },
    { "name": "YouTube", "category": "entertainment", "minutes": 60 },
    { "name": "Slack", "category": "productivity", "minutes": 30 }
  ],
  "sessions": [
    { "start_hour": 9, "end_hour": 12, "minutes": 180 },
    { "start_hour": 14, "end_hour": 18, "minutes": 240 },
    { "start_hour": 22, "end_hour": 23, "minutes": 60 }
  ]
}"#;

/// Typed form of [`SAMPLE_REPORT_JSON`].
pub fn sample_report() -> UsageReport {
    let app = |name: &str, category: &str, minutes: f64| AppUsage {
        name: name.to_string(),
        category: category.to_string(),
        minutes,
    };
    let session = |start_hour, end_hour, minutes| Session { start_hour, end_hour, minutes };

    UsageReport {
        date: Some("2025-11-28".to_string()),
        total_screen_time_minutes: 540.0,
        apps: vec![
            app("VS Code", "productivity", 240.0),
            app("Chrome", "productivity", 120.0),
            app("Instagram", "social", 90.0),
            app("YouTube", "entertainment", 60.0),
            app("Slack", "productivity", 30.0),
        ],
        sessions: vec![session(9, 12, 180.0), session(14, 18, 240.0), session(22, 23, 60.0)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_text_matches_typed_sample() {
        let parsed: UsageReport = serde_json::from_str(SAMPLE_REPORT_JSON).unwrap();
        assert_eq!(parsed, sample_report());
    }

    #[test]
    fn sample_has_expected_shape() {
        let report = sample_report();
        assert_eq!(report.total_screen_time_minutes, 540.0);
        assert_eq!(report.apps.len(), 5);
        assert_eq!(report.sessions.len(), 3);
    }
}
