//! End-to-end analyze flow: sample report → stub service → terminal output.

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use serde_json::json;
use wellscope_core::{Region, RegionItem, ScoreTier, UiState};
use wellscope_domain::{Config, ReportError, ServiceConfig};
use wellscope_lib::commands::{analyze, health};
use wellscope_lib::{AppContext, ReportSource};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Cloneable in-memory writer so the test can read what was drawn.
#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().clone()).unwrap()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn stub_result() -> serde_json::Value {
    json!({
        "overall_score": 85,
        "breakdown": {
            "screen_time": 70,
            "diversity": 100,
            "timing": 85,
            "balance": 90,
            "breaks": 100
        },
        "tags": ["balanced", "productive"],
        "patterns": [],
        "llm_insight": "Your wellness score of 85/100 reflects strong digital habits.",
        "metrics": {
            "total_screen_time_hours": 9,
            "app_count": 5,
            "session_count": 3
        }
    })
}

fn context_for(server: &MockServer) -> (AppContext<SharedBuffer>, SharedBuffer) {
    let buffer = SharedBuffer::default();
    let config = Config {
        service: ServiceConfig { base_url: server.uri(), timeout_secs: Some(5) },
        ..Config::default()
    };
    let context = AppContext::new(config, buffer.clone(), false).expect("context");
    (context, buffer)
}

fn stat(label: &str, value: &str) -> RegionItem {
    RegionItem::Stat { label: label.into(), value: value.into() }
}

#[tokio::test]
async fn sample_report_end_to_end() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(ResponseTemplate::new(200).set_body_json(stub_result()))
        .expect(1)
        .mount(&server)
        .await;

    let (context, buffer) = context_for(&server);
    analyze::load_input(&context, &ReportSource::Sample).unwrap();
    let result = analyze::run(&context).await.expect("analysis");

    assert_eq!(result.overall_score, 85.0);
    assert_eq!(context.controller.state(), UiState::Idle);

    let snapshot = context.surface.snapshot();
    assert_eq!(snapshot.score.as_deref(), Some("85"));
    assert_eq!(snapshot.status, Some(ScoreTier::Excellent));
    assert_eq!(
        snapshot.region(Region::Metrics),
        &[stat("Screen Time", "9h"), stat("Apps Used", "5"), stat("Sessions", "3")]
    );
    assert_eq!(
        snapshot.region(Region::Patterns),
        &[RegionItem::Entry("No significant patterns detected".into())]
    );

    let text = buffer.text();
    assert!(text.contains("Digital Wellbeing Report"));
    assert!(text.contains("  [balanced] [productive]\n"));
    assert!(text.ends_with("85 / 100  Excellent\n"));

    // The sample went over the wire untouched
    let requests = server.received_requests().await.unwrap();
    let sent: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(sent["date"], "2025-11-28");
    assert_eq!(sent["sessions"].as_array().map(Vec::len), Some(3));
}

#[tokio::test]
async fn invalid_file_never_contacts_service() {
    let server = MockServer::start().await;
    Mock::given(method("POST")).respond_with(ResponseTemplate::new(200)).expect(0).mount(&server).await;

    let dir = tempfile::TempDir::new().unwrap();
    let file = dir.path().join("report.json");
    std::fs::write(&file, r#"{"total_screen_time_minutes": 0, "apps": [], "sessions": []}"#).unwrap();

    let (context, buffer) = context_for(&server);
    analyze::load_input(&context, &ReportSource::File(file)).unwrap();
    let err = analyze::run(&context).await.unwrap_err();

    assert_eq!(err, ReportError::Validation);
    assert_eq!(
        buffer.text(),
        "Error: Missing required fields: total_screen_time_minutes, apps, sessions\n"
    );
    assert!(!context.surface.snapshot().revealed);
}

#[tokio::test]
async fn service_failure_draws_banner_and_restores_trigger() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let (context, buffer) = context_for(&server);
    analyze::load_input(&context, &ReportSource::Sample).unwrap();
    let err = analyze::run(&context).await.unwrap_err();

    assert_eq!(err, ReportError::Service { status: 500, detail: None });
    assert!(buffer.text().contains("HTTP 500"));
    assert!(buffer.text().contains("Make sure the analysis service is running."));
    assert_eq!(context.surface.snapshot().trigger_label(), "Analyze");
}

#[tokio::test]
async fn missing_file_is_reported_before_analysis() {
    let server = MockServer::start().await;
    let (context, _buffer) = context_for(&server);

    let err = analyze::load_input(&context, &ReportSource::File("/nonexistent/day.json".into()))
        .unwrap_err();
    assert!(err.to_string().contains("/nonexistent/day.json"));
}

#[tokio::test]
async fn health_command_reflects_service_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "healthy"})))
        .mount(&server)
        .await;

    let (context, _buffer) = context_for(&server);
    assert!(health::check(&context).await.unwrap());
}

#[tokio::test]
async fn disabled_animation_writes_score_once() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(ResponseTemplate::new(200).set_body_json(stub_result()))
        .mount(&server)
        .await;

    let buffer = SharedBuffer::default();
    let mut config = Config::default();
    config.service.base_url = server.uri();
    config.display.animate = false;
    let context = AppContext::new(config, buffer.clone(), false).unwrap();

    analyze::load_input(&context, &ReportSource::Sample).unwrap();
    tokio::time::timeout(Duration::from_secs(5), analyze::run(&context))
        .await
        .expect("no animation to wait for")
        .unwrap();

    assert_eq!(buffer.text().matches("Wellness Score").count(), 1);
}
