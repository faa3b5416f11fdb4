//! Scripted `AnalysisService` double

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;
use wellscope_core::AnalysisService;
use wellscope_domain::{AnalysisResult, ReportError, ReportPayload, Result};

/// Replays queued responses in order and records every payload it receives.
///
/// When the queue is empty the last response is repeated.
#[derive(Default)]
pub struct MockAnalysisService {
    responses: Mutex<VecDeque<Result<AnalysisResult>>>,
    last: Mutex<Option<Result<AnalysisResult>>>,
    received: Mutex<Vec<Value>>,
    calls: AtomicUsize,
    delay: Option<Duration>,
}

impl MockAnalysisService {
    pub fn returning(result: AnalysisResult) -> Self {
        Self::default().then(Ok(result))
    }

    pub fn failing(error: ReportError) -> Self {
        Self::default().then(Err(error))
    }

    /// Queue one more response.
    pub fn then(self, response: Result<AnalysisResult>) -> Self {
        self.responses.lock().push_back(response);
        self
    }

    /// Wait this long before answering each request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn received(&self) -> Vec<Value> {
        self.received.lock().clone()
    }
}

#[async_trait]
impl AnalysisService for MockAnalysisService {
    async fn analyze(&self, payload: &ReportPayload) -> Result<AnalysisResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.received.lock().push(payload.as_value().clone());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let next = self.responses.lock().pop_front();
        let response = match next {
            Some(response) => {
                *self.last.lock() = Some(response.clone());
                response
            }
            None => self
                .last
                .lock()
                .clone()
                .unwrap_or_else(|| Err(ReportError::Internal("no scripted response".into()))),
        };
        response
    }
}
