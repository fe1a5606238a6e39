// Shared test helpers: a resolver backend with canned answers.
//
// The backend records every query it is asked, so tests can assert that no
// resolver call happened.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use lookup::{LookupBackend, LookupError, Query, Record};

/// Backend that returns a fixed answer, optionally after a delay.
pub struct FakeBackend {
    answer: Result<Vec<Record>, LookupError>,
    delay: Option<Duration>,
    calls: Mutex<Vec<Query>>,
}

impl FakeBackend {
    /// Answers every query with `records`.
    pub fn with_records(records: Vec<Record>) -> Self {
        Self {
            answer: Ok(records),
            delay: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Fails every query with `error`.
    #[allow(dead_code)] // Used by other test files
    pub fn failing(error: LookupError) -> Self {
        Self {
            answer: Err(error),
            delay: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Sleeps for `delay` before answering.
    #[allow(dead_code)] // Used by other test files
    pub fn slow(delay: Duration) -> Self {
        Self {
            answer: Ok(Vec::new()),
            delay: Some(delay),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Queries received so far.
    pub fn calls(&self) -> Vec<Query> {
        self.calls.lock().expect("calls lock poisoned").clone()
    }
}

#[async_trait]
impl LookupBackend for FakeBackend {
    async fn resolve(&self, query: &Query) -> Result<Vec<Record>, LookupError> {
        self.calls
            .lock()
            .expect("calls lock poisoned")
            .push(query.clone());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.answer.clone()
    }
}

/// Output written by a test run, as text.
#[allow(dead_code)] // Used by other test files
pub fn output_text(out: Vec<u8>) -> String {
    String::from_utf8(out).expect("output is utf-8")
}
