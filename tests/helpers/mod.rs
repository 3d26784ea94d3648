//! Shared helpers for conversation-level tests
//!
//! Drives the dispatcher directly with plain text, the way the
//! polling loop does, with an in-memory result sink instead of the
//! CSV file.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};

use StudyBuddy::dispatcher::{Dispatcher, Inbound, Reply};
use StudyBuddy::models::AssessmentResult;
use StudyBuddy::state::SessionStore;
use StudyBuddy::storage::{NullEventLog, ResultSink};
use StudyBuddy::utils::errors::Result;

/// Result sink collecting records in memory.
#[derive(Default)]
pub struct MemorySink(Mutex<Vec<AssessmentResult>>);

impl MemorySink {
    pub fn records(&self) -> Vec<AssessmentResult> {
        self.0.lock().unwrap().clone()
    }
}

impl ResultSink for MemorySink {
    fn append(&self, record: &AssessmentResult) -> Result<()> {
        self.0.lock().unwrap().push(record.clone());
        Ok(())
    }
}

/// A dispatcher wired with test doubles, plus sending shorthand.
pub struct TestBot {
    dispatcher: Dispatcher,
    sink: Arc<MemorySink>,
}

impl TestBot {
    pub fn new() -> Self {
        let sink = Arc::new(MemorySink::default());
        let dispatcher = Dispatcher::new(
            SessionStore::default(),
            sink.clone(),
            Arc::new(NullEventLog),
        );
        Self { dispatcher, sink }
    }

    pub fn send(&mut self, user_id: i64, text: &str) -> Vec<Reply> {
        self.send_at(user_id, text, Utc::now())
    }

    pub fn send_at(&mut self, user_id: i64, text: &str, now: DateTime<Utc>) -> Vec<Reply> {
        self.dispatcher.handle(
            &Inbound {
                user_id,
                first_name: "سارا".to_string(),
                text: text.to_string(),
            },
            now,
        )
    }

    pub fn saved_results(&self) -> Vec<AssessmentResult> {
        self.sink.records()
    }

    pub fn store(&self) -> &SessionStore {
        self.dispatcher.store()
    }

    pub fn sweep(&mut self, now: DateTime<Utc>) -> usize {
        self.dispatcher.sweep(now)
    }
}

/// Last reply's text, for single-message assertions.
pub fn last_text(replies: &[Reply]) -> &str {
    &replies
        .last()
        .expect("expected at least one reply")
        .text
}
