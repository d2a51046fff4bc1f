//! In-memory mock implementation of the waitlist repository trait.

use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::{
    application::use_cases::waitlist::{StoreError, WaitlistRepo},
    domain::entities::waitlist_entry::{NewWaitlistEntry, WaitlistEntry},
};

/// In-memory implementation of WaitlistRepo for testing.
#[derive(Default)]
pub struct InMemoryWaitlistRepo {
    pub entries: Mutex<Vec<WaitlistEntry>>,
    schema_calls: AtomicUsize,
    failure: Option<String>,
}

impl InMemoryWaitlistRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repo whose inserts always fail with a non-uniqueness storage error.
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::default()
        }
    }

    /// Get all entries (for test assertions).
    pub fn get_all(&self) -> Vec<WaitlistEntry> {
        self.entries.lock().unwrap().clone()
    }

    pub fn schema_calls(&self) -> usize {
        self.schema_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WaitlistRepo for InMemoryWaitlistRepo {
    async fn ensure_schema(&self) -> Result<(), StoreError> {
        self.schema_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn insert(&self, entry: &NewWaitlistEntry) -> Result<WaitlistEntry, StoreError> {
        if let Some(message) = &self.failure {
            return Err(StoreError::Database(message.clone()));
        }

        let mut entries = self.entries.lock().unwrap();

        if entries.iter().any(|e| e.email_hash == entry.email_hash) {
            return Err(StoreError::Duplicate);
        }

        let id = entries.last().map_or(1, |e| e.id + 1);
        let saved = entry.clone().into_entry(id);
        entries.push(saved.clone());
        Ok(saved)
    }
}
