//! The query string as shared state
//!
//! The URL query string is the single source of truth for filter, sort,
//! and page state. Controllers reach it through an injectable store so an
//! address bar, a saved view, or an in-memory cell can back it
//! interchangeably.

use std::sync::Mutex;

/// Shared read/write access to the current query string
pub trait QueryStore: Send + Sync {
    /// Current query string (no leading `?`)
    fn read(&self) -> String;

    /// Replace the query string. Completes before any fetch that depends
    /// on it is issued, so a reload reconstructs identical state.
    fn write(&self, query: &str);
}

/// In-memory store used by tests and the headless console
#[derive(Debug, Default)]
pub struct MemoryQueryStore {
    query: Mutex<String>,
}

impl MemoryQueryStore {
    pub fn new(initial: &str) -> Self {
        MemoryQueryStore {
            query: Mutex::new(initial.trim_start_matches('?').to_string()),
        }
    }
}

impl QueryStore for MemoryQueryStore {
    fn read(&self) -> String {
        self.query.lock().map(|q| q.clone()).unwrap_or_default()
    }

    fn write(&self, query: &str) {
        if let Ok(mut current) = self.query.lock() {
            *current = query.to_string();
        }
    }
}
