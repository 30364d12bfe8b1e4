//! List controller
//!
//! Orchestrates the fetch lifecycle for the paginated, filtered, sorted
//! user collection: loading states, sort/page/limit mutators, and the
//! last-request-wins guard for overlapping fetches.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::client::{UserPage, UsersApi};
use crate::error::ApiError;
use crate::models::pagination::{PageInfo, SortColumn, SortOrder};
use crate::models::user::UserRecord;
use crate::query;
use crate::store::QueryStore;

/// What prompted a fetch. A manual refresh renders differently from a
/// first load of the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchTrigger {
    Load,
    Refresh,
}

/// Fetch lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListPhase {
    #[default]
    Idle,
    Loading,
    Refreshing,
    Loaded,
    Failed,
}

/// Snapshot of the list view state
#[derive(Debug, Clone, Default)]
pub struct ListState {
    pub phase: ListPhase,
    pub records: Vec<UserRecord>,
    pub page: Option<PageInfo>,
    pub error: Option<ApiError>,
}

pub struct ListController {
    api: Arc<dyn UsersApi>,
    store: Arc<dyn QueryStore>,
    seq: AtomicU64,
    state: Mutex<ListState>,
}

impl ListController {
    pub fn new(api: Arc<dyn UsersApi>, store: Arc<dyn QueryStore>) -> Self {
        ListController {
            api,
            store,
            seq: AtomicU64::new(0),
            state: Mutex::new(ListState::default()),
        }
    }

    /// Current view state
    pub fn state(&self) -> ListState {
        self.state.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Fetch the collection for the state currently encoded in the store.
    ///
    /// Any previous error is cleared up front. Only the most recently
    /// issued request may update the view; a superseded response is
    /// discarded on arrival, however late it lands.
    pub async fn fetch(&self, trigger: FetchTrigger) {
        let seq = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        let (filters, pagination) = query::decode(&self.store.read());

        if let Ok(mut state) = self.state.lock() {
            state.error = None;
            state.phase = match trigger {
                FetchTrigger::Refresh => ListPhase::Refreshing,
                FetchTrigger::Load => ListPhase::Loading,
            };
        }

        let outcome = self.api.list_users(&filters, &pagination).await;
        self.apply(seq, outcome);
    }

    /// Manual refresh of the current query
    pub async fn refresh(&self) {
        self.fetch(FetchTrigger::Refresh).await;
    }

    /// Toggle the order on the current sort column, or switch to a new
    /// column (newest first) and return to the first page.
    pub async fn change_sort(&self, column: SortColumn) {
        let (filters, mut pagination) = query::decode(&self.store.read());

        if pagination.sort_by == column {
            pagination.sort_order = pagination.sort_order.toggled();
        } else {
            pagination.sort_by = column;
            pagination.sort_order = SortOrder::Desc;
            pagination.page = 1;
        }

        self.store.write(&query::encode(&filters, &pagination));
        self.fetch(FetchTrigger::Load).await;
    }

    /// Navigate to `page`. Out-of-range requests are silently ignored.
    pub async fn change_page(&self, page: u32) {
        let total_pages = self
            .state
            .lock()
            .ok()
            .and_then(|state| state.page.as_ref().map(|p| p.total_pages))
            .unwrap_or(1);

        if page < 1 || page > total_pages {
            return;
        }

        let (filters, mut pagination) = query::decode(&self.store.read());
        pagination.page = page;

        self.store.write(&query::encode(&filters, &pagination));
        self.fetch(FetchTrigger::Load).await;
    }

    /// Change the page size. Prior page offsets are meaningless under a
    /// new size, so the page returns to 1.
    pub async fn change_limit(&self, limit: u32) {
        let (filters, mut pagination) = query::decode(&self.store.read());
        pagination.limit = limit;
        pagination.page = 1;

        self.store.write(&query::encode(&filters, &pagination));
        self.fetch(FetchTrigger::Load).await;
    }

    fn apply(&self, seq: u64, outcome: Result<UserPage, ApiError>) {
        if seq != self.seq.load(Ordering::SeqCst) {
            tracing::debug!(seq, "discarding superseded list response");
            return;
        }

        let Ok(mut state) = self.state.lock() else {
            return;
        };
        match outcome {
            Ok(page) => {
                state.records = page.users;
                state.page = Some(page.pagination);
                state.phase = ListPhase::Loaded;
            }
            Err(error) => {
                tracing::warn!(%error, "list fetch failed");
                state.records = Vec::new();
                state.page = None;
                state.error = Some(error);
                state.phase = ListPhase::Failed;
            }
        }
    }
}
