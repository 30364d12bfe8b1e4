//! Filter state
//!
//! Owns the live filter values, keeps the query store in sync, and
//! notifies listeners. Every edit rewrites the store with the page reset
//! to 1: changing filters invalidates the current page's meaning.

use std::sync::Arc;

use tokio::sync::watch;

use crate::models::filters::{FilterField, FilterSet, FilterUpdate};
use crate::query;
use crate::store::QueryStore;

pub struct FilterState {
    store: Arc<dyn QueryStore>,
    tx: watch::Sender<FilterSet>,
}

impl FilterState {
    /// Hydrate from the store once, before the first fetch is issued, so a
    /// bookmarked or shared query is reflected immediately.
    pub fn hydrate(store: Arc<dyn QueryStore>) -> Self {
        let (filters, _) = query::decode(&store.read());
        let (tx, _) = watch::channel(filters);
        FilterState { store, tx }
    }

    /// Current filter values
    pub fn filters(&self) -> FilterSet {
        self.tx.borrow().clone()
    }

    /// Subscribe to filter changes
    pub fn subscribe(&self) -> watch::Receiver<FilterSet> {
        self.tx.subscribe()
    }

    /// Replace a single field
    pub fn set_filter(&self, update: FilterUpdate) {
        let mut filters = self.filters();
        filters.apply(update);
        self.commit(filters);
    }

    /// Reset one field to its empty default
    pub fn clear_filter(&self, field: FilterField) {
        let mut filters = self.filters();
        filters.clear(field);
        self.commit(filters);
    }

    /// Reset every field in one notification; listeners never observe a
    /// partially cleared set.
    pub fn clear_all(&self) {
        self.commit(FilterSet::default());
    }

    /// Write the store first, then notify, so a listener that reacts by
    /// fetching reads fully consistent state.
    fn commit(&self, filters: FilterSet) {
        let (_, mut pagination) = query::decode(&self.store.read());
        pagination.page = 1;
        self.store.write(&query::encode(&filters, &pagination));
        self.tx.send_replace(filters);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::pagination::{SortColumn, SortOrder};
    use crate::store::MemoryQueryStore;

    fn state_with(query: &str) -> (FilterState, Arc<MemoryQueryStore>) {
        let store = Arc::new(MemoryQueryStore::new(query));
        (FilterState::hydrate(store.clone()), store)
    }

    #[test]
    fn test_hydrate_reads_bookmarked_query() {
        let (state, _) = state_with("search=jane&country=Norway&page=4");
        let filters = state.filters();
        assert_eq!(filters.search, "jane");
        assert_eq!(filters.country, "Norway");
        assert_eq!(filters.active_filter_count(), 2);
    }

    #[test]
    fn test_set_filter_resets_page_and_keeps_sort() {
        let (state, store) = state_with("page=5&limit=25&sortBy=email&sortOrder=ASC");

        state.set_filter(FilterUpdate::Search("jane".to_string()));

        let (filters, pagination) = query::decode(&store.read());
        assert_eq!(filters.search, "jane");
        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.limit, 25);
        assert_eq!(pagination.sort_by, SortColumn::Email);
        assert_eq!(pagination.sort_order, SortOrder::Asc);
    }

    #[test]
    fn test_clear_filter_rewrites_store() {
        let (state, store) = state_with("search=jane&name=doe");

        state.clear_filter(FilterField::Search);

        let (filters, _) = query::decode(&store.read());
        assert_eq!(filters.search, "");
        assert_eq!(filters.name, "doe");
    }

    #[test]
    fn test_clear_all_is_idempotent() {
        let (state, store) = state_with("search=jane&country=Norway&fromDate=2024-01-01&page=3");

        state.clear_all();
        let after_first = (state.filters(), store.read());

        state.clear_all();
        let after_second = (state.filters(), store.read());

        assert_eq!(after_first, after_second);
        assert_eq!(state.filters(), FilterSet::default());

        let (_, pagination) = query::decode(&store.read());
        assert_eq!(pagination.page, 1);
    }

    #[tokio::test]
    async fn test_subscribers_see_single_clear_all_state() {
        let (state, _) = state_with("search=jane&country=Norway");
        let mut rx = state.subscribe();

        state.clear_all();

        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), FilterSet::default());
        // no further intermediate states were emitted
        assert!(!rx.has_changed().unwrap());
    }
}
