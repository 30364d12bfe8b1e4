//! Userdesk - client core for a user-management console
//!
//! This library implements the state-synchronization core of a console
//! that manages user records through a remote REST API: the bidirectional
//! mapping between a URL-style query string, in-memory
//! filter/sort/pagination state, and API request construction, plus the
//! refresh and error-recovery flow around mutations.
//!
//! # Architecture
//!
//! - **Query codec**: total encode/decode between the query string and
//!   structured state
//! - **Store**: the query string as an injectable single source of truth
//! - **Client**: typed REST client with a uniform error taxonomy
//! - **Controllers**: filter state, list fetch lifecycle (last request
//!   wins), and mutations with field-level error mapping

pub mod client;
pub mod config;
pub mod constants;
pub mod controllers;
pub mod error;
pub mod models;
pub mod query;
pub mod store;
pub mod utils;

// Re-export commonly used types
pub use client::{ApiClient, UserPage, UsersApi};
pub use config::Config;
pub use error::{ApiError, ApiResult};
pub use store::{MemoryQueryStore, QueryStore};
