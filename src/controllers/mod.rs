//! Controllers orchestrating fetches and mutations

pub mod filters;
pub mod list;
pub mod mutation;

pub use filters::FilterState;
pub use list::{FetchTrigger, ListController, ListPhase, ListState};
pub use mutation::MutationController;
