//! Domain models and DTOs

pub mod filters;
pub mod pagination;
pub mod user;

pub use filters::{FilterField, FilterSet, FilterUpdate};
pub use pagination::{PageInfo, PageItem, PaginationSpec, SortColumn, SortOrder};
pub use user::{UserDraft, UserPatch, UserRecord};
