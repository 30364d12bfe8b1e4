//! Application-wide constants
//!
//! Defaults shared by the query codec, the API client, and the console
//! binary. Constants are grouped by their purpose.

// =============================================================================
// REMOTE API DEFAULTS
// =============================================================================

/// Default base URL of the remote users API
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3001";

/// Default request timeout in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Users collection path on the remote API
pub const USERS_PATH: &str = "/api/users";

// =============================================================================
// PAGINATION DEFAULTS
// =============================================================================

/// Default page number (1-indexed)
pub const DEFAULT_PAGE: u32 = 1;

/// Default page size
pub const DEFAULT_LIMIT: u32 = 10;

/// Page sizes the console offers
pub const LIMIT_CHOICES: &[u32] = &[10, 25, 50, 100];

/// Pages shown on either side of the current page in the page-link row
pub const PAGE_WINDOW: u32 = 2;

// =============================================================================
// WIRE FORMATS
// =============================================================================

/// Format for date-valued fields in query strings and request bodies
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Query parameter keys
pub mod params {
    pub const SEARCH: &str = "search";
    pub const NAME: &str = "name";
    pub const EMAIL: &str = "email";
    pub const COUNTRY: &str = "country";
    pub const FROM_DATE: &str = "fromDate";
    pub const TO_DATE: &str = "toDate";
    pub const PAGE: &str = "page";
    pub const LIMIT: &str = "limit";
    pub const SORT_BY: &str = "sortBy";
    pub const SORT_ORDER: &str = "sortOrder";
}

// =============================================================================
// VALIDATION
// =============================================================================

/// Maximum accepted age in years
pub const MAX_AGE_YEARS: u32 = 120;
