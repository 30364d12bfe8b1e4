//! Query-string codec
//!
//! The bidirectional mapping between the URL query string and the
//! in-memory filter/sort/pagination state. The codec performs no
//! navigation itself; callers apply the encoded string to a
//! [`QueryStore`](crate::store::QueryStore).

use serde::Serialize;

use crate::constants::{params, LIMIT_CHOICES};
use crate::models::filters::FilterSet;
use crate::models::pagination::{PaginationSpec, SortColumn, SortOrder};
use crate::utils::time::{format_date, parse_date};

/// Query parameters as they appear on the wire. Only populated fields are
/// emitted; `page`, `limit`, `sortBy`, and `sortOrder` are always present.
#[derive(Debug, Serialize)]
struct RawQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    country: Option<String>,
    #[serde(rename = "fromDate", skip_serializing_if = "Option::is_none")]
    from_date: Option<String>,
    #[serde(rename = "toDate", skip_serializing_if = "Option::is_none")]
    to_date: Option<String>,
    page: u32,
    limit: u32,
    #[serde(rename = "sortBy")]
    sort_by: &'static str,
    #[serde(rename = "sortOrder")]
    sort_order: &'static str,
}

/// Decode a query string into filter and pagination state.
///
/// Each recognized key is read independently; missing or malformed values
/// fall back to the documented defaults, and malformed dates decode to
/// absent. A leading `?` is tolerated. Decoding never fails.
pub fn decode(query: &str) -> (FilterSet, PaginationSpec) {
    let trimmed = query.strip_prefix('?').unwrap_or(query);
    let pairs: Vec<(String, String)> = serde_urlencoded::from_str(trimmed).unwrap_or_default();

    let mut filters = FilterSet::default();
    let mut pagination = PaginationSpec::default();

    for (key, value) in pairs {
        match key.as_str() {
            params::SEARCH => filters.search = value.trim().to_string(),
            params::NAME => filters.name = value.trim().to_string(),
            params::EMAIL => filters.email = value.trim().to_string(),
            params::COUNTRY => filters.country = value.trim().to_string(),
            params::FROM_DATE => filters.from_date = parse_date(&value),
            params::TO_DATE => filters.to_date = parse_date(&value),
            params::PAGE => {
                pagination.page = value
                    .parse()
                    .ok()
                    .filter(|page| *page >= 1)
                    .unwrap_or(pagination.page);
            }
            params::LIMIT => {
                pagination.limit = value
                    .parse()
                    .ok()
                    .filter(|limit| LIMIT_CHOICES.contains(limit))
                    .unwrap_or(pagination.limit);
            }
            params::SORT_BY => {
                pagination.sort_by = SortColumn::parse(&value).unwrap_or_default();
            }
            params::SORT_ORDER => {
                pagination.sort_order = SortOrder::parse(&value).unwrap_or_default();
            }
            _ => {}
        }
    }

    (filters, pagination)
}

/// Encode filter and pagination state as a query string (no leading `?`).
///
/// Only non-empty filter fields are emitted; dates are serialized as
/// `YYYY-MM-DD`. Encoding is total.
pub fn encode(filters: &FilterSet, pagination: &PaginationSpec) -> String {
    let raw = RawQuery {
        search: non_empty(&filters.search),
        name: non_empty(&filters.name),
        email: non_empty(&filters.email),
        country: non_empty(&filters.country),
        from_date: filters.from_date.map(format_date),
        to_date: filters.to_date.map(format_date),
        page: pagination.page,
        limit: pagination.limit,
        sort_by: pagination.sort_by.as_str(),
        sort_order: pagination.sort_order.as_str(),
    };
    serde_urlencoded::to_string(&raw).unwrap_or_default()
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_decode_empty_yields_defaults() {
        let (filters, pagination) = decode("");
        assert_eq!(filters, FilterSet::default());
        assert_eq!(pagination, PaginationSpec::default());
        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.limit, 10);
        assert_eq!(pagination.sort_by, SortColumn::CreatedAt);
        assert_eq!(pagination.sort_order, SortOrder::Desc);
    }

    #[test]
    fn test_decode_tolerates_leading_question_mark() {
        let (filters, _) = decode("?search=jane");
        assert_eq!(filters.search, "jane");
    }

    #[test]
    fn test_decode_malformed_date_is_absent() {
        let (filters, _) = decode("fromDate=yesterday&toDate=2024-02-30");
        assert_eq!(filters.from_date, None);
        assert_eq!(filters.to_date, None);
    }

    #[test]
    fn test_decode_out_of_domain_values_fall_back() {
        let (_, pagination) = decode("page=0&limit=33&sortBy=height&sortOrder=sideways");
        assert_eq!(pagination, PaginationSpec::default());

        let (_, pagination) = decode("page=abc");
        assert_eq!(pagination.page, 1);
    }

    #[test]
    fn test_encode_omits_empty_filters() {
        let query = encode(&FilterSet::default(), &PaginationSpec::default());
        assert_eq!(query, "page=1&limit=10&sortBy=createdAt&sortOrder=DESC");
    }

    #[test]
    fn test_encode_list_request_keys() {
        let filters = FilterSet {
            search: "jane".to_string(),
            ..FilterSet::default()
        };
        let pagination = PaginationSpec {
            page: 2,
            limit: 25,
            sort_by: SortColumn::Email,
            sort_order: SortOrder::Asc,
        };
        let query = encode(&filters, &pagination);

        let pairs: Vec<&str> = query.split('&').collect();
        assert_eq!(pairs.len(), 5);
        assert!(pairs.contains(&"search=jane"));
        assert!(pairs.contains(&"page=2"));
        assert!(pairs.contains(&"limit=25"));
        assert!(pairs.contains(&"sortBy=email"));
        assert!(pairs.contains(&"sortOrder=ASC"));
    }

    #[test]
    fn test_round_trip_preserves_in_domain_state() {
        let filters = FilterSet {
            search: "jane doe".to_string(),
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            country: "Norway".to_string(),
            from_date: NaiveDate::from_ymd_opt(2024, 1, 1),
            to_date: NaiveDate::from_ymd_opt(2024, 6, 30),
        };
        let pagination = PaginationSpec {
            page: 3,
            limit: 50,
            sort_by: SortColumn::Birthday,
            sort_order: SortOrder::Asc,
        };

        let (decoded_filters, decoded_pagination) = decode(&encode(&filters, &pagination));
        assert_eq!(decoded_filters, filters);
        assert_eq!(decoded_pagination, pagination);
    }

    #[test]
    fn test_round_trip_defaults() {
        let (filters, pagination) =
            decode(&encode(&FilterSet::default(), &PaginationSpec::default()));
        assert_eq!(filters, FilterSet::default());
        assert_eq!(pagination, PaginationSpec::default());
    }
}
