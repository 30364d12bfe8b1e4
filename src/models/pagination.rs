//! Pagination, sorting, and server-reported page metadata.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_LIMIT, DEFAULT_PAGE, PAGE_WINDOW};

/// Sortable columns of the user table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortColumn {
    Name,
    Email,
    Birthday,
    Country,
    CreatedAt,
}

impl SortColumn {
    /// Wire name of the column
    pub fn as_str(&self) -> &'static str {
        match self {
            SortColumn::Name => "name",
            SortColumn::Email => "email",
            SortColumn::Birthday => "birthday",
            SortColumn::Country => "country",
            SortColumn::CreatedAt => "createdAt",
        }
    }

    /// Parse a query-string value; unknown columns yield `None`
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "name" => Some(SortColumn::Name),
            "email" => Some(SortColumn::Email),
            "birthday" => Some(SortColumn::Birthday),
            "country" => Some(SortColumn::Country),
            "createdAt" => Some(SortColumn::CreatedAt),
            _ => None,
        }
    }
}

impl Default for SortColumn {
    fn default() -> Self {
        SortColumn::CreatedAt
    }
}

impl std::fmt::Display for SortColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Wire name of the direction
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }

    /// Parse a query-string value; unknown directions yield `None`
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "ASC" => Some(SortOrder::Asc),
            "DESC" => Some(SortOrder::Desc),
            _ => None,
        }
    }

    /// The opposite direction
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

impl Default for SortOrder {
    fn default() -> Self {
        SortOrder::Desc
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Client-requested page/limit/sort parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationSpec {
    /// Page number (1-indexed)
    pub page: u32,
    /// Items per page
    pub limit: u32,
    pub sort_by: SortColumn,
    pub sort_order: SortOrder,
}

impl Default for PaginationSpec {
    fn default() -> Self {
        PaginationSpec {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            sort_by: SortColumn::default(),
            sort_order: SortOrder::default(),
        }
    }
}

/// Server-reported pagination metadata for the current result set.
///
/// Read-only from the client's perspective; replaced wholesale after each
/// successful fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_items: u64,
    pub items_per_page: u32,
    pub has_next_page: bool,
    pub has_prev_page: bool,
    #[serde(default)]
    pub next_page: Option<u32>,
    #[serde(default)]
    pub prev_page: Option<u32>,
}

/// One entry in the page-link row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

impl PageInfo {
    /// Item numbers displayed as "Showing X to Y of Z"
    pub fn display_range(&self) -> (u64, u64) {
        if self.total_items == 0 {
            return (0, 0);
        }
        let start = (self.current_page as u64 - 1) * self.items_per_page as u64 + 1;
        let end = (self.current_page as u64 * self.items_per_page as u64).min(self.total_items);
        (start, end)
    }

    /// Page links around the current page.
    ///
    /// The first and last pages are always present, with ellipses over any
    /// gaps to the window around the current page.
    pub fn page_numbers(&self) -> Vec<PageItem> {
        let start = self.current_page.saturating_sub(PAGE_WINDOW).max(1);
        let end = (self.current_page + PAGE_WINDOW).min(self.total_pages);

        let mut pages = Vec::new();
        if start > 1 {
            pages.push(PageItem::Page(1));
            if start > 2 {
                pages.push(PageItem::Ellipsis);
            }
        }
        for page in start..=end {
            pages.push(PageItem::Page(page));
        }
        if end < self.total_pages {
            if end < self.total_pages - 1 {
                pages.push(PageItem::Ellipsis);
            }
            pages.push(PageItem::Page(self.total_pages));
        }
        pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_info(current_page: u32, total_pages: u32) -> PageInfo {
        PageInfo {
            current_page,
            total_pages,
            total_items: total_pages as u64 * 10,
            items_per_page: 10,
            has_next_page: current_page < total_pages,
            has_prev_page: current_page > 1,
            next_page: (current_page < total_pages).then_some(current_page + 1),
            prev_page: (current_page > 1).then_some(current_page - 1),
        }
    }

    #[test]
    fn test_sort_order_toggled() {
        assert_eq!(SortOrder::Desc.toggled(), SortOrder::Asc);
        assert_eq!(SortOrder::Asc.toggled(), SortOrder::Desc);
    }

    #[test]
    fn test_sort_column_parse() {
        assert_eq!(SortColumn::parse("createdAt"), Some(SortColumn::CreatedAt));
        assert_eq!(SortColumn::parse("email"), Some(SortColumn::Email));
        assert_eq!(SortColumn::parse("nonsense"), None);
    }

    #[test]
    fn test_display_range() {
        let info = page_info(3, 10);
        assert_eq!(info.display_range(), (21, 30));

        let mut partial = page_info(10, 10);
        partial.total_items = 95;
        assert_eq!(partial.display_range(), (91, 95));

        let mut empty = page_info(1, 0);
        empty.total_items = 0;
        assert_eq!(empty.display_range(), (0, 0));
    }

    #[test]
    fn test_page_numbers_small_set_has_no_ellipsis() {
        let items = page_info(2, 4).page_numbers();
        assert_eq!(
            items,
            vec![
                PageItem::Page(1),
                PageItem::Page(2),
                PageItem::Page(3),
                PageItem::Page(4),
            ]
        );
    }

    #[test]
    fn test_page_numbers_windows_around_current() {
        let items = page_info(7, 20).page_numbers();
        assert_eq!(
            items,
            vec![
                PageItem::Page(1),
                PageItem::Ellipsis,
                PageItem::Page(5),
                PageItem::Page(6),
                PageItem::Page(7),
                PageItem::Page(8),
                PageItem::Page(9),
                PageItem::Ellipsis,
                PageItem::Page(20),
            ]
        );
    }

    #[test]
    fn test_page_numbers_at_edges() {
        let first = page_info(1, 20).page_numbers();
        assert_eq!(first[0], PageItem::Page(1));
        assert_eq!(first.last(), Some(&PageItem::Page(20)));

        let last = page_info(20, 20).page_numbers();
        assert_eq!(last[0], PageItem::Page(1));
        assert_eq!(last[1], PageItem::Ellipsis);
        assert_eq!(last.last(), Some(&PageItem::Page(20)));
    }
}
