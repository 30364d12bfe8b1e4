//! Search and filter criteria for the user list.

use chrono::NaiveDate;

/// Identifies a single filter field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Search,
    Name,
    Email,
    Country,
    FromDate,
    ToDate,
}

/// Replacement value for a single filter field
#[derive(Debug, Clone)]
pub enum FilterUpdate {
    Search(String),
    Name(String),
    Email(String),
    Country(String),
    FromDate(Option<NaiveDate>),
    ToDate(Option<NaiveDate>),
}

/// User-supplied search/filter criteria.
///
/// An empty string or `None` means "no filter on this field". Text values
/// are stored trimmed; a value that trims to empty counts as cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    pub search: String,
    pub name: String,
    pub email: String,
    pub country: String,
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
}

impl FilterSet {
    /// Apply a single-field replacement
    pub fn apply(&mut self, update: FilterUpdate) {
        match update {
            FilterUpdate::Search(v) => self.search = v.trim().to_string(),
            FilterUpdate::Name(v) => self.name = v.trim().to_string(),
            FilterUpdate::Email(v) => self.email = v.trim().to_string(),
            FilterUpdate::Country(v) => self.country = v.trim().to_string(),
            FilterUpdate::FromDate(v) => self.from_date = v,
            FilterUpdate::ToDate(v) => self.to_date = v,
        }
    }

    /// Reset one field to its empty default
    pub fn clear(&mut self, field: FilterField) {
        match field {
            FilterField::Search => self.search.clear(),
            FilterField::Name => self.name.clear(),
            FilterField::Email => self.email.clear(),
            FilterField::Country => self.country.clear(),
            FilterField::FromDate => self.from_date = None,
            FilterField::ToDate => self.to_date = None,
        }
    }

    /// Check whether any filter currently holds a value
    pub fn has_active_filters(&self) -> bool {
        self.active_filter_count() > 0
    }

    /// Number of fields currently holding a value
    pub fn active_filter_count(&self) -> usize {
        [&self.search, &self.name, &self.email, &self.country]
            .iter()
            .filter(|v| !v.is_empty())
            .count()
            + self.from_date.is_some() as usize
            + self.to_date.is_some() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_filter_count() {
        let mut filters = FilterSet::default();
        assert_eq!(filters.active_filter_count(), 0);
        assert!(!filters.has_active_filters());

        filters.apply(FilterUpdate::Search("jane".to_string()));
        filters.apply(FilterUpdate::Country("Norway".to_string()));
        filters.from_date = NaiveDate::from_ymd_opt(2024, 1, 1);
        assert_eq!(filters.active_filter_count(), 3);
        assert!(filters.has_active_filters());
    }

    #[test]
    fn test_apply_trims_text() {
        let mut filters = FilterSet::default();
        filters.apply(FilterUpdate::Name("  Jane  ".to_string()));
        assert_eq!(filters.name, "Jane");

        // whitespace-only input counts as cleared
        filters.apply(FilterUpdate::Name("   ".to_string()));
        assert_eq!(filters.name, "");
        assert!(!filters.has_active_filters());
    }

    #[test]
    fn test_clear_resets_single_field() {
        let mut filters = FilterSet {
            search: "jane".to_string(),
            from_date: NaiveDate::from_ymd_opt(2024, 1, 1),
            ..FilterSet::default()
        };

        filters.clear(FilterField::Search);
        assert_eq!(filters.search, "");
        assert_eq!(filters.active_filter_count(), 1);

        filters.clear(FilterField::FromDate);
        assert_eq!(filters, FilterSet::default());
    }
}
