//! Paginated Results
//!
//! One page of a list response plus the pager rules the renderer follows.

use serde::{Deserialize, Serialize};

use crate::filter::{FilterState, SortDirection};

/// One page of results as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResult<T> {
    pub data: Vec<T>,
    pub total_elements: u64,
    pub number_of_elements: u32,
    pub total_pages: u32,
    pub current_page: u32,
    pub page_size: u32,
}

impl<T> PaginatedResult<T> {
    pub fn empty(page_size: u32) -> Self {
        Self {
            data: Vec::new(),
            total_elements: 0,
            number_of_elements: 0,
            total_pages: 0,
            current_page: 0,
            page_size,
        }
    }

    /// Check the page invariants, returning a description of the first violation
    pub fn validate(&self) -> Result<(), String> {
        if self.number_of_elements as usize != self.data.len() {
            return Err(format!(
                "numberOfElements is {} but page holds {} rows",
                self.number_of_elements,
                self.data.len()
            ));
        }
        if self.total_elements > 0 && self.current_page >= self.total_pages {
            return Err(format!(
                "currentPage {} is outside {} pages",
                self.current_page, self.total_pages
            ));
        }
        Ok(())
    }

    pub fn pager(&self) -> Pager {
        Pager {
            current_page: self.current_page,
            total_pages: self.total_pages,
        }
    }
}

/// Previous/next rules for pagination controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pager {
    pub current_page: u32,
    pub total_pages: u32,
}

impl Pager {
    pub fn has_previous(&self) -> bool {
        self.current_page > 0
    }

    pub fn has_next(&self) -> bool {
        self.current_page.saturating_add(1) < self.total_pages
    }

    pub fn previous(&self) -> Option<u32> {
        self.has_previous().then(|| self.current_page - 1)
    }

    pub fn next(&self) -> Option<u32> {
        self.has_next().then(|| self.current_page + 1)
    }

    /// One-based label, e.g. "Page 2 of 5"
    pub fn label(&self) -> String {
        format!(
            "Page {} of {}",
            self.current_page.saturating_add(1),
            self.total_pages.max(1)
        )
    }
}

/// Header glyph for a sortable column
pub fn sort_glyph(state: &FilterState, field: &str) -> &'static str {
    if state.sort_by() != field {
        return "";
    }
    match state.sort_direction() {
        SortDirection::Asc => "▲",
        SortDirection::Desc => "▼",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::FilterDefaults;

    fn page(current_page: u32, total_pages: u32, total_elements: u64) -> PaginatedResult<u32> {
        let rows = if total_elements == 0 { 0 } else { 1 };
        PaginatedResult {
            data: (0..rows).collect(),
            total_elements,
            number_of_elements: rows,
            total_pages,
            current_page,
            page_size: 10,
        }
    }

    #[test]
    fn test_pager_boundaries() {
        let first = page(0, 3, 25).pager();
        assert!(!first.has_previous());
        assert!(first.has_next());
        assert_eq!(first.next(), Some(1));

        let middle = page(1, 3, 25).pager();
        assert!(middle.has_previous());
        assert!(middle.has_next());
        assert_eq!(middle.previous(), Some(0));

        let last = page(2, 3, 25).pager();
        assert!(last.has_previous());
        assert!(!last.has_next());
        assert_eq!(last.next(), None);
    }

    #[test]
    fn test_pager_with_no_results() {
        let empty = page(0, 0, 0).pager();
        assert!(!empty.has_previous());
        assert!(!empty.has_next());
        assert_eq!(empty.label(), "Page 1 of 1");
    }

    #[test]
    fn test_validate_rejects_broken_pages() {
        assert!(page(0, 1, 1).validate().is_ok());
        assert!(page(0, 0, 0).validate().is_ok());
        assert!(page(3, 3, 25).validate().is_err());

        let mut miscounted = page(0, 1, 1);
        miscounted.number_of_elements = 2;
        assert!(miscounted.validate().is_err());
    }

    #[test]
    fn test_decodes_camel_case_page() {
        let json = r#"{
            "data": [{"id": 1}, {"id": 2}],
            "totalElements": 12,
            "numberOfElements": 2,
            "totalPages": 6,
            "currentPage": 5,
            "pageSize": 2
        }"#;
        let result: PaginatedResult<serde_json::Value> = serde_json::from_str(json).unwrap();
        assert_eq!(result.total_elements, 12);
        assert_eq!(result.data[1]["id"], 2);
        assert!(result.validate().is_ok());
        assert!(!result.pager().has_next());
    }

    #[test]
    fn test_sort_glyph() {
        let mut state = FilterState::new(FilterDefaults::new(10));
        assert_eq!(sort_glyph(&state, "name"), "");
        state.set_sort("name");
        assert_eq!(sort_glyph(&state, "name"), "▲");
        assert_eq!(sort_glyph(&state, "price"), "");
        state.set_sort("name");
        assert_eq!(sort_glyph(&state, "name"), "▼");
    }

    #[test]
    fn test_empty_page_with_out_of_range_index() {
        let json = r#"{"data":[],"totalElements":0,"numberOfElements":0,"totalPages":0,"currentPage":4294967295,"pageSize":10}"#;
        let result: PaginatedResult<serde_json::Value> = serde_json::from_str(json).unwrap();
        assert!(result.validate().is_ok());
        let pager = result.pager();
        assert!(!pager.has_next());
        assert!(pager.has_previous());
        assert_eq!(pager.next(), None);
        assert_eq!(pager.label(), "Page 4294967295 of 1");
    }
}
