//! Filter State
//!
//! The query shape of one list view: filter fields, pagination cursor and sort.
//! Every operation is total; the backend is the authority on validation.

use std::collections::BTreeMap;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

pub const PAGE_FIELD: &str = "page";
pub const PAGE_SIZE_FIELD: &str = "pageSize";
pub const SORT_BY_FIELD: &str = "sortBy";
pub const SORT_DIRECTION_FIELD: &str = "sortDirection";

/// RFC 3986 unreserved characters stay as-is in query values
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Sort direction, serialized as the `ASC`/`DESC` literals the backend expects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "ASC" => Some(SortDirection::Asc),
            "DESC" => Some(SortDirection::Desc),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Value of a single filter field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FilterValue {
    Text(String),
    Number(f64),
    Bool(bool),
    /// ISO date string (`YYYY-MM-DD`), passed through untouched
    Date(String),
    Null,
}

impl FilterValue {
    /// Absent values (null, empty string) are never sent to the backend
    pub fn is_absent(&self) -> bool {
        match self {
            FilterValue::Null => true,
            FilterValue::Text(s) | FilterValue::Date(s) => s.is_empty(),
            FilterValue::Number(_) | FilterValue::Bool(_) => false,
        }
    }

    /// Literal string encoding used in query strings
    pub fn to_query_value(&self) -> Option<String> {
        if self.is_absent() {
            return None;
        }
        match self {
            FilterValue::Text(s) | FilterValue::Date(s) => Some(s.clone()),
            FilterValue::Number(n) => Some(n.to_string()),
            FilterValue::Bool(b) => Some(b.to_string()),
            FilterValue::Null => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FilterValue::Number(n) => Some(*n),
            FilterValue::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FilterValue::Text(s) | FilterValue::Date(s) => Some(s),
            _ => None,
        }
    }

    /// Re-type a raw query value using `hint` (usually the field's default)
    fn parse_like(hint: Option<&FilterValue>, raw: String) -> FilterValue {
        match hint {
            Some(FilterValue::Number(_)) => raw
                .parse()
                .map(FilterValue::Number)
                .unwrap_or(FilterValue::Text(raw)),
            Some(FilterValue::Bool(_)) => match raw.as_str() {
                "true" => FilterValue::Bool(true),
                "false" => FilterValue::Bool(false),
                _ => FilterValue::Text(raw),
            },
            Some(FilterValue::Date(_)) => FilterValue::Date(raw),
            _ => FilterValue::Text(raw),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(s: &str) -> Self {
        FilterValue::Text(s.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(s: String) -> Self {
        FilterValue::Text(s)
    }
}

impl From<bool> for FilterValue {
    fn from(b: bool) -> Self {
        FilterValue::Bool(b)
    }
}

impl From<f64> for FilterValue {
    fn from(n: f64) -> Self {
        FilterValue::Number(n)
    }
}

impl From<u32> for FilterValue {
    fn from(n: u32) -> Self {
        FilterValue::Number(n as f64)
    }
}

impl<T: Into<FilterValue>> From<Option<T>> for FilterValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(FilterValue::Null)
    }
}

/// Per-view defaults; `clear()` returns a state to exactly these values
#[derive(Debug, Clone, PartialEq)]
pub struct FilterDefaults {
    pub fields: BTreeMap<String, FilterValue>,
    pub page_size: u32,
    pub sort_by: String,
    pub sort_direction: SortDirection,
}

impl FilterDefaults {
    pub fn new(page_size: u32) -> Self {
        Self {
            fields: BTreeMap::new(),
            page_size: page_size.max(1),
            sort_by: String::new(),
            sort_direction: SortDirection::Asc,
        }
    }

    pub fn with_field(mut self, name: &str, value: impl Into<FilterValue>) -> Self {
        self.fields.insert(name.to_string(), value.into());
        self
    }

    pub fn sorted_by(mut self, field: &str, direction: SortDirection) -> Self {
        self.sort_by = field.to_string();
        self.sort_direction = direction;
        self
    }
}

/// Current query shape of a list view
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    fields: BTreeMap<String, FilterValue>,
    page: u32,
    page_size: u32,
    sort_by: String,
    sort_direction: SortDirection,
    defaults: FilterDefaults,
}

impl FilterState {
    pub fn new(defaults: FilterDefaults) -> Self {
        Self {
            fields: defaults.fields.clone(),
            page: 0,
            page_size: defaults.page_size,
            sort_by: defaults.sort_by.clone(),
            sort_direction: defaults.sort_direction,
            defaults,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn sort_by(&self) -> &str {
        &self.sort_by
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    pub fn field(&self, name: &str) -> Option<&FilterValue> {
        self.fields.get(name)
    }

    /// Text of a field, or "" when unset; convenient for bound inputs
    pub fn text(&self, name: &str) -> String {
        self.field(name)
            .and_then(FilterValue::to_query_value)
            .unwrap_or_default()
    }

    pub fn defaults(&self) -> &FilterDefaults {
        &self.defaults
    }

    /// Set one field. Anything but `page`/`pageSize` resets the page to 0.
    pub fn set_field(&mut self, name: &str, value: FilterValue) {
        match name {
            PAGE_FIELD => match value.as_number() {
                Some(n) if n >= 0.0 => self.page = n as u32,
                _ => tracing::warn!(?value, "ignoring non-numeric page"),
            },
            PAGE_SIZE_FIELD => match value.as_number() {
                Some(n) if n >= 1.0 => self.page_size = n as u32,
                _ => tracing::warn!(?value, "ignoring non-positive page size"),
            },
            _ => {
                self.fields.insert(name.to_string(), value);
                self.page = 0;
            }
        }
    }

    pub fn set_page(&mut self, page: u32) {
        self.page = page;
    }

    /// Same field toggles the direction; a new field sorts ascending.
    pub fn set_sort(&mut self, field: &str) {
        if self.sort_by == field {
            self.sort_direction = self.sort_direction.toggled();
        } else {
            self.sort_by = field.to_string();
            self.sort_direction = SortDirection::Asc;
        }
        self.page = 0;
    }

    pub fn clear(&mut self) {
        let defaults = self.defaults.clone();
        *self = FilterState::new(defaults);
    }

    /// `(key, value)` pairs for the request, absent values stripped
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> = self
            .fields
            .iter()
            .filter_map(|(name, value)| value.to_query_value().map(|v| (name.clone(), v)))
            .collect();
        pairs.push((PAGE_FIELD.to_string(), self.page.to_string()));
        pairs.push((PAGE_SIZE_FIELD.to_string(), self.page_size.to_string()));
        if !self.sort_by.is_empty() {
            pairs.push((SORT_BY_FIELD.to_string(), self.sort_by.clone()));
            pairs.push((
                SORT_DIRECTION_FIELD.to_string(),
                self.sort_direction.as_str().to_string(),
            ));
        }
        pairs
    }

    pub fn to_query_string(&self) -> String {
        self.to_query_pairs()
            .iter()
            .map(|(k, v)| {
                format!(
                    "{}={}",
                    utf8_percent_encode(k, QUERY_VALUE),
                    utf8_percent_encode(v, QUERY_VALUE)
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Restore from a query string produced by `to_query_string`.
    /// Fields missing from the query fall back to their defaults.
    pub fn apply_query(&mut self, query: &str) {
        self.clear();
        let query = query.trim_start_matches('?');
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, raw) = pair.split_once('=').unwrap_or((pair, ""));
            let key = percent_decode_str(key).decode_utf8_lossy().to_string();
            let raw = percent_decode_str(raw).decode_utf8_lossy().to_string();
            match key.as_str() {
                PAGE_FIELD => {
                    if let Ok(page) = raw.parse() {
                        self.page = page;
                    }
                }
                PAGE_SIZE_FIELD => {
                    if let Ok(size) = raw.parse::<u32>() {
                        self.page_size = size.max(1);
                    }
                }
                SORT_BY_FIELD => self.sort_by = raw,
                SORT_DIRECTION_FIELD => {
                    if let Some(direction) = SortDirection::parse(&raw) {
                        self.sort_direction = direction;
                    }
                }
                _ => {
                    let value = FilterValue::parse_like(self.defaults.fields.get(&key), raw);
                    self.fields.insert(key, value);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task_defaults() -> FilterDefaults {
        FilterDefaults::new(10)
            .with_field("status", "PENDING")
            .with_field("search", "")
            .sorted_by("dueDate", SortDirection::Asc)
    }

    #[test]
    fn test_non_pagination_change_resets_page() {
        let mut state = FilterState::new(task_defaults());
        for (name, value) in [
            ("search", FilterValue::from("milk")),
            ("status", FilterValue::from("COMPLETED")),
            ("dueFrom", FilterValue::Date("2024-01-01".into())),
            ("overdue", FilterValue::Bool(true)),
            ("minQty", FilterValue::Number(3.0)),
        ] {
            state.set_page(4);
            state.set_field(name, value);
            assert_eq!(state.page(), 0, "{} should reset page", name);
        }
    }

    #[test]
    fn test_pagination_fields_keep_page() {
        let mut state = FilterState::new(task_defaults());
        state.set_field(PAGE_FIELD, 3u32.into());
        assert_eq!(state.page(), 3);
        state.set_field(PAGE_SIZE_FIELD, 25u32.into());
        assert_eq!(state.page(), 3);
        assert_eq!(state.page_size(), 25);
    }

    #[test]
    fn test_invalid_pagination_values_are_ignored() {
        let mut state = FilterState::new(task_defaults());
        state.set_field(PAGE_FIELD, 2u32.into());
        state.set_field(PAGE_FIELD, FilterValue::Number(-1.0));
        state.set_field(PAGE_SIZE_FIELD, FilterValue::Number(0.0));
        state.set_field(PAGE_FIELD, FilterValue::from("abc"));
        assert_eq!(state.page(), 2);
        assert_eq!(state.page_size(), 10);
    }

    #[test]
    fn test_set_sort_toggles_and_resets() {
        let mut state = FilterState::new(task_defaults());
        state.set_sort("title");
        assert_eq!(state.sort_by(), "title");
        assert_eq!(state.sort_direction(), SortDirection::Asc);
        state.set_sort("title");
        assert_eq!(state.sort_direction(), SortDirection::Desc);
        state.set_sort("title");
        assert_eq!(state.sort_direction(), SortDirection::Asc);
        state.set_sort("title");
        state.set_sort("priority");
        assert_eq!(state.sort_by(), "priority");
        assert_eq!(state.sort_direction(), SortDirection::Asc);
    }

    #[test]
    fn test_sort_on_default_field_toggles() {
        let mut state = FilterState::new(task_defaults());
        state.set_sort("dueDate");
        assert_eq!(state.sort_direction(), SortDirection::Desc);
    }

    #[test]
    fn test_clear_restores_view_defaults() {
        let mut state = FilterState::new(task_defaults());
        state.set_field("status", "COMPLETED".into());
        state.set_field("search", "x".into());
        state.set_sort("title");
        state.set_page(5);
        state.clear();
        assert_eq!(state.field("status"), Some(&FilterValue::from("PENDING")));
        assert_eq!(state.text("search"), "");
        assert_eq!(state.sort_by(), "dueDate");
        assert_eq!(state.page(), 0);
    }

    #[test]
    fn test_query_omits_absent_values() {
        let mut state = FilterState::new(FilterDefaults::new(20));
        state.set_field("search", "".into());
        state.set_field("category", FilterValue::Null);
        state.set_field("dateFrom", FilterValue::Date(String::new()));
        state.set_field("active", false.into());
        state.set_field("minStock", FilterValue::Number(5.0));
        state.set_field("margin", FilterValue::Number(0.25));

        assert_eq!(
            state.to_query_string(),
            "active=false&margin=0.25&minStock=5&page=0&pageSize=20"
        );
    }

    #[test]
    fn test_query_encodes_values_and_sort() {
        let mut state = FilterState::new(task_defaults());
        state.set_field("search", "red & blue".into());
        assert_eq!(
            state.to_query_string(),
            "search=red%20%26%20blue&status=PENDING&page=0&pageSize=10&sortBy=dueDate&sortDirection=ASC"
        );
    }

    #[test]
    fn test_serialization_does_not_touch_state() {
        let mut state = FilterState::new(task_defaults());
        state.set_field("search", "bolt".into());
        state.set_page(2);
        let before = state.clone();
        let first = state.to_query_string();
        let second = state.to_query_string();
        assert_eq!(first, second);
        assert_eq!(state, before);
    }

    #[test]
    fn test_apply_query_restores_state() {
        let mut state = FilterState::new(task_defaults().with_field("overdue", false));
        state.set_field("search", "a/b c".into());
        state.set_field("overdue", true.into());
        state.set_sort("title");
        state.set_sort("title");
        state.set_page(3);
        let query = state.to_query_string();

        let mut restored = FilterState::new(task_defaults().with_field("overdue", false));
        restored.apply_query(&query);
        assert_eq!(restored, state);
    }
}
