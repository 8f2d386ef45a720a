//! Purchase Endpoints

use paged_list::{FilterDefaults, FilterValue, ListConfig, Mutation, SortDirection};

use super::item_path;

pub const RESOURCE: &str = "purchases";

pub const SEARCH: &str = "search";
pub const STATUS: &str = "status";
pub const DATE_FROM: &str = "dateFrom";
pub const DATE_TO: &str = "dateTo";

pub const STATUS_OPTIONS: &[(&str, &str)] = &[
    ("", "All"),
    ("ORDERED", "Ordered"),
    ("RECEIVED", "Received"),
    ("CANCELLED", "Cancelled"),
];

/// Newest first
pub fn list_config(page_size: u32) -> ListConfig {
    ListConfig::new(
        RESOURCE,
        FilterDefaults::new(page_size)
            .with_field(SEARCH, "")
            .with_field(STATUS, "")
            .with_field(DATE_FROM, FilterValue::Date(String::new()))
            .with_field(DATE_TO, FilterValue::Date(String::new()))
            .sorted_by("date", SortDirection::Desc),
    )
    .with_text_field(SEARCH)
}

pub fn delete(id: u64) -> Mutation {
    Mutation::delete(item_path(RESOURCE, id, None))
}
