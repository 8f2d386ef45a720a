//! Task Endpoints

use paged_list::{FilterDefaults, FilterValue, ListConfig, Mutation, SortDirection};
use serde_json::json;

use super::item_path;
use crate::models::TaskStatus;

pub const RESOURCE: &str = "tasks";

pub const SEARCH: &str = "search";
pub const STATUS: &str = "status";
pub const DUE_FROM: &str = "dueFrom";
pub const DUE_TO: &str = "dueTo";

/// Status filter choices; "" means all
pub const STATUS_OPTIONS: &[(&str, &str)] = &[
    ("PENDING", "Pending"),
    ("IN_PROGRESS", "In progress"),
    ("COMPLETED", "Completed"),
    ("CANCELLED", "Cancelled"),
    ("", "All"),
];

/// Tasks open on pending work, soonest due first
pub fn list_config(page_size: u32) -> ListConfig {
    ListConfig::new(
        RESOURCE,
        FilterDefaults::new(page_size)
            .with_field(SEARCH, "")
            .with_field(STATUS, TaskStatus::Pending.as_str())
            .with_field(DUE_FROM, FilterValue::Date(String::new()))
            .with_field(DUE_TO, FilterValue::Date(String::new()))
            .sorted_by("dueDate", SortDirection::Asc),
    )
    .with_text_field(SEARCH)
}

/// Status-only update
pub fn complete(id: u64) -> Mutation {
    Mutation::patch(
        item_path(RESOURCE, id, Some("status")),
        json!({ "status": TaskStatus::Completed.as_str() }),
    )
}

pub fn delete(id: u64) -> Mutation {
    Mutation::delete(item_path(RESOURCE, id, None))
}

#[cfg(test)]
mod tests {
    use super::*;
    use paged_list::{FilterState, Method};

    #[test]
    fn test_complete_is_status_only_patch() {
        let mutation = complete(7);
        assert_eq!(mutation.method, Method::Patch);
        assert_eq!(mutation.path, "tasks/7/status");
        assert_eq!(mutation.body, Some(json!({"status": "COMPLETED"})));
        assert!(!mutation.is_destructive());
    }

    #[test]
    fn test_delete_needs_confirmation() {
        assert!(delete(3).is_destructive());
        assert_eq!(delete(3).path, "tasks/3");
    }

    #[test]
    fn test_defaults_to_pending() {
        let config = list_config(10);
        let state = FilterState::new(config.defaults.clone());
        assert_eq!(
            state.to_query_string(),
            "status=PENDING&page=0&pageSize=10&sortBy=dueDate&sortDirection=ASC"
        );
        assert!(config.is_text(SEARCH));
        assert!(!config.is_text(STATUS));
    }
}
