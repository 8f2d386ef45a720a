//! User Endpoints

use paged_list::{FilterDefaults, FilterValue, ListConfig, Mutation, SortDirection};
use serde_json::json;

use super::item_path;

pub const RESOURCE: &str = "users";

pub const SEARCH: &str = "search";
pub const ROLE: &str = "role";
pub const ACTIVE: &str = "active";

pub const ROLE_OPTIONS: &[(&str, &str)] = &[
    ("", "All roles"),
    ("ADMIN", "Admin"),
    ("MANAGER", "Manager"),
    ("CLERK", "Clerk"),
];

pub const ACTIVE_OPTIONS: &[(&str, &str)] = &[
    ("", "All"),
    ("true", "Active"),
    ("false", "Deleted"),
];

/// Users list shows everyone by default
pub fn list_config(page_size: u32) -> ListConfig {
    ListConfig::new(
        RESOURCE,
        FilterDefaults::new(page_size)
            .with_field(SEARCH, "")
            .with_field(ROLE, "")
            .with_field(ACTIVE, FilterValue::Null)
            .sorted_by("username", SortDirection::Asc),
    )
    .with_text_field(SEARCH)
}

/// Select value -> filter value for the active flag
pub fn active_filter(value: &str) -> FilterValue {
    match value {
        "true" => FilterValue::Bool(true),
        "false" => FilterValue::Bool(false),
        _ => FilterValue::Null,
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub role: String,
    pub password: String,
}

pub fn create(user: &NewUser) -> Mutation {
    Mutation::post(
        RESOURCE,
        json!({
            "username": user.username,
            "email": user.email,
            "role": user.role,
            "password": user.password,
        }),
    )
}

/// Soft delete
pub fn delete(id: u64) -> Mutation {
    Mutation::delete(item_path(RESOURCE, id, None))
}

pub fn restore(id: u64) -> Mutation {
    Mutation::patch(item_path(RESOURCE, id, Some("restore")), json!({}))
}

#[cfg(test)]
mod tests {
    use super::*;
    use paged_list::{FilterState, Method};

    #[test]
    fn test_active_filter_all_is_omitted() {
        let mut state = FilterState::new(list_config(10).defaults);
        assert!(!state.to_query_string().contains("active"));
        state.set_field(ACTIVE, active_filter("false"));
        assert!(state.to_query_string().starts_with("active=false&"));
        state.set_field(ACTIVE, active_filter(""));
        assert!(!state.to_query_string().contains("active"));
    }

    #[test]
    fn test_restore_path() {
        let mutation = restore(5);
        assert_eq!(mutation.method, Method::Patch);
        assert_eq!(mutation.path, "users/5/restore");
    }
}
