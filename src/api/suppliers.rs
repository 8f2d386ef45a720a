//! Supplier Endpoints

use paged_list::{FilterDefaults, ListConfig, Mutation, SortDirection};
use serde_json::json;

use super::item_path;

pub const RESOURCE: &str = "suppliers";

pub const SEARCH: &str = "search";

pub fn list_config(page_size: u32) -> ListConfig {
    ListConfig::new(
        RESOURCE,
        FilterDefaults::new(page_size)
            .with_field(SEARCH, "")
            .sorted_by("name", SortDirection::Asc),
    )
    .with_text_field(SEARCH)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewSupplier {
    pub name: String,
    pub tin: String,
    pub email: String,
    pub phone: String,
}

/// Blank optional fields are sent as null
pub fn create(supplier: &NewSupplier) -> Mutation {
    let optional = |s: &str| (!s.trim().is_empty()).then(|| s.trim().to_string());
    Mutation::post(
        RESOURCE,
        json!({
            "name": supplier.name,
            "tin": supplier.tin,
            "email": optional(&supplier.email),
            "phone": optional(&supplier.phone),
        }),
    )
}

pub fn delete(id: u64) -> Mutation {
    Mutation::delete(item_path(RESOURCE, id, None))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_create_nulls_blank_optionals() {
        let mutation = create(&NewSupplier {
            name: "Acme".into(),
            tin: "123".into(),
            email: "  ".into(),
            phone: "555-0101".into(),
        });
        let body = mutation.body.unwrap();
        assert_eq!(body["email"], Value::Null);
        assert_eq!(body["phone"], "555-0101");
        assert_eq!(mutation.path, "suppliers");
    }
}
