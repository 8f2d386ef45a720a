//! Product Endpoints
//!
//! Two read views over products: low stock and pricing alerts.

use paged_list::{FilterDefaults, FilterValue, ListConfig, Mutation, SortDirection};
use serde_json::json;

use super::item_path;
use crate::models::Product;

pub const LOW_STOCK_RESOURCE: &str = "products/low-stock";
pub const MISPRICED_RESOURCE: &str = "products/mispriced";
const RESOURCE: &str = "products";

pub const SEARCH: &str = "search";
pub const CATEGORY: &str = "category";
pub const MARGIN_BELOW: &str = "marginBelow";

/// Largest shortfall first
pub fn low_stock_config(page_size: u32) -> ListConfig {
    ListConfig::new(
        LOW_STOCK_RESOURCE,
        FilterDefaults::new(page_size)
            .with_field(SEARCH, "")
            .with_field(CATEGORY, "")
            .sorted_by("stock", SortDirection::Asc),
    )
    .with_text_field(SEARCH)
    .with_text_field(CATEGORY)
}

/// Products whose margin is under the threshold (fraction, default 10%)
pub fn mispriced_config(page_size: u32) -> ListConfig {
    ListConfig::new(
        MISPRICED_RESOURCE,
        FilterDefaults::new(page_size)
            .with_field(SEARCH, "")
            .with_field(MARGIN_BELOW, FilterValue::Number(0.1))
            .sorted_by("margin", SortDirection::Asc),
    )
    .with_text_field(SEARCH)
}

/// Full update with a new sale price
pub fn update_price(product: &Product, sale_price: f64) -> Mutation {
    Mutation::put(
        item_path(RESOURCE, product.id, None),
        json!({
            "id": product.id,
            "name": product.name,
            "sku": product.sku,
            "category": product.category,
            "stock": product.stock,
            "minStock": product.min_stock,
            "purchasePrice": product.purchase_price,
            "salePrice": sale_price,
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use paged_list::{FilterState, Method};

    fn product() -> Product {
        Product {
            id: 12,
            name: "Hinge".into(),
            sku: "H-1".into(),
            category: Some("hardware".into()),
            stock: 3,
            min_stock: 5,
            purchase_price: 1.5,
            sale_price: 1.6,
            margin: Some(0.06),
        }
    }

    #[test]
    fn test_update_price_is_full_put() {
        let mutation = update_price(&product(), 2.25);
        assert_eq!(mutation.method, Method::Put);
        assert_eq!(mutation.path, "products/12");
        let body = mutation.body.unwrap();
        assert_eq!(body["salePrice"], 2.25);
        assert_eq!(body["minStock"], 5);
        assert_eq!(body["category"], "hardware");
    }

    #[test]
    fn test_mispriced_default_threshold() {
        let state = FilterState::new(mispriced_config(20).defaults);
        assert_eq!(
            state.to_query_string(),
            "marginBelow=0.1&page=0&pageSize=20&sortBy=margin&sortDirection=ASC"
        );
    }
}
