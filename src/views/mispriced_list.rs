//! Pricing Alerts View
//!
//! Products whose margin falls under a threshold, with an inline sale price
//! editor per row.

use leptos::prelude::*;
use paged_list::FilterValue;

use crate::api::products;
use crate::components::{FieldError, ListFrame, SearchInput, SortHeader};
use crate::context::use_app_context;
use crate::list_view::use_list;
use crate::models::{format_money, Product};

const SALE_PRICE_FIELD: &str = "salePrice";

fn format_percent(fraction: Option<f64>) -> String {
    fraction
        .map(|f| format!("{:.1}%", f * 100.0))
        .unwrap_or_else(|| "-".to_string())
}

/// Percent for the threshold input: two decimals at most, no trailing zeros
fn format_threshold(percent: f64) -> String {
    let text = format!("{:.2}", percent);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[component]
pub fn MispricedList() -> impl IntoView {
    let ctx = use_app_context();
    let list = use_list::<Product>(products::mispriced_config(ctx.page_size()));
    let rows = list.rows();
    let filter = list.filter();
    let on_sort = Callback::new(move |field: &'static str| list.set_sort(field));

    let threshold = Signal::derive(move || {
        filter.with(|f| {
            f.field(products::MARGIN_BELOW)
                .and_then(FilterValue::as_number)
                .map(|n| format_threshold(n * 100.0))
                .unwrap_or_default()
        })
    });

    let on_threshold = move |ev: web_sys::Event| {
        let value = match event_target_value(&ev).trim().parse::<f64>() {
            Ok(percent) => FilterValue::Number(percent / 100.0),
            Err(_) => FilterValue::Null,
        };
        list.set_field(products::MARGIN_BELOW, value);
    };

    let product_row = move |product: Product| {
        let draft = RwSignal::new(format_money(product.sale_price));
        let invalid = RwSignal::new(false);
        let current = product.clone();
        let save = move |_| match draft.get_untracked().trim().parse::<f64>() {
            Ok(price) if price > 0.0 => {
                invalid.set(false);
                list.mutate(products::update_price(&current, price));
            }
            _ => invalid.set(true),
        };

        view! {
            <tr>
                <td>{product.sku}</td>
                <td>{product.name}</td>
                <td>{format_money(product.purchase_price)}</td>
                <td>{format_money(product.sale_price)}</td>
                <td class="margin">{format_percent(product.margin)}</td>
                <td class="price-editor">
                    <input
                        type="number"
                        step="0.01"
                        min="0"
                        class:invalid=move || invalid.get()
                        prop:value=move || draft.get()
                        on:input=move |ev| draft.set(event_target_value(&ev))
                    />
                    <button class="save-btn" disabled=move || list.submitting().get() on:click=save>
                        "Save"
                    </button>
                </td>
            </tr>
        }
    };

    view! {
        <section class="list-view mispriced-list">
            <header class="list-header">
                <h2>"Pricing alerts"</h2>
                <div class="filter-panel">
                    <SearchInput
                        value=list.text(products::SEARCH)
                        placeholder="Name or SKU..."
                        on_input=move |text: String| list.set_field(products::SEARCH, text.into())
                    />
                    <label class="threshold">
                        <span class="filter-label">"Margin below (%)"</span>
                        <input
                            type="number"
                            step="0.5"
                            min="0"
                            prop:value=move || threshold.get()
                            on:change=on_threshold
                        />
                    </label>
                    <button class="clear-btn" on:click=move |_| list.clear()>"Clear filters"</button>
                </div>
                <FieldError message=list.field_error(SALE_PRICE_FIELD) />
            </header>

            {list.banner_view()}

            <ListFrame loading=list.loading()>
                <table class="data-table">
                    <thead>
                        <tr>
                            <SortHeader label="SKU" field="sku" filter=filter on_sort=on_sort />
                            <SortHeader label="Name" field="name" filter=filter on_sort=on_sort />
                            <SortHeader label="Cost" field="purchasePrice" filter=filter on_sort=on_sort />
                            <SortHeader label="Price" field="salePrice" filter=filter on_sort=on_sort />
                            <SortHeader label="Margin" field="margin" filter=filter on_sort=on_sort />
                            <th>"New price"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || rows.get().into_iter().map(product_row).collect_view()}
                        {list.empty_view(6, "All products are above the margin threshold")}
                    </tbody>
                </table>
            </ListFrame>

            {list.pagination_view()}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(Some(0.125)), "12.5%");
        assert_eq!(format_percent(None), "-");
    }

    #[test]
    fn test_threshold_has_no_float_noise() {
        assert_eq!(format_threshold(0.07 * 100.0), "7");
        assert_eq!(format_threshold(12.5), "12.5");
        assert_eq!(format_threshold(0.0), "0");
    }
}
