//! Low Stock View
//!
//! Products at or under their minimum stock level.

use leptos::prelude::*;

use crate::api::products;
use crate::components::{ListFrame, SearchInput, SortHeader};
use crate::context::use_app_context;
use crate::list_view::use_list;
use crate::models::{format_money, Product};

#[component]
pub fn LowStockList() -> impl IntoView {
    let ctx = use_app_context();
    let list = use_list::<Product>(products::low_stock_config(ctx.page_size()));
    let rows = list.rows();
    let filter = list.filter();
    let on_sort = Callback::new(move |field: &'static str| list.set_sort(field));

    view! {
        <section class="list-view low-stock-list">
            <header class="list-header">
                <h2>"Low stock"</h2>
                <div class="filter-panel">
                    <SearchInput
                        value=list.text(products::SEARCH)
                        placeholder="Name or SKU..."
                        on_input=move |text: String| list.set_field(products::SEARCH, text.into())
                    />
                    <SearchInput
                        value=list.text(products::CATEGORY)
                        placeholder="Category"
                        on_input=move |text: String| list.set_field(products::CATEGORY, text.into())
                    />
                    <button class="refresh-btn" on:click=move |_| list.refresh()>"↻ Refresh"</button>
                    <button class="clear-btn" on:click=move |_| list.clear()>"Clear filters"</button>
                </div>
            </header>

            {list.banner_view()}

            <ListFrame loading=list.loading()>
                <table class="data-table">
                    <thead>
                        <tr>
                            <SortHeader label="SKU" field="sku" filter=filter on_sort=on_sort />
                            <SortHeader label="Name" field="name" filter=filter on_sort=on_sort />
                            <SortHeader label="Category" field="category" filter=filter on_sort=on_sort />
                            <SortHeader label="Stock" field="stock" filter=filter on_sort=on_sort />
                            <SortHeader label="Minimum" field="minStock" filter=filter on_sort=on_sort />
                            <th>"Shortfall"</th>
                            <th>"Unit cost"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            rows.get()
                                .into_iter()
                                .map(|product| {
                                    let shortfall = product.shortfall();
                                    view! {
                                        <tr class:critical=product.stock <= 0>
                                            <td>{product.sku}</td>
                                            <td>{product.name}</td>
                                            <td>{product.category.unwrap_or_default()}</td>
                                            <td>{product.stock}</td>
                                            <td>{product.min_stock}</td>
                                            <td class="shortfall">{shortfall}</td>
                                            <td>{format_money(product.purchase_price)}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                        {list.empty_view(7, "Nothing is below its minimum stock")}
                    </tbody>
                </table>
            </ListFrame>

            {list.pagination_view()}
        </section>
    }
}
