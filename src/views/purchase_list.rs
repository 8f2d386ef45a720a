//! Purchases View

use leptos::prelude::*;
use paged_list::FilterValue;

use crate::api::purchases;
use crate::components::{DateRange, DeleteButton, FilterSelect, ListFrame, SearchInput, SortHeader};
use crate::context::use_app_context;
use crate::list_view::use_list;
use crate::models::{format_money, Purchase};

#[component]
pub fn PurchaseList() -> impl IntoView {
    let ctx = use_app_context();
    let list = use_list::<Purchase>(purchases::list_config(ctx.page_size()));
    let rows = list.rows();
    let filter = list.filter();
    let on_sort = Callback::new(move |field: &'static str| list.set_sort(field));

    let purchase_row = move |purchase: Purchase| {
        let id = purchase.id;
        let prompt = format!("Delete purchase #{}?", id);
        view! {
            <tr>
                <td>{format!("#{}", id)}</td>
                <td>{purchase.date}</td>
                <td>{purchase.supplier_name}</td>
                <td class="amount">{format_money(purchase.total)}</td>
                <td>{purchase.status}</td>
                <td class="row-actions">
                    <DeleteButton on_request=move |_| {
                        list.ask_confirmation(prompt.clone(), purchases::delete(id))
                    } />
                </td>
            </tr>
        }
    };

    view! {
        <section class="list-view purchase-list">
            <header class="list-header">
                <h2>"Purchases"</h2>
                <div class="filter-panel">
                    <SearchInput
                        value=list.text(purchases::SEARCH)
                        placeholder="Supplier or reference..."
                        on_input=move |text: String| list.set_field(purchases::SEARCH, text.into())
                    />
                    <FilterSelect
                        label="Status"
                        options=purchases::STATUS_OPTIONS
                        value=list.text(purchases::STATUS)
                        on_change=move |status: String| list.set_field(purchases::STATUS, status.into())
                    />
                    <DateRange
                        from=list.text(purchases::DATE_FROM)
                        to=list.text(purchases::DATE_TO)
                        on_from=move |date: String| list.set_field(purchases::DATE_FROM, FilterValue::Date(date))
                        on_to=move |date: String| list.set_field(purchases::DATE_TO, FilterValue::Date(date))
                    />
                    <button class="clear-btn" on:click=move |_| list.clear()>"Clear filters"</button>
                </div>
            </header>

            {list.banner_view()}

            <ListFrame loading=list.loading()>
                <table class="data-table">
                    <thead>
                        <tr>
                            <SortHeader label="No." field="id" filter=filter on_sort=on_sort />
                            <SortHeader label="Date" field="date" filter=filter on_sort=on_sort />
                            <SortHeader label="Supplier" field="supplierName" filter=filter on_sort=on_sort />
                            <SortHeader label="Total" field="total" filter=filter on_sort=on_sort />
                            <th>"Status"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || rows.get().into_iter().map(purchase_row).collect_view()}
                        {list.empty_view(6, "No purchases in this range")}
                    </tbody>
                </table>
            </ListFrame>

            {list.pagination_view()}
            {list.confirm_view()}
        </section>
    }
}
