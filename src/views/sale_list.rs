//! Sales View

use leptos::prelude::*;
use paged_list::FilterValue;

use crate::api::sales;
use crate::components::{DateRange, DeleteButton, FilterSelect, ListFrame, SearchInput, SortHeader};
use crate::context::use_app_context;
use crate::list_view::use_list;
use crate::models::{format_money, Sale};

#[component]
pub fn SaleList() -> impl IntoView {
    let ctx = use_app_context();
    let list = use_list::<Sale>(sales::list_config(ctx.page_size()));
    let rows = list.rows();
    let filter = list.filter();
    let on_sort = Callback::new(move |field: &'static str| list.set_sort(field));

    let sale_row = move |sale: Sale| {
        let id = sale.id;
        let prompt = format!("Delete sale #{}?", id);
        view! {
            <tr>
                <td>{format!("#{}", id)}</td>
                <td>{sale.date}</td>
                <td>{sale.customer_name}</td>
                <td class="amount">{format_money(sale.total)}</td>
                <td>{sale.status}</td>
                <td class="row-actions">
                    <DeleteButton on_request=move |_| {
                        list.ask_confirmation(prompt.clone(), sales::delete(id))
                    } />
                </td>
            </tr>
        }
    };

    view! {
        <section class="list-view sale-list">
            <header class="list-header">
                <h2>"Sales"</h2>
                <div class="filter-panel">
                    <SearchInput
                        value=list.text(sales::SEARCH)
                        placeholder="Customer or reference..."
                        on_input=move |text: String| list.set_field(sales::SEARCH, text.into())
                    />
                    <FilterSelect
                        label="Status"
                        options=sales::STATUS_OPTIONS
                        value=list.text(sales::STATUS)
                        on_change=move |status: String| list.set_field(sales::STATUS, status.into())
                    />
                    <DateRange
                        from=list.text(sales::DATE_FROM)
                        to=list.text(sales::DATE_TO)
                        on_from=move |date: String| list.set_field(sales::DATE_FROM, FilterValue::Date(date))
                        on_to=move |date: String| list.set_field(sales::DATE_TO, FilterValue::Date(date))
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
                            <SortHeader label="Customer" field="customerName" filter=filter on_sort=on_sort />
                            <SortHeader label="Total" field="total" filter=filter on_sort=on_sort />
                            <th>"Status"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || rows.get().into_iter().map(sale_row).collect_view()}
                        {list.empty_view(6, "No sales in this range")}
                    </tbody>
                </table>
            </ListFrame>

            {list.pagination_view()}
            {list.confirm_view()}
        </section>
    }
}
