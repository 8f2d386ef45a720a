//! Supplier List View

use leptos::prelude::*;

use crate::api::suppliers::{self, NewSupplier};
use crate::components::{DeleteButton, FieldError, ListFrame, SearchInput, SortHeader};
use crate::context::use_app_context;
use crate::list_view::{use_list, ListHandle};
use crate::models::Supplier;

/// Create form. A duplicate TIN comes back as a business error and is shown
/// in the list banner; field validation errors are shown inline.
#[component]
fn NewSupplierForm(list: ListHandle<Supplier>) -> impl IntoView {
    let form = RwSignal::new(NewSupplier::default());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let supplier = form.get_untracked();
        list.mutate_then(suppliers::create(&supplier), move || {
            form.set(NewSupplier::default());
        });
    };

    view! {
        <form class="create-form" on:submit=on_submit>
            <label>
                "Name"
                <input
                    type="text"
                    prop:value=move || form.with(|f| f.name.clone())
                    on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                />
                <FieldError message=list.field_error("name") />
            </label>
            <label>
                "TIN"
                <input
                    type="text"
                    prop:value=move || form.with(|f| f.tin.clone())
                    on:input=move |ev| form.update(|f| f.tin = event_target_value(&ev))
                />
                <FieldError message=list.field_error("tin") />
            </label>
            <label>
                "Email"
                <input
                    type="email"
                    prop:value=move || form.with(|f| f.email.clone())
                    on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                />
                <FieldError message=list.field_error("email") />
            </label>
            <label>
                "Phone"
                <input
                    type="tel"
                    prop:value=move || form.with(|f| f.phone.clone())
                    on:input=move |ev| form.update(|f| f.phone = event_target_value(&ev))
                />
                <FieldError message=list.field_error("phone") />
            </label>
            <button type="submit" class="create-btn" disabled=move || list.submitting().get()>
                "+ Add supplier"
            </button>
        </form>
    }
}

#[component]
pub fn SupplierList() -> impl IntoView {
    let ctx = use_app_context();
    let list = use_list::<Supplier>(suppliers::list_config(ctx.page_size()));
    let rows = list.rows();
    let filter = list.filter();
    let on_sort = Callback::new(move |field: &'static str| list.set_sort(field));

    let supplier_row = move |supplier: Supplier| {
        let id = supplier.id;
        let prompt = format!("Delete supplier \"{}\"?", supplier.name);
        view! {
            <tr class:inactive=!supplier.active>
                <td>{supplier.name}</td>
                <td>{supplier.tin}</td>
                <td>{supplier.email.unwrap_or_default()}</td>
                <td>{supplier.phone.unwrap_or_default()}</td>
                <td class="row-actions">
                    <DeleteButton on_request=move |_| {
                        list.ask_confirmation(prompt.clone(), suppliers::delete(id))
                    } />
                </td>
            </tr>
        }
    };

    view! {
        <section class="list-view supplier-list">
            <header class="list-header">
                <h2>"Suppliers"</h2>
                <div class="filter-panel">
                    <SearchInput
                        value=list.text(suppliers::SEARCH)
                        placeholder="Name or TIN..."
                        on_input=move |text: String| list.set_field(suppliers::SEARCH, text.into())
                    />
                    <button class="clear-btn" on:click=move |_| list.clear()>"Clear filters"</button>
                </div>
            </header>

            <NewSupplierForm list=list />

            {list.banner_view()}

            <ListFrame loading=list.loading()>
                <table class="data-table">
                    <thead>
                        <tr>
                            <SortHeader label="Name" field="name" filter=filter on_sort=on_sort />
                            <SortHeader label="TIN" field="tin" filter=filter on_sort=on_sort />
                            <SortHeader label="Email" field="email" filter=filter on_sort=on_sort />
                            <th>"Phone"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || rows.get().into_iter().map(supplier_row).collect_view()}
                        {list.empty_view(5, "No suppliers found")}
                    </tbody>
                </table>
            </ListFrame>

            {list.pagination_view()}
            {list.confirm_view()}
        </section>
    }
}
