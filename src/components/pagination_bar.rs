//! Pagination Bar Component

use leptos::prelude::*;
use paged_list::Pager;

const PAGE_SIZES: &[u32] = &[10, 25, 50];

/// Previous/next controls. "Previous" is disabled on the first page and
/// "Next" on the last one, including when there are no results at all.
#[component]
pub fn PaginationBar(
    #[prop(into)] pager: Signal<Pager>,
    #[prop(into)] total: Signal<u64>,
    #[prop(into)] page_size: Signal<u32>,
    #[prop(into)] on_previous: Callback<()>,
    #[prop(into)] on_next: Callback<()>,
    #[prop(into)] on_page_size: Callback<u32>,
) -> impl IntoView {
    view! {
        <div class="pagination-bar">
            <button
                class="page-btn"
                disabled=move || !pager.get().has_previous()
                on:click=move |_| on_previous.run(())
            >
                "‹ Previous"
            </button>
            <span class="page-label">
                {move || pager.get().label()}
                " · "
                {move || format!("{} records", total.get())}
            </span>
            <button
                class="page-btn"
                disabled=move || !pager.get().has_next()
                on:click=move |_| on_next.run(())
            >
                "Next ›"
            </button>
            <select
                class="page-size"
                prop:value=move || page_size.get().to_string()
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse() {
                        on_page_size.run(size);
                    }
                }
            >
                {PAGE_SIZES.iter().map(|size| {
                    let size = *size;
                    view! {
                        <option value=size.to_string() selected=move || page_size.get() == size>
                            {format!("{} / page", size)}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
