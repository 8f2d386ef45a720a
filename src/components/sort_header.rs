//! Sort Header Component

use leptos::prelude::*;
use paged_list::{sort_glyph, FilterState};

/// Clickable column header. Clicking the active column flips the direction;
/// clicking another column sorts by it ascending.
#[component]
pub fn SortHeader(
    label: &'static str,
    field: &'static str,
    #[prop(into)] filter: Signal<FilterState>,
    #[prop(into)] on_sort: Callback<&'static str>,
) -> impl IntoView {
    let glyph = move || filter.with(|f| sort_glyph(f, field));
    let class = move || {
        if glyph().is_empty() { "sortable" } else { "sortable sorted" }
    };

    view! {
        <th class=class on:click=move |_| on_sort.run(field)>
            {label}
            " "
            <span class="sort-glyph">{glyph}</span>
        </th>
    }
}
