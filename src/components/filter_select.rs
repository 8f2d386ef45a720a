//! Filter Select Component

use leptos::prelude::*;

/// Dropdown over fixed `(value, label)` options
#[component]
pub fn FilterSelect(
    label: &'static str,
    options: &'static [(&'static str, &'static str)],
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="filter-select">
            <span class="filter-label">{label}</span>
            <select
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {options.iter().map(|(option, text)| {
                    let option = *option;
                    view! {
                        <option value=option selected=move || value.get() == option>
                            {*text}
                        </option>
                    }
                }).collect_view()}
            </select>
        </label>
    }
}

/// From/to date inputs; the range is not validated client-side
#[component]
pub fn DateRange(
    #[prop(into)] from: Signal<String>,
    #[prop(into)] to: Signal<String>,
    #[prop(into)] on_from: Callback<String>,
    #[prop(into)] on_to: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="date-range">
            <input
                type="date"
                prop:value=move || from.get()
                on:change=move |ev| on_from.run(event_target_value(&ev))
            />
            <span>"–"</span>
            <input
                type="date"
                prop:value=move || to.get()
                on:change=move |ev| on_to.run(event_target_value(&ev))
            />
        </div>
    }
}
