//! Navigation Bar Component
//!
//! Tab bar for switching between list views, plus sign-out.

use leptos::prelude::*;

use crate::api::auth;
use crate::context::use_app_context;
use crate::store::{store_navigate, store_signed_out, use_app_store, AppStateStoreFields, View};

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let sign_out = move |_| {
        auth::logout(&ctx.client());
        store_signed_out(&store, None);
    };

    view! {
        <nav class="nav-bar">
            {View::ALL.iter().map(|tab| {
                let tab = *tab;
                let tab_class = move || {
                    if store.view().get() == tab { "nav-tab active" } else { "nav-tab" }
                };
                view! {
                    <button class=tab_class on:click=move |_| store_navigate(&store, tab)>
                        {tab.label()}
                    </button>
                }
            }).collect_view()}
            <button class="nav-signout" on:click=sign_out>"Sign out"</button>
        </nav>
    }
}
