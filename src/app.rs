//! Stockroom Frontend App
//!
//! Root component: wires configuration, session and client into context,
//! then shows either the login screen or the active list view.

use leptos::prelude::*;
use paged_list::{HttpTransport, Session, SESSION_EXPIRED_MESSAGE};
use reactive_stores::Store;

use crate::api::{auth, Client};
use crate::components::NavBar;
use crate::config;
use crate::context::AppContext;
use crate::store::{store_signed_out, AppState, AppStateStoreFields, View};
use crate::views::{
    LoginView, LowStockList, MispricedList, PurchaseList, SaleList, SupplierList, TaskList, UserList,
};

#[component]
pub fn App() -> impl IntoView {
    let config = config::load();
    tracing::info!(api = %config.api_base_url, debounce_ms = config.debounce_ms, "starting");

    let session = match auth::load_token() {
        Some(token) => Session::with_token(token),
        None => Session::new(),
    };
    let signed_in = session.is_signed_in();
    let client = Client::new(HttpTransport::new(config.clone()), session.clone());

    let store = Store::new(AppState::new(signed_in));
    provide_context(AppContext::new(config, client));
    provide_context(store);

    // Any 401 on an authenticated request sends the user back to login
    session.on_expired(move || {
        web_sys::console::log_1(&"[APP] Session expired".into());
        auth::clear_token();
        store_signed_out(&store, Some(SESSION_EXPIRED_MESSAGE.to_string()));
    });

    let active_view = move || match store.view().get() {
        View::Tasks => view! { <TaskList /> }.into_any(),
        View::LowStock => view! { <LowStockList /> }.into_any(),
        View::Mispriced => view! { <MispricedList /> }.into_any(),
        View::Users => view! { <UserList /> }.into_any(),
        View::Suppliers => view! { <SupplierList /> }.into_any(),
        View::Purchases => view! { <PurchaseList /> }.into_any(),
        View::Sales => view! { <SaleList /> }.into_any(),
    };

    view! {
        <Show
            when=move || store.signed_in().get()
            fallback=|| view! { <LoginView /> }
        >
            <div class="app-layout">
                <NavBar />
                <main class="main-content">{active_view}</main>
            </div>
        </Show>
    }
}
