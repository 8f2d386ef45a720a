//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! Holds navigation and session status; list data lives in each view.

use leptos::prelude::*;
use reactive_stores::Store;

/// Top-level screens, one per list view
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Tasks,
    LowStock,
    Mispriced,
    Users,
    Suppliers,
    Purchases,
    Sales,
}

impl View {
    pub const ALL: [View; 7] = [
        View::Tasks,
        View::LowStock,
        View::Mispriced,
        View::Users,
        View::Suppliers,
        View::Purchases,
        View::Sales,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            View::Tasks => "Tasks",
            View::LowStock => "Low stock",
            View::Mispriced => "Pricing alerts",
            View::Users => "Users",
            View::Suppliers => "Suppliers",
            View::Purchases => "Purchases",
            View::Sales => "Sales",
        }
    }
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Screen shown when signed in
    pub view: View,
    pub signed_in: bool,
    /// Message shown on the login screen (e.g. after a 401)
    pub notice: Option<String>,
}

impl AppState {
    pub fn new(signed_in: bool) -> Self {
        Self {
            signed_in,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_navigate(store: &AppStore, view: View) {
    *store.view().write() = view;
}

pub fn store_signed_in(store: &AppStore) {
    *store.signed_in().write() = true;
    *store.notice().write() = None;
}

/// Drop back to the login screen with a reason
pub fn store_signed_out(store: &AppStore, notice: Option<String>) {
    *store.signed_in().write() = false;
    *store.notice().write() = notice;
}
