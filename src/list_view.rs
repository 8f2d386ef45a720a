//! List View Binding
//!
//! Bridges a `ListController` to Leptos: every controller change is copied
//! into a snapshot signal, and UI events are spawned as controller calls.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;
use paged_list::{
    FilterState, FilterValue, HttpTransport, ListConfig, ListController, ListSnapshot, Mutation,
    Pager,
};
use serde::de::DeserializeOwned;

use crate::components::{ConfirmDialog, ErrorBanner, PaginationBar};
use crate::context::use_app_context;

type Controller<R> = ListController<R, HttpTransport>;

pub struct ListHandle<R: 'static> {
    controller: StoredValue<Controller<R>, LocalStorage>,
    pub snapshot: RwSignal<ListSnapshot<R>>,
}

impl<R: 'static> Clone for ListHandle<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: 'static> Copy for ListHandle<R> {}

/// Create the controller for a list view and start the initial load
pub fn use_list<R>(config: ListConfig) -> ListHandle<R>
where
    R: DeserializeOwned + Clone + PartialEq + Send + Sync + 'static,
{
    let ctx = use_app_context();
    let controller = ctx.list_controller::<R>(config);
    let snapshot = RwSignal::new(controller.snapshot());
    controller.subscribe(move |s| {
        let _ = snapshot.try_set(s.clone());
    });

    let handle = ListHandle {
        controller: StoredValue::new_local(controller),
        snapshot,
    };
    handle.spawn(|c| async move {
        c.load().await;
    });
    handle
}

impl<R> ListHandle<R>
where
    R: DeserializeOwned + Clone + PartialEq + Send + Sync + 'static,
{
    fn spawn<F, Fut>(&self, f: F)
    where
        F: FnOnce(Controller<R>) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        if let Some(controller) = self.controller.try_get_value() {
            spawn_local(f(controller));
        }
    }

    // ========================
    // Derived Signals
    // ========================

    pub fn rows(&self) -> Memo<Vec<R>> {
        let snapshot = self.snapshot;
        Memo::new(move |_| snapshot.with(|s| s.rows().to_vec()))
    }

    pub fn filter(&self) -> Signal<FilterState> {
        let snapshot = self.snapshot;
        Signal::derive(move || snapshot.with(|s| s.filter.clone()))
    }

    /// Current text of a filter field, for bound inputs
    pub fn text(&self, field: &'static str) -> Signal<String> {
        let snapshot = self.snapshot;
        Signal::derive(move || snapshot.with(|s| s.filter.text(field)))
    }

    pub fn loading(&self) -> Signal<bool> {
        let snapshot = self.snapshot;
        Signal::derive(move || snapshot.with(|s| s.loading))
    }

    pub fn banner(&self) -> Signal<Option<String>> {
        let snapshot = self.snapshot;
        Signal::derive(move || snapshot.with(|s| s.banner.clone()))
    }

    pub fn field_error(&self, field: &'static str) -> Signal<Option<String>> {
        let snapshot = self.snapshot;
        Signal::derive(move || snapshot.with(|s| s.field_error(field).map(str::to_string)))
    }

    pub fn pager(&self) -> Signal<Pager> {
        let snapshot = self.snapshot;
        Signal::derive(move || snapshot.with(|s| s.pager()))
    }

    pub fn page_size(&self) -> Signal<u32> {
        let snapshot = self.snapshot;
        Signal::derive(move || snapshot.with(|s| s.filter.page_size()))
    }

    pub fn total(&self) -> Signal<u64> {
        let snapshot = self.snapshot;
        Signal::derive(move || snapshot.with(|s| s.total_elements()))
    }

    pub fn confirmation_prompt(&self) -> Signal<Option<String>> {
        let snapshot = self.snapshot;
        Signal::derive(move || {
            snapshot.with(|s| s.confirmation.as_ref().map(|c| c.prompt.clone()))
        })
    }

    pub fn submitting(&self) -> Signal<bool> {
        let snapshot = self.snapshot;
        Signal::derive(move || {
            snapshot.with(|s| s.mutation == paged_list::MutationState::Submitting)
        })
    }

    // ========================
    // Actions
    // ========================

    pub fn set_field(&self, name: &'static str, value: FilterValue) {
        self.spawn(move |c| async move {
            c.set_field(name, value).await;
        });
    }

    pub fn set_sort(&self, field: &'static str) {
        self.spawn(move |c| async move {
            c.set_sort(field).await;
        });
    }

    pub fn next_page(&self) {
        self.spawn(|c| async move {
            c.next_page().await;
        });
    }

    pub fn previous_page(&self) {
        self.spawn(|c| async move {
            c.previous_page().await;
        });
    }

    pub fn set_page_size(&self, page_size: u32) {
        self.spawn(move |c| async move {
            c.set_page_size(page_size).await;
        });
    }

    pub fn clear(&self) {
        self.spawn(|c| async move {
            c.clear().await;
        });
    }

    pub fn refresh(&self) {
        self.spawn(|c| async move {
            c.refresh().await;
        });
    }

    pub fn mutate(&self, mutation: Mutation) {
        self.mutate_then(mutation, || {});
    }

    /// Run a write and call `on_success` once the server accepted it
    pub fn mutate_then(&self, mutation: Mutation, on_success: impl FnOnce() + 'static) {
        self.spawn(move |c| async move {
            if let paged_list::MutationOutcome::Succeeded(_) = c.mutate(mutation).await {
                on_success();
            }
        });
    }

    pub fn ask_confirmation(&self, prompt: String, mutation: Mutation) {
        self.controller
            .with_value(|c| c.request_confirmation(&prompt, mutation));
    }

    pub fn confirm(&self) {
        self.spawn(|c| async move {
            c.confirm().await;
        });
    }

    pub fn cancel_confirmation(&self) {
        self.controller.with_value(|c| c.cancel_confirmation());
    }

    pub fn dismiss_banner(&self) {
        self.controller.with_value(|c| c.dismiss_banner());
    }

    // ========================
    // Shared Chrome
    // ========================

    pub fn banner_view(&self) -> impl IntoView {
        let list = *self;
        view! {
            <ErrorBanner
                message=self.banner()
                on_dismiss=move |_| list.dismiss_banner()
            />
        }
    }

    pub fn pagination_view(&self) -> impl IntoView {
        let list = *self;
        view! {
            <PaginationBar
                pager=self.pager()
                total=self.total()
                page_size=self.page_size()
                on_previous=move |_| list.previous_page()
                on_next=move |_| list.next_page()
                on_page_size=move |size: u32| list.set_page_size(size)
            />
        }
    }

    pub fn confirm_view(&self) -> impl IntoView {
        let list = *self;
        view! {
            <ConfirmDialog
                prompt=self.confirmation_prompt()
                on_confirm=move |_| list.confirm()
                on_cancel=move |_| list.cancel_confirmation()
            />
        }
    }

    /// Placeholder row when a loaded page is empty
    pub fn empty_view(&self, columns: u32, text: &'static str) -> impl IntoView {
        let snapshot = self.snapshot;
        move || {
            snapshot
                .with(|s| s.result.is_some() && s.rows().is_empty())
                .then(|| view! { <tr class="empty-row"><td colspan=columns>{text}</td></tr> })
        }
    }
}
