//! List Controller
//!
//! Owns one list view's filter state, last applied page and mutation state.
//! Filter changes fetch immediately, except free-text fields which are
//! debounced. Writes go through the controller and are followed by a full
//! refetch; rows are never patched locally.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::client::{ApiClient, Mutation};
use crate::debounce::{Debouncer, Sleeper};
use crate::error::{ApiError, ErrorSurface, FieldErrors};
use crate::filter::{FilterDefaults, FilterState, FilterValue, PAGE_FIELD, PAGE_SIZE_FIELD};
use crate::page::{PaginatedResult, Pager};
use crate::sequence::RequestSequencer;
use crate::transport::Transport;

pub const DEFAULT_DELETE_PROMPT: &str = "Delete this record?";

/// Static description of a list view
#[derive(Debug, Clone, PartialEq)]
pub struct ListConfig {
    /// Collection path, e.g. `tasks` or `products/low-stock`
    pub resource: String,
    /// Free-text fields; changes to these are debounced
    pub text_fields: BTreeSet<String>,
    pub defaults: FilterDefaults,
}

impl ListConfig {
    pub fn new(resource: &str, defaults: FilterDefaults) -> Self {
        Self {
            resource: resource.to_string(),
            text_fields: BTreeSet::new(),
            defaults,
        }
    }

    pub fn with_text_field(mut self, name: &str) -> Self {
        self.text_fields.insert(name.to_string());
        self
    }

    pub fn is_text(&self, name: &str) -> bool {
        self.text_fields.contains(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MutationState {
    #[default]
    Idle,
    Submitting,
    Error,
}

/// A destructive write waiting on the user
#[derive(Debug, Clone, PartialEq)]
pub struct PendingConfirmation {
    pub prompt: String,
    pub mutation: Mutation,
}

/// Everything a renderer needs, cloned out on every change
#[derive(Debug, Clone, PartialEq)]
pub struct ListSnapshot<R> {
    pub filter: FilterState,
    pub result: Option<PaginatedResult<R>>,
    pub loading: bool,
    pub banner: Option<String>,
    pub field_errors: FieldErrors,
    pub mutation: MutationState,
    pub confirmation: Option<PendingConfirmation>,
    pub session_expired: bool,
}

impl<R> ListSnapshot<R> {
    pub fn rows(&self) -> &[R] {
        self.result.as_ref().map(|r| r.data.as_slice()).unwrap_or(&[])
    }

    pub fn pager(&self) -> Pager {
        self.result.as_ref().map(PaginatedResult::pager).unwrap_or_default()
    }

    pub fn total_elements(&self) -> u64 {
        self.result.as_ref().map(|r| r.total_elements).unwrap_or(0)
    }

    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.field_errors.get(field).map(String::as_str)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Response applied to the view
    Applied,
    /// Failure applied to the view; previous rows kept
    Failed,
    /// A newer response was already applied
    Discarded,
    /// A later keystroke superseded this debounced fetch
    Superseded,
    /// Nothing to do (e.g. next page on the last page)
    Skipped,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MutationOutcome {
    Succeeded(Option<Value>),
    Rejected(ApiError),
    /// Stored behind the confirmation gate; nothing sent yet
    AwaitingConfirmation,
    /// No pending confirmation to act on
    Cancelled,
}

struct ListState<R> {
    filter: FilterState,
    result: Option<PaginatedResult<R>>,
    sequencer: RequestSequencer,
    banner: Option<String>,
    banner_from_fetch: bool,
    field_errors: FieldErrors,
    mutation: MutationState,
    confirmation: Option<PendingConfirmation>,
}

type Listener<R> = Rc<dyn Fn(&ListSnapshot<R>)>;

struct Inner<R, T> {
    config: ListConfig,
    client: ApiClient<T>,
    sleeper: Rc<dyn Sleeper>,
    window: Duration,
    debouncer: Debouncer,
    state: RefCell<ListState<R>>,
    listeners: RefCell<Vec<Listener<R>>>,
}

pub struct ListController<R, T> {
    inner: Rc<Inner<R, T>>,
}

impl<R, T> Clone for ListController<R, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<R, T> ListController<R, T>
where
    R: DeserializeOwned + Clone + 'static,
    T: Transport + 'static,
{
    pub fn new(
        config: ListConfig,
        client: ApiClient<T>,
        sleeper: Rc<dyn Sleeper>,
        window: Duration,
    ) -> Self {
        let state = ListState {
            filter: FilterState::new(config.defaults.clone()),
            result: None,
            sequencer: RequestSequencer::new(),
            banner: None,
            banner_from_fetch: false,
            field_errors: FieldErrors::new(),
            mutation: MutationState::Idle,
            confirmation: None,
        };
        Self {
            inner: Rc::new(Inner {
                config,
                client,
                sleeper,
                window,
                debouncer: Debouncer::new(),
                state: RefCell::new(state),
                listeners: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn config(&self) -> &ListConfig {
        &self.inner.config
    }

    pub fn client(&self) -> &ApiClient<T> {
        &self.inner.client
    }

    /// Called with a fresh snapshot after every state change
    pub fn subscribe(&self, listener: impl Fn(&ListSnapshot<R>) + 'static) {
        self.inner.listeners.borrow_mut().push(Rc::new(listener));
    }

    pub fn snapshot(&self) -> ListSnapshot<R> {
        let state = self.inner.state.borrow();
        ListSnapshot {
            filter: state.filter.clone(),
            result: state.result.clone(),
            loading: state.sequencer.in_flight() > 0,
            banner: state.banner.clone(),
            field_errors: state.field_errors.clone(),
            mutation: state.mutation,
            confirmation: state.confirmation.clone(),
            session_expired: self.inner.client.session().is_expired(),
        }
    }

    fn notify(&self) {
        let snapshot = self.snapshot();
        let listeners = self.inner.listeners.borrow().clone();
        for listener in listeners {
            listener(&snapshot);
        }
    }

    fn update_filter(&self, f: impl FnOnce(&mut FilterState)) {
        f(&mut self.inner.state.borrow_mut().filter);
        self.notify();
    }

    // ========================
    // Fetching
    // ========================

    /// Initial fetch when the view mounts
    pub async fn load(&self) -> FetchOutcome {
        self.fetch().await
    }

    /// Refetch the current page with the current filters
    pub async fn refresh(&self) -> FetchOutcome {
        self.inner.debouncer.cancel();
        self.fetch().await
    }

    async fn fetch(&self) -> FetchOutcome {
        let (seq, filter) = {
            let mut state = self.inner.state.borrow_mut();
            (state.sequencer.issue(), state.filter.clone())
        };
        self.notify();

        let resource = &self.inner.config.resource;
        tracing::debug!(%resource, seq = seq.value(), query = %filter.to_query_string(), "fetch issued");
        let result = self
            .inner
            .client
            .fetch_page::<R>(resource, &filter)
            .await;

        let outcome = {
            let mut state = self.inner.state.borrow_mut();
            if !state.sequencer.settle(seq) {
                tracing::debug!(%resource, seq = seq.value(), "stale response discarded");
                FetchOutcome::Discarded
            } else {
                match result {
                    Ok(page) => {
                        tracing::debug!(%resource, seq = seq.value(), rows = page.data.len(), "page applied");
                        state.result = Some(page);
                        if state.banner_from_fetch {
                            state.banner = None;
                            state.banner_from_fetch = false;
                        }
                        FetchOutcome::Applied
                    }
                    Err(err) => {
                        tracing::warn!(%resource, error = %err, "fetch failed");
                        state.banner = Some(Self::fetch_banner(&err));
                        state.banner_from_fetch = true;
                        FetchOutcome::Failed
                    }
                }
            }
        };
        self.notify();
        outcome
    }

    /// List fetches have no form to attach field errors to, so every
    /// failure becomes a banner; field messages are joined.
    fn fetch_banner(err: &ApiError) -> String {
        match err.surface() {
            ErrorSurface::Banner(message) => message,
            ErrorSurface::Inline(fields) => fields.into_values().collect::<Vec<_>>().join(" "),
        }
    }

    fn record_error(state: &mut ListState<R>, err: &ApiError) {
        match err.surface() {
            ErrorSurface::Inline(fields) => state.field_errors = fields,
            ErrorSurface::Banner(message) => state.banner = Some(message),
        }
    }

    // ========================
    // Filter Operations
    // ========================

    /// Set one filter field. Text fields wait out the debounce window;
    /// everything else fetches immediately.
    pub async fn set_field(&self, name: &str, value: FilterValue) -> FetchOutcome {
        self.update_filter(|filter| filter.set_field(name, value));
        if self.inner.config.is_text(name) {
            let settled = self
                .inner
                .debouncer
                .settle(self.inner.sleeper.as_ref(), self.inner.window)
                .await;
            if !settled {
                return FetchOutcome::Superseded;
            }
            return self.fetch().await;
        }
        self.refresh().await
    }

    pub async fn set_sort(&self, field: &str) -> FetchOutcome {
        self.update_filter(|filter| filter.set_sort(field));
        self.refresh().await
    }

    pub async fn go_to_page(&self, page: u32) -> FetchOutcome {
        self.set_field(PAGE_FIELD, page.into()).await
    }

    pub async fn set_page_size(&self, page_size: u32) -> FetchOutcome {
        self.set_field(PAGE_SIZE_FIELD, page_size.into()).await
    }

    pub async fn next_page(&self) -> FetchOutcome {
        match self.snapshot().pager().next() {
            Some(page) => self.go_to_page(page).await,
            None => FetchOutcome::Skipped,
        }
    }

    pub async fn previous_page(&self) -> FetchOutcome {
        match self.snapshot().pager().previous() {
            Some(page) => self.go_to_page(page).await,
            None => FetchOutcome::Skipped,
        }
    }

    /// Reset every filter to the view's defaults
    pub async fn clear(&self) -> FetchOutcome {
        self.update_filter(FilterState::clear);
        self.refresh().await
    }

    /// Restore filters from a query string (deep link) and fetch
    pub async fn apply_query(&self, query: &str) -> FetchOutcome {
        self.update_filter(|filter| filter.apply_query(query));
        self.refresh().await
    }

    // ========================
    // Mutations
    // ========================

    /// Run a write. Destructive writes are parked behind the confirmation
    /// gate instead of being sent.
    pub async fn mutate(&self, mutation: Mutation) -> MutationOutcome {
        if mutation.is_destructive() {
            self.request_confirmation(DEFAULT_DELETE_PROMPT, mutation);
            return MutationOutcome::AwaitingConfirmation;
        }
        self.submit(mutation).await
    }

    /// Open the confirmation gate for `mutation`; replaces any pending one
    pub fn request_confirmation(&self, prompt: &str, mutation: Mutation) {
        self.inner.state.borrow_mut().confirmation = Some(PendingConfirmation {
            prompt: prompt.to_string(),
            mutation,
        });
        self.notify();
    }

    pub fn cancel_confirmation(&self) {
        self.inner.state.borrow_mut().confirmation = None;
        self.notify();
    }

    /// Send the pending write. The gate closes before the request goes out,
    /// so a failure is reported with the modal already dismissed.
    pub async fn confirm(&self) -> MutationOutcome {
        let pending = self.inner.state.borrow_mut().confirmation.take();
        let Some(pending) = pending else {
            return MutationOutcome::Cancelled;
        };
        self.notify();
        self.submit(pending.mutation).await
    }

    async fn submit(&self, mutation: Mutation) -> MutationOutcome {
        {
            let mut state = self.inner.state.borrow_mut();
            state.mutation = MutationState::Submitting;
            state.banner = None;
            state.banner_from_fetch = false;
            state.field_errors.clear();
        }
        self.notify();

        tracing::debug!(method = mutation.method.as_str(), path = %mutation.path, "mutation submitted");
        match self.inner.client.send(&mutation).await {
            Ok(body) => {
                self.inner.state.borrow_mut().mutation = MutationState::Idle;
                self.refresh().await;
                MutationOutcome::Succeeded(body)
            }
            Err(err) => {
                {
                    let mut state = self.inner.state.borrow_mut();
                    state.mutation = MutationState::Error;
                    Self::record_error(&mut state, &err);
                }
                self.notify();
                if err.needs_refetch() {
                    self.refresh().await;
                }
                MutationOutcome::Rejected(err)
            }
        }
    }

    pub fn dismiss_banner(&self) {
        {
            let mut state = self.inner.state.borrow_mut();
            state.banner = None;
            state.banner_from_fetch = false;
            if state.mutation == MutationState::Error {
                state.mutation = MutationState::Idle;
            }
        }
        self.notify();
    }

    pub fn clear_field_errors(&self) {
        self.inner.state.borrow_mut().field_errors.clear();
        self.notify();
    }
}
