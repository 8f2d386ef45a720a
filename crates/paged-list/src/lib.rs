//! Paged List
//!
//! The filter -> debounced fetch -> paginated render -> confirmed mutation ->
//! refetch loop shared by every list view, independent of any UI toolkit.
//!
//! - filter / page: query shape and response page
//! - client / transport / session: REST access with bearer auth
//! - debounce / sequence: keystroke debouncing and stale-response rejection
//! - controller: one list view's state machine

mod client;
mod config;
mod controller;
mod debounce;
mod error;
mod filter;
mod page;
mod sequence;
mod session;
mod transport;

#[cfg(test)]
mod testing;

pub use client::{ApiClient, Mutation};
pub use config::ClientConfig;
pub use controller::{
    FetchOutcome, ListConfig, ListController, ListSnapshot, MutationOutcome, MutationState,
    PendingConfirmation, DEFAULT_DELETE_PROMPT,
};
pub use debounce::{DebounceTicket, Debouncer, Sleeper};
pub use error::{ApiError, ErrorSurface, FieldErrors, RETRY_MESSAGE, SESSION_EXPIRED_MESSAGE};
pub use filter::{
    FilterDefaults, FilterState, FilterValue, SortDirection, PAGE_FIELD, PAGE_SIZE_FIELD,
};
pub use page::{sort_glyph, PaginatedResult, Pager};
pub use sequence::{RequestSequencer, Seq};
pub use session::Session;
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Method, Transport};
