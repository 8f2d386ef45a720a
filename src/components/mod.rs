//! UI Components
//!
//! Reusable Leptos components shared by the list views.

mod confirm_dialog;
mod error_banner;
mod filter_select;
mod list_frame;
mod nav_bar;
mod pagination_bar;
mod search_input;
mod sort_header;

pub use confirm_dialog::{ConfirmDialog, DeleteButton};
pub use error_banner::{ErrorBanner, FieldError};
pub use filter_select::{DateRange, FilterSelect};
pub use list_frame::ListFrame;
pub use nav_bar::NavBar;
pub use pagination_bar::PaginationBar;
pub use search_input::SearchInput;
pub use sort_header::SortHeader;
