//! List Views
//!
//! One screen per backend collection, each built on its own list controller.

mod login;
mod low_stock_list;
mod mispriced_list;
mod purchase_list;
mod sale_list;
mod supplier_list;
mod task_list;
mod user_list;

pub use login::LoginView;
pub use low_stock_list::LowStockList;
pub use mispriced_list::MispricedList;
pub use purchase_list::PurchaseList;
pub use sale_list::SaleList;
pub use supplier_list::SupplierList;
pub use task_list::TaskList;
pub use user_list::UserList;
