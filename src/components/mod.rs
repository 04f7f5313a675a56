pub mod app;
pub mod console_page;
pub mod order_modal;
pub mod orders_table;
pub mod sign_in;
pub mod snackbar;

pub use app::App;
pub use console_page::ConsolePage;
pub use order_modal::OrderModal;
pub use orders_table::OrdersTable;
pub use sign_in::SignInPage;
pub use snackbar::Snackbar;
