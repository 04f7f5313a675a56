pub mod session_context;
pub mod use_orders;

pub use session_context::{use_session_handle, SessionContextProvider, SessionHandle};
pub use use_orders::{use_orders, UseOrdersHandle};
