// ============================================================================
// STATE MODULE - Plain Rust state, no DOM access
// ============================================================================

pub mod view_state;
pub mod modal_state;
pub mod notifications;
pub mod session_state;

pub use view_state::{TablePage, ViewState};
pub use modal_state::{ModalAction, ModalMachine, ModalState, Submission};
pub use notifications::{NotificationQueue, Notifier, SubscriptionId};
pub use session_state::{SessionState, SessionTokens};
