pub mod order;
pub mod auth;
pub mod notification;

pub use order::{NewOrder, Order, OrderDraft, OrderField, OrderId, OrderPatch};
pub use auth::{SignInRequest, SignInResponse};
pub use notification::{Notification, NotificationKind};
