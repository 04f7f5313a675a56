use async_trait::async_trait;

use crate::error::OrderResult;
use crate::models::order::{NewOrder, Order, OrderId, OrderPatch};

/// The remote order service: four CRUD operations.
///
/// Futures are `!Send` because the browser backends hold JS handles.
#[async_trait(?Send)]
pub trait OrderService {
    /// Full collection matching `filter` (empty filter = everything)
    async fn list(&self, filter: &str) -> OrderResult<Vec<Order>>;

    async fn create(&self, order: NewOrder) -> OrderResult<Order>;

    async fn update(&self, id: &OrderId, patch: OrderPatch) -> OrderResult<Order>;

    async fn delete(&self, id: &OrderId) -> OrderResult<()>;
}
