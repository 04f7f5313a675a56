// ============================================================================
// MEMORY ORDER SERVICE - In-process backend (offline demo mode, tests)
// ============================================================================

use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};

use crate::error::{OrderError, OrderResult};
use crate::models::order::{NewOrder, Order, OrderId, OrderPatch};
use crate::services::order_service::OrderService;

/// Holds orders in memory with the same success/failure contract as the HTTP service
#[derive(Debug, Default)]
pub struct MemoryOrderService {
    orders: RefCell<Vec<Order>>,
    next_id: Cell<i64>,
    list_calls: Cell<usize>,
}

impl MemoryOrderService {
    pub fn new() -> Self {
        Self::with_orders(Vec::new())
    }

    pub fn with_orders(orders: Vec<Order>) -> Self {
        let max_id = orders
            .iter()
            .filter_map(|o| match o.id {
                OrderId::Number(n) => Some(n),
                OrderId::Text(_) => None,
            })
            .max()
            .unwrap_or(0);

        Self {
            orders: RefCell::new(orders),
            next_id: Cell::new(max_id + 1),
            list_calls: Cell::new(0),
        }
    }

    /// Number of `list` round trips served so far
    pub fn list_calls(&self) -> usize {
        self.list_calls.get()
    }

    fn matches(order: &Order, filter: &str) -> bool {
        if filter.is_empty() {
            return true;
        }
        let needle = filter.to_lowercase();
        order.username.to_lowercase().contains(&needle)
            || order.status.to_lowercase().contains(&needle)
            || order.id.to_string().contains(&needle)
    }
}

#[async_trait(?Send)]
impl OrderService for MemoryOrderService {
    async fn list(&self, filter: &str) -> OrderResult<Vec<Order>> {
        self.list_calls.set(self.list_calls.get() + 1);
        Ok(self
            .orders
            .borrow()
            .iter()
            .filter(|o| Self::matches(o, filter))
            .cloned()
            .collect())
    }

    async fn create(&self, order: NewOrder) -> OrderResult<Order> {
        if order.username.trim().is_empty() {
            return Err(OrderError::Validation("username is required".to_string()));
        }

        let id = self.next_id.get();
        self.next_id.set(id + 1);

        let created = Order::new(
            id,
            order.username,
            "open",
            Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        );
        self.orders.borrow_mut().push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: &OrderId, patch: OrderPatch) -> OrderResult<Order> {
        let mut orders = self.orders.borrow_mut();
        let order = orders
            .iter_mut()
            .find(|o| &o.id == id)
            .ok_or_else(|| OrderError::NotFound(id.clone()))?;
        order.apply(&patch);
        Ok(order.clone())
    }

    async fn delete(&self, id: &OrderId) -> OrderResult<()> {
        let mut orders = self.orders.borrow_mut();
        let position = orders
            .iter()
            .position(|o| &o.id == id)
            .ok_or_else(|| OrderError::NotFound(id.clone()))?;
        orders.remove(position);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn create_assigns_next_numeric_id() {
        let service = MemoryOrderService::with_orders(vec![Order::new(7, "a", "open", "")]);
        let created = block_on(service.create(NewOrder { username: "bob".into() })).unwrap();
        assert_eq!(created.id, OrderId::Number(8));
        assert_eq!(created.status, "open");
        assert!(!created.created_at.is_empty());
    }

    #[test]
    fn create_rejects_empty_username() {
        let service = MemoryOrderService::new();
        let result = block_on(service.create(NewOrder { username: String::new() }));
        assert!(matches!(result, Err(OrderError::Validation(_))));
    }

    #[test]
    fn second_delete_is_not_found() {
        let service = MemoryOrderService::with_orders(vec![Order::new(2, "b", "closed", "")]);
        block_on(service.delete(&OrderId::Number(2))).unwrap();
        assert_eq!(
            block_on(service.delete(&OrderId::Number(2))),
            Err(OrderError::NotFound(OrderId::Number(2)))
        );
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let service = MemoryOrderService::new();
        let result = block_on(service.update(&OrderId::from("nope"), OrderPatch::status("x")));
        assert_eq!(result, Err(OrderError::NotFound(OrderId::from("nope"))));
    }

    #[test]
    fn list_filters_case_insensitively() {
        let service = MemoryOrderService::with_orders(vec![
            Order::new(1, "Alice", "open", ""),
            Order::new(2, "bob", "closed", ""),
        ]);
        let found = block_on(service.list("ALI")).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].username, "Alice");
        assert_eq!(service.list_calls(), 1);
    }
}
