// ============================================================================
// ORDERS STORE - Snapshot rendered by the table (held in a use_state handle)
// ============================================================================

use std::rc::Rc;

use crate::models::order::Order;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct OrdersStore {
    pub orders: Option<Rc<Vec<Order>>>,
    pub loading: bool,
    pub error: Option<String>,
    pub last_fetch_time: Option<i64>,
}

impl OrdersStore {
    /// First load still pending: nothing to show yet
    pub fn is_initial_load(&self) -> bool {
        self.orders.is_none() && self.error.is_none()
    }

    pub fn rows(&self) -> &[Order] {
        self.orders.as_deref().map(Vec::as_slice).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_load_until_data_or_error() {
        let mut store = OrdersStore::default();
        assert!(store.is_initial_load());
        assert!(store.rows().is_empty());

        store.error = Some("offline".into());
        assert!(!store.is_initial_load());

        store.orders = Some(Rc::new(vec![Order::new(1, "a", "open", "")]));
        assert_eq!(store.rows().len(), 1);
    }
}
