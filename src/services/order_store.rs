// ============================================================================
// ORDER STORE CLIENT - Cached list + mutations with invalidation
// ============================================================================
// The cache is the only consistency mechanism: a successful mutation marks
// every cached list stale and bumps `generation`; readers keep seeing the
// last good snapshot until the refetch lands (stale-while-revalidate).
// ============================================================================

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use chrono::{DateTime, Utc};

use crate::error::OrderResult;
use crate::models::order::{NewOrder, Order, OrderId, OrderPatch};
use crate::services::order_service::OrderService;

#[derive(Debug, Default)]
struct CacheEntry {
    data: Option<Rc<Vec<Order>>>,
    stale: bool,
    in_flight: bool,
    failed: bool,
    fetched_at: Option<DateTime<Utc>>,
}

/// What a view does with a `list(requested)` result once it has landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListLanding {
    /// The view moved on to another filter; leave the table alone
    Discard,
    /// Render the snapshot
    Show,
    /// Render the snapshot, then fetch again: a mutation landed mid-flight
    ShowAndRefetch,
}

pub struct OrderStoreClient<S> {
    service: S,
    cache: RefCell<HashMap<String, CacheEntry>>,
    generation: Cell<u64>,
}

impl<S: OrderService> OrderStoreClient<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            cache: RefCell::new(HashMap::new()),
            generation: Cell::new(0),
        }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Bumped on every invalidation; views refetch when it changes
    pub fn generation(&self) -> u64 {
        self.generation.get()
    }

    /// Last successful result for `filter`, stale or not
    pub fn snapshot(&self, filter: &str) -> Option<Rc<Vec<Order>>> {
        self.cache
            .borrow()
            .get(filter)
            .and_then(|entry| entry.data.clone())
    }

    pub fn last_fetched_at(&self, filter: &str) -> Option<DateTime<Utc>> {
        self.cache.borrow().get(filter).and_then(|entry| entry.fetched_at)
    }

    pub fn is_fetching(&self, filter: &str) -> bool {
        self.cache
            .borrow()
            .get(filter)
            .map(|entry| entry.in_flight)
            .unwrap_or(false)
    }

    /// True when there is nothing cached or the cached result was invalidated,
    /// and no fetch for `filter` is already running
    pub fn needs_fetch(&self, filter: &str) -> bool {
        match self.cache.borrow().get(filter) {
            None => true,
            Some(entry) => !entry.in_flight && (entry.data.is_none() || entry.stale),
        }
    }

    fn last_list_failed(&self, filter: &str) -> bool {
        self.cache
            .borrow()
            .get(filter)
            .map(|entry| entry.failed)
            .unwrap_or(false)
    }

    /// Decide how a finished `list(requested)` applies while the view shows `current`
    pub fn landing(&self, requested: &str, current: &str) -> ListLanding {
        if requested != current {
            ListLanding::Discard
        } else if self.needs_fetch(requested) && !self.last_list_failed(requested) {
            ListLanding::ShowAndRefetch
        } else {
            ListLanding::Show
        }
    }

    /// Fetch `filter` and swap the cached collection on success. On failure the
    /// previous snapshot stays in place.
    pub async fn list(&self, filter: &str) -> OrderResult<Rc<Vec<Order>>> {
        let started_at = self.generation.get();
        self.cache
            .borrow_mut()
            .entry(filter.to_string())
            .or_default()
            .in_flight = true;

        let result = self.service.list(filter).await;

        let mut cache = self.cache.borrow_mut();
        let entry = cache.entry(filter.to_string()).or_default();
        entry.in_flight = false;
        entry.failed = result.is_err();

        match result {
            Ok(orders) => {
                let orders = Rc::new(orders);
                log::debug!("📦 Cached {} orders (filter: {:?})", orders.len(), filter);
                entry.data = Some(orders.clone());
                entry.fetched_at = Some(Utc::now());
                // A mutation landed while we were fetching: keep it stale so it refetches
                entry.stale = self.generation.get() != started_at;
                Ok(orders)
            }
            Err(e) => {
                log::error!("❌ Failed to list orders: {}", e);
                Err(e)
            }
        }
    }

    pub async fn create(&self, order: NewOrder) -> OrderResult<Order> {
        let created = self.service.create(order).await?;
        self.invalidate_all();
        Ok(created)
    }

    pub async fn update(&self, id: &OrderId, patch: OrderPatch) -> OrderResult<Order> {
        let updated = self.service.update(id, patch).await?;
        self.invalidate_all();
        Ok(updated)
    }

    pub async fn delete(&self, id: &OrderId) -> OrderResult<()> {
        self.service.delete(id).await?;
        self.invalidate_all();
        Ok(())
    }

    /// Mark every cached filter stale
    pub fn invalidate_all(&self) {
        for entry in self.cache.borrow_mut().values_mut() {
            entry.stale = true;
        }
        self.generation.set(self.generation.get() + 1);
        log::debug!("♻️ Order cache invalidated (generation {})", self.generation.get());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OrderError;
    use crate::services::memory_service::MemoryOrderService;
    use async_trait::async_trait;
    use futures::channel::oneshot;
    use futures::executor::block_on;

    fn store() -> OrderStoreClient<MemoryOrderService> {
        OrderStoreClient::new(MemoryOrderService::with_orders(vec![
            Order::new(1, "a", "open", "2024-01-01"),
            Order::new(2, "b", "closed", "2024-01-02"),
        ]))
    }

    #[test]
    fn list_caches_per_filter() {
        let store = store();
        assert!(store.needs_fetch(""));
        assert!(store.snapshot("").is_none());

        let orders = block_on(store.list("")).unwrap();
        assert_eq!(orders.len(), 2);
        assert!(!store.needs_fetch(""));
        assert!(store.needs_fetch("a"));
        assert_eq!(store.snapshot("").unwrap().len(), 2);
        assert!(store.last_fetched_at("").is_some());
    }

    #[test]
    fn mutation_invalidates_but_keeps_stale_snapshot() {
        let store = store();
        block_on(store.list("")).unwrap();
        block_on(store.list("b")).unwrap();

        block_on(store.update(&OrderId::Number(1), OrderPatch::status("closed"))).unwrap();

        assert_eq!(store.generation(), 1);
        assert!(store.needs_fetch(""));
        assert!(store.needs_fetch("b"));
        // stale data is still served until the refetch resolves
        assert_eq!(store.snapshot("").unwrap()[0].status, "open");

        let refreshed = block_on(store.list("")).unwrap();
        assert_eq!(refreshed[0].status, "closed");
        assert!(!store.needs_fetch(""));
    }

    #[test]
    fn failed_mutation_does_not_invalidate() {
        let store = store();
        block_on(store.list("")).unwrap();

        let result = block_on(store.delete(&OrderId::Number(99)));
        assert_eq!(result, Err(OrderError::NotFound(OrderId::Number(99))));
        assert_eq!(store.generation(), 0);
        assert!(!store.needs_fetch(""));
    }

    #[test]
    fn delete_twice_reports_not_found() {
        let store = store();
        block_on(store.delete(&OrderId::Number(2))).unwrap();
        assert_eq!(
            block_on(store.delete(&OrderId::Number(2))),
            Err(OrderError::NotFound(OrderId::Number(2)))
        );
        let remaining = block_on(store.list("")).unwrap();
        assert!(remaining.iter().all(|o| o.id != OrderId::Number(2)));
    }

    /// Lists from the wrapped service, then holds the result until released
    struct HeldListService {
        inner: MemoryOrderService,
        release: RefCell<Option<oneshot::Receiver<()>>>,
    }

    #[async_trait(?Send)]
    impl OrderService for HeldListService {
        async fn list(&self, filter: &str) -> OrderResult<Vec<Order>> {
            let rows = self.inner.list(filter).await?;
            let release = self.release.borrow_mut().take();
            if let Some(release) = release {
                let _ = release.await;
            }
            Ok(rows)
        }
        async fn create(&self, order: NewOrder) -> OrderResult<Order> {
            self.inner.create(order).await
        }
        async fn update(&self, id: &OrderId, patch: OrderPatch) -> OrderResult<Order> {
            self.inner.update(id, patch).await
        }
        async fn delete(&self, id: &OrderId) -> OrderResult<()> {
            self.inner.delete(id).await
        }
    }

    #[test]
    fn mutation_during_list_forces_a_refetch() {
        let (release, held) = oneshot::channel();
        let store = OrderStoreClient::new(HeldListService {
            inner: MemoryOrderService::with_orders(vec![Order::new(1, "a", "open", "2024-01-01")]),
            release: RefCell::new(Some(held)),
        });

        let client = &store;
        let mutate = async move {
            client
                .update(&OrderId::Number(1), OrderPatch::status("closed"))
                .await
                .unwrap();
            // the list is still running, so nothing to start yet
            assert!(client.is_fetching(""));
            assert!(!client.needs_fetch(""));
            release.send(()).unwrap();
        };
        let (listed, ()) = block_on(async { futures::join!(client.list(""), mutate) });

        assert_eq!(listed.unwrap()[0].status, "open");
        assert_eq!(store.generation(), 1);
        assert_eq!(store.landing("", ""), ListLanding::ShowAndRefetch);

        let refreshed = block_on(store.list("")).unwrap();
        assert_eq!(refreshed[0].status, "closed");
        assert_eq!(store.landing("", ""), ListLanding::Show);
    }

    #[test]
    fn late_response_for_an_old_filter_is_discarded() {
        let store = store();
        block_on(store.list("ab")).unwrap();
        // "a" resolves after the view already moved to "ab"
        block_on(store.list("a")).unwrap();

        assert_eq!(store.landing("a", "ab"), ListLanding::Discard);
        assert_eq!(store.landing("ab", "ab"), ListLanding::Show);
        assert_eq!(store.snapshot("ab").unwrap().len(), 0);
        assert_eq!(store.snapshot("a").unwrap().len(), 1);
    }

    struct UnreachableService;

    #[async_trait(?Send)]
    impl OrderService for UnreachableService {
        async fn list(&self, _filter: &str) -> OrderResult<Vec<Order>> {
            Err(OrderError::Transport("unreachable".into()))
        }
        async fn create(&self, _order: NewOrder) -> OrderResult<Order> {
            Err(OrderError::Transport("unreachable".into()))
        }
        async fn update(&self, _id: &OrderId, _patch: OrderPatch) -> OrderResult<Order> {
            Err(OrderError::Transport("unreachable".into()))
        }
        async fn delete(&self, _id: &OrderId) -> OrderResult<()> {
            Err(OrderError::Transport("unreachable".into()))
        }
    }

    #[test]
    fn failed_list_does_not_ask_for_a_refetch_loop() {
        let store = OrderStoreClient::new(UnreachableService);
        assert!(block_on(store.list("")).is_err());

        assert!(store.needs_fetch(""));
        assert_eq!(store.landing("", ""), ListLanding::Show);
    }

    #[test]
    fn create_forwards_empty_username_to_service() {
        let store = store();
        let result = block_on(store.create(NewOrder { username: String::new() }));
        assert!(matches!(result, Err(OrderError::Validation(_))));
        assert_eq!(store.generation(), 0);
    }
}
