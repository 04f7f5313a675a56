use async_trait::async_trait;

use crate::config::{AppConfig, BackendKind};
use crate::error::OrderResult;
use crate::models::order::{NewOrder, Order, OrderId, OrderPatch};
use crate::services::api_client::ApiClient;
use crate::services::memory_service::MemoryOrderService;
use crate::services::order_service::OrderService;

/// Backend selected by `ORDER_BACKEND`
pub enum ConsoleBackend {
    Http(ApiClient),
    Memory(MemoryOrderService),
}

impl ConsoleBackend {
    pub fn from_config(config: &AppConfig) -> Self {
        match config.backend {
            BackendKind::Http => {
                log::info!("🌐 Order backend: {}", config.backend_url());
                ConsoleBackend::Http(ApiClient::with_base_url(config.backend_url()))
            }
            BackendKind::Memory => {
                log::info!("💾 Order backend: in-memory");
                ConsoleBackend::Memory(MemoryOrderService::new())
            }
        }
    }

    pub fn is_memory(&self) -> bool {
        matches!(self, ConsoleBackend::Memory(_))
    }
}

#[async_trait(?Send)]
impl OrderService for ConsoleBackend {
    async fn list(&self, filter: &str) -> OrderResult<Vec<Order>> {
        match self {
            ConsoleBackend::Http(client) => client.list(filter).await,
            ConsoleBackend::Memory(service) => service.list(filter).await,
        }
    }

    async fn create(&self, order: NewOrder) -> OrderResult<Order> {
        match self {
            ConsoleBackend::Http(client) => client.create(order).await,
            ConsoleBackend::Memory(service) => service.create(order).await,
        }
    }

    async fn update(&self, id: &OrderId, patch: OrderPatch) -> OrderResult<Order> {
        match self {
            ConsoleBackend::Http(client) => client.update(id, patch).await,
            ConsoleBackend::Memory(service) => service.update(id, patch).await,
        }
    }

    async fn delete(&self, id: &OrderId) -> OrderResult<()> {
        match self {
            ConsoleBackend::Http(client) => client.delete(id).await,
            ConsoleBackend::Memory(service) => service.delete(id).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn memory_backend_is_selected_by_config() {
        let config = AppConfig {
            backend: BackendKind::Memory,
            ..AppConfig::default()
        };
        let backend = ConsoleBackend::from_config(&config);
        assert!(backend.is_memory());

        let created = block_on(backend.create(NewOrder { username: "a".into() })).unwrap();
        assert_eq!(block_on(backend.list("")).unwrap(), vec![created]);
    }
}
