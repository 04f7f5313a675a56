pub mod order_service;
pub mod api_client;
pub mod memory_service;
pub mod backend;
pub mod order_store;
pub mod session_gate;
pub mod session_service;

pub use order_service::OrderService;
pub use api_client::ApiClient;
pub use memory_service::MemoryOrderService;
pub use backend::ConsoleBackend;
pub use order_store::OrderStoreClient;
pub use session_gate::{GateDecision, SessionGate};
pub use session_service::SessionService;
