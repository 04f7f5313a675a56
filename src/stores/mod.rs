pub mod orders_store;

pub use orders_store::OrdersStore;
