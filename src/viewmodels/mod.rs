pub mod orders_viewmodel;

pub use orders_viewmodel::{CrudError, CrudOutcome, OrdersViewModel};
