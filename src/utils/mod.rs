// Shared utilities

pub mod constants;
pub mod comparator;
pub mod pagination;
pub mod storage;

pub use constants::*;
pub use comparator::{compare, sort_orders, SortDirection};
pub use pagination::{empty_row_count, page_count, visible_rows, PageSize};
pub use storage::{BrowserSessionStorage, MemorySessionStorage, SessionStorage};
