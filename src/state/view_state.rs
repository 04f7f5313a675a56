// ============================================================================
// VIEW STATE - Sort and pagination of the orders table
// ============================================================================

use crate::models::order::{Order, OrderField};
use crate::utils::comparator::{sort_orders, SortDirection};
use crate::utils::pagination::{empty_row_count, page_count, visible_rows, PageSize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    pub sort_key: OrderField,
    pub sort_direction: SortDirection,
    pub page_index: usize,
    pub page_size: PageSize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::with_page_size(PageSize::default())
    }
}

impl ViewState {
    pub fn with_page_size(page_size: PageSize) -> Self {
        Self {
            sort_key: OrderField::Status,
            sort_direction: SortDirection::Asc,
            page_index: 0,
            page_size,
        }
    }

    /// Header click: the active ascending column flips to descending, anything else sorts ascending
    pub fn request_sort(&mut self, key: OrderField) {
        let is_asc = self.sort_key == key && self.sort_direction == SortDirection::Asc;
        self.sort_direction = if is_asc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        self.sort_key = key;
    }

    pub fn set_page(&mut self, page_index: usize) {
        self.page_index = page_index;
    }

    /// Changing rows per page returns to the first page
    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.page_size = page_size;
        self.page_index = 0;
    }

    pub fn next_page(&mut self, total_rows: usize) {
        let last = page_count(total_rows, self.page_size.rows()).saturating_sub(1);
        self.page_index = (self.page_index + 1).min(last);
    }

    pub fn previous_page(&mut self) {
        self.page_index = self.page_index.saturating_sub(1);
    }

    /// Sorted, sliced rows plus the layout padding for the current page
    pub fn page_of(&self, orders: &[Order]) -> TablePage {
        let sorted = sort_orders(orders, self.sort_key, self.sort_direction);
        let rows = visible_rows(&sorted, self.page_index, self.page_size.rows()).to_vec();
        TablePage {
            rows,
            empty_rows: empty_row_count(self.page_index, self.page_size.rows(), orders.len()),
            total_rows: orders.len(),
            page_count: page_count(orders.len(), self.page_size.rows()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TablePage {
    pub rows: Vec<Order>,
    pub empty_rows: usize,
    pub total_rows: usize,
    pub page_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::order::OrderId;

    #[test]
    fn defaults_match_console() {
        let view = ViewState::default();
        assert_eq!(view.sort_key, OrderField::Status);
        assert_eq!(view.sort_direction, SortDirection::Asc);
        assert_eq!(view.page_size.rows(), 5);
    }

    #[test]
    fn header_click_toggles_active_column() {
        let mut view = ViewState::default();
        view.request_sort(OrderField::Status);
        assert_eq!(view.sort_direction, SortDirection::Desc);
        view.request_sort(OrderField::Status);
        assert_eq!(view.sort_direction, SortDirection::Asc);

        view.request_sort(OrderField::Status);
        view.request_sort(OrderField::Username);
        assert_eq!(view.sort_key, OrderField::Username);
        assert_eq!(view.sort_direction, SortDirection::Asc);
    }

    #[test]
    fn page_size_change_resets_page() {
        let mut view = ViewState::default();
        view.set_page(3);
        view.set_page_size(PageSize::Ten);
        assert_eq!(view.page_index, 0);
    }

    #[test]
    fn sort_then_paginate_scenario() {
        let orders = vec![
            Order::new(1, "a", "open", "2024-01-01"),
            Order::new(2, "b", "closed", "2024-01-02"),
        ];
        let view = ViewState::default();
        let page = view.page_of(&orders);
        let ids: Vec<_> = page.rows.iter().map(|o| o.id.clone()).collect();
        assert_eq!(ids, vec![OrderId::Number(2), OrderId::Number(1)]);

        // A page size of 1 is outside the pager's set, so slice directly
        let sorted = sort_orders(&orders, OrderField::Status, SortDirection::Asc);
        assert_eq!(visible_rows(&sorted, 1, 1), &[orders[0].clone()]);
    }

    #[test]
    fn paging_is_clamped() {
        let orders: Vec<Order> = (0..12).map(|i| Order::new(i, "u", "s", "")).collect();
        let mut view = ViewState::default();
        view.next_page(orders.len());
        view.next_page(orders.len());
        view.next_page(orders.len());
        assert_eq!(view.page_index, 2);

        let page = view.page_of(&orders);
        assert_eq!(page.rows.len(), 2);
        assert_eq!(page.empty_rows, 3);
        assert_eq!(page.page_count, 3);

        view.previous_page();
        view.previous_page();
        view.previous_page();
        assert_eq!(view.page_index, 0);
    }

    #[test]
    fn page_past_end_is_empty_not_error() {
        let orders = vec![Order::new(1, "a", "open", "")];
        let mut view = ViewState::default();
        view.set_page(4);
        assert!(view.page_of(&orders).rows.is_empty());
    }
}
