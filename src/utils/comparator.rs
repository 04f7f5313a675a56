// ============================================================================
// COMPARATOR - Sort-key comparison for the orders table
// ============================================================================

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::models::order::{Order, OrderField, OrderId};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// Numeric ids compare numerically; as soon as one side is text both are
/// compared by their string form.
fn compare_ids(a: &OrderId, b: &OrderId) -> Ordering {
    match (a, b) {
        (OrderId::Number(x), OrderId::Number(y)) => x.cmp(y),
        _ => a.to_string().cmp(&b.to_string()),
    }
}

fn compare_ascending(a: &Order, b: &Order, key: OrderField) -> Ordering {
    match key {
        OrderField::Id => compare_ids(&a.id, &b.id),
        OrderField::Username => a.username.cmp(&b.username),
        OrderField::Status => a.status.cmp(&b.status),
        OrderField::CreatedAt => a.created_at.cmp(&b.created_at),
    }
}

pub fn compare(a: &Order, b: &Order, key: OrderField, direction: SortDirection) -> Ordering {
    let ordering = compare_ascending(a, b, key);
    match direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}

/// Sorted copy of `orders`. `sort_by` is stable, so equal keys keep their
/// original relative order in both directions.
pub fn sort_orders(orders: &[Order], key: OrderField, direction: SortDirection) -> Vec<Order> {
    let mut sorted = orders.to_vec();
    sorted.sort_by(|a, b| compare(a, b, key, direction));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(orders: &[Order]) -> Vec<String> {
        orders.iter().map(|o| o.id.to_string()).collect()
    }

    fn sample() -> Vec<Order> {
        vec![
            Order::new(1, "a", "open", "2024-01-01"),
            Order::new(2, "b", "closed", "2024-01-02"),
        ]
    }

    #[test]
    fn sorts_status_alphabetically() {
        let sorted = sort_orders(&sample(), OrderField::Status, SortDirection::Asc);
        assert_eq!(ids(&sorted), vec!["2", "1"]);
    }

    #[test]
    fn compare_reports_direction() {
        let orders = sample();
        assert_eq!(
            compare(&orders[0], &orders[1], OrderField::Username, SortDirection::Asc),
            Ordering::Less
        );
        assert_eq!(
            compare(&orders[0], &orders[1], OrderField::Username, SortDirection::Desc),
            Ordering::Greater
        );
        assert_eq!(
            compare(&orders[0], &orders[0], OrderField::Username, SortDirection::Desc),
            Ordering::Equal
        );
    }

    #[test]
    fn descending_reverses_distinct_keys_and_keeps_ties_stable() {
        let orders = vec![
            Order::new(1, "carol", "open", "2024-01-03"),
            Order::new(2, "alice", "open", "2024-01-01"),
            Order::new(3, "bob", "closed", "2024-01-02"),
            Order::new(4, "dave", "open", "2024-01-04"),
            Order::new(5, "erin", "closed", "2024-01-05"),
        ];

        let asc = sort_orders(&orders, OrderField::Username, SortDirection::Asc);
        let desc = sort_orders(&orders, OrderField::Username, SortDirection::Desc);
        let mut reversed = asc.clone();
        reversed.reverse();
        assert_eq!(desc, reversed);

        // Ties keep collection order in both directions
        let asc = sort_orders(&orders, OrderField::Status, SortDirection::Asc);
        assert_eq!(ids(&asc), vec!["3", "5", "1", "2", "4"]);
        let desc = sort_orders(&orders, OrderField::Status, SortDirection::Desc);
        assert_eq!(ids(&desc), vec!["1", "2", "4", "3", "5"]);
    }

    #[test]
    fn numeric_ids_sort_numerically() {
        let orders = vec![
            Order::new(10, "a", "", ""),
            Order::new(9, "b", "", ""),
            Order::new(100, "c", "", ""),
        ];
        let sorted = sort_orders(&orders, OrderField::Id, SortDirection::Asc);
        assert_eq!(ids(&sorted), vec!["9", "10", "100"]);
    }

    #[test]
    fn mixed_ids_compare_as_strings() {
        let orders = vec![
            Order::new(10, "a", "", ""),
            Order::new("9", "b", "", ""),
            Order::new("abc", "c", "", ""),
        ];
        let sorted = sort_orders(&orders, OrderField::Id, SortDirection::Asc);
        assert_eq!(ids(&sorted), vec!["10", "9", "abc"]);
    }
}
