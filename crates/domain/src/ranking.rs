// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Buyer ranking aggregation.

use crate::types::Order;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One row of the buyer ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingEntry {
    /// 1-based position after sorting.
    pub position: usize,
    /// The customer name the orders were grouped under.
    pub customer_name: String,
    /// Total numbers purchased across all of the customer's orders.
    pub total_numbers: u64,
    /// How many orders contributed to the total.
    pub order_count: usize,
}

impl RankingEntry {
    /// Returns the medal for the top three positions.
    #[must_use]
    pub const fn medal(&self) -> Option<&'static str> {
        match self.position {
            1 => Some("🥇"),
            2 => Some("🥈"),
            3 => Some("🥉"),
            _ => None,
        }
    }
}

/// Groups orders by customer name and ranks customers by purchased numbers.
///
/// Names are compared after trimming. The sort is stable, so customers
/// with equal totals keep the order in which they first appear.
///
/// # Arguments
///
/// * `orders` - Every order to consider
///
/// # Returns
///
/// One entry per customer, sorted by descending total.
#[must_use]
pub fn compute_ranking(orders: &[Order]) -> Vec<RankingEntry> {
    let mut index_by_name: HashMap<&str, usize> = HashMap::new();
    let mut entries: Vec<RankingEntry> = Vec::new();

    for order in orders {
        let name: &str = order.customer_name.trim();
        let index: usize = *index_by_name.entry(name).or_insert_with(|| {
            entries.push(RankingEntry {
                position: 0,
                customer_name: name.to_string(),
                total_numbers: 0,
                order_count: 0,
            });
            entries.len() - 1
        });

        let entry: &mut RankingEntry = &mut entries[index];
        entry.total_numbers = entry.total_numbers.saturating_add(order.purchased_count());
        entry.order_count += 1;
    }

    entries.sort_by(|a, b| b.total_numbers.cmp(&a.total_numbers));
    for (i, entry) in entries.iter_mut().enumerate() {
        entry.position = i + 1;
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{OrderId, OrderStatus};

    fn order(id: u64, name: &str, count: u32) -> Order {
        Order {
            id: OrderId::from(id),
            external_id: Some(format!("order-{id}")),
            customer_name: name.to_string(),
            customer_phone: None,
            status: OrderStatus::Pending,
            order_date: None,
            numbers: Vec::new(),
            numbers_count: Some(count),
        }
    }

    #[test]
    fn test_ranking_groups_and_sums_per_customer() {
        let orders = vec![order(1, "A", 3), order(2, "B", 2), order(3, "A", 1)];

        let ranking = compute_ranking(&orders);

        assert_eq!(ranking.len(), 2);
        assert_eq!(ranking[0].customer_name, "A");
        assert_eq!(ranking[0].total_numbers, 4);
        assert_eq!(ranking[0].order_count, 2);
        assert_eq!(ranking[1].customer_name, "B");
        assert_eq!(ranking[1].total_numbers, 2);
    }

    #[test]
    fn test_ranking_sorted_descending_with_positions() {
        let orders = vec![order(1, "Low", 1), order(2, "High", 9), order(3, "Mid", 5)];

        let ranking = compute_ranking(&orders);

        let names: Vec<&str> = ranking.iter().map(|e| e.customer_name.as_str()).collect();
        assert_eq!(names, vec!["High", "Mid", "Low"]);
        let positions: Vec<usize> = ranking.iter().map(|e| e.position).collect();
        assert_eq!(positions, vec![1, 2, 3]);
    }

    #[test]
    fn test_ranking_ties_keep_first_appearance() {
        let orders = vec![order(1, "First", 2), order(2, "Second", 2)];

        let ranking = compute_ranking(&orders);

        assert_eq!(ranking[0].customer_name, "First");
        assert_eq!(ranking[1].customer_name, "Second");
    }

    #[test]
    fn test_ranking_trims_names_before_grouping() {
        let orders = vec![order(1, "Maria ", 1), order(2, " Maria", 2)];

        let ranking = compute_ranking(&orders);

        assert_eq!(ranking.len(), 1);
        assert_eq!(ranking[0].total_numbers, 3);
    }

    #[test]
    fn test_ranking_of_no_orders_is_empty() {
        assert!(compute_ranking(&[]).is_empty());
    }

    #[test]
    fn test_medals_for_top_three_only() {
        let orders: Vec<Order> = (1..=4_u32)
            .map(|i| order(u64::from(i), &format!("C{i}"), 10 - i))
            .collect();

        let ranking = compute_ranking(&orders);

        assert_eq!(ranking[0].medal(), Some("🥇"));
        assert_eq!(ranking[1].medal(), Some("🥈"));
        assert_eq!(ranking[2].medal(), Some("🥉"));
        assert_eq!(ranking[3].medal(), None);
    }
}
