//! Core data types: customer order history, eligibility thresholds and summary rows

use serde::Serialize;
use std::collections::HashMap;

/// Order amounts grouped per customer, in the order customers were first seen
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerOrders {
    entries: Vec<(String, Vec<f64>)>,
    index: HashMap<String, usize>,
}

impl CustomerOrders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an order for `customer`, creating the customer on first sight
    pub fn push_order(&mut self, customer: &str, amount: f64) {
        match self.index.get(customer) {
            Some(&slot) => self.entries[slot].1.push(amount),
            None => {
                self.index.insert(customer.to_string(), self.entries.len());
                self.entries.push((customer.to_string(), vec![amount]));
            }
        }
    }

    /// Insert a customer with a full order list, replacing any previous orders
    pub fn insert(&mut self, customer: impl Into<String>, orders: Vec<f64>) {
        let customer = customer.into();
        match self.index.get(&customer) {
            Some(&slot) => self.entries[slot].1 = orders,
            None => {
                self.index.insert(customer.clone(), self.entries.len());
                self.entries.push((customer, orders));
            }
        }
    }

    pub fn orders(&self, customer: &str) -> Option<&[f64]> {
        self.index
            .get(customer)
            .map(|&slot| self.entries[slot].1.as_slice())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of orders across all customers
    pub fn order_count(&self) -> usize {
        self.entries.iter().map(|(_, orders)| orders.len()).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.entries
            .iter()
            .map(|(name, orders)| (name.as_str(), orders.as_slice()))
    }
}

impl<S: Into<String>> FromIterator<(S, Vec<f64>)> for CustomerOrders {
    fn from_iter<I: IntoIterator<Item = (S, Vec<f64>)>>(iter: I) -> Self {
        let mut customers = CustomerOrders::new();
        for (name, orders) in iter {
            customers.insert(name, orders);
        }
        customers
    }
}

/// Thresholds deciding which orders qualify and which customers are eligible
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    /// Minimum number of qualifying orders for eligibility
    pub min_orders: u32,
    /// Order amount at or above which an order qualifies
    pub min_price: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            min_orders: 2,
            min_price: 100.0,
        }
    }
}

/// Per-customer statistics, serialized as one line of the summary CSV
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub customer: String,
    pub total_orders: usize,
    pub qualifying_orders: usize,
    pub total_sales: f64,
    /// Mean order amount rounded to 2 decimals, 0 when there are no orders
    pub avg_order: f64,
}

/// Result of an eligibility run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Eligibility {
    /// Eligible customers in input order
    pub eligible: Vec<String>,
    /// One row per customer, sorted by total sales descending
    pub summary: Vec<SummaryRow>,
}

impl Eligibility {
    pub fn is_eligible(&self, customer: &str) -> bool {
        self.eligible.iter().any(|name| name == customer)
    }

    pub fn row(&self, customer: &str) -> Option<&SummaryRow> {
        self.summary.iter().find(|row| row.customer == customer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_order_keeps_first_seen_order() {
        let mut customers = CustomerOrders::new();
        customers.push_order("Bob", 10.0);
        customers.push_order("Alice", 20.0);
        customers.push_order("Bob", 30.0);

        let names: Vec<&str> = customers.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Bob", "Alice"]);
        assert_eq!(customers.orders("Bob"), Some(&[10.0, 30.0][..]));
        assert_eq!(customers.order_count(), 3);
    }

    #[test]
    fn test_insert_replaces_existing_orders() {
        let mut customers: CustomerOrders =
            vec![("A", vec![1.0]), ("B", vec![2.0])].into_iter().collect();
        customers.insert("A", vec![5.0, 6.0]);

        assert_eq!(customers.len(), 2);
        assert_eq!(customers.orders("A"), Some(&[5.0, 6.0][..]));
        assert_eq!(customers.iter().next().map(|(name, _)| name), Some("A"));
    }

    #[test]
    fn test_default_thresholds() {
        let thresholds = Thresholds::default();
        assert_eq!(thresholds.min_orders, 2);
        assert_eq!(thresholds.min_price, 100.0);
    }
}
