//! Eligibility aggregation over customer order histories

use crate::model::{CustomerOrders, Eligibility, SummaryRow, Thresholds};
use std::cmp::Ordering;

/// Compute per-customer statistics and the list of eligible customers
///
/// # Arguments
/// * `customers` - Order amounts grouped by customer
/// * `thresholds` - Qualifying price and required number of qualifying orders
///
/// # Returns
/// * `Eligibility` with eligible customers in input order and the summary
///   sorted by total sales, highest first (ties keep input order)
pub fn compute(customers: &CustomerOrders, thresholds: Thresholds) -> Eligibility {
    let mut eligible = Vec::new();
    let mut summary = Vec::with_capacity(customers.len());

    for (name, orders) in customers.iter() {
        let row = summarize_customer(name, orders, thresholds.min_price);
        if row.qualifying_orders as u64 >= u64::from(thresholds.min_orders) {
            eligible.push(name.to_string());
        }
        summary.push(row);
    }

    // sort_by is stable, so equal totals stay in input order
    summary.sort_by(|a, b| {
        b.total_sales
            .partial_cmp(&a.total_sales)
            .unwrap_or(Ordering::Equal)
    });

    Eligibility { eligible, summary }
}

/// Build the summary row for a single customer
pub fn summarize_customer(name: &str, orders: &[f64], min_price: f64) -> SummaryRow {
    let total_orders = orders.len();
    let qualifying_orders = orders.iter().filter(|&&amount| amount >= min_price).count();
    let total_sales: f64 = orders.iter().sum();
    let avg_order = if total_orders > 0 {
        round2(total_sales / total_orders as f64)
    } else {
        0.0
    };

    SummaryRow {
        customer: name.to_string(),
        total_orders,
        qualifying_orders,
        total_sales,
        avg_order,
    }
}

/// Round to 2 decimal places, halves away from zero
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
