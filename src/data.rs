//! Data loading: customer orders from CSV, plus the built-in sample set

use crate::errors::{Error, Result};
use crate::model::CustomerOrders;
use csv::{StringRecord, Trim};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, warn};

/// Header naming the customer column
pub const CUSTOMER_COLUMN: &str = "customer";
/// Header naming the order amount column
pub const PRICE_COLUMN: &str = "order_price";

/// Load customer orders from a CSV file
///
/// # Arguments
/// * `file_path` - Path to a CSV file with `customer` and `order_price` columns
///
/// # Returns
/// * `CustomerOrders` with customers in first-seen order
pub fn load_customers(file_path: impl AsRef<Path>) -> Result<CustomerOrders> {
    let path = file_path.as_ref();
    let file = File::open(path).map_err(|source| Error::io(path, source))?;
    debug!("Reading orders from {}", path.display());
    read_customers(BufReader::new(file))
}

/// Read customer orders from any CSV stream.
///
/// Expects a header row; extra columns are ignored:
/// ```csv
/// customer,order_price,note
/// Alice,120,
/// Bob,50.5,first visit
/// ```
///
/// Rows whose `order_price` is not a finite number, or whose `customer` or
/// `order_price` field is not valid UTF-8, are skipped with a warning.
pub fn read_customers<R: Read>(reader: R) -> Result<CustomerOrders> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let (customer_idx, price_idx) = locate_columns(&headers)?;

    let mut customers = CustomerOrders::new();
    let mut skipped = 0usize;

    // Byte records, so undecodable bytes in ignored columns cannot fail the run
    for record in csv_reader.byte_records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();

        let Some(raw_name) = record.get(customer_idx) else {
            warn!("Skipping line {}: missing customer field", line);
            skipped += 1;
            continue;
        };
        let Ok(name) = std::str::from_utf8(raw_name).map(str::trim) else {
            warn!("Skipping line {}: customer is not valid UTF-8", line);
            skipped += 1;
            continue;
        };

        let raw_price = record.get(price_idx).unwrap_or_default();
        let Ok(raw_price) = std::str::from_utf8(raw_price) else {
            warn!(
                "Skipping line {}: order_price for customer {:?} is not valid UTF-8",
                line, name
            );
            skipped += 1;
            continue;
        };

        match parse_price(raw_price) {
            Some(price) => customers.push_order(name, price),
            None => {
                warn!(
                    "Skipping line {} with invalid order_price {:?} for customer {:?}",
                    line, raw_price, name
                );
                skipped += 1;
            }
        }
    }

    debug!(
        "Read {} orders for {} customers ({} rows skipped)",
        customers.order_count(),
        customers.len(),
        skipped
    );

    Ok(customers)
}

/// Find the positions of the required columns in the header row
fn locate_columns(headers: &StringRecord) -> Result<(usize, usize)> {
    let position = |name: &str| headers.iter().position(|h| h.trim() == name);

    match (position(CUSTOMER_COLUMN), position(PRICE_COLUMN)) {
        (Some(customer), Some(price)) => Ok((customer, price)),
        _ => Err(Error::MissingColumns {
            found: headers.iter().collect::<Vec<_>>().join(","),
        }),
    }
}

/// Parse an order amount, rejecting anything that is not a finite number
fn parse_price(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite())
}

/// Demo data used when no CSV input is supplied
pub fn sample_customers() -> CustomerOrders {
    vec![
        ("Alice", vec![120.0, 80.0, 150.0]),
        ("Bob", vec![200.0, 50.0]),
        ("Charlie", vec![30.0, 40.0, 20.0]),
        ("Diana", vec![300.0, 350.0, 400.0, 100.0]),
        ("Eve", vec![80.0, 120.0, 130.0]),
        ("Frank", vec![500.0]),
    ]
    .into_iter()
    .collect()
}
