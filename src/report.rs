//! Summary CSV output and the console eligibility report

use crate::errors::{Error, Result};
use crate::model::{SummaryRow, Thresholds};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Header of the summary CSV, in column order
pub const SUMMARY_HEADER: [&str; 5] = [
    "customer",
    "total_orders",
    "qualifying_orders",
    "total_sales",
    "avg_order",
];

/// Write summary rows as CSV, in the order given.
///
/// Output data will be in the form:
/// ```csv
/// customer,total_orders,qualifying_orders,total_sales,avg_order
/// Diana,4,4,1150.0,287.5
/// Alice,3,2,350.0,116.67
/// ```
pub fn write_summary_csv<W: Write>(writer: W, rows: &[SummaryRow]) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    // Written explicitly so an empty summary still has a header line
    csv_writer.write_record(SUMMARY_HEADER)?;
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer
        .flush()
        .map_err(|err| Error::Csv(csv::Error::from(err)))?;
    Ok(())
}

/// Write the summary CSV to `path`, replacing any existing file
pub fn save_summary_csv(path: impl AsRef<Path>, rows: &[SummaryRow]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| Error::io(path, source))?;
    write_summary_csv(BufWriter::new(file), rows)
}

/// Render the thresholds used and the eligible customers for the console
pub fn format_eligibility(eligible: &[String], thresholds: Thresholds) -> String {
    let mut lines = Vec::new();

    lines.push(format!(
        "Assumption: qualifying order price >= {:?}, min qualifying orders = {}",
        thresholds.min_price, thresholds.min_orders
    ));
    lines.push(format!(
        "Eligible customers for a free pizza: [{}]",
        eligible.join(", ")
    ));

    lines.join("\n")
}

/// Print a fixed-width table of the summary rows
pub fn print_summary_table(rows: &[SummaryRow]) {
    println!("\n=== Customer Summary ===");
    println!("  Customer        | Orders | Qualifying | Total sales | Avg order");
    println!("  ----------------|--------|------------|-------------|----------");
    for row in rows {
        println!(
            "  {:15} | {:6} | {:10} | {:11.2} | {:9.2}",
            row.customer, row.total_orders, row.qualifying_orders, row.total_sales, row.avg_order
        );
    }
}
