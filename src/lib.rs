//! PizzaPerks: a Rust CLI that decides which customers earn a free pizza
//!
//! Orders are grouped per customer, summarized (order counts, qualifying orders,
//! total and average spend), and reported as a CSV table plus bar and pie charts.

pub mod aggregate;
pub mod cli;
pub mod config;
pub mod data;
pub mod errors;
pub mod model;
pub mod report;
pub mod viz;

// Re-export public items for easier access
pub use aggregate::compute;
pub use cli::Args;
pub use config::Config;
pub use data::{load_customers, read_customers, sample_customers};
pub use errors::{Error, Result};
pub use model::{CustomerOrders, Eligibility, SummaryRow, Thresholds};
pub use report::{format_eligibility, save_summary_csv, write_summary_csv};
pub use viz::generate_charts;
