//! Command-line interface definitions and argument parsing

use clap::Parser;
use std::path::PathBuf;

/// Find customers eligible for a free pizza and visualize sales
///
/// Without --csv the built-in sample customers are used.
///
/// Examples:
///   pizzaperks
///   pizzaperks --csv orders.csv --min-orders 2 --min-price 100
///   pizzaperks --min-orders 3 --min-price 150 --no-charts
#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to a CSV with columns: customer,order_price
    #[arg(long, value_name = "FILE")]
    pub csv: Option<PathBuf>,

    /// Minimum qualifying orders required [default: 2]
    #[arg(long, value_name = "N")]
    pub min_orders: Option<u32>,

    /// Minimum price to count as qualifying [default: 100.0]
    #[arg(long, value_name = "PRICE", allow_negative_numbers = true)]
    pub min_price: Option<f64>,

    /// Output summary CSV file path [default: summary.csv]
    #[arg(long, value_name = "FILE")]
    pub out_summary: Option<PathBuf>,

    /// Output bar chart path [default: total_sales.png]
    #[arg(long, value_name = "FILE")]
    pub out_bar: Option<PathBuf>,

    /// Output pie chart path [default: income_share.png]
    #[arg(long, value_name = "FILE")]
    pub out_pie: Option<PathBuf>,

    /// Skip rendering the bar and pie charts
    #[arg(long)]
    pub no_charts: bool,

    /// Path to configuration file
    ///
    /// If not specified, looks for .pizzaperks.toml in the current directory
    #[arg(short, long, value_name = "FILE", env = "PIZZAPERKS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Generate a default .pizzaperks.toml configuration file
    #[arg(long)]
    pub init_config: bool,

    /// Enable verbose output
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only report errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate values clap cannot check on its own.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(price) = self.min_price {
            if !price.is_finite() {
                return Err(format!("Minimum price must be a finite number, got {}", price));
            }
        }

        if let Some(ref csv) = self.csv {
            if csv.as_os_str().is_empty() {
                return Err("CSV path must not be empty".to_string());
            }
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let args = Args::try_parse_from([
            "pizzaperks",
            "--csv",
            "orders.csv",
            "--min-orders",
            "3",
            "--min-price",
            "150.5",
            "--out-bar",
            "bar.png",
        ])
        .unwrap();

        assert_eq!(args.csv, Some(PathBuf::from("orders.csv")));
        assert_eq!(args.min_orders, Some(3));
        assert_eq!(args.min_price, Some(150.5));
        assert_eq!(args.out_bar, Some(PathBuf::from("bar.png")));
        assert_eq!(args.out_summary, None);
        assert!(!args.no_charts);
    }

    #[test]
    fn test_negative_min_orders_rejected() {
        let result = Args::try_parse_from(["pizzaperks", "--min-orders", "-1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        let result = Args::try_parse_from(["pizzaperks", "-v", "-q"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_nan_price() {
        let args = Args {
            min_price: Some(f64::NAN),
            ..Args::default()
        };
        assert!(args.validate().is_err());
        assert!(Args::default().validate().is_ok());
    }

    #[test]
    fn test_log_level() {
        let mut args = Args::default();
        assert_eq!(args.log_level(), tracing::Level::INFO);

        args.verbose = true;
        assert_eq!(args.log_level(), tracing::Level::DEBUG);

        args.verbose = false;
        args.quiet = true;
        assert_eq!(args.log_level(), tracing::Level::ERROR);
    }
}
