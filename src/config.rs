//! Configuration file handling.
//!
//! Settings come from `.pizzaperks.toml` (or `--config`), and command-line
//! flags override whatever the file says.

use crate::cli::Args;
use crate::errors::{Error, Result};
use crate::model::Thresholds;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = ".pizzaperks.toml";

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Eligibility thresholds.
    #[serde(default)]
    pub eligibility: EligibilityConfig,

    /// Output file settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Thresholds deciding who gets the promotion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityConfig {
    /// Minimum number of qualifying orders.
    #[serde(default = "default_min_orders")]
    pub min_orders: u32,

    /// Order price at or above which an order qualifies.
    #[serde(default = "default_min_price")]
    pub min_price: f64,
}

impl Default for EligibilityConfig {
    fn default() -> Self {
        Self {
            min_orders: default_min_orders(),
            min_price: default_min_price(),
        }
    }
}

fn default_min_orders() -> u32 {
    2
}

fn default_min_price() -> f64 {
    100.0
}

/// Where the report artifacts are written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_summary")]
    pub summary: PathBuf,

    #[serde(default = "default_bar_chart")]
    pub bar_chart: PathBuf,

    #[serde(default = "default_pie_chart")]
    pub pie_chart: PathBuf,

    /// Render the charts at all.
    #[serde(default = "default_true")]
    pub charts: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            summary: default_summary(),
            bar_chart: default_bar_chart(),
            pie_chart: default_pie_chart(),
            charts: true,
        }
    }
}

fn default_summary() -> PathBuf {
    PathBuf::from("summary.csv")
}

fn default_bar_chart() -> PathBuf {
    PathBuf::from("total_sales.png")
}

fn default_pie_chart() -> PathBuf {
    PathBuf::from("income_share.png")
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::io(path, source))?;
        let config: Config = toml::from_str(&content).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate().map_err(|message| Error::InvalidSetting {
            path: path.to_path_buf(),
            message,
        })?;
        Ok(config)
    }

    /// Check values TOML accepts but the eligibility rules cannot use.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if !self.eligibility.min_price.is_finite() {
            return Err(format!(
                "eligibility.min_price must be a finite number, got {}",
                self.eligibility.min_price
            ));
        }
        Ok(())
    }

    /// Try to load configuration from the default location.
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but can't be parsed.
    pub fn load_default() -> Result<Option<Self>> {
        Self::load_from_dir(Path::new("."))
    }

    /// Try to load `.pizzaperks.toml` from `dir`.
    pub fn load_from_dir(dir: &Path) -> Result<Option<Self>> {
        let config_path = dir.join(DEFAULT_CONFIG_FILE);

        if config_path.exists() {
            Ok(Some(Self::load(&config_path)?))
        } else {
            Ok(None)
        }
    }

    /// Merge this configuration with CLI arguments.
    ///
    /// Only flags given explicitly on the command line override the file.
    pub fn merge_with_args(&mut self, args: &Args) {
        if let Some(min_orders) = args.min_orders {
            self.eligibility.min_orders = min_orders;
        }
        if let Some(min_price) = args.min_price {
            self.eligibility.min_price = min_price;
        }
        if let Some(ref path) = args.out_summary {
            self.output.summary = path.clone();
        }
        if let Some(ref path) = args.out_bar {
            self.output.bar_chart = path.clone();
        }
        if let Some(ref path) = args.out_pie {
            self.output.pie_chart = path.clone();
        }
        if args.no_charts {
            self.output.charts = false;
        }
    }

    pub fn thresholds(&self) -> Thresholds {
        Thresholds {
            min_orders: self.eligibility.min_orders,
            min_price: self.eligibility.min_price,
        }
    }

    /// Generate a default configuration file content.
    pub fn default_toml() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_else(|_| String::new())
    }
}
