//! PizzaPerks: free-pizza eligibility from customer order history
//!
//! This is the main entrypoint that orchestrates data loading, eligibility
//! computation, the summary CSV and chart rendering.
//!
//! Exit codes:
//!   0 - Success
//!   1 - Input could not be read, or any other fatal error

use anyhow::{Context, Result};
use pizzaperks::config::DEFAULT_CONFIG_FILE;
use pizzaperks::{compute, data, report, viz, Args, Config, CustomerOrders};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse_args();

    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    if args.init_config {
        if let Err(e) = handle_init_config() {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
        return;
    }

    init_logging(&args);
    debug!("Arguments: {:?}", args);

    if let Err(e) = run(&args) {
        error!("Run failed: {:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

/// Initialize logging based on verbosity settings; RUST_LOG wins when set.
fn init_logging(args: &Args) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_level().as_str().to_lowercase()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

/// Handle --init-config: write a default config file.
fn handle_init_config() -> Result<()> {
    let path = Path::new(DEFAULT_CONFIG_FILE);

    if path.exists() {
        anyhow::bail!("{} already exists. Remove it first or edit it manually.", DEFAULT_CONFIG_FILE);
    }

    std::fs::write(path, Config::default_toml())
        .with_context(|| format!("Failed to write {}", DEFAULT_CONFIG_FILE))?;

    println!("Created {} with default settings.", DEFAULT_CONFIG_FILE);
    Ok(())
}

/// Load configuration from file or use defaults, then apply CLI overrides.
fn load_config(args: &Args) -> Result<Config> {
    let mut config = match args.config {
        Some(ref path) => {
            info!("Loading config from: {}", path.display());
            Config::load(path).context("Error reading config")?
        }
        None => match Config::load_default() {
            Ok(Some(config)) => {
                info!("Loaded default config from {}", DEFAULT_CONFIG_FILE);
                config
            }
            Ok(None) => {
                debug!("No config file found, using defaults");
                Config::default()
            }
            Err(e) => {
                warn!("Ignoring unreadable {}: {}", DEFAULT_CONFIG_FILE, e);
                Config::default()
            }
        },
    };

    config.merge_with_args(args);
    config
        .validate()
        .map_err(anyhow::Error::msg)
        .context("Invalid settings")?;
    Ok(config)
}

fn load_input(args: &Args) -> Result<CustomerOrders> {
    match args.csv {
        Some(ref path) => {
            info!("Reading orders from: {}", path.display());
            data::load_customers(path).context("Error reading CSV")
        }
        None => {
            info!("No --csv given, using built-in sample customers");
            Ok(data::sample_customers())
        }
    }
}

/// Run the full eligibility pipeline
fn run(args: &Args) -> Result<()> {
    let start_time = Instant::now();

    let config = load_config(args)?;
    let thresholds = config.thresholds();

    // Step 1: Load orders
    let customers = load_input(args)?;
    info!(
        "Loaded {} orders for {} customers",
        customers.order_count(),
        customers.len()
    );

    // Step 2: Decide eligibility
    let result = compute(&customers, thresholds);
    debug!("{} of {} customers eligible", result.eligible.len(), result.summary.len());

    if args.verbose {
        report::print_summary_table(&result.summary);
    }

    // Step 3: Summary CSV
    let summary_path = &config.output.summary;
    report::save_summary_csv(summary_path, &result.summary)
        .with_context(|| format!("Failed to write summary to {}", summary_path.display()))?;
    println!("Saved summary to {}", summary_path.display());

    // Step 4: Charts
    if config.output.charts {
        let bar_path = &config.output.bar_chart;
        let pie_path = &config.output.pie_chart;
        viz::generate_charts(&result.summary, bar_path, pie_path).context("Failed to render charts")?;
        println!(
            "Saved bar chart to {} and pie chart to {}",
            bar_path.display(),
            pie_path.display()
        );
    } else {
        debug!("Chart rendering disabled");
    }

    // Step 5: Report
    println!("\n{}", report::format_eligibility(&result.eligible, thresholds));

    debug!("Total processing time: {:.2}s", start_time.elapsed().as_secs_f64());
    Ok(())
}
