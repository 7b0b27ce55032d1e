use analytics::types::BacktestReport;
use anyhow::{Context, Result};
use app_config::Settings;
use backtester::Backtester;
use clap::{Parser, Subcommand};
use core_types::PriceSeries;
use optimizer::{GridResult, optimize};
use predictor::{LastValuePredictor, forecast_next};
use rayon::ThreadPoolBuilder;
use std::path::PathBuf;
use strategies::CrossoverSettings;
use tracing_subscriber::EnvFilter;

mod loader;

// --- Command-Line Interface Definition ---

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = "A moving-average crossover research tool.")]
struct Cli {
    /// Overrides the configured price-file path.
    #[arg(long, global = true)]
    prices: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Runs a historical backtest of one (short, long) crossover pair.
    Backtest {
        /// Trailing window of the fast average, in periods.
        #[arg(short, long)]
        short_window: u32,

        /// Trailing window of the slow average, in periods.
        #[arg(short, long)]
        long_window: u32,
    },

    /// Sweeps the configured window grid and ranks the results.
    Optimize {
        /// Writes the full ranked table as JSON to this path.
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Predicts the next close with the baseline sequence predictor.
    Forecast,
}

// --- Main Application Entry Point ---

fn main() -> Result<()> {
    // Load environment variables from a .env file, if it exists.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let settings = app_config::load_settings().context("Failed to load settings")?;
    let filter = EnvFilter::try_new(&settings.app.log_level)
        .context("Invalid log_level in settings")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Starting Meridian application");

    let prices_path = cli
        .prices
        .unwrap_or_else(|| PathBuf::from(&settings.data.prices_path));
    let prices = loader::load_price_file(&prices_path)
        .with_context(|| format!("Failed to load prices from {}", prices_path.display()))?;
    tracing::info!(
        points = prices.len(),
        path = %prices_path.display(),
        "Loaded price history."
    );

    match cli.command {
        Commands::Backtest {
            short_window,
            long_window,
        } => run_backtest(&prices, short_window, long_window)?,
        Commands::Optimize { output } => run_optimize(&prices, &settings, output)?,
        Commands::Forecast => run_forecast(&prices, &settings)?,
    }

    Ok(())
}

// --- Command Handlers ---

fn run_backtest(prices: &PriceSeries, short_window: u32, long_window: u32) -> Result<()> {
    let report = Backtester::new(prices).run(&CrossoverSettings::new(short_window, long_window))?;
    print_backtest_report(&report);
    Ok(())
}

fn run_optimize(prices: &PriceSeries, settings: &Settings, output: Option<PathBuf>) -> Result<()> {
    if settings.app.optimizer_cores > 0 {
        tracing::info!(
            cores = settings.app.optimizer_cores,
            "Configuring Rayon thread pool."
        );
        ThreadPoolBuilder::new()
            .num_threads(settings.app.optimizer_cores as usize)
            .build_global()
            .context("Failed to build Rayon thread pool")?;
    }

    let short_candidates = settings.sweep.short.values();
    let long_candidates = settings.sweep.long.values();
    let results = optimize(prices, &short_candidates, &long_candidates, None)?;

    if results.is_empty() {
        tracing::warn!("No valid (short, long) pair in the configured grid.");
        println!("No valid parameter pair to evaluate; nothing to rank.");
        return Ok(());
    }

    print_grid_table(&results);

    if let Some(path) = output {
        let json = serde_json::to_string_pretty(&results)?;
        std::fs::write(&path, json)
            .with_context(|| format!("Failed to write results to {}", path.display()))?;
        tracing::info!(path = %path.display(), "Wrote ranked results.");
    }

    // Re-run the winning pair so the full curves are reported, not just the
    // terminal number that ranked it.
    let best = &results[0];
    let report = Backtester::new(prices)
        .run(&CrossoverSettings::new(best.short_window, best.long_window))?;
    print_backtest_report(&report);

    Ok(())
}

fn run_forecast(prices: &PriceSeries, settings: &Settings) -> Result<()> {
    let mut model = LastValuePredictor;
    let forecast = forecast_next(prices, settings.forecast.sequence_length, &mut model)?;

    println!("\n--- Next-Close Forecast ---");
    println!("---------------------------");
    println!("Latest close:     {:.2}", forecast.latest_close);
    println!("Predicted close:  {:.2}", forecast.predicted_close);
    println!("---------------------------");

    Ok(())
}

// --- Report Printing ---

/// Helper function to print the ranked grid table in a readable format.
fn print_grid_table(results: &[GridResult]) {
    println!("\n--- Grid Search Results (top {}) ---", results.len().min(10));
    println!("------------------------------------");
    println!("{:>5} {:>5} {:>18}", "short", "long", "terminal return");
    for row in results.iter().take(10) {
        println!(
            "{:>5} {:>5} {:>17.4}x",
            row.short_window, row.long_window, row.terminal_return
        );
    }
    println!("------------------------------------");
}

/// Helper function to print a single backtest report in a readable format.
fn print_backtest_report(report: &BacktestReport) {
    println!("\n--- Crossover Backtest Report ---");
    println!("---------------------------------");
    println!(
        "Windows (short/long):  {}/{}",
        report.short_window, report.long_window
    );
    println!(
        "Periods accounted:     {}",
        report.cumulative_strategy.len()
    );
    println!(
        "Terminal market:       {:.4}x ({:+.2}%)",
        report.terminal_market,
        (report.terminal_market - 1.0) * 100.0
    );
    println!(
        "Terminal strategy:     {:.4}x ({:+.2}%)",
        report.terminal_strategy,
        (report.terminal_strategy - 1.0) * 100.0
    );
    println!("---------------------------------");
}
