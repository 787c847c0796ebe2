//! fundsim - backtest runner for the simulated fund
//!
//! Asks the fund backend for a backtest and falls back to a deterministic
//! local simulation when the backend is unreachable.
//!
//! # Usage
//! ```sh
//! cargo run -- run --symbol SPY --strategy rsi_momentum --period 90d
//! cargo run -- run --symbol AAPL --strategy buy_hold --period 1y --local --json
//! cargo run -- list
//! ```
//!
//! # Environment Variables
//! - `FUNDSIM_API_URL` - Backend base URL (default: http://localhost:8000)
//! - `FUNDSIM_REMOTE_ENABLED` - Call the backend at all (default: true)
//! - `FUNDSIM_FALLBACK_DELAY_MS` - Pause before local fallback (default: 800)
//! - `FUNDSIM_REPORT_DIR` - Where `--save` writes JSON reports (default: backtest_results)

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fundsim::application::backtest::{BacktestReporter, BacktestRunner};
use fundsim::config::Config;
use fundsim::domain::backtest::catalog::{
    DEFAULT_STRATEGY, DEFAULT_SYMBOL, STRATEGIES, SYMBOLS, is_known_symbol,
};
use fundsim::domain::backtest::types::{BacktestPeriod, BacktestRequest};
use tracing::{Level, info, warn};
use tracing_subscriber::prelude::*;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a single backtest
    Run {
        /// Ticker to backtest
        #[arg(short, long, default_value = DEFAULT_SYMBOL)]
        symbol: String,

        /// Strategy id (see `list`)
        #[arg(long, default_value = DEFAULT_STRATEGY)]
        strategy: String,

        /// Lookback period: 30d, 90d, 180d, 1y or 2y
        #[arg(short, long, default_value = "90d")]
        period: String,

        /// Skip the backend and simulate locally
        #[arg(long)]
        local: bool,

        /// Print the raw result as JSON instead of the summary
        #[arg(long)]
        json: bool,

        /// Also write a JSON report into FUNDSIM_REPORT_DIR
        #[arg(long)]
        save: bool,
    },
    /// List available symbols, strategies and periods
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so `--json` output stays machine-readable
    let log_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(Level::INFO.to_string())),
        )
        .with(log_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            symbol,
            strategy,
            period,
            local,
            json,
            save,
        } => {
            let period: BacktestPeriod = period.parse()?;
            let config = Config::from_env().context("Failed to load configuration")?;

            if !is_known_symbol(&symbol) {
                warn!("Symbol {} is not in the catalog, running anyway", symbol);
            }

            let runner = if local {
                BacktestRunner::local_only()
            } else {
                BacktestRunner::from_config(&config)
            };

            info!("Running backtest: {} | {} | {}", symbol, strategy, period);
            let request = BacktestRequest::new(symbol, strategy, period.days());
            let run = runner.run_request(&request).await;

            let reporter = BacktestReporter::new(&config.report_dir);
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&run.result)
                        .context("Failed to serialize backtest result")?
                );
            } else {
                reporter.print_summary(&run, period);
            }

            if save {
                reporter.save_report(&run, period)?;
            }
        }
        Commands::List => {
            println!("Symbols:");
            println!("  {}", SYMBOLS.join(", "));
            println!("Strategies:");
            for s in STRATEGIES {
                println!("  {:<16} {}", s.id, s.label);
            }
            println!("Periods:");
            for p in BacktestPeriod::ALL {
                println!("  {:<5} {} days", p.label(), p.days());
            }
        }
    }

    Ok(())
}
