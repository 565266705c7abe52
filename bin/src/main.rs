//! tickerline CLI - browse and compare historical price series.

use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use tickerline_lib::{DEFAULT_CACHE_CAPACITY, Granularity, RangePreset, url::DEFAULT_BASE_URL};
use tracing_subscriber::EnvFilter;

mod commands;
mod display;
mod session;

use display::Format;
use session::Session;

#[derive(Parser)]
#[command(name = "tickerline")]
#[command(about = "Browse and compare historical price series", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress spinners and warnings)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Base URL of the data host
    #[arg(long, env = "TICKERLINE_BASE_URL", default_value = DEFAULT_BASE_URL, global = true)]
    base_url: String,

    /// Number of series kept in memory
    #[arg(long, default_value_t = DEFAULT_CACHE_CAPACITY, global = true)]
    cache_capacity: usize,
}

/// Window and granularity flags shared by `show` and `compare`.
#[derive(Args)]
struct WindowArgs {
    /// Bar granularity (daily, weekly, monthly)
    #[arg(short, long, default_value = "daily")]
    granularity: Granularity,

    /// First day of the window (YYYY-MM-DD). Defaults to the first bar.
    #[arg(long, conflicts_with = "preset")]
    from: Option<String>,

    /// Last day of the window (YYYY-MM-DD). Defaults to the last bar.
    #[arg(long, conflicts_with = "preset")]
    to: Option<String>,

    /// Window preset (1M, 3M, 6M, 1Y, 5Y, All)
    #[arg(short, long)]
    preset: Option<RangePreset>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    format: Format,

    /// Output file path. Defaults to stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the catalog by symbol or name prefix
    Search {
        /// Symbol or name prefix
        query: String,
    },

    /// Show catalog details for an instrument
    Info {
        /// Ticker symbol
        symbol: String,
    },

    /// Show one instrument's bars and window return
    Show {
        /// Ticker symbol
        symbol: String,

        #[command(flatten)]
        window: WindowArgs,
    },

    /// Compare up to four instruments on a percent scale
    Compare {
        /// Ticker symbols
        #[arg(required = true, num_args = 1..)]
        symbols: Vec<String>,

        #[command(flatten)]
        window: WindowArgs,
    },
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .with_target(verbose > 1)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let session = Session::new(&cli.base_url, cli.cache_capacity, cli.quiet)?;

    match command {
        Commands::Search { query } => commands::search::search(&session, &query).await,
        Commands::Info { symbol } => commands::info::show_info(&session, &symbol).await,
        Commands::Show { symbol, window } => {
            commands::show::show(&session, &symbol, &window).await
        }
        Commands::Compare { symbols, window } => {
            commands::compare::compare(&session, &symbols, &window).await
        }
    }
}
