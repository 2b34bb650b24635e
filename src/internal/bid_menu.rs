//! Interactive bid table menu

use bidtable::{DEFAULT_BUCKET_COUNT, config::Config, menu::Menu};
use clap::{ArgAction, Parser};
use log::{LevelFilter, error, info};
use std::{io, path::PathBuf, process::ExitCode};

/// Load bids from a CSV file into a chained hash table and query them
#[derive(Parser, Debug)]
#[command(name = "bid_menu")]
struct Args {
    /// Suppress all log output except for errors. This overrides the -v flag.
    #[arg(short, long)]
    quiet: bool,

    /// Turn on verbose logging. Supply -v multiple times to increase verbosity.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Number of hash table buckets
    #[arg(short, long, default_value_t = DEFAULT_BUCKET_COUNT)]
    buckets: usize,

    /// CSV file to load bids from (defaults to eBid_Monthly_Sales.csv)
    csv_path: Option<PathBuf>,

    /// Bid id the find command starts with (defaults to 98223)
    bid_key: Option<String>,
}

/// Sets up `env_logger`; `BIDTABLE_LOG` overrides the level picked from the flags
fn init_logging(quiet: bool, verbose: u8) {
    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    env_logger::Builder::new().filter_level(level).parse_env("BIDTABLE_LOG").init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.quiet, args.verbose);

    let config = Config::from_positionals(args.csv_path, args.bid_key).bucket_count(args.buckets);
    info!("Starting with {config:?}");

    let stdin = io::stdin();
    let mut menu = match Menu::new(config, stdin.lock(), io::stdout()) {
        Ok(menu) => menu,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match menu.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Menu stopped: {e}");
            ExitCode::FAILURE
        }
    }
}
