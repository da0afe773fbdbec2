//! Chartree command-line tool.
//!
//! Maintains a chart of accounts stored as a JSON file.

mod cmd;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chartree_shared::{AppConfig, AppError};
use chartree_store::JsonFileStore;

use crate::cmd::Command;

/// Maintain a hierarchical chart of accounts.
#[derive(Parser, Debug)]
#[command(name = "chartree")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Chart file to use instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            let code = e.downcast_ref::<AppError>().map_or(1, AppError::exit_code);
            ExitCode::from(code)
        }
    }
}

fn run(args: Args) -> Result<()> {
    let config = AppConfig::load().map_err(AppError::from)?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let path = args.store.unwrap_or(config.store.path);
    debug!(path = %path.display(), "Using chart file");
    let store = JsonFileStore::new(path);

    let mut chart = store.load().map_err(AppError::from)?;
    let mut stdout = std::io::stdout().lock();
    let changed = cmd::execute(args.command, &mut chart, &mut stdout)?;

    if changed {
        store.save(&chart).map_err(AppError::from)?;
    }

    Ok(())
}
