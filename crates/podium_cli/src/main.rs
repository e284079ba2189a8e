mod args;
mod format;
mod input;
mod repl;

use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use podium_common::config::PodiumConfig;
use podium_store::RecordStore;

fn main() {
    if let Err(e) = run() {
        eprintln!("podium: error: {:#}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = PodiumConfig::load_or_default(Path::new(&args.config))
        .with_context(|| format!("could not load {}", args.config))?;
    if let Some(ref db) = args.db {
        config.storage.db_path = db.clone();
    }
    tracing::debug!(db_path = %config.storage.db_path, "starting");

    let store = RecordStore::new(&config.storage.db_path);
    repl::run_menu(store)
}
