//! ffcal library root.
//! Exposes the CLI parser, the high-level run() function, and the
//! extraction / synchronization modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod fetcher;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use tracing_subscriber::EnvFilter;
use utils::path::expand_tilde;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Sync { .. } => cli::commands::sync::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Periods => cli::commands::periods::handle(cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Apply command-line overrides and expand `~` in every configured path.
pub fn effective_config(cli: &Cli, mut cfg: Config) -> Config {
    if let Some(db) = &cli.db {
        cfg.database = db.clone();
    }
    if let Some(store) = &cli.store {
        cfg.store = store.clone();
    }
    if let Some(dir) = &cli.snapshot_dir {
        cfg.snapshot_dir = dir.clone();
        cfg.source = config::SourceKind::Snapshot;
    }

    for path in [&mut cfg.database, &mut cfg.store, &mut cfg.snapshot_dir] {
        if !path.is_empty() {
            *path = expand_tilde(path.as_str()).to_string_lossy().to_string();
        }
    }
    cfg
}

/// Install the stderr log subscriber; `RUST_LOG` wins over the configured level.
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    // A second call (tests running in-process) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Config is loaded once and shared with every handler.
    let cfg = effective_config(&cli, Config::load()?);
    init_tracing(&cfg.log_level);

    dispatch(&cli, &cfg)
}
