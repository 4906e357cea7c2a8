use crate::export::ExportFormat;
use crate::models::Impact;
use clap::{Parser, Subcommand};

/// Command-line interface definition for ffcal
/// Incremental economic-calendar scraper
#[derive(Parser)]
#[command(
    name = "ffcal",
    version = env!("CARGO_PKG_VERSION"),
    about = "Scrape weekly economic-calendar pages into a clean, deduplicated event store",
    long_about = None
)]
pub struct Cli {
    /// Override state database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override event store path (JSON)
    #[arg(global = true, long = "store")]
    pub store: Option<String>,

    /// Read saved pages from this directory instead of the live calendar
    #[arg(global = true, long = "snapshot-dir")]
    pub snapshot_dir: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the state database and configuration
    Init,

    /// Show or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Scrape pending weeks and merge them into the store
    Sync {
        /// First day to cover (YYYY-MM-DD); defaults to `start` from the config
        #[arg(long = "from")]
        from: Option<String>,

        /// Number of weeks to cover; defaults to `cycles` from the config
        #[arg(long = "cycles")]
        cycles: Option<usize>,

        /// Reference day for deciding whether a week is over (YYYY-MM-DD)
        #[arg(long = "today", hide = true)]
        today: Option<String>,
    },

    /// List stored events
    List {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        range: Option<String>,

        #[arg(long, short, help = "Only the week containing this day (YYYY-MM-DD)")]
        period: Option<String>,

        #[arg(long, short, help = "Only this currency (e.g. USD)")]
        currency: Option<String>,

        #[arg(long, short, value_enum, help = "Only this impact level")]
        impact: Option<Impact>,
    },

    /// List weeks already marked complete
    Periods,

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Export stored events
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, value_name = "DAY", help = "Only the week containing this day")]
        period: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
