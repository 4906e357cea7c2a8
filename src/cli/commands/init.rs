use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the state database and all pending migrations
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let written = Config::init_all(cli.db.clone(), cli.test)?;

    // Command-line overrides win over what was just written.
    let db_path = if cli.db.is_some() {
        cfg.database.clone()
    } else {
        written.database
    };

    println!("⚙️  Initializing ffcal…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", db_path);
    println!("📦 Event store: {}", cfg.store);

    let pool = DbPool::open_initialized(&db_path)?;
    success(format!("Database initialized at {}", db_path));

    if let Err(e) = ttlog(
        &pool.conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", db_path),
    ) {
        warning(format!("Failed to write internal log: {e}"));
    }

    println!("🎉 ffcal initialization completed!");
    Ok(())
}
