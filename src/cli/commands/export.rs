use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::EventFilter;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::store::{EventStore, JsonStore};
use crate::ui::messages::warning;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        period,
        force,
    } = cmd
    {
        let loaded = JsonStore::new(&cfg.store).load();
        if loaded.corrupt {
            warning(format!("Event store {} is unreadable.", cfg.store));
        }

        let filter = EventFilter::from_args(range.as_deref(), period.as_deref(), None, None)?;
        let count = ExportLogic::export(&loaded.events, *format, Path::new(file), &filter, *force)?;

        if count > 0 {
            let pool = DbPool::open_initialized(&cfg.database)?;
            if let Err(e) = ttlog(
                &pool.conn,
                "export",
                format.as_str(),
                &format!("{count} events → {file}"),
            ) {
                warning(format!("Failed to write internal log: {e}"));
            }
        }
    }
    Ok(())
}
