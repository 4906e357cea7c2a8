use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::EventFilter;
use crate::core::list::ListLogic;
use crate::errors::AppResult;
use crate::store::{EventStore, JsonStore};
use crate::ui::messages::warning;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        range,
        period,
        currency,
        impact,
    } = cmd
    {
        let loaded = JsonStore::new(&cfg.store).load();
        if loaded.corrupt {
            warning(format!("Event store {} is unreadable.", cfg.store));
        }

        let filter = EventFilter::from_args(
            range.as_deref(),
            period.as_deref(),
            currency.as_deref(),
            *impact,
        )?;
        ListLogic::print(&loaded.events, &filter);
    }
    Ok(())
}
