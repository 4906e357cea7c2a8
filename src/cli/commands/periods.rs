use crate::config::Config;
use crate::core::periods::PeriodsLogic;
use crate::db::ledger::SqliteLedger;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let pool = DbPool::open_initialized(&cfg.database)?;
    let rows = SqliteLedger::new(&pool).completed()?;
    PeriodsLogic::print(&rows);
    Ok(())
}
