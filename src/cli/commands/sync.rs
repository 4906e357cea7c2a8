use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{PeriodOutcome, SyncEngine, SyncSummary};
use crate::db::ledger::SqliteLedger;
use crate::db::log::record_sync;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::fetcher;
use crate::store::JsonStore;
use crate::ui::messages::{header, info, success, warning};
use crate::utils::colors::{GREEN, GREY, RED, RESET, YELLOW};
use crate::utils::date::parse_date;

/// Handle the `sync` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Sync {
        from,
        cycles,
        today,
    } = cmd
    {
        let from = match from {
            Some(s) => parse_date(s)?,
            None => cfg.start_date()?,
        };
        let cycles = cycles.unwrap_or(cfg.cycles);

        let pool = DbPool::open_initialized(&cfg.database)?;
        let mut ledger = SqliteLedger::new(&pool);
        let store = JsonStore::new(&cfg.store);
        let mut source = fetcher::from_config(cfg)?;

        header(format!(
            "Sync {} week(s) from {} ({:?} pages)",
            cycles, from, cfg.period_mode
        ));

        let mut engine = SyncEngine::new(&mut *source, &store, &mut ledger, cfg.period_mode);
        if let Some(t) = today {
            engine = engine.with_today(parse_date(t)?);
        }
        let summary = engine.sync(from, cycles)?;

        print_summary(&summary);
        if let Err(e) = record_sync(&pool.conn, &summary) {
            warning(format!("Failed to write internal log: {e}"));
        }
    }
    Ok(())
}

fn print_summary(summary: &SyncSummary) {
    if summary.store_corrupt {
        warning("The event store was unreadable and has been rebuilt.");
    }

    for p in &summary.periods {
        let color = match p.outcome {
            PeriodOutcome::Skipped => GREY,
            PeriodOutcome::Completed => GREEN,
            PeriodOutcome::Incomplete => YELLOW,
            PeriodOutcome::Abandoned => RED,
        };
        let failed = if p.failed_units > 0 {
            format!(", {} page(s) failed", p.failed_units)
        } else {
            String::new()
        };
        println!(
            "  {}{:<10}{} {:<11} {:>4} records{}",
            color, p.period_key, RESET, p.outcome, p.records, failed
        );
    }
    println!();

    if summary.processed() == 0 {
        info("All periods already complete, nothing to do.");
        return;
    }

    info(format!(
        "Periods: {} skipped, {} completed, {} pending, {} abandoned",
        summary.count(PeriodOutcome::Skipped),
        summary.count(PeriodOutcome::Completed),
        summary.count(PeriodOutcome::Incomplete),
        summary.count(PeriodOutcome::Abandoned),
    ));
    success(format!(
        "Records: {} → {} ({} new, {} updated)",
        summary.records_before, summary.records_after, summary.added, summary.updated
    ));
}
