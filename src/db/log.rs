//! Internal audit log (`log` table).

use crate::core::{PeriodOutcome, SyncSummary};
use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{Connection, params};

/// Append one line to the `log` table, stamped with the local time.
pub fn ttlog(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?
    .execute(params![Local::now().to_rfc3339(), operation, target, message])?;
    Ok(())
}

/// Record a finished sync: one `period` (or `abandon`) line per scraped
/// week, then a `sync` line with the totals. Skipped weeks are not logged.
pub fn record_sync(conn: &Connection, summary: &SyncSummary) -> AppResult<()> {
    for p in &summary.periods {
        let op = match p.outcome {
            PeriodOutcome::Skipped => continue,
            PeriodOutcome::Abandoned => "abandon",
            _ => "period",
        };
        ttlog(
            conn,
            op,
            &p.period_key,
            &format!("{}: {} records", p.outcome, p.records),
        )?;
    }

    ttlog(
        conn,
        "sync",
        &format!("{} periods", summary.periods.len()),
        &format!(
            "{} processed, {} → {} records",
            summary.processed(),
            summary.records_before,
            summary.records_after
        ),
    )
}
