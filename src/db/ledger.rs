//! Completion markers for scraped periods.

use crate::db::pool::DbPool;
use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{OptionalExtension, params};

/// Persisted set of completed periods. Markers are only ever created.
pub trait PeriodLedger {
    fn is_complete(&self, period_key: &str) -> AppResult<bool>;

    /// Record `period_key` as complete; a second call for the same key is a no-op.
    fn mark_complete(&mut self, period_key: &str, records: usize) -> AppResult<()>;
}

/// A completed period as stored in the `periods` table.
#[derive(Debug, Clone)]
pub struct PeriodRow {
    pub period_key: String,
    pub completed_at: String,
    pub records: i64,
}

pub struct SqliteLedger<'a> {
    pool: &'a DbPool,
}

impl<'a> SqliteLedger<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    pub fn completed(&self) -> AppResult<Vec<PeriodRow>> {
        let mut stmt = self.pool.conn.prepare(
            "SELECT period_key, completed_at, records FROM periods ORDER BY period_key ASC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(PeriodRow {
                period_key: row.get(0)?,
                completed_at: row.get(1)?,
                records: row.get(2)?,
            })
        })?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }
}

impl PeriodLedger for SqliteLedger<'_> {
    fn is_complete(&self, period_key: &str) -> AppResult<bool> {
        let found = self
            .pool
            .conn
            .query_row(
                "SELECT 1 FROM periods WHERE period_key = ?1",
                [period_key],
                |_| Ok(()),
            )
            .optional()?;
        Ok(found.is_some())
    }

    fn mark_complete(&mut self, period_key: &str, records: usize) -> AppResult<()> {
        self.pool.conn.execute(
            "INSERT OR IGNORE INTO periods (period_key, completed_at, records)
             VALUES (?1, ?2, ?3)",
            params![period_key, Local::now().to_rfc3339(), records as i64],
        )?;
        Ok(())
    }
}
