//! Incremental synchronization: scrape what is pending, merge, persist, mark.

use crate::config::PeriodMode;
use crate::core::period_scraper::PeriodScraper;
use crate::db::ledger::PeriodLedger;
use crate::errors::{AppError, AppResult};
use crate::fetcher::PageFetcher;
use crate::models::Period;
use crate::store::{EventStore, dedup, merge};
use crate::utils::date::today;
use chrono::NaiveDate;
use std::fmt;
use tracing::{error, info, warn};

/// What happened to one candidate period during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodOutcome {
    /// Already marked complete by an earlier run.
    Skipped,
    /// Scraped, merged and marked complete.
    Completed,
    /// Scraped and merged but left pending: a page failed or the week is
    /// not over yet.
    Incomplete,
    /// Rows could not be dated; nothing merged, left pending.
    Abandoned,
}

impl fmt::Display for PeriodOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PeriodOutcome::Skipped => "skipped",
            PeriodOutcome::Completed => "completed",
            PeriodOutcome::Incomplete => "incomplete",
            PeriodOutcome::Abandoned => "abandoned",
        };
        f.pad(s)
    }
}

#[derive(Debug, Clone)]
pub struct PeriodReport {
    pub period_key: String,
    pub outcome: PeriodOutcome,
    /// Records scraped for the period (0 when skipped or abandoned).
    pub records: usize,
    pub failed_units: usize,
}

#[derive(Debug, Clone, Default)]
pub struct SyncSummary {
    pub periods: Vec<PeriodReport>,
    pub records_before: usize,
    pub records_after: usize,
    pub added: usize,
    pub updated: usize,
    pub store_corrupt: bool,
    pub store_written: bool,
}

impl SyncSummary {
    pub fn count(&self, outcome: PeriodOutcome) -> usize {
        self.periods.iter().filter(|p| p.outcome == outcome).count()
    }

    /// Periods that were scraped this run (whatever the result).
    pub fn processed(&self) -> usize {
        self.periods.len() - self.count(PeriodOutcome::Skipped)
    }

    pub fn net_new(&self) -> i64 {
        self.records_after as i64 - self.records_before as i64
    }
}

pub struct SyncEngine<'a> {
    fetcher: &'a mut dyn PageFetcher,
    store: &'a dyn EventStore,
    ledger: &'a mut dyn PeriodLedger,
    mode: PeriodMode,
    today: NaiveDate,
}

impl<'a> SyncEngine<'a> {
    pub fn new(
        fetcher: &'a mut dyn PageFetcher,
        store: &'a dyn EventStore,
        ledger: &'a mut dyn PeriodLedger,
        mode: PeriodMode,
    ) -> Self {
        Self {
            fetcher,
            store,
            ledger,
            mode,
            today: today(),
        }
    }

    /// Override the reference day used to decide whether a week is over.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Bring the store up to date for `cycles` weeks starting with the week
    /// containing `from`.
    ///
    /// Each pending period is merged and persisted before it is marked
    /// complete, so an interruption leaves it pending and a rerun scrapes it
    /// again without duplicating anything. With nothing pending the store
    /// file is not touched.
    pub fn sync(&mut self, from: NaiveDate, cycles: usize) -> AppResult<SyncSummary> {
        let loaded = self.store.load();
        if loaded.corrupt {
            warn!("Stored events unreadable; starting from an empty store");
        }

        let loaded_len = loaded.events.len();
        let mut events = dedup(loaded.events);
        let mut dirty = loaded.corrupt || events.len() != loaded_len;

        let mut summary = SyncSummary {
            records_before: events.len(),
            store_corrupt: loaded.corrupt,
            ..Default::default()
        };

        let mut pending = Vec::new();
        for period in Period::sequence(from, cycles) {
            if self.ledger.is_complete(&period.key())? {
                summary.periods.push(PeriodReport {
                    period_key: period.key(),
                    outcome: PeriodOutcome::Skipped,
                    records: 0,
                    failed_units: 0,
                });
            } else {
                pending.push(period);
            }
        }

        if pending.is_empty() {
            info!("All {} period(s) already complete, nothing to do", cycles);
            summary.records_after = summary.records_before;
            summary.periods.sort_by(|a, b| a.period_key.cmp(&b.period_key));
            return Ok(summary);
        }

        let total = pending.len();
        for (i, period) in pending.iter().enumerate() {
            let key = period.key();
            info!("Scraping period {} ({}/{})", key, i + 1, total);

            let scrape = match PeriodScraper::new(&mut *self.fetcher, self.mode).scrape(period) {
                Ok(s) => s,
                Err(e @ AppError::DateResolution { .. }) => {
                    error!("Abandoning period {}: {}", key, e);
                    summary.periods.push(PeriodReport {
                        period_key: key,
                        outcome: PeriodOutcome::Abandoned,
                        records: 0,
                        failed_units: 0,
                    });
                    continue;
                }
                Err(e) => return Err(e),
            };

            let records = scrape.events.len();
            let complete = scrape.is_complete();
            let failed_units = scrape.failed_units;

            let stats = merge(&mut events, scrape.events);
            summary.added += stats.added;
            summary.updated += stats.updated;
            dirty |= stats.added + stats.updated > 0;

            if dirty {
                self.store.save(&events)?;
                summary.store_written = true;
                dirty = false;
            }

            let outcome = if !complete {
                warn!("Period {} left pending: {} page(s) failed", key, failed_units);
                PeriodOutcome::Incomplete
            } else if !period.has_elapsed(self.today) {
                info!("Period {} is not over yet, left pending", key);
                PeriodOutcome::Incomplete
            } else {
                self.ledger.mark_complete(&key, records)?;
                PeriodOutcome::Completed
            };

            info!(
                "Period {}: {} records ({} new, {} updated), {}",
                key, records, stats.added, stats.updated, outcome
            );

            summary.periods.push(PeriodReport {
                period_key: key,
                outcome,
                records,
                failed_units,
            });
        }

        // Duplicates dropped at load time with every period abandoned.
        if dirty {
            self.store.save(&events)?;
            summary.store_written = true;
        }

        summary.records_after = events.len();
        summary.periods.sort_by(|a, b| a.period_key.cmp(&b.period_key));
        info!(
            "Sync done: {} period(s) processed, {} net new record(s)",
            summary.processed(),
            summary.net_new()
        );
        Ok(summary)
    }
}
