//! Scraping of one period: fetch pages, parse rows in order.

use crate::config::PeriodMode;
use crate::core::row_parser::{self, DateState, ParsedRow};
use crate::errors::{AppError, AppResult};
use crate::fetcher::{FetchError, PageFetcher};
use crate::models::{CalendarEvent, Period, RawRow};
use tracing::{debug, warn};

/// Records collected for one period.
#[derive(Debug, Default)]
pub struct PeriodScrape {
    pub events: Vec<CalendarEvent>,
    /// Pages fetched (1 in week mode, 7 in day mode).
    pub units: usize,
    /// Pages that timed out or had no calendar content.
    pub failed_units: usize,
}

impl PeriodScrape {
    pub fn is_complete(&self) -> bool {
        self.failed_units == 0
    }
}

pub struct PeriodScraper<'a, F: PageFetcher + ?Sized> {
    fetcher: &'a mut F,
    mode: PeriodMode,
}

impl<'a, F: PageFetcher + ?Sized> PeriodScraper<'a, F> {
    pub fn new(fetcher: &'a mut F, mode: PeriodMode) -> Self {
        Self { fetcher, mode }
    }

    /// Scrape every page of `period`.
    ///
    /// Rows are parsed strictly in page order since a blank date cell refers
    /// to the row above. A page that times out or shows no table counts as a
    /// failed unit and contributes nothing; an unavailable source aborts.
    pub fn scrape(&mut self, period: &Period) -> AppResult<PeriodScrape> {
        let mut out = PeriodScrape::default();
        let key = period.key();

        match self.mode {
            PeriodMode::Week => {
                out.units = 1;
                let fetched = self.fetcher.fetch_period_rows(period);
                match accept(fetched, &format!("week {key}"))? {
                    Some(rows) => {
                        let mut state = DateState::new();
                        parse_all(&rows, period, &mut state, &mut out.events)?;
                    }
                    None => out.failed_units += 1,
                }
            }
            PeriodMode::Day => {
                for day in period.days() {
                    out.units += 1;
                    let fetched = self.fetcher.fetch_day_rows(day);
                    match accept(fetched, &format!("day {day}"))? {
                        Some(rows) => {
                            let mut state = DateState::seeded(day);
                            parse_all(&rows, period, &mut state, &mut out.events)?;
                        }
                        None => out.failed_units += 1,
                    }
                }
            }
        }

        debug!(
            "Period {}: {} events from {} page(s), {} failed",
            key,
            out.events.len(),
            out.units,
            out.failed_units
        );
        Ok(out)
    }
}

/// Turn a fetch result into rows, a recoverable miss, or a fatal error.
fn accept(
    fetched: Result<Vec<RawRow>, FetchError>,
    label: &str,
) -> AppResult<Option<Vec<RawRow>>> {
    match fetched {
        Ok(rows) => Ok(Some(rows)),
        Err(e @ (FetchError::Timeout(_) | FetchError::NoContent(_))) => {
            warn!("Page did not load for {label}: {e}");
            Ok(None)
        }
        Err(FetchError::Unavailable(msg)) => Err(AppError::CollaboratorUnavailable(msg)),
    }
}

fn parse_all(
    rows: &[RawRow],
    period: &Period,
    state: &mut DateState,
    out: &mut Vec<CalendarEvent>,
) -> AppResult<()> {
    let key = period.key();
    for row in rows {
        if let ParsedRow::Event(event) = row_parser::parse(row, &key, period.year(), state)? {
            out.push(event);
        }
    }
    Ok(())
}
