//! Row assembly: one raw table row → one [`CalendarEvent`].

use crate::core::date_resolver;
use crate::core::normalize::{
    normalize_event_text, normalize_impact, normalize_numeric, normalize_time,
};
use crate::errors::{AppError, AppResult};
use crate::models::{CalendarEvent, RawRow, RowField};
use chrono::NaiveDate;

/// Carry-forward state for one period's row sequence.
///
/// Owned by the caller and threaded through [`parse`]; a fresh value is used
/// for every period.
#[derive(Debug, Clone, Default)]
pub struct DateState {
    pub last_known: Option<NaiveDate>,
    /// Number of normal rows seen so far, for error reporting.
    pub rows_seen: usize,
}

impl DateState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State for a page that is known to show a single day.
    pub fn seeded(date: NaiveDate) -> Self {
        Self {
            last_known: Some(date),
            rows_seen: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParsedRow {
    Event(CalendarEvent),
    Skipped,
}

/// Parse one row.
///
/// Day-breaker and no-event rows are skipped without touching `state`.
/// Fails with [`AppError::DateResolution`] when the row has no date and no
/// earlier row of the period had one.
pub fn parse(
    row: &RawRow,
    period_key: &str,
    period_year: i32,
    state: &mut DateState,
) -> AppResult<ParsedRow> {
    if row.is_skipped() {
        return Ok(ParsedRow::Skipped);
    }

    state.rows_seen += 1;

    let resolved = date_resolver::resolve(row.get(RowField::Date), period_year, state.last_known)
        .ok_or_else(|| AppError::DateResolution {
            period: period_key.to_string(),
            row: state.rows_seen,
        })?;

    if let Some(date) = resolved.carried {
        state.last_known = Some(date);
    }

    Ok(ParsedRow::Event(CalendarEvent {
        period_key: period_key.to_string(),
        date: resolved.date,
        time: normalize_time(row.get(RowField::Time)),
        currency: row.get(RowField::Currency).trim().to_string(),
        impact: normalize_impact(row.cell(RowField::Impact)),
        event: normalize_event_text(row.get(RowField::Event)),
        actual: normalize_numeric(row.get(RowField::Actual)),
        forecast: normalize_numeric(row.get(RowField::Forecast)),
        previous: normalize_numeric(row.get(RowField::Previous)),
    }))
}
