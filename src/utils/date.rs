use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| AppError::InvalidDate(s.into()))
}

/// Parse a date range expression.
///
/// Supports:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - any two of the above joined by `:` (e.g. `2024-01:2024-03`)
pub fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    match r.split_once(':') {
        Some((start, end)) => {
            let (first, _) = bounds(start.trim())?;
            let (_, last) = bounds(end.trim())?;
            if first > last {
                return Err(AppError::InvalidPeriod(format!("{r}: start after end")));
            }
            Ok((first, last))
        }
        None => bounds(r.trim()),
    }
}

/// First and last day covered by a year, month or day expression.
fn bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::InvalidPeriod(p.to_string());

    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p.parse().map_err(|_| invalid())?;
            let first = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(invalid)?;
            let last = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(invalid)?;
            Ok((first, last))
        }
        // YYYY-MM
        7 => {
            let first =
                NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d").map_err(|_| invalid())?;
            let next = if first.month() == 12 {
                NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
            } else {
                NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
            }
            .ok_or_else(invalid)?;
            Ok((first, next.pred_opt().ok_or_else(invalid)?))
        }
        // YYYY-MM-DD
        10 => {
            let d = NaiveDate::parse_from_str(p, "%Y-%m-%d").map_err(|_| invalid())?;
            Ok((d, d))
        }
        _ => Err(invalid()),
    }
}
