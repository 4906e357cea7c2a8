//! Date resolution for rows whose date cell may be blank.

use crate::core::normalize::{DateFragment, normalize_date_fragment};
use chrono::NaiveDate;
use tracing::warn;

/// Outcome of resolving one row's date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    pub date: NaiveDate,
    /// `Some` when the row carried its own date, which becomes the new
    /// carry-forward value; `None` when the previous date was reused.
    pub carried: Option<NaiveDate>,
}

/// Resolve the date of a row.
///
/// A blank cell reuses `last_known`. A cell that cannot be read as a date is
/// treated the same way (with a warning). Returns `None` when there is
/// nothing to fall back on, i.e. the first row of a period has no date.
pub fn resolve(raw: &str, period_year: i32, last_known: Option<NaiveDate>) -> Option<Resolved> {
    let parsed = match normalize_date_fragment(raw, period_year) {
        DateFragment::Empty => None,
        DateFragment::Iso(iso) => NaiveDate::parse_from_str(&iso, "%Y-%m-%d").ok(),
        DateFragment::Raw(text) => {
            let date = NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").ok();
            if date.is_none() {
                warn!("Unreadable date cell {:?}, reusing previous row's date", text);
            }
            date
        }
    };

    match parsed {
        Some(date) => Some(Resolved {
            date,
            carried: Some(date),
        }),
        None => last_known.map(|date| Resolved {
            date,
            carried: None,
        }),
    }
}
