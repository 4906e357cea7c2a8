use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

static YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{4}\b").expect("year pattern is valid"));

/// Result of cleaning a date cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateFragment {
    /// Blank cell: the row belongs to the same day as the previous one.
    Empty,
    /// Cell reformatted to an ISO `YYYY-MM-DD` string.
    Iso(String),
    /// Non-empty cell that did not match a known layout, year-qualified.
    Raw(String),
}

/// Clean the date cell of a row.
///
/// The cell renders as "Fri" over "Mar 1"; once the line break is removed it
/// reads "FriMar 1". Without a year in the cell, `period_year` is prefixed,
/// giving "2024 FriMar 1", which is reformatted to "2024-03-01". Cells that
/// match no known layout come back as [`DateFragment::Raw`].
pub fn normalize_date_fragment(raw: &str, period_year: i32) -> DateFragment {
    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, '\n' | '\r' | '\\'))
        .collect();
    let cleaned = cleaned.trim();

    if cleaned.is_empty() {
        return DateFragment::Empty;
    }

    if YEAR_RE.is_match(cleaned) {
        return match parse_cell(cleaned) {
            Some(date) => DateFragment::Iso(iso(date)),
            None => DateFragment::Raw(cleaned.to_string()),
        };
    }

    // A week straddling New Year shows "WedJan 1" under the old year; the
    // weekday only matches in the following one.
    let qualified = format!("{period_year} {cleaned}");
    let parsed =
        parse_cell(&qualified).or_else(|| parse_cell(&format!("{} {cleaned}", period_year + 1)));

    match parsed {
        Some(date) => DateFragment::Iso(iso(date)),
        None => DateFragment::Raw(qualified),
    }
}

/// "2024 FriMar 1" (weekday glued to month) or "2024 Fri Mar 1".
fn parse_cell(qualified: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = qualified.split_whitespace().collect();
    match parts.len() {
        3 => NaiveDate::parse_from_str(&parts.join(" "), "%Y %a%b %d").ok(),
        4 => NaiveDate::parse_from_str(&parts.join(" "), "%Y %a %b %d").ok(),
        _ => None,
    }
}

fn iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
