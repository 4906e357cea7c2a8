use chrono::{Datelike, Duration, NaiveDate};
use std::fmt;

/// Length of one scraping period in days.
pub const PERIOD_DAYS: i64 = 7;

/// One calendar week, Sunday to Saturday, identified by its first day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Period {
    start: NaiveDate,
}

impl Period {
    /// The week containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        let back = date.weekday().num_days_from_sunday() as i64;
        Self {
            start: date - Duration::days(back),
        }
    }

    /// `count` consecutive weeks, the first one containing `from`.
    pub fn sequence(from: NaiveDate, count: usize) -> Vec<Period> {
        let first = Self::containing(from);
        (0..count)
            .map(|i| Period {
                start: first.start + Duration::days(PERIOD_DAYS * i as i64),
            })
            .collect()
    }

    /// Parse a period key (`YYYY-MM-DD`); any day of the week is accepted.
    pub fn from_key(key: &str) -> Option<Self> {
        NaiveDate::parse_from_str(key.trim(), "%Y-%m-%d")
            .ok()
            .map(Self::containing)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.start + Duration::days(PERIOD_DAYS - 1)
    }

    pub fn key(&self) -> String {
        self.start.format("%Y-%m-%d").to_string()
    }

    /// Year used to qualify date cells that only show month and day.
    pub fn year(&self) -> i32 {
        self.start.year()
    }

    pub fn days(&self) -> Vec<NaiveDate> {
        (0..PERIOD_DAYS)
            .map(|i| self.start + Duration::days(i))
            .collect()
    }

    /// True once the last day of the week lies strictly before `today`.
    pub fn has_elapsed(&self, today: NaiveDate) -> bool {
        self.end() < today
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}
