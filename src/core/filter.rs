//! Selection of stored events for `list` and `export`.

use crate::errors::AppResult;
use crate::models::{CalendarEvent, Impact, Period};
use crate::utils::date::parse_range;
use chrono::NaiveDate;

#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    pub range: Option<(NaiveDate, NaiveDate)>,
    pub period_key: Option<String>,
    pub currency: Option<String>,
    pub impact: Option<Impact>,
}

impl EventFilter {
    /// Build a filter from command-line options.
    ///
    /// `period` may be any day of the wanted week; it is normalized to the
    /// week's key.
    pub fn from_args(
        range: Option<&str>,
        period: Option<&str>,
        currency: Option<&str>,
        impact: Option<Impact>,
    ) -> AppResult<Self> {
        let range = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let period_key = match period {
            None => None,
            Some(p) => Some(
                Period::from_key(p)
                    .ok_or_else(|| crate::errors::AppError::InvalidPeriod(p.to_string()))?
                    .key(),
            ),
        };

        Ok(Self {
            range,
            period_key,
            currency: currency.map(|c| c.trim().to_uppercase()),
            impact,
        })
    }

    pub fn matches(&self, e: &CalendarEvent) -> bool {
        if let Some((from, to)) = self.range
            && (e.date < from || e.date > to)
        {
            return false;
        }
        if let Some(key) = &self.period_key
            && &e.period_key != key
        {
            return false;
        }
        if let Some(cur) = &self.currency
            && !e.currency.eq_ignore_ascii_case(cur)
        {
            return false;
        }
        if let Some(impact) = self.impact
            && e.impact != impact
        {
            return false;
        }
        true
    }
}
