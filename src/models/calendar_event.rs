use super::{FieldValue, Impact, TimeValue};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One normalized calendar entry, the unit persisted in the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub period_key: String,
    pub date: NaiveDate, // "YYYY-MM-DD"
    pub time: TimeValue, // "HH:MM" | "all_day" | "tentative"
    pub currency: String,
    pub impact: Impact,
    pub event: String,
    pub actual: Option<FieldValue>,
    pub forecast: Option<FieldValue>,
    pub previous: Option<FieldValue>,
}

/// Identity of a real-world entry: two records sharing it are the same one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EventKey {
    pub date: NaiveDate,
    pub time: TimeValue,
    pub currency: String,
    pub event: String,
}

impl CalendarEvent {
    pub fn key(&self) -> EventKey {
        EventKey {
            date: self.date,
            time: self.time,
            currency: self.currency.clone(),
            event: self.event.clone(),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
