// src/export/model.rs

use crate::models::{CalendarEvent, FieldValue};
use serde::Serialize;

/// Flat, all-text row used for CSV export. Missing figures become "".
#[derive(Serialize, Clone, Debug)]
pub struct EventExport {
    pub period_key: String,
    pub date: String,
    pub time: String,
    pub currency: String,
    pub impact: String,
    pub event: String,
    pub actual: String,
    pub forecast: String,
    pub previous: String,
}

fn figure(v: &Option<FieldValue>) -> String {
    v.as_ref().map(|f| f.to_string()).unwrap_or_default()
}

impl From<&CalendarEvent> for EventExport {
    fn from(e: &CalendarEvent) -> Self {
        Self {
            period_key: e.period_key.clone(),
            date: e.date_str(),
            time: e.time.as_string(),
            currency: e.currency.clone(),
            impact: e.impact.as_str().to_string(),
            event: e.event.clone(),
            actual: figure(&e.actual),
            forecast: figure(&e.forecast),
            previous: figure(&e.previous),
        }
    }
}
