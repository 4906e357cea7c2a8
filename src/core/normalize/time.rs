use crate::models::TimeValue;
use chrono::NaiveTime;
use regex::Regex;
use std::sync::LazyLock;

static CLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2}):(\d{2})\s*(am|pm)").expect("clock pattern is valid")
});

/// Convert the time cell into a [`TimeValue`].
///
/// "day" anywhere (e.g. "All Day", "Day 2") means all-day, "data" means a
/// tentative slot, `H:MMam` / `H:MMpm` becomes a 24-hour time. Anything else
/// falls back to all-day.
pub fn normalize_time(raw: &str) -> TimeValue {
    let lower = raw.trim().to_lowercase();

    if lower.contains("day") {
        return TimeValue::AllDay;
    }
    if lower.contains("data") {
        return TimeValue::Tentative;
    }

    let Some(caps) = CLOCK_RE.captures(&lower) else {
        return TimeValue::AllDay;
    };

    let hour: u32 = caps[1].parse().unwrap_or(0);
    let minute: u32 = caps[2].parse().unwrap_or(60);

    if !(1..=12).contains(&hour) {
        return TimeValue::AllDay;
    }

    let hour24 = match (&caps[3], hour) {
        ("am", 12) => 0,
        ("am", h) => h,
        ("pm", 12) => 12,
        (_, h) => h + 12,
    };

    NaiveTime::from_hms_opt(hour24, minute, 0)
        .map(TimeValue::At)
        .unwrap_or(TimeValue::AllDay)
}
