use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Time slot of a calendar entry.
///
/// Serialized as `"HH:MM"`, `"all_day"` or `"tentative"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum TimeValue {
    At(NaiveTime),
    AllDay,
    Tentative,
}

impl TimeValue {
    pub const ALL_DAY: &'static str = "all_day";
    pub const TENTATIVE: &'static str = "tentative";

    pub fn as_string(&self) -> String {
        match self {
            TimeValue::At(t) => t.format("%H:%M").to_string(),
            TimeValue::AllDay => Self::ALL_DAY.to_string(),
            TimeValue::Tentative => Self::TENTATIVE.to_string(),
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            Self::ALL_DAY => Some(TimeValue::AllDay),
            Self::TENTATIVE => Some(TimeValue::Tentative),
            other => NaiveTime::parse_from_str(other, "%H:%M")
                .ok()
                .map(TimeValue::At),
        }
    }

    /// Tentative entries lead the day, all-day entries close it.
    fn rank(&self) -> u8 {
        match self {
            TimeValue::Tentative => 0,
            TimeValue::At(_) => 1,
            TimeValue::AllDay => 2,
        }
    }
}

impl Ord for TimeValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (TimeValue::At(a), TimeValue::At(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for TimeValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for TimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeValue::At(t) => write!(f, "{}", t.format("%H:%M")),
            TimeValue::AllDay => write!(f, "All Day"),
            TimeValue::Tentative => write!(f, "Tentative"),
        }
    }
}

impl From<TimeValue> for String {
    fn from(value: TimeValue) -> Self {
        value.as_string()
    }
}

impl TryFrom<String> for TimeValue {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        TimeValue::from_db_str(&value).ok_or_else(|| format!("invalid time value: {value}"))
    }
}
