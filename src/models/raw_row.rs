use std::collections::BTreeMap;

/// Row classification reported by the page source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Normal,
    /// Separator row announcing a new day.
    DayBreaker,
    /// Placeholder row for a day without entries.
    NoEvent,
}

/// Cells of one calendar row, in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RowField {
    Date,
    Time,
    Currency,
    Impact,
    Event,
    Actual,
    Forecast,
    Previous,
}

impl RowField {
    pub const ALL: [RowField; 8] = [
        RowField::Date,
        RowField::Time,
        RowField::Currency,
        RowField::Impact,
        RowField::Event,
        RowField::Actual,
        RowField::Forecast,
        RowField::Previous,
    ];

    /// Suffix of the `calendar__*` cell class carrying this field.
    pub fn css_name(&self) -> &'static str {
        match self {
            RowField::Date => "date",
            RowField::Time => "time",
            RowField::Currency => "currency",
            RowField::Impact => "impact",
            RowField::Event => "event",
            RowField::Actual => "actual",
            RowField::Forecast => "forecast",
            RowField::Previous => "previous",
        }
    }
}

/// Raw text of one table row as extracted from the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    pub kind: RowKind,
    cells: BTreeMap<RowField, String>,
}

impl RawRow {
    pub fn new(kind: RowKind) -> Self {
        Self {
            kind,
            cells: BTreeMap::new(),
        }
    }

    pub fn normal() -> Self {
        Self::new(RowKind::Normal)
    }

    /// Builder-style setter.
    pub fn with(mut self, field: RowField, text: impl Into<String>) -> Self {
        self.set(field, text);
        self
    }

    pub fn set(&mut self, field: RowField, text: impl Into<String>) {
        self.cells.insert(field, text.into());
    }

    /// Cell text; a missing cell reads as empty.
    pub fn get(&self, field: RowField) -> &str {
        self.cells.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Raw cell, distinguishing a missing cell from an empty one.
    pub fn cell(&self, field: RowField) -> Option<&str> {
        self.cells.get(&field).map(String::as_str)
    }

    pub fn is_skipped(&self) -> bool {
        !matches!(self.kind, RowKind::Normal)
    }
}
