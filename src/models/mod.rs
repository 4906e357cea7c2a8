pub mod calendar_event;
pub mod field_value;
pub mod impact;
pub mod period;
pub mod raw_row;
pub mod time_value;

pub use calendar_event::{CalendarEvent, EventKey};
pub use field_value::FieldValue;
pub use impact::Impact;
pub use period::Period;
pub use raw_row::{RawRow, RowField, RowKind};
pub use time_value::TimeValue;
