//! Field normalizers: pure, total conversions from one raw cell to a typed
//! value. None of them fails; malformed input degrades to a fallback value.

mod date;
mod impact;
mod numeric;
mod text;
mod time;

pub use date::{DateFragment, normalize_date_fragment};
pub use impact::normalize_impact;
pub use numeric::normalize_numeric;
pub use text::normalize_event_text;
pub use time::normalize_time;
