/// ANSI color helper utilities for terminal output.
use crate::models::Impact;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Impact color, following the calendar's own icon colors.
pub fn color_for_impact(impact: Impact) -> &'static str {
    match impact {
        Impact::VeryHigh => MAGENTA,
        Impact::High => RED,
        Impact::Medium => YELLOW,
        Impact::Low => GREEN,
        Impact::None | Impact::Unknown => GREY,
    }
}
