//! Terminal messages for the user. Diagnostics go through `tracing`;
//! these are the lines a run is meant to show.

use crate::utils::colors::{GREEN, RED, RESET, YELLOW};
use std::fmt;

const BOLD: &str = "\x1b[1m";
const BLUE: &str = "\x1b[34m";

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{BLUE}{BOLD}{ICON_INFO}{RESET} {msg}");
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{GREEN}{BOLD}{ICON_OK}{RESET} {msg}");
}

/// Warnings go to stderr so listings and summaries stay clean on stdout.
pub fn warning<T: fmt::Display>(msg: T) {
    eprintln!("{YELLOW}{BOLD}{ICON_WARN}{RESET} {msg}");
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{RED}{BOLD}{ICON_ERR}{RESET} {msg}");
}

pub fn header<T: fmt::Display>(msg: T) {
    let text = msg.to_string();
    println!("{BLUE}{BOLD}{text}{RESET}");
    println!("{}\n", "─".repeat(text.chars().count()));
}
