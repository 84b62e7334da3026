//! ANSI color helper utilities for terminal output.
use crate::models::trip::NOT_DEFINED;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// Returns GREY for the "Not defined" bucket and RESET otherwise.
pub fn color_for_category(label: &str) -> &'static str {
    if label == NOT_DEFINED { GREY } else { RESET }
}

pub fn grey(value: &str) -> String {
    format!("{GREY}{value}{RESET}")
}
