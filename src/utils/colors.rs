/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";

/// Returns GREY for a zero duration (nothing worked) and RESET otherwise.
pub fn color_for_duration(secs: i64) -> &'static str {
    if secs == 0 { GREY } else { RESET }
}

/// Wraps a value in the given colour, resetting afterwards.
pub fn paint(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}
