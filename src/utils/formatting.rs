//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Renders a second count as `HHh MMm SSs`, or `HH:MM:SS` when `short`.
pub fn secs2readable(secs: i64, short: bool) -> String {
    let sign = if secs < 0 { "-" } else { "" };
    let abs_s = secs.abs();
    let hours = abs_s / 3600;
    let minutes = (abs_s % 3600) / 60;
    let seconds = abs_s % 60;

    if short {
        // es: 12:35:00
        format!("{}{:02}:{:02}:{:02}", sign, hours, minutes, seconds)
    } else {
        // es: 12h 35m 00s
        format!("{}{:02}h {:02}m {:02}s", sign, hours, minutes, seconds)
    }
}

/// Describes a working flag for human-readable output, with its ANSI colour.
pub fn describe_flag(is_work: bool) -> (&'static str, &'static str) {
    if is_work {
        ("work", crate::utils::colors::GREEN)
    } else {
        ("off", crate::utils::colors::GREY)
    }
}
