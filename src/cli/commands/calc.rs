use crate::cli::commands::load_windows;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::worktime_seconds;
use crate::errors::{AppError, AppResult};
use crate::utils::colors::{color_for_duration, paint};
use crate::utils::formatting::bold;
use crate::utils::secs2readable;
use crate::utils::time::{format_timestamp, parse_timestamp};

/// Handle the `calc` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calc {
        schedule,
        start,
        end,
        seconds,
    } = cmd
    {
        let from = parse_timestamp(start).ok_or_else(|| AppError::InvalidTimestamp(start.clone()))?;
        let to = parse_timestamp(end).ok_or_else(|| AppError::InvalidTimestamp(end.clone()))?;

        let windows = load_windows(schedule, cfg)?;
        let worked = worktime_seconds(from, to, &windows)?;

        if *seconds {
            println!("{}", worked);
            return Ok(());
        }

        println!(
            "{} → {}",
            format_timestamp(&from),
            format_timestamp(&to)
        );
        println!(
            "Elapsed: {} | Worked: {} ({} s)",
            secs2readable((to - from).num_seconds(), false),
            bold(&paint(&secs2readable(worked, false), color_for_duration(worked))),
            worked
        );
    }
    Ok(())
}
