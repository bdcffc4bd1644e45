use crate::cli::commands::load_windows;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::DayWindow;
use crate::ui::messages::header;
use crate::utils::date::weekday_short;
use crate::utils::formatting::describe_flag;
use crate::utils::secs2readable;
use crate::utils::table::{Column, Table};

/// Handle the `schedule` subcommand: normalize and display the calendar.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Schedule { file, json } = cmd {
        let windows = load_windows(file, cfg)?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&windows)?);
            return Ok(());
        }

        header(format!("Schedule: {}", file));
        print!("{}", render(&windows));

        let working = windows.iter().filter(|w| w.is_work()).count();
        let total: i64 = windows
            .iter()
            .filter(|w| w.is_work())
            .map(|w| w.duration().num_seconds())
            .sum();
        println!(
            "\n{} days, {} working, {} of working time",
            windows.len(),
            working,
            secs2readable(total, false)
        );
    }
    Ok(())
}

fn render(windows: &[DayWindow]) -> String {
    let mut table = Table::new(vec![
        Column::new("DATE", 10),
        Column::new("DAY", 4),
        Column::new("START", 8),
        Column::new("END", 8),
        Column::new("TYPE", 5),
        Column::new("HOURS", 9),
    ]);

    for w in windows {
        let (kind, color) = describe_flag(w.is_work());
        table.add_colored_row(
            vec![
                w.date().to_string(),
                weekday_short(&w.date()),
                w.start().format("%H:%M:%S").to_string(),
                w.end().format("%H:%M:%S").to_string(),
                kind.to_string(),
                secs2readable(w.duration().num_seconds(), true),
            ],
            color,
        );
    }

    table.render()
}
