use crate::cli::commands::load_windows;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::batch::BatchLogic;
use crate::core::loader::Loader;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::messages::info;
use crate::utils::path::expand_tilde;

/// Handle the `batch` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Batch {
        schedule,
        cases,
        format,
        file,
        force,
    } = cmd
    {
        let windows = load_windows(schedule, cfg)?;
        let cases = Loader::load_cases(&expand_tilde(cases), cfg)?;

        info(format!(
            "Measuring {} cases against {} schedule days ({})",
            cases.len(),
            windows.len(),
            format.as_str()
        ));

        let results = BatchLogic::evaluate(&windows, &cases)?;
        ExportLogic::export(&results, format, file, *force)?;
    }
    Ok(())
}
