use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::path::expand_tilde;

/// Handle the `init` command: writes the default configuration file.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let target = cli.config.as_deref().map(expand_tilde);

    info("Initializing rworktime…");
    let path = Config::init_all(target.as_deref())?;

    success(format!("Config file: {}", path.display()));
    Ok(())
}
