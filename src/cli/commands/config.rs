use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::{header, success, warning};
use crate::utils::path::expand_tilde;

/// Handle the `config` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = &cli.command
    {
        let path = cli
            .config
            .as_deref()
            .map(expand_tilde)
            .unwrap_or_else(Config::config_file);

        // ---- PRINT CONFIG ----
        if *print_config {
            header("Current configuration");
            if path.exists() {
                ConfigLogic::print(&path)?;
            } else {
                warning(format!(
                    "{} not found, showing defaults (run `rworktime init` to create it)",
                    path.display()
                ));
                let yaml = serde_yaml::to_string(cfg)?;
                println!("{}", yaml);
            }
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            if !path.exists() {
                Config::init_all(Some(path.as_path()))?;
            }
            let used = ConfigLogic::edit(&path, editor)?;
            success(format!("Configuration file edited successfully using '{}'", used));
        }
    }

    Ok(())
}
