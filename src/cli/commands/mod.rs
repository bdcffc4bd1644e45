pub mod batch;
pub mod calc;
pub mod config;
pub mod init;
pub mod schedule;

use crate::config::Config;
use crate::core::loader::Loader;
use crate::core::normalizer::normalize;
use crate::errors::AppResult;
use crate::models::DayWindow;
use crate::utils::path::expand_tilde;

/// Loads and normalizes the schedule CSV at `file`.
pub(crate) fn load_windows(file: &str, cfg: &Config) -> AppResult<Vec<DayWindow>> {
    let rows = Loader::load_schedule(&expand_tilde(file), cfg)?;
    normalize(&rows, &cfg.schedule_defaults()?)
}
