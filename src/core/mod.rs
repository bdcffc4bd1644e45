pub mod batch;
pub mod calculator;
pub mod config;
pub mod loader;
pub mod normalizer;

pub use calculator::{worktime, worktime_seconds};
pub use normalizer::{ScheduleDefaults, ensure_unambiguous, normalize};
