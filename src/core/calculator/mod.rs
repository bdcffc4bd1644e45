pub mod worktime;

pub use worktime::{worktime, worktime_seconds};
