pub mod case;
pub mod day_window;
pub mod schedule_row;

pub use case::{CaseResult, WorkCase};
pub use day_window::DayWindow;
pub use schedule_row::RawScheduleRow;
