#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDateTime;
use rworktime::DayWindow;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rwt() -> Command {
    cargo_bin_cmd!("rworktime")
}

/// Unique path inside the system temp dir; any existing file is removed.
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("rworktime_{}.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Writes `content` to a fresh temp file and returns its path.
pub fn write_temp(name: &str, ext: &str, content: &str) -> String {
    let p = temp_path(name, ext);
    fs::write(&p, content).expect("write temp file");
    p
}

/// Path of a config file that does not exist, so defaults apply.
pub fn no_config(name: &str) -> String {
    temp_path(&format!("{}_missing_conf", name), "conf")
}

pub fn ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").expect("valid test timestamp")
}

pub fn window(start: &str, end: &str, is_work: bool) -> DayWindow {
    DayWindow::new(ts(start), ts(end), is_work).expect("valid test window")
}

/// Wed-Thu working 09:00-18:00, Fri-Sat off; deliberately out of order.
pub fn sample_schedule() -> Vec<DayWindow> {
    vec![
        window("2022-05-04 09:00", "2022-05-04 18:00", true),
        window("2022-05-06 00:00", "2022-05-06 00:00", false),
        window("2022-05-07 00:00", "2022-05-07 00:00", false),
        window("2022-05-05 09:00", "2022-05-05 18:00", true),
    ]
}

/// Raw calendar table equivalent to `sample_schedule` once normalized.
pub const SCHEDULE_CSV: &str = "\
day,start_time,end_time,is_work
2022-05-04,09:00:00,18:00:00,true
2022-05-05,,,true
2022-05-06,,,false
2022-05-07,00:00:00,,false
";

pub const CASES_CSV: &str = "\
id,start,end
A-1,2022-05-04 11:15,2022-05-04 14:50
A-2,2022-05-04 11:15,2022-05-05 14:50
A-3,2022-05-06 10:00,2022-05-07 11:00
";
