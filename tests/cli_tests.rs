use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{CASES_CSV, SCHEDULE_CSV, no_config, rwt, temp_path, write_temp};

#[test]
fn test_calc_seconds() {
    let cfg = no_config("calc_seconds");
    let schedule = write_temp("calc_seconds", "csv", SCHEDULE_CSV);

    rwt()
        .args([
            "--config",
            &cfg,
            "calc",
            "--schedule",
            &schedule,
            "--start",
            "2022-05-04 11:15",
            "--end",
            "2022-05-05 14:50",
            "--seconds",
        ])
        .assert()
        .success()
        .stdout("45300\n");
}

#[test]
fn test_calc_readable() {
    let cfg = no_config("calc_readable");
    let schedule = write_temp("calc_readable", "csv", SCHEDULE_CSV);

    rwt()
        .args([
            "--config",
            &cfg,
            "calc",
            "--schedule",
            &schedule,
            "--start",
            "2022-05-04 11:15:00",
            "--end",
            "2022-05-04 14:50:00",
        ])
        .assert()
        .success()
        .stdout(contains("03h 35m 00s").and(contains("12900 s")));
}

#[test]
fn test_calc_rejects_inverted_span() {
    let cfg = no_config("calc_inverted");
    let schedule = write_temp("calc_inverted", "csv", SCHEDULE_CSV);

    rwt()
        .args([
            "--config",
            &cfg,
            "calc",
            "--schedule",
            &schedule,
            "--start",
            "2022-05-05 10:00",
            "--end",
            "2022-05-04 10:00",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid input"));
}

#[test]
fn test_calc_rejects_bad_timestamp() {
    let cfg = no_config("calc_bad_ts");
    let schedule = write_temp("calc_bad_ts", "csv", SCHEDULE_CSV);

    rwt()
        .args([
            "--config", &cfg, "calc", "--schedule", &schedule, "--start", "yesterday", "--end",
            "2022-05-04 10:00",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid timestamp"));
}

#[test]
fn test_schedule_table() {
    let cfg = no_config("schedule_table");
    let schedule = write_temp("schedule_table", "csv", SCHEDULE_CSV);

    rwt()
        .args(["--config", &cfg, "schedule", "--file", &schedule])
        .assert()
        .success()
        .stdout(
            contains("2022-05-05")
                .and(contains("09:00:00"))
                .and(contains("work"))
                .and(contains("4 days, 2 working")),
        );
}

#[test]
fn test_schedule_json() {
    let cfg = no_config("schedule_json");
    let schedule = write_temp("schedule_json", "csv", SCHEDULE_CSV);

    let out = rwt()
        .args(["--config", &cfg, "schedule", "--file", &schedule, "--json"])
        .output()
        .expect("run schedule --json");
    assert!(out.status.success());

    let windows: serde_json::Value = serde_json::from_slice(&out.stdout).expect("valid json");
    assert_eq!(windows.as_array().map(Vec::len), Some(4));
    assert_eq!(windows[1]["start"], "2022-05-05T09:00:00");
    assert_eq!(windows[2]["is_work"], false);
}

#[test]
fn test_schedule_flips_day_off_with_hours() {
    let cfg = no_config("schedule_flip");
    let schedule = write_temp(
        "schedule_flip",
        "csv",
        "day,start_time,end_time,is_work\n2022-05-07,10:00:00,14:00:00,false\n",
    );

    rwt()
        .args(["--config", &cfg, "schedule", "--file", &schedule, "--json"])
        .assert()
        .success()
        .stdout(contains("\"is_work\": true").and(contains("2022-05-07T14:00:00")));
}

#[test]
fn test_schedule_with_duplicate_dates_fails() {
    let cfg = no_config("schedule_dup");
    let schedule = write_temp(
        "schedule_dup",
        "csv",
        "day,start_time,end_time,is_work\n2022-05-04,,,true\n2022-05-04,,,false\n",
    );

    rwt()
        .args(["--config", &cfg, "schedule", "--file", &schedule])
        .assert()
        .failure()
        .stderr(contains("Ambiguous schedule").and(contains("2022-05-04")));
}

#[test]
fn test_schedule_with_bad_time_names_row() {
    let cfg = no_config("schedule_bad_time");
    let schedule = write_temp(
        "schedule_bad_time",
        "csv",
        "label,day,start_time,end_time,is_work\nWed,2022-05-04,9 o'clock,,true\n",
    );

    rwt()
        .args(["--config", &cfg, "schedule", "--file", &schedule])
        .assert()
        .failure()
        .stderr(contains("Wed").and(contains("start_time")));
}

#[test]
fn test_batch_csv_export() {
    let cfg = no_config("batch_csv");
    let schedule = write_temp("batch_csv_schedule", "csv", SCHEDULE_CSV);
    let cases = write_temp("batch_csv_cases", "csv", CASES_CSV);
    let out = temp_path("batch_csv_out", "csv");

    rwt()
        .args([
            "--config", &cfg, "batch", "--schedule", &schedule, "--cases", &cases, "--file", &out,
        ])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("worktime_seconds"));
    assert!(content.contains("A-1"));
    assert!(content.contains(",45300,"));
}

#[test]
fn test_batch_json_export_overwrites_with_force() {
    let cfg = no_config("batch_json");
    let schedule = write_temp("batch_json_schedule", "csv", SCHEDULE_CSV);
    let cases = write_temp("batch_json_cases", "csv", CASES_CSV);
    let out = write_temp("batch_json_out", "json", "stale");

    rwt()
        .args([
            "--config", &cfg, "batch", "--schedule", &schedule, "--cases", &cases, "--format",
            "json", "--file", &out, "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(!content.contains("stale"));
    assert!(content.contains("\"worktime_seconds\": 12900"));
}

#[test]
fn test_batch_xlsx_export() {
    let cfg = no_config("batch_xlsx");
    let schedule = write_temp("batch_xlsx_schedule", "csv", SCHEDULE_CSV);
    let cases = write_temp("batch_xlsx_cases", "csv", CASES_CSV);
    let out = temp_path("batch_xlsx_out", "xlsx");

    rwt()
        .args([
            "--config", &cfg, "batch", "--schedule", &schedule, "--cases", &cases, "--format",
            "xlsx", "--file", &out,
        ])
        .assert()
        .success();

    assert!(fs::metadata(&out).map(|m| m.len() > 0).unwrap_or(false));
}

#[test]
fn test_init_then_print_config() {
    let cfg = temp_path("init_print", "conf");

    rwt()
        .args(["--config", &cfg, "init"])
        .assert()
        .success()
        .stdout(contains("Config file"));

    let content = fs::read_to_string(&cfg).expect("config written");
    assert!(content.contains("default_start_time"));

    rwt()
        .args(["--config", &cfg, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("day_column").and(contains("18:00:00")));
}

#[test]
fn test_custom_config_columns_and_defaults() {
    let cfg = write_temp(
        "custom_columns",
        "conf",
        "day_column: date\nstart_time_column: from\nend_time_column: to\nis_work_column: working\ndefault_end_time: '17:00:00'\n",
    );
    // Only Wednesday is scheduled (09:00-17:00 from the configured default),
    // so the overnight span is credited from its start to 17:00.
    let schedule = write_temp(
        "custom_columns",
        "csv",
        "date,from,to,working\n2022-05-04,,,yes\n",
    );

    rwt()
        .args([
            "--config",
            &cfg,
            "calc",
            "--schedule",
            &schedule,
            "--start",
            "2022-05-04 08:00",
            "--end",
            "2022-05-05 08:00",
            "--seconds",
        ])
        .assert()
        .success()
        .stdout("32400\n");
}

#[test]
fn test_broken_config_is_reported() {
    let cfg = write_temp("broken_config", "conf", "delimiter: ';;'\n");
    let schedule = write_temp("broken_config", "csv", SCHEDULE_CSV);

    rwt()
        .args(["--config", &cfg, "schedule", "--file", &schedule])
        .assert()
        .failure()
        .stderr(contains("delimiter"));
}
