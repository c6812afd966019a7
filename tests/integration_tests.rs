use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{Sandbox, init_db_with_data, setup_test_db};

/// Short id shown by `list` for the row dated `date`
fn short_id_for(sb: &Sandbox, date: &str) -> String {
    let out = sb.rl().arg("list").output().expect("run list");
    let stdout = String::from_utf8_lossy(&out.stdout).to_string();
    stdout
        .lines()
        .find(|l| l.contains(date))
        .and_then(|l| l.split_whitespace().next())
        .map(str::to_string)
        .unwrap_or_else(|| panic!("no row for {date} in:\n{stdout}"))
}

#[test]
fn test_init_creates_database() {
    let sb = setup_test_db();
    assert!(std::path::Path::new(&sb.db).exists());
}

#[test]
fn test_init_without_test_flag_writes_config() {
    let sb = Sandbox::new();
    sb.rl().arg("init").assert().success();

    let conf = sb.root().join(".ridelog").join("ridelog.conf");
    let content = fs::read_to_string(conf).expect("config written");
    assert!(content.contains("storage_key: ride-report-entries"));
    assert!(content.contains(&sb.db));
}

#[test]
fn test_add_and_list() {
    let sb = init_db_with_data();

    sb.rl()
        .arg("list")
        .assert()
        .success()
        .stdout(contains("2024-06-01"))
        .stdout(contains("2024-06-03"))
        .stdout(contains("2024-05-20"))
        .stdout(contains("R$ 100,00"))
        .stdout(contains("R$ 80,00"));
}

#[test]
fn test_list_filtered_by_period() {
    let sb = init_db_with_data();

    sb.rl()
        .args(["list", "--period", "2024-05"])
        .assert()
        .success()
        .stdout(contains("2024-05-20").and(contains("2024-06-01").not()));
}

#[test]
fn test_list_empty_database() {
    let sb = setup_test_db();

    sb.rl()
        .arg("list")
        .assert()
        .success()
        .stdout(contains("No entries found."));
}

#[test]
fn test_add_same_date_replaces_entry() {
    let sb = init_db_with_data();

    sb.rl()
        .args(["add", "2024-06-01", "--earnings", "150"])
        .assert()
        .success()
        .stdout(contains("replaced"))
        .stdout(contains("Entry for 2024-06-01 updated."));

    let out = sb.rl().arg("list").output().unwrap();
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(stdout.lines().filter(|l| l.contains("2024-06-01")).count(), 1);
    assert!(stdout.contains("R$ 150,00"));
}

#[test]
fn test_add_rejects_negative_amount() {
    let sb = setup_test_db();

    sb.rl()
        .args(["add", "2024-06-01", "--earnings", "-5"])
        .assert()
        .failure()
        .stderr(contains("Invalid amount for earnings"));

    sb.rl()
        .arg("list")
        .assert()
        .success()
        .stdout(contains("No entries found."));
}

#[test]
fn test_add_rejects_bad_date() {
    let sb = setup_test_db();

    sb.rl()
        .args(["add", "2024-02-30", "--earnings", "10"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_stats_month() {
    let sb = init_db_with_data();

    sb.rl()
        .args(["stats", "--at", "2024-06-15"])
        .assert()
        .success()
        .stdout(contains("June 2024"))
        .stdout(contains("Days worked        : 2"))
        .stdout(contains("R$ 300,00"))
        .stdout(contains("R$ 70,00"))
        .stdout(contains("9 rides"));
}

#[test]
fn test_stats_week_and_day() {
    let sb = init_db_with_data();

    // Wednesday: the week started on Sunday 2024-06-02
    sb.rl()
        .args(["stats", "--week", "--at", "2024-06-05"])
        .assert()
        .success()
        .stdout(contains("Week from 2024-06-02"))
        .stdout(contains("4 rides"));

    sb.rl()
        .args(["stats", "--day", "2024-06-02", "--at", "2024-06-05"])
        .assert()
        .success()
        .stdout(contains("No entry logged for 2024-06-02."));

    sb.rl()
        .args(["stats", "--day", "2024-06-03", "--at", "2024-06-05"])
        .assert()
        .success()
        .stdout(contains("Monday"))
        .stdout(contains("R$ 150,00"));
}

#[test]
fn test_report_by_month() {
    let sb = init_db_with_data();

    let out = sb.rl().args(["report", "--by", "month"]).output().unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);

    let june = stdout.find("2024-06").expect("june row");
    let may = stdout.find("2024-05").expect("may row");
    assert!(june < may, "newest period first:\n{stdout}");
    assert!(stdout.contains("R$ 230,00"));
}

#[test]
fn test_del_by_short_id() {
    let sb = init_db_with_data();
    let id = short_id_for(&sb, "2024-06-03");

    sb.rl()
        .args(["del", &id, "--yes"])
        .assert()
        .success()
        .stdout(contains("deleted"));

    sb.rl()
        .arg("list")
        .assert()
        .success()
        .stdout(contains("2024-06-03").not());
}

#[test]
fn test_del_unknown_id_is_noop() {
    let sb = init_db_with_data();

    sb.rl()
        .args(["del", "no-such-id", "-y"])
        .assert()
        .success()
        .stdout(contains("nothing to delete"));

    sb.rl()
        .arg("list")
        .assert()
        .success()
        .stdout(contains("2024-06-03"));
}

#[test]
fn test_edit_moves_entry_to_new_date() {
    let sb = init_db_with_data();
    let id = short_id_for(&sb, "2024-05-20");

    sb.rl()
        .args(["edit", &id, "--date", "2024-05-21", "--expenses", "12"])
        .assert()
        .success()
        .stdout(contains("Entry for 2024-05-21 updated"));

    let out = sb.rl().arg("list").output().unwrap();
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(!stdout.contains("2024-05-20"));
    assert!(stdout.contains("2024-05-21"));
    assert!(stdout.contains("R$ 68,00"));
}

#[test]
fn test_edit_unknown_id_fails() {
    let sb = init_db_with_data();

    sb.rl()
        .args(["edit", "zzzz", "--earnings", "1"])
        .assert()
        .failure()
        .stderr(contains("no entry with id zzzz"));
}

#[test]
fn test_export_csv_and_json() {
    let sb = init_db_with_data();
    let csv_path = sb.path("out.csv");
    let json_path = sb.path("out.json");

    sb.rl()
        .args(["export", "--format", "csv", "--file"])
        .arg(&csv_path)
        .args(["--range", "2024-06"])
        .assert()
        .success()
        .stdout(contains("CSV export completed: 2 entries"));

    let csv = fs::read_to_string(&csv_path).unwrap();
    let mut lines = csv.lines();
    assert!(lines.next().unwrap().starts_with("id,date,earnings,expenses,net_profit"));
    assert!(lines.next().unwrap().contains("2024-06-01"));
    assert!(lines.next().unwrap().contains("2024-06-03"));
    assert!(lines.next().is_none());

    sb.rl()
        .args(["export", "--format", "json", "--file"])
        .arg(&json_path)
        .assert()
        .success();

    let v: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
    let rows = v.as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["date"], "2024-05-20");
    assert_eq!(rows[1]["rides_total"], 5);
}

#[test]
fn test_export_empty_range_writes_nothing() {
    let sb = init_db_with_data();
    let path = sb.path("none.csv");

    sb.rl()
        .args(["export", "--file"])
        .arg(&path)
        .args(["--range", "2020"])
        .assert()
        .success()
        .stderr(contains("No entries found"));

    assert!(!path.exists());
}

#[test]
fn test_export_requires_absolute_path() {
    let sb = init_db_with_data();

    sb.rl()
        .args(["export", "--file", "relative.csv"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_backup_plain_and_compressed() {
    let sb = init_db_with_data();
    let copy = sb.path("backup.sqlite");
    let zipped = sb.path("backup_zip.sqlite");

    sb.rl()
        .args(["backup", "--file"])
        .arg(&copy)
        .assert()
        .success()
        .stdout(contains("Backup created"));
    assert!(copy.exists());

    sb.rl()
        .args(["backup", "--compress", "--file"])
        .arg(&zipped)
        .assert()
        .success();
    assert!(zipped.with_extension("zip").exists());
}

#[test]
fn test_db_info_and_check() {
    let sb = init_db_with_data();

    sb.rl()
        .args(["db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("ride-report-entries"))
        .stdout(contains("3 entries"))
        .stdout(contains("Integrity check passed"));
}

#[test]
fn test_corrupt_slot_starts_empty() {
    let sb = init_db_with_data();

    let conn = rusqlite::Connection::open(&sb.db).unwrap();
    conn.execute(
        "UPDATE kv_slots SET value = '{broken' WHERE key = 'ride-report-entries'",
        [],
    )
    .unwrap();
    drop(conn);

    sb.rl()
        .arg("list")
        .assert()
        .success()
        .stdout(contains("No entries found."));
}

#[test]
fn test_blank_id_never_matches() {
    let sb = setup_test_db();
    sb.rl()
        .args(["add", "2024-06-01", "--earnings", "100", "--distance", "50"])
        .assert()
        .success();

    sb.rl()
        .args(["del", " ", "--yes"])
        .assert()
        .failure()
        .stderr(contains("an entry id is required"));

    sb.rl()
        .args(["edit", "", "--earnings", "1"])
        .assert()
        .failure()
        .stderr(contains("an entry id is required"));

    sb.rl()
        .arg("list")
        .assert()
        .success()
        .stdout(contains("2024-06-01"))
        .stdout(contains("R$ 100,00"));
}
