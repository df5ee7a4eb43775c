//! Integration tests for the `bazi` command-line interface.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

fn bazi() -> Command {
    Command::cargo_bin("bazi").unwrap()
}

// ---------------------------------------------------------------------------
// chart
// ---------------------------------------------------------------------------

#[test]
fn chart_prints_pillars() {
    bazi()
        .args(["chart", "--date", "2000-01-01", "--time", "12:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("己卯丙子戊午戊午"))
        .stdout(predicate::str::contains("日主"));
}

#[test]
fn chart_json() {
    bazi()
        .args(["chart", "--date", "2000-01-01", "--time", "12", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"key\": \"己卯丙子戊午戊午\""))
        .stdout(predicate::str::contains("\"fiveElements\""))
        .stdout(predicate::str::contains("\"dayMaster\""));
}

#[test]
fn chart_rejects_bad_date() {
    bazi()
        .args(["chart", "--date", "2000/01/01", "--time", "12:00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("birthDate"));
}

#[test]
fn chart_rejects_out_of_range_time() {
    bazi()
        .args(["chart", "--date", "2000-01-01", "--time", "12:75"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("birthTime 不合法"));
}

// ---------------------------------------------------------------------------
// questions
// ---------------------------------------------------------------------------

#[test]
fn questions_are_stable_for_a_day() {
    let args = [
        "questions",
        "--date",
        "1990-05-17",
        "--time",
        "14:30",
        "--on",
        "2026-10-18",
        "--json",
    ];
    let first = bazi().args(args).output().unwrap();
    let second = bazi().args(args).output().unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);

    let list: serde_json::Value = serde_json::from_slice(&first.stdout).unwrap();
    assert_eq!(list.as_array().unwrap().len(), 5);
    assert!(list[0].get("expectedYes").is_none());
}

#[test]
fn questions_table() {
    bazi()
        .args([
            "questions",
            "--date",
            "1990-05-17",
            "--time",
            "14:30",
            "--on",
            "2026-10-18",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Questions for 庚午辛巳"));
}

#[test]
fn questions_reject_bad_context_date() {
    bazi()
        .args([
            "questions", "--date", "1990-05-17", "--time", "14:30", "--on", "tomorrow",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--on must be YYYY-MM-DD"));
}

// ---------------------------------------------------------------------------
// reading
// ---------------------------------------------------------------------------

#[test]
fn reading_with_answers_json() {
    let output = bazi()
        .args([
            "reading",
            "--date",
            "1990-05-17",
            "--time",
            "14:30",
            "--on",
            "2026-10-18",
            "--json",
        ])
        .write_stdin("y\ny\nn\n\ny\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["pastReview"]["total"], 5);
    assert_eq!(report["pastReview"]["answered"], 4);
    let years: Vec<i64> = report["future"]["timeline"]
        .as_array()
        .unwrap()
        .iter()
        .map(|y| y["year"].as_i64().unwrap())
        .collect();
    assert_eq!(years, vec![2026, 2027, 2028, 2029, 2030]);
    assert!(report["future"]["note"].as_str().unwrap().contains("不構成"));
}

#[test]
fn reading_survives_empty_input() {
    bazi()
        .args([
            "reading",
            "--date",
            "1990-05-17",
            "--time",
            "14:30",
            "--on",
            "2026-10-18",
            "--json",
        ])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"answered\": 0"));
}

#[test]
fn reading_years_flag() {
    bazi()
        .args([
            "reading",
            "--date",
            "1990-05-17",
            "--time",
            "14:30",
            "--on",
            "2026-10-18",
            "--years",
            "3",
            "--json",
        ])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"year\": 2028"))
        .stdout(predicate::str::contains("\"year\": 2029").not());
}

#[test]
fn reading_table_output() {
    bazi()
        .args([
            "reading",
            "--date",
            "1990-05-17",
            "--time",
            "14:30",
            "--on",
            "2026-10-18",
        ])
        .write_stdin("y\nn\ny\nn\ny\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Past review"))
        .stdout(predicate::str::contains("2030"))
        .stderr(predicate::str::contains("[1/5]"));
}
