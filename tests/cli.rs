//! Binary smoke tests against a throwaway data directory

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn spendwise(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("spendwise").unwrap();
    cmd.env("SPENDWISE_DATA_DIR", dir.path())
        .env_remove("SPENDWISE_LOG")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn default_command_shows_sample_summary() {
    let dir = TempDir::new().unwrap();

    spendwise(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("All time"))
        .stdout(predicate::str::contains("$5,000.00"))
        .stdout(predicate::str::contains("$3,790.00"))
        .stdout(predicate::str::contains("Housing & Utilities"));
}

#[test]
fn add_and_list_transactions() {
    let dir = TempDir::new().unwrap();

    spendwise(&dir).args(["txn", "clear", "--yes"]).assert().success();

    spendwise(&dir)
        .args(["txn", "add", "expense", "12.50", "-c", "food", "-n", "Bagels"])
        .args(["-d", "2025-03-09"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added transaction"));

    spendwise(&dir)
        .args(["txn", "list", "--search", "bagel"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bagels"))
        .stdout(predicate::str::contains("1 transaction(s)"));

    spendwise(&dir)
        .args(["summary", "--month", "2025-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("March 2025"))
        .stdout(predicate::str::contains("$12.50"));
}

#[test]
fn rejects_bad_input() {
    let dir = TempDir::new().unwrap();

    spendwise(&dir)
        .args(["txn", "add", "expense", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("greater than zero"));

    for amount in ["abc5", "$-5"] {
        spendwise(&dir)
            .args(["txn", "add", "expense", amount])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid amount"));
    }

    spendwise(&dir)
        .args(["txn", "add", "income", "10", "-c", "food"])
        .assert()
        .failure();

    spendwise(&dir)
        .args(["txn", "clear"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--yes"));
}

#[test]
fn budget_goals_report_overspending() {
    let dir = TempDir::new().unwrap();

    spendwise(&dir)
        .args(["budget", "add", "food", "310", "--name", "Groceries"])
        .assert()
        .success();

    spendwise(&dir)
        .args(["budget", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries"))
        .stdout(predicate::str::contains("200% OVER"));

    spendwise(&dir)
        .args(["budget", "add", "salary", "100"])
        .assert()
        .failure();
}

#[test]
fn chart_writes_svg() {
    let dir = TempDir::new().unwrap();
    let svg = dir.path().join("chart.svg");

    spendwise(&dir)
        .args(["chart", "--svg"])
        .arg(&svg)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Spent"))
        .stdout(predicate::str::contains("10 categories active"));

    let contents = std::fs::read_to_string(&svg).unwrap();
    assert!(contents.starts_with("<svg"));
    assert_eq!(contents.matches("<path").count(), 10);
}

#[test]
fn subscriptions_from_presets() {
    let dir = TempDir::new().unwrap();

    spendwise(&dir)
        .args(["sub", "preset", "netflix"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Netflix"));

    spendwise(&dir)
        .args(["sub", "add", "Backup", "120", "--cycle", "yearly"])
        .assert()
        .success();

    spendwise(&dir)
        .args(["sub", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Netflix"))
        .stdout(predicate::str::contains("$10.00"));

    spendwise(&dir)
        .args(["sub", "preset", "myspace"])
        .assert()
        .failure();
}

#[test]
fn config_changes_currency_symbol() {
    let dir = TempDir::new().unwrap();

    spendwise(&dir)
        .args(["config", "currency", "eur"])
        .assert()
        .success();

    spendwise(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("EUR"));

    spendwise(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("€5,000.00"));

    spendwise(&dir)
        .args(["config", "theme", "sepia"])
        .assert()
        .failure();
}

#[test]
fn export_writes_csv() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("ledger.csv");

    spendwise(&dir)
        .arg("export")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 11 row(s)"));

    let csv = std::fs::read_to_string(&out).unwrap();
    assert!(csv.starts_with("ID,Date,Type,Category,Note,Payment Method,Amount"));
    assert_eq!(csv.lines().count(), 12);
}
