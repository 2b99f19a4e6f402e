use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;

const LEDGER: &str = "\
Huvudbok;;;;;;;;;
Konto;Namn/Vernr;Ks;;Datum;Text;Transaktionsinfo;Debet;Kredit;Saldo
1930;Företagskonto;;;;;;;;
;;;;;Ingående balans;;;;50 000,00
;A1;;;2024-03-05;Kundbetalning;Faktura 1001;10 000,00;;60 000,00
;A2;;;2024-03-20;Material;;;4 000,00;56 000,00
;;;;;Utgående saldo;;;;56 000,00
-------;;;;;;;;;
3010;Försäljning tjänster;;;;;;;;
;A1;;;2024-03-05;Kundfaktura;Faktura 1001;;10 000,00;
4010;Inköp material;;;;;;;;
;A2;;;2024-03-20;Material;;4 000,00;;
";

fn cmd(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("huvudbok").unwrap();
    cmd.env("HOME", home).env_remove("RUST_LOG");
    cmd
}

fn write_ledger(dir: &Path) -> PathBuf {
    let path = dir.join("huvudbok.csv");
    std::fs::write(&path, LEDGER).unwrap();
    path
}

#[test]
fn parse_lists_transactions() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_ledger(dir.path());
    cmd(dir.path())
        .args(["parse", path.to_str().unwrap(), "--verbose"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Transactions (4)"))
        .stdout(predicate::str::contains("Kundbetalning"))
        .stdout(predicate::str::contains("Skipped 3 rows"));
}

#[test]
fn kpi_shows_figures_and_months() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_ledger(dir.path());
    cmd(dir.path())
        .args(["kpi", path.to_str().unwrap(), "--months"])
        .assert()
        .success()
        .stdout(predicate::str::contains("10 000,00 kr"))
        .stdout(predicate::str::contains("56 000,00 kr"))
        .stdout(predicate::str::contains("2024-03"));
}

#[test]
fn export_writes_json_report() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_ledger(dir.path());
    let out = dir.path().join("report.json");
    cmd(dir.path())
        .args(["export", path.to_str().unwrap(), "--output", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 4 transactions"));

    let report = huvudbok::report::read_report(&out).unwrap();
    assert_eq!(report.source.as_deref(), Some("huvudbok.csv"));
    assert_eq!(report.kpis.revenue, 10000.0);
    assert_eq!(report.kpis.expenses, 4000.0);
    assert_eq!(report.kpis.cash_end, 56000.0);
}

#[test]
fn missing_header_fails_with_one_message() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.csv");
    std::fs::write(&path, "Datum;Text;Belopp\n2024-01-01;Hyra;-100\n").unwrap();
    cmd(dir.path())
        .args(["kpi", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Header row not found"));
}

#[test]
fn empty_ledger_reports_no_transactions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.csv");
    std::fs::write(
        &path,
        "Konto;Namn/Vernr;Ks;;Datum;Text;Transaktionsinfo;Debet;Kredit;Saldo\n3010;Försäljning;;;;;;;;\n",
    )
    .unwrap();
    cmd(dir.path())
        .args(["export", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: No transactions found"));
}

#[test]
fn project_with_changes_finds_break_even() {
    let dir = tempfile::tempdir().unwrap();
    let changes = dir.path().join("changes.json");
    std::fs::write(
        &changes,
        r#"[
            {"id": "1", "type": "one_time_cost", "description": "Maskin", "amount": 50000, "startDate": "2024-01-01"},
            {"id": "2", "type": "revenue", "description": "Ny kund", "amount": 30000, "startDate": "2024-03-01", "isRecurring": true}
        ]"#,
    )
    .unwrap();
    let output = cmd(dir.path())
        .args([
            "project",
            "--revenue", "100000",
            "--fixed-costs", "60000",
            "--variable-costs", "40000",
            "--cash", "200000",
            "--start", "2024-01",
            "--changes", changes.to_str().unwrap(),
            "--json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let result: huvudbok::ProjectionResult = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result.projections.len(), 12);
    assert_eq!(result.summary.break_even_month, Some(3));
    assert_eq!(result.summary.final_cash_difference, 250000.0);
}

#[test]
fn project_from_ledger_uses_latest_month() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_ledger(dir.path());
    let output = cmd(dir.path())
        .args(["project", "--from-ledger", path.to_str().unwrap(), "--start", "2024-04", "--months", "2", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let result: huvudbok::ProjectionResult = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result.projections.len(), 2);
    assert_eq!(result.projections[0].base_profit, 6000.0);
    assert_eq!(result.projections[1].base_cash, 56000.0 + 12000.0);
}

#[test]
fn project_table_output() {
    let dir = tempfile::tempdir().unwrap();
    cmd(dir.path())
        .args(["project", "--revenue", "1000", "--start", "2024-11", "--months", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nov 2024"))
        .stdout(predicate::str::contains("jan 2025"))
        .stdout(predicate::str::contains("Break-even: none within horizon"));
}

#[test]
fn config_persists_settings() {
    let dir = tempfile::tempdir().unwrap();
    cmd(dir.path())
        .args(["config", "--horizon", "6", "--currency", "SEK"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default_horizon_months = 6"));
    assert!(dir.path().join(".config/huvudbok/settings.json").exists());

    cmd(dir.path())
        .args(["project", "--revenue", "1000", "--start", "2024-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Projection (6 months)"))
        .stdout(predicate::str::contains("1 000,00 SEK"));
}
