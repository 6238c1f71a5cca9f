use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn budget(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("budget").unwrap();
    cmd.env("BUDGET_TRACKER_DATA_DIR", data_dir.path())
        .env_remove("RUST_LOG")
        .current_dir(data_dir.path());
    cmd
}

fn seed_scenario(data_dir: &TempDir) {
    budget(data_dir)
        .args(["expense", "add", "Coffee", "Food", "3.50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added expense #0"));
    budget(data_dir)
        .args(["expense", "add", "Bus", "Transport", "2.00"])
        .assert()
        .success();
    budget(data_dir)
        .args(["income", "add", "Salary", "100.00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("£100.00"));
}

#[test]
fn summary_shows_totals_and_breakdown() {
    let data_dir = TempDir::new().unwrap();
    seed_scenario(&data_dir);

    budget(&data_dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total expenses: £5.50"))
        .stdout(predicate::str::contains("Total income:   £100.00"))
        .stdout(predicate::str::contains("Balance:        £94.50 (surplus)"))
        .stdout(predicate::str::contains("63.6%"))
        .stdout(predicate::str::contains("36.4%"));
}

#[test]
fn export_writes_budget_csv() {
    let data_dir = TempDir::new().unwrap();
    seed_scenario(&data_dir);

    budget(&data_dir)
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 3 entries"));

    let csv = std::fs::read_to_string(data_dir.path().join("budget.csv")).unwrap();
    assert_eq!(
        csv,
        "Type,Name,Category,Amount\n\
         Expense,Coffee,Food,3.5\n\
         Expense,Bus,Transport,2\n\
         Income,Salary,,100\n"
    );
}

#[test]
fn export_json_to_custom_path() {
    let data_dir = TempDir::new().unwrap();
    seed_scenario(&data_dir);
    let output = data_dir.path().join("snapshot.json");

    budget(&data_dir)
        .args(["export", "--format", "json", "--output"])
        .arg(&output)
        .assert()
        .success();

    let snapshot: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(output).unwrap()).unwrap();
    assert_eq!(snapshot["totals"]["balance"], serde_json::json!(94.5));
    assert_eq!(snapshot["expenses"].as_array().unwrap().len(), 2);
}

#[test]
fn invalid_amount_is_rejected() {
    let data_dir = TempDir::new().unwrap();

    budget(&data_dir)
        .args(["expense", "add", "Coffee", "Food", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));

    budget(&data_dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses recorded."));
}

#[test]
fn negative_amounts_are_accepted() {
    let data_dir = TempDir::new().unwrap();

    budget(&data_dir)
        .args(["expense", "add", "Refund", "Shopping", "-5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("£-5.00"));
}

#[test]
fn delete_by_index_shifts_entries() {
    let data_dir = TempDir::new().unwrap();
    seed_scenario(&data_dir);

    budget(&data_dir)
        .args(["expense", "delete", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted expense: Coffee"));

    budget(&data_dir)
        .args(["expense", "delete", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted expense: Bus"));

    budget(&data_dir)
        .args(["expense", "delete", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Expense not found at index 0"));
}

#[test]
fn reset_requires_confirmation() {
    let data_dir = TempDir::new().unwrap();
    seed_scenario(&data_dir);

    budget(&data_dir)
        .arg("reset")
        .write_stdin("no\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Aborted."));

    budget(&data_dir)
        .args(["income", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Salary"));

    budget(&data_dir)
        .arg("reset")
        .write_stdin("yes\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 3 entries"));

    budget(&data_dir)
        .args(["income", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No income recorded."));
}

#[test]
fn reset_with_yes_flag_skips_prompt() {
    let data_dir = TempDir::new().unwrap();
    seed_scenario(&data_dir);

    budget(&data_dir)
        .args(["reset", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget reset."));
}

#[test]
fn corrupt_store_recovers_with_empty_list() {
    let data_dir = TempDir::new().unwrap();
    let store_dir = data_dir.path().join("data");
    std::fs::create_dir_all(&store_dir).unwrap();
    std::fs::write(store_dir.join("expenses.json"), "this is not json").unwrap();

    budget(&data_dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses recorded."));

    let backups: Vec<_> = std::fs::read_dir(&store_dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with("expenses.corrupt-"))
        })
        .collect();
    assert_eq!(backups.len(), 1);
    assert_eq!(
        std::fs::read_to_string(&backups[0]).unwrap(),
        "this is not json"
    );
}

#[test]
fn history_lists_changes() {
    let data_dir = TempDir::new().unwrap();
    seed_scenario(&data_dir);
    budget(&data_dir)
        .args(["income", "delete", "0"])
        .assert()
        .success();

    budget(&data_dir)
        .args(["history", "--limit", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE Expense #1 \"Bus\""))
        .stdout(predicate::str::contains("DELETE Income #0 \"Salary\""))
        .stdout(predicate::str::contains("Coffee").not());
}

#[test]
fn config_shows_paths() {
    let data_dir = TempDir::new().unwrap();

    budget(&data_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Currency symbol: £"))
        .stdout(predicate::str::contains("Export file:     budget.csv"))
        .stdout(predicate::str::contains("Wrote default settings"));

    let written: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(data_dir.path().join("config.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(written["currency_symbol"], "£");

    budget(&data_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default settings").not());
}

#[test]
fn edited_settings_change_the_currency() {
    let data_dir = TempDir::new().unwrap();
    std::fs::write(
        data_dir.path().join("config.json"),
        r#"{"currency_symbol": "$", "audit_enabled": false}"#,
    )
    .unwrap();

    budget(&data_dir)
        .args(["income", "add", "Salary", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$100.00"));

    assert!(!data_dir.path().join("audit.log").exists());
}

#[test]
fn oversized_amount_is_rejected() {
    let data_dir = TempDir::new().unwrap();

    budget(&data_dir)
        .args(["expense", "add", "Huge", "Misc", "50000000000000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));

    budget(&data_dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses recorded."));
}
