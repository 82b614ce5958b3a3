use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn spendbook(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("spendbook").unwrap();
    cmd.env("SPENDBOOK_DATA_DIR", data_dir.path());
    cmd
}

fn add_coffee(data_dir: &TempDir) {
    spendbook(data_dir)
        .args([
            "-m", "2024-05", "add", "Coffee", "3.50", "-c", "Food", "-d", "2024-05-02",
        ])
        .assert()
        .success();
}

#[test]
fn add_then_show_selected_month() {
    let data_dir = TempDir::new().unwrap();

    spendbook(&data_dir)
        .args([
            "-m", "2024-05", "add", "Coffee", "3.50", "-c", "Food", "-d", "2024-05-02",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 'Coffee' (€3.50) to 2024-05."))
        .stdout(predicate::str::contains("Selected Month: 2024-05"))
        .stdout(predicate::str::contains("Total Expenses: €3.50"));

    spendbook(&data_dir)
        .args(["-m", "2024-05", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Coffee"))
        .stdout(predicate::str::contains("Food: €3.50 (100.00%)"))
        .stdout(predicate::str::contains("Set a monthly budget to track progress"));
}

#[test]
fn budget_progress_and_remaining() {
    let data_dir = TempDir::new().unwrap();
    add_coffee(&data_dir);

    spendbook(&data_dir)
        .args(["-m", "2024-05", "budget", "set", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Budget Progress: 3.50% (€3.50 / €100)",
        ))
        .stdout(predicate::str::contains("Remaining Budget: €96.50"));

    spendbook(&data_dir)
        .args(["-m", "2024-05", "budget", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Monthly budget: €100"));

    let raw = std::fs::read_to_string(data_dir.path().join("data").join("storage.json")).unwrap();
    let stored: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored["monthlyBudget"], "100");
    assert!(stored["expenses"].as_str().unwrap().contains("Coffee"));
}

#[test]
fn expense_in_other_month_keeps_selection() {
    let data_dir = TempDir::new().unwrap();

    spendbook(&data_dir)
        .args([
            "-m", "2024-05", "add", "Boots", "80", "-c", "Shopping", "-d", "2023-01-15",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 'Boots' (€80.00) to 2023-01."))
        .stdout(predicate::str::contains("Still showing 2024-05"))
        .stdout(predicate::str::contains("Total Expenses").not());

    spendbook(&data_dir)
        .args(["-m", "2024-05", "months"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2023-01"));
}

#[test]
fn delete_by_position() {
    let data_dir = TempDir::new().unwrap();
    add_coffee(&data_dir);

    spendbook(&data_dir)
        .args(["-m", "2024-05", "delete", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Nothing deleted: 2024-05 has no expense #5.",
        ))
        .stdout(predicate::str::contains("Total Expenses: €3.50"));

    spendbook(&data_dir)
        .args(["-m", "2024-05", "delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted 'Coffee' from 2024-05."))
        .stdout(predicate::str::contains("No expenses for this month."))
        .stdout(predicate::str::contains("Total Expenses: €0.00"));
}

#[test]
fn rejects_unknown_category() {
    let data_dir = TempDir::new().unwrap();

    spendbook(&data_dir)
        .args(["add", "Snack", "2", "-c", "Snacks"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown category 'Snacks'"));
}

#[test]
fn rejects_invalid_month_and_date() {
    let data_dir = TempDir::new().unwrap();

    spendbook(&data_dir)
        .args(["-m", "2024-13", "show"])
        .assert()
        .failure();

    spendbook(&data_dir)
        .args(["add", "Snack", "2", "-c", "Food", "-d", "2024-02-30"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
}

#[test]
fn history_lists_changes() {
    let data_dir = TempDir::new().unwrap();

    spendbook(&data_dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No history yet."));

    add_coffee(&data_dir);
    spendbook(&data_dir)
        .args(["budget", "set", "50"])
        .assert()
        .success();

    spendbook(&data_dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("ADD 2024-05"))
        .stdout(predicate::str::contains("SET_BUDGET (unset) -> 50"));
}

#[test]
fn lists_categories_and_config() {
    let data_dir = TempDir::new().unwrap();

    spendbook(&data_dir)
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("Food"))
        .stdout(predicate::str::contains("Transport"));

    spendbook(&data_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Currency symbol: €"))
        .stdout(predicate::str::contains("Initialized:    no"));

    spendbook(&data_dir).arg("init").assert().success();

    spendbook(&data_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized:    yes"));
}
