use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use regex::Regex;

fn session(input: &str) -> assert_cmd::assert::Assert {
    Command::cargo_bin("expense_tracker")
        .unwrap()
        .env_remove("RUST_LOG")
        .write_stdin(input.to_string())
        .assert()
}

fn stdout_of(input: &str) -> String {
    let output = session(input).success().get_output().stdout.clone();
    String::from_utf8(output).unwrap()
}

#[test]
fn script_mode_runs_documented_scenario() {
    let stdout = stdout_of("2\n20\n\n1\n3\n50\nGeneral\n1\n4\n1\n7\n0\n");

    assert!(stdout.starts_with("Welcome to the Expense Tracker!"));
    assert!(stdout.contains("Expense of $20.0 in 'General' category added successfully."));
    assert!(stdout.contains("Income of $50.0 in 'General' category added successfully."));
    assert!(stdout.contains("Last transaction canceled successfully."));

    let balances: Vec<&str> = stdout
        .lines()
        .filter(|line| line.starts_with("Current Balance:"))
        .collect();
    assert_eq!(
        balances,
        [
            "Current Balance: $-20.0",
            "Current Balance: $30.0",
            "Current Balance: $-20.0",
        ]
    );
    assert!(stdout.lines().any(|line| line == "General: -20.0"));
    assert!(stdout.ends_with("Exiting the Expense Tracker. Goodbye!\n"));
}

#[test]
fn menu_and_prompt_are_printed_every_iteration() {
    let stdout = stdout_of("9\n0\n");
    assert_eq!(stdout.matches("Available commands:").count(), 2);
    assert_eq!(stdout.matches("Enter command:").count(), 2);
    assert!(stdout.contains("7. Show Balance By Category"));
    assert!(stdout.contains("Invalid command. Please try again."));
}

#[test]
fn validation_errors_are_printed_to_stdout_and_loop_continues() {
    session("2\nabc\n3\n0\n3\n-5\n6\n   \n6\nFood\n6\nfood\n0\n")
        .success()
        .stdout(contains("Invalid amount. Please enter a positive number."))
        .stdout(contains("Amount must be greater than 0."))
        .stdout(contains("Invalid category name."))
        .stdout(contains("Category 'Food' added successfully."))
        .stdout(contains("Category 'food' already exists."))
        .stdout(contains("Goodbye!"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn unknown_category_is_recorded_under_general() {
    let stdout = stdout_of("2\n5\nFoo\n7\n0\n");
    assert!(stdout.contains("Available categories: General"));
    assert!(stdout.contains("Expense of $5.0 in 'General' category added successfully."));
    assert!(stdout.lines().any(|line| line == "General: -5.0"));
    assert!(!stdout.contains("Foo:"));
}

#[test]
fn history_lists_transactions_oldest_first_with_timestamps() {
    let stdout = stdout_of("5\n6\nFood\n2\n12.50\nfood\n3\n100\n\n5\n0\n");
    assert!(stdout.contains("Transaction history is empty."));

    let pattern = Regex::new(
        r"^(Expense|Income): \$[0-9.]+ in '[^']+' on \d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}$",
    )
    .unwrap();
    let entries: Vec<&str> = stdout
        .lines()
        .filter(|line| pattern.is_match(line))
        .collect();
    assert_eq!(entries.len(), 2, "history lines missing:\n{stdout}");
    assert!(entries[0].starts_with("Expense: $12.5 in 'Food' on "));
    assert!(entries[1].starts_with("Income: $100.0 in 'General' on "));
}

#[test]
fn cancel_on_empty_history_reports_and_keeps_balance() {
    let stdout = stdout_of("4\n1\n0\n");
    assert!(stdout.contains("No transactions to cancel."));
    assert!(stdout.contains("Current Balance: $0.0"));
}

#[test]
fn end_of_input_ends_session_with_success() {
    session("3\n10\n")
        .success()
        .stdout(contains("Income of $10.0 in 'General' category added successfully."))
        .stdout(contains("Exiting the Expense Tracker. Goodbye!"));
}

#[test]
fn balance_overflow_is_reported_and_session_continues() {
    let max = "79228162514264337593543950335";
    session(&format!("3\n{max}\n\n3\n{max}\n\n1\n0\n"))
        .success()
        .stdout(contains(format!(
            "Income of ${max}.0 in 'General' category added successfully."
        )))
        .stdout(contains("Amount is out of the supported range."))
        .stdout(contains(format!("Current Balance: ${max}.0")))
        .stdout(contains("Goodbye!"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn unrepresentable_amounts_are_rejected_before_category_prompt() {
    let stdout = stdout_of("2\n1e30\n2\n1_000\n2\n0.00000000000000000000000000001\n1\n0\n");
    assert_eq!(stdout.matches("Amount is out of the supported range.").count(), 1);
    assert_eq!(
        stdout
            .matches("Invalid amount. Please enter a positive number.")
            .count(),
        2
    );
    assert!(!stdout.contains("Enter category name"));
    assert!(stdout.contains("Current Balance: $0.0"));
}

#[test]
fn category_total_overflow_is_reported() {
    let max = "79228162514264337593543950335";
    let stdout = stdout_of(&format!(
        "6\nFood\n3\n{max}\n\n2\n1\nFood\n3\n1\n\n7\n4\n7\n0\n"
    ));
    assert_eq!(stdout.matches("Amount is out of the supported range.").count(), 1);
    assert!(stdout.lines().any(|line| line == format!("General: {max}.0")));
    assert!(stdout.lines().any(|line| line == "Food: -1.0"));
}
