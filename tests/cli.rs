//! End-to-end tests for the kakeibo binary
//!
//! Everything here runs against a throwaway config directory; the dry-run
//! flag keeps the submit tests off the network.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn kakeibo(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("kakeibo").unwrap();
    cmd.env("KAKEIBO_FORM_CONFIG_DIR", config_dir.path());
    cmd
}

#[test]
fn help_lists_the_subcommands() {
    let config_dir = TempDir::new().unwrap();
    kakeibo(&config_dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("submit"))
        .stdout(predicate::str::contains("categories"))
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn categories_prints_all_four_vocabularies() {
    let config_dir = TempDir::new().unwrap();
    kakeibo(&config_dir)
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("Income categories:"))
        .stdout(predicate::str::contains("salary"))
        .stdout(predicate::str::contains("Expense categories:"))
        .stdout(predicate::str::contains("food"))
        .stdout(predicate::str::contains("Top-up categories:"))
        .stdout(predicate::str::contains("Deposit categories:"))
        .stdout(predicate::str::contains("wallet"));
}

#[test]
fn categories_filtered_to_one_type() {
    let config_dir = TempDir::new().unwrap();
    kakeibo(&config_dir)
        .args(["categories", "--type", "income"])
        .assert()
        .success()
        .stdout(predicate::str::contains("salary"))
        .stdout(predicate::str::contains("food").not());
}

#[test]
fn dry_run_submit_prints_the_encoded_pairs() {
    let config_dir = TempDir::new().unwrap();
    kakeibo(&config_dir)
        .args([
            "submit",
            "--date",
            "2024-05-01",
            "--type",
            "expense",
            "--category",
            "food",
            "--description",
            "lunch",
            "--amount",
            "1500",
            "--payment",
            "cash",
            "--eating-out",
            "--dry-run",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("POST "))
        .stdout(predicate::str::contains("entry.1534241070=2024/05/01"))
        .stdout(predicate::str::contains("entry.911996037=expense"))
        .stdout(predicate::str::contains("entry.1045781291=food"))
        .stdout(predicate::str::contains("entry.839337160=1500"))
        .stdout(predicate::str::contains("entry.769723499=eating-out"))
        .stdout(predicate::str::contains("nothing sent"));
}

#[test]
fn incomplete_submit_lists_every_problem_at_once() {
    let config_dir = TempDir::new().unwrap();
    kakeibo(&config_dir)
        .args(["submit", "--type", "expense", "--dry-run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("category"))
        .stderr(predicate::str::contains("amount"))
        .stderr(predicate::str::contains("payment-method"));
}

#[test]
fn unknown_entry_type_is_rejected_with_the_accepted_spellings() {
    let config_dir = TempDir::new().unwrap();
    kakeibo(&config_dir)
        .args(["submit", "--type", "withdrawal", "--dry-run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("withdrawal"))
        .stderr(predicate::str::contains("top-up"));
}

#[test]
fn init_writes_the_default_config_file() {
    let config_dir = TempDir::new().unwrap();
    kakeibo(&config_dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("config.json"));

    let written = config_dir.path().join("config.json");
    assert!(written.exists());
    let contents = std::fs::read_to_string(written).unwrap();
    assert!(contents.contains("endpoint_url"));
    assert!(contents.contains("field_ids"));
}

#[test]
fn config_shows_the_effective_settings() {
    let config_dir = TempDir::new().unwrap();
    kakeibo(&config_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Endpoint URL:"))
        .stdout(predicate::str::contains("entry.1534241070"))
        .stdout(predicate::str::contains("eating-out"));
}

#[test]
fn config_respects_an_edited_settings_file() {
    let config_dir = TempDir::new().unwrap();
    std::fs::write(
        config_dir.path().join("config.json"),
        r#"{"endpoint_url": "http://localhost:9/collect", "field_ids": {"amount": "entry.42"}}"#,
    )
    .unwrap();

    kakeibo(&config_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("http://localhost:9/collect"))
        .stdout(predicate::str::contains("entry.42"));

    // The untouched ids keep their defaults
    kakeibo(&config_dir)
        .arg("config")
        .assert()
        .stdout(predicate::str::contains("entry.1534241070"));
}
