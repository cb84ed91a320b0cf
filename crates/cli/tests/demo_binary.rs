use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn stockkeep(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("stockkeep").unwrap();
    cmd.current_dir(dir.path())
        .env("RUST_LOG", "info")
        .env("NO_COLOR", "1")
        .env_remove("STOCKKEEP_DATA_FILE")
        .env_remove("STOCKKEEP_LOW_STOCK_THRESHOLD")
        .env_remove("STOCKKEEP_LOG_FORMAT");
    cmd
}

#[test]
fn demo_run_logs_and_writes_inventory_file() {
    let dir = TempDir::new().unwrap();

    stockkeep(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 10 of apple"))
        .stdout(predicate::str::contains("Item 'orange' not found in stock."))
        .stdout(predicate::str::contains("Apple stock: 7"))
        .stdout(predicate::str::contains("Low items: [\"banana\"]"))
        .stdout(predicate::str::contains("apple -> 7"))
        .stdout(predicate::str::contains("All operations completed successfully."));

    let written = std::fs::read_to_string(dir.path().join("inventory.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(parsed, serde_json::json!({ "apple": 7, "banana": -2 }));
}

#[test]
fn unwritable_data_file_still_exits_zero() {
    let dir = TempDir::new().unwrap();

    stockkeep(&dir)
        .env("STOCKKEEP_DATA_FILE", dir.path().join("missing").join("inventory.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("File write error"))
        .stdout(predicate::str::contains("not found. Starting with empty inventory."))
        .stdout(predicate::str::contains("No items in inventory."));
}

#[test]
fn json_log_format_emits_objects() {
    let dir = TempDir::new().unwrap();

    stockkeep(&dir)
        .env("STOCKKEEP_LOG_FORMAT", "json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"message\":\"Apple stock: 7\""));
}
