//! Integration tests for `tablekit check table`

mod common;

use common::{create_cli_command, init_table_document, write_file, TempDir};
use predicates::prelude::*;

#[test]
fn test_check_accepts_generated_schema() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "users.toml", &init_table_document("users"));

    create_cli_command(&dir)
        .args(["check", "table"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Table: users"))
        .stdout(predicate::str::contains("System fields: v1"))
        .stdout(predicate::str::contains("uuid [unique, required, automatic]"))
        .stdout(predicate::str::contains("timestamp [required, automatic]"));
}

#[test]
fn test_check_rejects_missing_system_field() {
    let dir = TempDir::new().unwrap();
    let doc = init_table_document("users").replace("[fields.updated_at]", "[fields.touched_at]");
    let path = write_file(&dir, "users.toml", &doc);

    create_cli_command(&dir)
        .args(["check", "table"])
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("missing system field 'updated_at'"));
}

#[test]
fn test_check_rejects_document_without_ids() {
    let dir = TempDir::new().unwrap();
    let doc: String = init_table_document("users")
        .lines()
        .filter(|line| !line.starts_with("id = "))
        .map(|line| format!("{line}\n"))
        .collect();
    let path = write_file(&dir, "users.toml", &doc);

    create_cli_command(&dir)
        .args(["check", "table"])
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("missing field `id`"));
}

#[test]
fn test_check_rejects_unknown_type() {
    let dir = TempDir::new().unwrap();
    let doc = init_table_document("users").replacen("type = \"timestamp\"", "type = \"clock\"", 1);
    let path = write_file(&dir, "users.toml", &doc);

    create_cli_command(&dir)
        .args(["check", "table"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Deserialization error"));
}

#[test]
fn test_check_missing_file() {
    let dir = TempDir::new().unwrap();

    create_cli_command(&dir)
        .args(["check", "table"])
        .arg(dir.path().join("nope.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("File error"));
}
