#![allow(dead_code)]
use std::path::PathBuf;

pub use tempfile::TempDir;

/// Helper to create a CLI command isolated from the user's config file
pub fn create_cli_command(config_dir: &TempDir) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(env!("CARGO_BIN_EXE_tablekit"));
    cmd.arg("--config")
        .arg(config_dir.path().join("config.toml"))
        .arg("--no-color")
        .env_remove("RUST_LOG");
    cmd
}

/// Write `contents` to `name` inside `dir` and return the path
pub fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("Failed to write test file");
    path
}

/// Run `init table --name <name>` and return stdout
pub fn init_table_document(name: &str) -> String {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let output = create_cli_command(&dir)
        .args(["init", "table", "--name", name])
        .output()
        .expect("Failed to run tablekit");
    assert!(output.status.success(), "init table failed: {:?}", output);
    String::from_utf8(output.stdout).expect("stdout is not UTF-8")
}
