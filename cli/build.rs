// Build script to capture Git commit hash and build timestamp
// Sets environment variables for use in the binary at compile time
// Falls back to version.toml if git is not available (e.g., packaged source builds)

use std::fs;
use std::process::Command;

fn main() {
    let fallback = read_version_toml("../version.toml");

    let commit_hash = git(&["rev-parse", "--short", "HEAD"]).unwrap_or(fallback.0);
    let branch = git(&["rev-parse", "--abbrev-ref", "HEAD"]).unwrap_or(fallback.1);

    let build_date = chrono::Utc::now()
        .format("%Y-%m-%d %H:%M:%S UTC")
        .to_string();

    println!("cargo:rustc-env=GIT_COMMIT_HASH={}", commit_hash);
    println!("cargo:rustc-env=BUILD_DATE={}", build_date);
    println!("cargo:rustc-env=GIT_BRANCH={}", branch);

    println!("cargo:rerun-if-changed=../.git/HEAD");
    println!("cargo:rerun-if-changed=../.git/refs/heads/");
    println!("cargo:rerun-if-changed=../version.toml");
}

fn git(args: &[&str]) -> Option<String> {
    Command::new("git")
        .args(args)
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Read fallback (commit_hash, branch) from version.toml, "unknown" when absent
fn read_version_toml(path: &str) -> (String, String) {
    let mut commit = "unknown".to_string();
    let mut branch = "unknown".to_string();

    let Ok(content) = fs::read_to_string(path) else {
        return (commit, branch);
    };

    for line in content.lines() {
        let line = line.trim();
        if line.starts_with("git_commit_hash") {
            if let Some(val) = extract_toml_value(line) {
                commit = val;
            }
        } else if line.starts_with("git_branch") {
            if let Some(val) = extract_toml_value(line) {
                branch = val;
            }
        }
    }

    (commit, branch)
}

/// Extract value from a TOML line like: key = "value"
fn extract_toml_value(line: &str) -> Option<String> {
    let (_, val) = line.split_once('=')?;
    let val = val.trim().trim_matches('"');
    if !val.is_empty() && val != "unknown" {
        Some(val.to_string())
    } else {
        None
    }
}
