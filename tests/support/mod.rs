use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::process::Output;

/// Get a Command for algotrace
pub fn algotrace() -> Command {
    cargo_bin_cmd!("algotrace")
}

/// Parse stdout of a `--format json` run
#[allow(dead_code)]
pub fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is not valid JSON")
}

/// Lines of stdout starting with the given record prefix
#[allow(dead_code)]
pub fn record_lines(output: &Output, prefix: &str) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .filter(|line| line.starts_with(prefix))
        .map(str::to_string)
        .collect()
}
