//! Integration tests for algotrace.toml handling

mod support;

use predicates::prelude::*;
use std::fs;
use support::algotrace;
use tempfile::tempdir;

#[test]
fn test_config_in_working_directory_is_used() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("algotrace.toml"),
        "[sort]\nvalues = [5, 4]\n\n[list]\nvalues = [7]\n",
    )
    .unwrap();

    algotrace()
        .current_dir(dir.path())
        .args(["--summary", "sort", "insertion"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sorted: 4 5"));

    algotrace()
        .current_dir(dir.path())
        .args(["list", "reverse"])
        .assert()
        .success()
        .stdout(predicate::str::contains("list: 7 -> NULL"));
}

#[test]
fn test_cli_values_override_config() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("algotrace.toml"), "[sort]\nvalues = [5, 4]\n").unwrap();

    algotrace()
        .current_dir(dir.path())
        .args(["--summary", "sort", "merge", "9", "8"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sorted: 8 9"));
}

#[test]
fn test_explicit_config_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("custom.toml");
    fs::write(
        &path,
        "[dijkstra]\nsource = \"X\"\ntarget = \"Z\"\nvertices = []\nedges = [\"X,Y,1\", \"Y,Z,1\", \"X,Z,5\"]\n",
    )
    .unwrap();

    algotrace()
        .arg("--config")
        .arg(&path)
        .args(["dijkstra"])
        .assert()
        .success()
        .stdout(predicate::str::contains("path: X -> Y -> Z"))
        .stdout(predicate::str::contains("total_distance: 2"));
}

#[test]
fn test_graph_config_drives_traversal() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("algotrace.toml"),
        "[graph]\nvertices = [\"P\", \"Q\", \"R\"]\nstart = \"Q\"\nedges = [\"P,Q\", \"Q,R\"]\n",
    )
    .unwrap();

    algotrace()
        .current_dir(dir.path())
        .args(["traverse", "bfs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("visit_order: Q P R"));
}

#[test]
fn test_lowercase_config_endpoints_match_cli_normalization() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("algotrace.toml"),
        "[graph]\nvertices = [\"a\", \"b\"]\nstart = \"a\"\nedges = [\"a,b\"]\n\n\
         [dijkstra]\nvertices = [\"a\", \"b\"]\nsource = \"a\"\ntarget = \"b\"\nedges = [\"a,b,4\"]\n",
    )
    .unwrap();

    algotrace()
        .current_dir(dir.path())
        .args(["--summary", "traverse", "dfs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("start: A"))
        .stdout(predicate::str::contains("visit_order: A B"));

    algotrace()
        .current_dir(dir.path())
        .args(["--summary", "dijkstra"])
        .assert()
        .success()
        .stdout(predicate::str::contains("path: A -> B"))
        .stdout(predicate::str::contains("total_distance: 4"));
}

#[test]
fn test_missing_explicit_config_exit_code_3() {
    let dir = tempdir().unwrap();
    algotrace()
        .arg("--config")
        .arg(dir.path().join("missing.toml"))
        .args(["sort", "merge"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn test_malformed_config_exit_code_1() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("algotrace.toml"), "[sort]\nvalues = \"many\"\n").unwrap();

    algotrace()
        .current_dir(dir.path())
        .args(["sort", "merge"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("TOML error"));
}

#[test]
fn test_delay_from_config_is_overridden_by_flag() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("algotrace.toml"), "[playback]\ndelay_ms = 60000\n").unwrap();

    algotrace()
        .current_dir(dir.path())
        .args(["--delay-ms", "0", "sort", "insertion", "2", "1"])
        .timeout(std::time::Duration::from_secs(30))
        .assert()
        .success();
}
