//! Integration tests for each traced command

mod support;

use predicates::prelude::*;
use support::{algotrace, stdout_json};

// ============================================================================
// Sorting
// ============================================================================

#[test]
fn test_sort_uses_configured_values_by_default() {
    let dir = tempfile::tempdir().unwrap();
    algotrace()
        .current_dir(dir.path())
        .args(["--summary", "sort", "quick"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sorted: 11 12 22 25 34 64 90"));
}

#[test]
fn test_sort_single_value_json() {
    let output = algotrace()
        .args(["--format", "json", "sort", "insertion", "7"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["sorted_array"], serde_json::json!([7]));
    assert_eq!(json["swaps"], 0);
}

// ============================================================================
// Traversal
// ============================================================================

#[test]
fn test_dfs_on_sample_graph() {
    algotrace()
        .args(["traverse", "dfs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("visit_order: A B C E D"))
        .stdout(predicate::str::contains("activate_edge: "));
}

#[test]
fn test_bfs_with_custom_edges_reports_unreached() {
    algotrace()
        .args(["traverse", "bfs", "--edge", "a,b", "--edge", "c,d"])
        .assert()
        .success()
        .stdout(predicate::str::contains("start: A"))
        .stdout(predicate::str::contains("visit_order: A B"))
        .stdout(predicate::str::contains("unreached: C D"));
}

#[test]
fn test_traversal_json_visit_order() {
    let output = algotrace()
        .args(["--format", "json", "traverse", "bfs", "--start", "e"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["start"], "E");
    assert_eq!(json["visit_order"].as_array().unwrap().len(), 5);
    assert_eq!(json["mode"], "traverse.bfs");
}

// ============================================================================
// Dijkstra
// ============================================================================

#[test]
fn test_dijkstra_on_sample_graph() {
    algotrace()
        .args(["dijkstra"])
        .assert()
        .success()
        .stdout(predicate::str::contains("path: A -> D -> E"))
        .stdout(predicate::str::contains("total_distance: 7"))
        .stdout(predicate::str::contains("distances: A=0 B=3 C=6 D=2 E=7"))
        .stdout(predicate::str::contains("relax: "));
}

#[test]
fn test_dijkstra_json_artifacts() {
    let output = algotrace()
        .args(["--format", "json", "dijkstra", "--source", "A", "--target", "C"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["path_sequence"], serde_json::json!(["A", "D", "B", "C"]));
    assert_eq!(json["total_distance"], 6);
    assert_eq!(json["distances"]["E"], 7);
    assert_eq!(json["shortest_path_edges"][0]["from"], "A");
}

#[test]
fn test_dijkstra_custom_edges_default_endpoints() {
    algotrace()
        .args(["--summary", "dijkstra", "--edge", "a,b,2", "--edge", "b,c,3", "--edge", "a,c,9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("source: A"))
        .stdout(predicate::str::contains("target: C"))
        .stdout(predicate::str::contains("path: A -> B -> C"))
        .stdout(predicate::str::contains("total_distance: 5"));
}

#[test]
fn test_dijkstra_unreachable_target() {
    algotrace()
        .args([
            "dijkstra", "--edge", "A,B,2", "--edge", "C,D,1", "--source", "A", "--target", "D",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("no_path: "))
        .stdout(predicate::str::contains("path: none"))
        .stdout(predicate::str::contains("total_distance: Infinity"));
}

// ============================================================================
// Linked list
// ============================================================================

#[test]
fn test_list_search() {
    algotrace()
        .args(["list", "search", "20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("found: 1"))
        .stdout(predicate::str::contains("list: 10 -> 20 -> 30 -> NULL"));
}

#[test]
fn test_list_insert_at_position() {
    algotrace()
        .args(["list", "--values", "1,2,3", "insert", "9", "--at", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("list: 1 -> 9 -> 2 -> 3 -> NULL"))
        .stdout(predicate::str::contains("length: 4"));
}

#[test]
fn test_list_insert_at_head() {
    algotrace()
        .args(["--summary", "list", "insert", "5", "--head"])
        .assert()
        .success()
        .stdout(predicate::str::contains("list: 5 -> 10 -> 20 -> 30 -> NULL"));
}

#[test]
fn test_list_insert_out_of_range() {
    algotrace()
        .args(["list", "insert", "5", "--at", "9"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid position"));
}

#[test]
fn test_list_delete_and_reverse() {
    algotrace()
        .args(["list", "delete", "20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("list: 10 -> 30 -> NULL"));

    algotrace()
        .args(["list", "reverse"])
        .assert()
        .success()
        .stdout(predicate::str::contains("list: 30 -> 20 -> 10 -> NULL"));
}

#[test]
fn test_list_json_snapshots() {
    let output = algotrace()
        .args(["--format", "json", "list", "delete", "10"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["list"], serde_json::json!([20, 30]));
    let steps = json["steps"].as_array().unwrap();
    assert!(steps.iter().any(|s| s["type"] == "delete"));
    assert_eq!(steps[0]["nodes"], serde_json::json!([10, 20, 30]));
}

// ============================================================================
// Binary search tree
// ============================================================================

#[test]
fn test_tree_delete_root_with_two_children() {
    algotrace()
        .args(["tree", "delete", "50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("inorder: 20 30 40 60 70 80"))
        .stdout(predicate::str::contains("inorder successor 60"));
}

#[test]
fn test_tree_traversals() {
    algotrace()
        .args(["--summary", "tree", "postorder"])
        .assert()
        .success()
        .stdout(predicate::str::contains("result: 20 40 30 60 80 70 50"));

    algotrace()
        .args(["--summary", "tree", "--values", "5,3,8", "preorder"])
        .assert()
        .success()
        .stdout(predicate::str::contains("result: 5 3 8"));
}

#[test]
fn test_tree_search_path() {
    algotrace()
        .args(["tree", "search", "65"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not_found: "))
        .stdout(predicate::str::contains("path: 50 70 60"));
}

#[test]
fn test_tree_duplicate_insert_exit_code_3() {
    algotrace()
        .args(["tree", "insert", "40"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("key already exists: 40"));

    algotrace()
        .args(["tree", "--values", "1,1", "inorder"])
        .assert()
        .code(3);
}

#[test]
fn test_tree_json() {
    let output = algotrace()
        .args(["--format", "json", "tree", "insert", "65"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["size"], 8);
    assert_eq!(json["height"], 4);
    assert_eq!(json["sequence"], serde_json::json!([50, 70, 60]));
}

// ============================================================================
// Analysis
// ============================================================================

#[test]
fn test_analysis_human() {
    algotrace()
        .args(["analysis", "dijkstra"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dijkstra's Algorithm Analysis"))
        .stdout(predicate::str::contains("O(V²)"))
        .stdout(predicate::str::contains("Cannot handle negative weights"));
}

#[test]
fn test_analysis_json_and_records() {
    let output = algotrace()
        .args(["--format", "json", "analysis", "bst"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["topic"], "bst");
    assert_eq!(json["name"], "Binary Search Tree");

    algotrace()
        .args(["--format", "records", "analysis", "linked-list"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H algotrace=1 records=1 mode=analysis topic=linked-list",
        ))
        .stdout(predicate::str::contains("T \"Insert at head\" \"O(1)\""));
}

#[test]
fn test_analysis_unknown_topic() {
    algotrace().args(["analysis", "heap"]).assert().code(2);
}
