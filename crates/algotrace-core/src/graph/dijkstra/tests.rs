use super::*;
use crate::error::TraceError;
use crate::graph::sample_weighted_graph;
use proptest::prelude::*;

fn finite(value: u64) -> Distance {
    Distance::Finite(value)
}

#[test]
fn test_sample_graph_shortest_path() {
    let graph = sample_weighted_graph().unwrap();
    let outcome = Dijkstra.run(&graph, "A", "E").unwrap();

    let expected: BTreeMap<String, Distance> = [
        ("A", finite(0)),
        ("B", finite(3)),
        ("C", finite(6)),
        ("D", finite(2)),
        ("E", finite(7)),
    ]
    .into_iter()
    .map(|(v, d)| (v.to_string(), d))
    .collect();
    assert_eq!(outcome.distances, expected);
    assert_eq!(outcome.path_sequence, vec!["A", "D", "E"]);
    assert_eq!(outcome.total_distance, finite(7));
    assert_eq!(
        outcome.shortest_path_edges,
        vec![EdgeRef::new("A", "D"), EdgeRef::new("D", "E")]
    );
    assert_eq!(outcome.previous.get("B").map(String::as_str), Some("D"));
    assert_eq!(outcome.previous.get("C").map(String::as_str), Some("B"));
    assert!(!outcome.previous.contains_key("A"));
    assert!(outcome.has_path());
}

#[test]
fn test_sample_graph_step_sequence() {
    let graph = sample_weighted_graph().unwrap();
    let outcome = Dijkstra.run(&graph, "A", "E").unwrap();

    use StepKind::*;
    assert_eq!(
        outcome.steps.kinds(),
        vec![
            Start, Visit, Relax, Relax, Visit, Relax, Relax, Visit, Relax, Visit, Visit,
            PathFound, Complete
        ]
    );
    assert_eq!(outcome.relaxations, 5);
    assert_eq!(outcome.steps.count(Relax) as u64, outcome.relaxations);

    // B improves from 4 to 3 once D is settled
    let improved = outcome.steps.get(5).unwrap();
    assert_eq!(
        improved.event,
        DijkstraEvent::Relax {
            from: "D".to_string(),
            to: "B".to_string(),
            weight: 1,
            previous_distance: finite(4),
            distance: finite(3),
        }
    );
    assert_eq!(improved.snapshot.active_edges, vec![EdgeRef::new("D", "B")]);
    assert_eq!(improved.snapshot.current.as_deref(), Some("D"));
}

#[test]
fn test_visits_settle_in_distance_order() {
    let graph = sample_weighted_graph().unwrap();
    let outcome = Dijkstra.run(&graph, "A", "E").unwrap();

    let settled: Vec<(String, Distance)> = outcome
        .steps
        .iter()
        .filter_map(|step| match &step.event {
            DijkstraEvent::Visit { vertex, distance } => Some((vertex.clone(), *distance)),
            _ => None,
        })
        .collect();
    let names: Vec<&str> = settled.iter().map(|(v, _)| v.as_str()).collect();
    assert_eq!(names, vec!["A", "D", "B", "C", "E"]);
    assert!(settled.windows(2).all(|w| w[0].1 <= w[1].1));
}

#[test]
fn test_snapshot_tracks_table_and_path() {
    let graph = sample_weighted_graph().unwrap();
    let outcome = Dijkstra.run(&graph, "A", "E").unwrap();

    let first = outcome.steps.first().unwrap();
    assert_eq!(first.snapshot.distances.len(), 5);
    assert_eq!(first.snapshot.distances[0].distance, finite(0));
    assert!(first.snapshot.distances[1..]
        .iter()
        .all(|entry| entry.distance == Distance::Infinite && !entry.visited));

    let found = outcome.steps.get(outcome.steps.len() - 2).unwrap();
    assert_eq!(found.kind(), StepKind::PathFound);
    assert_eq!(found.snapshot.path_edges, outcome.shortest_path_edges);
    assert!(found.snapshot.active_edges.is_empty());
    assert!(found.snapshot.distances.iter().all(|entry| entry.visited));
    assert_eq!(found.message, "Shortest path: A → D → E (total distance 7)");
}

#[test]
fn test_unreachable_target() {
    let graph = Graph::build(&["A", "B", "C"], &["A,B,2"]).unwrap();
    let outcome = Dijkstra.run(&graph, "A", "C").unwrap();

    assert_eq!(outcome.distance_to("C"), Some(Distance::Infinite));
    assert_eq!(outcome.distance_to("B"), Some(finite(2)));
    assert!(outcome.path_sequence.is_empty());
    assert!(outcome.shortest_path_edges.is_empty());
    assert_eq!(outcome.total_distance, Distance::Infinite);
    assert!(!outcome.has_path());

    let kinds = outcome.steps.kinds();
    assert_eq!(kinds[kinds.len() - 2], StepKind::NoPath);
    assert_eq!(kinds.last(), Some(&StepKind::Complete));
}

#[test]
fn test_source_equals_target() {
    let graph = sample_weighted_graph().unwrap();
    let outcome = Dijkstra.run(&graph, "C", "C").unwrap();

    assert_eq!(outcome.path_sequence, vec!["C"]);
    assert_eq!(outcome.total_distance, Distance::ZERO);
    assert!(outcome.shortest_path_edges.is_empty());
    assert!(outcome.has_path());
}

#[test]
fn test_unknown_endpoints_are_rejected() {
    let graph = sample_weighted_graph().unwrap();

    let err = Dijkstra.run(&graph, "Z", "A").unwrap_err();
    assert!(matches!(err, TraceError::NotFound { .. }));

    let err = Dijkstra.run(&graph, "A", "Z").unwrap_err();
    assert!(matches!(err, TraceError::NotFound { .. }));
}

#[test]
fn test_ties_go_to_first_inserted_vertex() {
    // B and C are both 1 away; B was inserted first
    let graph = Graph::build(&["A", "B", "C", "D"], &["A,B,1", "A,C,1", "B,D,1", "C,D,1"]).unwrap();
    let outcome = Dijkstra.run(&graph, "A", "D").unwrap();

    assert_eq!(outcome.path_sequence, vec!["A", "B", "D"]);
    assert_eq!(outcome.total_distance, finite(2));
}

#[test]
fn test_runs_are_deterministic() {
    let graph = sample_weighted_graph().unwrap();
    let first = Dijkstra.run(&graph, "A", "E").unwrap();
    let second = Dijkstra.run(&graph, "A", "E").unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_json_shape() {
    let graph = Graph::build(&["A", "B", "C"], &["A,B,2"]).unwrap();
    let outcome = Dijkstra.run(&graph, "A", "C").unwrap();
    let json = serde_json::to_value(&outcome).unwrap();

    assert_eq!(json["distances"]["B"], 2);
    assert_eq!(json["distances"]["C"], "Infinity");
    assert_eq!(json["total_distance"], "Infinity");
    assert_eq!(json["steps"][0]["type"], "start");
    assert_eq!(json["steps"][0]["distances"][0]["vertex"], "A");
}

/// Bellman-Ford style reference distances
fn reference_distances(graph: &Graph, source: usize) -> Vec<Distance> {
    let mut dist = vec![Distance::Infinite; graph.vertex_count()];
    dist[source] = Distance::ZERO;
    for _ in 0..graph.vertex_count() {
        for v in 0..graph.vertex_count() {
            for link in graph.links(v) {
                let candidate = dist[v].extend(link.weight);
                if candidate < dist[link.target] {
                    dist[link.target] = candidate;
                }
            }
        }
    }
    dist
}

fn weighted_graph() -> impl Strategy<Value = Graph> {
    (2usize..7).prop_flat_map(|n| {
        prop::collection::vec((0..n, 0..n, 1u32..20), 0..12).prop_map(move |raw| {
            let names: Vec<String> = (0..n).map(|i| ((b'A' + i as u8) as char).to_string()).collect();
            let mut graph = Graph::build(&names, &[] as &[&str]).unwrap();
            for (a, b, w) in raw {
                // self-loops and repeated pairs are rejected; skip them
                let _ = graph.add_edge(&names[a], &names[b], w);
            }
            graph
        })
    })
}

proptest! {
    #[test]
    fn prop_distances_match_reference(graph in weighted_graph()) {
        let outcome = Dijkstra.run(&graph, "A", "B").unwrap();
        let expected = reference_distances(&graph, 0);
        for (i, name) in graph.vertices().iter().enumerate() {
            prop_assert_eq!(outcome.distance_to(name), Some(expected[i]));
        }
    }

    #[test]
    fn prop_path_weight_equals_total(graph in weighted_graph()) {
        let outcome = Dijkstra.run(&graph, "A", "B").unwrap();
        if outcome.has_path() {
            let sum: u64 = outcome
                .path_sequence
                .windows(2)
                .map(|w| u64::from(graph.weight(&w[0], &w[1]).unwrap()))
                .sum();
            prop_assert_eq!(outcome.total_distance, Distance::Finite(sum));
            prop_assert_eq!(outcome.path_sequence.first().map(String::as_str), Some("A"));
            prop_assert_eq!(outcome.path_sequence.last().map(String::as_str), Some("B"));
        } else {
            prop_assert_eq!(outcome.total_distance, Distance::Infinite);
        }
    }
}
