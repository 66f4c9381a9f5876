use flightnet_lib::traversal::bfs_distances;
use flightnet_lib::{max_trip, Graph};

mod common;

#[test]
fn fixture_longest_trip() {
    let (_, graph) = common::fixture_network();
    let trip = max_trip(&graph);

    assert_eq!(trip.hops, 4);
    assert_eq!(
        trip.pairs,
        vec![
            ("ORY".to_string(), "JFK".to_string()),
            ("JFK".to_string(), "ORY".to_string()),
        ]
    );
}

#[test]
fn no_pair_exceeds_the_reported_diameter() {
    let (_, graph) = common::fixture_network();
    let trip = max_trip(&graph);

    let mut realised = false;
    for source in 0..graph.len() {
        let distances = bfs_distances(&graph, source, |_| true);
        for (target, distance) in distances.iter().enumerate() {
            let Some(distance) = *distance else {
                continue;
            };
            assert!(distance <= trip.hops);
            if distance == trip.hops {
                let pair = (
                    graph.code(source).unwrap_or_default().to_string(),
                    graph.code(target).unwrap_or_default().to_string(),
                );
                assert!(trip.pairs.contains(&pair), "{pair:?} missing");
                realised = true;
            }
        }
    }
    assert!(realised);
}

#[test]
fn graph_without_flights_reports_nothing() {
    let mut graph = Graph::new();
    graph.add_vertex("A");
    graph.add_vertex("B");

    let trip = max_trip(&graph);
    assert_eq!(trip.hops, 0);
    assert!(trip.pairs.is_empty());
}

#[test]
fn ties_across_sources_are_kept() {
    let graph = common::graph_from(&["A", "B", "C"], &[("A", "B", "X"), ("B", "C", "X"), ("C", "A", "X")]);
    let trip = max_trip(&graph);

    assert_eq!(trip.hops, 2);
    assert_eq!(trip.pairs.len(), 3);
}
