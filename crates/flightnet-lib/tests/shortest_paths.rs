use std::collections::BTreeSet;

use flightnet_lib::routing::flight_options;
use flightnet_lib::traversal::bfs_distances;
use flightnet_lib::{shortest_paths, RouteFilter};

mod common;

fn codes(graph: &flightnet_lib::Graph, path: &[usize]) -> Vec<String> {
    path.iter()
        .map(|&id| graph.code(id).expect("valid id").to_string())
        .collect()
}

#[test]
fn direct_flight_beats_two_hop_trip() {
    let graph = common::graph_from(
        &["A", "B", "C"],
        &[("A", "B", "X"), ("B", "C", "X"), ("A", "C", "Y")],
    );
    let a = graph.find_vertex("A").expect("A");
    let c = graph.find_vertex("C").expect("C");

    let options = flight_options(&graph, a, c, &RouteFilter::any());
    assert_eq!(options.len(), 1);
    assert_eq!(options[0].len(), 1);
    assert_eq!(options[0][0].source, "A");
    assert_eq!(options[0][0].target, "C");
    assert_eq!(options[0][0].airlines, vec!["Y"]);
}

#[test]
fn disconnected_components_have_no_paths() {
    let graph = common::graph_from(
        &["A", "B", "C", "D"],
        &[("A", "B", "X"), ("B", "A", "X"), ("C", "D", "X"), ("D", "C", "X")],
    );
    let a = graph.find_vertex("A").expect("A");
    let c = graph.find_vertex("C").expect("C");

    assert!(shortest_paths(&graph, a, c, &RouteFilter::any()).is_empty());
}

#[test]
fn same_source_and_destination_is_empty() {
    let (_, graph) = common::fixture_network();
    let opo = graph.find_vertex("OPO").expect("OPO");
    assert!(shortest_paths(&graph, opo, opo, &RouteFilter::any()).is_empty());
}

#[test]
fn every_minimum_hop_path_is_returned() {
    let (_, graph) = common::fixture_network();
    let opo = graph.find_vertex("OPO").expect("OPO");
    let lhr = graph.find_vertex("LHR").expect("LHR");

    let paths: Vec<Vec<String>> = shortest_paths(&graph, opo, lhr, &RouteFilter::any())
        .iter()
        .map(|path| codes(&graph, path))
        .collect();
    assert_eq!(
        paths,
        vec![
            vec!["OPO".to_string(), "LIS".to_string(), "LHR".to_string()],
            vec!["OPO".to_string(), "CDG".to_string(), "LHR".to_string()],
        ]
    );
}

#[test]
fn legs_list_every_airline_flying_them() {
    let (_, graph) = common::fixture_network();
    let opo = graph.find_vertex("OPO").expect("OPO");
    let jfk = graph.find_vertex("JFK").expect("JFK");

    let options = flight_options(&graph, opo, jfk, &RouteFilter::any());
    assert_eq!(options.len(), 1);
    let airlines: Vec<Vec<String>> = options[0].iter().map(|leg| leg.airlines.clone()).collect();
    assert_eq!(airlines, vec![vec!["AFR", "TAP"], vec!["AFR"]]);
}

#[test]
fn paths_are_complete_minimal_and_distinct() {
    let (_, graph) = common::fixture_network();

    for source in 0..graph.len() {
        let distances = bfs_distances(&graph, source, |_| true);
        for destination in 0..graph.len() {
            let paths = shortest_paths(&graph, source, destination, &RouteFilter::any());
            match distances[destination] {
                Some(hops) if destination != source => {
                    assert!(!paths.is_empty(), "{source}->{destination} reachable");
                    let mut seen = BTreeSet::new();
                    for path in &paths {
                        assert_eq!(path.len(), hops + 1);
                        assert_eq!(path.first(), Some(&source));
                        assert_eq!(path.last(), Some(&destination));
                        for pair in path.windows(2) {
                            assert!(graph.neighbours(pair[0]).iter().any(|e| e.target == pair[1]));
                        }
                        assert!(seen.insert(path.clone()), "duplicate path {path:?}");
                    }
                }
                _ => assert!(paths.is_empty()),
            }
        }
    }
}

#[test]
fn airline_filter_restricts_every_hop() {
    let (_, graph) = common::fixture_network();
    let filter = RouteFilter::airlines(["AFR", "IBE"]);

    for source in 0..graph.len() {
        for destination in 0..graph.len() {
            for option in flight_options(&graph, source, destination, &filter) {
                for leg in option {
                    assert!(!leg.airlines.is_empty());
                    assert!(
                        leg.airlines.iter().all(|a| a == "AFR" || a == "IBE"),
                        "{leg:?}"
                    );
                }
            }
        }
    }
}

#[test]
fn airline_filter_can_change_or_remove_routes() {
    let (_, graph) = common::fixture_network();
    let opo = graph.find_vertex("OPO").expect("OPO");
    let lhr = graph.find_vertex("LHR").expect("LHR");

    let afr = shortest_paths(&graph, opo, lhr, &RouteFilter::airlines(["AFR"]));
    assert_eq!(afr.len(), 1);
    assert_eq!(codes(&graph, &afr[0]), vec!["OPO", "CDG", "LHR"]);

    assert!(shortest_paths(&graph, opo, lhr, &RouteFilter::airlines(["BAW"])).is_empty());
}

#[test]
fn long_chain_yields_single_path() {
    const LENGTH: usize = 20_000;
    let mut graph = flightnet_lib::Graph::new();
    let codes: Vec<String> = (0..LENGTH).map(|i| format!("V{i}")).collect();
    for code in &codes {
        graph.add_vertex(code);
    }
    for pair in codes.windows(2) {
        graph
            .add_edge(&pair[0], &pair[1], "X", 1.0)
            .expect("endpoints exist");
    }

    let first = graph.find_vertex(&codes[0]).expect("first");
    let last = graph.find_vertex(&codes[LENGTH - 1]).expect("last");
    let paths = shortest_paths(&graph, first, last, &RouteFilter::any());

    assert_eq!(paths.len(), 1);
    assert_eq!(paths[0].len(), LENGTH);
    assert_eq!(paths[0].first(), Some(&first));
    assert_eq!(paths[0].last(), Some(&last));
}
