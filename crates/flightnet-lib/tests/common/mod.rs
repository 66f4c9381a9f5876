//! Common test utilities and fixture helpers.

use std::fs;
use std::path::{Path, PathBuf};

use flightnet_lib::{build_graph, load_network, DatasetPaths, FlightNetwork, Graph};

/// Directory holding the minimal airports/airlines/flights fixture.
pub fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/minimal")
}

/// Load the fixture network and its flight graph.
pub fn fixture_network() -> (FlightNetwork, Graph) {
    let network = load_network(&DatasetPaths::for_dir(&fixture_dir())).expect("fixture loads");
    let graph = build_graph(&network);
    (network, graph)
}

/// Copy the fixture CSV files into `target`.
#[allow(dead_code)]
pub fn copy_fixture_to(target: &Path) {
    for file in ["airports.csv", "airlines.csv", "flights.csv"] {
        fs::copy(fixture_dir().join(file), target.join(file)).expect("copy fixture file");
    }
}

/// Build a graph directly from airport codes and one-way links.
#[allow(dead_code)]
pub fn graph_from(codes: &[&str], links: &[(&str, &str, &str)]) -> Graph {
    let mut graph = Graph::new();
    for code in codes {
        graph.add_vertex(code);
    }
    for (from, to, airline) in links {
        graph.add_edge(from, to, airline, 1.0).expect("endpoints exist");
    }
    graph
}
