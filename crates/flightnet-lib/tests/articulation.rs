use std::collections::BTreeSet;

use flightnet_lib::{articulation_points, essential_airports, Graph, VertexId};

mod common;

/// Connected groups when flights are read as undirected links and `removed`
/// is taken out of the network.
fn component_count(graph: &Graph, removed: Option<VertexId>) -> usize {
    let mut links: Vec<BTreeSet<VertexId>> = vec![BTreeSet::new(); graph.len()];
    for (source, vertex) in graph.vertices().iter().enumerate() {
        for edge in vertex.edges() {
            links[source].insert(edge.target);
            links[edge.target].insert(source);
        }
    }

    let mut seen = vec![false; graph.len()];
    if let Some(id) = removed {
        seen[id] = true;
    }
    let mut components = 0;
    for start in 0..graph.len() {
        if seen[start] {
            continue;
        }
        components += 1;
        seen[start] = true;
        let mut stack = vec![start];
        while let Some(current) = stack.pop() {
            for &next in &links[current] {
                if !seen[next] {
                    seen[next] = true;
                    stack.push(next);
                }
            }
        }
    }
    components
}

#[test]
fn star_hub_is_the_only_essential_airport() {
    let leaves = ["L1", "L2", "L3", "L4", "L5"];
    let mut codes = vec!["H"];
    codes.extend(leaves);
    let links: Vec<(&str, &str, &str)> = leaves
        .iter()
        .flat_map(|leaf| [("H", *leaf, "X"), (*leaf, "H", "X")])
        .collect();
    let graph = common::graph_from(&codes, &links);

    assert_eq!(essential_airports(&graph), vec!["H"]);
}

#[test]
fn fixture_essential_airports() {
    let (_, graph) = common::fixture_network();
    assert_eq!(essential_airports(&graph), vec!["LIS", "MAD"]);
}

#[test]
fn removing_essential_airports_splits_the_network() {
    let (_, graph) = common::fixture_network();
    let baseline = component_count(&graph, None);
    let essential: BTreeSet<VertexId> = articulation_points(&graph).into_iter().collect();

    for id in 0..graph.len() {
        let after = component_count(&graph, Some(id));
        if essential.contains(&id) {
            assert!(after > baseline, "{:?} should split", graph.code(id));
        } else {
            assert!(after <= baseline, "{:?} should not split", graph.code(id));
        }
    }
}

#[test]
fn empty_graph_has_no_essential_airports() {
    assert!(essential_airports(&Graph::new()).is_empty());
}
