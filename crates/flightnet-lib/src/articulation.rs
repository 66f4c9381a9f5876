//! Articulation points ("essential airports") of the flight network.
//!
//! Flights are treated as undirected links for this analysis: an airport is
//! essential when removing it splits a connected group of airports into more
//! groups. Uses Tarjan's discovery-time / low-link method with an explicit
//! stack, restarted from every undiscovered vertex so disconnected networks
//! are fully covered.

use std::collections::BTreeSet;

use tracing::debug;

use crate::graph::{Graph, VertexId};

/// Codes of every articulation point, in vertex order.
pub fn essential_airports(graph: &Graph) -> Vec<String> {
    articulation_points(graph)
        .into_iter()
        .filter_map(|id| graph.code(id).map(str::to_string))
        .collect()
}

/// Vertex ids of every articulation point, in ascending order.
pub fn articulation_points(graph: &Graph) -> Vec<VertexId> {
    let adjacency = undirected_adjacency(graph);
    let count = adjacency.len();

    let mut discovery: Vec<Option<usize>> = vec![None; count];
    let mut low = vec![0usize; count];
    let mut parent: Vec<Option<VertexId>> = vec![None; count];
    let mut is_articulation = vec![false; count];
    let mut timer = 0usize;

    for root in 0..count {
        if discovery[root].is_some() {
            continue;
        }

        discovery[root] = Some(timer);
        low[root] = timer;
        timer += 1;
        let mut root_children = 0usize;
        let mut stack: Vec<(VertexId, usize)> = vec![(root, 0)];

        while let Some(frame) = stack.last_mut() {
            let (vertex, next) = *frame;
            if let Some(&neighbour) = adjacency[vertex].get(next) {
                frame.1 += 1;
                match discovery[neighbour] {
                    None => {
                        parent[neighbour] = Some(vertex);
                        discovery[neighbour] = Some(timer);
                        low[neighbour] = timer;
                        timer += 1;
                        if vertex == root {
                            root_children += 1;
                        }
                        stack.push((neighbour, 0));
                    }
                    Some(found) if parent[vertex] != Some(neighbour) => {
                        low[vertex] = low[vertex].min(found);
                    }
                    Some(_) => {}
                }
                continue;
            }

            stack.pop();
            if let Some(up) = parent[vertex] {
                low[up] = low[up].min(low[vertex]);
                let up_discovery = discovery[up].unwrap_or_default();
                if up != root && low[vertex] >= up_discovery {
                    is_articulation[up] = true;
                }
            }
        }

        if root_children > 1 {
            is_articulation[root] = true;
        }
    }

    let points: Vec<VertexId> = is_articulation
        .iter()
        .enumerate()
        .filter(|(_, flag)| **flag)
        .map(|(id, _)| id)
        .collect();
    debug!(count = points.len(), "found articulation points");
    points
}

/// Neighbour lists with both flight directions merged, parallel flights and
/// self-loops dropped.
fn undirected_adjacency(graph: &Graph) -> Vec<Vec<VertexId>> {
    let mut sets: Vec<BTreeSet<VertexId>> = vec![BTreeSet::new(); graph.len()];
    for (source, vertex) in graph.vertices().iter().enumerate() {
        for edge in vertex.edges() {
            if edge.target == source {
                continue;
            }
            sets[source].insert(edge.target);
            sets[edge.target].insert(source);
        }
    }
    sets.into_iter().map(|set| set.into_iter().collect()).collect()
}
