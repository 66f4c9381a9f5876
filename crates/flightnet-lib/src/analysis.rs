use std::collections::{BTreeSet, VecDeque};

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{Graph, VertexId};
use crate::network::FlightNetwork;
use crate::traversal::{bfs_within, dfs_visit, TraversalState};

/// Destinations reachable from an airport, excluding the airport itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reachability {
    pub source: String,
    pub airports: usize,
    pub cities: usize,
    pub countries: usize,
    /// Reached airport codes in traversal order, source first.
    pub reached: Vec<String>,
}

/// Longest minimum-hop trip in the network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct MaxTrip {
    pub hops: usize,
    /// Every (source, target) pair whose shortest trip takes `hops` flights.
    pub pairs: Vec<(String, String)>,
}

/// Airports, cities, and countries reachable from `code` with any number of
/// stops.
pub fn reachable_destinations(network: &FlightNetwork, graph: &Graph, code: &str) -> Result<Reachability> {
    let start = require_vertex(graph, code)?;
    let mut state = TraversalState::new(graph);
    let reached = dfs_visit(graph, start, &mut state);
    summarize(network, graph, code, &reached)
}

/// Reachability limited to trips with at most `stops` intermediate airports,
/// i.e. `stops + 1` flights.
pub fn reachable_within_stops(
    network: &FlightNetwork,
    graph: &Graph,
    code: &str,
    stops: usize,
) -> Result<Reachability> {
    let start = require_vertex(graph, code)?;
    let mut state = TraversalState::new(graph);
    let reached = bfs_within(graph, start, stops.saturating_add(1), &mut state);
    summarize(network, graph, code, &reached)
}

fn require_vertex(graph: &Graph, code: &str) -> Result<VertexId> {
    graph.find_vertex(code).ok_or_else(|| Error::UnknownAirport {
        query: code.to_string(),
        suggestions: Vec::new(),
    })
}

/// Count distinct airports, cities, and countries among `reached`.
///
/// The source's own city and country only drop out of the counts when no other
/// reached airport shares them.
fn summarize(
    network: &FlightNetwork,
    graph: &Graph,
    source_code: &str,
    reached: &[VertexId],
) -> Result<Reachability> {
    let source = network
        .airport(source_code)
        .ok_or_else(|| Error::UnknownAirport {
            query: source_code.to_string(),
            suggestions: Vec::new(),
        })?;

    let codes: Vec<String> = reached
        .iter()
        .filter_map(|&id| graph.code(id))
        .map(str::to_string)
        .collect();

    let mut airports: BTreeSet<&str> = BTreeSet::new();
    let mut cities: BTreeSet<(&str, &str)> = BTreeSet::new();
    let mut countries: BTreeSet<&str> = BTreeSet::new();
    let mut city_shared = false;
    let mut country_shared = false;

    for code in &codes {
        let Some(airport) = network.airport(code) else {
            continue;
        };
        airports.insert(airport.code.as_str());
        cities.insert((airport.city.as_str(), airport.country.as_str()));
        countries.insert(airport.country.as_str());

        if airport.code != source.code {
            city_shared |= airport.city == source.city && airport.country == source.country;
            country_shared |= airport.country == source.country;
        }
    }

    Ok(Reachability {
        source: source.code.clone(),
        airports: airports.len().saturating_sub(1),
        cities: cities.len().saturating_sub(usize::from(!city_shared)),
        countries: countries.len().saturating_sub(usize::from(!country_shared)),
        reached: codes,
    })
}

/// Network diameter: the longest shortest trip over all ordered pairs.
///
/// Runs a breadth-first search from every vertex. Ties across sources are all
/// retained. A graph without flights reports zero hops and no pairs.
pub fn max_trip(graph: &Graph) -> MaxTrip {
    let mut best = MaxTrip::default();

    for source in 0..graph.len() {
        let (hops, targets) = farthest_from(graph, source);
        if hops == 0 {
            continue;
        }
        if hops > best.hops {
            best.hops = hops;
            best.pairs.clear();
        }
        if hops == best.hops {
            let Some(source_code) = graph.code(source) else {
                continue;
            };
            best.pairs.extend(targets.into_iter().filter_map(|target| {
                graph
                    .code(target)
                    .map(|code| (source_code.to_string(), code.to_string()))
            }));
        }
    }

    debug!(hops = best.hops, pairs = best.pairs.len(), "computed network diameter");
    best
}

/// Eccentricity of `source` and the vertices that realise it, in BFS order.
fn farthest_from(graph: &Graph, source: VertexId) -> (usize, Vec<VertexId>) {
    let mut distance: Vec<Option<usize>> = vec![None; graph.len()];
    let mut queue = VecDeque::new();
    let mut max_distance = 0usize;
    let mut farthest = Vec::new();

    distance[source] = Some(0);
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        let current_distance = distance[current].unwrap_or_default();
        if current_distance > max_distance {
            max_distance = current_distance;
            farthest.clear();
        }
        if current_distance == max_distance && current_distance > 0 {
            farthest.push(current);
        }

        for edge in graph.neighbours(current) {
            if distance[edge.target].is_none() {
                distance[edge.target] = Some(current_distance + 1);
                queue.push_back(edge.target);
            }
        }
    }

    (max_distance, farthest)
}
