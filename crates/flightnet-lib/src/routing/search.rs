use std::collections::{BTreeMap, BTreeSet, VecDeque};

use serde::Serialize;

use crate::graph::{Edge, Graph, VertexId};

/// Optional restriction of the airlines a search may fly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteFilter {
    airlines: Option<BTreeSet<String>>,
}

impl RouteFilter {
    /// Filter that accepts every airline.
    pub fn any() -> Self {
        Self::default()
    }

    /// Filter that only accepts the listed airline codes.
    pub fn airlines<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            airlines: Some(codes.into_iter().map(Into::into).collect()),
        }
    }

    /// Allowed airline codes, or `None` when unrestricted.
    pub fn allowed(&self) -> Option<&BTreeSet<String>> {
        self.airlines.as_ref()
    }

    pub fn allows_airline(&self, airline: &str) -> bool {
        self.airlines
            .as_ref()
            .is_none_or(|allowed| allowed.contains(airline))
    }

    pub(crate) fn allows(&self, edge: &Edge) -> bool {
        self.allows_airline(&edge.airline)
    }
}

/// One hop of a route annotated with every airline able to fly it.
///
/// Airlines are sorted and unique, so equality compares the hop's airline set.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Route {
    pub source: String,
    pub target: String,
    pub airlines: Vec<String>,
}

/// All minimum-hop vertex sequences from `source` to `destination`.
///
/// Breadth-first search records every predecessor reached at the minimum
/// distance, then a backward walk from `destination` expands each
/// combination. Returns an empty list when the endpoints coincide, either id
/// is out of range, or the destination is unreachable under `filter`.
pub fn shortest_paths(
    graph: &Graph,
    source: VertexId,
    destination: VertexId,
    filter: &RouteFilter,
) -> Vec<Vec<VertexId>> {
    if source == destination || source >= graph.len() || destination >= graph.len() {
        return Vec::new();
    }

    let mut distance: Vec<Option<usize>> = vec![None; graph.len()];
    let mut predecessors: Vec<Vec<VertexId>> = vec![Vec::new(); graph.len()];
    let mut queue = VecDeque::new();

    distance[source] = Some(0);
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        let current_distance = distance[current].unwrap_or_default();
        // Everything one layer short of the goal has been expanded.
        if distance[destination].is_some_and(|goal| current_distance >= goal) {
            break;
        }

        for edge in graph.neighbours(current) {
            if !filter.allows(edge) {
                continue;
            }
            let next = edge.target;
            match distance[next] {
                None => {
                    distance[next] = Some(current_distance + 1);
                    predecessors[next].push(current);
                    queue.push_back(next);
                }
                Some(known) if known == current_distance + 1 => {
                    if !predecessors[next].contains(&current) {
                        predecessors[next].push(current);
                    }
                }
                Some(_) => {}
            }
        }
    }

    if distance[destination].is_none() {
        return Vec::new();
    }

    collect_paths(&predecessors, source, destination)
}

/// Expand every predecessor chain from `destination` back to `source`.
fn collect_paths(
    predecessors: &[Vec<VertexId>],
    source: VertexId,
    destination: VertexId,
) -> Vec<Vec<VertexId>> {
    let mut paths = Vec::new();
    let mut stack: Vec<(VertexId, usize)> = vec![(destination, 0)];

    while let Some(frame) = stack.last_mut() {
        let (current, next_predecessor) = *frame;
        if current == source {
            paths.push(stack.iter().rev().map(|&(vertex, _)| vertex).collect());
            stack.pop();
            continue;
        }
        match predecessors[current].get(next_predecessor) {
            Some(&previous) => {
                frame.1 += 1;
                stack.push((previous, 0));
            }
            None => {
                stack.pop();
            }
        }
    }

    paths
}

/// Minimum-hop flight options between two vertices, each hop annotated with
/// the airlines allowed by `filter` that fly it.
pub fn flight_options(
    graph: &Graph,
    source: VertexId,
    destination: VertexId,
    filter: &RouteFilter,
) -> Vec<Vec<Route>> {
    let mut options: Vec<Vec<Route>> = Vec::new();
    for path in shortest_paths(graph, source, destination, filter) {
        let legs: Vec<Route> = path
            .windows(2)
            .filter_map(|pair| annotate_leg(graph, pair[0], pair[1], filter))
            .collect();
        if !options.contains(&legs) {
            options.push(legs);
        }
    }
    options
}

fn annotate_leg(graph: &Graph, from: VertexId, to: VertexId, filter: &RouteFilter) -> Option<Route> {
    let airlines: BTreeSet<&str> = graph
        .neighbours(from)
        .iter()
        .filter(|edge| edge.target == to && filter.allows(edge))
        .map(|edge| edge.airline.as_str())
        .collect();

    Some(Route {
        source: graph.code(from)?.to_string(),
        target: graph.code(to)?.to_string(),
        airlines: airlines.into_iter().map(str::to_string).collect(),
    })
}

/// Narrow a path to its most frequent airlines when they cover every hop.
///
/// Airline tags are counted across the hops of `path`. When the highest count
/// equals the number of hops, each hop is rewritten to the airlines reaching
/// that count; otherwise the path is returned unchanged. This is a heuristic
/// that only detects a single airline (or tied set) spanning the whole trip. It
/// does not minimise airline changes in general.
pub fn minimize_airlines(path: &[Route]) -> Vec<Route> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for leg in path {
        for airline in &leg.airlines {
            *counts.entry(airline.as_str()).or_default() += 1;
        }
    }

    let max_count = counts.values().copied().max().unwrap_or(0);
    if path.is_empty() || max_count != path.len() {
        return path.to_vec();
    }

    let frequent: Vec<String> = counts
        .iter()
        .filter(|(_, count)| **count == max_count)
        .map(|(airline, _)| airline.to_string())
        .collect();

    path.iter()
        .map(|leg| Route {
            airlines: frequent.clone(),
            ..leg.clone()
        })
        .collect()
}

/// [`flight_options`] with each path passed through [`minimize_airlines`].
pub fn fewest_airline_options(
    graph: &Graph,
    source: VertexId,
    destination: VertexId,
    filter: &RouteFilter,
) -> Vec<Vec<Route>> {
    flight_options(graph, source, destination, filter)
        .iter()
        .map(|path| minimize_airlines(path))
        .collect()
}

/// Kilometres flown on the shortest edge serving a leg with one of its airlines.
pub fn leg_distance(graph: &Graph, leg: &Route) -> Option<f64> {
    let from = graph.find_vertex(&leg.source)?;
    let to = graph.find_vertex(&leg.target)?;
    graph
        .neighbours(from)
        .iter()
        .filter(|edge| edge.target == to && leg.airlines.contains(&edge.airline))
        .map(|edge| edge.distance)
        .min_by(f64::total_cmp)
}

/// The option with the smallest total distance; the first one wins ties.
pub fn shortest_distance_option(graph: &Graph, options: &[Vec<Route>]) -> Option<(Vec<Route>, f64)> {
    let mut best: Option<(Vec<Route>, f64)> = None;
    for option in options {
        let total: Option<f64> = option.iter().map(|leg| leg_distance(graph, leg)).sum();
        let Some(total) = total else {
            continue;
        };
        if best.as_ref().is_none_or(|(_, current)| total < *current) {
            best = Some((option.clone(), total));
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leg(source: &str, target: &str, airlines: &[&str]) -> Route {
        Route {
            source: source.to_string(),
            target: target.to_string(),
            airlines: airlines.iter().map(|a| a.to_string()).collect(),
        }
    }

    #[test]
    fn minimize_narrows_when_one_airline_spans_every_hop() {
        let path = vec![leg("A", "B", &["X", "Y"]), leg("B", "C", &["X"])];
        let narrowed = minimize_airlines(&path);
        assert_eq!(narrowed, vec![leg("A", "B", &["X"]), leg("B", "C", &["X"])]);
    }

    #[test]
    fn minimize_keeps_tied_airlines_spanning_every_hop() {
        let path = vec![leg("A", "B", &["X", "Y", "Z"]), leg("B", "C", &["X", "Y"])];
        let narrowed = minimize_airlines(&path);
        assert_eq!(narrowed, vec![leg("A", "B", &["X", "Y"]), leg("B", "C", &["X", "Y"])]);
    }

    #[test]
    fn minimize_leaves_path_without_spanning_airline() {
        let path = vec![leg("A", "B", &["X"]), leg("B", "C", &["Y"])];
        assert_eq!(minimize_airlines(&path), path);
        assert!(minimize_airlines(&[]).is_empty());
    }

    #[test]
    fn filter_accepts_everything_by_default() {
        assert!(RouteFilter::any().allows_airline("ANY"));
        let filter = RouteFilter::airlines(["TAP"]);
        assert!(filter.allows_airline("TAP"));
        assert!(!filter.allows_airline("IBE"));
    }
}
