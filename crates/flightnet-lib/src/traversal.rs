//! Depth-first and breadth-first walks over the flight graph.
//!
//! Visitation flags live in a [`TraversalState`] owned by the caller instead of
//! on the vertices. A fresh state (or one passed through
//! [`TraversalState::reset`]) is the baseline every walk starts from, so
//! repeated or concurrent queries against the same `&Graph` never observe each
//! other's bookkeeping.

use std::collections::VecDeque;

use crate::graph::{Edge, Graph, VertexId};

/// Per-call visitation buffers indexed by [`VertexId`].
#[derive(Debug, Clone)]
pub struct TraversalState {
    visited: Vec<bool>,
    processing: Vec<bool>,
}

impl TraversalState {
    /// Create a cleared state sized for `graph`.
    pub fn new(graph: &Graph) -> Self {
        Self {
            visited: vec![false; graph.len()],
            processing: vec![false; graph.len()],
        }
    }

    /// Restore the baseline: nothing visited, nothing in progress.
    pub fn reset(&mut self) {
        self.visited.fill(false);
        self.processing.fill(false);
    }

    pub fn is_visited(&self, id: VertexId) -> bool {
        self.visited.get(id).copied().unwrap_or(false)
    }

    #[cfg(test)]
    fn is_processing(&self, id: VertexId) -> bool {
        self.processing.get(id).copied().unwrap_or(false)
    }

    fn mark_visited(&mut self, id: VertexId) {
        if let Some(flag) = self.visited.get_mut(id) {
            *flag = true;
        }
    }

    fn set_processing(&mut self, id: VertexId, value: bool) {
        if let Some(flag) = self.processing.get_mut(id) {
            *flag = value;
        }
    }
}

/// Depth-first walk from `start`, returning vertices in discovery order.
///
/// Children are explored in adjacency-list order, producing the same pre-order
/// as the recursive formulation without its stack-depth limit. Vertices already
/// marked in `state` are not entered; the state is left as the walk finished
/// it.
pub fn dfs_visit(graph: &Graph, start: VertexId, state: &mut TraversalState) -> Vec<VertexId> {
    let mut order = Vec::new();
    if start >= graph.len() || state.is_visited(start) {
        return order;
    }

    state.mark_visited(start);
    state.set_processing(start, true);
    order.push(start);
    let mut stack: Vec<(VertexId, usize)> = vec![(start, 0)];

    while let Some(frame) = stack.last_mut() {
        let (vertex, next_edge) = *frame;
        let edges = graph.neighbours(vertex);
        if next_edge >= edges.len() {
            state.set_processing(vertex, false);
            stack.pop();
            continue;
        }
        frame.1 += 1;

        let target = edges[next_edge].target;
        if !state.is_visited(target) {
            state.mark_visited(target);
            state.set_processing(target, true);
            order.push(target);
            stack.push((target, 0));
        }
    }

    order
}

/// Every vertex reachable from `start` in at most `max_hops` flights,
/// `start` included, in breadth-first order.
///
/// A vertex is claimed on its first (shortest) discovery and never re-queued.
pub fn bfs_within(
    graph: &Graph,
    start: VertexId,
    max_hops: usize,
    state: &mut TraversalState,
) -> Vec<VertexId> {
    let mut order = Vec::new();
    if start >= graph.len() || state.is_visited(start) {
        return order;
    }

    let mut queue = VecDeque::new();
    state.mark_visited(start);
    queue.push_back((start, 0usize));

    while let Some((current, depth)) = queue.pop_front() {
        order.push(current);
        if depth == max_hops {
            continue;
        }
        for edge in graph.neighbours(current) {
            if !state.is_visited(edge.target) {
                state.mark_visited(edge.target);
                queue.push_back((edge.target, depth + 1));
            }
        }
    }

    order
}

/// Minimum hop count from `start` to every vertex, following only edges
/// accepted by `allow`. Unreachable vertices are `None`.
pub fn bfs_distances<F>(graph: &Graph, start: VertexId, allow: F) -> Vec<Option<usize>>
where
    F: Fn(&Edge) -> bool,
{
    let mut distances = vec![None; graph.len()];
    if start >= graph.len() {
        return distances;
    }

    let mut queue = VecDeque::new();
    distances[start] = Some(0);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        let next_distance = distances[current].map_or(0, |d| d + 1);
        for edge in graph.neighbours(current) {
            if !allow(edge) || distances[edge.target].is_some() {
                continue;
            }
            distances[edge.target] = Some(next_distance);
            queue.push_back(edge.target);
        }
    }

    distances
}
