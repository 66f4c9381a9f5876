use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::network::FlightNetwork;

/// Dense index of a vertex inside a [`Graph`].
pub type VertexId = usize;

/// Directed flight edge within the routing graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub target: VertexId,
    pub airline: String,
    /// Great-circle distance in kilometres.
    pub distance: f64,
}

/// Airport vertex with its outgoing flights.
///
/// Traversal bookkeeping lives in [`crate::traversal::TraversalState`], never
/// on the vertex, so a graph can be queried through a shared reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    code: String,
    edges: Vec<Edge>,
    in_degree: usize,
    out_degree: usize,
}

impl Vertex {
    fn new(code: String) -> Self {
        Self {
            code,
            edges: Vec::new(),
            in_degree: 0,
            out_degree: 0,
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// Outgoing edges in insertion order. Parallel edges are preserved.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn in_degree(&self) -> usize {
        self.in_degree
    }

    pub fn out_degree(&self) -> usize {
        self.out_degree
    }

    /// Incoming plus outgoing flights.
    pub fn traffic(&self) -> usize {
        self.in_degree + self.out_degree
    }
}

/// Flight graph addressed by airport code.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: Vec<Vertex>,
    index: HashMap<String, VertexId>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a vertex for `code`, returning the existing id when present.
    pub fn add_vertex(&mut self, code: &str) -> VertexId {
        if let Some(&id) = self.index.get(code) {
            return id;
        }
        let id = self.vertices.len();
        self.vertices.push(Vertex::new(code.to_string()));
        self.index.insert(code.to_string(), id);
        id
    }

    /// Insert a directed flight. Both endpoints must already be vertices.
    pub fn add_edge(&mut self, source: &str, target: &str, airline: &str, distance: f64) -> Result<()> {
        let source_id = self.require(source)?;
        let target_id = self.require(target)?;

        let origin = &mut self.vertices[source_id];
        origin.edges.push(Edge {
            target: target_id,
            airline: airline.to_string(),
            distance,
        });
        origin.out_degree += 1;
        self.vertices[target_id].in_degree += 1;
        Ok(())
    }

    fn require(&self, code: &str) -> Result<VertexId> {
        self.find_vertex(code).ok_or_else(|| Error::UnknownAirport {
            query: code.to_string(),
            suggestions: Vec::new(),
        })
    }

    /// Lookup the vertex id for an airport code.
    pub fn find_vertex(&self, code: &str) -> Option<VertexId> {
        self.index.get(code).copied()
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id)
    }

    /// Airport code for a vertex id.
    pub fn code(&self, id: VertexId) -> Option<&str> {
        self.vertices.get(id).map(Vertex::code)
    }

    /// Vertices in insertion order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Return the outgoing edges for a given vertex.
    pub fn neighbours(&self, id: VertexId) -> &[Edge] {
        self.vertices
            .get(id)
            .map(|vertex| vertex.edges.as_slice())
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Total number of directed flights.
    pub fn flight_count(&self) -> usize {
        self.vertices.iter().map(Vertex::out_degree).sum()
    }
}

/// Build the routing graph from a loaded network.
///
/// Vertices follow the airport order of the dataset; each flight becomes one
/// edge weighted by the great-circle distance between its endpoints.
pub fn build_graph(network: &FlightNetwork) -> Graph {
    let mut graph = Graph::new();
    for airport in network.airports() {
        graph.add_vertex(&airport.code);
    }

    for flight in network.flights() {
        let (Some(source), Some(target)) =
            (network.airport(&flight.source), network.airport(&flight.target))
        else {
            continue;
        };
        let distance = source.position.haversine_km(&target.position);
        // Endpoints were inserted above, so this cannot fail.
        let _ = graph.add_edge(&source.code, &target.code, &flight.airline, distance);
    }

    graph
}
