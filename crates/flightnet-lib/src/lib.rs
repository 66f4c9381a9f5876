//! Flight network library entry points.
//!
//! This crate exposes helpers to locate the flight dataset, load airports,
//! airlines, and flights into memory, build the directed flight graph, and run
//! route searches and network analyses over it. Higher-level consumers (the
//! CLI) should only depend on the functions exported here instead of
//! reimplementing behavior.
//!

pub mod analysis;
pub mod articulation;
pub mod dataset;
pub mod error;
pub mod graph;
pub mod network;
pub mod output;
pub mod resolve;
pub mod routing;
pub mod stats;
pub mod traversal;

pub use analysis::{max_trip, reachable_destinations, reachable_within_stops, MaxTrip, Reachability};
pub use articulation::{articulation_points, essential_airports};
pub use dataset::{default_dataset_dir, resolve_dataset, DatasetPaths, DATA_DIR_ENV};
pub use error::{Error, Result};
pub use graph::{build_graph, Edge, Graph, Vertex, VertexId};
pub use network::{load_network, Airline, Airport, Flight, FlightNetwork, Position};
pub use output::{AirportRef, LegSummary, OptionSummary, RouteRenderMode, RouteSummary};
pub use resolve::{nearest_airports, resolve, AirportQuery};
pub use routing::{
    plan_routes, shortest_paths, Route, RouteFilter, RouteOption, RoutePlan, RouteRequest, RouteStrategy,
};
pub use stats::{top_airports_by_traffic, AirportStats, CityTraffic, TrafficRank};
pub use traversal::{bfs_within, dfs_visit, TraversalState};
