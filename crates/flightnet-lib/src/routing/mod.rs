//! Route planning between airports.
//!
//! This module provides:
//! - [`RouteStrategy`] - How candidate minimum-hop options are post-processed
//! - [`RouteRequest`] - High-level planning request built from airport queries
//! - [`RoutePlan`] - Options grouped per resolved (source, destination) pair
//! - [`plan_routes`] - Main entry point for computing routes
//!
//! The search primitives in [`search`] work on vertex ids and never fail;
//! `plan_routes` adds query resolution and error reporting on top.
//!
//! # Example
//!
//! ```ignore
//! use flightnet_lib::{build_graph, load_network, plan_routes, resolve_dataset, RouteRequest};
//!
//! let network = load_network(&resolve_dataset(None)?)?;
//! let graph = build_graph(&network);
//! let plan = plan_routes(&network, &graph, &RouteRequest::between("OPO", "JFK"))?;
//! println!("{} option group(s)", plan.options.len());
//! ```

pub mod search;

pub use search::{
    fewest_airline_options, flight_options, leg_distance, minimize_airlines, shortest_distance_option,
    shortest_paths, Route, RouteFilter,
};

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::network::FlightNetwork;
use crate::resolve::{resolve, AirportQuery};

const SUGGESTION_LIMIT: usize = 3;

/// Post-processing applied to the minimum-hop options of each pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RouteStrategy {
    /// Every minimum-hop option with all usable airlines per hop.
    #[default]
    AllShortest,
    /// Options narrowed to an airline spanning the whole trip when one exists.
    FewestAirlines,
    /// The single minimum-hop option with the fewest kilometres.
    ShortestDistance,
}

impl fmt::Display for RouteStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RouteStrategy::AllShortest => "all-shortest",
            RouteStrategy::FewestAirlines => "fewest-airlines",
            RouteStrategy::ShortestDistance => "shortest-distance",
        };
        f.write_str(value)
    }
}

/// High-level route planning request.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub from: AirportQuery,
    pub to: AirportQuery,
    /// Airline codes the route may use; empty means any airline.
    pub airlines: Vec<String>,
    pub strategy: RouteStrategy,
}

impl RouteRequest {
    /// Convenience constructor for an unrestricted code-to-code request.
    pub fn between(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: AirportQuery::Code(from.into()),
            to: AirportQuery::Code(to.into()),
            airlines: Vec::new(),
            strategy: RouteStrategy::AllShortest,
        }
    }

    fn filter(&self) -> RouteFilter {
        if self.airlines.is_empty() {
            RouteFilter::any()
        } else {
            RouteFilter::airlines(self.airlines.iter().cloned())
        }
    }
}

/// Minimum-hop options between one resolved source and destination.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteOption {
    pub source: String,
    pub destination: String,
    pub hops: usize,
    pub paths: Vec<Vec<Route>>,
    /// Total kilometres, set for [`RouteStrategy::ShortestDistance`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}

/// Planned routes returned by the library.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePlan {
    pub strategy: RouteStrategy,
    /// One entry per (source, destination) pair that has a route.
    pub options: Vec<RouteOption>,
}

impl RoutePlan {
    /// Hop count of the best option across every pair.
    pub fn min_hops(&self) -> Option<usize> {
        self.options.iter().map(|option| option.hops).min()
    }
}

/// Resolve both ends of `request` and search every candidate pair.
///
/// Unknown airports and airlines are errors. When no pair has a route the
/// result is [`Error::RouteNotFound`], which callers can tell apart from a
/// failed lookup.
pub fn plan_routes(network: &FlightNetwork, graph: &Graph, request: &RouteRequest) -> Result<RoutePlan> {
    for code in &request.airlines {
        if !network.operates_airline(code) {
            return Err(Error::UnknownAirline {
                code: code.clone(),
                suggestions: network.fuzzy_airline_matches(code, SUGGESTION_LIMIT),
            });
        }
    }

    let sources = resolve(network, &request.from)?;
    let destinations = resolve(network, &request.to)?;
    let filter = request.filter();

    let mut options = Vec::new();
    for source in &sources {
        for destination in &destinations {
            let (Some(source_id), Some(destination_id)) =
                (graph.find_vertex(source), graph.find_vertex(destination))
            else {
                continue;
            };

            let mut paths = match request.strategy {
                RouteStrategy::FewestAirlines => {
                    fewest_airline_options(graph, source_id, destination_id, &filter)
                }
                RouteStrategy::AllShortest | RouteStrategy::ShortestDistance => {
                    flight_options(graph, source_id, destination_id, &filter)
                }
            };
            let mut distance_km = None;
            if request.strategy == RouteStrategy::ShortestDistance {
                if let Some((best, total)) = shortest_distance_option(graph, &paths) {
                    paths = vec![best];
                    distance_km = Some(total);
                }
            }

            debug!(
                source = %source,
                destination = %destination,
                options = paths.len(),
                "searched airport pair"
            );

            let Some(hops) = paths.first().map(Vec::len) else {
                continue;
            };
            options.push(RouteOption {
                source: source.clone(),
                destination: destination.clone(),
                hops,
                paths,
                distance_km,
            });
        }
    }

    if options.is_empty() {
        return Err(Error::RouteNotFound {
            start: request.from.to_string(),
            goal: request.to.to_string(),
        });
    }

    Ok(RoutePlan {
        strategy: request.strategy,
        options,
    })
}
