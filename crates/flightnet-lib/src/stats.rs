use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::{Graph, Vertex};
use crate::network::FlightNetwork;

/// Airport ranked by number of incoming plus outgoing flights.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrafficRank {
    pub rank: usize,
    pub code: String,
    pub flights: usize,
}

/// Per-airport flight summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AirportStats {
    pub code: String,
    pub departures: usize,
    pub airlines: usize,
    pub destination_countries: usize,
}

/// Flight count for one (city, country) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityTraffic {
    pub city: String,
    pub country: String,
    pub flights: usize,
}

pub fn global_airport_count(graph: &Graph) -> usize {
    graph.len()
}

pub fn global_flight_count(graph: &Graph) -> usize {
    graph.flight_count()
}

fn vertex<'g>(graph: &'g Graph, code: &str) -> Result<&'g Vertex> {
    graph
        .find_vertex(code)
        .and_then(|id| graph.vertex(id))
        .ok_or_else(|| Error::UnknownAirport {
            query: code.to_string(),
            suggestions: Vec::new(),
        })
}

/// Number of flights departing `code`.
pub fn flights_from_airport(graph: &Graph, code: &str) -> Result<usize> {
    Ok(vertex(graph, code)?.out_degree())
}

/// Number of distinct airlines departing `code`.
pub fn airlines_from_airport(graph: &Graph, code: &str) -> Result<usize> {
    let airlines: BTreeSet<&str> = vertex(graph, code)?
        .edges()
        .iter()
        .map(|edge| edge.airline.as_str())
        .collect();
    Ok(airlines.len())
}

/// Number of distinct countries served by direct flights from `code`.
pub fn countries_from_airport(network: &FlightNetwork, graph: &Graph, code: &str) -> Result<usize> {
    let origin = vertex(graph, code)?;
    let countries: BTreeSet<&str> = origin
        .edges()
        .iter()
        .filter_map(|edge| graph.code(edge.target))
        .filter_map(|target| network.airport(target))
        .map(|airport| airport.country.as_str())
        .collect();
    Ok(countries.len())
}

/// Number of distinct countries served by direct flights from any airport in
/// the given city. An unknown city serves no countries.
pub fn countries_from_city(network: &FlightNetwork, graph: &Graph, city: &str, country: &str) -> usize {
    let mut countries: BTreeSet<&str> = BTreeSet::new();
    for airport in network
        .airports()
        .iter()
        .filter(|airport| airport.city == city && airport.country == country)
    {
        let Some(id) = graph.find_vertex(&airport.code) else {
            continue;
        };
        for edge in graph.neighbours(id) {
            if let Some(target) = graph.code(edge.target).and_then(|code| network.airport(code)) {
                countries.insert(target.country.as_str());
            }
        }
    }
    countries.len()
}

/// Departures, airlines, and destination countries for one airport.
pub fn airport_stats(network: &FlightNetwork, graph: &Graph, code: &str) -> Result<AirportStats> {
    Ok(AirportStats {
        code: code.to_string(),
        departures: flights_from_airport(graph, code)?,
        airlines: airlines_from_airport(graph, code)?,
        destination_countries: countries_from_airport(network, graph, code)?,
    })
}

/// Incoming plus outgoing flights per (city, country), ordered by city.
pub fn flights_per_city(network: &FlightNetwork, graph: &Graph) -> Vec<CityTraffic> {
    let mut totals: BTreeMap<(&str, &str), usize> = BTreeMap::new();
    for vertex in graph.vertices() {
        let Some(airport) = network.airport(vertex.code()) else {
            continue;
        };
        *totals
            .entry((airport.city.as_str(), airport.country.as_str()))
            .or_default() += vertex.traffic();
    }

    totals
        .into_iter()
        .map(|((city, country), flights)| CityTraffic {
            city: city.to_string(),
            country: country.to_string(),
            flights,
        })
        .collect()
}

/// Flights operated per airline code, ordered by code.
pub fn flights_per_airline(graph: &Graph) -> BTreeMap<String, usize> {
    let mut totals: BTreeMap<String, usize> = BTreeMap::new();
    for vertex in graph.vertices() {
        for edge in vertex.edges() {
            *totals.entry(edge.airline.clone()).or_default() += 1;
        }
    }
    totals
}

/// The `k` busiest airports by incoming plus outgoing flights.
///
/// Equal traffic keeps dataset order. `k` must be between 1 and the number of
/// airports.
pub fn top_airports_by_traffic(graph: &Graph, k: usize) -> Result<Vec<TrafficRank>> {
    if k == 0 || k > graph.len() {
        return Err(Error::InvalidQueryBounds {
            message: format!("k must be between 1 and {}, got {k}", graph.len()),
        });
    }

    let mut ranked: Vec<&Vertex> = graph.vertices().iter().collect();
    ranked.sort_by(|a, b| b.traffic().cmp(&a.traffic()));

    Ok(ranked
        .into_iter()
        .take(k)
        .enumerate()
        .map(|(index, vertex)| TrafficRank {
            rank: index + 1,
            code: vertex.code().to_string(),
            flights: vertex.traffic(),
        })
        .collect())
}
