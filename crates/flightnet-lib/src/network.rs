use std::collections::HashMap;
use std::fs::File;
use std::io::Read;

use csv::{ReaderBuilder, Trim};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::dataset::DatasetPaths;
use crate::error::{Error, Result};

/// Mean earth radius used for great-circle distances.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Minimum Jaro-Winkler similarity for a fuzzy suggestion to be offered.
const FUZZY_THRESHOLD: f64 = 0.75;

/// Geographic position of an airport in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

impl Position {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Great-circle distance to another position in kilometres.
    pub fn haversine_km(&self, other: &Self) -> f64 {
        let d_lat = (other.latitude - self.latitude).to_radians();
        let d_lon = (other.longitude - self.longitude).to_radians();
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();

        let a = (d_lat / 2.0).sin().powi(2) + (d_lon / 2.0).sin().powi(2) * lat1.cos() * lat2.cos();
        let c = 2.0 * a.sqrt().asin();
        EARTH_RADIUS_KM * c
    }
}

/// Airport metadata keyed by its code.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Airport {
    pub code: String,
    pub name: String,
    pub city: String,
    pub country: String,
    pub position: Position,
}

/// Airline metadata keyed by its code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Airline {
    pub code: String,
    pub name: String,
    pub callsign: String,
    pub country: String,
}

/// A single scheduled flight between two airports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Flight {
    pub source: String,
    pub target: String,
    pub airline: String,
}

#[derive(Debug, Deserialize)]
struct AirportRecord {
    #[serde(rename = "Code")]
    code: String,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "City")]
    city: String,
    #[serde(rename = "Country")]
    country: String,
    #[serde(rename = "Latitude")]
    latitude: f64,
    #[serde(rename = "Longitude")]
    longitude: f64,
}

#[derive(Debug, Deserialize)]
struct AirlineRecord {
    #[serde(rename = "Code")]
    code: String,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Callsign", default)]
    callsign: String,
    #[serde(rename = "Country", default)]
    country: String,
}

#[derive(Debug, Deserialize)]
struct FlightRecord {
    #[serde(rename = "Source")]
    source: String,
    #[serde(rename = "Target")]
    target: String,
    #[serde(rename = "Airline")]
    airline: String,
}

/// In-memory airport, airline, and flight tables loaded from a dataset.
///
/// Airports keep the order of the source file. That order becomes the vertex
/// insertion order of the routing graph and therefore decides tie-breaking in
/// every search.
#[derive(Debug, Clone, Default)]
pub struct FlightNetwork {
    airports: Vec<Airport>,
    airport_index: HashMap<String, usize>,
    airlines: Vec<Airline>,
    airline_index: HashMap<String, usize>,
    flights: Vec<Flight>,
}

impl FlightNetwork {
    /// Build a network from the three CSV sources.
    ///
    /// Flights that reference unknown airports are dropped so the graph never
    /// holds dangling edges. Flights naming an unknown airline are kept.
    pub fn from_readers<A: Read, L: Read, F: Read>(
        airports: A,
        airlines: L,
        flights: F,
    ) -> Result<Self> {
        let mut network = FlightNetwork::default();

        for record in csv_reader(airports).deserialize() {
            let record: AirportRecord = record?;
            network.insert_airport(Airport {
                code: record.code,
                name: record.name,
                city: record.city,
                country: record.country,
                position: Position::new(record.latitude, record.longitude),
            })?;
        }

        for record in csv_reader(airlines).deserialize() {
            let record: AirlineRecord = record?;
            network.insert_airline(Airline {
                code: record.code,
                name: record.name,
                callsign: record.callsign,
                country: record.country,
            })?;
        }

        let mut skipped_flights = 0usize;
        let mut unknown_airlines = 0usize;
        for record in csv_reader(flights).deserialize() {
            let record: FlightRecord = record?;
            if !network.airport_index.contains_key(&record.source)
                || !network.airport_index.contains_key(&record.target)
            {
                skipped_flights += 1;
                continue;
            }
            if !network.airline_index.contains_key(&record.airline) {
                unknown_airlines += 1;
            }
            network.flights.push(Flight {
                source: record.source,
                target: record.target,
                airline: record.airline,
            });
        }

        if skipped_flights > 0 {
            warn!(
                skipped_flights,
                "ignored flights referencing unknown airports"
            );
        }
        if unknown_airlines > 0 {
            debug!(unknown_airlines, "flights reference airlines missing from the airline table");
        }

        Ok(network)
    }

    fn insert_airport(&mut self, airport: Airport) -> Result<()> {
        if self.airport_index.contains_key(&airport.code) {
            return Err(Error::DatasetValidation {
                message: format!("duplicate airport code {}", airport.code),
            });
        }
        self.airport_index
            .insert(airport.code.clone(), self.airports.len());
        self.airports.push(airport);
        Ok(())
    }

    fn insert_airline(&mut self, airline: Airline) -> Result<()> {
        if self.airline_index.contains_key(&airline.code) {
            return Err(Error::DatasetValidation {
                message: format!("duplicate airline code {}", airline.code),
            });
        }
        self.airline_index
            .insert(airline.code.clone(), self.airlines.len());
        self.airlines.push(airline);
        Ok(())
    }

    /// Lookup an airport by its case-sensitive code.
    pub fn airport(&self, code: &str) -> Option<&Airport> {
        self.airport_index
            .get(code)
            .and_then(|&index| self.airports.get(index))
    }

    /// Lookup an airline by its case-sensitive code.
    pub fn airline(&self, code: &str) -> Option<&Airline> {
        self.airline_index
            .get(code)
            .and_then(|&index| self.airlines.get(index))
    }

    /// Whether `code` is listed in the airline table or flies any loaded
    /// flight.
    pub fn operates_airline(&self, code: &str) -> bool {
        self.airline_index.contains_key(code)
            || self.flights.iter().any(|flight| flight.airline == code)
    }

    /// Display name for an airport code, if known.
    pub fn airport_name(&self, code: &str) -> Option<&str> {
        self.airport(code).map(|airport| airport.name.as_str())
    }

    /// Airports in dataset order.
    pub fn airports(&self) -> &[Airport] {
        &self.airports
    }

    /// Airlines in dataset order.
    pub fn airlines(&self) -> &[Airline] {
        &self.airlines
    }

    /// Flights in dataset order.
    pub fn flights(&self) -> &[Flight] {
        &self.flights
    }

    /// Suggest airport codes or names similar to `query`.
    ///
    /// Exact matches rank first; candidates below the similarity threshold
    /// are dropped.
    pub fn fuzzy_airport_matches(&self, query: &str, limit: usize) -> Vec<String> {
        let candidates = self
            .airports
            .iter()
            .flat_map(|airport| [airport.code.as_str(), airport.name.as_str()]);
        rank_similar(query, candidates, limit)
    }

    /// Suggest airline codes similar to `query`.
    pub fn fuzzy_airline_matches(&self, query: &str, limit: usize) -> Vec<String> {
        let candidates = self.airlines.iter().map(|airline| airline.code.as_str());
        rank_similar(query, candidates, limit)
    }
}

/// Load the airport, airline, and flight tables from the dataset directory.
pub fn load_network(paths: &DatasetPaths) -> Result<FlightNetwork> {
    debug!(root = %paths.root.display(), "loading flight network");
    let network = FlightNetwork::from_readers(
        File::open(&paths.airports)?,
        File::open(&paths.airlines)?,
        File::open(&paths.flights)?,
    )?;
    debug!(
        airports = network.airports.len(),
        airlines = network.airlines.len(),
        flights = network.flights.len(),
        "flight network loaded"
    );
    Ok(network)
}

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    ReaderBuilder::new().trim(Trim::All).from_reader(reader)
}

fn rank_similar<'a>(
    query: &str,
    candidates: impl Iterator<Item = &'a str>,
    limit: usize,
) -> Vec<String> {
    let needle = query.to_lowercase();
    let mut scored: Vec<(f64, &str)> = candidates
        .map(|candidate| {
            let score = strsim::jaro_winkler(&needle, &candidate.to_lowercase());
            (score, candidate)
        })
        .filter(|(score, _)| *score >= FUZZY_THRESHOLD)
        .collect();

    scored.sort_by(|a, b| b.0.total_cmp(&a.0));

    let mut matches: Vec<String> = Vec::new();
    for (_, candidate) in scored {
        if matches.len() >= limit {
            break;
        }
        if !matches.iter().any(|existing| existing == candidate) {
            matches.push(candidate.to_string());
        }
    }
    matches
}
