//! Translate user-facing airport queries into airport codes.
//!
//! A query names an airport by code, display name, city, or coordinates. Each
//! form resolves to one or more codes through a single entry point,
//! [`resolve`], so callers can cross-product sources and destinations without a
//! dedicated overload per combination.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::network::{FlightNetwork, Position};

const SUGGESTION_LIMIT: usize = 3;

/// A way of naming one or more airports.
#[derive(Debug, Clone, PartialEq)]
pub enum AirportQuery {
    Code(String),
    Name(String),
    City { city: String, country: String },
    Coordinates(Position),
}

impl fmt::Display for AirportQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AirportQuery::Code(code) => f.write_str(code),
            AirportQuery::Name(name) => f.write_str(name),
            AirportQuery::City { city, country } => write!(f, "{city}, {country}"),
            AirportQuery::Coordinates(position) => {
                write!(f, "({}, {})", position.latitude, position.longitude)
            }
        }
    }
}

impl FromStr for AirportQuery {
    type Err = Error;

    /// Parse `code:OPO`, `name:<name>`, `city:<city>,<country>` or
    /// `coords:<lat>,<lon>`. A bare token is taken as a code.
    fn from_str(input: &str) -> Result<Self> {
        let invalid = |message: &str| Error::InvalidQuery {
            input: input.to_string(),
            message: message.to_string(),
        };

        let Some((kind, value)) = input.split_once(':') else {
            let code = input.trim();
            if code.is_empty() {
                return Err(invalid("empty airport code"));
            }
            return Ok(AirportQuery::Code(code.to_string()));
        };
        let value = value.trim();

        match kind.trim().to_ascii_lowercase().as_str() {
            "code" if !value.is_empty() => Ok(AirportQuery::Code(value.to_string())),
            "name" if !value.is_empty() => Ok(AirportQuery::Name(value.to_string())),
            "city" => {
                let (city, country) = value
                    .split_once(',')
                    .ok_or_else(|| invalid("expected city:<city>,<country>"))?;
                Ok(AirportQuery::City {
                    city: city.trim().to_string(),
                    country: country.trim().to_string(),
                })
            }
            "coords" => {
                let (lat, lon) = value
                    .split_once(',')
                    .ok_or_else(|| invalid("expected coords:<latitude>,<longitude>"))?;
                let latitude: f64 = lat
                    .trim()
                    .parse()
                    .map_err(|_| invalid("latitude is not a number"))?;
                let longitude: f64 = lon
                    .trim()
                    .parse()
                    .map_err(|_| invalid("longitude is not a number"))?;
                if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
                    return Err(invalid("coordinates out of range"));
                }
                Ok(AirportQuery::Coordinates(Position::new(latitude, longitude)))
            }
            "code" | "name" => Err(invalid("empty value")),
            _ => Err(invalid("unknown query kind; use code, name, city, or coords")),
        }
    }
}

/// Resolve a query into airport codes, in dataset order.
///
/// Coordinates select every airport tied for the smallest great-circle
/// distance, compared in whole kilometres.
pub fn resolve(network: &FlightNetwork, query: &AirportQuery) -> Result<Vec<String>> {
    let codes: Vec<String> = match query {
        AirportQuery::Code(code) => network
            .airport(code)
            .map(|airport| vec![airport.code.clone()])
            .unwrap_or_default(),
        AirportQuery::Name(name) => network
            .airports()
            .iter()
            .filter(|airport| airport.name == *name)
            .map(|airport| airport.code.clone())
            .collect(),
        AirportQuery::City { city, country } => network
            .airports()
            .iter()
            .filter(|airport| airport.city == *city && airport.country == *country)
            .map(|airport| airport.code.clone())
            .collect(),
        AirportQuery::Coordinates(position) => nearest_airports(network, position),
    };

    if codes.is_empty() {
        let suggestions = match query {
            AirportQuery::Code(text) | AirportQuery::Name(text) => {
                network.fuzzy_airport_matches(text, SUGGESTION_LIMIT)
            }
            _ => Vec::new(),
        };
        return Err(Error::UnknownAirport {
            query: query.to_string(),
            suggestions,
        });
    }

    Ok(codes)
}

/// Every airport tied for the minimum distance to `position`.
pub fn nearest_airports(network: &FlightNetwork, position: &Position) -> Vec<String> {
    let mut best: Option<u64> = None;
    let mut nearest = Vec::new();

    for airport in network.airports() {
        // Whole kilometres, so airports a few metres apart rank together.
        let distance = position.haversine_km(&airport.position) as u64;
        match best {
            Some(current) if distance > current => {}
            Some(current) if distance == current => nearest.push(airport.code.clone()),
            _ => {
                best = Some(distance);
                nearest.clear();
                nearest.push(airport.code.clone());
            }
        }
    }

    nearest
}
