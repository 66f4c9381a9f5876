//! Whole-network statistics and analyses.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use flightnet_lib::stats::{
    airport_stats, countries_from_city, flights_per_airline, flights_per_city,
    global_airport_count, global_flight_count,
};
use flightnet_lib::{
    essential_airports, max_trip, resolve, top_airports_by_traffic, AirportQuery, AirportStats,
    Error,
};

use super::{format_unknown_airport_message, load_dataset};
use crate::output::{
    render_airline_traffic, render_airport_stats, render_city_countries, render_city_traffic,
    render_essential, render_json, render_max_trip, render_top, OutputFormat,
};
use crate::terminal::group_thousands;

#[derive(Debug, Serialize)]
struct NetworkTotals {
    airports: usize,
    airlines: usize,
    flights: usize,
}

#[derive(Debug, Serialize)]
struct AirportReport {
    name: String,
    city: String,
    country: String,
    #[serde(flatten)]
    stats: AirportStats,
}

/// `stats`: global airport, airline, and flight counts.
pub fn handle_stats(target_path: Option<&Path>, format: OutputFormat) -> Result<()> {
    let (network, graph) = load_dataset(target_path)?;
    let totals = NetworkTotals {
        airports: global_airport_count(&graph),
        airlines: network.airlines().len(),
        flights: global_flight_count(&graph),
    };

    if format.is_json() {
        render_json(&totals)?;
    } else {
        println!("Airports: {}", group_thousands(totals.airports as u64));
        println!("Airlines: {}", group_thousands(totals.airlines as u64));
        println!("Flights:  {}", group_thousands(totals.flights as u64));
    }
    Ok(())
}

/// `airport <query>`: departures, airlines, and destination countries.
pub fn handle_airport(target_path: Option<&Path>, format: OutputFormat, query: &str) -> Result<()> {
    let parsed: AirportQuery = query.parse()?;
    let (network, graph) = load_dataset(target_path)?;
    let codes = resolve(&network, &parsed).map_err(|err| match err {
        Error::UnknownAirport { query, suggestions } => {
            anyhow::anyhow!(format_unknown_airport_message(&query, &suggestions))
        }
        other => anyhow::Error::new(other),
    })?;

    let mut reports = Vec::with_capacity(codes.len());
    for code in &codes {
        let airport = network
            .airport(code)
            .with_context(|| format!("airport {code} missing from dataset"))?;
        reports.push(AirportReport {
            name: airport.name.clone(),
            city: airport.city.clone(),
            country: airport.country.clone(),
            stats: airport_stats(&network, &graph, code)?,
        });
    }

    if format.is_json() {
        render_json(&reports)?;
    } else {
        for report in &reports {
            render_airport_stats(&report.name, &report.stats);
        }
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct CityReport {
    city: String,
    country: String,
    destination_countries: usize,
}

/// `city <city> <country>`: countries served by direct flights from the city.
pub fn handle_city(
    target_path: Option<&Path>,
    format: OutputFormat,
    city: &str,
    country: &str,
) -> Result<()> {
    let (network, graph) = load_dataset(target_path)?;
    let known = network
        .airports()
        .iter()
        .any(|airport| airport.city == city && airport.country == country);
    if !known {
        anyhow::bail!("No airports found in {city}, {country}.");
    }

    let report = CityReport {
        city: city.to_string(),
        country: country.to_string(),
        destination_countries: countries_from_city(&network, &graph, city, country),
    };
    if format.is_json() {
        render_json(&report)?;
    } else {
        render_city_countries(&report.city, &report.country, report.destination_countries);
    }
    Ok(())
}

/// `per-city`: incoming plus outgoing flights per city.
pub fn handle_per_city(target_path: Option<&Path>, format: OutputFormat) -> Result<()> {
    let (network, graph) = load_dataset(target_path)?;
    let cities = flights_per_city(&network, &graph);
    if format.is_json() {
        render_json(&cities)?;
    } else {
        render_city_traffic(&cities);
    }
    Ok(())
}

/// `per-airline`: flights operated by each airline.
pub fn handle_per_airline(target_path: Option<&Path>, format: OutputFormat) -> Result<()> {
    let (_, graph) = load_dataset(target_path)?;
    let airlines = flights_per_airline(&graph);
    if format.is_json() {
        render_json(&airlines)?;
    } else {
        render_airline_traffic(&airlines);
    }
    Ok(())
}

/// `top --k N`: busiest airports by traffic.
pub fn handle_top(target_path: Option<&Path>, format: OutputFormat, k: usize) -> Result<()> {
    let (_, graph) = load_dataset(target_path)?;
    let ranking = top_airports_by_traffic(&graph, k)?;
    if format.is_json() {
        render_json(&ranking)?;
    } else {
        render_top(&ranking);
    }
    Ok(())
}

/// `max-trip`: the longest minimum-flight trip in the network.
pub fn handle_max_trip(target_path: Option<&Path>, format: OutputFormat) -> Result<()> {
    let (_, graph) = load_dataset(target_path)?;
    let trip = max_trip(&graph);
    if format.is_json() {
        render_json(&trip)?;
    } else {
        render_max_trip(&trip);
    }
    Ok(())
}

/// `essential`: airports whose removal disconnects the network.
pub fn handle_essential(target_path: Option<&Path>, format: OutputFormat) -> Result<()> {
    let (_, graph) = load_dataset(target_path)?;
    let codes = essential_airports(&graph);
    if format.is_json() {
        render_json(&codes)?;
    } else {
        render_essential(&codes);
    }
    Ok(())
}
