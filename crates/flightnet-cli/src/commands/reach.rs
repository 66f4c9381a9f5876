//! Reach command: destinations reachable from an airport.

use std::path::Path;

use anyhow::Result;

use flightnet_lib::{reachable_destinations, reachable_within_stops, resolve, AirportQuery, Error};

use super::{format_unknown_airport_message, load_dataset};
use crate::output::{render_json, render_reachability, OutputFormat};

/// Handle the reach subcommand.
///
/// A query that matches several airports (a city, tied coordinates) reports
/// each of them.
pub fn handle_reach_command(
    target_path: Option<&Path>,
    format: OutputFormat,
    from: &str,
    stops: Option<usize>,
) -> Result<()> {
    let query: AirportQuery = from.parse()?;
    let (network, graph) = load_dataset(target_path)?;

    let codes = resolve(&network, &query).map_err(|err| match err {
        Error::UnknownAirport { query, suggestions } => {
            anyhow::anyhow!(format_unknown_airport_message(&query, &suggestions))
        }
        other => anyhow::Error::new(other),
    })?;

    let mut results = Vec::with_capacity(codes.len());
    for code in &codes {
        let result = match stops {
            Some(stops) => reachable_within_stops(&network, &graph, code, stops)?,
            None => reachable_destinations(&network, &graph, code)?,
        };
        results.push(result);
    }

    if format.is_json() {
        render_json(&results)?;
    } else {
        for result in &results {
            render_reachability(result, stops);
        }
    }
    Ok(())
}
