//! Handlers for the CLI subcommands.
//!
//! `main.rs` parses arguments and dispatches here; each handler loads the
//! dataset, calls into the library, and renders the result.

pub mod network;
pub mod reach;
pub mod route;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use flightnet_lib::{build_graph, load_network, resolve_dataset, FlightNetwork, Graph};

/// Resolve, load, and index the dataset.
pub fn load_dataset(target: Option<&Path>) -> Result<(FlightNetwork, Graph)> {
    let paths = resolve_dataset(target).context("failed to locate the flight dataset")?;
    let network = load_network(&paths)
        .with_context(|| format!("failed to load dataset from {}", paths.root.display()))?;
    let graph = build_graph(&network);
    info!(
        airports = graph.len(),
        flights = graph.flight_count(),
        "flight graph ready"
    );
    Ok((network, graph))
}

/// Friendly message for an unknown airport, with suggestions when available.
pub(crate) fn format_unknown_airport_message(query: &str, suggestions: &[String]) -> String {
    let mut message = format!("Unknown airport '{query}'.");
    match suggestions {
        [] => {}
        [only] => message.push_str(&format!(" Did you mean '{only}'?")),
        many => {
            let joined = many
                .iter()
                .map(|s| format!("'{s}'"))
                .collect::<Vec<_>>()
                .join(", ");
            message.push_str(&format!(" Did you mean one of: {joined}?"));
        }
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_airport_message_lists_suggestions() {
        assert_eq!(format_unknown_airport_message("XYZ", &[]), "Unknown airport 'XYZ'.");
        assert_eq!(
            format_unknown_airport_message("OPQ", &["OPO".to_string()]),
            "Unknown airport 'OPQ'. Did you mean 'OPO'?"
        );
        assert_eq!(
            format_unknown_airport_message("LI", &["LIS".to_string(), "LHR".to_string()]),
            "Unknown airport 'LI'. Did you mean one of: 'LIS', 'LHR'?"
        );
    }
}
