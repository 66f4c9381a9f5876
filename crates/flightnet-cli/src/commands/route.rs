//! Route command handler for finding minimum-flight trips between airports.

use std::path::Path;

use anyhow::{Context, Result};

use flightnet_lib::{
    plan_routes, AirportQuery, Error as RouteError, RouteRequest, RouteStrategy, RouteSummary,
};

use super::{format_unknown_airport_message, load_dataset};
use crate::output::OutputFormat;

/// Arguments for the route command.
#[derive(Debug, Clone, Default)]
pub struct RouteCommandArgs {
    /// Origin airport query.
    pub from: String,
    /// Destination airport query.
    pub to: String,
    /// Airline codes the trip may use.
    pub airlines: Vec<String>,
    /// Prefer a single airline for the whole trip when one exists.
    pub fewest_airlines: bool,
    /// Keep only the option with the fewest kilometres.
    pub shortest_distance: bool,
}

impl RouteCommandArgs {
    /// Convert CLI args to a library [`RouteRequest`].
    pub fn to_request(&self) -> Result<RouteRequest> {
        let from: AirportQuery = self
            .from
            .parse()
            .with_context(|| format!("invalid --from value '{}'", self.from))?;
        let to: AirportQuery = self
            .to
            .parse()
            .with_context(|| format!("invalid --to value '{}'", self.to))?;

        let strategy = if self.shortest_distance {
            RouteStrategy::ShortestDistance
        } else if self.fewest_airlines {
            RouteStrategy::FewestAirlines
        } else {
            RouteStrategy::AllShortest
        };

        Ok(RouteRequest {
            from,
            to,
            airlines: self.airlines.clone(),
            strategy,
        })
    }
}

/// Handle the route subcommand.
pub fn handle_route_command(
    target_path: Option<&Path>,
    format: OutputFormat,
    args: &RouteCommandArgs,
) -> Result<()> {
    let request = args.to_request()?;
    let (network, graph) = load_dataset(target_path)?;

    let plan = match plan_routes(&network, &graph, &request) {
        Ok(plan) => plan,
        Err(err) => return Err(handle_route_failure(&request, err)),
    };

    let summary = RouteSummary::from_plan(&network, &plan)
        .context("failed to build route summary for display")?;
    format.render_route(&summary)?;
    Ok(())
}

fn handle_route_failure(request: &RouteRequest, err: RouteError) -> anyhow::Error {
    match err {
        RouteError::UnknownAirport { query, suggestions } => {
            anyhow::anyhow!(format_unknown_airport_message(&query, &suggestions))
        }
        RouteError::UnknownAirline { code, suggestions } => {
            let mut message = format!("Unknown airline '{code}'.");
            if let Some(first) = suggestions.first() {
                message.push_str(&format!(" Did you mean '{first}'?"));
            }
            anyhow::anyhow!(message)
        }
        RouteError::RouteNotFound { start, goal } => {
            anyhow::anyhow!(format_route_not_found_message(&start, &goal, request))
        }
        other => anyhow::Error::new(other),
    }
}

fn format_route_not_found_message(start: &str, goal: &str, request: &RouteRequest) -> String {
    let mut message = format!("No route found between {start} and {goal}.");
    if request.airlines.is_empty() {
        message.push_str(" The airports are not connected by any sequence of flights.");
    } else {
        message.push_str(" Try removing the --airline restriction.");
    }
    message
}
