use std::fmt::Write;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::network::FlightNetwork;
use crate::routing::{Route, RoutePlan, RouteStrategy};

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    PlainText,
    RichText,
}

/// Airport reference with its display name resolved.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AirportRef {
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl AirportRef {
    pub fn lookup(network: &FlightNetwork, code: &str) -> Self {
        Self {
            code: code.to_string(),
            name: network.airport_name(code).map(str::to_string),
        }
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<unknown>")
    }
}

/// One flight leg with resolved airport names.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LegSummary {
    pub source: AirportRef,
    pub target: AirportRef,
    pub airlines: Vec<String>,
}

impl LegSummary {
    fn from_route(network: &FlightNetwork, route: &Route) -> Self {
        Self {
            source: AirportRef::lookup(network, &route.source),
            target: AirportRef::lookup(network, &route.target),
            airlines: route.airlines.clone(),
        }
    }
}

/// Options for one (source, destination) pair.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OptionSummary {
    pub index: usize,
    pub source: AirportRef,
    pub destination: AirportRef,
    pub hops: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    pub paths: Vec<Vec<LegSummary>>,
}

/// Structured representation of a route plan that consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub strategy: RouteStrategy,
    pub options: Vec<OptionSummary>,
}

impl RouteSummary {
    /// Convert a [`RoutePlan`] into a summary with resolved airport names.
    pub fn from_plan(network: &FlightNetwork, plan: &RoutePlan) -> Result<Self> {
        if plan.options.is_empty() {
            return Err(Error::EmptyRoutePlan);
        }

        let options = plan
            .options
            .iter()
            .enumerate()
            .map(|(index, option)| OptionSummary {
                index: index + 1,
                source: AirportRef::lookup(network, &option.source),
                destination: AirportRef::lookup(network, &option.destination),
                hops: option.hops,
                distance_km: option.distance_km,
                paths: option
                    .paths
                    .iter()
                    .map(|path| {
                        path.iter()
                            .map(|route| LegSummary::from_route(network, route))
                            .collect()
                    })
                    .collect(),
            })
            .collect();

        Ok(Self {
            strategy: plan.strategy,
            options,
        })
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RouteRenderMode) -> String {
        match mode {
            RouteRenderMode::PlainText => self.render_plain(),
            RouteRenderMode::RichText => self.render_rich(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        for option in &self.options {
            let _ = writeln!(
                buffer,
                "Option {}: {} -> {} ({} flights, strategy: {})",
                option.index,
                option.source.code,
                option.destination.code,
                option.hops,
                self.strategy
            );
            for (index, path) in option.paths.iter().enumerate() {
                if index > 0 {
                    let _ = writeln!(buffer, "\t\tOr...");
                }
                for leg in path {
                    let _ = writeln!(
                        buffer,
                        "{} ({}) --> {} ({}) - ({})",
                        leg.source.code,
                        leg.source.display_name(),
                        leg.target.code,
                        leg.target.display_name(),
                        leg.airlines.join(", ")
                    );
                }
            }
            if let Some(distance) = option.distance_km {
                let _ = writeln!(buffer, "Total distance: {distance:.0} km");
            }
        }
        buffer
    }

    fn render_rich(&self) -> String {
        let mut buffer = String::new();
        for option in &self.options {
            let _ = writeln!(
                buffer,
                "**Option {}**: _{} → {}_ ({} flights, strategy: `{}`)",
                option.index,
                option.source.display_name(),
                option.destination.display_name(),
                option.hops,
                self.strategy
            );
            for (index, path) in option.paths.iter().enumerate() {
                let hops = path
                    .iter()
                    .map(|leg| {
                        format!(
                            "`{}` → `{}` [{}]",
                            leg.source.code,
                            leg.target.code,
                            leg.airlines.join(", ")
                        )
                    })
                    .collect::<Vec<_>>()
                    .join(", ");
                let _ = writeln!(buffer, "* {:>2}. {hops}", index + 1);
            }
        }
        buffer
    }
}
