//! Output formatting for command results.
//!
//! Route summaries come in several textual flavours; every other result is
//! either printed as aligned text or serialised to JSON.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use flightnet_lib::{
    AirportStats, CityTraffic, LegSummary, MaxTrip, Reachability, RouteRenderMode, RouteSummary,
    TrafficRank,
};

use crate::terminal::{group_thousands, ColorPalette, TerminalCaps};

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text, one flight per line.
    #[default]
    Text,
    /// Markdown-flavoured summary.
    Rich,
    /// Tagged, colored view of each trip.
    Enhanced,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    pub fn is_json(self) -> bool {
        self == OutputFormat::Json
    }

    /// Render a route summary in this format.
    pub fn render_route(self, summary: &RouteSummary) -> io::Result<()> {
        match self {
            OutputFormat::Text => print!("{}", summary.render(RouteRenderMode::PlainText)),
            OutputFormat::Rich => print!("{}", summary.render(RouteRenderMode::RichText)),
            OutputFormat::Enhanced => {
                EnhancedRenderer::new(ColorPalette::for_terminal()).render(summary)
            }
            OutputFormat::Json => render_json(summary)?,
        }
        Ok(())
    }
}

/// Print the CLI logo banner.
///
/// Unicode box drawing when the locale allows it, ASCII otherwise.
pub fn print_logo() {
    let p = ColorPalette::for_terminal();
    if TerminalCaps::from_env().unicode {
        println!(
            "{muted}╭──────────────────────────────╮{reset}\n\
             {muted}│{accent}  ✈  F L I G H T N E T       {muted}│{reset}\n\
             {muted}╰──────────────────────────────╯{reset}",
            muted = p.muted,
            accent = p.accent,
            reset = p.reset
        );
    } else {
        println!(
            "{accent}+------------------------------+\n\
             |  FLIGHTNET                   |\n\
             +------------------------------+{reset}",
            accent = p.accent,
            reset = p.reset
        );
    }
}

/// Serialise any result as pretty JSON on stdout.
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> io::Result<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer_pretty(&mut stdout, value).map_err(io::Error::other)?;
    stdout.write_all(b"\n")?;
    Ok(())
}

/// Renderer for the enhanced route format.
pub struct EnhancedRenderer {
    palette: ColorPalette,
}

impl EnhancedRenderer {
    #[must_use]
    pub const fn new(palette: ColorPalette) -> Self {
        Self { palette }
    }

    pub fn render(&self, summary: &RouteSummary) {
        let p = &self.palette;
        for option in &summary.options {
            println!(
                "Trip from {}{}{} to {}{}{} ({} flights; strategy: {}):",
                p.code,
                option.source.display_name(),
                p.reset,
                p.code,
                option.destination.display_name(),
                p.reset,
                option.hops,
                summary.strategy
            );
            for (index, path) in option.paths.iter().enumerate() {
                println!("{}Option {}{}", p.muted, index + 1, p.reset);
                self.render_path(path);
            }
            if let Some(distance) = option.distance_km {
                println!(
                    "{}Total distance: {}km{}",
                    p.muted,
                    group_thousands(distance.round() as u64),
                    p.reset
                );
            }
        }
    }

    fn render_path(&self, path: &[LegSummary]) {
        let p = &self.palette;
        for (index, leg) in path.iter().enumerate() {
            let (tag_color, tag) = if index == 0 {
                (p.tag_origin, "FROM")
            } else {
                (p.tag_stop, "VIA ")
            };
            println!(
                "  {}{}{} {}{}{} {}{}{} {}[{}]{}",
                tag_color,
                tag,
                p.reset,
                p.code,
                leg.source.code,
                p.reset,
                p.muted,
                leg.source.display_name(),
                p.reset,
                p.airline,
                leg.airlines.join(", "),
                p.reset
            );
        }
        if let Some(last) = path.last() {
            println!(
                "  {}DEST{} {}{}{} {}{}{}",
                p.tag_destination,
                p.reset,
                p.code,
                last.target.code,
                p.reset,
                p.muted,
                last.target.display_name(),
                p.reset
            );
        }
    }
}

/// Render reachability counts.
pub fn render_reachability(result: &Reachability, stops: Option<usize>) {
    let p = ColorPalette::for_terminal();
    let scope = match stops {
        Some(0) => "with direct flights".to_string(),
        Some(1) => "with at most 1 stop".to_string(),
        Some(n) => format!("with at most {n} stops"),
        None => "with any number of stops".to_string(),
    };
    println!("From {}{}{} {scope}:", p.code, result.source, p.reset);
    println!("  airports:  {}{}{}", p.count, result.airports, p.reset);
    println!("  cities:    {}{}{}", p.count, result.cities, p.reset);
    println!("  countries: {}{}{}", p.count, result.countries, p.reset);
}

/// Render per-airport statistics.
pub fn render_airport_stats(name: &str, stats: &AirportStats) {
    let p = ColorPalette::for_terminal();
    println!("{}{}{} ({name})", p.code, stats.code, p.reset);
    println!("  departures:            {}{}{}", p.count, stats.departures, p.reset);
    println!("  airlines:              {}{}{}", p.count, stats.airlines, p.reset);
    println!(
        "  destination countries: {}{}{}",
        p.count, stats.destination_countries, p.reset
    );
}

pub fn render_city_countries(city: &str, country: &str, countries: usize) {
    let p = ColorPalette::for_terminal();
    println!("{city}, {country}");
    println!("  destination countries: {}{}{}", p.count, countries, p.reset);
}

pub fn render_city_traffic(cities: &[CityTraffic]) {
    let p = ColorPalette::for_terminal();
    for entry in cities {
        println!(
            "{}, {}: {}{}{}",
            entry.city,
            entry.country,
            p.count,
            group_thousands(entry.flights as u64),
            p.reset
        );
    }
}

pub fn render_airline_traffic<'a>(airlines: impl IntoIterator<Item = (&'a String, &'a usize)>) {
    let p = ColorPalette::for_terminal();
    for (code, flights) in airlines {
        println!(
            "{}{code}{}: {}{}{}",
            p.airline,
            p.reset,
            p.count,
            group_thousands(*flights as u64),
            p.reset
        );
    }
}

pub fn render_top(ranking: &[TrafficRank]) {
    let p = ColorPalette::for_terminal();
    for entry in ranking {
        println!(
            "{:>3}. {}{}{} {}{}{} flights",
            entry.rank, p.code, entry.code, p.reset, p.count, entry.flights, p.reset
        );
    }
}

pub fn render_max_trip(trip: &MaxTrip) {
    let p = ColorPalette::for_terminal();
    if trip.pairs.is_empty() {
        println!("No flights in the network.");
        return;
    }
    println!("Longest trip: {}{}{} flights", p.count, trip.hops, p.reset);
    for (source, target) in &trip.pairs {
        println!("  {}{source}{} -> {}{target}{}", p.code, p.reset, p.code, p.reset);
    }
}

pub fn render_essential(codes: &[String]) {
    let p = ColorPalette::for_terminal();
    println!("Essential airports: {}{}{}", p.count, codes.len(), p.reset);
    for code in codes {
        println!("  {}{code}{}", p.code, p.reset);
    }
}
