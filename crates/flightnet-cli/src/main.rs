use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use flightnet_cli::commands::route::{handle_route_command, RouteCommandArgs};
use flightnet_cli::commands::{network, reach};
use flightnet_cli::output::{print_logo, OutputFormat};

#[derive(Parser, Debug)]
#[command(author, version, about = "Flight network route and connectivity queries")]
struct Cli {
    /// Directory holding airports.csv, airlines.csv, and flights.csv.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Suppress the banner.
    #[arg(long, global = true)]
    no_logo: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Count airports, airlines, and flights.
    Stats,
    /// Departure statistics for one airport (code, name:, city:, coords:).
    Airport {
        query: String,
    },
    /// Countries served by direct flights from any airport in a city.
    City {
        city: String,
        country: String,
    },
    /// Incoming plus outgoing flights per city.
    PerCity,
    /// Flights operated per airline.
    PerAirline,
    /// Minimum-flight trips between two airports.
    Route(RouteArgs),
    /// Destinations reachable from an airport.
    Reach {
        /// Origin airport query.
        #[arg(long = "from")]
        from: String,
        /// Maximum number of intermediate stops.
        #[arg(long)]
        stops: Option<usize>,
    },
    /// Longest minimum-flight trip in the network.
    MaxTrip,
    /// Busiest airports by traffic.
    Top {
        #[arg(long, default_value_t = 10)]
        k: usize,
    },
    /// Airports whose removal disconnects part of the network.
    Essential,
}

#[derive(Args, Debug)]
struct RouteArgs {
    /// Origin: an airport code or `code:`, `name:`, `city:<city>,<country>`,
    /// `coords:<lat>,<lon>`.
    #[arg(long = "from")]
    from: String,
    /// Destination, in the same forms as --from.
    #[arg(long = "to")]
    to: String,
    /// Restrict the trip to these airlines (repeatable).
    #[arg(long = "airline")]
    airlines: Vec<String>,
    /// Prefer one airline for the whole trip when possible.
    #[arg(long, conflicts_with = "shortest_distance")]
    fewest_airlines: bool,
    /// Keep only the option with the fewest kilometres.
    #[arg(long)]
    shortest_distance: bool,
}

impl From<RouteArgs> for RouteCommandArgs {
    fn from(args: RouteArgs) -> Self {
        Self {
            from: args.from,
            to: args.to,
            airlines: args.airlines,
            fewest_airlines: args.fewest_airlines,
            shortest_distance: args.shortest_distance,
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    if !cli.no_logo && !cli.format.is_json() {
        print_logo();
    }

    let data_dir = cli.data_dir.as_deref();
    let format = cli.format;
    match cli.command {
        Command::Stats => network::handle_stats(data_dir, format),
        Command::Airport { query } => network::handle_airport(data_dir, format, &query),
        Command::City { city, country } => network::handle_city(data_dir, format, &city, &country),
        Command::PerCity => network::handle_per_city(data_dir, format),
        Command::PerAirline => network::handle_per_airline(data_dir, format),
        Command::Route(args) => handle_route_command(data_dir, format, &args.into()),
        Command::Reach { from, stops } => reach::handle_reach_command(data_dir, format, &from, stops),
        Command::MaxTrip => network::handle_max_trip(data_dir, format),
        Command::Top { k } => network::handle_top(data_dir, format, k),
        Command::Essential => network::handle_essential(data_dir, format),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
