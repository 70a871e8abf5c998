//! Command-line lookup of the trips home.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use home_server::domain::{Coordinate, TripRequest};
use home_server::entur::{DEFAULT_BASE_URL, EnturClient, EnturConfig};
use home_server::lookup::HomeTime;
use home_server::query::{DEFAULT_TIMEZONE, QueryBuilder};

#[derive(Debug, Parser)]
#[command(name = "home-cli")]
#[command(about = "Ask the journey planner when you will get home")]
struct Cli {
    /// Longitude for starting location
    #[arg(long = "from-long", allow_hyphen_values = true)]
    from_longitude: String,

    /// Latitude for starting location
    #[arg(long = "from-lat", allow_hyphen_values = true)]
    from_latitude: String,

    /// Longitude for destination location
    #[arg(long = "to-long", allow_hyphen_values = true)]
    to_longitude: String,

    /// Latitude for destination location
    #[arg(long = "to-lat", allow_hyphen_values = true)]
    to_latitude: String,

    /// Value to be sent in the ET-Client-Name header
    #[arg(long, env = "CLIENT_NAME")]
    client_name: String,

    /// Depart now instead of at the pinned debug time
    #[arg(long)]
    live: bool,

    /// Zone for departure and display times
    #[arg(long, env = "HOME_TIMEZONE", default_value = DEFAULT_TIMEZONE)]
    timezone: String,

    /// Journey planner GraphQL endpoint
    #[arg(long, env = "ENTUR_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let request = TripRequest::new(
        Coordinate::new(cli.from_longitude, cli.from_latitude),
        Coordinate::new(cli.to_longitude, cli.to_latitude),
        !cli.live,
    );
    request.validate()?;

    let planner = EnturClient::new(EnturConfig::new(cli.client_name).with_base_url(cli.base_url))?;
    let home = HomeTime::new(QueryBuilder::new(cli.timezone), planner);

    let summary = home.lookup(&request).await?;
    println!("{}", summary.sms);
    println!();
    println!("Next trip:");
    println!("{}", summary.next_trip);
    println!("All trips:");
    print!("{}", summary.all_trips);

    Ok(())
}
