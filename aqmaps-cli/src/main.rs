//! aqmaps: flies the air-quality drone over one day's sensor map.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use aqmaps_cli::{
    AppConfig, DirectorySource, HttpSource, MapSource, MissionDate, MissionRequest, Result,
    run_mission, summary,
};
use aqmaps_core::Coordinate;
use clap::Parser;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "aqmaps", version, about, allow_negative_numbers = true)]
struct Args {
    day: u8,
    month: u8,
    year: u16,
    /// Start latitude
    lat: f64,
    /// Start longitude
    lng: f64,
    /// Seed for the drone's random choices
    seed: u64,
    /// Port of the map web server
    port: u16,

    /// Map server host, overriding the config file
    #[arg(long)]
    host: Option<String>,

    /// Read map data from a local mirror instead of the web server
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Configuration file (default: aqmaps.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory for output files
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Also render the flight as a PNG image
    #[arg(long)]
    png: bool,
}

fn run(args: Args) -> Result<()> {
    let mut config = AppConfig::discover(args.config.as_deref())?;
    if let Some(host) = args.host {
        config.source.host = host;
    }
    if let Some(dir) = args.data_dir {
        config.source.data_dir = Some(dir);
    }
    if let Some(dir) = args.output_dir {
        config.output.dir = dir;
    }
    config.output.png |= args.png;

    let request = MissionRequest {
        date: MissionDate::new(args.day, args.month, args.year)?,
        start: Coordinate::new(args.lng, args.lat),
        seed: args.seed,
    };

    let source: Box<dyn MapSource> = match &config.source.data_dir {
        Some(dir) => {
            info!("Reading map data from {:?}", dir);
            Box::new(DirectorySource::new(dir))
        }
        None => {
            let timeout = Duration::from_secs(config.source.timeout_secs);
            let source = HttpSource::new(&config.source.host, args.port, timeout)?;
            info!("Fetching map data from {}", source.base_url());
            Box::new(source)
        }
    };

    let (report, paths) = run_mission(source.as_ref(), &request, &config)?;
    let written = [&paths.readings, &paths.flightpath, &paths.report]
        .into_iter()
        .chain(paths.flight_map.as_ref());
    for path in written {
        println!("wrote {}", path.display());
    }
    println!("{}", summary(&report));
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("aqmaps=info")),
        )
        .init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
