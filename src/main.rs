use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::PathBuf;

mod boundary;
mod config;
mod geometry;
mod screening;

use boundary::load_boundary;
use config::FileConfig;
use geometry::Polygon;
use screening::{DEFAULT_MESSAGE, Decision, Screener};

/// Screen citizen report locations against a configured service-area boundary
///
/// Examples:
///   # Check a location against a GeoJSON boundary
///   cityfence -b boundary.geojson --lat 50.1155 --lng 8.6842
///
///   # Use a config file with an inline boundary
///   cityfence --config cityfence.toml --lat 50.1155 --lng 8.6842
///
///   # Print the bounding rectangle of the configured boundary
///   cityfence -b boundary.geojson --rect
#[derive(Parser, Debug)]
#[command(name = "cityfence")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (optional, auto-searches cityfence.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Path to a GeoJSON boundary file (overrides the config file boundary)
    #[arg(short = 'b', long)]
    boundary: Option<PathBuf>,

    /// Latitude of the submitted location (use with --lng)
    #[arg(long, requires = "lng", allow_hyphen_values = true)]
    lat: Option<f64>,

    /// Longitude of the submitted location (use with --lat)
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    lng: Option<f64>,

    /// Print the bounding rectangle of the boundary and exit
    #[arg(long)]
    rect: bool,

    /// Rejection message shown for locations outside the boundary
    #[arg(short = 'm', long)]
    message: Option<String>,

    /// Reject submissions when the boundary itself is unusable
    #[arg(long)]
    strict: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let file_config = if let Some(ref config_path) = args.config {
        if config_path.exists() {
            let contents = std::fs::read_to_string(config_path)
                .context(format!("Failed to read config file: {:?}", config_path))?;
            Some(toml::from_str(&contents).context("Failed to parse config file")?)
        } else {
            bail!("Config file not found: {:?}", config_path);
        }
    } else {
        FileConfig::load()
    };

    let message = args
        .message
        .clone()
        .or_else(|| file_config.as_ref().map(|c| c.message.clone()))
        .unwrap_or_else(|| DEFAULT_MESSAGE.to_string());
    let strict = args.strict || file_config.as_ref().map(|c| c.strict).unwrap_or(false);
    let verbose = args.verbose || file_config.as_ref().map(|c| c.verbose).unwrap_or(false);

    let points = if let Some(ref path) = args.boundary {
        load_boundary(path)?
    } else if let Some(points) = file_config.as_ref().and_then(|c| c.boundary_points()) {
        points
    } else if let Some(path) = file_config.as_ref().and_then(|c| c.geojson.clone()) {
        load_boundary(&path)?
    } else {
        bail!("No boundary configured: pass --boundary or set one in cityfence.toml");
    };

    let polygon = Polygon::from_points(points);

    if verbose {
        println!(
            "Boundary: {} vertices, usable: {}",
            polygon.points().len(),
            polygon.is_valid()
        );
        if strict {
            println!("Strict mode: an unusable boundary rejects all submissions");
        }
    }

    if args.rect {
        let corners = polygon
            .rectangle_points()
            .context("Cannot compute the bounding rectangle of an empty boundary")?;
        for (lat, lng) in corners {
            println!("{:.6}, {:.6}", lat, lng);
        }
        return Ok(());
    }

    let (lat, lng) = match (args.lat, args.lng) {
        (Some(lat), Some(lng)) => (lat, lng),
        _ => bail!("Must provide --lat and --lng (or --rect to inspect the boundary)"),
    };

    let screener = Screener::new(polygon, message, strict);

    match screener.screen(lat, lng) {
        Decision::Accepted => {
            println!("accepted: ({:.6}, {:.6}) is inside the service area", lat, lng);
        }
        Decision::Rejected { message } => {
            println!("rejected: {}", message);
            std::process::exit(1);
        }
    }

    Ok(())
}
