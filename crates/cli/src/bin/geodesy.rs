use std::path::PathBuf;

use anyhow::{Context, anyhow};
use clap::{Parser, Subcommand, ValueEnum};
use solar_geodesy::config::load_bodies;
use solar_geodesy::engine::sphere;
use solar_geodesy::{Coordinate, GeodesyEngine, LengthUnit, PlanetRadius, bodies};

/// Great-circle and rhumb-line calculations on a spherical body.
#[derive(Parser, Debug)]
#[command(author, version, about = "Spherical distance, bearing and horizon calculator")]
struct Cli {
    /// Body name from the catalog (defaults to Earth)
    #[arg(long, global = true)]
    body: Option<String>,

    /// Unit of every reported distance
    #[arg(long, value_enum, default_value_t = Unit::Miles, global = true)]
    unit: Unit,

    /// Body catalog: a TOML file, a directory of TOML files, or a YAML list
    #[arg(long, default_value = "configs/bodies", global = true)]
    bodies: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Haversine, equirectangular and rhumb-line distance between two points
    Distance(Pair),
    /// Initial, final and rhumb-line bearing from one point to another
    Bearing(Pair),
    /// Great-circle midpoint between two points
    Midpoint(Pair),
    /// Distance to the horizon for an observer above the surface
    Horizon {
        /// Observer height in feet (miles) or metres (km)
        #[arg(long)]
        height: f64,
    },
}

#[derive(clap::Args, Debug)]
struct Pair {
    /// Start point as LAT,LON in decimal degrees
    #[arg(long, value_parser = parse_coordinate, allow_hyphen_values = true)]
    from: Coordinate,

    /// End point as LAT,LON in decimal degrees
    #[arg(long, value_parser = parse_coordinate, allow_hyphen_values = true)]
    to: Coordinate,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum Unit {
    Miles,
    Km,
}

impl From<Unit> for LengthUnit {
    fn from(unit: Unit) -> Self {
        match unit {
            Unit::Miles => LengthUnit::Miles,
            Unit::Km => LengthUnit::Kilometers,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let unit = LengthUnit::from(cli.unit);
    let radius = resolve_radius(&cli, unit)?;
    let engine = GeodesyEngine::new(radius);
    let label = unit.label();

    match cli.command {
        Command::Distance(Pair { from, to }) => {
            print_pair(&from, &to);
            println!("Body radius     : {:.1} {}", radius.value(), label);
            println!(
                "Haversine       : {:.3} {}",
                engine.haversine_distance(&from, &to),
                label
            );
            println!(
                "Equirectangular : {:.3} {}",
                engine.equirectangular_distance(&from, &to),
                label
            );
            println!(
                "Rhumb line      : {:.3} {}",
                engine.rhumb_distance(&from, &to),
                label
            );
        }
        Command::Bearing(Pair { from, to }) => {
            print_pair(&from, &to);
            println!("Initial bearing : {:.2}°", from.bearing_to(&to));
            println!("Final bearing   : {:.2}°", sphere::final_bearing(&from, &to));
            println!("Rhumb bearing   : {:.2}°", from.rhumb_bearing_to(&to));
        }
        Command::Midpoint(Pair { from, to }) => {
            print_pair(&from, &to);
            let mid = from
                .midpoint(&to)
                .ok_or_else(|| anyhow!("midpoint is indeterminate for antipodal points"))?;
            println!("Midpoint        : {}", mid);
            println!(
                "Midpoint (DMS)  : {}, {}",
                mid.latitude_dms(),
                mid.longitude_dms()
            );
        }
        Command::Horizon { height } => {
            if !(height.is_finite() && height >= 0.0) {
                return Err(anyhow!("height must be a non-negative number, got {height}"));
            }
            println!(
                "Horizon         : {:.3} {} (observer at {} {})",
                engine.distance_to_horizon(height),
                label,
                height,
                unit.height_label()
            );
        }
    }

    Ok(())
}

fn resolve_radius(cli: &Cli, unit: LengthUnit) -> anyhow::Result<PlanetRadius> {
    let Some(name) = cli.body.as_deref() else {
        return Ok(match unit {
            LengthUnit::Miles => PlanetRadius::EARTH_IMPERIAL,
            LengthUnit::Kilometers => PlanetRadius::EARTH_METRIC,
        });
    };
    let catalog = load_bodies(&cli.bodies)
        .with_context(|| format!("loading body catalog {}", cli.bodies.display()))?;
    log::debug!("loaded {} bodies from {}", catalog.len(), cli.bodies.display());
    Ok(bodies::select(&catalog, Some(name), unit)?)
}

fn parse_coordinate(raw: &str) -> Result<Coordinate, String> {
    let (lat, lon) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected LAT,LON, got '{raw}'"))?;
    let lat: f64 = lat
        .trim()
        .parse()
        .map_err(|_| format!("invalid latitude '{}'", lat.trim()))?;
    let lon: f64 = lon
        .trim()
        .parse()
        .map_err(|_| format!("invalid longitude '{}'", lon.trim()))?;
    Coordinate::try_new(lat, lon).map_err(|err| err.to_string())
}

fn print_pair(from: &Coordinate, to: &Coordinate) {
    println!("From            : {}", from);
    println!("To              : {}", to);
}
