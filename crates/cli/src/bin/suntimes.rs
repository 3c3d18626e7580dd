use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use chrono::{NaiveDate, Utc};
use clap::Parser;
use solar_geodesy::almanac::{self, AlmanacEntry, AlmanacRequest, format_instant};
use solar_geodesy::config::load_sites;
use solar_geodesy::export::{almanac as export_almanac, summary as export_summary};
use solar_geodesy::{CalendarDate, Coordinate, SolarDay, SunZenith, sites};

/// Sunrise and sunset times, or a multi-day almanac, for one location.
#[derive(Parser, Debug)]
#[command(author, version, about = "Sunrise/sunset calculator (UTC)")]
struct Cli {
    /// Latitude in decimal degrees, north positive
    #[arg(long, requires = "lon", allow_hyphen_values = true)]
    lat: Option<f64>,

    /// Longitude in decimal degrees, east positive
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    lon: Option<f64>,

    /// Site name from the site catalog (case-insensitive)
    #[arg(long, conflicts_with_all = ["lat", "lon"])]
    site: Option<String>,

    /// Site catalog: a YAML list or TOML file(s)
    #[arg(long, default_value = "configs/sites.yaml")]
    sites: PathBuf,

    /// First date (YYYY-MM-DD); defaults to today in UTC
    #[arg(long)]
    date: Option<NaiveDate>,

    /// official, civil, nautical, or astronomical
    #[arg(long, default_value_t = SunZenith::Official)]
    zenith: SunZenith,

    /// Number of consecutive days
    #[arg(long, default_value_t = 1)]
    days: u32,

    /// Write the almanac as CSV (use '-' for stdout); a JSON summary is written alongside
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let (site_name, coordinate, elevation_m) = resolve_site(&cli)?;
    let start = CalendarDate::from(cli.date.unwrap_or_else(|| Utc::now().date_naive()));
    let request = AlmanacRequest {
        site_name,
        site: coordinate,
        start,
        days: cli.days,
        zenith: cli.zenith,
    };
    let entries = almanac::build(&request);

    let Some(output) = cli.output.as_ref() else {
        print_report(&request, elevation_m, &entries);
        return Ok(());
    };

    let mut writer = export_almanac::writer_for_path(output)
        .with_context(|| format!("opening {}", output.display()))?;
    almanac::write_csv(&mut *writer, request.zenith, &entries)?;
    writer.flush()?;

    if output.as_path() != Path::new("-") {
        let summary = almanac::summarize(&request, &entries);
        let sidecar = export_summary::sidecar_path(output);
        export_summary::write_summary(&sidecar, &summary)
            .with_context(|| format!("writing {}", sidecar.display()))?;
        println!(
            "Wrote {} days to {} (summary: {})",
            entries.len(),
            output.display(),
            sidecar.display()
        );
    }

    Ok(())
}

fn resolve_site(cli: &Cli) -> anyhow::Result<(String, Coordinate, Option<f64>)> {
    if let Some(name) = cli.site.as_deref() {
        let catalog = load_sites(&cli.sites)
            .with_context(|| format!("loading site catalog {}", cli.sites.display()))?;
        let (site, coordinate) = sites::find(&catalog, name)?;
        log::debug!("resolved site {} to {}", site.name, coordinate);
        return Ok((site.name.clone(), coordinate, site.elevation_m));
    }
    match (cli.lat, cli.lon) {
        (Some(lat), Some(lon)) => {
            let coordinate = Coordinate::try_new(lat, lon)?;
            Ok(("coordinates".to_string(), coordinate, None))
        }
        _ => bail!("either --site or both --lat and --lon are required"),
    }
}

fn print_report(request: &AlmanacRequest, elevation_m: Option<f64>, entries: &[AlmanacEntry]) {
    println!("Location        : {} {}", request.site_name, request.site);
    if let Some(elevation) = elevation_m {
        println!("Elevation       : {} m", elevation);
    }
    println!(
        "Zenith          : {} ({}°)",
        request.zenith,
        request.zenith.degrees()
    );
    for entry in entries {
        match entry.day {
            SolarDay::Regular { sunrise, sunset } => {
                let minutes = entry.day.duration().num_minutes();
                println!(
                    "{}      : sunrise {}, sunset {}, daylight {}h {:02}m",
                    entry.date,
                    format_instant(sunrise),
                    format_instant(sunset),
                    minutes / 60,
                    minutes % 60
                );
            }
            SolarDay::PolarDay => println!("{}      : polar day (sun never sets)", entry.date),
            SolarDay::PolarNight => println!("{}      : polar night (sun never rises)", entry.date),
            SolarDay::Unresolved => println!("{}      : no event within the UTC day", entry.date),
        }
    }
}
