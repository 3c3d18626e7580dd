//! Multi-day sunrise/sunset tables and their CSV/JSON export.

use std::io::{self, Write};

use chrono::{DateTime, SecondsFormat, Utc};
use geodesy_engine::{CalendarDate, Coordinate, SolarDay, SunZenith, sun};
use geodesy_export::almanac::{Record, write_header};
use geodesy_export::summary::AlmanacSummary;

/// Solar day for one calendar date of an almanac.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlmanacEntry {
    pub date: CalendarDate,
    pub day: SolarDay,
}

impl AlmanacEntry {
    pub fn day_length_hours(&self) -> f64 {
        self.day.duration().num_seconds() as f64 / 3_600.0
    }
}

/// Request describing which site, dates, and zenith to tabulate.
#[derive(Debug, Clone)]
pub struct AlmanacRequest {
    pub site_name: String,
    pub site: Coordinate,
    pub start: CalendarDate,
    pub days: u32,
    pub zenith: SunZenith,
}

/// Solve one solar day per consecutive date starting at `request.start`.
///
/// Stops early if the calendar runs out of representable dates.
pub fn build(request: &AlmanacRequest) -> Vec<AlmanacEntry> {
    let mut entries = Vec::new();
    let mut date = Some(request.start);
    for _ in 0..request.days {
        let Some(current) = date else {
            break;
        };
        entries.push(AlmanacEntry {
            date: current,
            day: sun::solar_day(&request.site, current, request.zenith),
        });
        date = current.next_day();
    }
    log::debug!(
        "almanac for {} at {}: {} days from {}",
        request.site_name,
        request.site,
        entries.len(),
        request.start
    );
    entries
}

/// Write the header and one CSV row per entry.
pub fn write_csv(
    writer: &mut dyn Write,
    zenith: SunZenith,
    entries: &[AlmanacEntry],
) -> io::Result<()> {
    write_header(writer)?;
    for entry in entries {
        let date = entry.date.to_string();
        let sunrise = entry.day.sunrise().map(format_instant);
        let sunset = entry.day.sunset().map(format_instant);
        Record {
            date: &date,
            zenith: zenith.name(),
            sunrise_utc: sunrise.as_deref(),
            sunset_utc: sunset.as_deref(),
            day_length_hours: entry.day_length_hours(),
            condition: entry.day.label(),
        }
        .write_to(writer)?;
    }
    Ok(())
}

/// Aggregate daylight statistics; longest/shortest consider regular days only.
pub fn summarize(request: &AlmanacRequest, entries: &[AlmanacEntry]) -> AlmanacSummary {
    let count = |wanted: fn(&SolarDay) -> bool| entries.iter().filter(|e| wanted(&e.day)).count();
    let regular: Vec<f64> = entries
        .iter()
        .filter(|e| matches!(e.day, SolarDay::Regular { .. }))
        .map(AlmanacEntry::day_length_hours)
        .collect();

    AlmanacSummary {
        site: request.site_name.clone(),
        latitude: request.site.latitude,
        longitude: request.site.longitude,
        zenith: request.zenith.name().to_string(),
        first_date: request.start.to_string(),
        days: entries.len(),
        regular_days: regular.len(),
        polar_days: count(|d| matches!(d, SolarDay::PolarDay)),
        polar_nights: count(|d| matches!(d, SolarDay::PolarNight)),
        unresolved_days: count(|d| matches!(d, SolarDay::Unresolved)),
        total_daylight_hours: regular.iter().sum(),
        longest_day_hours: regular.iter().copied().fold(0.0, f64::max),
        shortest_day_hours: regular.iter().copied().reduce(f64::min).unwrap_or(0.0),
    }
}

/// RFC 3339 instant with whole seconds, e.g. `2023-06-21T09:24:00Z`.
pub fn format_instant(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Secs, true)
}
