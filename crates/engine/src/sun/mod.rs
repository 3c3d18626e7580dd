//! Sunrise, sunset, and day length from the almanac-for-computers method.
//!
//! The model works on a UTC calendar date, estimates the time of the event
//! from the observer's longitude, and refines it through the sun's mean
//! anomaly, true longitude, right ascension, and declination. Accuracy is
//! about two minutes for latitudes away from the polar circles.
//!
//! When the sun never crosses the requested zenith on a date (polar day or
//! polar night) no instant is produced; that is an ordinary outcome, not an error.

mod zenith;

pub use zenith::{SunZenith, UnknownZenith};

use chrono::{DateTime, Duration, Utc};
use geodesy_core::angles::normalize_degrees;
use geodesy_core::constants::{DEGREES_PER_HOUR, MINUTES_PER_HOUR};

use crate::calendar::CalendarDate;
use crate::coordinate::Coordinate;

/// Which horizon crossing to solve for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SunPhase {
    Sunrise,
    Sunset,
}

impl SunPhase {
    /// Rough local time of the event used to seed the day fraction.
    fn approximate_local_hour(self) -> f64 {
        match self {
            Self::Sunrise => 6.0,
            Self::Sunset => 18.0,
        }
    }
}

/// Outcome of solving both crossings for one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolarDay {
    /// Sun rises and sets. `sunset` is always after `sunrise`; when the
    /// same-date sunset lands earlier in UTC the next date's sunset is used.
    Regular {
        sunrise: DateTime<Utc>,
        sunset: DateTime<Utc>,
    },
    /// Sun stays above the zenith angle all day.
    PolarDay,
    /// Sun never climbs to the zenith angle.
    PolarNight,
    /// A crossing exists but its time could not be placed within one UTC
    /// day after a single wraparound. Only seen near the date line.
    Unresolved,
}

impl SolarDay {
    pub fn sunrise(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Regular { sunrise, .. } => Some(*sunrise),
            _ => None,
        }
    }

    pub fn sunset(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Regular { sunset, .. } => Some(*sunset),
            _ => None,
        }
    }

    /// Time between sunrise and sunset; zero whenever either is missing.
    pub fn duration(&self) -> Duration {
        match self {
            Self::Regular { sunrise, sunset } => *sunset - *sunrise,
            _ => Duration::zero(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Regular { .. } => "regular",
            Self::PolarDay => "polar_day",
            Self::PolarNight => "polar_night",
            Self::Unresolved => "unresolved",
        }
    }
}

/// Why a single crossing has no instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Absent {
    PolarDay,
    PolarNight,
    OutsideUtcDay,
}

impl From<Absent> for SolarDay {
    fn from(reason: Absent) -> Self {
        match reason {
            Absent::PolarDay => Self::PolarDay,
            Absent::PolarNight => Self::PolarNight,
            Absent::OutsideUtcDay => Self::Unresolved,
        }
    }
}

/// UTC instant of one crossing, or `None` if the sun does not cross `zenith` on `date`.
pub fn sun_event(
    coordinate: &Coordinate,
    date: impl Into<CalendarDate>,
    zenith: SunZenith,
    phase: SunPhase,
) -> Option<DateTime<Utc>> {
    solve(coordinate, &date.into(), zenith, phase).ok()
}

pub fn sunrise(
    coordinate: &Coordinate,
    date: impl Into<CalendarDate>,
    zenith: SunZenith,
) -> Option<DateTime<Utc>> {
    sun_event(coordinate, date, zenith, SunPhase::Sunrise)
}

pub fn sunset(
    coordinate: &Coordinate,
    date: impl Into<CalendarDate>,
    zenith: SunZenith,
) -> Option<DateTime<Utc>> {
    sun_event(coordinate, date, zenith, SunPhase::Sunset)
}

/// Solve both crossings for `date` and pair them.
///
/// Observers far from Greenwich can see the same-date sunset fall before the
/// sunrise in UTC; the sunset of the following date is paired instead.
pub fn solar_day(
    coordinate: &Coordinate,
    date: impl Into<CalendarDate>,
    zenith: SunZenith,
) -> SolarDay {
    let date = date.into();
    let sunrise = match solve(coordinate, &date, zenith, SunPhase::Sunrise) {
        Ok(instant) => instant,
        Err(reason) => return reason.into(),
    };
    let mut sunset = match solve(coordinate, &date, zenith, SunPhase::Sunset) {
        Ok(instant) => instant,
        Err(reason) => return reason.into(),
    };

    if sunrise > sunset {
        let Some(next) = date.next_day() else {
            return SolarDay::Unresolved;
        };
        sunset = match solve(coordinate, &next, zenith, SunPhase::Sunset) {
            Ok(instant) => instant,
            Err(reason) => return reason.into(),
        };
    }

    SolarDay::Regular { sunrise, sunset }
}

/// Length of daylight for `date`; zero for polar day and polar night.
pub fn day_duration(
    coordinate: &Coordinate,
    date: impl Into<CalendarDate>,
    zenith: SunZenith,
) -> Duration {
    solar_day(coordinate, date, zenith).duration()
}

fn solve(
    coordinate: &Coordinate,
    date: &CalendarDate,
    zenith: SunZenith,
    phase: SunPhase,
) -> Result<DateTime<Utc>, Absent> {
    let ut = utc_hours(coordinate, date, zenith, phase)?;
    let hour = ut.floor();
    let minute = ((ut - hour) * MINUTES_PER_HOUR).floor();
    date.at_utc(hour as u32, minute as u32).ok_or_else(|| {
        log::warn!("{phase:?} at {coordinate} on {date} has unplaceable UT {ut:.4} h");
        Absent::OutsideUtcDay
    })
}

/// Event time in fractional UTC hours. `Ok` values lie in `[0, 24)`.
fn utc_hours(
    coordinate: &Coordinate,
    date: &CalendarDate,
    zenith: SunZenith,
    phase: SunPhase,
) -> Result<f64, Absent> {
    let day = date.day_number() as f64;
    let long_hour = coordinate.longitude / DEGREES_PER_HOUR;
    let t = day + (phase.approximate_local_hour() - long_hour) / 24.0;

    let mean_anomaly = 0.9856 * t - 3.289;
    let m = mean_anomaly.to_radians();
    let true_longitude =
        normalize_degrees(mean_anomaly + 1.916 * m.sin() + 0.020 * (2.0 * m).sin() + 282.634);
    let right_ascension = right_ascension_hours(true_longitude);

    let sin_dec = 0.39782 * true_longitude.to_radians().sin();
    let cos_dec = sin_dec.asin().cos();

    let lat = coordinate.latitude.to_radians();
    let cos_h =
        (zenith.degrees().to_radians().cos() - sin_dec * lat.sin()) / (cos_dec * lat.cos());
    if cos_h > 1.0 {
        log::debug!(
            "{phase:?} at {coordinate} on {date}: polar night for {zenith} (cos H = {cos_h:.5})"
        );
        return Err(Absent::PolarNight);
    }
    if cos_h < -1.0 {
        log::debug!(
            "{phase:?} at {coordinate} on {date}: polar day for {zenith} (cos H = {cos_h:.5})"
        );
        return Err(Absent::PolarDay);
    }

    // the rising sun approaches from the opposite side of the meridian
    let hour_angle_deg = match phase {
        SunPhase::Sunrise => 360.0 - cos_h.acos().to_degrees(),
        SunPhase::Sunset => cos_h.acos().to_degrees(),
    };
    let hour_angle = hour_angle_deg / DEGREES_PER_HOUR;

    let local_mean_time = hour_angle + right_ascension - 0.06571 * t - 6.622;
    let mut ut = local_mean_time - long_hour;
    // a single wraparound only
    if ut < 0.0 {
        ut += 24.0;
    } else if ut >= 24.0 {
        ut -= 24.0;
    }
    log::trace!("{phase:?} at {coordinate} on {date}: t = {t:.4}, UT = {ut:.4} h");

    if (0.0..24.0).contains(&ut) {
        Ok(ut)
    } else {
        log::warn!(
            "{phase:?} at {coordinate} on {date} needs more than one wraparound (UT {ut:.4} h)"
        );
        Err(Absent::OutsideUtcDay)
    }
}

/// Right ascension in hours, placed in the same 90° quadrant as the true longitude.
fn right_ascension_hours(true_longitude: f64) -> f64 {
    let ra = normalize_degrees(
        (0.91764 * true_longitude.to_radians().tan())
            .atan()
            .to_degrees(),
    );
    let l_quadrant = (true_longitude / 90.0).floor() * 90.0;
    let ra_quadrant = (ra / 90.0).floor() * 90.0;
    (ra + l_quadrant - ra_quadrant) / DEGREES_PER_HOUR
}
