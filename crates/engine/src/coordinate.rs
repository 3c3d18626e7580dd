//! Latitude/longitude value type and its convenience forwarders.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use geodesy_core::angles::Dms;
use thiserror::Error;

use crate::calendar::CalendarDate;
use crate::planet::GeodesyEngine;
use crate::sphere;
use crate::sun::{self, SolarDay, SunZenith};

/// A point on the sphere, in degrees.
///
/// `new` does not validate; callers keep latitude within [-90, 90] and
/// longitude within [-180, 180]. `try_new` enforces those ranges.
/// Coordinates computed by the engine (`midpoint`, `destination`) always
/// carry a longitude normalised into (-180, 180], so 180 is used rather than -180.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Error, PartialEq)]
pub enum CoordinateError {
    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),
    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Build a coordinate, rejecting non-finite or out-of-range components.
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(CoordinateError::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(CoordinateError::LongitudeOutOfRange(longitude));
        }
        Ok(Self::new(latitude, longitude))
    }

    pub fn antipode(&self) -> Self {
        sphere::antipode(self)
    }

    pub fn haversine_distance(&self, other: &Self, engine: &GeodesyEngine) -> f64 {
        engine.haversine_distance(self, other)
    }

    pub fn equirectangular_distance(&self, other: &Self, engine: &GeodesyEngine) -> f64 {
        engine.equirectangular_distance(self, other)
    }

    pub fn bearing_to(&self, other: &Self) -> f64 {
        sphere::initial_bearing(self, other)
    }

    pub fn rhumb_bearing_to(&self, other: &Self) -> f64 {
        sphere::rhumb_bearing(self, other)
    }

    /// Great-circle midpoint, `None` when `other` is the antipode.
    pub fn midpoint(&self, other: &Self) -> Option<Self> {
        sphere::midpoint(self, other)
    }

    pub fn sunrise(
        &self,
        date: impl Into<CalendarDate>,
        zenith: SunZenith,
    ) -> Option<DateTime<Utc>> {
        sun::sunrise(self, date, zenith)
    }

    pub fn sunset(
        &self,
        date: impl Into<CalendarDate>,
        zenith: SunZenith,
    ) -> Option<DateTime<Utc>> {
        sun::sunset(self, date, zenith)
    }

    pub fn solar_day(&self, date: impl Into<CalendarDate>, zenith: SunZenith) -> SolarDay {
        sun::solar_day(self, date, zenith)
    }

    pub fn day_duration(&self, date: impl Into<CalendarDate>, zenith: SunZenith) -> Duration {
        sun::day_duration(self, date, zenith)
    }

    pub fn latitude_dms(&self) -> Dms {
        Dms::from_decimal(self.latitude)
    }

    pub fn longitude_dms(&self) -> Dms {
        Dms::from_decimal(self.longitude)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from([latitude, longitude]: [f64; 2]) -> Self {
        Self::new(latitude, longitude)
    }
}

impl From<Coordinate> for (f64, f64) {
    fn from(c: Coordinate) -> Self {
        (c.latitude, c.longitude)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}
