//! Planet radius selection and the distance-producing engine.

use geodesy_core::constants::{
    EARTH_RADIUS_KM, EARTH_RADIUS_MI, MARS_RADIUS_KM, MARS_RADIUS_MI, MOON_RADIUS_KM,
    MOON_RADIUS_MI,
};
use geodesy_core::units::LengthUnit;

use crate::coordinate::Coordinate;
use crate::sphere;

/// Mean radius of the body distances are measured on, tagged with its unit.
///
/// Every distance an engine returns is in `unit`; nothing is converted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetRadius {
    value: f64,
    unit: LengthUnit,
}

impl PlanetRadius {
    pub const EARTH_IMPERIAL: Self = Self::new(EARTH_RADIUS_MI, LengthUnit::Miles);
    pub const EARTH_METRIC: Self = Self::new(EARTH_RADIUS_KM, LengthUnit::Kilometers);
    pub const MOON_IMPERIAL: Self = Self::new(MOON_RADIUS_MI, LengthUnit::Miles);
    pub const MOON_METRIC: Self = Self::new(MOON_RADIUS_KM, LengthUnit::Kilometers);
    pub const MARS_IMPERIAL: Self = Self::new(MARS_RADIUS_MI, LengthUnit::Miles);
    pub const MARS_METRIC: Self = Self::new(MARS_RADIUS_KM, LengthUnit::Kilometers);

    pub const fn new(value: f64, unit: LengthUnit) -> Self {
        Self { value, unit }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> LengthUnit {
        self.unit
    }
}

impl Default for PlanetRadius {
    fn default() -> Self {
        Self::EARTH_IMPERIAL
    }
}

/// Distance calculator bound to one planet radius.
///
/// The radius is read on every call, so `set_radius` takes effect for the
/// very next computation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GeodesyEngine {
    radius: PlanetRadius,
}

impl GeodesyEngine {
    pub fn new(radius: PlanetRadius) -> Self {
        Self { radius }
    }

    pub fn radius(&self) -> PlanetRadius {
        self.radius
    }

    /// Switch the target body (or unit system) for subsequent calls.
    pub fn set_radius(&mut self, radius: PlanetRadius) {
        self.radius = radius;
    }

    /// Great-circle distance using the haversine formula.
    pub fn haversine_distance(&self, first: &Coordinate, second: &Coordinate) -> f64 {
        sphere::haversine_central_angle(first, second) * self.radius.value
    }

    /// Planar approximation treating the latitude and longitude differences as
    /// the legs of a right triangle.
    ///
    /// Exact along meridians. East-west separations are not scaled by
    /// `cos(latitude)`, so the result overstates them away from the equator;
    /// within a degree of the equator it agrees with the haversine distance
    /// to better than 0.01 %.
    pub fn equirectangular_distance(&self, first: &Coordinate, second: &Coordinate) -> f64 {
        let d_lat = second.latitude - first.latitude;
        let d_lon = second.longitude - first.longitude;
        d_lat.hypot(d_lon).to_radians() * self.radius.value
    }

    /// Length of the constant-bearing path between two points.
    pub fn rhumb_distance(&self, first: &Coordinate, second: &Coordinate) -> f64 {
        sphere::rhumb_central_angle(first, second) * self.radius.value
    }

    /// Point reached by travelling `distance` from `start` on the initial `bearing` (degrees).
    pub fn destination(&self, start: &Coordinate, bearing: f64, distance: f64) -> Coordinate {
        sphere::destination_by_angle(start, bearing, distance / self.radius.value)
    }

    /// Distance to the visible horizon for an observer `height` above the surface.
    ///
    /// `height` is in feet when the radius is in miles and in metres when it is
    /// in kilometres; the result is in the radius unit.
    pub fn distance_to_horizon(&self, height: f64) -> f64 {
        let h = height / self.radius.unit.height_divisor();
        (2.0 * self.radius.value * h + h * h).sqrt()
    }
}
