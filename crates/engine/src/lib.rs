//! Spherical geodesy and sunrise/sunset algorithms.
//!
//! Distances scale with the [`PlanetRadius`] held by a [`GeodesyEngine`];
//! bearings, midpoints, and the solar algorithm are radius-independent and
//! exposed as free functions as well as [`Coordinate`] convenience methods.

pub mod calendar;
pub mod coordinate;
pub mod planet;
pub mod sphere;
pub mod sun;

pub use calendar::CalendarDate;
pub use coordinate::{Coordinate, CoordinateError};
pub use planet::{GeodesyEngine, PlanetRadius};
pub use sun::{SolarDay, SunPhase, SunZenith};

pub use geodesy_core::units::LengthUnit;
