//! Spherical geodesy and sunrise/sunset calculations.
//!
//! The algorithms live in `geodesy_engine`; this crate stitches them to the
//! body and site catalogs and to the almanac exporters so that front-ends
//! (CLI, services) share one entry point.

pub mod almanac;
pub mod bodies;
pub mod sites;

pub use geodesy_config as config;
pub use geodesy_core as primitives;
pub use geodesy_engine as engine;
pub use geodesy_export as export;

pub use geodesy_engine::{
    CalendarDate, Coordinate, CoordinateError, GeodesyEngine, LengthUnit, PlanetRadius, SolarDay,
    SunPhase, SunZenith,
};

/// Returns the version of the library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
