//! Selecting a planet radius from the body catalog.

use geodesy_config::BodyConfig;
use geodesy_engine::{LengthUnit, PlanetRadius};
use thiserror::Error;

/// Errors surfaced when selecting or converting bodies.
#[derive(Debug, Error, PartialEq)]
pub enum BodyError {
    #[error("body '{0}' not found in catalog")]
    NotFound(String),
    #[error("body catalog is empty")]
    EmptyCatalog,
    #[error("body '{name}' has a non-positive radius ({radius})")]
    InvalidRadius { name: String, radius: f64 },
}

/// Convert a catalog entry into a radius in the requested unit.
pub fn radius_from_config(
    config: &BodyConfig,
    unit: LengthUnit,
) -> Result<PlanetRadius, BodyError> {
    let value = match unit {
        LengthUnit::Miles => config.radius_mi(),
        LengthUnit::Kilometers => config.radius_km,
    };
    if !(value.is_finite() && value > 0.0) {
        return Err(BodyError::InvalidRadius {
            name: config.name.clone(),
            radius: value,
        });
    }
    Ok(PlanetRadius::new(value, unit))
}

/// Select a body by case-insensitive name, defaulting to the first catalog entry.
pub fn select(
    configs: &[BodyConfig],
    requested: Option<&str>,
    unit: LengthUnit,
) -> Result<PlanetRadius, BodyError> {
    if configs.is_empty() {
        return Err(BodyError::EmptyCatalog);
    }

    let chosen = if let Some(name) = requested {
        let upper = name.to_uppercase();
        configs
            .iter()
            .find(|cfg| cfg.name.to_uppercase() == upper)
            .ok_or_else(|| BodyError::NotFound(name.to_string()))?
    } else {
        &configs[0]
    };

    radius_from_config(chosen, unit)
}
