//! Resolving named observer sites into coordinates.

use geodesy_config::SiteConfig;
use geodesy_engine::{Coordinate, CoordinateError};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SiteError {
    #[error("site '{0}' not found in catalog")]
    NotFound(String),
    #[error("site '{name}' has an invalid position: {source}")]
    InvalidPosition {
        name: String,
        #[source]
        source: CoordinateError,
    },
}

/// Validated coordinate of a catalog site.
pub fn coordinate_of(site: &SiteConfig) -> Result<Coordinate, SiteError> {
    Coordinate::try_new(site.latitude, site.longitude).map_err(|source| {
        SiteError::InvalidPosition {
            name: site.name.clone(),
            source,
        }
    })
}

/// Find a site by case-insensitive name.
pub fn find<'a>(
    sites: &'a [SiteConfig],
    name: &str,
) -> Result<(&'a SiteConfig, Coordinate), SiteError> {
    let upper = name.to_uppercase();
    let site = sites
        .iter()
        .find(|s| s.name.to_uppercase() == upper)
        .ok_or_else(|| SiteError::NotFound(name.to_string()))?;
    Ok((site, coordinate_of(site)?))
}
