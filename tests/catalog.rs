use std::path::Path;

use approx::assert_relative_eq;
use solar_geodesy::bodies::{self, BodyError};
use solar_geodesy::config::{BodyConfig, SiteConfig, load_bodies, load_sites};
use solar_geodesy::sites::{self, SiteError};
use solar_geodesy::{CoordinateError, GeodesyEngine, LengthUnit, PlanetRadius};

fn shipped(relative: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(relative)
}

#[test]
fn shipped_body_catalog_matches_named_radii() {
    let catalog = load_bodies(shipped("configs/bodies")).expect("bodies");
    let names: Vec<_> = catalog.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, ["EARTH", "MARS", "MOON"]);

    let cases = [
        ("earth", PlanetRadius::EARTH_IMPERIAL, PlanetRadius::EARTH_METRIC),
        ("Moon", PlanetRadius::MOON_IMPERIAL, PlanetRadius::MOON_METRIC),
        ("MARS", PlanetRadius::MARS_IMPERIAL, PlanetRadius::MARS_METRIC),
    ];
    for (name, imperial, metric) in cases {
        assert_eq!(
            bodies::select(&catalog, Some(name), LengthUnit::Miles),
            Ok(imperial)
        );
        assert_eq!(
            bodies::select(&catalog, Some(name), LengthUnit::Kilometers),
            Ok(metric)
        );
    }
    assert_eq!(
        bodies::select(&catalog, None, LengthUnit::Miles),
        Ok(PlanetRadius::EARTH_IMPERIAL)
    );
}

#[test]
fn body_selection_errors() {
    let catalog = load_bodies(shipped("configs/bodies")).expect("bodies");
    assert_eq!(
        bodies::select(&catalog, Some("Pluto"), LengthUnit::Miles),
        Err(BodyError::NotFound("Pluto".into()))
    );
    assert_eq!(
        bodies::select(&[], None, LengthUnit::Miles),
        Err(BodyError::EmptyCatalog)
    );

    let broken = BodyConfig {
        name: "VOID".into(),
        radius_km: 0.0,
        radius_mi: None,
    };
    assert!(matches!(
        bodies::radius_from_config(&broken, LengthUnit::Kilometers),
        Err(BodyError::InvalidRadius { .. })
    ));
}

#[test]
fn derived_imperial_radius_drives_the_engine() {
    let body = BodyConfig {
        name: "EARTH".into(),
        radius_km: 6371.0,
        radius_mi: None,
    };
    let radius = bodies::radius_from_config(&body, LengthUnit::Miles).expect("radius");
    assert_eq!(radius.unit(), LengthUnit::Miles);
    assert_relative_eq!(radius.value(), 3958.76, epsilon = 0.01);

    let engine = GeodesyEngine::new(radius);
    assert_relative_eq!(
        engine.distance_to_horizon(6.0),
        GeodesyEngine::default().distance_to_horizon(6.0),
        epsilon = 1e-3
    );
}

#[test]
fn shipped_sites_resolve_case_insensitively() {
    let catalog = load_sites(shipped("configs/sites.yaml")).expect("sites");
    let (site, coordinate) = sites::find(&catalog, "new york").expect("new york");
    assert_eq!(site.name, "NEW YORK");
    assert_eq!(coordinate.latitude, 40.7128);
    assert_eq!(coordinate.longitude, -74.0060);

    assert_eq!(
        sites::find(&catalog, "Atlantis").map(|(_, c)| c),
        Err(SiteError::NotFound("Atlantis".into()))
    );
}

#[test]
fn out_of_range_site_is_rejected() {
    let catalog = vec![SiteConfig {
        name: "NOWHERE".into(),
        latitude: 91.0,
        longitude: 0.0,
        elevation_m: None,
    }];
    assert_eq!(
        sites::find(&catalog, "nowhere").map(|(_, c)| c),
        Err(SiteError::InvalidPosition {
            name: "NOWHERE".into(),
            source: CoordinateError::LatitudeOutOfRange(91.0),
        })
    );
}
