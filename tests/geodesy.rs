use approx::assert_relative_eq;
use solar_geodesy::primitives::angles::{Dms, dms_to_decimal};
use solar_geodesy::{Coordinate, GeodesyEngine, LengthUnit, PlanetRadius};

const NEW_YORK: Coordinate = Coordinate::new(40.7128, -74.0060);
const LONDON: Coordinate = Coordinate::new(51.5074, -0.1278);

fn sample_points() -> Vec<Coordinate> {
    vec![
        NEW_YORK,
        LONDON,
        Coordinate::new(-33.8688, 151.2093),
        Coordinate::new(35.6762, 139.6503),
        Coordinate::new(0.0, 0.0),
        Coordinate::new(89.5, -179.9),
        Coordinate::new(-0.1807, -78.4678),
        Coordinate::new(-90.0, 0.0),
        Coordinate::new(-90.0, 10.0),
        Coordinate::new(90.0, 45.0),
    ]
}

#[test]
fn new_york_to_london_in_both_unit_systems() {
    let miles = GeodesyEngine::default();
    let km = GeodesyEngine::new(PlanetRadius::EARTH_METRIC);
    assert_relative_eq!(NEW_YORK.haversine_distance(&LONDON, &miles), 3461.2, epsilon = 0.5);
    assert_relative_eq!(NEW_YORK.haversine_distance(&LONDON, &km), 5570.2, epsilon = 0.5);
}

#[test]
fn haversine_is_symmetric_and_zero_on_identity() {
    let engine = GeodesyEngine::default();
    for a in sample_points() {
        assert_eq!(engine.haversine_distance(&a, &a), 0.0);
        for b in sample_points() {
            assert_relative_eq!(
                engine.haversine_distance(&a, &b),
                engine.haversine_distance(&b, &a),
                epsilon = 1e-9
            );
        }
    }
}

#[test]
fn equirectangular_tracks_haversine_for_short_hops_near_the_equator() {
    let engine = GeodesyEngine::new(PlanetRadius::EARTH_METRIC);
    let origin = Coordinate::new(0.0, 0.0);
    for (dlat, dlon) in [(0.5, 0.5), (0.9, 0.1), (-0.3, 0.7)] {
        let other = Coordinate::new(dlat, dlon);
        let h = engine.haversine_distance(&origin, &other);
        let e = engine.equirectangular_distance(&origin, &other);
        assert!(((h - e) / h).abs() < 1e-4, "{h} vs {e}");
    }
}

#[test]
fn distances_scale_with_the_configured_radius() {
    let mut engine = GeodesyEngine::default();
    let before = engine.haversine_distance(&NEW_YORK, &LONDON);
    let rhumb_before = engine.rhumb_distance(&NEW_YORK, &LONDON);
    let doubled = 2.0 * PlanetRadius::EARTH_IMPERIAL.value();
    engine.set_radius(PlanetRadius::new(doubled, LengthUnit::Miles));
    let after = engine.haversine_distance(&NEW_YORK, &LONDON);
    assert_relative_eq!(after, 2.0 * before, epsilon = 1e-9);
    let rhumb_after = engine.rhumb_distance(&NEW_YORK, &LONDON);
    assert_relative_eq!(rhumb_after, 2.0 * rhumb_before, epsilon = 1e-9);

    engine.set_radius(PlanetRadius::MOON_METRIC);
    let ratio = engine.haversine_distance(&NEW_YORK, &LONDON) / before;
    assert_relative_eq!(ratio, 1737.4 / 3958.8, epsilon = 1e-12);
}

#[test]
fn rhumb_line_is_never_shorter_than_the_great_circle() {
    let engine = GeodesyEngine::default();
    for a in sample_points() {
        for b in sample_points() {
            let gc = engine.haversine_distance(&a, &b);
            let rhumb = engine.rhumb_distance(&a, &b);
            assert!(rhumb + 1e-6 >= gc, "{a} -> {b}: rhumb {rhumb} < gc {gc}");
        }
    }
}

#[test]
fn bearings_stay_in_range() {
    for a in sample_points() {
        for b in sample_points() {
            for bearing in [a.bearing_to(&b), a.rhumb_bearing_to(&b)] {
                assert!((0.0..360.0).contains(&bearing), "{a} -> {b}: {bearing}");
            }
        }
    }
    assert_eq!(LONDON.bearing_to(&LONDON), 0.0);
    assert_eq!(LONDON.rhumb_bearing_to(&LONDON), 0.0);
}

#[test]
fn midpoint_lies_halfway_along_the_great_circle() {
    let engine = GeodesyEngine::default();
    let mid = NEW_YORK.midpoint(&LONDON).expect("not antipodal");
    let total = engine.haversine_distance(&NEW_YORK, &LONDON);
    let first_leg = engine.haversine_distance(&NEW_YORK, &mid);
    let second_leg = engine.haversine_distance(&mid, &LONDON);
    assert_relative_eq!(first_leg, total / 2.0, epsilon = 1e-6);
    assert_relative_eq!(second_leg, total / 2.0, epsilon = 1e-6);
}

#[test]
fn antipode_is_an_involution() {
    for point in sample_points() {
        let back = point.antipode().antipode();
        assert_eq!(back, point);
    }
}

#[test]
fn horizon_follows_the_radius_unit() {
    let imperial = GeodesyEngine::default();
    let metric = GeodesyEngine::new(PlanetRadius::EARTH_METRIC);
    assert_relative_eq!(imperial.distance_to_horizon(6.0), 3.0, epsilon = 0.01);
    assert_relative_eq!(metric.distance_to_horizon(1.8), 4.79, epsilon = 0.01);
    assert_eq!(metric.distance_to_horizon(0.0), 0.0);
}

#[test]
fn dms_round_trip_through_coordinates() {
    let lon = NEW_YORK.longitude_dms();
    assert!(lon.negative);
    assert_eq!((lon.degrees, lon.minutes), (74, 0));
    assert_relative_eq!(lon.seconds, 21.6, epsilon = 1e-6);
    assert_eq!(lon.to_string(), "-74°00'21.60\"");
    assert_relative_eq!(lon.to_decimal(), -74.0060, epsilon = 1e-9);

    for value in [0.0, 12.5, 51.5074, -33.8688, 179.999_999, -0.000_1] {
        assert_relative_eq!(Dms::from_decimal(value).to_decimal(), value, epsilon = 1e-9);
    }
    assert_relative_eq!(dms_to_decimal(51.0, 30.0, 26.64), 51.5074, epsilon = 1e-9);
}
