//! Radius-independent spherical trigonometry: central angles, bearings,
//! midpoint, antipode, and the direct problem.
//!
//! All angles in and out are degrees; central angles are radians so that
//! multiplying by a radius yields a distance.

use std::f64::consts::{FRAC_PI_4, PI};

use geodesy_core::angles::{normalize_degrees, normalize_longitude};
use geodesy_core::vector;

use crate::coordinate::Coordinate;

/// Below this norm the summed unit vectors of two points are treated as cancelling.
const ANTIPODAL_EPSILON: f64 = 1e-12;

/// Haversine central angle between two points (radians).
pub fn haversine_central_angle(first: &Coordinate, second: &Coordinate) -> f64 {
    let lat1 = first.latitude.to_radians();
    let lat2 = second.latitude.to_radians();
    let sin_dlat_half = ((lat2 - lat1) * 0.5).sin();
    let sin_dlon_half = ((second.longitude - first.longitude).to_radians() * 0.5).sin();

    let a = sin_dlat_half * sin_dlat_half + lat1.cos() * lat2.cos() * sin_dlon_half * sin_dlon_half;
    // rounding can push `a` a hair past 1 for near-antipodal points
    let a = a.clamp(0.0, 1.0);
    2.0 * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Forward azimuth from `first` towards `second`, in `[0, 360)`.
///
/// Identical points have no defined direction; they yield 0.
pub fn initial_bearing(first: &Coordinate, second: &Coordinate) -> f64 {
    if first == second {
        return 0.0;
    }
    let lat1 = first.latitude.to_radians();
    let lat2 = second.latitude.to_radians();
    let d_lon = (second.longitude - first.longitude).to_radians();

    let y = d_lon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();
    wrap_bearing(y.atan2(x).to_degrees())
}

/// Azimuth on arrival at `second` when travelling the great circle from `first`.
pub fn final_bearing(first: &Coordinate, second: &Coordinate) -> f64 {
    if first == second {
        return 0.0;
    }
    wrap_bearing(initial_bearing(second, first) + 180.0)
}

/// Constant bearing of the loxodrome from `first` to `second`, in `[0, 360)`.
///
/// Uses the Mercator stretched-latitude difference and crosses the
/// antimeridian when that is the shorter way round.
pub fn rhumb_bearing(first: &Coordinate, second: &Coordinate) -> f64 {
    if first == second {
        return 0.0;
    }
    let d_psi = stretched_latitude_difference(first, second);
    let d_lon = shortest_longitude_delta(first, second);
    wrap_bearing(d_lon.atan2(d_psi).to_degrees())
}

/// Central angle along the loxodrome from `first` to `second` (radians).
pub fn rhumb_central_angle(first: &Coordinate, second: &Coordinate) -> f64 {
    let lat1 = first.latitude.to_radians();
    let d_lat = (second.latitude - first.latitude).to_radians();
    let d_psi = stretched_latitude_difference(first, second);
    let d_lon = shortest_longitude_delta(first, second);

    // east-west lines have no stretched-latitude change; fall back to the parallel's scale
    let q = if d_psi.abs() > 1e-12 {
        d_lat / d_psi
    } else {
        lat1.cos()
    };
    (d_lat * d_lat + q * q * d_lon * d_lon).sqrt()
}

/// Great-circle midpoint of two points.
///
/// Antipodal points are joined by infinitely many great circles, so the
/// midpoint is indeterminate and `None` is returned.
pub fn midpoint(first: &Coordinate, second: &Coordinate) -> Option<Coordinate> {
    let lat1 = first.latitude.to_radians();
    let lon1 = first.longitude.to_radians();
    let lat2 = second.latitude.to_radians();
    let d_lon = (second.longitude - first.longitude).to_radians();

    let bx = lat2.cos() * d_lon.cos();
    let by = lat2.cos() * d_lon.sin();
    // sum of both unit vectors in a frame rotated so that `first` has longitude 0
    let sum = [lat1.cos() + bx, by, lat1.sin() + lat2.sin()];
    if vector::norm(&sum) < ANTIPODAL_EPSILON {
        log::debug!("midpoint of antipodal points {first} and {second} is indeterminate");
        return None;
    }

    let lat = sum[2].atan2(sum[0].hypot(sum[1]));
    let lon = lon1 + sum[1].atan2(sum[0]);
    Some(Coordinate::new(
        lat.to_degrees(),
        normalize_longitude(lon.to_degrees()),
    ))
}

/// Mirror of `coordinate` through the centre of the latitude/longitude grid:
/// both components are negated.
///
/// This reflects longitude through the prime meridian instead of rotating it
/// by 180°, so it is an exact involution with no rounding.
pub fn antipode(coordinate: &Coordinate) -> Coordinate {
    Coordinate::new(-coordinate.latitude, -coordinate.longitude)
}

/// Point reached from `start` along the initial `bearing` (degrees) after sweeping `angle` radians.
pub fn destination_by_angle(start: &Coordinate, bearing: f64, angle: f64) -> Coordinate {
    let lat1 = start.latitude.to_radians();
    let lon1 = start.longitude.to_radians();
    let theta = bearing.to_radians();

    let sin_lat2 = lat1.sin() * angle.cos() + lat1.cos() * angle.sin() * theta.cos();
    let lat2 = sin_lat2.clamp(-1.0, 1.0).asin();
    let y = theta.sin() * angle.sin() * lat1.cos();
    let x = angle.cos() - lat1.sin() * sin_lat2;
    let lon2 = lon1 + y.atan2(x);

    Coordinate::new(lat2.to_degrees(), normalize_longitude(lon2.to_degrees()))
}

fn stretched_latitude_difference(first: &Coordinate, second: &Coordinate) -> f64 {
    // equal latitudes include both points on the south pole, where the ratio is 0/0
    if first.latitude == second.latitude {
        return 0.0;
    }
    let lat1 = first.latitude.to_radians();
    let lat2 = second.latitude.to_radians();
    ((FRAC_PI_4 + lat2 * 0.5).tan() / (FRAC_PI_4 + lat1 * 0.5).tan()).ln()
}

fn shortest_longitude_delta(first: &Coordinate, second: &Coordinate) -> f64 {
    let d_lon = (second.longitude - first.longitude).to_radians();
    if d_lon > PI {
        d_lon - 2.0 * PI
    } else if d_lon < -PI {
        d_lon + 2.0 * PI
    } else {
        d_lon
    }
}

fn wrap_bearing(deg: f64) -> f64 {
    normalize_degrees(deg + 360.0)
}
