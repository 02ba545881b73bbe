use geo::{coord, Coord, Intersects, Rect};

use crate::models::GeoPoint;

/// Earth's radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Slack for distances compared after rounding to 0.1 km
const ROUNDING_MARGIN_KM: f64 = 0.05;

/// Great-circle distance between two points in kilometers, unrounded
///
/// # Arguments
/// * `lat1` - Latitude of first point in degrees
/// * `lng1` - Longitude of first point in degrees
/// * `lat2` - Latitude of second point in degrees
/// * `lng2` - Longitude of second point in degrees
#[inline]
pub fn haversine_distance(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lng = (lng2 - lng1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    // Clamp guards against a drifting a > 1 for antipodal points
    let c = 2.0 * a.sqrt().min(1.0).asin();

    EARTH_RADIUS_KM * c
}

/// Distance in kilometers rounded to one decimal place
///
/// Returns `f64::INFINITY` when any coordinate is not finite, so that
/// unknown locations sort after every real distance.
pub fn get_distance_km(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    if !(lat1.is_finite() && lng1.is_finite() && lat2.is_finite() && lng2.is_finite()) {
        return f64::INFINITY;
    }

    let km = haversine_distance(lat1, lng1, lat2, lng2);
    (km * 10.0).round() / 10.0
}

/// Point overload of [`get_distance_km`]
#[inline]
pub fn distance_between(a: GeoPoint, b: GeoPoint) -> f64 {
    get_distance_km(a.lat, a.lng, b.lat, b.lng)
}

/// Whether `point` lies within `radius_km` of `center`
pub fn is_within_km(center: GeoPoint, point: GeoPoint, radius_km: f64) -> bool {
    distance_between(center, point) <= radius_km
}

/// Bounding box enclosing every point [`is_within_km`] accepts for `radius_km`
///
/// Much cheaper than haversine for pre-filtering. The longitude span uses
/// the exact spread of a spherical cap, `asin(sin(d) / cos(lat))`, so the
/// box never cuts into the circle.
///
/// Returns `None` when the box would reach a pole or cross the
/// antimeridian; a single `Rect` cannot express either, so callers should
/// fall back to the exact distance.
pub fn calculate_bounding_box(center: GeoPoint, radius_km: f64) -> Option<Rect<f64>> {
    let angular = (radius_km + ROUNDING_MARGIN_KM) / EARTH_RADIUS_KM;
    let lat_rad = center.lat.to_radians();

    if angular >= std::f64::consts::FRAC_PI_2 - lat_rad.abs() {
        return None;
    }

    let lat_delta = angular.to_degrees();
    let lng_delta = (angular.sin() / lat_rad.cos()).asin().to_degrees();

    let (min_lng, max_lng) = (center.lng - lng_delta, center.lng + lng_delta);
    if min_lng < -180.0 || max_lng > 180.0 {
        return None;
    }

    Some(Rect::new(
        coord! { x: min_lng, y: center.lat - lat_delta },
        coord! { x: max_lng, y: center.lat + lat_delta },
    ))
}

/// Check if a point is within a bounding box (edges included)
#[inline]
pub fn is_within_bounding_box(point: GeoPoint, bbox: &Rect<f64>) -> bool {
    bbox.intersects(&Coord::from(point))
}
