//! Great-circle geometry on the mean-radius sphere.
//!
//! Everything here works in degrees at the API boundary and kilometres for
//! distances. Latitudes are expected in [-90, 90] and longitudes in
//! [-180, 180]; the helpers do not validate ranges.

use serde::{Deserialize, Serialize};

use overpass_core::constants::EARTH_RADIUS_KM;
use overpass_core::vector::{self, Vector3};

/// Geographic coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat_deg: f64,
    pub lon_deg: f64,
}

impl GeoPoint {
    pub fn new(lat_deg: f64, lon_deg: f64) -> Self {
        Self { lat_deg, lon_deg }
    }
}

/// Great-circle distance between two points, in kilometres.
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat_a = a.lat_deg.to_radians();
    let lat_b = b.lat_deg.to_radians();
    let d_lat = (b.lat_deg - a.lat_deg).to_radians();
    let d_lon = (b.lon_deg - a.lon_deg).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

/// Initial great-circle bearing from `a` to `b`, degrees clockwise from north
/// in [0, 360).
pub fn initial_bearing_deg(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat_a = a.lat_deg.to_radians();
    let lat_b = b.lat_deg.to_radians();
    let d_lon = (b.lon_deg - a.lon_deg).to_radians();

    let y = d_lon.sin() * lat_b.cos();
    let x = lat_a.cos() * lat_b.sin() - lat_a.sin() * lat_b.cos() * d_lon.cos();
    wrap_degrees(y.atan2(x).to_degrees())
}

/// Point reached after travelling `distance_km` along the great circle that
/// leaves `origin` with bearing `bearing_deg`.
pub fn destination_point(origin: GeoPoint, bearing_deg: f64, distance_km: f64) -> GeoPoint {
    let delta = distance_km / EARTH_RADIUS_KM;
    let theta = bearing_deg.to_radians();
    let lat1 = origin.lat_deg.to_radians();
    let lon1 = origin.lon_deg.to_radians();

    let sin_lat2 = lat1.sin() * delta.cos() + lat1.cos() * delta.sin() * theta.cos();
    let lat2 = sin_lat2.clamp(-1.0, 1.0).asin();
    let lon2 = lon1
        + (theta.sin() * delta.sin() * lat1.cos()).atan2(delta.cos() - lat1.sin() * lat2.sin());

    GeoPoint {
        lat_deg: lat2.to_degrees(),
        lon_deg: wrap_longitude(lon2.to_degrees()),
    }
}

/// Flat-map offset from `from` to `to`: x is the longitude delta (east),
/// y is the latitude delta (north), both in degrees, z is zero.
///
/// This is a local approximation, not a great-circle quantity. It is only
/// meaningful for the short offsets the intercept gates accept.
pub fn planar_offset(from: GeoPoint, to: GeoPoint) -> Vector3 {
    vector::ground(to.lon_deg - from.lon_deg, to.lat_deg - from.lat_deg)
}

/// Normalize an angle in degrees to [0, 360).
pub fn wrap_degrees(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}

/// Normalize a longitude in degrees to [-180, 180).
pub fn wrap_longitude(deg: f64) -> f64 {
    (deg + 180.0).rem_euclid(360.0) - 180.0
}
