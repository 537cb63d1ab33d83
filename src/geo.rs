//! Geodesic helpers used by the path aggregator.
//!
//! Distances assume a perfectly spherical Earth, which is close enough for the
//! short hops between consecutive GPS samples.

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance in meters between two `(lat, lon)` pairs given in degrees.
pub fn haversine(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let d_phi = (lat2 - lat1).to_radians();
    let d_lambda = (lon2 - lon1).to_radians();

    let a = (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}

/// Line-of-travel distance: horizontal great-circle distance combined with the
/// absolute elevation delta.
pub fn distance_3d(lat1: f64, lon1: f64, ele1: f64, lat2: f64, lon2: f64, ele2: f64) -> f64 {
    let horizontal = haversine(lat1, lon1, lat2, lon2);
    let vertical = (ele2 - ele1).abs();
    horizontal.hypot(vertical)
}
