//! Distances on a spherical Earth
//!
//! All functions take coordinates in degrees and return kilometers.

use crate::constants::R_EARTH;
use crate::error::{Error, Result};
use crate::types::GeoPoint;

/// Great-circle (surface arc) distance between two points
///
/// Uses the haversine formula, which stays accurate for small distances.
pub fn great_circle_distance(a: GeoPoint, b: GeoPoint, earth_radius_km: f64) -> f64 {
    let lat1 = a.lat().to_radians();
    let lat2 = b.lat().to_radians();
    let d_lat = (b.lat() - a.lat()).to_radians();
    let d_lon = (b.lon() - a.lon()).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);

    earth_radius_km * 2.0 * h.sqrt().min(1.0).asin()
}

/// Straight-line (chord) distance through the Earth between two surface points
pub fn chord_distance(a: GeoPoint, b: GeoPoint, earth_radius_km: f64) -> f64 {
    // colatitudes
    let theta1 = (90.0 - a.lat()).to_radians();
    let theta2 = (90.0 - b.lat()).to_radians();
    let phi1 = a.lon().to_radians();
    let phi2 = b.lon().to_radians();

    let cos_angle =
        theta1.sin() * theta2.sin() * (phi1 - phi2).cos() + theta1.cos() * theta2.cos();

    earth_radius_km * (2.0 - 2.0 * cos_angle).max(0.0).sqrt()
}

/// Radius of the visibility circle passing through a pass's acquisition point
///
/// Given the observer and the sub-satellite point at acquisition of signal
/// (AOS), returns the surface distance between them. Feeding this radius to
/// a [`VisibilityCircle`](crate::VisibilityCircle) centered on the observer
/// yields a ring through the AOS point.
pub fn visibility_radius(observer: GeoPoint, aos_point: GeoPoint) -> f64 {
    great_circle_distance(observer, aos_point, R_EARTH)
}

/// Surface radius of a satellite's coverage footprint
///
/// Returns the great-circle distance from the sub-satellite point to the
/// edge of the area where the satellite appears at least
/// `min_elevation_deg` above the horizon, for a satellite at `altitude_km`.
pub fn ground_range(altitude_km: f64, min_elevation_deg: f64, earth_radius_km: f64) -> Result<f64> {
    if !earth_radius_km.is_finite() || earth_radius_km <= 0.0 {
        return Err(Error::InvalidEarthRadius(earth_radius_km));
    }
    if !altitude_km.is_finite() || altitude_km <= 0.0 {
        return Err(Error::InvalidAltitude(altitude_km));
    }
    if !min_elevation_deg.is_finite() || !(0.0..90.0).contains(&min_elevation_deg) {
        return Err(Error::InvalidElevation(min_elevation_deg));
    }

    let elevation = min_elevation_deg.to_radians();
    let ratio = earth_radius_km * elevation.cos() / (earth_radius_km + altitude_km);

    // Earth central angle between sub-satellite point and footprint edge
    let central_angle = ratio.clamp(-1.0, 1.0).acos() - elevation;

    Ok(earth_radius_km * central_angle)
}
