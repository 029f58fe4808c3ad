use crate::error::{Error, Result};
use crate::types::CoordinateOrder;

/// A geographic coordinate on the Earth's surface
///
/// Latitude and longitude are stored in degrees. Latitude is positive north
/// of the equator, longitude is positive east of Greenwich.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeoPoint {
    lat: f64,
    lon: f64,
}

impl GeoPoint {
    /// Create a new point without validation
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Create a new point, rejecting non-finite values and latitudes
    /// outside of [-90, 90]
    pub fn try_new(lat: f64, lon: f64) -> Result<Self> {
        let point = Self::new(lat, lon);
        if !point.is_valid() {
            return Err(Error::InvalidCenter {
                latitude: lat,
                longitude: lon,
            });
        }
        Ok(point)
    }

    /// Latitude in degrees
    pub const fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees
    pub const fn lon(&self) -> f64 {
        self.lon
    }

    /// Check that both coordinates are finite and the latitude is within
    /// [-90, 90]
    ///
    /// Longitude is not range-checked since ring points may legitimately
    /// extend past ±180°.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite() && (-90.0..=90.0).contains(&self.lat)
    }

    /// Return the same point with its longitude wrapped into [-180, 180)
    pub fn normalized(&self) -> Self {
        let lon = (self.lon + 180.0).rem_euclid(360.0) - 180.0;
        // `rem_euclid` may round up to the divisor for tiny negative inputs
        let lon = if lon >= 180.0 { lon - 360.0 } else { lon };
        Self::new(self.lat, lon)
    }

    /// Coordinate pair in the requested order
    pub fn to_pair(&self, order: CoordinateOrder) -> [f64; 2] {
        match order {
            CoordinateOrder::LatLon => [self.lat, self.lon],
            CoordinateOrder::LonLat => [self.lon, self.lat],
        }
    }
}
