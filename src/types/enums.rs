/// Order of the two values in an emitted coordinate pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoordinateOrder {
    /// `[lat, lon]`, as used by most geocoding APIs
    LatLon,
    /// `[lon, lat]`, as used by GeoJSON and most web map libraries
    #[default]
    LonLat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_lon_lat() {
        assert_eq!(CoordinateOrder::default(), CoordinateOrder::LonLat);
    }
}
