//! GeoJSON export (requires the "geojson" feature)

use crate::types::{CoordinateOrder, VisibilityCirclePolygon};
use serde_json::{Map, Value, json};

impl VisibilityCirclePolygon {
    /// Convert the ring to a GeoJSON `Feature` with a `Polygon` geometry
    ///
    /// Positions are always emitted as `[lon, lat]` regardless of the
    /// configured coordinate order, and the ring is closed as required by
    /// RFC 7946.
    pub fn to_geojson_feature(&self, properties: Map<String, Value>) -> Value {
        let coordinates = self.closed_pairs_in(CoordinateOrder::LonLat);

        json!({
            "type": "Feature",
            "geometry": {
                "type": "Polygon",
                "coordinates": [coordinates]
            },
            "properties": properties
        })
    }
}
