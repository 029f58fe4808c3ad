use crate::types::GeoPoint;

/// Bounding box for geographic areas
///
/// Represents a rectangular geographic area defined by longitude and latitude bounds.
/// All coordinates are stored in degrees.
///
/// # Limitations
///
/// **Anti-meridian handling**: This implementation does not correctly handle areas
/// crossing the ±180° longitude line (anti-meridian). Simple min/max logic is used.
/// Visibility circles are emitted with unwrapped longitudes by default, which keeps
/// them continuous and makes min/max correct for them; rings produced with wrapped
/// longitudes that cross the anti-meridian will span nearly the entire globe instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

impl BoundingBox {
    /// Create a bounding box from a slice of points
    ///
    /// Returns `None` if the slice is empty.
    pub fn from_points(points: &[GeoPoint]) -> Option<Self> {
        let (first, rest) = points.split_first()?;

        let mut bbox = Self::from(*first);
        for &point in rest {
            bbox.extend(point);
        }
        Some(bbox)
    }

    /// Extend bounding box to include a point
    ///
    /// Grows the bounding box if necessary to encompass the given point.
    /// If the point is already inside the bbox, no change is made.
    pub fn extend(&mut self, point: GeoPoint) {
        self.west = self.west.min(point.lon());
        self.east = self.east.max(point.lon());
        self.north = self.north.max(point.lat());
        self.south = self.south.min(point.lat());
    }

    /// Check whether a point lies inside or on the edge of the box
    pub fn contains(&self, point: GeoPoint) -> bool {
        (self.west..=self.east).contains(&point.lon())
            && (self.south..=self.north).contains(&point.lat())
    }

    /// Get bounding box as (west, south, east, north) in degrees
    pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
        (self.west, self.south, self.east, self.north)
    }
}

impl From<GeoPoint> for BoundingBox {
    fn from(point: GeoPoint) -> Self {
        Self {
            west: point.lon(),
            south: point.lat(),
            east: point.lon(),
            north: point.lat(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_none, assert_some};

    #[test]
    fn test_from_point() {
        // Paris
        let point = GeoPoint::new(48.8566, 2.3522);

        let bbox = BoundingBox::from(point);

        assert_eq!(bbox.west, 2.3522);
        assert_eq!(bbox.south, 48.8566);
        assert_eq!(bbox.east, 2.3522);
        assert_eq!(bbox.north, 48.8566);
    }

    #[test]
    fn test_from_points_empty() {
        let points: Vec<GeoPoint> = vec![];
        assert_none!(BoundingBox::from_points(&points));
    }

    #[test]
    fn test_from_points_multiple() {
        let points = vec![
            GeoPoint::new(50.0, 10.0), // Center
            GeoPoint::new(55.0, 5.0),  // North + West
            GeoPoint::new(45.0, 20.0), // South + East
            GeoPoint::new(60.0, 2.0),  // North + West
        ];
        let bbox = assert_some!(BoundingBox::from_points(&points));

        assert_eq!(bbox.as_tuple(), (2.0, 45.0, 20.0, 60.0));
    }

    #[test]
    fn test_extend_multiple_directions() {
        let mut bbox = BoundingBox::from(GeoPoint::new(0.0, 0.0));

        bbox.extend(GeoPoint::new(10.0, 10.0)); // NE
        bbox.extend(GeoPoint::new(-10.0, -10.0)); // SW
        bbox.extend(GeoPoint::new(-20.0, 30.0)); // SE

        assert_eq!(bbox.as_tuple(), (-10.0, -20.0, 30.0, 10.0));
    }

    #[test]
    fn test_extend_with_point_inside_bbox() {
        let mut bbox = BoundingBox {
            west: -10.0,
            south: -10.0,
            east: 10.0,
            north: 10.0,
        };

        bbox.extend(GeoPoint::new(5.0, 5.0));

        assert_eq!(bbox.as_tuple(), (-10.0, -10.0, 10.0, 10.0));
    }

    #[test]
    fn test_contains() {
        let bbox = BoundingBox {
            west: -80.0,
            south: 20.0,
            east: -70.0,
            north: 60.0,
        };

        assert!(bbox.contains(GeoPoint::new(40.0, -75.0)));
        assert!(bbox.contains(GeoPoint::new(20.0, -80.0))); // on the edge
        assert!(!bbox.contains(GeoPoint::new(40.0, -65.0)));
        assert!(!bbox.contains(GeoPoint::new(61.0, -75.0)));
    }
}
