use crate::types::{BoundingBox, CoordinateOrder, GeoPoint};

/// Ordered ring of points around an observer
///
/// Produced by [`VisibilityCircle::compute()`](crate::VisibilityCircle::compute).
/// The ring has `steps + 1` points. It is left open, i.e. no extra closing
/// point is appended; use [`closed_pairs()`](Self::closed_pairs) when the
/// consumer requires first and last positions to be identical.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityCirclePolygon {
    points: Vec<GeoPoint>,
    order: CoordinateOrder,
}

impl VisibilityCirclePolygon {
    pub(crate) fn new(points: Vec<GeoPoint>, order: CoordinateOrder) -> Self {
        Self { points, order }
    }

    /// Ring points in degrees
    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    /// Number of points in the ring
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Order used by [`pairs()`](Self::pairs) and [`closed_pairs()`](Self::closed_pairs)
    pub fn coordinate_order(&self) -> CoordinateOrder {
        self.order
    }

    /// Coordinate pairs in the configured order
    pub fn pairs(&self) -> Vec<[f64; 2]> {
        self.pairs_in(self.order)
    }

    /// Coordinate pairs with the ring explicitly closed
    ///
    /// A copy of the first pair is appended unless the last pair already
    /// equals it. When the ring winds around a pole, its longitudes are
    /// unwrapped and the polar cap is closed with two corners at ±90° latitude,
    /// so that the polygon covers the pole in planar lon/lat renderers.
    ///
    /// Rings enclosing both poles (radius beyond a quarter circumference
    /// around an equatorial observer) are only closed, not completed.
    pub fn closed_pairs(&self) -> Vec<[f64; 2]> {
        self.closed_pairs_in(self.order)
    }

    pub(crate) fn pairs_in(&self, order: CoordinateOrder) -> Vec<[f64; 2]> {
        self.points.iter().map(|p| p.to_pair(order)).collect()
    }

    pub(crate) fn closed_pairs_in(&self, order: CoordinateOrder) -> Vec<[f64; 2]> {
        self.closed_ring().iter().map(|p| p.to_pair(order)).collect()
    }

    fn closed_ring(&self) -> Vec<GeoPoint> {
        let Some(&first) = self.points.first() else {
            return Vec::new();
        };

        let mut ring = unwrap_longitudes(&self.points);
        let (start, end) = (ring[0], ring[ring.len() - 1]);

        // Longitude drifts by a full turn when the ring goes around a pole
        let drift = end.lon() - start.lon();
        if drift.abs() > 180.0 {
            let pole = if drift < 0.0 { 90.0 } else { -90.0 };
            ring.push(GeoPoint::new(pole, end.lon()));
            ring.push(GeoPoint::new(pole, start.lon()));
            ring.push(start);
            return ring;
        }

        let mut ring = self.points.clone();
        if ring.last() != Some(&first) {
            ring.push(first);
        }
        ring
    }

    /// Geographic extent of the ring
    ///
    /// Covers the enclosed polar cap, if any. Returns `None` for an empty ring.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        BoundingBox::from_points(&self.closed_ring())
    }

    pub fn into_points(self) -> Vec<GeoPoint> {
        self.points
    }
}

/// Shift longitudes by whole turns so that consecutive points never differ
/// by more than 180°
fn unwrap_longitudes(points: &[GeoPoint]) -> Vec<GeoPoint> {
    let mut unwrapped: Vec<GeoPoint> = Vec::with_capacity(points.len() + 3);
    for &point in points {
        let mut lon = point.lon();
        if let Some(prev) = unwrapped.last() {
            let diff = lon - prev.lon();
            if diff.abs() > 180.0 {
                lon -= 360.0 * (diff / 360.0).round();
            }
        }
        unwrapped.push(GeoPoint::new(point.lat(), lon));
    }
    unwrapped
}
