//! Visibility circle computation with builder API

use crate::constants::{DEFAULT_STEPS, POLE_EPSILON, R_EARTH};
use crate::distance::ground_range;
use crate::error::{Error, Result, Warning};
use crate::types::{CoordinateOrder, GeoPoint, VisibilityCirclePolygon};
use log::{debug, warn};
use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// Circle of points at a fixed surface distance from an observer
///
/// The Earth is modeled as a sphere. The ring is generated in a single pass
/// over half of the angular steps: every step yields a point east of the
/// observer's meridian and its mirror image to the west.
///
/// # Example
///
/// ```
/// use sat_footprint::{CoordinateOrder, GeoPoint, VisibilityCircle};
///
/// let circle = VisibilityCircle::new(GeoPoint::new(40.0, -75.0), 2000.0)
///     .with_steps(36)
///     .with_coordinate_order(CoordinateOrder::LonLat);
///
/// let mut warnings = Vec::new();
/// let ring = circle.compute(&mut warnings).unwrap();
/// assert_eq!(ring.len(), 37);
/// assert!(warnings.is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityCircle {
    center: GeoPoint,
    radius_km: f64,
    steps: u32,
    order: CoordinateOrder,
    earth_radius_km: f64,
    wrap_longitudes: bool,
}

impl VisibilityCircle {
    /// Create a new circle around `center` with a surface radius in kilometers
    ///
    /// Defaults to [`DEFAULT_STEPS`] steps, `[lon, lat]` output order, the
    /// [`R_EARTH`] sphere and unwrapped longitudes.
    pub fn new(center: GeoPoint, radius_km: f64) -> Self {
        Self {
            center,
            radius_km,
            steps: DEFAULT_STEPS,
            order: CoordinateOrder::default(),
            earth_radius_km: R_EARTH,
            wrap_longitudes: false,
        }
    }

    /// Create the footprint of a satellite seen from `center`
    ///
    /// The radius is the [`ground_range()`] of a satellite at `altitude_km`
    /// that must appear at least `min_elevation_deg` above the horizon.
    pub fn for_satellite(center: GeoPoint, altitude_km: f64, min_elevation_deg: f64) -> Result<Self> {
        let radius_km = ground_range(altitude_km, min_elevation_deg, R_EARTH)?;
        Ok(Self::new(center, radius_km))
    }

    /// Number of angular steps, the ring will have `steps + 1` points
    pub fn with_steps(mut self, steps: u32) -> Self {
        self.steps = steps;
        self
    }

    pub fn with_coordinate_order(mut self, order: CoordinateOrder) -> Self {
        self.order = order;
        self
    }

    /// Override the radius of the spherical Earth model
    pub fn with_earth_radius(mut self, earth_radius_km: f64) -> Self {
        self.earth_radius_km = earth_radius_km;
        self
    }

    /// Wrap output longitudes into [-180, 180)
    ///
    /// Off by default, since wrapped rings that cross the anti-meridian are
    /// drawn across the whole map by most renderers.
    pub fn with_wrapped_longitudes(mut self, wrap: bool) -> Self {
        self.wrap_longitudes = wrap;
        self
    }

    pub fn center(&self) -> GeoPoint {
        self.center
    }

    pub fn radius_km(&self) -> f64 {
        self.radius_km
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Angular radius in radians, as subtended at the Earth's center
    pub fn angular_radius(&self) -> f64 {
        self.radius_km / self.earth_radius_km
    }

    fn validate(&self) -> Result<()> {
        if !self.center.is_valid() {
            return Err(Error::InvalidCenter {
                latitude: self.center.lat(),
                longitude: self.center.lon(),
            });
        }
        if !self.earth_radius_km.is_finite() || self.earth_radius_km <= 0.0 {
            return Err(Error::InvalidEarthRadius(self.earth_radius_km));
        }
        if !self.radius_km.is_finite()
            || self.radius_km <= 0.0
            || self.radius_km > PI * self.earth_radius_km
        {
            return Err(Error::InvalidRadius(self.radius_km));
        }
        if self.steps < 2 {
            return Err(Error::InvalidSteps(self.steps));
        }
        Ok(())
    }

    /// Compute the ring
    ///
    /// Degenerate geometry (observer on a pole, ring passing through a pole)
    /// is resolved with the limit of the general formula, and a warning is
    /// pushed to the provided vector for each occurrence.
    pub fn compute(&self, warnings: &mut Vec<Warning>) -> Result<VisibilityCirclePolygon> {
        self.validate()?;

        debug!(
            "Computing visibility circle: center=({}, {}), radius={} km, steps={}",
            self.center.lat(),
            self.center.lon(),
            self.radius_km,
            self.steps
        );

        let steps = self.steps as usize;
        let center_lat = self.center.lat().to_radians();
        let (sin_loc_lat, cos_loc_lat) = center_lat.sin_cos();

        let alpha = self.angular_radius();
        let (sin_alpha, cos_alpha) = alpha.sin_cos();

        let polar = cos_loc_lat.abs() < POLE_EPSILON;
        if polar {
            warn!(
                "Observer at latitude {} is on a pole, using a circle of latitude",
                self.center.lat()
            );
            warnings.push(Warning::PolarObserver {
                latitude: self.center.lat(),
            });
        }

        let delta_omega = TAU / self.steps as f64;
        let mut omega = 0.0_f64;

        let mut points = vec![GeoPoint::default(); steps + 1];
        for i in 0..=steps / 2 {
            let (lat, delta_lon) = if polar {
                polar_ring_point(center_lat, alpha, omega)
            } else {
                let sin_lat = (omega.cos() * cos_loc_lat * sin_alpha + sin_loc_lat * cos_alpha)
                    .clamp(-1.0, 1.0);
                let cos_lat = (1.0 - sin_lat * sin_lat).sqrt();

                let delta_lon = if cos_lat < POLE_EPSILON {
                    warn!("Visibility circle point {i} lies on a pole");
                    warnings.push(Warning::PoleOnRing { index: i });
                    FRAC_PI_2
                } else {
                    ((cos_alpha - sin_loc_lat * sin_lat) / (cos_loc_lat * cos_lat))
                        .clamp(-1.0, 1.0)
                        .acos()
                };

                (sin_lat.asin(), delta_lon)
            };

            let lat = lat.to_degrees();
            let delta_lon = delta_lon.to_degrees();

            points[i] = self.output_point(lat, self.center.lon() + delta_lon);
            points[steps - i] = self.output_point(lat, self.center.lon() - delta_lon);

            omega += delta_omega;
        }

        Ok(VisibilityCirclePolygon::new(points, self.order))
    }

    fn output_point(&self, lat: f64, lon: f64) -> GeoPoint {
        let point = GeoPoint::new(lat, lon);
        if self.wrap_longitudes {
            point.normalized()
        } else {
            point
        }
    }
}

/// Latitude and longitude offset (radians) of a ring point around a polar
/// observer
///
/// Azimuth is meaningless on a pole, so `omega` is mapped onto the
/// longitude offset the general formula tends to as the observer approaches
/// the pole along its meridian.
fn polar_ring_point(center_lat: f64, alpha: f64, omega: f64) -> (f64, f64) {
    if center_lat > 0.0 {
        (FRAC_PI_2 - alpha, (PI - omega).max(0.0))
    } else {
        (alpha - FRAC_PI_2, omega)
    }
}

/// Compute a visibility circle, discarding degeneracy warnings
///
/// Shorthand for building a [`VisibilityCircle`] and calling
/// [`compute()`](VisibilityCircle::compute).
pub fn compute_visibility_circle(
    center: GeoPoint,
    radius_km: f64,
    steps: u32,
    order: CoordinateOrder,
) -> Result<VisibilityCirclePolygon> {
    let mut warnings = Vec::new();
    VisibilityCircle::new(center, radius_km)
        .with_steps(steps)
        .with_coordinate_order(order)
        .compute(&mut warnings)
}
