/// Earth radius in kilometers
///
/// WGS-84 equatorial radius, used as the radius of a spherical Earth model.
pub const R_EARTH: f64 = 6378.137;

/// Default number of angular steps used to approximate a visibility circle
pub const DEFAULT_STEPS: u32 = 360;

/// Cosines below this value are treated as zero (point on a pole)
pub(crate) const POLE_EPSILON: f64 = 1e-12;
