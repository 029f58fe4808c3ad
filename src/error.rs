/// Invalid input that prevents a computation from running
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid center coordinate: lat={latitude}, lon={longitude}")]
    InvalidCenter { latitude: f64, longitude: f64 },

    #[error("Invalid radius: {0} km (must be positive and at most half the Earth's circumference)")]
    InvalidRadius(f64),

    #[error("Invalid step count: {0} (at least 2 required)")]
    InvalidSteps(u32),

    #[error("Invalid Earth radius: {0} km")]
    InvalidEarthRadius(f64),

    #[error("Invalid satellite altitude: {0} km")]
    InvalidAltitude(f64),

    #[error("Invalid minimum elevation: {0}° (must be within [0, 90))")]
    InvalidElevation(f64),
}

/// Numeric degeneracies that were resolved with a fallback
#[derive(Debug, Clone, PartialEq)]
pub enum Warning {
    /// Observer sits on a pole, the ring was generated as a circle of latitude
    PolarObserver { latitude: f64 },

    /// Ring point lies on a pole where longitude is undefined
    PoleOnRing { index: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
