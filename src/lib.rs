#![doc = include_str!("../README.md")]

pub use crate::circle::{VisibilityCircle, compute_visibility_circle};
pub use crate::constants::{DEFAULT_STEPS, R_EARTH};
pub use crate::error::{Error, Result, Warning};
pub use crate::types::*;

mod circle;
mod constants;
pub mod distance;
mod error;
#[cfg(feature = "geojson")]
mod geojson;
mod types;
