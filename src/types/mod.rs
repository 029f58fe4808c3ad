mod bounding_box;
mod enums;
mod geo_point;
mod polygon;

pub use bounding_box::*;
pub use enums::*;
pub use geo_point::*;
pub use polygon::*;
