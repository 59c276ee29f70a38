//! Reverse geocoding by nearest known point.
//!
//! Turns a latitude/longitude pair into a region label from a fixed
//! gazetteer, or into a coordinate label when the point is outside the
//! gazetteer's coverage.

mod address;
mod label;
mod service;

pub use address::ResolvedAddress;
pub use label::{coordinate_label, is_coordinate_label, parse_coordinate_label};
pub use service::RegionResolver;
