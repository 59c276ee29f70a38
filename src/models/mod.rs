//! Core data models for region resolution.

pub mod gazetteer;
pub mod point;

pub use gazetteer::{Gazetteer, GazetteerEntry, RegionLevel, DISTRICTS, PROVINCES};
pub use point::{GeoBounds, GeoPoint};
