//! Regiondex - nearest-reference-point reverse geocoding
//!
//! This library provides shared types and modules for the query and relabel binaries.

pub mod batch;
pub mod config;
pub mod models;
pub mod resolver;

pub use models::{Gazetteer, GazetteerEntry, GeoBounds, GeoPoint, RegionLevel};
pub use resolver::{RegionResolver, ResolvedAddress};
