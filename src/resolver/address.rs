//! Resolver output type.

use serde::Serialize;
use std::fmt;

use super::label::coordinate_label;
use crate::models::GeoPoint;

/// Result of resolving a coordinate
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResolvedAddress {
    /// Nearest gazetteer entry
    Region {
        label: &'static str,
        /// Location of the matched reference point
        reference: GeoPoint,
        /// Manhattan distance to the reference point, in degrees
        distance: f64,
        /// Great-circle distance to the reference point, in meters
        distance_m: f64,
    },
    /// Outside the gazetteer's coverage
    Coordinates { point: GeoPoint },
}

impl ResolvedAddress {
    /// Human-readable address text
    pub fn label(&self) -> String {
        match self {
            ResolvedAddress::Region { label, .. } => (*label).to_string(),
            ResolvedAddress::Coordinates { point } => coordinate_label(point.lat, point.lon),
        }
    }

    pub fn is_region(&self) -> bool {
        matches!(self, ResolvedAddress::Region { .. })
    }
}

impl fmt::Display for ResolvedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolvedAddress::Region { label, .. } => f.write_str(label),
            ResolvedAddress::Coordinates { point } => {
                f.write_str(&coordinate_label(point.lat, point.lon))
            }
        }
    }
}
