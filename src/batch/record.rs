//! User location records as exchanged with the application database.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::GeoPoint;
use crate::resolver::is_coordinate_label;

/// Country-wide placeholder written by older address fixups
const LEGACY_PLACEHOLDERS: &[&str] = &["대한민국"];

/// A user's stored position and free-text address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserLocation {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub address: Option<String>,
}

impl UserLocation {
    /// Position, if both coordinates are present
    pub fn point(&self) -> Option<GeoPoint> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some(GeoPoint::new(lat, lon)),
            _ => None,
        }
    }

    /// True if the address is missing or was never resolved to a region
    pub fn has_stale_address(&self) -> bool {
        match self.address.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(addr) => is_coordinate_label(addr) || LEGACY_PLACEHOLDERS.contains(&addr),
        }
    }
}

/// How addresses are recomputed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefreshMode {
    /// Resolve every record against the gazetteer
    #[default]
    Nearest,
    /// Replace every address with its coordinate label
    Coordinates,
    /// Resolve only records whose address is missing or still a coordinate label
    #[serde(alias = "stale")]
    StaleOnly,
}

impl FromStr for RefreshMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "nearest" => Ok(RefreshMode::Nearest),
            "coordinates" | "coords" => Ok(RefreshMode::Coordinates),
            "stale" | "stale_only" | "stale-only" => Ok(RefreshMode::StaleOnly),
            _ => Err(format!(
                "Unknown mode '{}'. Use 'nearest', 'coordinates' or 'stale'.",
                s
            )),
        }
    }
}

impl fmt::Display for RefreshMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RefreshMode::Nearest => write!(f, "nearest"),
            RefreshMode::Coordinates => write!(f, "coordinates"),
            RefreshMode::StaleOnly => write!(f, "stale"),
        }
    }
}
