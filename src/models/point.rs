//! Coordinate and bounding box primitives.

use geo::{Distance, Haversine, Point};
use serde::{Deserialize, Serialize};

/// Geographic point (lat/lon) in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Sum of absolute coordinate differences (L1 distance, in degrees)
    pub fn manhattan_distance(&self, other: &GeoPoint) -> f64 {
        (self.lat - other.lat).abs() + (self.lon - other.lon).abs()
    }

    /// Great-circle distance in meters
    pub fn haversine_distance(&self, other: &GeoPoint) -> f64 {
        Haversine.distance(Point::from(*self), Point::from(*other))
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }
}

impl From<GeoPoint> for Point<f64> {
    fn from(p: GeoPoint) -> Self {
        Point::new(p.lon, p.lat)
    }
}

impl From<Point<f64>> for GeoPoint {
    fn from(p: Point<f64>) -> Self {
        GeoPoint::new(p.y(), p.x())
    }
}

/// Axis-aligned coverage box. Edges are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl GeoBounds {
    /// Latitude 33..39, longitude 124..132
    pub const KOREA: GeoBounds = GeoBounds {
        min_lat: 33.0,
        max_lat: 39.0,
        min_lon: 124.0,
        max_lon: 132.0,
    };

    /// Returns `None` if a minimum exceeds its maximum or a value is not finite.
    pub fn new(min_lat: f64, max_lat: f64, min_lon: f64, max_lon: f64) -> Option<Self> {
        let bounds = Self {
            min_lat,
            max_lat,
            min_lon,
            max_lon,
        };
        bounds.is_valid().then_some(bounds)
    }

    pub fn is_valid(&self) -> bool {
        let values = [self.min_lat, self.max_lat, self.min_lon, self.max_lon];
        values.iter().all(|v| v.is_finite())
            && self.min_lat <= self.max_lat
            && self.min_lon <= self.max_lon
    }

    /// Inclusive containment. NaN coordinates are never contained.
    pub fn contains(&self, point: &GeoPoint) -> bool {
        point.lat >= self.min_lat
            && point.lat <= self.max_lat
            && point.lon >= self.min_lon
            && point.lon <= self.max_lon
    }
}
