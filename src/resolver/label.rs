//! Coordinate label formatting and recognition.
//!
//! Addresses that could not be tied to a region are stored as a plain
//! coordinate string. Older records may carry the Korean-keyed form
//! (`위도: 37.566500, 경도: 126.978000`); both are recognized so they can be
//! found and re-resolved later.

use regex::Regex;
use std::sync::LazyLock;

use crate::models::GeoPoint;

static COORDINATE_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*(?:latitude|위도)\s*:\s*(?P<lat>[-+]?\d+(?:\.\d+)?)\s*,\s*(?:longitude|경도)\s*:\s*(?P<lon>[-+]?\d+(?:\.\d+)?)\s*$",
    )
    .expect("coordinate label pattern is valid")
});

/// Format a point as `latitude: <4dp>, longitude: <4dp>`
pub fn coordinate_label(lat: f64, lon: f64) -> String {
    format!("latitude: {:.4}, longitude: {:.4}", lat, lon)
}

/// Parse a coordinate label (current or legacy form) back into a point
pub fn parse_coordinate_label(s: &str) -> Option<GeoPoint> {
    let caps = COORDINATE_LABEL.captures(s)?;
    let lat = caps.name("lat")?.as_str().parse().ok()?;
    let lon = caps.name("lon")?.as_str().parse().ok()?;
    Some(GeoPoint::new(lat, lon))
}

pub fn is_coordinate_label(s: &str) -> bool {
    COORDINATE_LABEL.is_match(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_four_decimals() {
        assert_eq!(
            coordinate_label(51.5, -0.12),
            "latitude: 51.5000, longitude: -0.1200"
        );
        assert_eq!(
            coordinate_label(37.566535, 126.9779692),
            "latitude: 37.5665, longitude: 126.9780"
        );
    }

    #[test]
    fn test_parse_current_form() {
        let p = parse_coordinate_label("latitude: 51.5000, longitude: -0.1200").unwrap();
        assert_eq!(p, GeoPoint::new(51.5, -0.12));
    }

    #[test]
    fn test_parse_legacy_form() {
        let p = parse_coordinate_label("위도: 37.566500, 경도: 126.978000").unwrap();
        assert_eq!(p, GeoPoint::new(37.5665, 126.978));
        assert!(is_coordinate_label("위도: 35.1796, 경도: 129.0756"));
    }

    #[test]
    fn test_region_labels_not_coordinates() {
        assert!(!is_coordinate_label("서울특별시 중구"));
        assert!(!is_coordinate_label("대한민국"));
        assert!(!is_coordinate_label(""));
        assert!(parse_coordinate_label("latitude: abc, longitude: 1").is_none());
    }
}
