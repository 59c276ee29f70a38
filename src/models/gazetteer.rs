//! Built-in reference tables for nearest-point region lookup.

use serde::{Deserialize, Serialize};

use super::point::{GeoBounds, GeoPoint};

/// Granularity of a gazetteer's labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum RegionLevel {
    /// Province / metropolitan city
    Province,
    /// District (gu)
    District,
}

impl RegionLevel {
    /// Parse a table name as used in config files and query strings
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "province" | "provinces" => Some(RegionLevel::Province),
            "district" | "districts" => Some(RegionLevel::District),
            _ => None,
        }
    }

    pub fn table_name(&self) -> &'static str {
        match self {
            RegionLevel::Province => "provinces",
            RegionLevel::District => "districts",
        }
    }
}

/// A single labeled reference point
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GazetteerEntry {
    pub lat: f64,
    pub lon: f64,
    pub label: &'static str,
}

impl GazetteerEntry {
    pub const fn new(lat: f64, lon: f64, label: &'static str) -> Self {
        Self { lat, lon, label }
    }

    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon)
    }
}

/// Seoul, Busan, Daegu, Incheon, Daejeon and Gwangju districts
pub const DISTRICTS: &[GazetteerEntry] = &[
    GazetteerEntry::new(37.5665, 126.9780, "서울특별시 중구"),
    GazetteerEntry::new(37.5519, 126.9918, "서울특별시 강남구"),
    GazetteerEntry::new(37.4979, 127.0276, "서울특별시 서초구"),
    GazetteerEntry::new(37.5563, 126.9723, "서울특별시 종로구"),
    GazetteerEntry::new(37.5326, 127.0244, "서울특별시 송파구"),
    GazetteerEntry::new(37.4728, 126.9450, "서울특별시 관악구"),
    GazetteerEntry::new(35.1796, 129.0756, "부산광역시 해운대구"),
    GazetteerEntry::new(35.1595, 129.0598, "부산광역시 수영구"),
    GazetteerEntry::new(35.8714, 128.6014, "대구광역시 중구"),
    GazetteerEntry::new(37.4563, 126.7052, "인천광역시 연수구"),
    GazetteerEntry::new(36.3504, 127.3845, "대전광역시 유성구"),
    GazetteerEntry::new(35.1595, 126.8526, "광주광역시 남구"),
];

/// Nationwide province-level coverage
pub const PROVINCES: &[GazetteerEntry] = &[
    GazetteerEntry::new(37.6, 127.0, "서울특별시 북부"),
    GazetteerEntry::new(37.5, 127.0, "서울특별시 남부"),
    GazetteerEntry::new(37.4563, 126.7052, "인천광역시"),
    GazetteerEntry::new(37.2, 126.8, "경기도 서부"),
    GazetteerEntry::new(37.3, 127.2, "경기도 동부"),
    GazetteerEntry::new(37.0, 127.3, "경기도 남부"),
    GazetteerEntry::new(37.8, 128.5, "강원도"),
    GazetteerEntry::new(36.8, 127.7, "충청북도"),
    GazetteerEntry::new(36.3504, 127.3845, "대전광역시"),
    GazetteerEntry::new(36.5, 126.8, "충청남도"),
    GazetteerEntry::new(35.8, 127.1, "전라북도"),
    GazetteerEntry::new(35.1595, 126.8526, "광주광역시"),
    GazetteerEntry::new(34.8, 126.4, "전라남도"),
    GazetteerEntry::new(35.8714, 128.6014, "대구광역시"),
    GazetteerEntry::new(36.4, 128.8, "경상북도"),
    GazetteerEntry::new(35.1796, 129.0756, "부산광역시"),
    GazetteerEntry::new(35.2, 128.1, "경상남도"),
    GazetteerEntry::new(35.5, 129.3, "울산광역시"),
    GazetteerEntry::new(33.5, 126.5, "제주특별자치도"),
];

/// An ordered reference table and the area it is trusted for.
///
/// Entry order is significant: on equal distance the earlier entry wins.
#[derive(Debug, Clone, Copy)]
pub struct Gazetteer {
    pub name: &'static str,
    pub entries: &'static [GazetteerEntry],
    pub bounds: GeoBounds,
}

impl Gazetteer {
    pub const fn new(name: &'static str, entries: &'static [GazetteerEntry], bounds: GeoBounds) -> Self {
        Self {
            name,
            entries,
            bounds,
        }
    }

    /// Get the built-in table for a level
    pub fn for_level(level: RegionLevel) -> Self {
        match level {
            RegionLevel::District => Self::new(level.table_name(), DISTRICTS, GeoBounds::KOREA),
            RegionLevel::Province => Self::new(level.table_name(), PROVINCES, GeoBounds::KOREA),
        }
    }

    /// Look up a built-in table by name ("districts", "provinces")
    pub fn builtin(name: &str) -> Option<Self> {
        RegionLevel::from_name(name).map(Self::for_level)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Gazetteer {
    fn default() -> Self {
        Self::for_level(RegionLevel::District)
    }
}
