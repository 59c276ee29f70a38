//! Nearest-reference-point region resolver.

use tracing::debug;

use super::address::ResolvedAddress;
use crate::models::{Gazetteer, GazetteerEntry, GeoBounds, GeoPoint};

/// Maps a coordinate to the closest labeled reference point.
///
/// Closeness is Manhattan distance in degrees. Points outside the
/// gazetteer's bounds are never matched; they resolve to a coordinate label.
/// The resolver is immutable and can be shared freely across threads.
#[derive(Debug, Clone, Copy)]
pub struct RegionResolver {
    gazetteer: Gazetteer,
}

impl RegionResolver {
    pub fn new(gazetteer: Gazetteer) -> Self {
        Self { gazetteer }
    }

    /// Replace the coverage box of the current gazetteer
    pub fn with_bounds(mut self, bounds: GeoBounds) -> Self {
        self.gazetteer.bounds = bounds;
        self
    }

    pub fn gazetteer(&self) -> &Gazetteer {
        &self.gazetteer
    }

    /// Closest entry by Manhattan distance; the earliest entry wins ties.
    pub fn nearest(&self, point: &GeoPoint) -> Option<(&'static GazetteerEntry, f64)> {
        let mut best = None;
        let mut min_distance = f64::INFINITY;

        for entry in self.gazetteer.entries {
            let distance = point.manhattan_distance(&entry.point());
            if distance < min_distance {
                min_distance = distance;
                best = Some(entry);
            }
        }

        best.map(|entry| (entry, min_distance))
    }

    /// Resolve a coordinate
    pub fn resolve(&self, lat: f64, lon: f64) -> ResolvedAddress {
        self.resolve_point(GeoPoint::new(lat, lon))
    }

    pub fn resolve_point(&self, point: GeoPoint) -> ResolvedAddress {
        if !self.gazetteer.bounds.contains(&point) {
            debug!(
                "({}, {}) outside {} coverage, using coordinates",
                point.lat, point.lon, self.gazetteer.name
            );
            return ResolvedAddress::Coordinates { point };
        }

        match self.nearest(&point) {
            Some((entry, distance)) => {
                debug!(
                    "({}, {}) -> {} (distance {:.4})",
                    point.lat, point.lon, entry.label, distance
                );
                ResolvedAddress::Region {
                    label: entry.label,
                    reference: entry.point(),
                    distance,
                    distance_m: point.haversine_distance(&entry.point()),
                }
            }
            None => ResolvedAddress::Coordinates { point },
        }
    }

    /// Resolve a coordinate straight to its address text
    pub fn resolve_label(&self, lat: f64, lon: f64) -> String {
        self.resolve(lat, lon).label()
    }
}

impl Default for RegionResolver {
    fn default() -> Self {
        Self::new(Gazetteer::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RegionLevel, DISTRICTS, PROVINCES};

    const TIED: &[GazetteerEntry] = &[
        GazetteerEntry::new(37.0, 127.0, "west"),
        GazetteerEntry::new(37.0, 128.0, "east"),
    ];

    const TIED_REVERSED: &[GazetteerEntry] = &[
        GazetteerEntry::new(37.0, 128.0, "east"),
        GazetteerEntry::new(37.0, 127.0, "west"),
    ];

    fn resolver_for(entries: &'static [GazetteerEntry]) -> RegionResolver {
        RegionResolver::new(Gazetteer::new("test", entries, GeoBounds::KOREA))
    }

    #[test]
    fn test_exact_entries_resolve_to_own_label() {
        for level in [RegionLevel::District, RegionLevel::Province] {
            let resolver = RegionResolver::new(Gazetteer::for_level(level));
            for entry in resolver.gazetteer().entries {
                assert_eq!(resolver.resolve_label(entry.lat, entry.lon), entry.label);
            }
        }
    }

    #[test]
    fn test_seoul_city_hall() {
        let resolver = RegionResolver::default();
        assert_eq!(resolver.resolve_label(37.5665, 126.9780), "서울특별시 중구");
    }

    #[test]
    fn test_near_gangnam_reference() {
        let resolver = RegionResolver::default();
        assert_eq!(resolver.resolve_label(37.55, 126.99), "서울특별시 강남구");
    }

    #[test]
    fn test_nearest_over_other_entries() {
        let resolver = RegionResolver::default();
        assert_eq!(resolver.resolve_label(35.18, 129.08), "부산광역시 해운대구");
        assert_eq!(resolver.resolve_label(35.15, 129.05), "부산광역시 수영구");
        assert_eq!(resolver.resolve_label(36.35, 127.38), "대전광역시 유성구");
        // Jeju has no district entry; Gwangju is the closest by L1
        assert_eq!(resolver.resolve_label(33.5, 126.5), "광주광역시 남구");

        let provinces = RegionResolver::new(Gazetteer::for_level(RegionLevel::Province));
        assert_eq!(provinces.resolve_label(33.45, 126.56), "제주특별자치도");
        assert_eq!(provinces.resolve_label(37.75, 128.9), "강원도");
    }

    #[test]
    fn test_result_matches_minimum_distance() {
        let resolver = RegionResolver::default();
        let samples = [
            (37.51, 127.01),
            (37.47, 126.75),
            (35.9, 128.55),
            (36.0, 127.0),
            (34.9, 126.9),
        ];
        for (lat, lon) in samples {
            let p = GeoPoint::new(lat, lon);
            let min = DISTRICTS
                .iter()
                .map(|e| p.manhattan_distance(&e.point()))
                .fold(f64::INFINITY, f64::min);
            match resolver.resolve(lat, lon) {
                ResolvedAddress::Region { distance, .. } => assert_eq!(distance, min),
                other => panic!("expected region, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_tie_goes_to_first_entry() {
        assert_eq!(resolver_for(TIED).resolve_label(37.0, 127.5), "west");
        assert_eq!(resolver_for(TIED_REVERSED).resolve_label(37.0, 127.5), "east");
    }

    #[test]
    fn test_outside_bounds_uses_coordinates() {
        let resolver = RegionResolver::default();
        assert!(resolver.nearest(&GeoPoint::new(51.5, -0.12)).is_some());
        assert_eq!(
            resolver.resolve_label(51.5, -0.12),
            "latitude: 51.5000, longitude: -0.1200"
        );
    }

    #[test]
    fn test_custom_bounds() {
        let seoul_only = GeoBounds::new(37.4, 37.7, 126.8, 127.2).unwrap();
        let resolver = RegionResolver::default().with_bounds(seoul_only);
        assert_eq!(resolver.resolve_label(37.5665, 126.9780), "서울특별시 중구");
        assert_eq!(
            resolver.resolve_label(35.1796, 129.0756),
            "latitude: 35.1796, longitude: 129.0756"
        );
    }

    #[test]
    fn test_empty_gazetteer_falls_back() {
        let resolver = resolver_for(&[]);
        assert!(resolver.nearest(&GeoPoint::new(37.0, 127.0)).is_none());
        assert_eq!(
            resolver.resolve_label(37.0, 127.0),
            "latitude: 37.0000, longitude: 127.0000"
        );
    }

    #[test]
    fn test_total_over_odd_inputs() {
        let resolver = RegionResolver::new(Gazetteer::new("provinces", PROVINCES, GeoBounds::KOREA));
        let inputs = [
            (f64::NAN, 127.0),
            (37.0, f64::NAN),
            (f64::INFINITY, f64::NEG_INFINITY),
            (-90.0, 180.0),
            (1e300, -1e300),
            (0.0, 0.0),
        ];
        for (lat, lon) in inputs {
            assert!(!resolver.resolve_label(lat, lon).is_empty());
        }
    }

    #[test]
    fn test_deterministic() {
        let resolver = RegionResolver::default();
        let first = resolver.resolve(37.52, 127.03);
        for _ in 0..10 {
            assert_eq!(resolver.resolve(37.52, 127.03), first);
        }
    }

    #[test]
    fn test_shared_across_threads() {
        let resolver = RegionResolver::default();
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(move || resolver.resolve_label(37.5665, 126.9780)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), "서울특별시 중구");
        }
    }
}
