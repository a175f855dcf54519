//! Region lookup: free-text region names to anchor coordinates.
//!
//! The table is process-wide static data; resolution never fails. Anything
//! the table does not know (including the empty string) degrades to the
//! default Alps center rather than erroring.

use crate::geo::GeoPoint;

/// A named anchor coordinate for a travel region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionCenter {
    pub lat: f64,
    pub lon: f64,
    pub label: &'static str,
}

impl RegionCenter {
    /// The anchor as a bare coordinate.
    #[must_use]
    pub fn point(&self) -> GeoPoint {
        GeoPoint {
            lat: self.lat,
            lon: self.lon,
        }
    }
}

/// Fallback center when the region text matches nothing.
pub const DEFAULT_CENTER: RegionCenter = RegionCenter {
    lat: 46.8,
    lon: 8.3,
    label: "Alps",
};

/// Known region keys, matched against trimmed lower-case input.
const REGION_CENTERS: &[(&str, RegionCenter)] = &[
    (
        "europe",
        RegionCenter {
            lat: 47.5,
            lon: 9.0,
            label: "Europe",
        },
    ),
    (
        "asia",
        RegionCenter {
            lat: 21.0,
            lon: 105.0,
            label: "Asia",
        },
    ),
    (
        "south america",
        RegionCenter {
            lat: -15.6,
            lon: -56.1,
            label: "South America",
        },
    ),
    (
        "north america",
        RegionCenter {
            lat: 40.0,
            lon: -105.0,
            label: "North America",
        },
    ),
    (
        "africa",
        RegionCenter {
            lat: 2.0,
            lon: 21.0,
            label: "Africa",
        },
    ),
    (
        "oceania",
        RegionCenter {
            lat: -25.0,
            lon: 133.0,
            label: "Oceania",
        },
    ),
];

/// Resolve free-text region input to a center, falling back to
/// [`DEFAULT_CENTER`] for empty or unknown input. Total function.
#[must_use]
pub fn resolve_region(region_text: &str) -> RegionCenter {
    let key = region_text.trim().to_lowercase();
    if key.is_empty() {
        return DEFAULT_CENTER;
    }
    REGION_CENTERS
        .iter()
        .find(|(name, _)| *name == key)
        .map_or(DEFAULT_CENTER, |(_, center)| *center)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_is_case_insensitive() {
        assert_eq!(resolve_region("Europe").label, "Europe");
        assert_eq!(resolve_region("europe").label, "Europe");
        assert_eq!(resolve_region("EUROPE").label, "Europe");
    }

    #[test]
    fn resolve_trims_whitespace() {
        assert_eq!(resolve_region(" Europe ").label, "Europe");
        assert_eq!(resolve_region("\tsouth america\n").label, "South America");
    }

    #[test]
    fn resolve_empty_falls_back_to_default() {
        assert_eq!(resolve_region(""), DEFAULT_CENTER);
        assert_eq!(resolve_region("   "), DEFAULT_CENTER);
    }

    #[test]
    fn resolve_unknown_falls_back_to_default() {
        assert_eq!(resolve_region("atlantis"), DEFAULT_CENTER);
        assert_eq!(resolve_region("europ"), DEFAULT_CENTER);
    }

    #[test]
    fn resolve_knows_all_six_regions() {
        for (key, center) in [
            ("europe", (47.5, 9.0)),
            ("asia", (21.0, 105.0)),
            ("south america", (-15.6, -56.1)),
            ("north america", (40.0, -105.0)),
            ("africa", (2.0, 21.0)),
            ("oceania", (-25.0, 133.0)),
        ] {
            let resolved = resolve_region(key);
            assert!((resolved.lat - center.0).abs() < 1e-9, "{key}");
            assert!((resolved.lon - center.1).abs() < 1e-9, "{key}");
        }
    }
}
