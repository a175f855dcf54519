//! Artifact builders: map bounding box and plain-text itinerary export.
//!
//! Both are pure functions of a finished [`Route`]. The text export must be
//! byte-for-byte reproducible, so no clocks and no locale-sensitive
//! formatting are allowed here. URL templating around the bounding box
//! belongs to the map-viewer collaborator, not this crate.

use crate::geo::GeoPoint;
use crate::itinerary::Route;

/// Degrees added to every edge of the computed box so the map view frames
/// the route instead of clipping it.
const BBOX_PAD_DEG: f64 = 0.2;

/// A padded lat/lon rectangle enclosing a set of route points.
///
/// `Display` renders `minLon,minLat,maxLon,maxLat` to 4 decimal places,
/// the value a tile-server `bbox=` query expects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl std::fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:.4},{:.4},{:.4},{:.4}",
            self.min_lon, self.min_lat, self.max_lon, self.max_lat
        )
    }
}

/// Compute the padded bounding box of `points`, or `None` when empty.
///
/// The 0.2° pad applies even to a single point, which yields a 0.4°-wide
/// degenerate box.
#[must_use]
pub fn bounding_box(points: &[GeoPoint]) -> Option<BoundingBox> {
    let first = points.first()?;
    let mut min_lat = first.lat;
    let mut max_lat = first.lat;
    let mut min_lon = first.lon;
    let mut max_lon = first.lon;
    for p in points {
        min_lat = min_lat.min(p.lat);
        max_lat = max_lat.max(p.lat);
        min_lon = min_lon.min(p.lon);
        max_lon = max_lon.max(p.lon);
    }
    Some(BoundingBox {
        min_lon: min_lon - BBOX_PAD_DEG,
        min_lat: min_lat - BBOX_PAD_DEG,
        max_lon: max_lon + BBOX_PAD_DEG,
        max_lat: max_lat + BBOX_PAD_DEG,
    })
}

/// Render a route as the multi-line plain-text itinerary.
///
/// Layout: title, region, style, summary, blank line, then per day a header
/// plus indented description/lodging/coordinate lines and a trailing blank
/// line. Calling this twice on the same route yields identical bytes.
#[must_use]
pub fn export_text(route: &Route) -> String {
    let mut lines = Vec::with_capacity(5 + route.days.len() * 5);
    lines.push(format!("# {}", route.title));
    lines.push(format!("Region: {}", route.meta.region));
    lines.push(format!("Style: {}", route.meta.style));
    lines.push(format!(
        "Summary: {} km \u{2022} {} hrs \u{2022} ~${}",
        route.summary.total_distance_km,
        route.summary.total_time_hrs,
        route.summary.estimated_cost_usd
    ));
    lines.push(String::new());
    for d in &route.days {
        lines.push(format!(
            "Day {} - {} km (~{} hrs)",
            d.day, d.distance_km, d.time_hrs
        ));
        lines.push(format!("  {}", d.description));
        lines.push(format!("  Sleep: {}", d.sleep));
        lines.push(format!("  Coords: {:.4}, {:.4}", d.coord.lat, d.coord.lon));
        lines.push(String::new());
    }
    lines.join("\n")
}
