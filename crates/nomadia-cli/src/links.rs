//! Outward-facing artifact formatting: share text and the map-viewer URL.

use nomadia_core::{BoundingBox, Route};

/// Share summary: title, total distance, and day count, one field per line.
pub fn share_text(route: &Route) -> String {
    format!(
        "{}\nDistance: {} km\nDays: {}",
        route.title, route.summary.total_distance_km, route.meta.days
    )
}

/// OpenStreetMap embed URL framing the route's bounding box.
pub fn viewer_url(bbox: &BoundingBox) -> String {
    format!("https://www.openstreetmap.org/export/embed.html?bbox={bbox}&layer=mapnik")
}

#[cfg(test)]
mod tests {
    use nomadia_core::{bounding_box, GeoPoint};

    use super::*;

    #[test]
    fn viewer_url_embeds_bbox_query() {
        let b = bounding_box(&[GeoPoint { lat: 46.8, lon: 8.3 }]).unwrap();
        assert_eq!(
            viewer_url(&b),
            "https://www.openstreetmap.org/export/embed.html?bbox=8.1000,46.6000,8.5000,47.0000&layer=mapnik"
        );
    }

    #[test]
    fn share_text_lists_title_distance_days() {
        let request = nomadia_core::TripRequest {
            day_count: 5,
            region_text: "europe".to_string(),
            style: nomadia_core::TravelStyle::Backpack,
            prefs: nomadia_core::PreferenceSet::new(80, 60, 50, 50, 40),
        };
        let mut draw = || 0.5;
        let route = nomadia_core::synthesize_with(&request, &mut draw);
        let text = share_text(&route);
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("5-day Europe backpack adventure"));
        assert_eq!(
            lines.next(),
            Some(format!("Distance: {} km", route.summary.total_distance_km).as_str())
        );
        assert_eq!(lines.next(), Some("Days: 5"));
        assert_eq!(lines.next(), None);
    }
}
