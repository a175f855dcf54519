//! End-to-end tests of the generation pipeline through the public API:
//! request in, route out, artifacts derived from the same route.

use nomadia_core::{
    bounding_box, export_text, synthesize_with, PreferenceSet, Route, TravelStyle, TripRequest,
};

/// Deterministic uniform source cycling over a fixed tape.
fn tape(values: &'static [f64]) -> impl FnMut() -> f64 {
    let mut i = 0;
    move || {
        let v = values[i % values.len()];
        i += 1;
        v
    }
}

fn generate(day_count: i32, region: &str, style: TravelStyle, challenge: u8) -> Route {
    let request = TripRequest {
        day_count,
        region_text: region.to_string(),
        style,
        prefs: PreferenceSet::new(80, 60, 50, 50, challenge),
    };
    let mut draw = tape(&[0.13, 0.62, 0.94, 0.27, 0.51, 0.78]);
    synthesize_with(&request, &mut draw)
}

#[test]
fn every_valid_day_count_produces_that_many_plans() {
    for n in 2..=30 {
        let route = generate(n, "europe", TravelStyle::Backpack, 40);
        assert_eq!(route.days.len(), usize::try_from(n).unwrap());
        for d in &route.days {
            assert!((6..=28).contains(&d.distance_km));
            assert!(d.time_hrs >= 3);
        }
    }
}

#[test]
fn identical_draw_tapes_yield_identical_routes() {
    let a = generate(8, "asia", TravelStyle::Public, 70);
    let b = generate(8, "asia", TravelStyle::Public, 70);
    assert_eq!(export_text(&a), export_text(&b));
    assert_eq!(a.points, b.points);
}

#[test]
fn bounding_box_encloses_every_route_point() {
    let route = generate(12, "north america", TravelStyle::Mixed, 95);
    let bbox = bounding_box(&route.points).expect("route always has points");
    for p in &route.points {
        assert!(p.lat > bbox.min_lat && p.lat < bbox.max_lat);
        assert!(p.lon > bbox.min_lon && p.lon < bbox.max_lon);
    }
    // The pad guarantees strict clearance on every edge.
    let lat_spread = bbox.max_lat - bbox.min_lat;
    assert!(lat_spread >= 0.4);
}

#[test]
fn snapshot_serialization_round_trips_through_json() {
    let route = generate(5, "oceania", TravelStyle::Backpack, 20);
    let json = serde_json::to_string(&route).unwrap();
    let back: Route = serde_json::from_str(&json).unwrap();
    assert_eq!(export_text(&back), export_text(&route));
}

#[test]
fn scenario_five_day_europe_backpack() {
    let route = generate(5, "Europe", TravelStyle::Backpack, 40);
    assert_eq!(route.title, "5-day Europe backpack adventure");
    assert_eq!(route.meta.region, "Europe");
    assert_eq!(route.summary.estimated_cost_usd, 100);
    let text = export_text(&route);
    assert!(text.starts_with("# 5-day Europe backpack adventure\n"));
    assert!(text.contains("Style: backpack\n"));
    assert!(
        text.contains("Forest paths, lakes and viewpoints with small village stops."),
        "nature=80 must select the nature-forward description"
    );
}
