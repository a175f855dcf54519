//! Procedural travel-itinerary generator.
//!
//! Pipeline: resolve a region center, scatter one waypoint per day around it,
//! then synthesize day-by-day legs with distances, durations, costs and
//! lodging into an immutable [`Route`]. Artifact builders derive a map
//! bounding box and a plain-text export from a finished route.

pub mod export;
pub mod geo;
pub mod itinerary;
pub mod region;

pub use export::{bounding_box, export_text, BoundingBox};
pub use geo::{haversine_km, scatter_around, GeoPoint};
pub use itinerary::{
    synthesize, synthesize_with, DayPlan, PreferenceSet, Route, RouteMeta, RouteSummary,
    TravelStyle, TripRequest,
};
pub use region::{resolve_region, RegionCenter, DEFAULT_CENTER};
