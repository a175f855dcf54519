//! Itinerary synthesis: turns a [`TripRequest`] into a fully-owned [`Route`].
//!
//! ## Observed model quirks that are load-bearing
//!
//! Daily waypoints are sampled independently around the fixed region center,
//! NOT chained into a connected walk. The resulting legs are therefore
//! center-to-scatter distances massaged into plausible daily hiking ranges,
//! and consumers depend on that distribution.
//!
//! `total_time_hrs` is recomputed from the **rounded** total distance while
//! each day's `time_hrs` rounds its own leg, so the two can diverge by an
//! hour or two. Consumers display both; keep the computations separate.

use serde::{Deserialize, Serialize};

use crate::geo::{haversine_km, scatter_around, GeoPoint};
use crate::region::resolve_region;

const MIN_DAYS: i32 = 2;
const MAX_DAYS: i32 = 30;
const MIN_LEG_KM: f64 = 6.0;
const MAX_LEG_KM: f64 = 28.0;
const BASE_LEG_KM: f64 = 8.0;
const WALKING_PACE_KMH: f64 = 4.5;
const MIN_DAY_HRS: f64 = 3.0;

const NATURE_DESCRIPTION: &str = "Forest paths, lakes and viewpoints with small village stops.";
const CULTURE_DESCRIPTION: &str = "Local markets, heritage streets, and scenic countryside walks.";

const SLEEP_OPTIONS: &[&str] = &[
    "Wild camping near a lake",
    "Forest campsite",
    "Friendly hostel dorm",
    "Volunteering at an eco-farm",
    "Community homestay",
];

/// How the traveler moves and pays; selects the cost tier and nudges the
/// lodging rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelStyle {
    Backpack,
    Mixed,
    Public,
}

impl TravelStyle {
    /// Parse collaborator input into a style.
    ///
    /// Unrecognized values default to `TravelStyle::Backpack`.
    #[must_use]
    pub fn from_input(s: &str) -> TravelStyle {
        match s.trim().to_lowercase().as_str() {
            "mixed" => TravelStyle::Mixed,
            "public" => TravelStyle::Public,
            _ => TravelStyle::Backpack,
        }
    }

    /// Budget estimate per day in USD.
    #[must_use]
    pub fn cost_per_day(self) -> u32 {
        match self {
            TravelStyle::Public => 25,
            TravelStyle::Mixed => 30,
            TravelStyle::Backpack => 20,
        }
    }
}

impl std::fmt::Display for TravelStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TravelStyle::Backpack => write!(f, "backpack"),
            TravelStyle::Mixed => write!(f, "mixed"),
            TravelStyle::Public => write!(f, "public"),
        }
    }
}

/// The five 0–100 preference knobs. All knobs are always present; the
/// constructor clamps to 100 and readers clamp again so a deserialized
/// out-of-range value never widens the domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceSet {
    pub nature: u8,
    pub culture: u8,
    pub people: u8,
    pub remote: u8,
    pub challenge: u8,
}

impl PreferenceSet {
    #[must_use]
    pub fn new(nature: u8, culture: u8, people: u8, remote: u8, challenge: u8) -> Self {
        Self {
            nature: nature.min(100),
            culture: culture.min(100),
            people: people.min(100),
            remote: remote.min(100),
            challenge: challenge.min(100),
        }
    }

    /// Waypoint scatter radius in km: 30 at challenge 0 up to 80 at 100.
    #[must_use]
    pub fn dispersion_radius_km(&self) -> f64 {
        30.0 + f64::from(self.challenge.min(100)) / 100.0 * 50.0
    }

    /// Whether day descriptions lead with nature over culture.
    #[must_use]
    pub fn nature_forward(&self) -> bool {
        self.nature.min(100) > 60
    }
}

/// One generation request, typically assembled from user-editable fields.
///
/// `day_count` outside `[2, 30]` is clamped by the synthesizer, never
/// rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripRequest {
    pub day_count: i32,
    pub region_text: String,
    pub style: TravelStyle,
    pub prefs: PreferenceSet,
}

/// One day of the itinerary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayPlan {
    /// 1-based day number.
    pub day: u32,
    pub coord: GeoPoint,
    /// Leg length in km, always within `[6, 28]`.
    pub distance_km: u32,
    /// Walking time at 4.5 km/h, floored at 3.
    pub time_hrs: u32,
    pub description: String,
    pub sleep: String,
}

/// Aggregate figures derived from the legs; never independently settable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteSummary {
    pub total_distance_km: u32,
    pub total_time_hrs: u32,
    pub estimated_cost_usd: u32,
}

/// The request echo carried on every route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteMeta {
    pub days: u32,
    pub region: String,
    pub style: TravelStyle,
    pub prefs: PreferenceSet,
}

/// A finished itinerary. Produced atomically by [`synthesize`]; owns its
/// point and day sequences outright.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Route {
    /// e.g. `"5-day Europe backpack adventure"`.
    pub title: String,
    pub meta: RouteMeta,
    pub points: Vec<GeoPoint>,
    pub summary: RouteSummary,
    pub days: Vec<DayPlan>,
}

impl Route {
    /// Filename-safe slug of the title: whitespace runs to hyphens,
    /// lower-cased. E.g. `"5-day-europe-backpack-adventure"`.
    #[must_use]
    pub fn slug(&self) -> String {
        self.title
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-")
            .to_lowercase()
    }
}

/// Generate a route using the process-wide random source.
#[must_use]
pub fn synthesize(request: &TripRequest) -> Route {
    let mut draw = rand::random::<f64>;
    synthesize_with(request, &mut draw)
}

/// Generate a route from an injected uniform `[0, 1)` source.
///
/// Total function: out-of-range day counts are clamped, unknown regions fall
/// back to the default center.
pub fn synthesize_with<F>(request: &TripRequest, draw: &mut F) -> Route
where
    F: FnMut() -> f64,
{
    let n = request.day_count.clamp(MIN_DAYS, MAX_DAYS).unsigned_abs();
    let center = resolve_region(&request.region_text);
    let challenge = f64::from(request.prefs.challenge.min(100));
    let radius_km = request.prefs.dispersion_radius_km();

    // Each day's waypoint is an independent draw around the region center,
    // not a step from the previous day (see module docs).
    let points: Vec<GeoPoint> = (0..n)
        .map(|_| scatter_around(center.point(), radius_km, draw))
        .collect();

    // Raw separations become plausible daily hiking legs: day 1 starts at
    // its own point (raw 0), the challenge knob is centered at 50.
    let legs: Vec<f64> = points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let raw = if i == 0 {
                0.0
            } else {
                haversine_km(points[i - 1], *p)
            };
            (raw + BASE_LEG_KM + (challenge - 50.0) / 10.0).clamp(MIN_LEG_KM, MAX_LEG_KM)
        })
        .collect();

    let total_distance_km = legs.iter().sum::<f64>().round() as u32;
    // Recomputed from the rounded total, not summed from per-day hours.
    let total_time_hrs = (f64::from(total_distance_km) / WALKING_PACE_KMH).round() as u32;
    let estimated_cost_usd = if total_distance_km == 0 {
        n * 25
    } else {
        n * request.style.cost_per_day()
    };

    let description = if request.prefs.nature_forward() {
        NATURE_DESCRIPTION
    } else {
        CULTURE_DESCRIPTION
    };

    let days: Vec<DayPlan> = points
        .iter()
        .zip(&legs)
        .enumerate()
        .map(|(i, (p, leg))| {
            let slot = (i + usize::from(request.style == TravelStyle::Mixed)) % SLEEP_OPTIONS.len();
            DayPlan {
                day: i as u32 + 1,
                coord: *p,
                distance_km: leg.round() as u32,
                time_hrs: (leg / WALKING_PACE_KMH).round().max(MIN_DAY_HRS) as u32,
                description: description.to_string(),
                sleep: SLEEP_OPTIONS[slot].to_string(),
            }
        })
        .collect();

    let title = format!("{n}-day {} {} adventure", center.label, request.style);
    tracing::debug!(
        days = n,
        total_distance_km,
        total_time_hrs,
        estimated_cost_usd,
        "generated route"
    );

    Route {
        title,
        meta: RouteMeta {
            days: n,
            region: center.label.to_string(),
            style: request.style,
            prefs: request.prefs,
        },
        points,
        summary: RouteSummary {
            total_distance_km,
            total_time_hrs,
            estimated_cost_usd,
        },
        days,
    }
}
