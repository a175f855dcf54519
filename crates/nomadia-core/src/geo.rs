//! Geographic primitives: great-circle distance and disc sampling.
//!
//! Sampling scatters waypoints uniformly over a disc around a center point.
//! Longitude offsets divide by `cos(lat)` so physical spacing stays ~equal
//! at higher latitudes; the approximation degrades toward the poles, which
//! are out of scope.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

const KM_PER_LAT_DEGREE: f64 = 111.0;
const EARTH_RADIUS_KM: f64 = 6371.0;

/// A point on the globe in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

/// Great-circle distance between two points in kilometers (haversine).
#[must_use]
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

/// Draw a random point within `radius_km` of `center`.
///
/// `draw` must produce uniform values in `[0, 1)`; callers inject it so
/// sampling is reproducible under test. The first draw picks the radius
/// factor, the second the angle. The `sqrt` on the radius draw keeps the
/// distribution uniform over the disc area rather than biased toward the
/// center.
pub fn scatter_around<F>(center: GeoPoint, radius_km: f64, draw: &mut F) -> GeoPoint
where
    F: FnMut() -> f64,
{
    let r = radius_km / KM_PER_LAT_DEGREE;
    let u = draw();
    let v = draw();
    let w = r * u.sqrt();
    let t = 2.0 * PI * v;
    GeoPoint {
        lat: center.lat + w * t.cos(),
        lon: center.lon + w * t.sin() / center.lat.to_radians().cos(),
    }
}
