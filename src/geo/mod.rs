use consts::{DESTINATION_DELTA_MILES, MILES_PER_DEGREE_LAT};
use models::{LatLng, OffsetError};
use rand::Rng;

pub mod consts;
pub mod models;

pub fn miles_to_degrees_lat(miles: f64) -> f64 {
    miles / MILES_PER_DEGREE_LAT
}

/// Degrees of longitude spanning `miles` at the given latitude. Not finite at the poles.
pub fn miles_to_degrees_lng(miles: f64, lat: f64) -> f64 {
    miles / (MILES_PER_DEGREE_LAT * lat.to_radians().cos())
}

/// Picks a point uniformly inside the box of half-width `DESTINATION_DELTA_MILES` around
/// `source`, each axis drawn independently over `[source - delta, source + delta)`.
pub fn random_nearby<R: Rng + ?Sized>(rng: &mut R, source: LatLng) -> Result<LatLng, OffsetError> {
    if !source.is_valid() {
        return Err(OffsetError::InvalidSource);
    }
    let delta_lat = miles_to_degrees_lat(DESTINATION_DELTA_MILES);
    let delta_lng = miles_to_degrees_lng(DESTINATION_DELTA_MILES, source.lat);
    // Near the poles the box would wrap the whole parallel.
    if !delta_lng.is_finite() || !(0.0..180.0).contains(&delta_lng) {
        return Err(OffsetError::SourceAtPole);
    }
    let r1: f64 = rng.gen();
    let r2: f64 = rng.gen();
    Ok(LatLng {
        lat: (source.lat - delta_lat) + r1 * 2.0 * delta_lat,
        lng: (source.lng - delta_lng) + r2 * 2.0 * delta_lng,
    })
}
