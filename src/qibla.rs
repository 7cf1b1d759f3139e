//! Direction and distance to the Kaaba.
//!
//! Both follow the great circle through the location and the Kaaba on a
//! spherical Earth.

use crate::math::{
    asin, atan2, cos, degrees_to_radians, normalize_degrees_0_to_360, radians_to_degrees, sin,
    sqrt, tan,
};
use crate::types::Coordinates;

/// Latitude of the Kaaba in degrees.
pub const KAABA_LATITUDE: f64 = 21.4225241;

/// Longitude of the Kaaba in degrees.
pub const KAABA_LONGITUDE: f64 = 39.8261818;

/// Mean Earth radius in kilometres (IUGG).
const EARTH_RADIUS_KM: f64 = 6371.0088;

/// Calculates the initial great-circle bearing from a location to the Kaaba.
///
/// Returns degrees clockwise from true north (0° to 360°). At the Kaaba itself
/// the bearing is undefined and the result is 0°.
///
/// # Example
/// ```
/// # use salah_times::{qibla, Coordinates};
/// let washington = Coordinates::new(38.9072, -77.0369).unwrap();
/// assert!((qibla::qibla_direction(&washington) - 56.560).abs() < 0.001);
/// ```
#[must_use]
pub fn qibla_direction(coordinates: &Coordinates) -> f64 {
    let latitude = degrees_to_radians(coordinates.latitude());
    let kaaba_latitude = degrees_to_radians(KAABA_LATITUDE);
    let delta_longitude = degrees_to_radians(KAABA_LONGITUDE - coordinates.longitude());

    let bearing = atan2(
        sin(delta_longitude),
        cos(latitude) * tan(kaaba_latitude) - sin(latitude) * cos(delta_longitude),
    );
    normalize_degrees_0_to_360(radians_to_degrees(bearing))
}

/// Calculates the great-circle distance from a location to the Kaaba in kilometres.
///
/// Uses the haversine formula, accurate to about 0.5% against the ellipsoid.
#[must_use]
pub fn distance_to_kaaba(coordinates: &Coordinates) -> f64 {
    let latitude = degrees_to_radians(coordinates.latitude());
    let kaaba_latitude = degrees_to_radians(KAABA_LATITUDE);
    let delta_latitude = kaaba_latitude - latitude;
    let delta_longitude = degrees_to_radians(KAABA_LONGITUDE - coordinates.longitude());

    let haversine = sin(delta_latitude / 2.0) * sin(delta_latitude / 2.0)
        + cos(latitude) * cos(kaaba_latitude) * sin(delta_longitude / 2.0) * sin(delta_longitude / 2.0);

    2.0 * EARTH_RADIUS_KM * asin(sqrt(haversine))
}
