//! Error types for the prayer time library.

use crate::prayer::Prayer;
use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur during prayer time calculations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Latitude outside -90..=90 or longitude outside -180..=180 degrees.
    InvalidCoordinates {
        /// The latitude value provided.
        latitude: f64,
        /// The longitude value provided.
        longitude: f64,
    },
    /// Calendar date that does not exist or is outside the supported range.
    InvalidDate {
        /// Description of the date constraint violation.
        message: &'static str,
    },
    /// Twilight angle outside the supported range (0° exclusive to 90° exclusive).
    InvalidAngle {
        /// The invalid angle value provided.
        value: f64,
    },
    /// The sun never reaches the altitude required for a prayer on this day.
    ///
    /// Only returned when neither the high-latitude rule nor the polar circle
    /// resolution of the parameters can substitute a time: with
    /// `HighLatitudeRule::None`, with `PolarCircleResolution::Unresolved` set
    /// explicitly, or with `AqrabYaum` where no nearby day has a sunrise. This is a
    /// degenerate result for the caller to handle, never a partially filled timetable.
    SunAngleUnreachable {
        /// The prayer (or solar event) that could not be computed.
        prayer: Prayer,
        /// Solar altitude in degrees that was never reached.
        altitude: f64,
    },
    /// The computed instants are not strictly increasing.
    ///
    /// Indicates a parameter misconfiguration, such as adjustments that push one
    /// prayer past the next or a custom angle below the sunrise horizon.
    InconsistentOrdering {
        /// The instant that should come first.
        earlier: Prayer,
        /// The instant that came at or before `earlier`.
        later: Prayer,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCoordinates {
                latitude,
                longitude,
            } => {
                write!(
                    f,
                    "invalid coordinates ({latitude}°, {longitude}°) (latitude must be between -90° and +90°, longitude between -180° and +180°)"
                )
            }
            Self::InvalidDate { message } => {
                write!(f, "invalid date: {message}")
            }
            Self::InvalidAngle { value } => {
                write!(f, "invalid angle {value}° (must be between 0° and 90°)")
            }
            Self::SunAngleUnreachable { prayer, altitude } => {
                write!(
                    f,
                    "sun never reaches {altitude}° altitude, {prayer} cannot be calculated"
                )
            }
            Self::InconsistentOrdering { earlier, later } => {
                write!(f, "inconsistent ordering: {later} is not after {earlier}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Creates an invalid coordinates error.
    #[must_use]
    pub const fn invalid_coordinates(latitude: f64, longitude: f64) -> Self {
        Self::InvalidCoordinates {
            latitude,
            longitude,
        }
    }

    /// Creates an invalid date error.
    #[must_use]
    pub const fn invalid_date(message: &'static str) -> Self {
        Self::InvalidDate { message }
    }

    /// Creates an invalid angle error.
    #[must_use]
    pub const fn invalid_angle(value: f64) -> Self {
        Self::InvalidAngle { value }
    }

    /// Creates a sun-angle-unreachable error.
    #[must_use]
    pub const fn sun_angle_unreachable(prayer: Prayer, altitude: f64) -> Self {
        Self::SunAngleUnreachable { prayer, altitude }
    }

    /// Creates an inconsistent ordering error.
    #[must_use]
    pub const fn inconsistent_ordering(earlier: Prayer, later: Prayer) -> Self {
        Self::InconsistentOrdering { earlier, later }
    }
}

/// Validates latitude and longitude ranges.
///
/// # Errors
/// Returns `InvalidCoordinates` if either value is out of range or not finite.
pub fn check_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
        return Err(Error::invalid_coordinates(latitude, longitude));
    }
    Ok(())
}

/// Validates a twilight depression angle (degrees below the horizon).
///
/// # Errors
/// Returns `InvalidAngle` unless the angle is finite and strictly between 0° and 90°.
pub fn check_twilight_angle(angle: f64) -> Result<f64> {
    if angle.is_nan() || angle <= 0.0 || angle >= 90.0 {
        return Err(Error::invalid_angle(angle));
    }
    Ok(angle)
}
