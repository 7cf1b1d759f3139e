//! Core data types for prayer time calculations.

use crate::error::check_coordinates;
use crate::math::{ceil, floor, round};
use crate::Result;

/// A geographic position on the Earth's surface.
///
/// # Example
/// ```
/// # use salah_times::Coordinates;
/// let mecca = Coordinates::new(21.422487, 39.826206).unwrap();
/// assert_eq!(mecca.latitude(), 21.422487);
///
/// assert!(Coordinates::new(91.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawCoordinates", into = "RawCoordinates")
)]
pub struct Coordinates {
    /// Latitude in degrees (-90 to +90, positive north)
    latitude: f64,
    /// Longitude in degrees (-180 to +180, positive east)
    longitude: f64,
}

impl Coordinates {
    /// Creates validated coordinates.
    ///
    /// # Errors
    /// Returns `InvalidCoordinates` if latitude is outside ±90° or longitude outside ±180°.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        check_coordinates(latitude, longitude)?;
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Gets the latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Gets the longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawCoordinates {
    latitude: f64,
    longitude: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCoordinates> for Coordinates {
    type Error = crate::Error;

    fn try_from(raw: RawCoordinates) -> Result<Self> {
        Self::new(raw.latitude, raw.longitude)
    }
}

#[cfg(feature = "serde")]
impl From<Coordinates> for RawCoordinates {
    fn from(coordinates: Coordinates) -> Self {
        Self {
            latitude: coordinates.latitude,
            longitude: coordinates.longitude,
        }
    }
}

/// Hours since midnight UTC that can extend beyond a single day.
///
/// Prayer times are anchored to the calculation date:
/// - Negative values indicate the previous day
/// - 0.0 to < 24.0 indicates the current day
/// - ≥ 24.0 indicates the next day
///
/// # Example
/// ```
/// # use salah_times::HoursUtc;
/// let morning = HoursUtc::from_hours(6.5); // 06:30 current day
/// let after_midnight = HoursUtc::from_hours(24.5); // 00:30 next day
/// let before_midnight_prev = HoursUtc::from_hours(-0.5); // 23:30 previous day
/// assert!(morning < after_midnight);
/// assert_eq!(HoursUtc::from_minutes(390.0), morning);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HoursUtc(f64);

impl HoursUtc {
    /// Creates a new `HoursUtc` from hours since midnight UTC.
    ///
    /// Values can be negative (previous day) or ≥ 24.0 (next day).
    #[must_use]
    pub const fn from_hours(hours: f64) -> Self {
        Self(hours)
    }

    /// Creates a new `HoursUtc` from minutes since midnight UTC.
    #[must_use]
    pub fn from_minutes(minutes: f64) -> Self {
        Self(minutes / 60.0)
    }

    /// Gets the raw hours value.
    ///
    /// Can be negative (previous day) or ≥ 24.0 (next day).
    #[must_use]
    pub const fn hours(&self) -> f64 {
        self.0
    }

    /// Gets the value in minutes since midnight UTC.
    #[must_use]
    pub fn minutes(&self) -> f64 {
        self.0 * 60.0
    }

    /// Returns this instant shifted by a number of minutes.
    #[must_use]
    pub fn add_minutes(self, minutes: f64) -> Self {
        Self(self.0 + minutes / 60.0)
    }

    /// Gets the day offset and normalized hours (0.0 to < 24.0).
    ///
    /// # Returns
    /// Tuple of (`day_offset`, `hours_in_day`) where:
    /// - `day_offset`: whole days offset from the calculation date (negative = previous days, positive = following days)
    /// - `hours_in_day`: 0.0 to < 24.0
    ///
    /// # Example
    /// ```
    /// # use salah_times::HoursUtc;
    /// let time = HoursUtc::from_hours(25.5);
    /// let (day_offset, hours) = time.day_and_hours();
    /// assert_eq!(day_offset, 1);
    /// assert!((hours - 1.5).abs() < 1e-10);
    /// ```
    #[must_use]
    pub fn day_and_hours(&self) -> (i32, f64) {
        let hours = self.0;
        if !hours.is_finite() {
            return (0, hours);
        }

        let mut day_offset_raw = floor(hours / 24.0);
        let mut normalized_hours = hours - day_offset_raw * 24.0;

        if normalized_hours < 0.0 {
            normalized_hours += 24.0;
            day_offset_raw -= 1.0;
        } else if normalized_hours >= 24.0 {
            normalized_hours -= 24.0;
            day_offset_raw += 1.0;
        }

        let day_offset = if day_offset_raw >= f64::from(i32::MAX) {
            i32::MAX
        } else if day_offset_raw <= f64::from(i32::MIN) {
            i32::MIN
        } else {
            day_offset_raw as i32
        };

        (day_offset, normalized_hours)
    }
}

/// Jurisprudential school, which fixes the shadow ratio used for Asr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Madhab {
    /// Shafi, Maliki and Hanbali: Asr begins when a shadow equals the object's height
    #[default]
    Shafi,
    /// Hanafi: Asr begins when a shadow is twice the object's height
    Hanafi,
}

impl Madhab {
    /// Shadow length as a multiple of the object's height.
    #[must_use]
    pub const fn shadow_length(&self) -> f64 {
        match self {
            Self::Shafi => 1.0,
            Self::Hanafi => 2.0,
        }
    }
}

/// Substitute for Fajr and Isha where twilight does not reach the method's angle.
///
/// The substitute is a portion of the night (sunset to the next sunrise), counted
/// back from sunrise for Fajr and forward from sunset for Isha. Apart from the
/// `None` rule, the portion also bounds angle-based times that would fall further
/// into the night than it.
///
/// The rule needs a sunrise and a sunset. Days without them are handled first by
/// the [`PolarCircleResolution`], which by default borrows the nearest latitude with
/// a regular day, so with default parameters only `None` can leave a prayer unresolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HighLatitudeRule {
    /// No substitution: an unreachable angle is reported as
    /// [`Error::SunAngleUnreachable`](crate::Error::SunAngleUnreachable)
    None,
    /// Fajr no earlier than the middle of the night, Isha no later
    #[default]
    MiddleOfTheNight,
    /// Fajr no earlier than the last seventh of the night, Isha no later than the first
    SeventhOfTheNight,
    /// The night portion is the twilight angle divided by 60
    TwilightAngle,
}

impl HighLatitudeRule {
    /// Recommended rule for a location: one seventh of the night above 48°
    /// latitude, the middle of the night elsewhere.
    #[must_use]
    pub fn recommended(coordinates: &Coordinates) -> Self {
        if coordinates.latitude().abs() > 48.0 {
            Self::SeventhOfTheNight
        } else {
            Self::MiddleOfTheNight
        }
    }

    /// Night portion for a twilight depression angle, or `None` for no rule.
    #[must_use]
    pub fn night_portion(&self, twilight_angle: f64) -> Option<f64> {
        match self {
            Self::None => None,
            Self::MiddleOfTheNight => Some(1.0 / 2.0),
            Self::SeventhOfTheNight => Some(1.0 / 7.0),
            Self::TwilightAngle => Some(twilight_angle / 60.0),
        }
    }
}

/// Handling of days on which the sun never rises or never sets.
///
/// Every method preset uses [`AqrabBalad`](Self::AqrabBalad).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PolarCircleResolution {
    /// Report the missing sunrise or sunset as an error
    Unresolved,
    /// Use the nearest latitude (toward the equator) with a regular day
    #[default]
    AqrabBalad,
    /// Use the nearest day of the year with a regular day
    AqrabYaum,
}

/// Rounding applied to every computed instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rounding {
    /// Keep fractional minutes
    None,
    /// Round to the nearest minute
    #[default]
    Nearest,
    /// Round up to the next whole minute
    Up,
    /// Round to the nearest multiple of five minutes
    NearestFive,
}

impl Rounding {
    /// Tolerance absorbing float noise when a value is already on a whole minute.
    const MINUTE_EPSILON: f64 = 1e-6;

    /// Applies the rounding to an instant.
    ///
    /// Rounding is idempotent: applying it to an already rounded value is a no-op.
    ///
    /// # Example
    /// ```
    /// # use salah_times::{HoursUtc, Rounding};
    /// let time = HoursUtc::from_minutes(302.4);
    /// assert_eq!(Rounding::Nearest.apply(time), HoursUtc::from_minutes(302.0));
    /// assert_eq!(Rounding::Up.apply(time), HoursUtc::from_minutes(303.0));
    /// assert_eq!(Rounding::NearestFive.apply(time), HoursUtc::from_minutes(300.0));
    /// ```
    #[must_use]
    pub fn apply(&self, time: HoursUtc) -> HoursUtc {
        let minutes = time.minutes();
        let rounded = match self {
            Self::None => return time,
            Self::Nearest => round(minutes),
            Self::Up => ceil(minutes - Self::MINUTE_EPSILON),
            Self::NearestFive => round(minutes / 5.0) * 5.0,
        };
        HoursUtc::from_minutes(rounded)
    }
}

/// Twilight colour used by the Moonsighting Committee Isha calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Shafaq {
    /// Blend of red and white twilight; suitable everywhere
    #[default]
    General,
    /// Red twilight; gives earlier Isha times
    Ahmer,
    /// White twilight; gives later Isha times
    Abyad,
}
