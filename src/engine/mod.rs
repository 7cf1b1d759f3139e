//! Prayer time computation for a day.
//!
//! The computation follows the dependency chain of the day: solar transit
//! (Dhuhr), then sunrise and sunset, Asr, and finally Fajr and Isha, which
//! depend on the length of the night. Fajr and Isha are bounded by the
//! high-latitude rule or the seasonal twilight of the method. Adjustments and
//! rounding are applied last, followed by a check that the instants are in
//! order.
//!
//! The sun's position is evaluated once per day, at 0h UT of the day and its
//! neighbours; every event of the day interpolates between those positions.

mod seasonal;

use crate::params::{CalculationParameters, IshaRule, TwilightBound};
use crate::prayer::{Prayer, PrayerTimes};
use crate::solar::{
    SolarTime, SunAngleUnreachable, SUNRISE_SUNSET_ALTITUDE, asr_shadow_angle, julian_date,
};
use crate::time::{CalendarDate, HijriDate};
use crate::types::{Coordinates, HoursUtc, PolarCircleResolution};
use crate::{Error, Result};
use core::cmp::Ordering;

/// Latitude from which a day may lack a sunrise or sunset.
const UNSAFE_LATITUDE: f64 = 65.0;

/// Latitude step when searching for the nearest regular latitude.
const LATITUDE_VARIATION_STEP: f64 = 0.5;

/// Latitude from which seasonal twilight starts from a seventh of the night.
const SEASONAL_NIGHT_LATITUDE: f64 = 55.0;

/// Furthest day searched for the nearest regular day.
const MAX_DAY_VARIATION: i64 = 183;

/// Computes the prayer times of a day.
///
/// All instants are hours since midnight UTC of `date`. Converting them to local
/// wall-clock time is up to the caller (see [`PrayerTimes::in_timezone`] with the
/// `chrono` feature).
///
/// # Errors
/// - `InvalidAngle` if the parameters carry an angle outside (0°, 90°)
/// - `SunAngleUnreachable` if the sun does not rise or set and the polar circle
///   resolution is [`PolarCircleResolution::Unresolved`], or if Fajr or Isha has no
///   angle solution and the high-latitude rule is [`HighLatitudeRule::None`](crate::HighLatitudeRule::None)
/// - `InconsistentOrdering` if adjustments or custom angles break the order of the instants
///
/// # Example
/// ```
/// # use salah_times::{compute_prayer_times, CalculationMethod, CalendarDate, Coordinates, Madhab};
/// let raleigh = Coordinates::new(35.7750, -78.6336).unwrap();
/// let date = CalendarDate::new(2015, 7, 12).unwrap();
/// let params = CalculationMethod::NorthAmerica.parameters().with_madhab(Madhab::Hanafi);
///
/// let times = compute_prayer_times(raleigh, date, &params).unwrap();
///
/// // 13:21 EDT is 17:21 UTC
/// assert!((times.dhuhr().minutes() - (17.0 * 60.0 + 21.0)).abs() < 1e-9);
/// assert!(times.fajr() < times.sunrise());
/// ```
pub fn compute_prayer_times(
    coordinates: Coordinates,
    date: CalendarDate,
    parameters: &CalculationParameters,
) -> Result<PrayerTimes> {
    parameters.validate()?;

    let day = resolve_solar_day(&coordinates, date, parameters.polar_circle_resolution())?;

    let asr_altitude =
        asr_shadow_angle(parameters.madhab(), day.latitude, day.solar.declination());
    let asr = day
        .solar
        .time_for_altitude(asr_altitude, true)
        .map_err(|unreachable| unreachable_error(Prayer::Asr, unreachable))?;
    let fajr = fajr(&day, parameters)?;
    let isha = isha(&day, date, parameters)?;

    let adjustments = parameters.total_adjustments();
    let rounding = parameters.rounding();
    let finalize = |prayer: Prayer, hours: f64| {
        let minutes = f64::from(adjustments.for_prayer(prayer));
        rounding.apply(HoursUtc::from_hours(hours).add_minutes(minutes))
    };

    let mut instants = [
        (Prayer::Fajr, fajr),
        (Prayer::Sunrise, day.sunrise),
        (Prayer::Dhuhr, day.solar.transit()),
        (Prayer::Asr, asr),
        (Prayer::Sunset, day.sunset),
        (Prayer::Maghrib, day.sunset),
        (Prayer::Isha, isha),
    ]
    .map(|(prayer, hours)| finalize(prayer, hours));

    // The Maghrib angle only applies while it falls between sunset and Isha
    if let Some(angle) = parameters.maghrib_angle() {
        if let Ok(hours) = day.solar.time_for_altitude(-angle, true) {
            let candidate = finalize(Prayer::Maghrib, hours);
            if instants[4] < candidate && candidate < instants[6] {
                instants[5] = candidate;
            }
        }
    }

    check_ordering(&instants)?;

    Ok(PrayerTimes::from_instants(date, coordinates, instants))
}

/// Computes prayer times for consecutive days starting at `start`.
///
/// Each day is computed independently; a failing day does not stop the
/// iteration.
///
/// # Example
/// ```
/// # use salah_times::{prayer_times_for_days, CalculationMethod, CalendarDate, Coordinates};
/// let cairo = Coordinates::new(30.0444, 31.2357).unwrap();
/// let start = CalendarDate::new(2024, 2, 1).unwrap();
/// let params = CalculationMethod::Egyptian.parameters();
///
/// let month: Vec<_> = prayer_times_for_days(cairo, start, 29, params)
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(month.len(), 29);
/// assert_eq!(month[28].date(), CalendarDate::new(2024, 2, 29).unwrap());
/// ```
pub fn prayer_times_for_days(
    coordinates: Coordinates,
    start: CalendarDate,
    days: u32,
    parameters: CalculationParameters,
) -> impl Iterator<Item = Result<PrayerTimes>> {
    (0..days).map(move |offset| {
        let date = start.add_days(i64::from(offset))?;
        compute_prayer_times(coordinates, date, &parameters)
    })
}

/// Solar events of one day, in hours since midnight UTC of `date`.
#[derive(Debug, Clone, Copy)]
struct SolarDay {
    date: CalendarDate,
    latitude: f64,
    solar: SolarTime,
    sunrise: f64,
    sunset: f64,
    next_sunrise: f64,
}

impl SolarDay {
    /// Computes the day, failing if it or the following day lacks a sunrise or sunset.
    fn new(latitude: f64, longitude: f64, date: CalendarDate) -> Result<Self> {
        let julian_date = julian_date(date);
        let solar = SolarTime::for_julian_date(latitude, longitude, julian_date);
        let tomorrow = SolarTime::for_julian_date(latitude, longitude, julian_date + 1.0);

        Ok(Self {
            date,
            latitude,
            solar,
            sunrise: horizon(&solar, false)?,
            sunset: horizon(&solar, true)?,
            next_sunrise: 24.0 + horizon(&tomorrow, false)?,
        })
    }

    /// Sunset to the next sunrise, in hours.
    fn night(&self) -> f64 {
        self.next_sunrise - self.sunset
    }
}

fn horizon(solar: &SolarTime, after_transit: bool) -> Result<f64> {
    solar
        .time_for_altitude(SUNRISE_SUNSET_ALTITUDE, after_transit)
        .map_err(|unreachable| unreachable_error(Prayer::Sunrise, unreachable))
}

fn unreachable_error(prayer: Prayer, unreachable: SunAngleUnreachable) -> Error {
    Error::sun_angle_unreachable(prayer, unreachable.altitude())
}

/// Finds the solar day to compute with, substituting a nearby one for polar days and nights.
fn resolve_solar_day(
    coordinates: &Coordinates,
    date: CalendarDate,
    resolution: PolarCircleResolution,
) -> Result<SolarDay> {
    let (latitude, longitude) = (coordinates.latitude(), coordinates.longitude());
    let error = match SolarDay::new(latitude, longitude, date) {
        Ok(day) => return Ok(day),
        Err(error) => error,
    };

    let resolved = match resolution {
        PolarCircleResolution::Unresolved => None,
        PolarCircleResolution::AqrabBalad => nearest_regular_latitude(latitude, longitude, date),
        PolarCircleResolution::AqrabYaum => nearest_regular_day(latitude, longitude, date),
    };
    resolved.ok_or(error)
}

/// Steps the latitude toward the equator until the day has a sunrise and sunset.
fn nearest_regular_latitude(latitude: f64, longitude: f64, date: CalendarDate) -> Option<SolarDay> {
    let step = LATITUDE_VARIATION_STEP * latitude.signum();
    let mut candidate = latitude;
    while candidate.abs() >= UNSAFE_LATITUDE {
        candidate -= step;
        if let Ok(day) = SolarDay::new(candidate, longitude, date) {
            return Some(day);
        }
    }
    None
}

/// Searches the days around `date`, nearest first, for one with a sunrise and sunset.
///
/// The times of that day are used as times of day for `date`.
fn nearest_regular_day(latitude: f64, longitude: f64, date: CalendarDate) -> Option<SolarDay> {
    (1..=MAX_DAY_VARIATION)
        .flat_map(|offset| [offset, -offset])
        .filter_map(|offset| date.add_days(offset).ok())
        .find_map(|candidate| SolarDay::new(latitude, longitude, candidate).ok())
}

fn fajr(day: &SolarDay, parameters: &CalculationParameters) -> Result<f64> {
    let altitude = -parameters.fajr_angle();
    let mut fajr = day.solar.time_for_altitude(altitude, false);

    let bound = match parameters.twilight_bound() {
        TwilightBound::Seasonal(_) => {
            if day.latitude.abs() >= SEASONAL_NIGHT_LATITUDE {
                fajr = Ok(day.sunrise - day.night() / 7.0);
            }
            Some(day.sunrise - seasonal::morning_twilight(day.latitude, day.date) / 60.0)
        }
        TwilightBound::NightPortion => parameters
            .night_portions()
            .map(|(portion, _)| day.sunrise - portion * day.night()),
    };

    match (fajr, bound) {
        (Ok(fajr), Some(earliest)) => Ok(fajr.max(earliest)),
        (Ok(fajr), None) => Ok(fajr),
        (Err(_), Some(earliest)) => Ok(earliest),
        (Err(unreachable), None) => Err(unreachable_error(Prayer::Fajr, unreachable)),
    }
}

fn isha(day: &SolarDay, date: CalendarDate, parameters: &CalculationParameters) -> Result<f64> {
    let angle = match parameters.isha_rule() {
        IshaRule::Angle(angle) => angle,
        IshaRule::Interval {
            minutes,
            ramadan_minutes,
        } => {
            let minutes = match ramadan_minutes {
                Some(ramadan) if HijriDate::from_calendar_date(date)?.is_ramadan() => ramadan,
                _ => minutes,
            };
            return Ok(day.sunset + f64::from(minutes) / 60.0);
        }
    };

    let mut isha = day.solar.time_for_altitude(-angle, true);

    let bound = match parameters.twilight_bound() {
        TwilightBound::Seasonal(shafaq) => {
            if day.latitude.abs() >= SEASONAL_NIGHT_LATITUDE {
                isha = Ok(day.sunset + day.night() / 7.0);
            }
            Some(day.sunset + seasonal::evening_twilight(day.latitude, day.date, shafaq) / 60.0)
        }
        TwilightBound::NightPortion => parameters
            .night_portions()
            .map(|(_, portion)| day.sunset + portion * day.night()),
    };

    match (isha, bound) {
        (Ok(isha), Some(latest)) => Ok(isha.min(latest)),
        (Ok(isha), None) => Ok(isha),
        (Err(_), Some(latest)) => Ok(latest),
        (Err(unreachable), None) => Err(unreachable_error(Prayer::Isha, unreachable)),
    }
}

/// Checks Fajr < Sunrise < Dhuhr < Asr < Sunset ≤ Maghrib < Isha.
fn check_ordering(instants: &[HoursUtc; 7]) -> Result<()> {
    for (index, pair) in instants.windows(2).enumerate() {
        let (earlier, later) = (Prayer::ALL[index], Prayer::ALL[index + 1]);
        let ordered = match pair[0].partial_cmp(&pair[1]) {
            Some(Ordering::Less) => true,
            Some(Ordering::Equal) => earlier == Prayer::Sunset,
            _ => false,
        };
        if !ordered {
            return Err(Error::inconsistent_ordering(earlier, later));
        }
    }
    Ok(())
}
