//! Recommended night times derived from two consecutive timetables.

use crate::engine::compute_prayer_times;
use crate::params::CalculationParameters;
use crate::prayer::PrayerTimes;
use crate::time::CalendarDate;
use crate::types::{Coordinates, HoursUtc, Rounding};
use crate::{Error, Result};

/// The middle and last third of the night following a day.
///
/// The night runs from Maghrib to the next day's Fajr. Both instants are hours
/// since midnight UTC of the day, so they usually exceed 24.
///
/// # Example
/// ```
/// # use salah_times::{CalculationMethod, CalendarDate, Coordinates, SunnahTimes};
/// let cairo = Coordinates::new(30.0444, 31.2357).unwrap();
/// let date = CalendarDate::new(2024, 9, 22).unwrap();
/// let sunnah = SunnahTimes::new(cairo, date, &CalculationMethod::Egyptian.parameters()).unwrap();
///
/// assert!(sunnah.middle_of_the_night() < sunnah.last_third_of_the_night());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SunnahTimes {
    middle_of_the_night: HoursUtc,
    last_third_of_the_night: HoursUtc,
}

impl SunnahTimes {
    /// Computes the night times following a date.
    ///
    /// # Errors
    /// Returns any error of [`compute_prayer_times`] for the date or the day after it.
    pub fn new(
        coordinates: Coordinates,
        date: CalendarDate,
        parameters: &CalculationParameters,
    ) -> Result<Self> {
        let today = compute_prayer_times(coordinates, date, parameters)?;
        let tomorrow = compute_prayer_times(coordinates, date.succ()?, parameters)?;
        Self::from_prayer_times(&today, &tomorrow)
    }

    /// Derives the night times from a day's timetable and the following day's.
    ///
    /// # Errors
    /// Returns `InvalidDate` unless `tomorrow` is the day after `today`.
    pub fn from_prayer_times(today: &PrayerTimes, tomorrow: &PrayerTimes) -> Result<Self> {
        if tomorrow.date() != today.date().succ()? {
            return Err(Error::invalid_date(
                "second timetable must be for the following day",
            ));
        }

        let maghrib = today.maghrib().hours();
        let night = tomorrow.fajr().hours() + 24.0 - maghrib;

        Ok(Self {
            middle_of_the_night: Rounding::Nearest
                .apply(HoursUtc::from_hours(maghrib + night / 2.0)),
            last_third_of_the_night: Rounding::Nearest
                .apply(HoursUtc::from_hours(maghrib + night * 2.0 / 3.0)),
        })
    }

    /// Gets the middle of the night.
    #[must_use]
    pub const fn middle_of_the_night(&self) -> HoursUtc {
        self.middle_of_the_night
    }

    /// Gets the start of the last third of the night.
    #[must_use]
    pub const fn last_third_of_the_night(&self) -> HoursUtc {
        self.last_third_of_the_night
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CalculationMethod;

    #[test]
    fn test_night_fractions() {
        let coordinates = Coordinates::new(35.7750, -78.6336).unwrap();
        let params = CalculationMethod::NorthAmerica.parameters();
        let date = CalendarDate::new(2015, 7, 12).unwrap();

        let today = compute_prayer_times(coordinates, date, &params).unwrap();
        let tomorrow = compute_prayer_times(coordinates, date.succ().unwrap(), &params).unwrap();
        let sunnah = SunnahTimes::from_prayer_times(&today, &tomorrow).unwrap();

        let night = tomorrow.fajr().minutes() + 1440.0 - today.maghrib().minutes();
        let middle = sunnah.middle_of_the_night().minutes() - today.maghrib().minutes();
        let last_third = sunnah.last_third_of_the_night().minutes() - today.maghrib().minutes();

        assert!((middle - night / 2.0).abs() <= 0.5 + 1e-9);
        assert!((last_third - night * 2.0 / 3.0).abs() <= 0.5 + 1e-9);
        assert!(sunnah.last_third_of_the_night().hours() > 24.0);
        assert_eq!(
            SunnahTimes::new(coordinates, date, &params).unwrap(),
            sunnah
        );
    }

    #[test]
    fn test_rejects_non_consecutive_days() {
        let coordinates = Coordinates::new(21.422487, 39.826206).unwrap();
        let params = CalculationMethod::UmmAlQura.parameters();
        let date = CalendarDate::new(2024, 6, 21).unwrap();

        let today = compute_prayer_times(coordinates, date, &params).unwrap();
        assert!(matches!(
            SunnahTimes::from_prayer_times(&today, &today),
            Err(Error::InvalidDate { .. })
        ));
    }
}
