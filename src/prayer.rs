//! Prayer identifiers and the computed timetable for one day.

use crate::time::CalendarDate;
use crate::types::{Coordinates, HoursUtc};
#[cfg(feature = "chrono")]
use crate::Result;
#[cfg(feature = "chrono")]
use chrono::{DateTime, Datelike, TimeZone, Timelike, Utc};
use core::fmt;

/// The instants of a prayer day, in chronological order.
///
/// `Sunrise` and `Sunset` are not prayers but bound them: Fajr ends at sunrise,
/// and Maghrib begins at (or shortly after) sunset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Prayer {
    /// Dawn prayer
    Fajr,
    /// End of Fajr
    Sunrise,
    /// Midday prayer
    Dhuhr,
    /// Afternoon prayer
    Asr,
    /// Geometric sunset
    Sunset,
    /// Sunset prayer
    Maghrib,
    /// Night prayer
    Isha,
}

impl Prayer {
    /// All instants in chronological order.
    pub const ALL: [Self; 7] = [
        Self::Fajr,
        Self::Sunrise,
        Self::Dhuhr,
        Self::Asr,
        Self::Sunset,
        Self::Maghrib,
        Self::Isha,
    ];

    /// Gets the English name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Fajr => "Fajr",
            Self::Sunrise => "Sunrise",
            Self::Dhuhr => "Dhuhr",
            Self::Asr => "Asr",
            Self::Sunset => "Sunset",
            Self::Maghrib => "Maghrib",
            Self::Isha => "Isha",
        }
    }
}

impl fmt::Display for Prayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Prayer times for one date and location.
///
/// Every instant is expressed as [`HoursUtc`] relative to midnight UTC of
/// [`date`](Self::date). Far east or west of Greenwich, Fajr may be negative or
/// Isha may exceed 24 hours. The instants are strictly increasing, except that
/// Maghrib may coincide with Sunset.
///
/// Values are immutable once computed. Use [`compute_prayer_times`](crate::compute_prayer_times)
/// to obtain them.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrayerTimes {
    date: CalendarDate,
    coordinates: Coordinates,
    fajr: HoursUtc,
    sunrise: HoursUtc,
    dhuhr: HoursUtc,
    asr: HoursUtc,
    sunset: HoursUtc,
    maghrib: HoursUtc,
    isha: HoursUtc,
}

impl PrayerTimes {
    /// Assembles a timetable from instants in [`Prayer::ALL`] order.
    pub(crate) const fn from_instants(
        date: CalendarDate,
        coordinates: Coordinates,
        instants: [HoursUtc; 7],
    ) -> Self {
        let [fajr, sunrise, dhuhr, asr, sunset, maghrib, isha] = instants;
        Self {
            date,
            coordinates,
            fajr,
            sunrise,
            dhuhr,
            asr,
            sunset,
            maghrib,
            isha,
        }
    }

    /// Gets the calculation date.
    #[must_use]
    pub const fn date(&self) -> CalendarDate {
        self.date
    }

    /// Gets the location the times were computed for.
    #[must_use]
    pub const fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    /// Gets the start of Fajr.
    #[must_use]
    pub const fn fajr(&self) -> HoursUtc {
        self.fajr
    }

    /// Gets sunrise, including any method adjustment.
    #[must_use]
    pub const fn sunrise(&self) -> HoursUtc {
        self.sunrise
    }

    /// Gets the start of Dhuhr.
    #[must_use]
    pub const fn dhuhr(&self) -> HoursUtc {
        self.dhuhr
    }

    /// Gets the start of Asr.
    #[must_use]
    pub const fn asr(&self) -> HoursUtc {
        self.asr
    }

    /// Gets the geometric sunset (never adjusted).
    #[must_use]
    pub const fn sunset(&self) -> HoursUtc {
        self.sunset
    }

    /// Gets the start of Maghrib.
    #[must_use]
    pub const fn maghrib(&self) -> HoursUtc {
        self.maghrib
    }

    /// Gets the start of Isha.
    #[must_use]
    pub const fn isha(&self) -> HoursUtc {
        self.isha
    }

    /// Gets the instant of a prayer.
    #[must_use]
    pub const fn time_for(&self, prayer: Prayer) -> HoursUtc {
        match prayer {
            Prayer::Fajr => self.fajr,
            Prayer::Sunrise => self.sunrise,
            Prayer::Dhuhr => self.dhuhr,
            Prayer::Asr => self.asr,
            Prayer::Sunset => self.sunset,
            Prayer::Maghrib => self.maghrib,
            Prayer::Isha => self.isha,
        }
    }

    /// All instants in chronological order, paired with their prayer.
    pub fn iter(&self) -> impl Iterator<Item = (Prayer, HoursUtc)> + '_ {
        Prayer::ALL
            .into_iter()
            .map(move |prayer| (prayer, self.time_for(prayer)))
    }

    /// Gets the prayer whose time has most recently started at `at`.
    ///
    /// Returns `None` before Fajr. Sunset is never reported; the period after
    /// it belongs to Asr until Maghrib begins.
    ///
    /// # Example
    /// ```
    /// # use salah_times::{compute_prayer_times, CalculationMethod, CalendarDate, Coordinates, HoursUtc, Prayer};
    /// let coordinates = Coordinates::new(21.422487, 39.826206).unwrap();
    /// let date = CalendarDate::new(2024, 6, 21).unwrap();
    /// let times = compute_prayer_times(coordinates, date, &CalculationMethod::UmmAlQura.parameters()).unwrap();
    ///
    /// assert_eq!(times.current_prayer(times.dhuhr().add_minutes(5.0)), Some(Prayer::Dhuhr));
    /// assert_eq!(times.next_prayer(times.dhuhr().add_minutes(5.0)), Some(Prayer::Asr));
    /// assert_eq!(times.current_prayer(times.fajr().add_minutes(-1.0)), None);
    /// ```
    #[must_use]
    pub fn current_prayer(&self, at: HoursUtc) -> Option<Prayer> {
        self.iter()
            .filter(|(prayer, _)| *prayer != Prayer::Sunset)
            .take_while(|(_, time)| *time <= at)
            .last()
            .map(|(prayer, _)| prayer)
    }

    /// Gets the first prayer starting after `at`.
    ///
    /// Returns `None` once Isha has started; the next prayer then belongs to the
    /// following day's timetable.
    #[must_use]
    pub fn next_prayer(&self, at: HoursUtc) -> Option<Prayer> {
        self.iter()
            .filter(|(prayer, _)| *prayer != Prayer::Sunset)
            .find(|(_, time)| *time > at)
            .map(|(prayer, _)| prayer)
    }
}

#[cfg(feature = "chrono")]
impl PrayerTimes {
    /// Gets the instant of a prayer as a UTC date-time.
    ///
    /// Fractional seconds are rounded to the nearest millisecond.
    ///
    /// # Errors
    /// Returns `InvalidDate` if the instant falls outside chrono's supported range.
    pub fn utc(&self, prayer: Prayer) -> Result<DateTime<Utc>> {
        let midnight = self
            .date
            .to_naive_date()?
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| crate::Error::invalid_date("midnight is not representable"))?
            .and_utc();
        let millis = crate::math::round(self.time_for(prayer).hours() * 3_600_000.0) as i64;
        chrono::Duration::try_milliseconds(millis)
            .and_then(|offset| midnight.checked_add_signed(offset))
            .ok_or_else(|| crate::Error::invalid_date("prayer time is out of range"))
    }

    /// Gets the instant of a prayer as a date-time in the given time zone.
    ///
    /// # Errors
    /// Returns `InvalidDate` if the instant falls outside chrono's supported range.
    ///
    /// # Example
    /// ```
    /// # use salah_times::{compute_prayer_times, CalculationMethod, CalendarDate, Coordinates, Prayer};
    /// use chrono::{FixedOffset, Timelike};
    ///
    /// let coordinates = Coordinates::new(21.422487, 39.826206).unwrap();
    /// let date = CalendarDate::new(2024, 6, 21).unwrap();
    /// let times = compute_prayer_times(coordinates, date, &CalculationMethod::UmmAlQura.parameters()).unwrap();
    ///
    /// let mecca = FixedOffset::east_opt(3 * 3600).unwrap();
    /// let maghrib = times.in_timezone(Prayer::Maghrib, &mecca).unwrap();
    /// assert_eq!((maghrib.hour(), maghrib.minute()), (19, 6));
    /// ```
    pub fn in_timezone<Tz: TimeZone>(&self, prayer: Prayer, timezone: &Tz) -> Result<DateTime<Tz>> {
        Ok(self.utc(prayer)?.with_timezone(timezone))
    }

    /// Gets the prayer whose time has most recently started at a wall-clock instant.
    ///
    /// See [`current_prayer`](Self::current_prayer).
    #[must_use]
    pub fn current_prayer_at<Tz: TimeZone>(&self, at: &DateTime<Tz>) -> Option<Prayer> {
        self.current_prayer(self.hours_since_midnight(at))
    }

    /// Gets the first prayer starting after a wall-clock instant.
    ///
    /// See [`next_prayer`](Self::next_prayer).
    #[must_use]
    pub fn next_prayer_at<Tz: TimeZone>(&self, at: &DateTime<Tz>) -> Option<Prayer> {
        self.next_prayer(self.hours_since_midnight(at))
    }

    /// Converts a date-time to hours since midnight UTC of the calculation date.
    fn hours_since_midnight<Tz: TimeZone>(&self, at: &DateTime<Tz>) -> HoursUtc {
        // Day 1 of the common era is Julian Day Number 1721426
        const CE_JDN_OFFSET: i64 = 1_721_425;

        let utc = at.with_timezone(&Utc);
        let day_offset = i64::from(utc.date_naive().num_days_from_ce()) + CE_JDN_OFFSET
            - self.date.julian_day_number();
        let seconds = f64::from(utc.num_seconds_from_midnight())
            + f64::from(utc.nanosecond()) / 1_000_000_000.0;

        HoursUtc::from_hours(day_offset as f64 * 24.0 + seconds / 3600.0)
    }
}
