//! Calendar dates and Julian day arithmetic.
//!
//! Dates are proleptic Gregorian without a time of day. Julian dates follow
//! Meeus, "Astronomical Algorithms", 2nd edition, chapter 7.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::many_single_char_names)]

use crate::math::floor;
use crate::{Error, Result};
#[cfg(feature = "chrono")]
use chrono::{Datelike, NaiveDate};
use icu_calendar::Date;
use icu_calendar::cal::Hijri;
use icu_calendar::cal::hijri::UmmAlQura;

/// Earliest supported year.
const MIN_YEAR: i32 = 1;

/// Latest supported year.
const MAX_YEAR: i32 = 9999;

/// A calendar date (proleptic Gregorian, no time of day).
///
/// # Example
/// ```
/// # use salah_times::CalendarDate;
/// let date = CalendarDate::new(2024, 6, 21).unwrap();
/// assert_eq!(date.day_of_year(), 173);
/// assert_eq!(date.succ().unwrap(), CalendarDate::new(2024, 6, 22).unwrap());
///
/// assert!(CalendarDate::new(2023, 2, 29).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "(i32, u32, u32)", into = "(i32, u32, u32)")
)]
pub struct CalendarDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CalendarDate {
    /// Creates a validated calendar date.
    ///
    /// # Errors
    /// Returns `InvalidDate` if the year is outside 1..=9999, the month outside 1..=12,
    /// or the day does not exist in that month.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(Error::invalid_date("year must be between 1 and 9999"));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::invalid_date("month must be between 1 and 12"));
        }
        if day == 0 || day > days_in_month(year, month) {
            return Err(Error::invalid_date("day is out of range for month"));
        }
        Ok(Self { year, month, day })
    }

    /// Creates a calendar date from any chrono date-like value.
    ///
    /// # Errors
    /// Returns `InvalidDate` if the year is outside the supported range.
    #[cfg(feature = "chrono")]
    #[allow(clippy::needless_pass_by_value)]
    pub fn from_date_like<D: Datelike>(date: D) -> Result<Self> {
        Self::new(date.year(), date.month(), date.day())
    }

    /// Converts to a chrono `NaiveDate`.
    ///
    /// # Errors
    /// Returns `InvalidDate` if chrono cannot represent the date.
    #[cfg(feature = "chrono")]
    pub fn to_naive_date(&self) -> Result<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .ok_or(Error::invalid_date("date is outside the chrono range"))
    }

    /// Gets the year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Gets the month (1-12).
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Gets the day of month (1-31).
    #[must_use]
    pub const fn day(&self) -> u32 {
        self.day
    }

    /// Checks whether the date's year is a Gregorian leap year.
    #[must_use]
    pub const fn is_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }

    /// Number of days in the date's year (365 or 366).
    #[must_use]
    pub const fn days_in_year(&self) -> u32 {
        if self.is_leap_year() { 366 } else { 365 }
    }

    /// Ordinal day of the year, 1 for January 1st.
    #[must_use]
    pub fn day_of_year(&self) -> u32 {
        (1..self.month)
            .map(|month| days_in_month(self.year, month))
            .sum::<u32>()
            + self.day
    }

    /// Chronological Julian Day Number (the integer Julian date at noon UT).
    #[must_use]
    pub fn julian_day_number(&self) -> i64 {
        let a = (14 - i64::from(self.month)) / 12;
        let y = i64::from(self.year) + 4800 - a;
        let m = i64::from(self.month) + 12 * a - 3;
        i64::from(self.day) + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32045
    }

    /// Creates a date from a chronological Julian Day Number.
    ///
    /// # Errors
    /// Returns `InvalidDate` if the resulting year is outside the supported range.
    pub fn from_julian_day_number(jdn: i64) -> Result<Self> {
        if jdn < 0 {
            return Err(Error::invalid_date("julian day number must not be negative"));
        }

        let f = jdn + 1401 + (((4 * jdn + 274_277) / 146_097) * 3) / 4 - 38;
        let e = 4 * f + 3;
        let g = (e % 1461) / 4;
        let h = 5 * g + 2;
        let day = (h % 153) / 5 + 1;
        let month = (h / 153 + 2) % 12 + 1;
        let year = e / 1461 - 4716 + (12 + 2 - month) / 12;

        let year = i32::try_from(year)
            .map_err(|_| Error::invalid_date("year must be between 1 and 9999"))?;
        // day and month are bounded by the modular arithmetic above
        Self::new(year, month as u32, day as u32)
    }

    /// Adds (or with a negative value, subtracts) whole days.
    ///
    /// # Errors
    /// Returns `InvalidDate` if the result leaves the supported range.
    pub fn add_days(&self, days: i64) -> Result<Self> {
        Self::from_julian_day_number(self.julian_day_number() + days)
    }

    /// The following day.
    ///
    /// # Errors
    /// Returns `InvalidDate` after 9999-12-31.
    pub fn succ(&self) -> Result<Self> {
        self.add_days(1)
    }

    /// The preceding day.
    ///
    /// # Errors
    /// Returns `InvalidDate` before 0001-01-01.
    pub fn pred(&self) -> Result<Self> {
        self.add_days(-1)
    }
}

impl TryFrom<(i32, u32, u32)> for CalendarDate {
    type Error = Error;

    fn try_from((year, month, day): (i32, u32, u32)) -> Result<Self> {
        Self::new(year, month, day)
    }
}

impl From<CalendarDate> for (i32, u32, u32) {
    fn from(date: CalendarDate) -> Self {
        (date.year, date.month, date.day)
    }
}

impl core::fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// A date on the Umm al-Qura Islamic calendar.
///
/// Umm al-Qura is the official calendar of Saudi Arabia, tabulated by KACST from
/// Mecca-based lunar calculations. Conversion goes through `icu_calendar`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HijriDate {
    year: i32,
    month: u32,
    day: u32,
}

impl HijriDate {
    /// Month number of Ramadan.
    pub const RAMADAN: u32 = 9;

    /// Converts a Gregorian calendar date to the Umm al-Qura calendar.
    ///
    /// # Errors
    /// Returns `InvalidDate` if the date cannot be represented on the Umm al-Qura calendar.
    ///
    /// # Example
    /// ```
    /// # use salah_times::{CalendarDate, HijriDate};
    /// let hijri = HijriDate::from_calendar_date(CalendarDate::new(2022, 4, 2).unwrap()).unwrap();
    /// assert_eq!((hijri.year(), hijri.month(), hijri.day()), (1443, 9, 1));
    /// assert!(hijri.is_ramadan());
    /// ```
    pub fn from_calendar_date(date: CalendarDate) -> Result<Self> {
        let iso = Date::try_new_iso(date.year, date.month as u8, date.day as u8)
            .map_err(|_| Error::invalid_date("date outside the Umm al-Qura calendar"))?;
        let hijri = iso.to_calendar(Hijri::<UmmAlQura>::new());

        Ok(Self {
            year: hijri.era_year().year,
            month: u32::from(hijri.month().ordinal),
            day: u32::from(hijri.day_of_month().0),
        })
    }

    /// Gets the Hijri year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Gets the Hijri month (1-12).
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Gets the day of the Hijri month (1-30).
    #[must_use]
    pub const fn day(&self) -> u32 {
        self.day
    }

    /// Checks whether the date falls in Ramadan.
    #[must_use]
    pub const fn is_ramadan(&self) -> bool {
        self.month == Self::RAMADAN
    }
}

/// Calculates the Julian Date of a date at the given fraction of the UT day.
///
/// Follows Meeus (chapter 7) with the Gregorian correction applied to every
/// date, since calendar dates here are proleptic Gregorian.
pub(crate) fn calculate_julian_date(year: i32, month: u32, day: u32, day_fraction: f64) -> f64 {
    let mut y = year;
    let mut m = month as i32;

    // January and February count as months 13 and 14 of the previous year
    if m < 3 {
        y -= 1;
        m += 12;
    }

    let d = f64::from(day) + day_fraction;
    let a = floor(f64::from(y) / 100.0);
    let b = 2.0 - a + floor(a / 4.0);

    floor(365.25 * (f64::from(y) + 4716.0)) + floor(30.6001 * f64::from(m + 1)) + d + b - 1524.5
}

const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 31,
    }
}
