//! Seasonal twilight of the Moonsighting Committee.
//!
//! Fajr and Isha are given as minute offsets from sunrise and sunset that vary
//! with latitude and season. Each offset is piecewise linear in the number of
//! days since the winter solstice, through four anchor values: winter solstice
//! (a), spring equinox (b), mid-season (c) and summer solstice (d).

use crate::time::CalendarDate;
use crate::types::Shafaq;

/// Minutes from Fajr until sunrise.
pub(super) fn morning_twilight(latitude: f64, date: CalendarDate) -> f64 {
    let factor = latitude.abs() / 55.0;
    interpolate(
        [
            75.0 + 28.65 * factor,
            75.0 + 19.44 * factor,
            75.0 + 32.74 * factor,
            75.0 + 48.10 * factor,
        ],
        days_since_solstice(date, latitude),
    )
}

/// Minutes from sunset until Isha.
pub(super) fn evening_twilight(latitude: f64, date: CalendarDate, shafaq: Shafaq) -> f64 {
    let factor = latitude.abs() / 55.0;
    let anchors = match shafaq {
        Shafaq::General => [
            75.0 + 25.60 * factor,
            75.0 + 2.050 * factor,
            75.0 - 9.21 * factor,
            75.0 + 6.14 * factor,
        ],
        Shafaq::Ahmer => [
            62.0 + 17.40 * factor,
            62.0 - 7.16 * factor,
            62.0 + 5.12 * factor,
            62.0 + 19.44 * factor,
        ],
        Shafaq::Abyad => [
            75.0 + 25.60 * factor,
            75.0 + 7.16 * factor,
            75.0 + 36.84 * factor,
            75.0 + 81.84 * factor,
        ],
    };
    interpolate(anchors, days_since_solstice(date, latitude))
}

/// Days since the local winter solstice (0 to length of year - 1).
fn days_since_solstice(date: CalendarDate, latitude: f64) -> u32 {
    let day_of_year = i64::from(date.day_of_year());
    let days_in_year = i64::from(date.days_in_year());

    let days = if latitude >= 0.0 {
        // December solstice falls ten days before 1 January
        day_of_year + 10
    } else {
        // June solstice
        let offset = if date.is_leap_year() { 173 } else { 172 };
        day_of_year - offset
    };

    days.rem_euclid(days_in_year) as u32
}

fn interpolate([a, b, c, d]: [f64; 4], days: u32) -> f64 {
    let days = f64::from(days);
    if days < 91.0 {
        a + (b - a) / 91.0 * days
    } else if days < 137.0 {
        b + (c - b) / 46.0 * (days - 91.0)
    } else if days < 183.0 {
        c + (d - c) / 46.0 * (days - 137.0)
    } else if days < 229.0 {
        d + (c - d) / 46.0 * (days - 183.0)
    } else if days < 275.0 {
        c + (b - c) / 46.0 * (days - 229.0)
    } else {
        b + (a - b) / 91.0 * (days - 275.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> CalendarDate {
        CalendarDate::new(year, month, day).unwrap()
    }

    #[test]
    fn test_days_since_solstice() {
        assert_eq!(days_since_solstice(date(2023, 1, 1), 40.0), 11);
        assert_eq!(days_since_solstice(date(2023, 12, 21), 40.0), 0);
        assert_eq!(days_since_solstice(date(2023, 12, 31), 40.0), 10);
        assert_eq!(days_since_solstice(date(2024, 12, 21), 40.0), 0);

        assert_eq!(days_since_solstice(date(2023, 6, 21), -33.0), 0);
        assert_eq!(days_since_solstice(date(2024, 6, 21), -33.0), 0);
        assert_eq!(days_since_solstice(date(2023, 1, 1), -33.0), 194);
    }

    #[test]
    fn test_anchor_values_at_equator() {
        // At the equator every anchor collapses to the base offset
        let days = [date(2024, 1, 10), date(2024, 4, 1), date(2024, 7, 1)];
        for day in days {
            assert!((morning_twilight(0.0, day) - 75.0).abs() < 1e-9);
            assert!((evening_twilight(0.0, day, Shafaq::General) - 75.0).abs() < 1e-9);
            assert!((evening_twilight(0.0, day, Shafaq::Ahmer) - 62.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_winter_solstice_anchor() {
        let solstice = date(2023, 12, 21);
        assert!((morning_twilight(55.0, solstice) - 103.65).abs() < 1e-9);
        assert!((evening_twilight(55.0, solstice, Shafaq::General) - 100.6).abs() < 1e-9);
    }

    #[test]
    fn test_shafaq_ordering_in_summer() {
        let summer = date(2024, 6, 21);
        let ahmer = evening_twilight(51.5, summer, Shafaq::Ahmer);
        let general = evening_twilight(51.5, summer, Shafaq::General);
        let abyad = evening_twilight(51.5, summer, Shafaq::Abyad);
        assert!(ahmer < general);
        assert!(general < abyad);
    }

    #[test]
    fn test_interpolation_is_continuous() {
        let anchors = [100.0, 80.0, 90.0, 120.0];
        assert_eq!(interpolate(anchors, 0), 100.0);
        assert!((interpolate(anchors, 91) - 80.0).abs() < 1e-9);
        assert!((interpolate(anchors, 137) - 90.0).abs() < 1e-9);
        assert!((interpolate(anchors, 183) - 120.0).abs() < 1e-9);
        assert!((interpolate(anchors, 229) - 90.0).abs() < 1e-9);
        assert!((interpolate(anchors, 275) - 80.0).abs() < 1e-9);
        assert!((interpolate(anchors, 365) - 100.0).abs() < 0.3);
    }
}
