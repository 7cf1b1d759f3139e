//! Example demonstrating usage without std/chrono dependencies.
//!
//! This shows how to use the library in no_std environments where
//! users handle their own time conversions.

use salah_times::{
    CalculationParameters, CalendarDate, Coordinates, Prayer, Rounding, compute_prayer_times,
    solar::{SolarCoordinates, julian_date},
};

fn main() {
    // Vienna: 48.21°N, 16.37°E, central European summer time (UTC+2)
    const UTC_OFFSET_HOURS: f64 = 2.0;

    println!("Prayer times without std/chrono dependencies\n");

    let vienna = Coordinates::new(48.21, 16.37).expect("Valid coordinates");
    let date = CalendarDate::new(2024, 6, 21).expect("Valid date");

    let jd = julian_date(date);
    let sun = SolarCoordinates::new(jd);
    println!("Julian Date at noon: {jd:.1}");
    println!("Declination: {:.3}°", sun.declination());
    println!("Equation of time: {:.2} min\n", sun.equation_of_time());

    // Custom Fajr and Isha angles, rounded up to the next minute
    let params = CalculationParameters::custom(18.0, 17.0)
        .expect("Valid angles")
        .with_rounding(Rounding::Up);
    let times = compute_prayer_times(vienna, date, &params).expect("Regular day");

    for prayer in Prayer::ALL {
        // Hours since midnight UTC, shifted to local time by hand
        let local = times.time_for(prayer).hours() + UTC_OFFSET_HOURS;
        let minutes = (local * 60.0).round() as i64;
        println!(
            "  {:<8} {:02}:{:02}",
            prayer.name(),
            minutes.div_euclid(60).rem_euclid(24),
            minutes.rem_euclid(60)
        );
    }
}
