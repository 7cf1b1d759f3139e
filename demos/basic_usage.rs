//! Basic prayer time calculation example.

use chrono::{FixedOffset, NaiveDate};
use chrono_tz::America::New_York;
use salah_times::{
    CalculationMethod, CalendarDate, Coordinates, Madhab, Prayer, PrayerAdjustments, SunnahTimes,
    compute_prayer_times, qibla::distance_to_kaaba, qibla_direction,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Raleigh, North Carolina
    let raleigh = Coordinates::new(35.7750, -78.6336)?;
    let date = CalendarDate::from_date_like(NaiveDate::from_ymd_opt(2015, 7, 12).ok_or("bad date")?)?;

    let params = CalculationMethod::NorthAmerica
        .parameters()
        .with_madhab(Madhab::Hanafi);
    let times = compute_prayer_times(raleigh, date, &params)?;

    println!("Prayer times for Raleigh on {date} ({}):", params.method());
    for prayer in Prayer::ALL {
        let local = times.in_timezone(prayer, &New_York)?;
        println!("  {:<8} {}", prayer.name(), local.format("%H:%M %Z"));
    }

    // Raw values are hours since midnight UTC of the date
    println!("\nDhuhr as hours UTC: {:.4}", times.dhuhr().hours());

    // Local adjustments on top of the method
    let adjusted = params.with_adjustments(PrayerAdjustments {
        fajr: 2,
        isha: -3,
        ..PrayerAdjustments::ZERO
    });
    let adjusted_times = compute_prayer_times(raleigh, date, &adjusted)?;
    let edt = FixedOffset::west_opt(4 * 3600).ok_or("bad offset")?;
    println!(
        "Adjusted Fajr: {}, adjusted Isha: {}",
        adjusted_times.in_timezone(Prayer::Fajr, &edt)?.format("%H:%M"),
        adjusted_times.in_timezone(Prayer::Isha, &edt)?.format("%H:%M")
    );

    let sunnah = SunnahTimes::new(raleigh, date, &params)?;
    println!(
        "\nMiddle of the night: {:.2} h UTC",
        sunnah.middle_of_the_night().hours()
    );
    println!(
        "Last third of the night: {:.2} h UTC",
        sunnah.last_third_of_the_night().hours()
    );

    println!(
        "\nQibla: {:.2}° from true north, {:.0} km to the Kaaba",
        qibla_direction(&raleigh),
        distance_to_kaaba(&raleigh)
    );

    Ok(())
}
