//! Prayer times near and beyond the polar circle.

use salah_times::{
    CalculationMethod, CalendarDate, Coordinates, Error, HighLatitudeRule, PolarCircleResolution,
    Prayer, compute_prayer_times,
};

fn print_times(label: &str, result: Result<salah_times::PrayerTimes, Error>) {
    match result {
        Ok(times) => {
            print!("  {label:<22}");
            for prayer in Prayer::ALL {
                let (day, hours) = times.time_for(prayer).day_and_hours();
                let minutes = (hours * 60.0).round() as i64;
                let marker = if day == 0 { "" } else { "*" };
                print!(" {:02}:{:02}{marker}", minutes / 60, minutes % 60);
            }
            println!();
        }
        Err(error) => println!("  {label:<22} {error}"),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let oslo = Coordinates::new(59.9139, 10.7522)?;
    let tromso = Coordinates::new(69.6492, 18.9553)?;
    let midsummer = CalendarDate::new(2024, 6, 21)?;
    let base = CalculationMethod::MuslimWorldLeague.parameters();

    println!("Oslo, {midsummer} (UTC, * = other day)");
    for rule in [
        HighLatitudeRule::None,
        HighLatitudeRule::MiddleOfTheNight,
        HighLatitudeRule::SeventhOfTheNight,
        HighLatitudeRule::TwilightAngle,
    ] {
        let params = base.with_high_latitude_rule(rule);
        print_times(&format!("{rule:?}"), compute_prayer_times(oslo, midsummer, &params));
    }
    println!(
        "  recommended rule: {:?}",
        HighLatitudeRule::recommended(&oslo)
    );

    println!("\nTromsø, {midsummer} (midnight sun)");
    for resolution in [
        PolarCircleResolution::Unresolved,
        PolarCircleResolution::AqrabBalad,
        PolarCircleResolution::AqrabYaum,
    ] {
        let params = base
            .with_high_latitude_rule(HighLatitudeRule::SeventhOfTheNight)
            .with_polar_circle_resolution(resolution);
        print_times(
            &format!("{resolution:?}"),
            compute_prayer_times(tromso, midsummer, &params),
        );
    }

    Ok(())
}
