//! Monthly timetable with the Hijri date and local times.

use chrono_tz::Asia::Riyadh;
use salah_times::{
    CalculationMethod, CalendarDate, Coordinates, HijriDate, Prayer, prayer_times_for_days,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mecca = Coordinates::new(21.422487, 39.826206)?;
    let start = CalendarDate::new(2024, 3, 1)?;
    let params = CalculationMethod::UmmAlQura.parameters();

    println!("Umm al-Qura timetable for Mecca, March 2024\n");
    print!("{:<12} {:<12}", "Date", "Hijri");
    for prayer in Prayer::ALL {
        if prayer != Prayer::Sunset {
            print!(" {:>7}", prayer.name());
        }
    }
    println!();

    for times in prayer_times_for_days(mecca, start, 31, params) {
        let times = times?;
        let hijri = HijriDate::from_calendar_date(times.date())?;
        let hijri = format!("{}-{:02}-{:02}", hijri.year(), hijri.month(), hijri.day());

        print!("{:<12} {hijri:<12}", times.date().to_string());
        for prayer in Prayer::ALL {
            if prayer != Prayer::Sunset {
                print!(" {:>7}", times.in_timezone(prayer, &Riyadh)?.format("%H:%M"));
            }
        }
        println!();
    }

    Ok(())
}
