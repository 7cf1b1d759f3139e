//! # Salah Times
//!
//! Astronomical calculation of the daily Islamic prayer times.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! Given a location, a date and a set of [`CalculationParameters`], the crate computes
//! Fajr, Sunrise, Dhuhr, Asr, Sunset, Maghrib and Isha from the position of the sun.
//! Twelve published calculation methods are available as presets, each resolving to
//! parameters that can be tuned further (madhab, high-latitude rule, adjustments,
//! rounding).
//!
//! ## Features
//!
//! - All published method presets, including the seasonal twilight of the
//!   Moonsighting Committee and the Ramadan Isha interval of Umm al-Qura
//! - High-latitude rules and resolution of polar days and nights
//! - Typed errors instead of missing or NaN times
//! - Multiple configurations: `std` or `no_std`, with or without `chrono`, math via native or `libm`
//! - Thread-safe: stateless functions over immutable values
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions, enables [`PrayerTimesCache`]
//! - `chrono` (default): Enable `DateTime<Tz>` conversions and wall-clock prayer queries
//! - `libm`: Use pure Rust math for `no_std` environments
//! - `serde`: Serialize and deserialize coordinates, dates, parameters and results
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono (most convenient)
//! salah-times = "0.1"
//!
//! # Minimal std (no chrono, smallest dependency tree)
//! salah-times = { version = "0.1", default-features = false, features = ["std"] }
//!
//! # Minimal no_std (pure numeric API)
//! salah-times = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## Quick Start
//!
//! ### Numeric API
//! ```rust
//! use salah_times::{compute_prayer_times, CalculationMethod, CalendarDate, Coordinates, Madhab};
//!
//! let mecca = Coordinates::new(21.422487, 39.826206).unwrap();
//! let date = CalendarDate::new(2024, 6, 21).unwrap();
//! let params = CalculationMethod::UmmAlQura.parameters().with_madhab(Madhab::Shafi);
//!
//! let times = compute_prayer_times(mecca, date, &params).unwrap();
//!
//! // Hours since midnight UTC of the date
//! println!("Fajr:    {:.3}", times.fajr().hours());
//! println!("Maghrib: {:.3}", times.maghrib().hours());
//! assert!(times.fajr() < times.sunrise());
//! ```
//!
//! ### Local times (requires chrono)
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use salah_times::{compute_prayer_times, CalculationMethod, CalendarDate, Coordinates, Prayer};
//! use chrono::{FixedOffset, NaiveDate};
//!
//! let cairo = Coordinates::new(30.0444, 31.2357).unwrap();
//! let date = CalendarDate::from_date_like(NaiveDate::from_ymd_opt(2024, 9, 22).unwrap()).unwrap();
//! let times = compute_prayer_times(cairo, date, &CalculationMethod::Egyptian.parameters()).unwrap();
//!
//! let eet = FixedOffset::east_opt(3 * 3600).unwrap();
//! for prayer in salah_times::Prayer::ALL {
//!     println!("{prayer}: {}", times.in_timezone(prayer, &eet).unwrap().format("%H:%M"));
//! }
//! # let _ = Prayer::Fajr;
//! # }
//! ```
//!
//! ### High latitudes
//! ```rust
//! use salah_times::{compute_prayer_times, CalculationMethod, CalendarDate, Coordinates, Error,
//!     HighLatitudeRule, PolarCircleResolution};
//!
//! let tromso = Coordinates::new(69.6492, 18.9553).unwrap();
//! let date = CalendarDate::new(2024, 6, 21).unwrap();
//! let params = CalculationMethod::MuslimWorldLeague.parameters();
//!
//! // Midnight sun: the presets borrow the times of the nearest latitude with a regular day
//! assert!(compute_prayer_times(tromso, date, &params).is_ok());
//!
//! // Without a resolution there is no sunrise or sunset to anchor the day
//! let unresolved = params.with_polar_circle_resolution(PolarCircleResolution::Unresolved);
//! assert!(matches!(
//!     compute_prayer_times(tromso, date, &unresolved),
//!     Err(Error::SunAngleUnreachable { .. })
//! ));
//!
//! // Borrowing the nearest regular day instead
//! let params = params
//!     .with_polar_circle_resolution(PolarCircleResolution::AqrabYaum)
//!     .with_high_latitude_rule(HighLatitudeRule::SeventhOfTheNight);
//! assert!(compute_prayer_times(tromso, date, &params).is_ok());
//! ```
//!
//! ## Algorithm
//!
//! Solar coordinates follow the low-precision solar theory of Meeus, computed at
//! 0h UT of the day and its neighbours and interpolated to each event. Each prayer
//! is the time the sun reaches a given altitude: 50′ below the horizon for sunrise
//! and sunset, the method's depression angle for Fajr and Isha, and the
//! shadow-length altitude for Asr.
//!
//! ## References
//!
//! - Meeus, J. (1998). Astronomical Algorithms, 2nd edition. Willmann-Bell.
//! - Adhan prayer times library. <https://github.com/batoulapps/adhan>
//! - Moonsighting Committee Worldwide. Fajr and Isha times at higher latitudes.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of rounded minutes in tests
)]

// Public API exports
#[cfg(feature = "std")]
pub use crate::cache::PrayerTimesCache;
pub use crate::engine::{compute_prayer_times, prayer_times_for_days};
pub use crate::error::{Error, Result};
pub use crate::params::{
    CalculationMethod, CalculationParameters, IshaRule, PrayerAdjustments, TwilightBound,
};
pub use crate::prayer::{Prayer, PrayerTimes};
pub use crate::qibla::qibla_direction;
pub use crate::sunnah::SunnahTimes;
pub use crate::time::{CalendarDate, HijriDate};
pub use crate::types::{
    Coordinates, HighLatitudeRule, HoursUtc, Madhab, PolarCircleResolution, Rounding, Shafaq,
};

// Algorithm modules
mod engine;
pub mod qibla;
pub mod solar;

// Core modules
pub mod error;
pub mod params;
pub mod prayer;
pub mod sunnah;
pub mod types;

#[cfg(feature = "std")]
mod cache;

// Internal modules
mod math;

// Public modules
pub mod time;
