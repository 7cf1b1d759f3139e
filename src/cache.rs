//! Keyed cache of computed timetables.
//!
//! Nearby locations share prayer times to within a fraction of a minute, so the
//! cache snaps coordinates to a grid before computing. Entries are keyed by grid
//! cell, date and parameters.

use crate::engine::compute_prayer_times;
use crate::params::CalculationParameters;
use crate::prayer::PrayerTimes;
use crate::time::CalendarDate;
use crate::types::Coordinates;
use crate::{Error, Result};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct CacheKey {
    latitude_cell: i64,
    longitude_cell: i64,
    date: CalendarDate,
    parameters: CalculationParameters,
}

/// Cache of prayer times for callers that query the same days repeatedly.
///
/// The engine itself never caches. Timetables returned from the cache are
/// computed for the centre of the grid cell, which [`PrayerTimes::coordinates`]
/// reports. Errors are not cached.
///
/// # Example
/// ```
/// # use salah_times::{CalculationMethod, CalendarDate, Coordinates, PrayerTimesCache};
/// let mut cache = PrayerTimesCache::new();
/// let params = CalculationMethod::MuslimWorldLeague.parameters();
/// let date = CalendarDate::new(2024, 6, 21).unwrap();
///
/// let a = cache.get_or_compute(Coordinates::new(51.50741, -0.12781).unwrap(), date, &params).unwrap();
/// let b = cache.get_or_compute(Coordinates::new(51.50739, -0.12779).unwrap(), date, &params).unwrap();
/// assert_eq!(a, b);
/// assert_eq!(cache.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct PrayerTimesCache {
    grid: f64,
    entries: HashMap<CacheKey, PrayerTimes>,
}

impl PrayerTimesCache {
    /// Default grid size in degrees (about 1 km).
    pub const DEFAULT_GRID: f64 = 0.01;

    /// Creates an empty cache with the default grid.
    #[must_use]
    pub fn new() -> Self {
        Self {
            grid: Self::DEFAULT_GRID,
            entries: HashMap::new(),
        }
    }

    /// Creates an empty cache with a custom grid size in degrees.
    ///
    /// # Errors
    /// Returns `InvalidAngle` unless the grid is greater than 0° and at most 1°.
    pub fn with_grid(grid: f64) -> Result<Self> {
        if grid.is_nan() || grid <= 0.0 || grid > 1.0 {
            return Err(Error::invalid_angle(grid));
        }
        Ok(Self {
            grid,
            entries: HashMap::new(),
        })
    }

    /// Gets the grid size in degrees.
    #[must_use]
    pub const fn grid(&self) -> f64 {
        self.grid
    }

    /// Gets cached prayer times, computing and storing them on a miss.
    ///
    /// # Errors
    /// Returns any error of [`compute_prayer_times`] for the snapped coordinates.
    pub fn get_or_compute(
        &mut self,
        coordinates: Coordinates,
        date: CalendarDate,
        parameters: &CalculationParameters,
    ) -> Result<PrayerTimes> {
        let latitude_cell = self.cell(coordinates.latitude());
        let longitude_cell = self.cell(coordinates.longitude());
        let key = CacheKey {
            latitude_cell,
            longitude_cell,
            date,
            parameters: *parameters,
        };

        if let Some(times) = self.entries.get(&key) {
            return Ok(*times);
        }

        let snapped = self.snap(latitude_cell, longitude_cell)?;
        let times = compute_prayer_times(snapped, date, parameters)?;
        self.entries.insert(key, times);
        Ok(times)
    }

    /// Gets the number of cached timetables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks whether the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Removes entries for dates before `date`.
    pub fn evict_before(&mut self, date: CalendarDate) {
        self.entries.retain(|key, _| key.date >= date);
    }

    fn cell(&self, degrees: f64) -> i64 {
        (degrees / self.grid).round() as i64
    }

    fn snap(&self, latitude_cell: i64, longitude_cell: i64) -> Result<Coordinates> {
        let latitude = (latitude_cell as f64 * self.grid).clamp(-90.0, 90.0);
        let longitude = (longitude_cell as f64 * self.grid).clamp(-180.0, 180.0);
        Coordinates::new(latitude, longitude)
    }
}

impl Default for PrayerTimesCache {
    fn default() -> Self {
        Self::new()
    }
}
