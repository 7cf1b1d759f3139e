//! Calculation parameters and the method presets that populate them.

use crate::error::check_twilight_angle;
use crate::prayer::Prayer;
use crate::types::{HighLatitudeRule, Madhab, PolarCircleResolution, Rounding, Shafaq};
use crate::Result;
use core::hash::{Hash, Hasher};

/// A named calculation method published by an authority.
///
/// Each method resolves to a complete [`CalculationParameters`] value through
/// [`parameters`](Self::parameters).
///
/// # Example
/// ```
/// # use salah_times::{CalculationMethod, IshaRule, Madhab};
/// let params = CalculationMethod::UmmAlQura.parameters().with_madhab(Madhab::Hanafi);
/// assert_eq!(params.fajr_angle(), 18.5);
/// assert!(matches!(params.isha_rule(), IshaRule::Interval { minutes: 90, .. }));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CalculationMethod {
    /// Muslim World League: Fajr 18°, Isha 17°
    MuslimWorldLeague,
    /// Egyptian General Authority of Survey: Fajr 19.5°, Isha 17.5°
    Egyptian,
    /// University of Islamic Sciences, Karachi: Fajr 18°, Isha 18°
    Karachi,
    /// Umm al-Qura University, Makkah: Fajr 18.5°, Isha 90 minutes after Maghrib (120 in Ramadan)
    UmmAlQura,
    /// Gulf region as used in the UAE: Fajr 18.2°, Isha 18.2°
    Dubai,
    /// Moonsighting Committee Worldwide: Fajr 18°, Isha 18°, seasonally bounded twilight
    MoonsightingCommittee,
    /// Islamic Society of North America: Fajr 15°, Isha 15°
    NorthAmerica,
    /// Kuwait: Fajr 18°, Isha 17.5°
    Kuwait,
    /// Qatar: Fajr 18°, Isha 90 minutes after Maghrib
    Qatar,
    /// Majlis Ugama Islam Singapura: Fajr 20°, Isha 18°
    Singapore,
    /// Institute of Geophysics, University of Tehran: Fajr 17.7°, Isha 14°, Maghrib 4.5°
    Tehran,
    /// Diyanet İşleri Başkanlığı, Turkey: Fajr 18°, Isha 17°
    Turkey,
    /// Caller-supplied angles (see [`CalculationParameters::custom`])
    Other,
}

impl CalculationMethod {
    /// All methods.
    pub const ALL: [Self; 13] = [
        Self::MuslimWorldLeague,
        Self::Egyptian,
        Self::Karachi,
        Self::UmmAlQura,
        Self::Dubai,
        Self::MoonsightingCommittee,
        Self::NorthAmerica,
        Self::Kuwait,
        Self::Qatar,
        Self::Singapore,
        Self::Tehran,
        Self::Turkey,
        Self::Other,
    ];

    /// Resolves the method to its parameters.
    ///
    /// `Other` resolves to Fajr 18° and Isha 17° without adjustments, as a starting
    /// point for caller-supplied angles.
    #[must_use]
    pub const fn parameters(self) -> CalculationParameters {
        const NONE: PrayerAdjustments = PrayerAdjustments::ZERO;
        const DHUHR_MARGIN: PrayerAdjustments = PrayerAdjustments {
            dhuhr: 1,
            ..PrayerAdjustments::ZERO
        };

        match self {
            Self::MuslimWorldLeague => angles(self, 18.0, 17.0, DHUHR_MARGIN),
            Self::Egyptian => angles(self, 19.5, 17.5, DHUHR_MARGIN),
            Self::Karachi => angles(self, 18.0, 18.0, DHUHR_MARGIN),
            Self::UmmAlQura => {
                let mut params = angles(self, 18.5, 0.0, NONE);
                params.isha = IshaRule::Interval {
                    minutes: 90,
                    ramadan_minutes: Some(120),
                };
                params
            }
            Self::Dubai => angles(
                self,
                18.2,
                18.2,
                PrayerAdjustments {
                    sunrise: -3,
                    dhuhr: 3,
                    asr: 3,
                    maghrib: 3,
                    ..PrayerAdjustments::ZERO
                },
            ),
            Self::MoonsightingCommittee => {
                let mut params = angles(
                    self,
                    18.0,
                    18.0,
                    PrayerAdjustments {
                        dhuhr: 5,
                        maghrib: 3,
                        ..PrayerAdjustments::ZERO
                    },
                );
                params.twilight_bound = TwilightBound::Seasonal(Shafaq::General);
                params
            }
            Self::NorthAmerica => angles(self, 15.0, 15.0, DHUHR_MARGIN),
            Self::Kuwait => angles(self, 18.0, 17.5, NONE),
            Self::Qatar => {
                let mut params = angles(self, 18.0, 0.0, NONE);
                params.isha = IshaRule::Interval {
                    minutes: 90,
                    ramadan_minutes: None,
                };
                params
            }
            Self::Singapore => {
                let mut params = angles(self, 20.0, 18.0, DHUHR_MARGIN);
                params.rounding = Rounding::Up;
                params
            }
            Self::Tehran => {
                let mut params = angles(self, 17.7, 14.0, NONE);
                params.maghrib_angle = 4.5;
                params
            }
            Self::Turkey => angles(
                self,
                18.0,
                17.0,
                PrayerAdjustments {
                    sunrise: -7,
                    dhuhr: 5,
                    asr: 4,
                    maghrib: 7,
                    ..PrayerAdjustments::ZERO
                },
            ),
            Self::Other => angles(self, 18.0, 17.0, NONE),
        }
    }

    /// Gets a short display name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::MuslimWorldLeague => "Muslim World League",
            Self::Egyptian => "Egyptian General Authority of Survey",
            Self::Karachi => "University of Islamic Sciences, Karachi",
            Self::UmmAlQura => "Umm al-Qura, Makkah",
            Self::Dubai => "Dubai",
            Self::MoonsightingCommittee => "Moonsighting Committee",
            Self::NorthAmerica => "Islamic Society of North America",
            Self::Kuwait => "Kuwait",
            Self::Qatar => "Qatar",
            Self::Singapore => "Singapore",
            Self::Tehran => "Institute of Geophysics, University of Tehran",
            Self::Turkey => "Diyanet, Turkey",
            Self::Other => "Other",
        }
    }
}

impl core::fmt::Display for CalculationMethod {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

const fn angles(
    method: CalculationMethod,
    fajr_angle: f64,
    isha_angle: f64,
    method_adjustments: PrayerAdjustments,
) -> CalculationParameters {
    CalculationParameters {
        method,
        fajr_angle,
        isha: IshaRule::Angle(isha_angle),
        maghrib_angle: 0.0,
        madhab: Madhab::Shafi,
        high_latitude_rule: HighLatitudeRule::MiddleOfTheNight,
        polar_circle_resolution: PolarCircleResolution::AqrabBalad,
        rounding: Rounding::Nearest,
        twilight_bound: TwilightBound::NightPortion,
        method_adjustments,
        adjustments: PrayerAdjustments::ZERO,
    }
}

/// How Isha is determined.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IshaRule {
    /// The sun reaches this depression angle (degrees below the horizon)
    Angle(f64),
    /// A fixed interval after sunset
    Interval {
        /// Minutes after sunset
        minutes: u32,
        /// Minutes after sunset during Ramadan, if different
        ramadan_minutes: Option<u32>,
    },
}

impl Eq for IshaRule {}

impl Hash for IshaRule {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Angle(angle) => {
                0.hash(state);
                hash_f64(*angle, state);
            }
            Self::Interval {
                minutes,
                ramadan_minutes,
            } => {
                1.hash(state);
                minutes.hash(state);
                ramadan_minutes.hash(state);
            }
        }
    }
}

/// Bound that keeps Fajr and Isha from drifting too far into the night.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TwilightBound {
    /// A portion of the night, as chosen by the [`HighLatitudeRule`]
    #[default]
    NightPortion,
    /// Seasonal minute offsets from sunrise and sunset (Moonsighting Committee)
    Seasonal(Shafaq),
}

/// Signed minute offsets per prayer.
///
/// Sunset is never adjusted; Maghrib carries its own offset.
///
/// # Example
/// ```
/// # use salah_times::{PrayerAdjustments, Prayer};
/// let adjustments = PrayerAdjustments { fajr: 2, isha: -3, ..PrayerAdjustments::default() };
/// assert_eq!(adjustments.for_prayer(Prayer::Isha), -3);
/// assert_eq!(adjustments.for_prayer(Prayer::Sunset), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrayerAdjustments {
    /// Minutes added to Fajr
    pub fajr: i32,
    /// Minutes added to Sunrise
    pub sunrise: i32,
    /// Minutes added to Dhuhr
    pub dhuhr: i32,
    /// Minutes added to Asr
    pub asr: i32,
    /// Minutes added to Maghrib
    pub maghrib: i32,
    /// Minutes added to Isha
    pub isha: i32,
}

impl PrayerAdjustments {
    /// No adjustments.
    pub const ZERO: Self = Self {
        fajr: 0,
        sunrise: 0,
        dhuhr: 0,
        asr: 0,
        maghrib: 0,
        isha: 0,
    };

    /// Gets the offset in minutes for a prayer.
    #[must_use]
    pub const fn for_prayer(&self, prayer: Prayer) -> i32 {
        match prayer {
            Prayer::Fajr => self.fajr,
            Prayer::Sunrise => self.sunrise,
            Prayer::Dhuhr => self.dhuhr,
            Prayer::Asr => self.asr,
            Prayer::Sunset => 0,
            Prayer::Maghrib => self.maghrib,
            Prayer::Isha => self.isha,
        }
    }

    /// Adds two sets of offsets prayer by prayer.
    #[must_use]
    pub const fn combined(&self, other: &Self) -> Self {
        Self {
            fajr: self.fajr + other.fajr,
            sunrise: self.sunrise + other.sunrise,
            dhuhr: self.dhuhr + other.dhuhr,
            asr: self.asr + other.asr,
            maghrib: self.maghrib + other.maghrib,
            isha: self.isha + other.isha,
        }
    }
}

/// Everything the engine needs besides location and date.
///
/// Obtained from a [`CalculationMethod`] preset or [`custom`](Self::custom) angles,
/// then tuned with the `with_*` methods. Values are immutable; every setter
/// returns a modified copy.
///
/// # Example
/// ```
/// # use salah_times::{CalculationMethod, CalculationParameters, HighLatitudeRule, Madhab, PrayerAdjustments};
/// let params = CalculationMethod::MuslimWorldLeague
///     .parameters()
///     .with_madhab(Madhab::Hanafi)
///     .with_high_latitude_rule(HighLatitudeRule::SeventhOfTheNight)
///     .with_adjustments(PrayerAdjustments { isha: 2, ..PrayerAdjustments::default() });
///
/// // Method adjustments are kept beneath user adjustments
/// assert_eq!(params.total_adjustments().dhuhr, 1);
/// assert_eq!(params.total_adjustments().isha, 2);
///
/// let custom = CalculationParameters::custom(16.0, 14.0).unwrap();
/// assert_eq!(custom.method(), CalculationMethod::Other);
/// assert!(CalculationParameters::custom(95.0, 14.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalculationParameters {
    method: CalculationMethod,
    fajr_angle: f64,
    isha: IshaRule,
    /// Zero means Maghrib at sunset
    maghrib_angle: f64,
    madhab: Madhab,
    high_latitude_rule: HighLatitudeRule,
    polar_circle_resolution: PolarCircleResolution,
    rounding: Rounding,
    twilight_bound: TwilightBound,
    method_adjustments: PrayerAdjustments,
    adjustments: PrayerAdjustments,
}

impl CalculationParameters {
    /// Creates parameters with caller-supplied Fajr and Isha angles.
    ///
    /// # Errors
    /// Returns `InvalidAngle` unless both angles are strictly between 0° and 90°.
    pub fn custom(fajr_angle: f64, isha_angle: f64) -> Result<Self> {
        let fajr_angle = check_twilight_angle(fajr_angle)?;
        let isha_angle = check_twilight_angle(isha_angle)?;
        Ok(angles(
            CalculationMethod::Other,
            fajr_angle,
            isha_angle,
            PrayerAdjustments::ZERO,
        ))
    }

    /// Creates parameters with a Fajr angle and Isha a fixed number of minutes after sunset.
    ///
    /// # Errors
    /// Returns `InvalidAngle` unless the angle is strictly between 0° and 90°.
    pub fn custom_with_interval(fajr_angle: f64, isha_minutes: u32) -> Result<Self> {
        let mut params = Self::custom(fajr_angle, 17.0)?;
        params.isha = IshaRule::Interval {
            minutes: isha_minutes,
            ramadan_minutes: None,
        };
        Ok(params)
    }

    /// Gets the method the parameters were derived from.
    #[must_use]
    pub const fn method(&self) -> CalculationMethod {
        self.method
    }

    /// Gets the Fajr depression angle in degrees.
    #[must_use]
    pub const fn fajr_angle(&self) -> f64 {
        self.fajr_angle
    }

    /// Gets the Isha rule.
    #[must_use]
    pub const fn isha_rule(&self) -> IshaRule {
        self.isha
    }

    /// Gets the Maghrib depression angle, if Maghrib is not simply sunset.
    #[must_use]
    pub fn maghrib_angle(&self) -> Option<f64> {
        (self.maghrib_angle > 0.0).then_some(self.maghrib_angle)
    }

    /// Gets the madhab.
    #[must_use]
    pub const fn madhab(&self) -> Madhab {
        self.madhab
    }

    /// Gets the high-latitude rule.
    #[must_use]
    pub const fn high_latitude_rule(&self) -> HighLatitudeRule {
        self.high_latitude_rule
    }

    /// Gets the polar circle resolution.
    #[must_use]
    pub const fn polar_circle_resolution(&self) -> PolarCircleResolution {
        self.polar_circle_resolution
    }

    /// Gets the rounding policy.
    #[must_use]
    pub const fn rounding(&self) -> Rounding {
        self.rounding
    }

    /// Gets the twilight bound.
    #[must_use]
    pub const fn twilight_bound(&self) -> TwilightBound {
        self.twilight_bound
    }

    /// Gets the fixed adjustments of the method.
    #[must_use]
    pub const fn method_adjustments(&self) -> PrayerAdjustments {
        self.method_adjustments
    }

    /// Gets the user adjustments.
    #[must_use]
    pub const fn adjustments(&self) -> PrayerAdjustments {
        self.adjustments
    }

    /// Gets method and user adjustments added together.
    #[must_use]
    pub const fn total_adjustments(&self) -> PrayerAdjustments {
        self.method_adjustments.combined(&self.adjustments)
    }

    /// Gets the night portions for Fajr and Isha under the high-latitude rule.
    ///
    /// Returns `None` when the rule is [`HighLatitudeRule::None`]. Interval-based
    /// Isha uses the Fajr angle for the twilight-angle portion.
    #[must_use]
    pub fn night_portions(&self) -> Option<(f64, f64)> {
        let isha_angle = match self.isha {
            IshaRule::Angle(angle) => angle,
            IshaRule::Interval { .. } => self.fajr_angle,
        };
        Some((
            self.high_latitude_rule.night_portion(self.fajr_angle)?,
            self.high_latitude_rule.night_portion(isha_angle)?,
        ))
    }

    /// Sets the madhab.
    #[must_use]
    pub const fn with_madhab(mut self, madhab: Madhab) -> Self {
        self.madhab = madhab;
        self
    }

    /// Sets the high-latitude rule.
    #[must_use]
    pub const fn with_high_latitude_rule(mut self, rule: HighLatitudeRule) -> Self {
        self.high_latitude_rule = rule;
        self
    }

    /// Sets the polar circle resolution.
    #[must_use]
    pub const fn with_polar_circle_resolution(mut self, resolution: PolarCircleResolution) -> Self {
        self.polar_circle_resolution = resolution;
        self
    }

    /// Sets the rounding policy.
    #[must_use]
    pub const fn with_rounding(mut self, rounding: Rounding) -> Self {
        self.rounding = rounding;
        self
    }

    /// Sets the user adjustments, replacing earlier ones.
    ///
    /// Method adjustments are unaffected.
    #[must_use]
    pub const fn with_adjustments(mut self, adjustments: PrayerAdjustments) -> Self {
        self.adjustments = adjustments;
        self
    }

    /// Sets the twilight bound.
    #[must_use]
    pub const fn with_twilight_bound(mut self, bound: TwilightBound) -> Self {
        self.twilight_bound = bound;
        self
    }

    /// Selects the twilight colour of a seasonal bound.
    ///
    /// Has no effect unless the twilight bound is [`TwilightBound::Seasonal`].
    #[must_use]
    pub const fn with_shafaq(mut self, shafaq: Shafaq) -> Self {
        if let TwilightBound::Seasonal(_) = self.twilight_bound {
            self.twilight_bound = TwilightBound::Seasonal(shafaq);
        }
        self
    }

    /// Sets a Maghrib depression angle.
    ///
    /// # Errors
    /// Returns `InvalidAngle` unless the angle is strictly between 0° and 90°.
    pub fn with_maghrib_angle(mut self, angle: f64) -> Result<Self> {
        self.maghrib_angle = check_twilight_angle(angle)?;
        Ok(self)
    }

    /// Re-validates angles of values that bypassed the constructors, such as deserialized ones.
    pub(crate) fn validate(&self) -> Result<()> {
        check_twilight_angle(self.fajr_angle)?;
        if let IshaRule::Angle(angle) = self.isha {
            check_twilight_angle(angle)?;
        }
        if self.maghrib_angle != 0.0 {
            check_twilight_angle(self.maghrib_angle)?;
        }
        Ok(())
    }
}

impl Eq for CalculationParameters {}

impl Hash for CalculationParameters {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.method.hash(state);
        hash_f64(self.fajr_angle, state);
        self.isha.hash(state);
        hash_f64(self.maghrib_angle, state);
        self.madhab.hash(state);
        self.high_latitude_rule.hash(state);
        self.polar_circle_resolution.hash(state);
        self.rounding.hash(state);
        self.twilight_bound.hash(state);
        self.method_adjustments.hash(state);
        self.adjustments.hash(state);
    }
}

fn hash_f64<H: Hasher>(value: f64, state: &mut H) {
    // Normalize -0.0 and +0.0 so hashing remains consistent with PartialEq
    let normalized = if value == 0.0 { 0.0 } else { value };
    normalized.to_bits().hash(state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_every_preset_is_valid() {
        for method in CalculationMethod::ALL {
            let params = method.parameters();
            assert_eq!(params.method(), method);
            assert!(params.validate().is_ok(), "{method}");
            assert_eq!(params.adjustments(), PrayerAdjustments::ZERO);
            assert_eq!(params.madhab(), Madhab::Shafi);
            assert_eq!(
                params.high_latitude_rule(),
                HighLatitudeRule::MiddleOfTheNight
            );
        }
    }

    #[test]
    fn test_preset_angles() {
        let mwl = CalculationMethod::MuslimWorldLeague.parameters();
        assert_eq!(mwl.fajr_angle(), 18.0);
        assert_eq!(mwl.isha_rule(), IshaRule::Angle(17.0));
        assert_eq!(mwl.method_adjustments().dhuhr, 1);

        let egypt = CalculationMethod::Egyptian.parameters();
        assert_eq!(egypt.fajr_angle(), 19.5);
        assert_eq!(egypt.isha_rule(), IshaRule::Angle(17.5));

        let qatar = CalculationMethod::Qatar.parameters();
        assert_eq!(
            qatar.isha_rule(),
            IshaRule::Interval {
                minutes: 90,
                ramadan_minutes: None
            }
        );

        let tehran = CalculationMethod::Tehran.parameters();
        assert_eq!(tehran.maghrib_angle(), Some(4.5));
        assert_eq!(mwl.maghrib_angle(), None);

        let singapore = CalculationMethod::Singapore.parameters();
        assert_eq!(singapore.rounding(), Rounding::Up);

        let moonsighting = CalculationMethod::MoonsightingCommittee.parameters();
        assert_eq!(
            moonsighting.twilight_bound(),
            TwilightBound::Seasonal(Shafaq::General)
        );
    }

    #[test]
    fn test_turkey_adjustments() {
        let adjustments = CalculationMethod::Turkey.parameters().method_adjustments();
        assert_eq!(adjustments.for_prayer(Prayer::Fajr), 0);
        assert_eq!(adjustments.for_prayer(Prayer::Sunrise), -7);
        assert_eq!(adjustments.for_prayer(Prayer::Dhuhr), 5);
        assert_eq!(adjustments.for_prayer(Prayer::Asr), 4);
        assert_eq!(adjustments.for_prayer(Prayer::Maghrib), 7);
        assert_eq!(adjustments.for_prayer(Prayer::Isha), 0);
    }

    #[test]
    fn test_user_adjustments_stack_on_method_adjustments() {
        let params = CalculationMethod::Dubai
            .parameters()
            .with_adjustments(PrayerAdjustments {
                dhuhr: 2,
                isha: -1,
                ..PrayerAdjustments::ZERO
            });
        let total = params.total_adjustments();
        assert_eq!(total.sunrise, -3);
        assert_eq!(total.dhuhr, 5);
        assert_eq!(total.isha, -1);
        assert_eq!(params.method_adjustments().dhuhr, 3);
    }

    #[test]
    fn test_custom_parameters() {
        let params = CalculationParameters::custom(16.0, 15.0).unwrap();
        assert_eq!(params.fajr_angle(), 16.0);
        assert_eq!(params.isha_rule(), IshaRule::Angle(15.0));
        assert_eq!(params.method_adjustments(), PrayerAdjustments::ZERO);

        assert!(matches!(
            CalculationParameters::custom(0.0, 15.0),
            Err(Error::InvalidAngle { .. })
        ));
        assert!(CalculationParameters::custom(16.0, f64::NAN).is_err());

        let interval = CalculationParameters::custom_with_interval(19.0, 75).unwrap();
        assert_eq!(
            interval.isha_rule(),
            IshaRule::Interval {
                minutes: 75,
                ramadan_minutes: None
            }
        );
    }

    #[test]
    fn test_maghrib_angle_validation() {
        let params = CalculationMethod::MuslimWorldLeague.parameters();
        assert_eq!(
            params.with_maghrib_angle(4.0).unwrap().maghrib_angle(),
            Some(4.0)
        );
        assert!(params.with_maghrib_angle(-1.0).is_err());
    }

    #[test]
    fn test_shafaq_only_changes_seasonal_bound() {
        let moonsighting = CalculationMethod::MoonsightingCommittee
            .parameters()
            .with_shafaq(Shafaq::Ahmer);
        assert_eq!(
            moonsighting.twilight_bound(),
            TwilightBound::Seasonal(Shafaq::Ahmer)
        );

        let mwl = CalculationMethod::MuslimWorldLeague
            .parameters()
            .with_shafaq(Shafaq::Abyad);
        assert_eq!(mwl.twilight_bound(), TwilightBound::NightPortion);
    }

    #[test]
    fn test_night_portions() {
        let params = CalculationMethod::Egyptian
            .parameters()
            .with_high_latitude_rule(HighLatitudeRule::TwilightAngle);
        let (fajr, isha) = params.night_portions().unwrap();
        assert!((fajr - 19.5 / 60.0).abs() < 1e-12);
        assert!((isha - 17.5 / 60.0).abs() < 1e-12);

        let none = params.with_high_latitude_rule(HighLatitudeRule::None);
        assert_eq!(none.night_portions(), None);
    }

    #[test]
    fn test_equal_parameters_hash_equally() {
        let a = CalculationMethod::Karachi
            .parameters()
            .with_madhab(Madhab::Hanafi);
        let b = CalculationMethod::Karachi
            .parameters()
            .with_madhab(Madhab::Hanafi);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));

        let c = a.with_rounding(Rounding::NearestFive);
        assert_ne!(a, c);
    }
}
