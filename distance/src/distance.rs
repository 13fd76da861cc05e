//! The [`Distance`] value type.

use crate::format::General;
use crate::unit::*;
use core::cmp::Ordering;
use core::fmt::{self, Display, Formatter};
use core::hash::{Hash, Hasher};
use core::iter::Sum;
use core::ops::*;

/// A physical distance.
///
/// The magnitude is stored once, in metres; every other unit is derived on demand by multiplying with the unit's
/// factor from [`crate::unit`]. Any `f64` is accepted, including negative, infinite and NaN magnitudes.
///
/// # Equality and ordering
///
/// - `==` is tolerant: two distances are equal when their magnitudes differ by less than [`Distance::EPSILON`]
///   metres. This is not transitive.
/// - `<` and `>` compare magnitudes exactly; `<=` and `>=` accept either a strict comparison or tolerant equality.
/// - [`Hash`] uses the magnitude's bit pattern, so distances that are only *tolerantly* equal may hash differently.
///
/// ```rust
/// use distance::Distance;
///
/// let a = Distance::from_kilometers(1.0);
/// let b = Distance::from_meters(999.99999);
/// assert!(a == b);
/// assert!(a > b);
/// assert!(a >= b && a <= b);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Distance {
    meters: f64,
}

impl Distance {
    /// Tolerance (in metres) under which two distances compare equal.
    pub const EPSILON: f64 = 1e-4;

    /// The zero distance.
    pub const ZERO: Self = Self::new(0.0);

    /// Creates a distance from a magnitude in metres.
    ///
    /// ```rust
    /// use distance::Distance;
    /// assert_eq!(Distance::new(3.5).meters(), 3.5);
    /// ```
    #[inline]
    pub const fn new(meters: f64) -> Self {
        Self { meters }
    }

    /// Creates a distance from a value in metres.
    #[inline]
    pub const fn from_meters(value: f64) -> Self {
        Self::new(value)
    }

    /// The magnitude in metres.
    #[inline]
    pub const fn meters(self) -> f64 {
        self.meters
    }

    /// Creates a distance from `value` expressed in `unit`.
    ///
    /// Same arithmetic as the matching named constructor.
    ///
    /// ```rust
    /// use distance::{Distance, LengthUnit};
    ///
    /// let d = Distance::from_unit(3.0, LengthUnit::Foot);
    /// assert_eq!(d, Distance::from_feet(3.0));
    /// ```
    #[inline]
    pub fn from_unit(value: f64, unit: LengthUnit) -> Self {
        match unit {
            LengthUnit::Meter => Self::from_meters(value),
            other => Self::from_factor(value, other.per_meter()),
        }
    }

    /// The magnitude expressed in `unit`.
    ///
    /// ```rust
    /// use distance::{Distance, LengthUnit};
    ///
    /// let d = Distance::from_kilometers(2.0);
    /// assert_eq!(d.to_unit(LengthUnit::Meter), 2000.0);
    /// ```
    #[inline]
    pub fn to_unit(self, unit: LengthUnit) -> f64 {
        self.meters * unit.per_meter()
    }

    #[inline]
    fn from_factor(value: f64, per_meter: f64) -> Self {
        let meters = value / per_meter;
        if value.is_finite() && !meters.is_finite() {
            log::trace!("converting {value} at {per_meter} per metre overflowed to {meters} m");
        }
        Self::new(meters)
    }

    /// Orders two distances by magnitude, without tolerance.
    ///
    /// This is a total order: NaN sorts below every number and equal to itself, and `-0.0` equals `0.0`.
    ///
    /// ```rust
    /// use core::cmp::Ordering;
    /// use distance::Distance;
    ///
    /// let a = Distance::from_meters(30.0);
    /// let b = Distance::from_meters(45.0);
    /// assert_eq!(a.compare(&b), Ordering::Less);
    /// assert_eq!(Distance::from_meters(f64::NAN).compare(&a), Ordering::Less);
    /// ```
    pub fn compare(&self, other: &Self) -> Ordering {
        match self.meters.partial_cmp(&other.meters) {
            Some(ordering) => ordering,
            None => match (self.meters.is_nan(), other.meters.is_nan()) {
                (true, true) => Ordering::Equal,
                (true, false) => Ordering::Less,
                _ => Ordering::Greater,
            },
        }
    }

    /// Absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        #[cfg(feature = "std")]
        {
            Self::new(self.meters.abs())
        }
        #[cfg(not(feature = "std"))]
        {
            Self::new(libm::fabs(self.meters))
        }
    }

    /// The shorter of two distances.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::new(self.meters.min(other.meters))
    }

    /// The longer of two distances.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.meters.max(other.meters))
    }

    /// `true` when the magnitude is neither infinite nor NaN.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.meters.is_finite()
    }

    /// `true` when the magnitude is NaN.
    #[inline]
    pub fn is_nan(self) -> bool {
        self.meters.is_nan()
    }
}

macro_rules! unit_conversions {
    ($($from:ident / $to:ident => $factor:ident, $name:literal;)+) => {
        impl Distance {
            $(
                #[doc = concat!("Creates a distance from a value in ", $name, ".")]
                #[inline]
                pub fn $from(value: f64) -> Self {
                    Self::from_factor(value, $factor)
                }

                #[doc = concat!("The magnitude in ", $name, ".")]
                #[inline]
                pub fn $to(self) -> f64 {
                    self.meters * $factor
                }
            )+
        }
    };
}

unit_conversions! {
    from_kilometers / kilometers => KILOMETERS_PER_METER, "kilometres";
    from_hectometers / hectometers => HECTOMETERS_PER_METER, "hectometres";
    from_decameters / decameters => DECAMETERS_PER_METER, "decametres";
    from_decimeters / decimeters => DECIMETERS_PER_METER, "decimetres";
    from_centimeters / centimeters => CENTIMETERS_PER_METER, "centimetres";
    from_millimeters / millimeters => MILLIMETERS_PER_METER, "millimetres";
    from_leagues / leagues => LEAGUES_PER_METER, "leagues";
    from_miles / miles => MILES_PER_METER, "statute miles";
    from_yards / yards => YARDS_PER_METER, "yards";
    from_feet / feet => FEET_PER_METER, "feet";
    from_inches / inches => INCHES_PER_METER, "inches";
    from_nautical_miles / nautical_miles => NAUTICAL_MILES_PER_METER, "nautical miles";
    from_fathoms / fathoms => FATHOMS_PER_METER, "fathoms";
}

impl Default for Distance {
    fn default() -> Self {
        Self::ZERO
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

impl Add for Distance {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.meters + rhs.meters)
    }
}

impl AddAssign for Distance {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Distance {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.meters - rhs.meters)
    }
}

impl SubAssign for Distance {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul<f64> for Distance {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.meters * rhs)
    }
}

impl Mul<Distance> for f64 {
    type Output = Distance;
    #[inline]
    fn mul(self, rhs: Distance) -> Distance {
        rhs * self
    }
}

impl MulAssign<f64> for Distance {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

impl Div<f64> for Distance {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self::new(self.meters / rhs)
    }
}

impl DivAssign<f64> for Distance {
    #[inline]
    fn div_assign(&mut self, rhs: f64) {
        *self = *self / rhs;
    }
}

/// Dimensionless ratio of two distances.
impl Div for Distance {
    type Output = f64;
    #[inline]
    fn div(self, rhs: Self) -> f64 {
        self.meters / rhs.meters
    }
}

impl Neg for Distance {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.meters)
    }
}

impl Sum for Distance {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Distance> for Distance {
    fn sum<I: Iterator<Item = &'a Distance>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Comparison, hashing, formatting
// ─────────────────────────────────────────────────────────────────────────────

impl PartialEq for Distance {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        Self::new(self.meters - other.meters).abs().meters < Self::EPSILON
    }
}

impl PartialOrd for Distance {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }

    #[inline]
    fn lt(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Less
    }

    #[inline]
    fn gt(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Greater
    }

    #[inline]
    fn le(&self, other: &Self) -> bool {
        self.lt(other) || self == other
    }

    #[inline]
    fn ge(&self, other: &Self) -> bool {
        self.gt(other) || self == other
    }
}

impl Hash for Distance {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // -0.0 and every NaN payload collapse onto one bit pattern each.
        let bits = if self.meters == 0.0 {
            0.0f64.to_bits()
        } else if self.meters.is_nan() {
            f64::NAN.to_bits()
        } else {
            self.meters.to_bits()
        };
        bits.hash(state);
    }
}

impl Display for Distance {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", General(self.meters), LengthUnit::Meter.name())
    }
}
