//! Length units and their conversion factors.
//!
//! Every factor is expressed as **units per metre**: a magnitude in metres is converted to a unit by multiplying with
//! its factor, and a value in a unit is converted back to metres by dividing by the same factor.
//!
//! The imperial family is derived from a single yard factor so that feet, inches, miles and leagues stay consistent
//! with one another. The nautical mile is defined as exactly `1852 m`.
//!
//! ```rust
//! use distance::LengthUnit;
//!
//! assert_eq!(LengthUnit::Millimeter.per_meter(), 1000.0);
//! assert_eq!(LengthUnit::NauticalMile.symbol(), "nmi");
//! ```

use core::fmt::{Display, Formatter, Result};

// ─────────────────────────────────────────────────────────────────────────────
// SI factors
// ─────────────────────────────────────────────────────────────────────────────

/// Kilometres per metre.
pub const KILOMETERS_PER_METER: f64 = 1.0 / 1000.0;
/// Hectometres per metre.
pub const HECTOMETERS_PER_METER: f64 = 1.0 / 100.0;
/// Decametres per metre.
pub const DECAMETERS_PER_METER: f64 = 1.0 / 10.0;
/// Decimetres per metre.
pub const DECIMETERS_PER_METER: f64 = 10.0;
/// Centimetres per metre.
pub const CENTIMETERS_PER_METER: f64 = 100.0;
/// Millimetres per metre.
pub const MILLIMETERS_PER_METER: f64 = 1000.0;

// ─────────────────────────────────────────────────────────────────────────────
// Imperial factors
// ─────────────────────────────────────────────────────────────────────────────

/// Yards per metre.
pub const YARDS_PER_METER: f64 = 1.0936132983;
/// Feet per metre (`3 ft = 1 yd`).
pub const FEET_PER_METER: f64 = 3.0 * YARDS_PER_METER;
/// Inches per metre (`12 in = 1 ft`).
pub const INCHES_PER_METER: f64 = 12.0 * FEET_PER_METER;
/// Statute miles per metre (`5280 ft = 1 mi`).
pub const MILES_PER_METER: f64 = FEET_PER_METER / 5280.0;
/// Leagues per metre (`3 mi = 1 lea`).
pub const LEAGUES_PER_METER: f64 = MILES_PER_METER / 3.0;

// ─────────────────────────────────────────────────────────────────────────────
// Nautical factors
// ─────────────────────────────────────────────────────────────────────────────

/// International nautical miles per metre (`1 nmi = 1852 m`).
pub const NAUTICAL_MILES_PER_METER: f64 = 1.0 / 1852.0;
/// Fathoms per metre (`1 ftm = 2 yd`).
pub const FATHOMS_PER_METER: f64 = YARDS_PER_METER / 2.0;

/// Family a [`LengthUnit`] belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnitSystem {
    /// Metric units built on the metre.
    Si,
    /// Imperial units built on the yard.
    Imperial,
    /// Units used at sea.
    Nautical,
}

/// Every unit a [`Distance`](crate::Distance) can be built from or read as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    /// Metre (canonical).
    Meter,
    /// Kilometre (`1000 m`).
    Kilometer,
    /// Hectometre (`100 m`).
    Hectometer,
    /// Decametre (`10 m`).
    Decameter,
    /// Decimetre (`0.1 m`).
    Decimeter,
    /// Centimetre (`0.01 m`).
    Centimeter,
    /// Millimetre (`0.001 m`).
    Millimeter,
    /// League (`3 mi`).
    League,
    /// Statute mile (`5280 ft`).
    Mile,
    /// Yard.
    Yard,
    /// Foot (`1/3 yd`).
    Foot,
    /// Inch (`1/12 ft`).
    Inch,
    /// International nautical mile (`1852 m`).
    NauticalMile,
    /// Fathom (`2 yd`).
    Fathom,
}

impl LengthUnit {
    /// All supported units: SI first, then imperial, then nautical.
    pub const ALL: [LengthUnit; 14] = [
        LengthUnit::Meter,
        LengthUnit::Kilometer,
        LengthUnit::Hectometer,
        LengthUnit::Decameter,
        LengthUnit::Decimeter,
        LengthUnit::Centimeter,
        LengthUnit::Millimeter,
        LengthUnit::League,
        LengthUnit::Mile,
        LengthUnit::Yard,
        LengthUnit::Foot,
        LengthUnit::Inch,
        LengthUnit::NauticalMile,
        LengthUnit::Fathom,
    ];

    /// How many of this unit fit in one metre.
    #[inline]
    pub const fn per_meter(self) -> f64 {
        match self {
            LengthUnit::Meter => 1.0,
            LengthUnit::Kilometer => KILOMETERS_PER_METER,
            LengthUnit::Hectometer => HECTOMETERS_PER_METER,
            LengthUnit::Decameter => DECAMETERS_PER_METER,
            LengthUnit::Decimeter => DECIMETERS_PER_METER,
            LengthUnit::Centimeter => CENTIMETERS_PER_METER,
            LengthUnit::Millimeter => MILLIMETERS_PER_METER,
            LengthUnit::League => LEAGUES_PER_METER,
            LengthUnit::Mile => MILES_PER_METER,
            LengthUnit::Yard => YARDS_PER_METER,
            LengthUnit::Foot => FEET_PER_METER,
            LengthUnit::Inch => INCHES_PER_METER,
            LengthUnit::NauticalMile => NAUTICAL_MILES_PER_METER,
            LengthUnit::Fathom => FATHOMS_PER_METER,
        }
    }

    /// Short printable symbol (`"km"`, `"ft"`, …).
    pub const fn symbol(self) -> &'static str {
        match self {
            LengthUnit::Meter => "m",
            LengthUnit::Kilometer => "km",
            LengthUnit::Hectometer => "hm",
            LengthUnit::Decameter => "dam",
            LengthUnit::Decimeter => "dm",
            LengthUnit::Centimeter => "cm",
            LengthUnit::Millimeter => "mm",
            LengthUnit::League => "lea",
            LengthUnit::Mile => "mi",
            LengthUnit::Yard => "yd",
            LengthUnit::Foot => "ft",
            LengthUnit::Inch => "in",
            LengthUnit::NauticalMile => "nmi",
            LengthUnit::Fathom => "ftm",
        }
    }

    /// Plural English name, as used in rendered distances (`"Meters"`, `"Nautical Miles"`).
    pub const fn name(self) -> &'static str {
        match self {
            LengthUnit::Meter => "Meters",
            LengthUnit::Kilometer => "Kilometers",
            LengthUnit::Hectometer => "Hectometers",
            LengthUnit::Decameter => "Decameters",
            LengthUnit::Decimeter => "Decimeters",
            LengthUnit::Centimeter => "Centimeters",
            LengthUnit::Millimeter => "Millimeters",
            LengthUnit::League => "Leagues",
            LengthUnit::Mile => "Miles",
            LengthUnit::Yard => "Yards",
            LengthUnit::Foot => "Feet",
            LengthUnit::Inch => "Inches",
            LengthUnit::NauticalMile => "Nautical Miles",
            LengthUnit::Fathom => "Fathoms",
        }
    }

    /// The unit family.
    pub const fn system(self) -> UnitSystem {
        match self {
            LengthUnit::Meter
            | LengthUnit::Kilometer
            | LengthUnit::Hectometer
            | LengthUnit::Decameter
            | LengthUnit::Decimeter
            | LengthUnit::Centimeter
            | LengthUnit::Millimeter => UnitSystem::Si,
            LengthUnit::League
            | LengthUnit::Mile
            | LengthUnit::Yard
            | LengthUnit::Foot
            | LengthUnit::Inch => UnitSystem::Imperial,
            LengthUnit::NauticalMile | LengthUnit::Fathom => UnitSystem::Nautical,
        }
    }
}

impl Display for LengthUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.symbol())
    }
}
