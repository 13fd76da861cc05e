//! An immutable physical distance with SI, imperial and nautical unit conversions.
//!
//! A [`Distance`] stores one `f64` magnitude in metres. Every other unit is computed on demand by multiplying with a
//! fixed factor (see [`unit`]), so there is a single source of truth and no drift between units.
//!
//! # Quick start
//!
//! ```rust
//! use distance::Distance;
//!
//! let leg = Distance::from_nautical_miles(2.0);
//! let harbour = Distance::from_meters(250.0);
//! let total = leg + harbour;
//!
//! assert!((total.meters() - 3954.0).abs() < Distance::EPSILON);
//! assert!(total > leg);
//! assert_eq!(Distance::from_kilometers(1.0).to_string(), "1000 Meters");
//! ```
//!
//! # Supported units
//!
//! | family   | constructors / accessors                                                            |
//! |----------|-------------------------------------------------------------------------------------|
//! | SI       | metres, kilometres, hectometres, decametres, decimetres, centimetres, millimetres   |
//! | imperial | leagues, miles, yards, feet, inches                                                 |
//! | nautical | nautical miles, fathoms                                                             |
//!
//! The same table is available at runtime through [`LengthUnit`], together with [`Distance::from_unit`] and
//! [`Distance::to_unit`].
//!
//! # Equality
//!
//! `==` compares magnitudes with a tolerance of [`Distance::EPSILON`] metres, while `<`/`>` and
//! [`Distance::compare`] are exact. Hashing follows the raw magnitude, so two distances that are equal only within the
//! tolerance may hash differently. Keep this in mind before using `Distance` as a hash key.
//!
//! # What this crate does not try to solve
//!
//! - Parsing distances from text.
//! - Compile-time dimensional analysis.
//! - Serialization.
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support. Without it the crate is `no_std` and uses `libm` for float helpers
//!   missing from `core`.
//!
//! # Panics and errors
//!
//! This crate does not define an error type and does not return `Result`. Conversions and arithmetic are pure `f64`
//! computations; they do not panic, and NaN and infinities propagate according to IEEE-754. A finite input that
//! overflows during unit conversion is reported through the `log` facade at `trace` level.

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

mod distance;
mod format;
pub mod unit;

pub use distance::Distance;
pub use unit::{LengthUnit, UnitSystem};

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync + Copy + 'static>() {}

    #[test]
    fn distance_is_thread_safe_value() {
        assert_send_sync::<Distance>();
        assert_send_sync::<LengthUnit>();
    }

    #[test]
    fn distance_is_a_single_f64() {
        assert_eq!(core::mem::size_of::<Distance>(), core::mem::size_of::<f64>());
    }
}
