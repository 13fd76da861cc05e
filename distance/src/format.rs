//! General numeric rendering for `f64` magnitudes.
//!
//! Values are written with the shortest digits that round-trip. Positional notation is used while the decimal
//! exponent `x` (value `= d.ddd × 10^x`) stays within `-5 < x < 15`; outside that window the value switches to
//! scientific notation with an upper-case `E`, an explicit sign and at least two exponent digits.
//!
//! | value      | rendered          |
//! |------------|-------------------|
//! | `1000.0`   | `1000`            |
//! | `0.0001`   | `0.0001`          |
//! | `0.00001`  | `1E-05`           |
//! | `1e15`     | `1E+15`           |
//! | `-2.5e-300`| `-2.5E-300`       |
//! | `NaN`      | `NaN`             |
//! | `-inf`     | `-∞`              |

use core::fmt::{self, Write};

const MIN_POSITIONAL_EXPONENT: i32 = -4;
const MAX_POSITIONAL_EXPONENT: i32 = 14;

/// Wraps an `f64` so that its `Display` uses the general format described in the module docs.
#[derive(Clone, Copy, Debug)]
pub(crate) struct General(pub(crate) f64);

impl fmt::Display for General {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_general(f, self.0)
    }
}

/// Fixed-capacity sink for the intermediate `{:E}` rendering.
///
/// The longest `f64` scientific rendering is `-2.2250738585072014E-308` (24 bytes).
struct StackBuf {
    bytes: [u8; 32],
    len: usize,
}

impl StackBuf {
    const fn new() -> Self {
        Self {
            bytes: [0; 32],
            len: 0,
        }
    }

    fn as_str(&self) -> &str {
        // Only whole `&str` slices are ever appended.
        core::str::from_utf8(&self.bytes[..self.len]).unwrap_or("")
    }
}

impl Write for StackBuf {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let end = self.len + s.len();
        if end > self.bytes.len() {
            return Err(fmt::Error);
        }
        self.bytes[self.len..end].copy_from_slice(s.as_bytes());
        self.len = end;
        Ok(())
    }
}

fn write_general<W: Write>(out: &mut W, value: f64) -> fmt::Result {
    if value.is_nan() {
        return out.write_str("NaN");
    }
    if value.is_infinite() {
        return out.write_str(if value < 0.0 { "-∞" } else { "∞" });
    }
    if value == 0.0 {
        return out.write_str(if value.is_sign_negative() { "-0" } else { "0" });
    }

    let mut sci = StackBuf::new();
    write!(sci, "{value:E}")?;
    let (mantissa, exponent) = sci.as_str().split_once('E').ok_or(fmt::Error)?;
    let exponent: i32 = exponent.parse().map_err(|_| fmt::Error)?;

    if (MIN_POSITIONAL_EXPONENT..=MAX_POSITIONAL_EXPONENT).contains(&exponent) {
        write!(out, "{value}")
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        write!(out, "{mantissa}E{sign}{:02}", exponent.unsigned_abs())
    }
}
