//! Decimal parsing into an exact, width-unbounded integer
//!
//! Overflow detection needs the true magnitude of inputs far outside any
//! machine word, so the parsed value keeps its decimal digits. Acceptance is
//! decided by an ASCII-only pattern, never by a native integer parser.

use super::errors::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Optional sign followed by one or more ASCII digits. `\d` would admit
/// non-ASCII digits, hence the explicit class.
static DECIMAL_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+-]?[0-9]+$").unwrap());

/// Longest digit run that always fits in an `i64`.
const I64_SAFE_DIGITS: usize = 18;

/// Arbitrary-precision signed integer parsed from decimal text.
///
/// Stored as a sign and a normalized digit string: no leading zeros, and zero
/// is never negative, so `-0`, `+0` and `000` are the same value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DecimalInt {
    negative: bool,
    digits: String,
}

impl DecimalInt {
    fn from_parts(negative: bool, digits: &str) -> Self {
        let significant = digits.trim_start_matches('0');
        if significant.is_empty() {
            Self::zero()
        } else {
            Self {
                negative,
                digits: significant.to_string(),
            }
        }
    }

    /// The value zero
    pub fn zero() -> Self {
        Self {
            negative: false,
            digits: "0".to_string(),
        }
    }

    /// True for values strictly below zero
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Decimal digits of the magnitude, without sign or leading zeros
    pub fn magnitude_digits(&self) -> &str {
        &self.digits
    }

    /// Exact value as an `i64`, or `None` for magnitudes of more than 18 digits.
    pub fn to_i64(&self) -> Option<i64> {
        if self.digits.len() > I64_SAFE_DIGITS {
            return None;
        }
        let magnitude: i64 = self.digits.parse().ok()?;
        Some(if self.negative { -magnitude } else { magnitude })
    }
}

impl Default for DecimalInt {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<i64> for DecimalInt {
    fn from(value: i64) -> Self {
        Self::from_parts(value < 0, &value.unsigned_abs().to_string())
    }
}

impl From<i32> for DecimalInt {
    fn from(value: i32) -> Self {
        Self::from(i64::from(value))
    }
}

impl FromStr for DecimalInt {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_decimal(s)
    }
}

impl fmt::Display for DecimalInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "-{}", self.digits)
        } else {
            f.write_str(&self.digits)
        }
    }
}

impl Ord for DecimalInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => compare_magnitudes(&self.digits, &other.digits),
            (true, true) => compare_magnitudes(&other.digits, &self.digits),
        }
    }
}

impl PartialOrd for DecimalInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Serialized as its decimal text so magnitudes beyond any JSON number survive.
impl Serialize for DecimalInt {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// Normalized digit strings: longer means larger, equal length compares lexically.
fn compare_magnitudes(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Parse a decimal signed integer.
///
/// Surrounding whitespace is ignored. What remains must be an optional `+` or
/// `-` followed by one or more ASCII digits; underscores, exponents, radix
/// prefixes and inner whitespace are all rejected with
/// [`Error::InvalidFormat`]. Leading zeros are accepted.
pub fn parse_decimal(text: &str) -> Result<DecimalInt> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(Error::invalid_format(text, "empty input value"));
    }
    if !DECIMAL_PATTERN.is_match(trimmed) {
        return Err(Error::invalid_format(
            trimmed,
            "expected an optional sign followed by decimal digits",
        ));
    }

    let (negative, digits) = match trimmed.as_bytes()[0] {
        b'-' => (true, &trimmed[1..]),
        b'+' => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    Ok(DecimalInt::from_parts(negative, digits))
}

/// Parse a token that may not have been supplied at all
pub fn parse_optional_decimal(text: Option<&str>) -> Result<DecimalInt> {
    match text {
        Some(text) => parse_decimal(text),
        None => Err(Error::invalid_format("", "missing input value")),
    }
}
