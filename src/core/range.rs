//! Classification against the signed 32-bit range and saturation

use super::decimal::DecimalInt;
use serde::Serialize;

/// Smallest representable value, -2^31
pub const I32_MIN: i32 = i32::MIN;
/// Largest representable value, 2^31 - 1
pub const I32_MAX: i32 = i32::MAX;

/// Outcome of checking a parsed value against [`I32_MIN`]..=[`I32_MAX`].
///
/// `overflow` and `saturated` come from the same range test, so they always
/// agree: a value is clamped exactly when it lies outside the range. They are
/// reported separately because a range check without saturation would set
/// `overflow` alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub overflow: bool,
    pub clamped: i32,
    pub saturated: bool,
}

/// The value as an `i32` if it lies within the signed 32-bit range
pub fn exact_i32(value: &DecimalInt) -> Option<i32> {
    value.to_i64().and_then(|v| i32::try_from(v).ok())
}

/// True iff the value is below -2^31 or above 2^31 - 1
pub fn detect_overflow(value: &DecimalInt) -> bool {
    exact_i32(value).is_none()
}

/// Clamp into range, returning the clamped value and whether it changed.
///
/// Out-of-range values snap to the extreme on their own side; nothing is
/// rounded toward zero or wrapped.
pub fn saturate(value: &DecimalInt) -> (i32, bool) {
    match exact_i32(value) {
        Some(v) => (v, false),
        None if value.is_negative() => (I32_MIN, true),
        None => (I32_MAX, true),
    }
}

/// Classify a parsed value: overflow flag, clamped value, saturation flag
pub fn classify(value: &DecimalInt) -> Classification {
    let overflow = detect_overflow(value);
    let (clamped, saturated) = saturate(value);
    debug_assert_eq!(overflow, saturated);

    Classification {
        overflow,
        clamped,
        saturated,
    }
}
