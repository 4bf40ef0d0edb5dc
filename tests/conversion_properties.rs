//! Property-based tests for the conversion pipeline
//!
//! These tests verify invariants that should hold for all inputs:
//! - Encoding and decoding are mutual inverses over the whole i32 range
//! - Overflow is flagged exactly outside the i32 range
//! - Saturation snaps to the extreme on the input's side
//! - BIN and HEX renderings both lead back to the clamped value

use proptest::prelude::*;
use sat32::{classify, convert, decode, encode, parse_decimal, BitPattern32, FormatSelector};

/// Decimal text of arbitrary length, optionally signed and zero-padded
fn decimal_literal() -> impl Strategy<Value = String> {
    "[+-]?[0-9]{1,40}"
}

proptest! {
    /// Property: decode(encode(v)) == v for every i32
    #[test]
    fn prop_encode_decode_round_trip(v in any::<i32>()) {
        let bits = encode(v);
        prop_assert_eq!(bits.as_str().len(), 32);
        prop_assert_eq!(decode(bits.as_str()).unwrap(), v);
    }

    /// Property: in-range values are never flagged and pass through unchanged
    #[test]
    fn prop_in_range_values_unchanged(v in any::<i32>()) {
        let c = classify(&parse_decimal(&v.to_string()).unwrap());
        prop_assert!(!c.overflow);
        prop_assert!(!c.saturated);
        prop_assert_eq!(c.clamped, v);
    }

    /// Property: i64 inputs are flagged iff outside the i32 range and clamp to
    /// the matching extreme
    #[test]
    fn prop_overflow_iff_out_of_range(v in any::<i64>()) {
        let c = classify(&parse_decimal(&v.to_string()).unwrap());
        let in_range = v >= i64::from(i32::MIN) && v <= i64::from(i32::MAX);
        prop_assert_eq!(c.overflow, !in_range);
        prop_assert_eq!(c.saturated, c.overflow);

        let expected = if v > i64::from(i32::MAX) {
            i32::MAX
        } else if v < i64::from(i32::MIN) {
            i32::MIN
        } else {
            v as i32
        };
        prop_assert_eq!(c.clamped, expected);
    }

    /// Property: arbitrary-length literals always convert, and flags agree
    #[test]
    fn prop_any_literal_converts(text in decimal_literal()) {
        let r = convert(&text, FormatSelector::Dec, false).unwrap();
        prop_assert_eq!(r.overflow, r.saturated);
        prop_assert_eq!(r.value_out, r.clamped.to_string());
    }

    /// Property: BIN output decodes back to the clamped value
    #[test]
    fn prop_bin_output_decodes_to_clamped(v in any::<i64>()) {
        let r = convert(&v.to_string(), FormatSelector::Bin, false).unwrap();
        prop_assert_eq!(decode(&r.value_out).unwrap(), r.clamped);
    }

    /// Property: HEX digits read as unsigned and reinterpreted via decode give
    /// the clamped value
    #[test]
    fn prop_hex_output_decodes_to_clamped(v in any::<i64>(), prefix in any::<bool>()) {
        let r = convert(&v.to_string(), FormatSelector::Hex, prefix).unwrap();
        let digits = r.value_out.trim_start_matches("0x");
        prop_assert_eq!(digits.len(), 8);
        prop_assert!(digits.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));

        let unsigned = u32::from_str_radix(digits, 16).unwrap();
        let bits = BitPattern32::from(unsigned);
        prop_assert_eq!(decode(bits.as_str()).unwrap(), r.clamped);
    }

    /// Property: anything outside the grammar is rejected
    #[test]
    fn prop_garbage_is_rejected(text in "[+-]?[0-9]*[a-zA-Z_.,][0-9a-z]*") {
        prop_assert!(parse_decimal(&text).is_err());
    }
}
