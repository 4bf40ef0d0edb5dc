//! The conversion pipeline: parse, classify, encode, render

use super::bits::{encode, BitPattern32};
use super::decimal::{parse_decimal, DecimalInt};
use super::errors::Result;
use super::radix::FormatSelector;
use super::range::{classify, Classification};
use serde::Serialize;
use tracing::{debug, trace};

/// Everything derived from one conversion request.
///
/// All fields are populated whichever format was selected for `value_out`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionResult {
    /// The selected rendering
    pub value_out: String,
    /// The input lay outside the signed 32-bit range
    pub overflow: bool,
    /// The value was clamped; always equal to `overflow`
    pub saturated: bool,
    /// The exact parsed input
    pub input: DecimalInt,
    /// The input clamped into range
    pub clamped: i32,
    /// Two's-complement encoding of `clamped`
    pub bin32: BitPattern32,
    /// Hex rendering of `bin32`, prefixed when requested
    pub hex8: String,
}

impl ConversionResult {
    /// `overflow` as the 0/1 digit used in plain output
    pub fn overflow_bit(&self) -> u8 {
        u8::from(self.overflow)
    }

    /// `saturated` as the 0/1 digit used in plain output
    pub fn saturated_bit(&self) -> u8 {
        u8::from(self.saturated)
    }
}

/// Convert decimal text into the selected 32-bit rendering.
///
/// Out-of-range input is not an error: it is clamped and flagged.
pub fn convert(input: &str, format: FormatSelector, hex_prefix: bool) -> Result<ConversionResult> {
    let parsed = parse_decimal(input)?;
    let classification = classify(&parsed);
    debug!(
        input = %parsed,
        clamped = classification.clamped,
        overflow = classification.overflow,
        "classified input"
    );
    Ok(assemble(parsed, classification, format, hex_prefix))
}

/// Like [`convert`], with the format given as a textual tag.
///
/// The tag is validated before the input is looked at, so an unknown tag is
/// reported even when the input is malformed too.
pub fn convert_tagged(input: &str, tag: &str, hex_prefix: bool) -> Result<ConversionResult> {
    let format: FormatSelector = tag.parse()?;
    convert(input, format, hex_prefix)
}

fn assemble(
    input: DecimalInt,
    classification: Classification,
    format: FormatSelector,
    hex_prefix: bool,
) -> ConversionResult {
    let Classification {
        overflow,
        clamped,
        saturated,
    } = classification;

    let bin32 = encode(clamped);
    let hex8 = bin32.to_hex(hex_prefix);
    trace!(%bin32, %hex8, "encoded clamped value");

    let value_out = match format {
        FormatSelector::Dec => clamped.to_string(),
        FormatSelector::Bin => bin32.to_string(),
        FormatSelector::Hex => hex8.clone(),
    };

    ConversionResult {
        value_out,
        overflow,
        saturated,
        input,
        clamped,
        bin32,
        hex8,
    }
}
