//! Numeric core: every operation here is a pure, deterministic transform.

pub mod bits;
pub mod convert;
pub mod decimal;
pub mod errors;
pub mod radix;
pub mod range;

pub use bits::{decode, encode, BitPattern32};
pub use convert::{convert, convert_tagged, ConversionResult};
pub use decimal::{parse_decimal, parse_optional_decimal, DecimalInt};
pub use errors::{Error, Result};
pub use radix::{render_hex, FormatSelector, HEX_PREFIX};
pub use range::{classify, detect_overflow, saturate, Classification, I32_MAX, I32_MIN};
