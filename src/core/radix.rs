//! Hexadecimal rendering and output format selection

use super::bits::BitPattern32;
use super::errors::{Error, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Marker prepended to hex output when a prefix is requested
pub const HEX_PREFIX: &str = "0x";

/// Which rendering becomes the primary `value_out` of a conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FormatSelector {
    /// Decimal text of the clamped value
    Dec,
    /// The 32-character two's-complement bit pattern
    Bin,
    /// Eight uppercase hex digits, optionally prefixed
    Hex,
}

impl FormatSelector {
    pub const ALL: [FormatSelector; 3] = [Self::Dec, Self::Bin, Self::Hex];

    pub fn as_tag(&self) -> &'static str {
        match self {
            Self::Dec => "DEC",
            Self::Bin => "BIN",
            Self::Hex => "HEX",
        }
    }
}

/// Tags are matched case-insensitively after trimming whitespace.
impl FromStr for FormatSelector {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let tag = s.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|selector| selector.as_tag() == tag)
            .ok_or_else(|| Error::unknown_selector(s))
    }
}

impl fmt::Display for FormatSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// Render untrusted bit-pattern text as 8 uppercase hex digits.
///
/// Validation is the same as for [`crate::core::bits::decode`].
pub fn render_hex(bits: &str, include_prefix: bool) -> Result<String> {
    BitPattern32::parse(bits).map(|pattern| pattern.to_hex(include_prefix))
}
