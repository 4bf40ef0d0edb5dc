//! 32-bit two's-complement bit patterns
//!
//! A [`BitPattern32`] can only be built by [`encode`] or by the validating
//! [`BitPattern32::parse`], so holding one means the text is exactly 32
//! characters of `'0'`/`'1'`, most significant bit first.

use super::errors::{Error, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Number of bits in a pattern
pub const WIDTH: usize = 32;

/// 2^32, the modulus of two's-complement arithmetic at this width
const MODULUS: i64 = 1 << WIDTH;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct BitPattern32(String);

impl BitPattern32 {
    /// Validate untrusted text as a bit pattern.
    ///
    /// This is the single validation path shared by [`decode`] and
    /// [`crate::core::radix::render_hex`].
    pub fn parse(text: &str) -> Result<Self> {
        let length = text.chars().count();
        if length != WIDTH {
            return Err(Error::malformed_bits(
                text,
                format!("expected {} characters, found {}", WIDTH, length),
            ));
        }
        if let Some((position, c)) = text.chars().enumerate().find(|(_, c)| *c != '0' && *c != '1')
        {
            return Err(Error::malformed_bits(
                text,
                format!("unexpected character {:?} at position {}", c, position),
            ));
        }
        Ok(Self(text.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the most significant bit is set
    pub fn sign_bit(&self) -> bool {
        self.0.starts_with('1')
    }

    /// The pattern read as an unsigned 32-bit number
    pub fn to_u32(&self) -> u32 {
        self.0
            .bytes()
            .fold(0u32, |acc, bit| (acc << 1) | u32::from(bit == b'1'))
    }

    /// The pattern read as a signed two's-complement number.
    ///
    /// With the sign bit clear this is the unsigned value u; with it set,
    /// u - 2^32.
    pub fn to_i32(&self) -> i32 {
        let unsigned = i64::from(self.to_u32());
        let signed = if self.sign_bit() {
            unsigned - MODULUS
        } else {
            unsigned
        };
        // signed lies in [-2^31, 2^31) for every 32-bit pattern
        signed as i32
    }

    /// Exactly 8 uppercase hex digits, optionally prefixed with `0x`
    pub fn to_hex(&self, include_prefix: bool) -> String {
        let digits = format!("{:08X}", self.to_u32());
        if include_prefix {
            format!("{}{}", super::radix::HEX_PREFIX, digits)
        } else {
            digits
        }
    }
}

impl From<u32> for BitPattern32 {
    fn from(unsigned: u32) -> Self {
        Self(format!("{:032b}", unsigned))
    }
}

impl FromStr for BitPattern32 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl AsRef<str> for BitPattern32 {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BitPattern32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Two's-complement encoding of a signed 32-bit value.
///
/// Non-negative values are written in binary; a negative value v is written
/// as the binary of v + 2^32. Both are zero-padded to 32 digits.
pub fn encode(value: i32) -> BitPattern32 {
    let value = i64::from(value);
    let residue = if value >= 0 { value } else { value + MODULUS };
    BitPattern32(format!("{:032b}", residue))
}

/// Decode untrusted text as a two's-complement bit pattern
pub fn decode(text: &str) -> Result<i32> {
    BitPattern32::parse(text).map(|bits| bits.to_i32())
}
