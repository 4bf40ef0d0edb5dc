// Export modules for library usage
pub mod cli;
pub mod config;
pub mod core;
pub mod io;

// Re-export commonly used types
pub use crate::core::{
    classify, convert, convert_tagged, decode, detect_overflow, encode, parse_decimal,
    parse_optional_decimal, render_hex, saturate, BitPattern32, Classification,
    ConversionResult, DecimalInt, Error, FormatSelector, Result, HEX_PREFIX, I32_MAX, I32_MIN,
};

pub use crate::io::output::{create_writer, OutputStyle, OutputWriter};

pub use crate::config::{load_config, load_config_file, Sat32Config};
