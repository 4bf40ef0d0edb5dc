//! CLI module for sat32
//!
//! - Argument definitions (this module)
//! - Runtime setup: logging and settings resolution (`setup`)

pub mod setup;

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::io::output::OutputStyle;

pub use setup::{init_logging, resolve_settings, RunSettings};

#[derive(Parser, Debug)]
#[command(name = "sat32")]
#[command(
    about = "Signed 32-bit conversions with overflow detection and saturation",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Decimal signed integer input (e.g. "123", "-45", "0")
    #[arg(allow_negative_numbers = true)]
    pub value: String,

    /// Output format selector: DEC, BIN or HEX
    pub format: String,

    /// Prefix HEX output with 0x (e.g. 0xFFFFFFF4)
    #[arg(long = "hex-prefix")]
    pub hex_prefix: bool,

    /// Output style (overrides the config file)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputStyleArg>,

    /// Configuration file (defaults to the nearest .sat32.toml)
    #[arg(short, long, env = "SAT32_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputStyleArg {
    Plain,
    Json,
}

impl From<OutputStyleArg> for OutputStyle {
    fn from(style: OutputStyleArg) -> Self {
        match style {
            OutputStyleArg::Plain => OutputStyle::Plain,
            OutputStyleArg::Json => OutputStyle::Json,
        }
    }
}

/// Parse CLI arguments using Clap
pub fn parse_args() -> Cli {
    Cli::parse()
}
