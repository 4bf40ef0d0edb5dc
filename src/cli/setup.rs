//! Setup and initialization functions for the CLI
//!
//! Logging initialisation and the merge of command-line flags with the
//! configuration file.

use tracing_subscriber::EnvFilter;

use super::Cli;
use crate::config::Sat32Config;
use crate::io::output::OutputStyle;

/// Effective settings for one run after merging flags and config
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSettings {
    pub hex_prefix: bool,
    pub style: OutputStyle,
}

/// Pure function mapping `-v` count to a default filter directive
pub fn default_log_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the stderr log subscriber once at startup.
///
/// `RUST_LOG` takes precedence over the `-v` count. Records from the `log`
/// facade are forwarded to the same subscriber.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_level(verbosity)));

    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
    {
        // Already configured - this is fine, just ignore
        eprintln!("Note: Logging already configured: {}", e);
    }
}

/// Pure function: CLI flags over config file over defaults.
///
/// `--hex-prefix` can only switch the prefix on.
pub fn resolve_settings(cli: &Cli, config: &Sat32Config) -> RunSettings {
    RunSettings {
        hex_prefix: cli.hex_prefix || config.hex_prefix(),
        style: cli.output.map(OutputStyle::from).unwrap_or_else(|| config.style()),
    }
}
