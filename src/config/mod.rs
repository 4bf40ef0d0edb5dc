//! Configuration for the sat32 binary
//!
//! Settings come from an optional `.sat32.toml`; command-line flags take
//! precedence over the file, and the file over built-in defaults.

pub mod core;
pub mod loader;

pub use self::core::{OutputConfig, Sat32Config};
pub use loader::{load_config, load_config_file, load_config_from, parse_config, CONFIG_FILE_NAME};
