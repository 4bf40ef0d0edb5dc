use serde::{Deserialize, Serialize};

use crate::io::output::OutputStyle;

/// Root configuration structure for sat32
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Sat32Config {
    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Prefix HEX renderings with `0x`
    #[serde(default)]
    pub hex_prefix: Option<bool>,

    /// How results are written to stdout
    #[serde(default)]
    pub style: Option<OutputStyle>,
}

impl Sat32Config {
    pub fn hex_prefix(&self) -> bool {
        self.output
            .as_ref()
            .and_then(|output| output.hex_prefix)
            .unwrap_or(false)
    }

    pub fn style(&self) -> OutputStyle {
        self.output
            .as_ref()
            .and_then(|output| output.style)
            .unwrap_or_default()
    }
}
