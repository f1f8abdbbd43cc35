//! # Configuration File
//!
//! Optional YAML file supplying defaults for the identify flags:
//!
//! ```yaml
//! app_id: Corp.SomeApp
//! strategy: network
//! strict: true
//! ```
//!
//! Every key is optional. Flags given on the command line win over file
//! values.

use std::path::Path;

use anyhow::Context;
use hwid_core::Strategy;
use serde::Deserialize;

/// Defaults loaded from `--config`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Application ID; when set, the protected ID is printed.
    #[serde(default)]
    pub app_id: Option<String>,

    /// Collection strategy.
    #[serde(default)]
    pub strategy: Option<Strategy>,

    /// Fail when no hardware identifier is available.
    #[serde(default)]
    pub strict: Option<bool>,
}

impl CliConfig {
    /// Read and parse a YAML config file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_yaml(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// Parse YAML text. An empty document yields the defaults.
    pub fn from_yaml(content: &str) -> anyhow::Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }
}
