//! # Identify Command
//!
//! Prints the raw hardware ID, or the protected ID when an application ID
//! is given. Plain output is the bare identifier on one line; `--json`
//! wraps it with the strategy used.

use anyhow::Context;
use clap::Args;
use hwid_core::{protect, RawId, Strategy};
use serde::Serialize;

use crate::config::CliConfig;

/// Arguments for identifier output.
#[derive(Args, Debug, Default)]
pub struct IdentifyArgs {
    /// Print the protected ID for this application ID instead of the raw ID.
    #[arg(long = "appid", value_name = "APPID")]
    pub app_id: Option<String>,

    /// Collection strategy: `network` (default) or `composite` (Windows only).
    #[arg(long)]
    pub strategy: Option<Strategy>,

    /// Fail if no hardware identifier is available instead of printing an empty line.
    #[arg(long)]
    pub strict: bool,

    /// Print a JSON object instead of the bare identifier.
    #[arg(long)]
    pub json: bool,
}

/// Effective settings after merging flags over the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifySettings {
    pub app_id: Option<String>,
    pub strategy: Strategy,
    pub strict: bool,
    pub json: bool,
}

impl IdentifySettings {
    /// Flags win; the config file fills the gaps.
    pub fn resolve(args: &IdentifyArgs, config: &CliConfig) -> Self {
        Self {
            app_id: args.app_id.clone().or_else(|| config.app_id.clone()),
            strategy: args.strategy.or(config.strategy).unwrap_or_default(),
            strict: args.strict || config.strict.unwrap_or(false),
            json: args.json,
        }
    }
}

#[derive(Debug, Serialize)]
struct IdentifyOutput<'a> {
    id: &'a str,
    protected: bool,
    strategy: Strategy,
}

/// Collect the identifier and render the line to print.
pub fn run_identify(settings: &IdentifySettings) -> anyhow::Result<String> {
    let raw = hwid_core::id_with(settings.strategy)
        .with_context(|| format!("collecting hardware id with {} strategy", settings.strategy))?;
    let raw = if settings.strict {
        raw.require_non_empty()?
    } else {
        raw
    };
    render(settings, &raw)
}

/// Format `raw` (or its protected form) according to `settings`.
pub fn render(settings: &IdentifySettings, raw: &RawId) -> anyhow::Result<String> {
    if raw.is_empty() {
        tracing::warn!("no network interface exposes a hardware address");
    }

    let id = match &settings.app_id {
        Some(app_id) => protect(app_id, raw).into_string(),
        None => raw.as_str().to_string(),
    };

    if settings.json {
        let output = IdentifyOutput {
            id: &id,
            protected: settings.app_id.is_some(),
            strategy: settings.strategy,
        };
        Ok(serde_json::to_string(&output)?)
    } else {
        Ok(id)
    }
}
