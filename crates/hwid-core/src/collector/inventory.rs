//! # OS Inventory Queries
//!
//! Reads hardware serial numbers through the unprivileged `wmic` utility.
//! Its tabular output is a header line followed by a value line, padded
//! with spaces and terminated with `\r\r\n` on most Windows builds.
//!
//! Parsing lives in [`parse_inventory_value`] so it can be tested against
//! captured output on any host; the live invocation sits behind
//! [`InventorySource`].

use std::process::Command;

use crate::error::CollectionError;

/// A hardware value the composite strategy reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InventoryQuery {
    BiosSerial,
    DiskSerial,
    CpuProcessorId,
}

impl InventoryQuery {
    /// Composite order: BIOS, then disk, then CPU.
    pub const ALL: [InventoryQuery; 3] =
        [Self::BiosSerial, Self::DiskSerial, Self::CpuProcessorId];

    /// Arguments passed to `wmic`.
    pub fn wmic_args(&self) -> [&'static str; 3] {
        match self {
            Self::BiosSerial => ["bios", "get", "serialnumber"],
            Self::DiskSerial => ["diskdrive", "get", "serialnumber"],
            Self::CpuProcessorId => ["cpu", "get", "processorid"],
        }
    }
}

impl std::fmt::Display for InventoryQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::BiosSerial => "BIOS serial number",
            Self::DiskSerial => "disk drive serial number",
            Self::CpuProcessorId => "CPU processor ID",
        })
    }
}

/// Source of raw inventory utility output.
pub trait InventorySource: Send + Sync {
    /// Run the query and return the utility's standard output.
    fn query(&self, query: InventoryQuery) -> Result<String, CollectionError>;
}

/// Invokes `wmic` on the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct WmicSource;

impl WmicSource {
    const PROGRAM: &'static str = "wmic";
}

impl InventorySource for WmicSource {
    fn query(&self, query: InventoryQuery) -> Result<String, CollectionError> {
        tracing::trace!(%query, "invoking {}", Self::PROGRAM);

        let output = Command::new(Self::PROGRAM)
            .args(query.wmic_args())
            .output()
            .map_err(|source| CollectionError::Spawn {
                program: Self::PROGRAM.to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(CollectionError::NonZeroExit {
                program: Self::PROGRAM.to_string(),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Extract the value from tabular inventory output.
///
/// The output must have at least two lines (header and value). The value
/// is the first whitespace-delimited token of the second line, or an empty
/// string when that line is blank.
pub fn parse_inventory_value(
    query: InventoryQuery,
    output: &str,
) -> Result<String, CollectionError> {
    let lines: Vec<&str> = output.split('\n').collect();
    if lines.len() < 2 {
        return Err(CollectionError::MalformedOutput {
            query,
            lines: lines.len(),
        });
    }
    Ok(lines[1]
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_string())
}
