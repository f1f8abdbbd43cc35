//! # Raw ID Collection
//!
//! Abstracts raw identifier collection behind the [`Collector`] trait, with
//! one implementation per strategy:
//!
//! - [`NetworkCollector`]: first non-empty link-layer address among the
//!   host's network interfaces. Works on every recognized platform and is
//!   the default.
//! - [`CompositeCollector`]: SHA-256 over the BIOS serial, disk-drive serial
//!   and CPU processor ID reported by the OS inventory utility. Windows
//!   only.
//!
//! [`collector_for`] picks the implementation for a strategy and platform
//! once; adding a platform means adding an implementation here, not
//! editing call sites.

mod composite;
mod inventory;
mod network;

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::HwidError;
use crate::identity::RawId;
use crate::platform::Platform;

pub use composite::CompositeCollector;
pub use inventory::{parse_inventory_value, InventoryQuery, InventorySource, WmicSource};
pub use network::{format_hardware_address, select_hardware_address, NetworkCollector};

/// Platform-specific procedure for obtaining the raw identifier.
///
/// Collectors hold no mutable state and must be `Send + Sync` so concurrent
/// callers can share one.
pub trait Collector: Send + Sync {
    /// Query the OS and produce the raw identifier.
    fn collect(&self) -> Result<RawId, HwidError>;

    /// Human-readable name for diagnostics.
    fn name(&self) -> &str;
}

/// Which collection strategy to run.
///
/// Parsing, from a flag or a config file, ignores ASCII case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// First non-empty network interface hardware address.
    #[default]
    Network,
    /// Hash of BIOS serial, disk serial and CPU processor ID.
    Composite,
}

impl Strategy {
    /// Lowercase name, as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Network => "network",
            Self::Composite => "composite",
        }
    }

    /// Whether this strategy has an implementation on `platform`.
    pub fn is_supported_on(&self, platform: &Platform) -> bool {
        match self {
            Self::Network => platform.has_interface_enumeration(),
            Self::Composite => *platform == Platform::Windows,
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "network" => Ok(Self::Network),
            "composite" => Ok(Self::Composite),
            other => Err(format!(
                "unknown strategy {other:?}; expected \"network\" or \"composite\""
            )),
        }
    }
}

impl<'de> Deserialize<'de> for Strategy {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

/// Select the collector implementing `strategy` on `platform`.
///
/// Returns [`HwidError::UnsupportedPlatform`] when the platform has no
/// implementation of the strategy.
pub fn collector_for(
    strategy: Strategy,
    platform: &Platform,
) -> Result<Box<dyn Collector>, HwidError> {
    if !strategy.is_supported_on(platform) {
        return Err(HwidError::UnsupportedPlatform {
            platform: platform.as_str().to_string(),
            strategy,
        });
    }

    tracing::trace!(%strategy, %platform, "selected collector");

    let collector: Box<dyn Collector> = match strategy {
        Strategy::Network => Box::new(NetworkCollector),
        Strategy::Composite => Box::new(CompositeCollector::new(WmicSource)),
    };
    Ok(collector)
}
