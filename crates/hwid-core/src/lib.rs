//! # hwid-core — Host Hardware Identifier
//!
//! Reads a stable hardware identifier of the host without elevated
//! privileges, and derives application-scoped identifiers from it that can
//! be shared without exposing the original.
//!
//! - [`id`] returns the raw identifier. Treat it as confidential.
//! - [`protected_id`] returns HMAC-SHA256 of an application ID, keyed by
//!   the raw identifier, as 64 lowercase hex characters.
//!
//! ## Collection Strategies
//!
//! - **Network** (default): the first non-empty network interface hardware
//!   address, e.g. `02:42:ac:11:00:02`. When no interface carries one the
//!   raw identifier is empty; call [`RawId::require_non_empty`] to turn
//!   that into an error.
//! - **Composite** (Windows only): SHA-256 of the BIOS serial, disk serial
//!   and CPU processor ID read through `wmic`.
//!
//! ## Crate Policy
//!
//! - Every call is independent: no caches, no global state, no retries.
//! - The crate emits `tracing` events but never installs a subscriber and
//!   never writes to stdout or stderr.
//! - No `unsafe` code.
//!
//! Identifiers are best-effort stable. Cloned VM images and containers
//! sharing a network namespace can report the same value; this is not an
//! attestation mechanism.

pub mod collector;
pub mod error;
pub mod identity;
pub mod platform;
pub mod protect;

pub use collector::{collector_for, Collector, Strategy};
pub use error::{CollectionError, HwidError};
pub use identity::{ProtectedId, RawId};
pub use platform::Platform;
pub use protect::protect;

/// Raw hardware identifier of the host, using the default strategy.
pub fn id() -> Result<RawId, HwidError> {
    id_with(Strategy::default())
}

/// Raw hardware identifier of the host, using `strategy`.
pub fn id_with(strategy: Strategy) -> Result<RawId, HwidError> {
    let collector = collector_for(strategy, &Platform::detect())?;
    let raw = collector.collect()?;
    tracing::debug!(collector = collector.name(), empty = raw.is_empty(), "collected raw id");
    Ok(raw)
}

/// Protected identifier for `app_id`, using the default strategy.
pub fn protected_id(app_id: &str) -> Result<ProtectedId, HwidError> {
    protected_id_with(app_id, Strategy::default())
}

/// Protected identifier for `app_id`, using `strategy`.
pub fn protected_id_with(app_id: &str, strategy: Strategy) -> Result<ProtectedId, HwidError> {
    let raw = id_with(strategy)?;
    Ok(protect(app_id, &raw))
}
