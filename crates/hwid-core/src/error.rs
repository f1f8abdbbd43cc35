//! # Error Types
//!
//! Structured errors for identifier collection. Uses `thiserror` for
//! derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Collection failures carry the program or query that failed so the
//!   caller can report something actionable.
//! - Nothing here is retried or recovered internally; every error is
//!   returned to the immediate caller.
//! - Protection (`protect`) is infallible and has no error type.

use thiserror::Error;

use crate::collector::{InventoryQuery, Strategy};

/// Top-level error type for hardware identifier operations.
#[derive(Error, Debug)]
pub enum HwidError {
    /// The collector could not enumerate interfaces or query the OS.
    #[error("hardwareid: collection failed: {0}")]
    Collection(#[from] CollectionError),

    /// The host platform has no implementation of the requested strategy.
    #[error("hardwareid: {strategy} strategy is not supported on platform {platform:?}")]
    UnsupportedPlatform {
        /// Detected platform name (`std::env::consts::OS` form).
        platform: String,
        /// Strategy that was requested.
        strategy: Strategy,
    },

    /// Collection succeeded but no hardware identifier was available.
    ///
    /// Only produced by [`RawId::require_non_empty`](crate::RawId::require_non_empty);
    /// the default facade reports this case as an empty identifier.
    #[error("hardwareid: no hardware identifier available on this host")]
    NoIdentifier,
}

/// Failure while collecting a raw identifier from the OS.
#[derive(Error, Debug)]
pub enum CollectionError {
    /// Listing network interfaces failed.
    #[error("network interface enumeration failed: {0}")]
    Enumeration(String),

    /// The inventory utility could not be started.
    #[error("failed to execute {program}: {source}")]
    Spawn {
        /// Program that was invoked.
        program: String,
        /// Underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// The inventory utility exited unsuccessfully.
    #[error("{program} exited with status {code:?}: {stderr}")]
    NonZeroExit {
        /// Program that was invoked.
        program: String,
        /// Exit code, if the process was not killed by a signal.
        code: Option<i32>,
        /// Trimmed standard error output.
        stderr: String,
    },

    /// The inventory utility printed something other than a header and a value line.
    #[error("unexpected output for {query}: expected at least 2 lines, got {lines}")]
    MalformedOutput {
        /// Query whose output could not be parsed.
        query: InventoryQuery,
        /// Number of lines actually seen.
        lines: usize,
    },
}
