//! # Identifier Newtypes
//!
//! [`RawId`] and [`ProtectedId`] wrap plain strings so the two forms cannot
//! be confused: a function that should only ever publish the protected
//! form takes a `ProtectedId`, and the raw form never leaks through it.
//!
//! Neither type offers a conversion from the protected form back to the raw
//! form. There is no decoding operation:
//!
//! ```compile_fail
//! use hwid_core::{protect, RawId};
//!
//! let protected = protect("app.id", &RawId::new("aa:bb:cc:dd:ee:ff"));
//! let raw = RawId::from(protected);
//! ```
//!
//! Going the other way is the only path:
//!
//! ```
//! use hwid_core::{protect, RawId};
//!
//! let protected = protect("app.id", &RawId::new("AA:BB:CC:DD:EE:FF"));
//! assert_eq!(protected.as_str().len(), 64);
//! ```

use serde::Serialize;

use crate::error::HwidError;

/// Unprotected, platform-derived hardware identifier.
///
/// Regard the value as confidential and prefer publishing a [`ProtectedId`].
/// May be empty when the network strategy found no interface with a
/// hardware address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RawId(String);

/// Application-scoped digest of a [`RawId`]: 64 lowercase hex characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProtectedId(String);

impl RawId {
    /// Wrap an already-collected identifier.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The "no hardware identifier available" value.
    pub fn empty() -> Self {
        Self(String::new())
    }

    /// Access the identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Access the identifier bytes (the HMAC key).
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// True when collection found no identifier.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Reject the empty identifier with [`HwidError::NoIdentifier`].
    pub fn require_non_empty(self) -> Result<Self, HwidError> {
        if self.is_empty() {
            Err(HwidError::NoIdentifier)
        } else {
            Ok(self)
        }
    }

    /// Consume the wrapper.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl ProtectedId {
    pub(crate) fn from_digest(digest: &[u8]) -> Self {
        Self(hex::encode(digest))
    }

    /// Access the hex digest.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<&str> for RawId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for RawId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for RawId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for ProtectedId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
