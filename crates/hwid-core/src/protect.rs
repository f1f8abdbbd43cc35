//! # Protector
//!
//! Derives an application-scoped identifier from a [`RawId`]: HMAC-SHA256
//! over the application ID, keyed by the raw identifier, hex encoded.
//!
//! The raw identifier is the key, not the message, so publishing the
//! protected form for one application reveals nothing usable for another.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::identity::{ProtectedId, RawId};

type HmacSha256 = Hmac<Sha256>;

/// Compute the protected identifier of `raw` for `app_id`.
///
/// Pure and infallible. Empty inputs are accepted and still produce a
/// 64-character digest.
pub fn protect(app_id: &str, raw: &RawId) -> ProtectedId {
    // HMAC pads short keys and hashes long ones, so `new_from_slice` never
    // returns `InvalidLength` for it.
    let mut mac = HmacSha256::new_from_slice(raw.as_bytes())
        .unwrap_or_else(|_| unreachable!("HMAC accepts keys of any length"));
    mac.update(app_id.as_bytes());
    ProtectedId::from_digest(&mac.finalize().into_bytes())
}
