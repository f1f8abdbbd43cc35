//! Network interface strategy: the first non-empty hardware address.

use mac_address::MacAddressIterator;

use super::Collector;
use crate::error::{CollectionError, HwidError};
use crate::identity::RawId;

/// Collects the first non-empty link-layer address of the host.
///
/// Interfaces are inspected in OS enumeration order. If none carries a
/// hardware address the result is an empty [`RawId`], not an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct NetworkCollector;

impl Collector for NetworkCollector {
    fn collect(&self) -> Result<RawId, HwidError> {
        let interfaces = MacAddressIterator::new()
            .map_err(|e| CollectionError::Enumeration(e.to_string()))?;

        let raw = select_hardware_address(interfaces.map(|mac| mac.bytes()));
        match &raw {
            Some(addr) => tracing::debug!(address_len = addr.len(), "found hardware address"),
            None => tracing::debug!("no interface exposes a hardware address"),
        }
        Ok(raw.map(RawId::new).unwrap_or_else(RawId::empty))
    }

    fn name(&self) -> &str {
        "network"
    }
}

/// Pick the first address that is not all zeros, in canonical form.
///
/// Interfaces without a link layer (loopback, tunnels) report an all-zero
/// address and are skipped.
pub fn select_hardware_address<I>(addresses: I) -> Option<String>
where
    I: IntoIterator<Item = [u8; 6]>,
{
    addresses
        .into_iter()
        .find(|bytes| bytes.iter().any(|b| *b != 0))
        .map(|bytes| format_hardware_address(&bytes))
}

/// Lowercase, colon-separated hex: `aa:bb:cc:dd:ee:ff`.
pub fn format_hardware_address(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(":")
}
