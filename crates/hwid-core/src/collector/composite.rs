//! Composite strategy: hash of BIOS serial, disk serial and CPU processor ID.

use sha2::{Digest, Sha256};

use super::inventory::{parse_inventory_value, InventoryQuery, InventorySource};
use super::Collector;
use crate::error::HwidError;
use crate::identity::RawId;

/// Combines three inventory values into a fixed-length identifier.
///
/// The values are concatenated in [`InventoryQuery::ALL`] order and hashed
/// with SHA-256; the raw ID is the uppercase hex digest. Any failed query
/// fails the whole collection.
#[derive(Debug, Clone, Default)]
pub struct CompositeCollector<S> {
    source: S,
}

impl<S: InventorySource> CompositeCollector<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

impl<S: InventorySource> Collector for CompositeCollector<S> {
    fn collect(&self) -> Result<RawId, HwidError> {
        let mut combined = String::new();
        for query in InventoryQuery::ALL {
            let output = self.source.query(query)?;
            let value = parse_inventory_value(query, &output)?;
            tracing::trace!(%query, empty = value.is_empty(), "inventory value read");
            combined.push_str(&value);
        }

        let digest = Sha256::digest(combined.as_bytes());
        Ok(RawId::new(hex::encode_upper(digest)))
    }

    fn name(&self) -> &str {
        "composite"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CollectionError;

    /// Replays captured `wmic` output.
    struct Captured;

    impl InventorySource for Captured {
        fn query(&self, query: InventoryQuery) -> Result<String, CollectionError> {
            Ok(match query {
                InventoryQuery::BiosSerial => "SerialNumber  \r\r\nPF1ABCDE      \r\r\n",
                InventoryQuery::DiskSerial => "SerialNumber   \r\r\nS2XNJ0K123456  \r\r\n",
                InventoryQuery::CpuProcessorId => "ProcessorId       \r\r\nBFEBFBFF000906EA  \r\r\n",
            }
            .to_string())
        }
    }

    /// Fails a single query.
    struct Failing(InventoryQuery);

    impl InventorySource for Failing {
        fn query(&self, query: InventoryQuery) -> Result<String, CollectionError> {
            if query == self.0 {
                Ok("SerialNumber".to_string())
            } else {
                Captured.query(query)
            }
        }
    }

    #[test]
    fn hashes_concatenated_values() {
        let raw = CompositeCollector::new(Captured).collect().unwrap();
        // SHA-256("PF1ABCDE" + "S2XNJ0K123456" + "BFEBFBFF000906EA"), uppercase.
        assert_eq!(
            raw.as_str(),
            "9F5E0EE9C4388A86AFB638D3C53A504B5D6BD9BEB6E46DC8736132CED7F58925"
        );
    }

    #[test]
    fn composite_id_is_fixed_length_uppercase_hex() {
        let raw = CompositeCollector::new(Captured).collect().unwrap();
        assert_eq!(raw.as_str().len(), 64);
        assert!(raw.as_str().chars().all(|c| matches!(c, '0'..='9' | 'A'..='F')));
    }

    #[test]
    fn any_malformed_query_fails_collection() {
        for query in InventoryQuery::ALL {
            let err = CompositeCollector::new(Failing(query)).collect().unwrap_err();
            match err {
                HwidError::Collection(CollectionError::MalformedOutput { query: q, .. }) => {
                    assert_eq!(q, query)
                }
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn spawn_failure_propagates() {
        struct Missing;
        impl InventorySource for Missing {
            fn query(&self, _: InventoryQuery) -> Result<String, CollectionError> {
                Err(CollectionError::Spawn {
                    program: "wmic".to_string(),
                    source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
                })
            }
        }
        let err = CompositeCollector::new(Missing).collect().unwrap_err();
        assert!(matches!(err, HwidError::Collection(CollectionError::Spawn { .. })));
    }
}
