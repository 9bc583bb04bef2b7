use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// A gossip message as seen by the tracker.
///
/// `peer_id` and `data` are opaque to the tracker; only `id` drives indexing
/// and deduplication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Unique message identifier (must be non-empty to be tracked)
    #[serde(default)]
    pub id: String,
    /// Originating peer
    #[serde(default)]
    pub peer_id: String,
    /// Raw payload, base64-encoded on the wire (`null` decodes as empty)
    #[serde(default, with = "base64_bytes")]
    pub data: Vec<u8>,
}

impl Message {
    /// Create a new message.
    pub fn new(
        id: impl Into<String>,
        peer_id: impl Into<String>,
        data: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            id: id.into(),
            peer_id: peer_id.into(),
            data: data.into(),
        }
    }
}

/// Errors returned by [`MessageTracker`](super::MessageTracker) operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TrackerError {
    #[error("invalid message: {reason}")]
    InvalidMessage { reason: &'static str },
    #[error("message `{id}` not found")]
    MessageNotFound { id: String },
    #[error("tracker capacity must be positive, got {capacity}")]
    InvalidCapacity { capacity: usize },
}

/// What a successful [`add`](super::MessageTracker::add) did to the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The message was stored; `evicted` is set when the oldest entry made room.
    Inserted { evicted: bool },
    /// The id was already tracked and the stored copy was kept.
    Duplicate,
}

/// Runtime counters for operational visibility.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct TrackerStats {
    /// Messages newly inserted into the tracker.
    pub added_total: u64,
    /// Adds ignored because the id was already tracked.
    pub duplicates_total: u64,
    /// Messages dropped to make room for newer ones.
    pub evictions_total: u64,
    /// Messages removed through an explicit delete.
    pub deletions_total: u64,
}

mod base64_bytes {
    use super::{Deserialize, Deserializer, Serializer};
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let Some(encoded) = Option::<String>::deserialize(deserializer)? else {
            return Ok(Vec::new());
        };
        STANDARD
            .decode(encoded.as_bytes())
            .map_err(serde::de::Error::custom)
    }
}
