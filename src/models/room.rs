//! Remote-network room model

use serde_json::Value;
use tracing::instrument;

use super::Metadata;

/// A room on the remote (non-Matrix) network side of a bridge.
///
/// Wraps an opaque remote identifier together with bridge-defined
/// metadata. The identifier is fixed at construction and uniquely names
/// the room on the remote network; the metadata is an arbitrary key-value
/// bag the bridge reads and writes over the room's lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteRoom {
    id: String,
    data: Metadata,
}

impl RemoteRoom {
    /// Create a new remote room with empty metadata
    #[instrument(level = "debug")]
    pub fn new<T: Into<String> + std::fmt::Debug>(id: T) -> Self {
        Self {
            id: id.into(),
            data: Metadata::new(),
        }
    }

    /// Reconstruct a remote room from a previously stored metadata mapping
    pub fn with_data<T: Into<String>>(id: T, data: Metadata) -> Self {
        Self {
            id: id.into(),
            data,
        }
    }

    /// Get the remote room identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Look up a metadata value
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    /// Insert or overwrite a metadata value
    pub fn set<K: Into<String>, V: Into<Value>>(&mut self, key: K, value: V) {
        self.data.insert(key.into(), value.into());
    }

    /// The mapping persisted for this room.
    ///
    /// The identifier is intentionally excluded; the store keeps it as a
    /// separate table key.
    pub fn serialize(&self) -> Metadata {
        self.data.clone()
    }
}
