//! Bridge data models
//!
//! A bridge tracks the two sides of every mapping it maintains: a room on
//! the remote network and a user on the Matrix side. Both are plain
//! identifier-plus-metadata records; the store persists the metadata
//! mapping and keeps the identifier as a separate key.

mod room;
mod user;

pub use room::RemoteRoom;
pub use user::{escape_localpart, MatrixUser};

/// The metadata bag attached to bridge model objects.
///
/// Values are restricted to the JSON-serializable subset (strings, numbers,
/// booleans, null, nested arrays and objects) so that the mapping returned
/// by `serialize` can always be handed to the store as-is.
pub type Metadata = serde_json::Map<String, serde_json::Value>;
