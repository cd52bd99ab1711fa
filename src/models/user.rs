//! Matrix-side user model
//!
//! A bridge keeps one of these records per Matrix user it manages. Besides
//! the metadata bag shared with [`super::RemoteRoom`], the record parses
//! the `@localpart:host` identifier and can rewrite localparts that
//! contain characters outside the Matrix identifier grammar.

use std::fmt;

use serde_json::Value;
use tracing::{debug, instrument};

use super::Metadata;
use crate::{BridgeConfig, BridgeError, Result};

/// Metadata key reserved for the user's display name.
const DISPLAY_NAME_KEY: &str = "displayName";

/// Metadata key carrying the localpart in the persisted mapping.
const LOCALPART_KEY: &str = "localpart";

/// A Matrix-side user tracked by a bridge.
///
/// The identifier is split into localpart and host at construction.
/// Identifiers without a `:` separator are accepted; the host is then
/// absent and the full identifier is just `@<localpart>`.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixUser {
    user_id: String,
    localpart: String,
    host: Option<String>,
    data: Metadata,
}

impl MatrixUser {
    /// Create a new Matrix user from a full `@localpart:host` identifier.
    ///
    /// `data` is an optional initial metadata mapping, e.g. one previously
    /// returned by [`MatrixUser::serialize`]; anything other than a JSON
    /// object is rejected. With `escape` set, disallowed localpart
    /// characters are rewritten before the identifier is stored.
    #[instrument(level = "debug", skip(data))]
    pub fn new<T: Into<String> + std::fmt::Debug>(
        user_id: T,
        data: Option<Value>,
        escape: bool,
    ) -> Result<Self> {
        let user_id = user_id.into();
        if user_id.is_empty() {
            return Err(BridgeError::InvalidArgument(
                "Matrix user ID cannot be empty".to_string(),
            ));
        }

        let data = match data {
            None => Metadata::new(),
            Some(Value::Object(map)) => map,
            Some(other) => {
                return Err(BridgeError::InvalidArgument(format!(
                    "User data must be a key-value object, got {}",
                    json_type_name(&other)
                )));
            }
        };

        let (localpart, host) = match user_id.split_once(':') {
            Some((front, host)) => (strip_sigil(front), Some(host.to_string())),
            None => (strip_sigil(&user_id), None),
        };

        let mut user = Self {
            user_id,
            localpart,
            host,
            data,
        };
        if escape {
            user.escape();
        }
        Ok(user)
    }

    /// Create a new Matrix user, resolving the escape default from the
    /// given configuration.
    ///
    /// The flag is read once, here; later configuration changes do not
    /// touch the returned instance.
    pub fn with_config<T: Into<String> + std::fmt::Debug>(
        user_id: T,
        data: Option<Value>,
        config: &BridgeConfig,
    ) -> Result<Self> {
        Self::new(user_id, data, config.escape_user_ids())
    }

    /// Get the full Matrix user ID, post-escaping if escaping was applied
    pub fn id(&self) -> &str {
        &self.user_id
    }

    /// Get the localpart between the `@` sigil and the `:` separator
    pub fn localpart(&self) -> &str {
        &self.localpart
    }

    /// Get the server name after the `:` separator, if one was present
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// Read the display name from metadata
    pub fn display_name(&self) -> Option<&str> {
        self.data.get(DISPLAY_NAME_KEY).and_then(Value::as_str)
    }

    /// Write the display name into metadata
    pub fn set_display_name<T: Into<String>>(&mut self, name: T) {
        self.data
            .insert(DISPLAY_NAME_KEY.to_string(), Value::String(name.into()));
    }

    /// Look up a metadata value
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    /// Insert or overwrite a metadata value
    pub fn set<K: Into<String>, V: Into<Value>>(&mut self, key: K, value: V) {
        self.data.insert(key.into(), value.into());
    }

    /// Rewrite the localpart so it only contains permitted characters,
    /// then recompute the user ID from its parts.
    #[instrument(level = "debug")]
    pub fn escape(&mut self) {
        let escaped = escape_localpart(&self.localpart);
        if escaped != self.localpart {
            debug!("🔧 Escaped localpart {:?} to {:?}", self.localpart, escaped);
            self.localpart = escaped;
        }
        self.user_id = match &self.host {
            Some(host) => format!("@{}:{}", self.localpart, host),
            None => format!("@{}", self.localpart),
        };
    }

    /// The mapping persisted for this user.
    ///
    /// The current localpart is always present under the `localpart` key.
    /// Returns a fresh mapping; the in-memory metadata is left untouched,
    /// so repeated calls return equal mappings.
    pub fn serialize(&self) -> Metadata {
        let mut out = self.data.clone();
        out.insert(
            LOCALPART_KEY.to_string(),
            Value::String(self.localpart.clone()),
        );
        out
    }
}

impl fmt::Display for MatrixUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_id)
    }
}

/// Escape the characters of a localpart that fall outside the permitted
/// Matrix identifier set.
///
/// Letters, digits and `-`, `.`, `=`, `_` are kept, as is `/`, which
/// current servers accept. Every other character is replaced by `=`
/// followed by its lowercase hexadecimal code point, e.g. a space becomes
/// `=20`. The replacement is decided per character, so the result does
/// not depend on any scan order.
pub fn escape_localpart(localpart: &str) -> String {
    let mut escaped = String::with_capacity(localpart.len());
    for c in localpart.chars() {
        if is_permitted(c) {
            escaped.push(c);
        } else {
            escaped.push_str(&format!("={:02x}", c as u32));
        }
    }
    escaped
}

/// Characters a localpart may contain without escaping.
fn is_permitted(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '=' | '_' | '/')
}

fn strip_sigil(front: &str) -> String {
    front.strip_prefix('@').unwrap_or(front).to_string()
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
