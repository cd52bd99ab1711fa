//! Matrixon Bridge Models Library
//!
//! Author: arkSong <arksong2018@gmail.com>
//! Version: 0.11.0-alpha
//! Date: 2024-03-21
//!
//! Data models shared between Matrixon application service bridges and
//! their storage layer. A bridge tracks a room on the remote network and
//! a user on the Matrix side as plain identifier-plus-metadata records;
//! this library defines those records, the user ID escaping rules, and
//! the mapping shape handed to the store.
//!
//! # Features
//! - Remote room and Matrix user records with arbitrary metadata
//! - Matrix user ID parsing and localpart escaping
//! - Configurable escape default for constructed users
//! - Error handling and logging
//!
//! # Examples
//! ```rust
//! use matrixon_bridge_models::{MatrixUser, Result};
//!
//! fn example() -> Result<()> {
//!     let user = MatrixUser::new("@alice:matrixon.local", None, true)?;
//!     assert_eq!(user.localpart(), "alice");
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod models;

pub use config::BridgeConfig;
pub use error::{BridgeError, Result};
pub use models::{escape_localpart, MatrixUser, Metadata, RemoteRoom};
