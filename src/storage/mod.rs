//! Key-value persistence for user state.
//!
//! Every record is a JSON string stored under its own key:
//!
//! ```text
//! storage/
//! ├── config.toml       # Application configuration
//! ├── user.json         # Session: logged-in user, absent when logged out
//! ├── favorites.json    # Saved recipe snapshots, insertion order
//! └── ratings.json      # Recipe id -> stars
//! ```
//!
//! A missing key reads as the record's empty default.

pub mod local;
pub mod memory;

use crate::error::Result;

// Re-export for convenience
pub use local::LocalStorage;
pub use memory::MemoryStorage;

/// Key of the session record.
pub const USER_KEY: &str = "user";

/// Key of the favorites list.
pub const FAVORITES_KEY: &str = "favorites";

/// Key of the ratings map.
pub const RATINGS_KEY: &str = "ratings";

/// String-keyed, string-valued durable store.
///
/// Writes are complete when the call returns.
pub trait KeyValueStore: Send + Sync {
    /// Read a value, `None` when the key was never written or was removed.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete a key. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
