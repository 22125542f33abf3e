use anyhow::Result;

/// Keys of the persisted entries. Each key holds one independently
/// serialized value: JSON documents for the collections and the session,
/// a raw token for the language and theme selections.
pub mod keys {
    pub const ARTICLES: &str = "articles";
    pub const COMMENTS: &str = "comments";
    pub const AUTH: &str = "auth";
    pub const LANGUAGE: &str = "language";
    pub const THEME: &str = "theme";
}

/// Best-effort local key-value store behind the stores.
///
/// Adapters make no durability promises beyond "the last successful save is
/// what `load` returns". Stores treat a failed save as a logged gap between
/// in-memory and persisted state, not as a user-facing error.
pub trait Storage: Send + Sync {
    /// Returns the stored value for `key`, or `None` when absent
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the value for `key` in full
    fn save(&self, key: &str, value: &str) -> Result<()>;

    /// Removes the entry for `key`; absent keys are not an error
    fn remove(&self, key: &str) -> Result<()>;
}
