//! # Storage Layer
//!
//! Both stores persist through the [`StorageBackend`] trait: a tiny
//! key-value port with `get`, `set` and `remove`. Each logical record
//! (the post collection, the settings) lives under one fixed key and is
//! always written whole.
//!
//! ## Implementations
//!
//! - [`fs::FsBackend`]: production storage, one JSON file per key in the
//!   data directory. Writes go to a temp file and are renamed into place,
//!   so an interrupted write leaves the previous record intact.
//! - [`mem::MemBackend`]: in-memory map for tests, with write-failure
//!   simulation.
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── rag_posts_v1.json   # JSON array of posts, newest first
//! ├── rag_settings.json   # {"theme": "...", "anim": bool}
//! └── config.json         # client configuration
//! ```

use crate::error::Result;

pub mod fs;
pub mod mem;

/// Key the post collection is stored under.
pub const POSTS_KEY: &str = "rag_posts_v1";

/// Key the settings record is stored under.
pub const SETTINGS_KEY: &str = "rag_settings";

/// Raw key-value persistence.
///
/// Every call is atomic with respect to its key: a reader sees either the
/// old value or the new one, never a mix. Methods take `&self`; lpost is
/// single-threaded and implementations use interior mutability where
/// needed.
pub trait StorageBackend {
    /// Read the value stored under `key`. `Ok(None)` when absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

impl<B: StorageBackend + ?Sized> StorageBackend for &B {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}
