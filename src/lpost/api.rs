//! # API Facade
//!
//! Thin facade over the command layer and the single entry point for every
//! client. It owns both stores, parses loose client input (selectors as
//! strings) into typed values and dispatches to `commands::*::run`.
//!
//! No business logic and no I/O assumptions live here.

use crate::commands;
use crate::commands::helpers::PostSelector;
use crate::error::Result;
use crate::model::Settings;
use crate::posts::PostStore;
use crate::settings::SettingsStore;
use crate::store::StorageBackend;
use std::path::Path;

/// Generic over the backend: `GalleryApi<FsBackend>` in production,
/// `GalleryApi<&MemBackend>` in tests.
pub struct GalleryApi<B: StorageBackend + Clone> {
    posts: PostStore<B>,
    settings: SettingsStore<B>,
}

impl<B: StorageBackend + Clone> GalleryApi<B> {
    pub fn open(backend: B) -> Result<Self> {
        Ok(Self {
            posts: PostStore::open(backend.clone())?,
            settings: SettingsStore::new(backend),
        })
    }

    pub fn add_post(&mut self, new_post: NewPost) -> Result<CmdResult> {
        commands::add::run(&mut self.posts, new_post)
    }

    pub fn list_posts(&self) -> Result<CmdResult> {
        commands::list::run(&self.posts)
    }

    pub fn view_posts<I: AsRef<str>>(&self, selectors: &[I]) -> Result<CmdResult> {
        let selectors = parse_selectors(selectors)?;
        commands::view::run(&self.posts, &selectors)
    }

    pub fn image_link(&self, selector: &str) -> Result<CmdResult> {
        let selector: PostSelector = selector.parse()?;
        commands::link::run(&self.posts, &selector)
    }

    pub fn download_posts<I: AsRef<str>>(&self, selectors: &[I], dir: &Path) -> Result<CmdResult> {
        let selectors = parse_selectors(selectors)?;
        commands::download::run(&self.posts, &selectors, dir)
    }

    pub fn settings(&mut self, action: SettingsAction) -> Result<CmdResult> {
        commands::settings::run(&mut self.settings, action)
    }

    pub fn current_settings(&self) -> Settings {
        self.settings.get()
    }

    pub fn reset(&mut self) -> Result<CmdResult> {
        commands::reset::run(&mut self.posts, &mut self.settings)
    }

    /// Reset without opening the gallery; see [`commands::reset::wipe`].
    pub fn wipe(backend: &B) -> Result<CmdResult> {
        commands::reset::wipe(backend)
    }

    pub fn post_count(&self) -> usize {
        self.posts.len()
    }
}

fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<PostSelector>> {
    inputs.iter().map(|s| s.as_ref().parse()).collect()
}

pub use commands::add::NewPost;
pub use commands::settings::SettingsAction;
pub use commands::{CmdMessage, CmdResult, DisplayPost, MessageLevel};
