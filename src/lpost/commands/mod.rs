//! # Command Layer
//!
//! One module per user intent. Each `run` function works on the stores it
//! needs and returns a [`CmdResult`]; none of them print, prompt or exit.
//! Confirmation for destructive actions is the client's job.

use crate::model::{Post, Settings};
use std::path::PathBuf;

pub mod add;
pub mod download;
pub mod helpers;
pub mod link;
pub mod list;
pub mod reset;
pub mod settings;
pub mod view;

/// A post together with its 1-based position in the newest-first listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayPost {
    pub index: usize,
    pub post: Post,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_posts: Vec<Post>,
    pub listed_posts: Vec<DisplayPost>,
    pub settings: Option<Settings>,
    pub links: Vec<String>,
    pub paths: Vec<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_posts(mut self, posts: Vec<Post>) -> Self {
        self.affected_posts = posts;
        self
    }

    pub fn with_listed_posts(mut self, posts: Vec<DisplayPost>) -> Self {
        self.listed_posts = posts;
        self
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = Some(settings);
        self
    }
}
