//! # lpost
//!
//! A local image gallery library. Posts (an image with a title and a
//! description) and user settings live in a key-value store on disk; a
//! client adds, browses, views, copies and downloads them.
//!
//! The crate is layered the same way from the outside in:
//!
//! ```text
//! CLI (main.rs, cli/)       argument parsing, terminal output, prompts
//!        │
//! API (api.rs)              facade, parses selectors, dispatches
//!        │
//! Commands (commands/)      one module per user intent
//!        │
//! Stores (posts, settings)  validation, in-memory mirror, merge rules
//!        │
//! Storage (store/)          StorageBackend: FsBackend, MemBackend
//! ```
//!
//! Everything from `api` inward takes plain Rust values and returns
//! `Result` types. Nothing below the CLI prints, prompts or exits, so the
//! same core could sit behind any other front end.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade all clients go through
//! - [`commands`]: add, list, view, link, download, settings, reset
//! - [`posts`]: the post collection and its validation rules
//! - [`settings`]: theme and animation preferences
//! - [`store`]: storage port and its implementations
//! - [`model`]: `Post`, `Settings`, `Theme`, `ImageFormat`
//! - [`data_url`]: inline image encoding
//! - [`config`]: client configuration
//! - [`clipboard`]: system clipboard support
//! - [`error`]: error types

pub mod api;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod data_url;
pub mod error;
pub mod model;
pub mod posts;
pub mod settings;
pub mod store;
