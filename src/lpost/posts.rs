//! # Post Store
//!
//! Owns the gallery's post collection. The whole collection is loaded once
//! into memory and every mutation rewrites the persisted record in full,
//! so the in-memory copy and the stored blob never diverge.
//!
//! A mutation that fails, whether on validation or on the write itself,
//! leaves both untouched.

use crate::data_url;
use crate::error::{GalleryError, Result, ValidationError};
use crate::model::{ImageFormat, Post, MAX_IMAGE_BYTES, UNTITLED};
use crate::store::{StorageBackend, POSTS_KEY};
use chrono::Utc;
use tracing::{debug, info};

pub struct PostStore<B: StorageBackend> {
    backend: B,
    posts: Vec<Post>,
    last_id_millis: i64,
}

impl<B: StorageBackend> PostStore<B> {
    /// Load the persisted collection. A missing record is an empty gallery;
    /// a corrupt one is an error rather than silently discarded data.
    pub fn open(backend: B) -> Result<Self> {
        let posts = match backend.get(POSTS_KEY)? {
            Some(raw) => serde_json::from_str::<Vec<Post>>(&raw)?,
            None => Vec::new(),
        };
        debug!(count = posts.len(), "posts loaded");

        Ok(Self {
            backend,
            posts,
            last_id_millis: 0,
        })
    }

    /// Snapshot of the collection, newest first.
    pub fn list(&self) -> Vec<Post> {
        self.posts.clone()
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// 1-based display position of the post with `id`.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.posts.iter().position(|p| p.id == id).map(|i| i + 1)
    }

    /// Post at a 1-based display position (1 is the newest).
    pub fn at(&self, index: usize) -> Option<&Post> {
        index.checked_sub(1).and_then(|i| self.posts.get(i))
    }

    pub fn add(
        &mut self,
        title: &str,
        description: &str,
        image: Option<&[u8]>,
        mime_type: &str,
    ) -> Result<Post> {
        let (bytes, format) = validate(image, mime_type)?;

        let title = match title.trim() {
            "" => UNTITLED.to_string(),
            t => t.to_string(),
        };
        let post = Post {
            id: self.next_id(),
            title,
            description: description.trim().to_string(),
            image: data_url::encode(bytes, format),
            created_at: Utc::now(),
        };

        self.posts.insert(0, post);
        if let Err(e) = self.persist() {
            self.posts.remove(0);
            return Err(e);
        }

        let post = self.posts[0].clone();
        info!(id = %post.id, title = %post.title, format = %format, bytes = bytes.len(), "post added");
        Ok(post)
    }

    /// Drop every post. Clearing an empty gallery is a no-op success.
    pub fn clear(&mut self) -> Result<()> {
        self.backend.remove(POSTS_KEY)?;
        let removed = self.posts.len();
        self.posts.clear();
        info!(removed, "posts cleared");
        Ok(())
    }

    /// Remove the persisted collection without loading it, so a record
    /// that no longer parses can still be wiped.
    pub fn discard(backend: &B) -> Result<()> {
        backend.remove(POSTS_KEY)?;
        info!("posts record discarded");
        Ok(())
    }

    fn persist(&self) -> Result<()> {
        let raw = serde_json::to_string(&self.posts).map_err(GalleryError::Serialization)?;
        self.backend.set(POSTS_KEY, &raw)
    }

    /// Base-36 millisecond timestamp, bumped past the previous id and past
    /// anything already in the collection.
    fn next_id(&mut self) -> String {
        let mut millis = Utc::now().timestamp_millis().max(self.last_id_millis + 1);
        let mut id = to_base36(millis);
        while self.posts.iter().any(|p| p.id == id) {
            millis += 1;
            id = to_base36(millis);
        }
        self.last_id_millis = millis;
        id
    }
}

/// Check an incoming image: present, an accepted format, within size.
pub fn validate<'a>(
    image: Option<&'a [u8]>,
    mime_type: &str,
) -> std::result::Result<(&'a [u8], ImageFormat), ValidationError> {
    let bytes = match image {
        Some(b) if !b.is_empty() => b,
        _ => return Err(ValidationError::MissingImage),
    };
    let format = ImageFormat::from_mime(mime_type)
        .ok_or_else(|| ValidationError::UnsupportedFormat(mime_type.to_string()))?;
    if bytes.len() > MAX_IMAGE_BYTES {
        return Err(ValidationError::TooLarge {
            size: bytes.len(),
            max: MAX_IMAGE_BYTES,
        });
    }
    Ok((bytes, format))
}

fn to_base36(mut n: i64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n <= 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}
