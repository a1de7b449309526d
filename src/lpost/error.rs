use thiserror::Error;

/// Input problems caught by [`PostStore::add`](crate::posts::PostStore::add).
///
/// These never change store state; the caller reports them and moves on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("No image supplied")]
    MissingImage,

    #[error("Unsupported image format: {0} (use PNG, JPEG, WebP or GIF)")]
    UnsupportedFormat(String),

    #[error("Image too large: {size} bytes (max {max} bytes)")]
    TooLarge { size: usize, max: usize },
}

#[derive(Error, Debug)]
pub enum GalleryError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Post not found: {0}")]
    PostNotFound(String),

    #[error("Invalid setting: {0}")]
    InvalidSetting(String),

    #[error("Invalid image data: {0}")]
    InvalidDataUrl(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl GalleryError {
    /// True for errors raised by the storage layer rather than by caller input.
    pub fn is_persistence(&self) -> bool {
        matches!(
            self,
            GalleryError::Io(_) | GalleryError::Serialization(_) | GalleryError::Store(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, GalleryError>;
