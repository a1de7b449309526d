use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::posts::PostStore;
use crate::store::StorageBackend;

/// A post as submitted by a client, image already read into memory.
#[derive(Debug, Clone, Default)]
pub struct NewPost {
    pub title: String,
    pub description: String,
    pub image: Option<Vec<u8>>,
    pub mime_type: String,
}

pub fn run<B: StorageBackend>(store: &mut PostStore<B>, new_post: NewPost) -> Result<CmdResult> {
    let post = store.add(
        &new_post.title,
        &new_post.description,
        new_post.image.as_deref(),
        &new_post.mime_type,
    )?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Post added: {}", post.title)));
    Ok(result.with_affected_posts(vec![post]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{GalleryError, ValidationError};
    use crate::store::mem::MemBackend;

    #[test]
    fn reports_added_post() {
        let backend = MemBackend::new();
        let mut store = PostStore::open(&backend).unwrap();

        let result = run(
            &mut store,
            NewPost {
                title: "".into(),
                description: "no title".into(),
                image: Some(vec![1, 2, 3]),
                mime_type: "image/gif".into(),
            },
        )
        .unwrap();

        assert_eq!(result.affected_posts.len(), 1);
        assert_eq!(result.affected_posts[0].title, "Untitled");
        assert_eq!(result.messages[0].content, "Post added: Untitled");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn validation_errors_pass_through() {
        let backend = MemBackend::new();
        let mut store = PostStore::open(&backend).unwrap();

        let err = run(&mut store, NewPost::default()).unwrap_err();
        assert!(matches!(
            err,
            GalleryError::Validation(ValidationError::MissingImage)
        ));
        assert!(store.is_empty());
    }
}
