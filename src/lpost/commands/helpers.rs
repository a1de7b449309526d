use crate::commands::DisplayPost;
use crate::error::{GalleryError, Result};
use crate::posts::PostStore;
use crate::store::StorageBackend;
use std::fmt;
use std::str::FromStr;

/// How a client points at a post: its listing position or its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostSelector {
    Index(usize),
    Id(String),
}

impl FromStr for PostSelector {
    type Err = GalleryError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(GalleryError::Api("Empty post selector".to_string()));
        }
        // Ids are base-36 timestamps (8+ chars), so short numbers are positions.
        match s.parse::<usize>() {
            Ok(n) if s.len() < 8 => Ok(PostSelector::Index(n)),
            _ => Ok(PostSelector::Id(s.to_string())),
        }
    }
}

impl fmt::Display for PostSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostSelector::Index(n) => write!(f, "{}", n),
            PostSelector::Id(id) => f.write_str(id),
        }
    }
}

pub fn indexed_posts<B: StorageBackend>(store: &PostStore<B>) -> Vec<DisplayPost> {
    store
        .list()
        .into_iter()
        .enumerate()
        .map(|(i, post)| DisplayPost {
            index: i + 1,
            post,
        })
        .collect()
}

pub fn resolve<B: StorageBackend>(
    store: &PostStore<B>,
    selector: &PostSelector,
) -> Result<DisplayPost> {
    let index = match selector {
        PostSelector::Index(n) => Some(*n),
        PostSelector::Id(id) => store.position(id),
    };
    let found = index.and_then(|index| {
        store.at(index).map(|post| DisplayPost {
            index,
            post: post.clone(),
        })
    });
    found.ok_or_else(|| GalleryError::PostNotFound(selector.to_string()))
}

pub fn resolve_all<B: StorageBackend>(
    store: &PostStore<B>,
    selectors: &[PostSelector],
) -> Result<Vec<DisplayPost>> {
    selectors.iter().map(|s| resolve(store, s)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem::MemBackend;

    #[test]
    fn parses_positions_and_ids() {
        assert_eq!("2".parse::<PostSelector>().unwrap(), PostSelector::Index(2));
        assert_eq!(
            "lt3k9x2a".parse::<PostSelector>().unwrap(),
            PostSelector::Id("lt3k9x2a".into())
        );
        assert_eq!(
            "12345678".parse::<PostSelector>().unwrap(),
            PostSelector::Id("12345678".into())
        );
        assert!("  ".parse::<PostSelector>().is_err());
    }

    #[test]
    fn resolves_by_index_and_id() {
        let backend = MemBackend::new();
        let mut store = PostStore::open(&backend).unwrap();
        let older = store.add("older", "", Some(b"a"), "image/png").unwrap();
        store.add("newer", "", Some(b"b"), "image/png").unwrap();

        let by_index = resolve(&store, &PostSelector::Index(2)).unwrap();
        assert_eq!(by_index.post, older);

        let by_id = resolve(&store, &PostSelector::Id(older.id.clone())).unwrap();
        assert_eq!(by_id.index, 2);

        assert!(matches!(
            resolve(&store, &PostSelector::Index(3)),
            Err(GalleryError::PostNotFound(_))
        ));
        assert!(matches!(
            resolve(&store, &PostSelector::Id("missing".into())),
            Err(GalleryError::PostNotFound(_))
        ));
    }
}
