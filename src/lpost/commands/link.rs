use crate::commands::helpers::{resolve, PostSelector};
use crate::commands::CmdResult;
use crate::error::Result;
use crate::posts::PostStore;
use crate::store::StorageBackend;

/// The image's data URL, ready for the clipboard or an `<img src>`.
pub fn run<B: StorageBackend>(store: &PostStore<B>, selector: &PostSelector) -> Result<CmdResult> {
    let dp = resolve(store, selector)?;
    let mut result = CmdResult::default();
    result.links.push(dp.post.image.clone());
    Ok(result.with_affected_posts(vec![dp.post]))
}
