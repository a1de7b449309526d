use crate::commands::helpers::indexed_posts;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::posts::PostStore;
use crate::store::StorageBackend;

pub fn run<B: StorageBackend>(store: &PostStore<B>) -> Result<CmdResult> {
    let posts = indexed_posts(store);
    let mut result = CmdResult::default();
    if posts.is_empty() {
        result.add_message(CmdMessage::info(
            "No posts yet. Add one with `lpost add <image>`.",
        ));
    }
    Ok(result.with_listed_posts(posts))
}
