use crate::commands::helpers::{resolve_all, PostSelector};
use crate::commands::CmdResult;
use crate::error::Result;
use crate::posts::PostStore;
use crate::store::StorageBackend;

pub fn run<B: StorageBackend>(
    store: &PostStore<B>,
    selectors: &[PostSelector],
) -> Result<CmdResult> {
    let posts = resolve_all(store, selectors)?;
    Ok(CmdResult::default().with_listed_posts(posts))
}
