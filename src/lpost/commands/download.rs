use crate::commands::helpers::{resolve_all, PostSelector};
use crate::commands::{CmdMessage, CmdResult};
use crate::data_url;
use crate::error::{GalleryError, Result};
use crate::model::ImageFormat;
use crate::posts::PostStore;
use crate::store::StorageBackend;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

const FALLBACK_STEM: &str = "image";

/// Decode each selected post's image and write it into `dir`.
///
/// Files are named after the post title with the extension of the stored
/// format. Existing files are never overwritten; a numeric suffix is added.
pub fn run<B: StorageBackend>(
    store: &PostStore<B>,
    selectors: &[PostSelector],
    dir: &Path,
) -> Result<CmdResult> {
    let targets = resolve_all(store, selectors)?;
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(GalleryError::Io)?;
    }

    let mut result = CmdResult::default();
    for dp in targets {
        let (mime, bytes) = data_url::decode(&dp.post.image)?;
        let ext = ImageFormat::from_mime(&mime)
            .unwrap_or(ImageFormat::Png)
            .extension();

        let path = unique_path(dir, &file_stem(&dp.post.title), ext);
        fs::write(&path, &bytes).map_err(GalleryError::Io)?;
        info!(id = %dp.post.id, path = %path.display(), bytes = bytes.len(), "image downloaded");

        result.add_message(CmdMessage::success(format!(
            "Saved {} to {}",
            dp.post.title,
            path.display()
        )));
        result.paths.push(path);
        result.affected_posts.push(dp.post);
    }

    Ok(result)
}

/// A title made safe to use as a file name.
pub fn file_stem(title: &str) -> String {
    let cleaned: String = title
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    let cleaned = cleaned.trim().trim_matches('.').trim();
    if cleaned.is_empty() {
        FALLBACK_STEM.to_string()
    } else {
        cleaned.to_string()
    }
}

fn unique_path(dir: &Path, stem: &str, ext: &str) -> PathBuf {
    let candidate = dir.join(format!("{}.{}", stem, ext));
    if !candidate.exists() {
        return candidate;
    }
    (1..)
        .map(|n| dir.join(format!("{}-{}.{}", stem, n, ext)))
        .find(|p| !p.exists())
        .unwrap_or(candidate)
}
