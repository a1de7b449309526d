use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::posts::PostStore;
use crate::settings::SettingsStore;
use crate::store::StorageBackend;

/// Wipe every post and every setting.
pub fn run<B: StorageBackend>(
    posts: &mut PostStore<B>,
    settings: &mut SettingsStore<B>,
) -> Result<CmdResult> {
    let removed = posts.len();
    posts.clear()?;
    settings.reset()?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Local data reset ({} post{} removed)",
        removed,
        if removed == 1 { "" } else { "s" }
    )));
    Ok(result)
}

/// Wipe both records straight through the backend, without loading the
/// gallery first. Works when the posts record is unreadable.
pub fn wipe<B: StorageBackend>(backend: &B) -> Result<CmdResult> {
    PostStore::discard(backend)?;
    SettingsStore::new(backend).reset()?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Local data reset"));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Settings, Theme};
    use crate::store::mem::MemBackend;
    use crate::store::{POSTS_KEY, SETTINGS_KEY};

    #[test]
    fn clears_posts_and_settings() {
        let backend = MemBackend::new();
        let mut posts = PostStore::open(&backend).unwrap();
        let mut settings = SettingsStore::new(&backend);
        posts.add("a", "", Some(b"a"), "image/png").unwrap();
        settings.set_theme(Theme::Dark).unwrap();

        let result = run(&mut posts, &mut settings).unwrap();

        assert!(posts.is_empty());
        assert_eq!(settings.get(), Settings::default());
        assert!(!backend.contains(POSTS_KEY));
        assert!(!backend.contains(SETTINGS_KEY));
        assert_eq!(result.messages[0].content, "Local data reset (1 post removed)");
    }

    #[test]
    fn wipe_recovers_from_corrupt_posts() {
        let backend = MemBackend::new();
        backend.set(POSTS_KEY, "{not json").unwrap();
        backend.set(SETTINGS_KEY, r#"{"theme":"dark"}"#).unwrap();

        let result = wipe(&backend).unwrap();

        assert!(!backend.contains(POSTS_KEY));
        assert!(!backend.contains(SETTINGS_KEY));
        assert_eq!(result.messages[0].content, "Local data reset");
        assert!(PostStore::open(&backend).unwrap().is_empty());
        wipe(&backend).unwrap();
    }

    #[test]
    fn reset_twice_is_fine() {
        let backend = MemBackend::new();
        let mut posts = PostStore::open(&backend).unwrap();
        let mut settings = SettingsStore::new(&backend);

        run(&mut posts, &mut settings).unwrap();
        let result = run(&mut posts, &mut settings).unwrap();
        assert_eq!(result.messages[0].content, "Local data reset (0 posts removed)");
    }
}
