use crate::error::{GalleryError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Client configuration, stored in `<data dir>/config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GalleryConfig {
    /// Where `download` writes images when no directory is given.
    /// Unset means the current directory.
    #[serde(default)]
    pub download_dir: Option<PathBuf>,

    /// Show "5 minutes ago" style times in listings instead of timestamps.
    #[serde(default = "default_relative_times")]
    pub relative_times: bool,
}

fn default_relative_times() -> bool {
    true
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            download_dir: None,
            relative_times: default_relative_times(),
        }
    }
}

impl GalleryConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(GalleryError::Io)?;
        let config: GalleryConfig =
            serde_json::from_str(&content).map_err(GalleryError::Serialization)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(GalleryError::Io)?;
        }

        let content = serde_json::to_string_pretty(self).map_err(GalleryError::Serialization)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content).map_err(GalleryError::Io)?;
        Ok(())
    }

    /// Directory downloads land in, relative paths resolved against `cwd`.
    pub fn download_dir_or(&self, cwd: &Path) -> PathBuf {
        match &self.download_dir {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => cwd.join(dir),
            None => cwd.to_path_buf(),
        }
    }

    /// Apply a `key = value` pair from the command line.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "download-dir" => {
                self.download_dir = match value.trim() {
                    "" => None,
                    v => Some(PathBuf::from(v)),
                };
            }
            "relative-times" => {
                self.relative_times = parse_toggle(value)?;
            }
            other => {
                return Err(GalleryError::InvalidSetting(format!(
                    "unknown config key '{}'",
                    other
                )))
            }
        }
        Ok(())
    }
}

/// Accepts on/off, true/false, yes/no and 1/0.
pub fn parse_toggle(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        other => Err(GalleryError::InvalidSetting(format!(
            "expected on or off, got '{}'",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = GalleryConfig::default();
        assert_eq!(config.download_dir, None);
        assert!(config.relative_times);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempdir().unwrap();
        let config = GalleryConfig::load(dir.path().join("absent")).unwrap();
        assert_eq!(config, GalleryConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let mut config = GalleryConfig::default();
        config.set("download-dir", "/tmp/pictures").unwrap();
        config.set("relative-times", "off").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = GalleryConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.download_dir, Some(PathBuf::from("/tmp/pictures")));
        assert!(!loaded.relative_times);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{}").unwrap();
        assert_eq!(
            GalleryConfig::load(dir.path()).unwrap(),
            GalleryConfig::default()
        );
    }

    #[test]
    fn test_download_dir_resolution() {
        let cwd = Path::new("/home/me");
        let mut config = GalleryConfig::default();
        assert_eq!(config.download_dir_or(cwd), PathBuf::from("/home/me"));

        config.download_dir = Some(PathBuf::from("pics"));
        assert_eq!(config.download_dir_or(cwd), PathBuf::from("/home/me/pics"));

        config.download_dir = Some(PathBuf::from("/srv/pics"));
        assert_eq!(config.download_dir_or(cwd), PathBuf::from("/srv/pics"));
    }

    #[test]
    fn test_unknown_key() {
        let mut config = GalleryConfig::default();
        assert!(matches!(
            config.set("file-ext", ".md"),
            Err(GalleryError::InvalidSetting(_))
        ));
    }

    #[test]
    fn test_parse_toggle() {
        assert!(parse_toggle("ON").unwrap());
        assert!(!parse_toggle("no").unwrap());
        assert!(parse_toggle("maybe").is_err());
    }
}
