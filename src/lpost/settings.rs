//! # Settings Store
//!
//! A single small record of user preferences. Reads are forgiving: any
//! field that is missing or unreadable falls back to its default, and
//! [`SettingsStore::get`] never fails. Writes are read-modify-write over
//! the raw JSON object so fields this version does not know about survive.

use crate::error::Result;
use crate::model::{Settings, Theme};
use crate::store::{StorageBackend, SETTINGS_KEY};
use serde_json::{Map, Value};
use tracing::{info, warn};

const THEME_FIELD: &str = "theme";
const ANIMATIONS_FIELD: &str = "anim";

pub struct SettingsStore<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> SettingsStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn get(&self) -> Settings {
        let record = match self.backend.get(SETTINGS_KEY) {
            Ok(raw) => parse_record(raw.as_deref()),
            Err(e) => {
                warn!(error = %e, "settings unreadable, using defaults");
                Map::new()
            }
        };
        settings_from(&record)
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<()> {
        self.upsert(THEME_FIELD, Value::String(theme.as_str().to_string()))?;
        info!(%theme, "theme updated");
        Ok(())
    }

    pub fn set_animations(&mut self, enabled: bool) -> Result<()> {
        self.upsert(ANIMATIONS_FIELD, Value::Bool(enabled))?;
        info!(enabled, "animations updated");
        Ok(())
    }

    /// Forget all settings. Resetting an absent record is a no-op success.
    pub fn reset(&mut self) -> Result<()> {
        self.backend.remove(SETTINGS_KEY)?;
        info!("settings reset");
        Ok(())
    }

    fn upsert(&mut self, field: &str, value: Value) -> Result<()> {
        // A failed read must not turn into an overwrite that drops fields.
        let raw = self.backend.get(SETTINGS_KEY)?;
        let mut record = parse_record(raw.as_deref());
        record.insert(field.to_string(), value);
        let raw = serde_json::to_string(&Value::Object(record))?;
        self.backend.set(SETTINGS_KEY, &raw)
    }
}

fn parse_record(raw: Option<&str>) -> Map<String, Value> {
    let Some(raw) = raw else {
        return Map::new();
    };
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => map,
        Ok(_) => {
            warn!("settings record is not an object, using defaults");
            Map::new()
        }
        Err(e) => {
            warn!(error = %e, "settings record is corrupt, using defaults");
            Map::new()
        }
    }
}

fn settings_from(record: &Map<String, Value>) -> Settings {
    let theme = match record.get(THEME_FIELD).and_then(Value::as_str) {
        Some(s) => s.parse::<Theme>().unwrap_or_else(|e| {
            warn!(error = %e, "ignoring stored theme");
            Theme::default()
        }),
        None => Theme::default(),
    };
    // Only an explicit `false` turns animations off.
    let animations_enabled = record.get(ANIMATIONS_FIELD) != Some(&Value::Bool(false));

    Settings {
        theme,
        animations_enabled,
    }
}
