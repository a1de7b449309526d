use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Theme;
use crate::settings::SettingsStore;
use crate::store::StorageBackend;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsAction {
    Show,
    SetTheme(Theme),
    SetAnimations(bool),
}

pub fn run<B: StorageBackend>(
    store: &mut SettingsStore<B>,
    action: SettingsAction,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match action {
        SettingsAction::Show => {}
        SettingsAction::SetTheme(theme) => {
            store.set_theme(theme)?;
            result.add_message(CmdMessage::success(format!("Theme set to {}", theme)));
        }
        SettingsAction::SetAnimations(enabled) => {
            store.set_animations(enabled)?;
            let state = if enabled { "enabled" } else { "disabled" };
            result.add_message(CmdMessage::success(format!("Animations {}", state)));
        }
    }

    Ok(result.with_settings(store.get()))
}
