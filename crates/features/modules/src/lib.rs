//! Modules feature slice: the settings panel of each module.

mod error;
mod settings_panel;

pub use error::{ModuleError, ModuleErrorExt};
pub use settings_panel::{SettingsPanel, SettingsPanelState};
pub use skit_domain::PanelState;
