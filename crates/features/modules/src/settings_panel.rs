use crate::error::ModuleError;
use parking_lot::RwLock;
use serde::Serialize;
use skit_domain::PanelState;
use std::str::FromStr;
use std::sync::Arc;
use strum::VariantNames;
use tracing::debug;

/// Raw panel state: which module is open, and whether it is being edited.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPanelState {
    pub current_module: Option<String>,
    pub is_editing: bool,
}

/// Settings panel controller shared by every module.
///
/// At most one module is open at a time. Opening another module implicitly
/// closes the previous one, and closing any module closes the panel.
#[derive(Debug, Clone, Default)]
pub struct SettingsPanel {
    state: Arc<RwLock<SettingsPanelState>>,
}

impl SettingsPanel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the panel state of `slug` from its string form (`closed`, `edit`,
    /// `view`).
    ///
    /// # Errors
    /// [`ModuleError::Validation`] for an empty slug or an unknown value. The
    /// state is left untouched.
    pub fn set_state(&self, slug: &str, value: &str) -> Result<(), ModuleError> {
        require_slug(slug)?;
        let value = PanelState::from_str(value).map_err(|_| {
            ModuleError::validation(format!("value should be one of {}", PanelState::VARIANTS.join(",")))
        })?;
        self.apply(slug, value);
        Ok(())
    }

    /// Typed variant of [`set_state`](Self::set_state).
    ///
    /// # Errors
    /// [`ModuleError::Validation`] for an empty slug.
    pub fn set_panel_state(&self, slug: &str, value: PanelState) -> Result<(), ModuleError> {
        require_slug(slug)?;
        self.apply(slug, value);
        Ok(())
    }

    /// `edit` or `view` if `slug` is the open module, otherwise `closed`.
    ///
    /// # Errors
    /// [`ModuleError::Validation`] for an empty slug.
    pub fn get_state(&self, slug: &str) -> Result<PanelState, ModuleError> {
        require_slug(slug)?;
        let state = self.state.read();
        if state.current_module.as_deref() != Some(slug) {
            return Ok(PanelState::Closed);
        }
        Ok(if state.is_editing { PanelState::Edit } else { PanelState::View })
    }

    #[must_use]
    pub fn snapshot(&self) -> SettingsPanelState {
        self.state.read().clone()
    }

    pub fn reset(&self) {
        *self.state.write() = SettingsPanelState::default();
    }

    fn apply(&self, slug: &str, value: PanelState) {
        let mut state = self.state.write();
        state.current_module = (value != PanelState::Closed).then(|| slug.to_owned());
        state.is_editing = value == PanelState::Edit;
        debug!(slug, %value, "Settings panel state changed");
    }
}

fn require_slug(slug: &str) -> Result<(), ModuleError> {
    if slug.is_empty() {
        return Err(ModuleError::validation("slug is required."));
    }
    Ok(())
}
