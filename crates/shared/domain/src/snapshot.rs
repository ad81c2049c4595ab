//! Externally supplied state the requirement predicates read.
//!
//! The host fills a [`StateSnapshot`] from whatever async data it has loaded
//! (module list, user data, site data) and hands it to the resolver. Fields that
//! are genuinely unknown until a request completes are `Option`s.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Connection status of a registered module.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleState {
    pub active: bool,
    pub connected: bool,
}

/// What is known about the current user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserState {
    pub authenticated: bool,
    /// `None` until the user-input settings have been fetched.
    pub user_input_completed: Option<bool>,
    pub capabilities: BTreeSet<String>,
    /// Key metric widget slugs the user picked; `None` means the default selection.
    pub key_metrics: Option<Vec<String>>,
}

impl UserState {
    #[must_use]
    pub fn has_capability(&self, capability: &str) -> bool {
        self.capabilities.contains(capability)
    }

    /// Whether `widget` counts as part of the user's key metrics.
    #[must_use]
    pub fn selects_key_metric(&self, widget: &str) -> bool {
        self.key_metrics.as_ref().is_none_or(|selected| selected.iter().any(|w| w == widget))
    }
}

/// Site-level flags relevant to notifications.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteState {
    pub setup_error_message: Option<String>,
    pub setup_error_redo_url: Option<String>,
    /// Set by a temporarily persisted permissions error to suppress default error banners.
    pub skip_default_error_notifications: bool,
}

/// Everything a requirement predicate may look at.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StateSnapshot {
    pub modules: BTreeMap<String, ModuleState>,
    pub user: UserState,
    pub site: SiteState,
}

impl StateSnapshot {
    #[must_use]
    pub fn with_module(mut self, slug: impl Into<String>, active: bool, connected: bool) -> Self {
        self.modules.insert(slug.into(), ModuleState { active, connected });
        self
    }

    #[must_use]
    pub fn with_user(mut self, user: UserState) -> Self {
        self.user = user;
        self
    }

    #[must_use]
    pub fn with_site(mut self, site: SiteState) -> Self {
        self.site = site;
        self
    }

    /// `None` when the module is not registered on this site.
    #[must_use]
    pub fn module(&self, slug: &str) -> Option<&ModuleState> {
        self.modules.get(slug)
    }

    #[must_use]
    pub fn is_module_connected(&self, slug: &str) -> bool {
        self.module(slug).is_some_and(|m| m.active && m.connected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_lookup_distinguishes_unregistered() {
        let snapshot = StateSnapshot::default().with_module("analytics-4", true, false);
        assert!(snapshot.module("analytics-4").is_some());
        assert!(snapshot.module("adsense").is_none());
        assert!(!snapshot.is_module_connected("analytics-4"));
    }

    #[test]
    fn key_metric_selection_defaults_to_everything() {
        let mut user = UserState::default();
        assert!(user.selects_key_metric("kmAnalyticsNewVisitors"));

        user.key_metrics = Some(vec!["kmAnalyticsLoyalVisitors".to_owned()]);
        assert!(user.selects_key_metric("kmAnalyticsLoyalVisitors"));
        assert!(!user.selects_key_metric("kmAnalyticsNewVisitors"));
    }

    #[test]
    fn deserializes_camel_case_payloads() {
        let raw = serde_json::json!({
            "modules": { "analytics-4": { "active": true, "connected": true } },
            "user": { "authenticated": true, "userInputCompleted": true, "keyMetrics": ["a"] },
            "site": { "setupErrorMessage": "Oops" }
        });
        let snapshot: StateSnapshot = serde_json::from_value(raw).unwrap();
        assert!(snapshot.is_module_connected("analytics-4"));
        assert_eq!(snapshot.user.user_input_completed, Some(true));
        assert_eq!(snapshot.site.setup_error_message.as_deref(), Some("Oops"));
        assert!(!snapshot.site.skip_default_error_notifications);
    }
}
