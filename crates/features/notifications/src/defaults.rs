//! Notifications every dashboard registers.

use crate::error::NotificationError;
use crate::notification::NotificationSpec;
use crate::store::NotificationsStore;
use serde_json::Value;
use skit_domain::constants::NOTIFICATION_SETUP_ERROR;
use skit_domain::{NotificationArea, SiteState, StateSnapshot, ViewContext};
use skit_kernel::registry::Registration;
use skit_kernel::requirement::Requirement;
use skit_kernel::{Component, Props, Renderable};

pub const SETUP_ERROR_TITLE: &str = "Oops! There was a problem during set up. Please try again.";
pub const SETUP_ERROR_CTA_LABEL: &str = "Redo the plugin setup";

/// Banner shown when the site reports a setup error.
#[derive(Debug, Clone, Copy, Default)]
pub struct SetupErrorBanner;

impl Renderable for SetupErrorBanner {
    fn render(&self, props: &Props) -> String {
        let description = props.get("description").and_then(Value::as_str).unwrap_or_default();
        match props.get("ctaLink").and_then(Value::as_str) {
            Some(link) => {
                format!("{SETUP_ERROR_TITLE}\n{description}\n{SETUP_ERROR_CTA_LABEL}: {link}")
            },
            None => format!("{SETUP_ERROR_TITLE}\n{description}"),
        }
    }
}

/// Props for [`SetupErrorBanner`] built from site state.
#[must_use]
pub fn setup_error_props(site: &SiteState) -> Props {
    let mut props = Props::new();
    if let Some(message) = &site.setup_error_message {
        props.insert("description".into(), Value::from(message.as_str()));
    }
    if let Some(url) = &site.setup_error_redo_url {
        props.insert("ctaLink".into(), Value::from(url.as_str()));
    }
    props
}

/// Shown when a setup error message exists, unless a persisted permissions
/// error asked to skip default error notifications.
#[must_use]
pub fn setup_error_requirement() -> Requirement {
    Requirement::from_state(|state: &StateSnapshot| {
        state.site.setup_error_message.as_deref().is_some_and(|m| !m.is_empty())
            && !state.site.skip_default_error_notifications
    })
}

#[must_use]
pub fn setup_error_spec() -> NotificationSpec {
    NotificationSpec::new(Component::new(SetupErrorBanner))
        .area(NotificationArea::BannersAboveNav)
        .view_context(ViewContext::MainDashboard)
        .priority(0)
        .check_requirements(setup_error_requirement())
        .dismissible(false)
}

/// Registers the built-in notifications.
///
/// # Errors
/// Propagates registration errors.
pub fn register_defaults(store: &NotificationsStore) -> Result<Registration, NotificationError> {
    store.register_notification(NOTIFICATION_SETUP_ERROR, setup_error_spec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_renders_message_and_link() {
        let site = SiteState {
            setup_error_message: Some("Token revoked".into()),
            setup_error_redo_url: Some("https://example.com/redo".into()),
            ..SiteState::default()
        };
        let out = SetupErrorBanner.render(&setup_error_props(&site));
        assert!(out.contains("Token revoked"));
        assert!(out.ends_with("Redo the plugin setup: https://example.com/redo"));
    }
}
