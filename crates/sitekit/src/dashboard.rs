use crate::error::SitekitError;
use skit_dismissals::{DismissHandle, DismissOptions, DismissalError, DismissalRemote, DismissalTracker};
use skit_domain::config::SitekitConfig;
use skit_domain::constants::{
    AREA_MAIN_DASHBOARD_KEY_METRICS_PRIMARY, CONTEXT_MAIN_DASHBOARD_KEY_METRICS,
    DISMISSED_KEY_METRICS_CONNECT_GA4_CTA, WIDGET_KEY_METRICS_CONNECT_GA4_CTA,
};
use skit_domain::{NotificationArea, PanelState, StateSnapshot, ViewContext};
use skit_kernel::config::load_config;
use skit_kernel::registry::Registration;
use skit_kernel::resolver::Resolution;
use skit_kernel::{Component, Props};
use skit_modules::SettingsPanel;
use skit_notifications::{NotificationSpec, NotificationsStore, defaults};
use skit_widgets::requirements::connect_analytics_cta;
use skit_widgets::{WidgetAreaSpec, WidgetSpec, WidgetsStore};
use std::fmt;
use std::path::Path;
use tracing::info;

/// All dashboard stores behind one handle.
///
/// Stores start empty apart from the built-in registrations (the setup error
/// notification, the key metrics area and its "connect Analytics" CTA).
/// [`Dashboard::reset`] brings them back to that state, e.g. on logout.
pub struct Dashboard<R> {
    config: SitekitConfig,
    notifications: NotificationsStore,
    widgets: WidgetsStore,
    dismissals: DismissalTracker<R>,
    settings_panel: SettingsPanel,
}

impl<R> fmt::Debug for Dashboard<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dashboard")
            .field("notifications", &self.notifications)
            .field("widgets", &self.widgets)
            .field("dismissals", &self.dismissals)
            .field("settings_panel", &self.settings_panel)
            .finish_non_exhaustive()
    }
}

impl<R: DismissalRemote> Dashboard<R> {
    /// Dashboard with default configuration.
    ///
    /// # Errors
    /// Fails only if a built-in registration is rejected.
    pub fn new(remote: R) -> Result<Self, SitekitError> {
        Self::from_config(SitekitConfig::default(), remote)
    }

    /// Loads configuration with [`load_config`] and builds the dashboard.
    ///
    /// # Errors
    /// [`SitekitError::Config`] if the file is missing or malformed.
    pub fn load(path: Option<impl AsRef<Path>>, remote: R) -> Result<Self, SitekitError> {
        let config: SitekitConfig = load_config(path)?;
        Self::from_config(config, remote)
    }

    /// # Errors
    /// Fails only if a built-in registration is rejected.
    pub fn from_config(config: SitekitConfig, remote: R) -> Result<Self, SitekitError> {
        let dashboard = Self {
            notifications: NotificationsStore::with_config(&config.notifications),
            widgets: WidgetsStore::with_config(config.widgets.clone()),
            dismissals: DismissalTracker::with_config(remote, &config.dismissals),
            settings_panel: SettingsPanel::new(),
            config,
        };
        dashboard.register_defaults()?;
        info!("Dashboard stores initialized");
        Ok(dashboard)
    }

    fn register_defaults(&self) -> Result<(), SitekitError> {
        defaults::register_defaults(&self.notifications)?;

        self.widgets.register_widget_area(
            AREA_MAIN_DASHBOARD_KEY_METRICS_PRIMARY,
            WidgetAreaSpec::titled("Key metrics"),
        )?;
        self.widgets.assign_widget_area(
            AREA_MAIN_DASHBOARD_KEY_METRICS_PRIMARY,
            [CONTEXT_MAIN_DASHBOARD_KEY_METRICS],
        )?;

        let threshold = self.config.widgets.key_metrics_cta_threshold;
        let cta = WidgetSpec::new(Component::new(|_: &Props| {
            String::from("Connect Google Analytics to see more key metrics")
        }))
        .width("full")
        .dismissible_as(DISMISSED_KEY_METRICS_CONNECT_GA4_CTA)
        .requirement(connect_analytics_cta(threshold));
        self.widgets.register_widget(WIDGET_KEY_METRICS_CONNECT_GA4_CTA, cta)?;
        self.widgets
            .assign_widget(WIDGET_KEY_METRICS_CONNECT_GA4_CTA, [AREA_MAIN_DASHBOARD_KEY_METRICS_PRIMARY])?;
        Ok(())
    }

    /// Empties every store and restores the built-in registrations.
    ///
    /// # Errors
    /// Fails only if a built-in registration is rejected.
    pub fn reset(&self) -> Result<(), SitekitError> {
        self.notifications.reset();
        self.widgets.reset();
        self.dismissals.reset();
        self.settings_panel.reset();
        self.register_defaults()?;
        info!("Dashboard stores reset");
        Ok(())
    }

    #[must_use]
    pub const fn config(&self) -> &SitekitConfig {
        &self.config
    }

    #[must_use]
    pub const fn notifications(&self) -> &NotificationsStore {
        &self.notifications
    }

    #[must_use]
    pub const fn widgets(&self) -> &WidgetsStore {
        &self.widgets
    }

    #[must_use]
    pub const fn dismissals(&self) -> &DismissalTracker<R> {
        &self.dismissals
    }

    #[must_use]
    pub const fn settings_panel(&self) -> &SettingsPanel {
        &self.settings_panel
    }

    /// # Errors
    /// See [`NotificationsStore::register_notification`].
    pub fn register_notification(
        &self,
        id: &str,
        spec: NotificationSpec,
    ) -> Result<Registration, SitekitError> {
        Ok(self.notifications.register_notification(id, spec)?)
    }

    /// Dismisses a notification. The returned handle resolves with the remote
    /// outcome; the notification is hidden immediately either way.
    ///
    /// # Errors
    /// Validation errors for a blank id.
    pub fn dismiss_notification(
        &self,
        id: &str,
        options: DismissOptions,
    ) -> Result<DismissHandle, SitekitError> {
        if id.trim().is_empty() {
            return Err(DismissalError::Validation {
                message: "A notification id is required to dismiss a notification.".into(),
                context: None,
            }
            .into());
        }
        Ok(self.dismissals.dismiss(id, options)?)
    }

    /// `None` until the dismissed items are known.
    pub fn is_notification_dismissed(&self, id: &str) -> Option<bool> {
        self.dismissals.is_dismissed(id)
    }

    /// Notifications queued for `area` in `view_context`.
    pub fn queued_notifications(
        &self,
        area: NotificationArea,
        view_context: ViewContext,
        state: &StateSnapshot,
    ) -> Resolution {
        self.notifications.queued_notifications(
            area,
            view_context,
            state,
            &self.dismissals,
            &self.widgets,
        )
    }

    /// Widgets that may render in `area` within `context`.
    pub fn widgets_for_area(&self, area: &str, context: &str, state: &StateSnapshot) -> Resolution {
        self.widgets.eligible_widgets(area, context, state, &self.dismissals)
    }

    /// # Errors
    /// Validation errors for a blank slug or an unknown value.
    pub fn set_module_settings_panel_state(&self, slug: &str, value: &str) -> Result<(), SitekitError> {
        Ok(self.settings_panel.set_state(slug, value)?)
    }

    /// # Errors
    /// Validation error for a blank slug.
    pub fn get_module_settings_panel_state(&self, slug: &str) -> Result<PanelState, SitekitError> {
        Ok(self.settings_panel.get_state(slug)?)
    }
}
