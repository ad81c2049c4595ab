use crate::constants::{
    API_ROOT, DEFAULT_PRIORITY, DISMISS_ITEM_ENDPOINT, DISMISSED_ITEMS_ENDPOINT,
    KEY_METRICS_CTA_THRESHOLD,
};
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level dashboard configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SitekitConfigInner {
    pub logging: LoggingConfig,
    pub notifications: NotificationsConfig,
    pub widgets: WidgetsConfig,
    pub dismissals: DismissalsConfig,
}

/// Arc-wrapped config, cheap to clone into every store.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct SitekitConfig {
    #[serde(flatten, default)]
    inner: Arc<SitekitConfigInner>,
}

impl Deref for SitekitConfig {
    type Target = SitekitConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for SitekitConfig {
    fn deref_mut(&mut self) -> &mut SitekitConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Subscriber settings for hosts that let the dashboard install logging.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub name: String,
    pub level: String,
    pub env_filter: Option<String>,
    pub console: bool,
    pub directory: Option<PathBuf>,
    pub json: bool,
    pub max_files: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NotificationsConfig {
    pub default_priority: i32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WidgetsConfig {
    pub default_priority: i32,
    pub key_metrics_cta_threshold: usize,
}

/// Where the remote dismissal store lives and when it is first read.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DismissalsConfig {
    pub api_root: String,
    /// Start the dismissed-items fetch on the first `is_dismissed` read.
    pub fetch_on_first_read: bool,
}

impl DismissalsConfig {
    #[must_use]
    pub fn dismissed_items_path(&self) -> String {
        format!("{}/{DISMISSED_ITEMS_ENDPOINT}", self.api_root.trim_end_matches('/'))
    }

    #[must_use]
    pub fn dismiss_item_path(&self) -> String {
        format!("{}/{DISMISS_ITEM_ENDPOINT}", self.api_root.trim_end_matches('/'))
    }
}

// --- Default ---

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            name: "sitekit".to_owned(),
            level: "info".to_owned(),
            env_filter: None,
            console: true,
            directory: None,
            json: false,
            max_files: 7,
        }
    }
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self { default_priority: DEFAULT_PRIORITY }
    }
}

impl Default for WidgetsConfig {
    fn default() -> Self {
        Self {
            default_priority: DEFAULT_PRIORITY,
            key_metrics_cta_threshold: KEY_METRICS_CTA_THRESHOLD,
        }
    }
}

impl Default for DismissalsConfig {
    fn default() -> Self {
        Self { api_root: API_ROOT.to_owned(), fetch_on_first_read: true }
    }
}
