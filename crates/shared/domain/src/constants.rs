//! Well-known slugs and endpoints.

/// Default priority for notifications and widgets that do not set one.
pub const DEFAULT_PRIORITY: i32 = 10;

/// Minimum number of dependent key metrics before a "connect module" CTA shows.
pub const KEY_METRICS_CTA_THRESHOLD: usize = 3;

// Remote dismissal store, relative to the REST root.
pub const API_ROOT: &str = "/google-site-kit/v1";
pub const DISMISSED_ITEMS_ENDPOINT: &str = "core/user/data/dismissed-items";
pub const DISMISS_ITEM_ENDPOINT: &str = "core/user/data/dismiss-item";

// Module slugs.
pub const MODULE_ANALYTICS_4: &str = "analytics-4";
pub const MODULE_ADS: &str = "ads";
pub const MODULE_ADSENSE: &str = "adsense";
pub const MODULE_SEARCH_CONSOLE: &str = "search-console";

// Widget contexts and areas used by key metrics.
pub const CONTEXT_MAIN_DASHBOARD_KEY_METRICS: &str = "mainDashboardKeyMetrics";
pub const AREA_MAIN_DASHBOARD_KEY_METRICS_PRIMARY: &str = "mainDashboardKeyMetricsPrimary";

// Built-in entities.
pub const NOTIFICATION_SETUP_ERROR: &str = "setup_error";
pub const WIDGET_KEY_METRICS_CONNECT_GA4_CTA: &str = "keyMetricsConnectGA4All";
pub const DISMISSED_KEY_METRICS_CONNECT_GA4_CTA: &str = "key-metrics-connect-ga4-cta-widget";
