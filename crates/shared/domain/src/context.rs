use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr, VariantNames};

/// Dashboard surfaces a notification can be shown on.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
    VariantNames,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum ViewContext {
    MainDashboard,
    MainDashboardViewOnly,
    EntityDashboard,
    EntityDashboardViewOnly,
    Settings,
    Splash,
    AdminBar,
    AdminBarViewOnly,
    WpDashboard,
    WpDashboardViewOnly,
    DashboardSharing,
    ModuleSetup,
    UserInput,
    Activation,
    MetricSelection,
    KeyMetricsSetup,
}

impl ViewContext {
    /// View-only variants are shown to users that cannot change settings.
    #[must_use]
    pub const fn is_view_only(self) -> bool {
        matches!(
            self,
            Self::MainDashboardViewOnly
                | Self::EntityDashboardViewOnly
                | Self::AdminBarViewOnly
                | Self::WpDashboardViewOnly
        )
    }
}

/// Fixed notification areas. Slugs match the markup hooks the UI renders into.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
    VariantNames,
)]
pub enum NotificationArea {
    #[serde(rename = "notification-area-banners-above-nav")]
    #[strum(serialize = "notification-area-banners-above-nav")]
    BannersAboveNav,
    #[serde(rename = "notification-area-banners-below-nav")]
    #[strum(serialize = "notification-area-banners-below-nav")]
    BannersBelowNav,
    #[serde(rename = "notification-area-header")]
    #[strum(serialize = "notification-area-header")]
    Header,
    #[serde(rename = "notification-area-overlays")]
    #[strum(serialize = "notification-area-overlays")]
    Overlays,
}
