//! Facade over the dashboard crates.
//! Keep this crate thin: it composes the stores, it does not implement them.
//!
//! ## Usage
//! - Implement [`dismissals::DismissalRemote`] for your HTTP client.
//! - Build a [`Dashboard`] (optionally from a config file via [`Dashboard::load`]).
//! - With the `logging` feature, call [`init_logging`] once at startup.

mod dashboard;
mod error;
#[cfg(feature = "logging")]
mod logging;

pub use dashboard::Dashboard;
pub use error::{SitekitError, SitekitErrorExt};
#[cfg(feature = "logging")]
pub use logging::init_logging;

pub use skit_dismissals as dismissals;
pub use skit_domain as domain;
pub use skit_kernel as kernel;
pub use skit_modules as modules;
pub use skit_notifications as notifications;
pub use skit_widgets as widgets;

/// Build-time enabled features (by Cargo feature).
pub const ENABLED_FEATURES: &[&str] = &[
    #[cfg(feature = "logging")]
    "logging",
];
