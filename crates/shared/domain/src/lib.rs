//! # Domain Models
//!
//! Plain data shared by every dashboard store: the fixed slug vocabularies
//! (view contexts, notification areas, panel states, widget widths), the state
//! snapshot consumed by requirement predicates, and configuration.
//! No I/O and no store logic lives here.

pub mod config;
pub mod constants;
pub mod context;
pub mod panel;
pub mod snapshot;
pub mod widget;

pub use context::{NotificationArea, ViewContext};
pub use panel::PanelState;
pub use snapshot::{ModuleState, SiteState, StateSnapshot, UserState};
pub use widget::{AreaStyle, WidgetWidth};
