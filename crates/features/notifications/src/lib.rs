//! Notifications feature slice.
//!
//! Notifications are registered once with a component, a fixed area and the
//! view contexts they may appear in. At render time the store answers which of
//! them are queued for an area, highest priority first.

pub mod defaults;
mod error;
mod notification;
mod store;

pub use error::{NotificationError, NotificationErrorExt};
pub use notification::{Notification, NotificationSpec};
pub use store::NotificationsStore;
