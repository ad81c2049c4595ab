//! # Dismissal tracker
//!
//! Remembers which notifications, widgets and prompts the user dismissed.
//!
//! The dismissed-items list lives on the server. The tracker fetches it once,
//! answers `None` until that fetch resolves, and applies dismissals
//! optimistically before persisting them in a detached task. A dismissal can
//! carry an expiry; it is evaluated at read time against the instant the item
//! was dismissed locally.
//!
//! The transport is not part of this crate: implement [`DismissalRemote`] for
//! whatever client talks to the REST endpoints.

mod error;
mod record;
mod remote;
mod tracker;

pub use error::{DismissalError, DismissalErrorExt};
pub use record::{DismissOptions, DismissalRecord};
pub use remote::{DismissItemData, DismissItemRequest, DismissalRemote};
pub use tracker::{DismissHandle, DismissalTracker, FetchState, TrackerStatus};
