//! Widgets feature slice.
//!
//! Widgets are registered by slug, assigned to widget areas, and widget areas
//! are assigned to contexts (a dashboard page or a section of one). The store
//! doubles as the [`Catalog`](skit_kernel::requirement::Catalog) that
//! requirement predicates use to count registered widgets.

mod error;
pub mod requirements;
mod store;
mod widget;

pub use error::{WidgetError, WidgetErrorExt};
pub use store::WidgetsStore;
pub use widget::{Widget, WidgetAreaSpec, WidgetSpec};
