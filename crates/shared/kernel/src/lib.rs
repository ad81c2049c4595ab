//! Kernel shared by the dashboard slices.
//!
//! Keep this crate generic: it knows how to store registered entries, wire them
//! to areas and contexts, and decide which of them may render. What a
//! notification or a widget *is* belongs to the feature crates.
//!
//! ## Pieces
//! * [`registry::Registry`]: id → descriptor store, first registration wins.
//! * [`graph::AssignmentGraph`]: entity ↔ area ↔ context edges.
//! * [`resolver::Resolver`]: filters, checks dismissals and requirements, sorts.
//! * [`config::load_config`]: file + `SITEKIT__*` environment layering.
//!
//! ```rust
//! use skit_kernel::graph::{AreaMeta, AssignmentGraph};
//!
//! let graph = AssignmentGraph::new();
//! graph.register_area("mainDashboardKeyMetricsPrimary", AreaMeta::titled("Key metrics")).unwrap();
//! graph.assign_area_to_context("mainDashboardKeyMetricsPrimary", "mainDashboardKeyMetrics").unwrap();
//! graph.assign_entity_to_area("kmAnalyticsNewVisitors", "mainDashboardKeyMetricsPrimary").unwrap();
//!
//! let ids = graph.entities_for_area_in_context(
//!     "mainDashboardKeyMetricsPrimary",
//!     "mainDashboardKeyMetrics",
//! );
//! assert_eq!(ids.len(), 1);
//! ```

pub mod component;
pub mod config;
mod error;
pub mod graph;
pub mod id;
pub mod registry;
pub mod requirement;
pub mod resolver;

pub use component::{Component, Props, Renderable};
pub use error::{RegistryError, RegistryErrorExt};
pub use id::EntityId;
pub use skit_domain as domain;

pub mod prelude {
    pub use crate::component::{Component, Props, Renderable};
    pub use crate::graph::{AreaMeta, AssignmentGraph};
    pub use crate::id::EntityId;
    pub use crate::registry::{Registration, Registry};
    pub use crate::requirement::{Catalog, Requirement, RequirementContext, RequirementError};
    pub use crate::resolver::{Candidate, DismissalLookup, Resolution, Resolver};
    pub use crate::{RegistryError, RegistryErrorExt};
}
