use crate::error::NotificationError;
use crate::notification::{Notification, NotificationSpec};
use skit_domain::config::NotificationsConfig;
use skit_domain::{NotificationArea, StateSnapshot, ViewContext};
use skit_kernel::graph::AssignmentGraph;
use skit_kernel::registry::{Registration, Registry};
use skit_kernel::requirement::Catalog;
use skit_kernel::resolver::{DismissalLookup, Resolution, Resolver};
use skit_kernel::EntityId;
use std::sync::Arc;
use strum::IntoEnumIterator;
use tracing::{debug, error};

/// Registered notifications plus their area wiring.
///
/// Every notification area is assigned to every view context, so whether a
/// notification shows in a context is decided by its own view contexts.
#[derive(Debug, Clone)]
pub struct NotificationsStore {
    registry: Registry<Notification>,
    graph: AssignmentGraph,
    default_priority: i32,
}

impl Default for NotificationsStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationsStore {
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&NotificationsConfig::default())
    }

    #[must_use]
    pub fn with_config(config: &NotificationsConfig) -> Self {
        let store = Self {
            registry: Registry::new("notification"),
            graph: AssignmentGraph::with_kind("notification area"),
            default_priority: config.default_priority,
        };
        store.wire_areas();
        store
    }

    fn wire_areas(&self) {
        for area in NotificationArea::iter() {
            for context in ViewContext::iter() {
                if let Err(err) = self.graph.assign_area_to_context(area, context) {
                    error!(%area, %context, error = %err, "Failed to wire notification area");
                }
            }
        }
    }

    /// Validates and registers a notification.
    ///
    /// A second registration under the same id is ignored with a warning and
    /// reported as [`Registration::Duplicate`].
    ///
    /// # Errors
    /// [`NotificationError::Validation`] for invalid input, in which case
    /// nothing is stored.
    pub fn register_notification(
        &self,
        id: &str,
        spec: NotificationSpec,
    ) -> Result<Registration, NotificationError> {
        let notification = Notification::from_spec(spec, self.default_priority)?;
        let area = notification.area;

        let outcome = self.registry.register(id, notification)?;
        if outcome == Registration::Added {
            self.graph.assign_entity_to_area(id, area)?;
            debug!(id, %area, "Notification registered");
        }
        Ok(outcome)
    }

    #[must_use]
    pub fn notification(&self, id: &str) -> Option<Arc<Notification>> {
        self.registry.get(id)
    }

    /// All notifications in registration order.
    #[must_use]
    pub fn notifications(&self) -> Vec<(EntityId, Arc<Notification>)> {
        self.registry.get_all()
    }

    #[must_use]
    pub fn is_registered(&self, id: &str) -> bool {
        self.registry.contains(id)
    }

    /// Notifications queued for `area` in `view_context`, first one on top.
    ///
    /// Pending while the dismissal status of a dismissible candidate is unknown.
    #[must_use]
    pub fn queued_notifications(
        &self,
        area: NotificationArea,
        view_context: ViewContext,
        state: &StateSnapshot,
        dismissals: &dyn DismissalLookup,
        catalog: &dyn Catalog,
    ) -> Resolution {
        Resolver::new(&self.registry, &self.graph)
            .state(state)
            .dismissals(dismissals)
            .catalog(catalog)
            .resolve(area.as_ref(), view_context.as_ref())
    }

    /// Drops every registration. Area wiring is restored.
    pub fn reset(&self) {
        self.registry.clear();
        self.graph.clear();
        self.wire_areas();
        debug!("Notifications store reset");
    }
}
