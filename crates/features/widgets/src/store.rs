use crate::error::WidgetError;
use crate::widget::{Widget, WidgetAreaSpec, WidgetSpec};
use skit_domain::StateSnapshot;
use skit_domain::config::WidgetsConfig;
use skit_kernel::EntityId;
use skit_kernel::graph::{AreaMeta, AssignmentGraph};
use skit_kernel::registry::{Registration, Registry};
use skit_kernel::requirement::Catalog;
use skit_kernel::resolver::{DismissalLookup, Resolution, Resolver};
use std::sync::Arc;
use tracing::debug;

/// Registered widgets and widget areas with their assignments.
#[derive(Debug, Clone)]
pub struct WidgetsStore {
    widgets: Registry<Widget>,
    graph: AssignmentGraph,
    config: WidgetsConfig,
}

impl Default for WidgetsStore {
    fn default() -> Self {
        Self::new()
    }
}

impl WidgetsStore {
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(WidgetsConfig::default())
    }

    #[must_use]
    pub fn with_config(config: WidgetsConfig) -> Self {
        Self {
            widgets: Registry::new("widget"),
            graph: AssignmentGraph::with_kind("widget area"),
            config,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &WidgetsConfig {
        &self.config
    }

    /// # Errors
    /// [`WidgetError::Validation`] for invalid input; nothing is stored.
    pub fn register_widget(&self, slug: &str, spec: WidgetSpec) -> Result<Registration, WidgetError> {
        let widget = Widget::from_spec(spec, self.config.default_priority)?;
        let outcome = self.widgets.register(slug, widget)?;
        if outcome == Registration::Added {
            debug!(slug, "Widget registered");
        }
        Ok(outcome)
    }

    /// # Errors
    /// Fails for a blank slug.
    pub fn register_widget_area(
        &self,
        slug: &str,
        spec: WidgetAreaSpec,
    ) -> Result<Registration, WidgetError> {
        let outcome = self.graph.register_area(slug, spec.into_meta(self.config.default_priority))?;
        Ok(outcome)
    }

    /// Assigns a widget area to each of `contexts`.
    ///
    /// # Errors
    /// Fails for a blank slug. Earlier assignments of the same call stay.
    pub fn assign_widget_area<I, S>(&self, area: &str, contexts: I) -> Result<(), WidgetError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for context in contexts {
            self.graph.assign_area_to_context(area, context)?;
        }
        Ok(())
    }

    /// Assigns a widget to each of `areas`. The widget need not be registered yet.
    ///
    /// # Errors
    /// Fails for a blank slug. Earlier assignments of the same call stay.
    pub fn assign_widget<I, S>(&self, slug: &str, areas: I) -> Result<(), WidgetError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for area in areas {
            self.graph.assign_entity_to_area(slug, area)?;
        }
        Ok(())
    }

    #[must_use]
    pub fn widget(&self, slug: &str) -> Option<Arc<Widget>> {
        self.widgets.get(slug)
    }

    #[must_use]
    pub fn widgets(&self) -> Vec<(EntityId, Arc<Widget>)> {
        self.widgets.get_all()
    }

    #[must_use]
    pub fn is_widget_registered(&self, slug: &str) -> bool {
        self.widgets.contains(slug)
    }

    #[must_use]
    pub fn widget_area(&self, slug: &str) -> Option<Arc<AreaMeta>> {
        self.graph.area(slug)
    }

    #[must_use]
    pub fn is_widget_area_registered(&self, slug: &str) -> bool {
        self.graph.is_area_registered(slug)
    }

    /// Registered areas of `context`, by area priority.
    #[must_use]
    pub fn widget_areas(&self, context: &str) -> Vec<(EntityId, Arc<AreaMeta>)> {
        self.graph.areas_for_context(context)
    }

    /// Registered widgets assigned to `area`, before any eligibility check.
    #[must_use]
    pub fn widgets_in_area(&self, area: &str) -> Vec<(EntityId, Arc<Widget>)> {
        self.graph
            .entities_for_area(area)
            .into_iter()
            .filter_map(|slug| self.widgets.get(&slug).map(|w| (slug, w)))
            .collect()
    }

    /// Widgets that may render in `area` within `context`.
    #[must_use]
    pub fn eligible_widgets(
        &self,
        area: &str,
        context: &str,
        state: &StateSnapshot,
        dismissals: &dyn DismissalLookup,
    ) -> Resolution {
        Resolver::new(&self.widgets, &self.graph)
            .state(state)
            .dismissals(dismissals)
            .catalog(self)
            .resolve(area, context)
    }

    pub fn reset(&self) {
        self.widgets.clear();
        self.graph.clear();
        debug!("Widgets store reset");
    }
}

impl Catalog for WidgetsStore {
    fn entities_for_area_in_context(&self, area: &str, context: &str) -> Vec<EntityId> {
        self.graph.entities_for_area_in_context(area, context)
    }

    fn modules_of(&self, entity: &str) -> Vec<String> {
        self.widgets.get(entity).map(|w| w.modules.clone()).unwrap_or_default()
    }
}
