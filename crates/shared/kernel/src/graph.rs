//! Area / context assignment graph.
//!
//! Two kinds of edges: an area is assigned to one or more contexts, and an
//! entity (notification, widget) is assigned to one or more areas. An entity is
//! a candidate for `(area, context)` when it is assigned to `area` and `area` is
//! assigned to `context`. Edges are sets; repeating an assignment is a no-op.

use crate::error::RegistryError;
use crate::id::EntityId;
use crate::registry::{Registration, Registry};
use fxhash::FxHashMap;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use skit_domain::AreaStyle;
use skit_domain::constants::DEFAULT_PRIORITY;
use std::sync::Arc;
use tracing::trace;

/// Metadata stored for a registered area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AreaMeta {
    pub title: String,
    pub subtitle: Option<String>,
    pub style: AreaStyle,
    pub priority: i32,
}

impl Default for AreaMeta {
    fn default() -> Self {
        Self {
            title: String::new(),
            subtitle: None,
            style: AreaStyle::default(),
            priority: DEFAULT_PRIORITY,
        }
    }
}

impl AreaMeta {
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self { title: title.into(), ..Self::default() }
    }

    #[must_use]
    pub const fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    #[must_use]
    pub const fn with_style(mut self, style: AreaStyle) -> Self {
        self.style = style;
        self
    }
}

#[derive(Debug, Default)]
struct Edges {
    // context -> areas, in assignment order
    context_areas: FxHashMap<EntityId, Vec<EntityId>>,
    // area -> entities, in assignment order
    area_entities: FxHashMap<EntityId, Vec<EntityId>>,
}

fn push_unique(list: &mut Vec<EntityId>, id: EntityId) -> bool {
    if list.contains(&id) {
        return false;
    }
    list.push(id);
    true
}

/// Shared handle to the assignment graph. Cheap to clone.
#[derive(Debug, Clone)]
pub struct AssignmentGraph {
    areas: Registry<AreaMeta>,
    edges: Arc<RwLock<Edges>>,
}

impl Default for AssignmentGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl AssignmentGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::with_kind("area")
    }

    /// Uses `kind` when logging duplicate area registrations.
    #[must_use]
    pub fn with_kind(kind: &'static str) -> Self {
        Self { areas: Registry::new(kind), edges: Arc::new(RwLock::new(Edges::default())) }
    }

    /// Registers area metadata. A second registration of the same slug is
    /// ignored with a warning.
    ///
    /// # Errors
    /// Returns [`RegistryError::Validation`] for a blank slug.
    pub fn register_area(
        &self,
        slug: impl AsRef<str>,
        meta: AreaMeta,
    ) -> Result<Registration, RegistryError> {
        self.areas.register(slug, meta)
    }

    /// # Errors
    /// Returns [`RegistryError::Validation`] if either slug is blank.
    pub fn assign_area_to_context(
        &self,
        area: impl AsRef<str>,
        context: impl AsRef<str>,
    ) -> Result<(), RegistryError> {
        let area = EntityId::new(area)?;
        let context = EntityId::new(context)?;
        let mut edges = self.edges.write();
        if push_unique(edges.context_areas.entry(context.clone()).or_default(), area.clone()) {
            trace!(area = %area, context = %context, "Area assigned to context");
        }
        Ok(())
    }

    /// # Errors
    /// Returns [`RegistryError::Validation`] if either slug is blank.
    pub fn assign_entity_to_area(
        &self,
        entity: impl AsRef<str>,
        area: impl AsRef<str>,
    ) -> Result<(), RegistryError> {
        let entity = EntityId::new(entity)?;
        let area = EntityId::new(area)?;
        let mut edges = self.edges.write();
        if push_unique(edges.area_entities.entry(area.clone()).or_default(), entity.clone()) {
            trace!(entity = %entity, area = %area, "Entity assigned to area");
        }
        Ok(())
    }

    /// Entities assigned to `area`, provided `area` is assigned to `context`.
    /// Assignment order is preserved.
    #[must_use]
    pub fn entities_for_area_in_context(&self, area: &str, context: &str) -> Vec<EntityId> {
        let edges = self.edges.read();
        let area_in_context =
            edges.context_areas.get(context).is_some_and(|areas| areas.iter().any(|a| a == area));
        if !area_in_context {
            return Vec::new();
        }
        edges.area_entities.get(area).cloned().unwrap_or_default()
    }

    /// Entities assigned to `area` regardless of context.
    #[must_use]
    pub fn entities_for_area(&self, area: &str) -> Vec<EntityId> {
        self.edges.read().area_entities.get(area).cloned().unwrap_or_default()
    }

    /// Registered areas assigned to `context`, sorted by priority. Ties keep
    /// assignment order.
    #[must_use]
    pub fn areas_for_context(&self, context: &str) -> Vec<(EntityId, Arc<AreaMeta>)> {
        let assigned = self.edges.read().context_areas.get(context).cloned().unwrap_or_default();
        let mut areas: Vec<_> = assigned
            .into_iter()
            .filter_map(|slug| self.areas.get(&slug).map(|meta| (slug, meta)))
            .collect();
        areas.sort_by_key(|(_, meta)| meta.priority);
        areas
    }

    /// Areas (registered or not) that `entity` is assigned to.
    #[must_use]
    pub fn areas_of_entity(&self, entity: &str) -> Vec<EntityId> {
        let edges = self.edges.read();
        let mut areas: Vec<_> = edges
            .area_entities
            .iter()
            .filter(|(_, entities)| entities.iter().any(|e| e == entity))
            .map(|(area, _)| area.clone())
            .collect();
        areas.sort();
        areas
    }

    #[must_use]
    pub fn area(&self, slug: &str) -> Option<Arc<AreaMeta>> {
        self.areas.get(slug)
    }

    #[must_use]
    pub fn is_area_registered(&self, slug: &str) -> bool {
        self.areas.contains(slug)
    }

    /// Drops every area and edge.
    pub fn clear(&self) {
        self.areas.clear();
        let mut edges = self.edges.write();
        edges.context_areas.clear();
        edges.area_entities.clear();
    }
}
