//! Eligibility resolution.
//!
//! For one `(area, context)` pair the resolver walks the candidates from the
//! assignment graph and keeps those that
//! 1. are shown in the context,
//! 2. are not dismissed (if dismissible),
//! 3. pass their requirement.
//!
//! Survivors are ordered by ascending priority, ties broken by registration
//! order. While any dismissible candidate's dismissal status is still unknown
//! the answer is [`Resolution::Pending`], so callers never flash content that
//! turns out to be dismissed.

use crate::graph::AssignmentGraph;
use crate::id::EntityId;
use crate::registry::Registry;
use crate::requirement::{Catalog, EmptyCatalog, Requirement, RequirementContext};
use skit_domain::StateSnapshot;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// What the resolver needs to know about a registered descriptor.
pub trait Candidate {
    fn priority(&self) -> i32;

    fn requirement(&self) -> Option<&Requirement>;

    fn is_dismissible(&self) -> bool;

    /// Key looked up in the dismissal store. Defaults to the entity id.
    fn dismissal_key<'a>(&'a self, id: &'a str) -> &'a str {
        id
    }

    /// Whether the entity may be shown in `context` at all.
    fn shown_in(&self, _context: &str) -> bool {
        true
    }
}

/// Source of dismissal status.
pub trait DismissalLookup {
    /// `None` while the status is not known yet.
    fn is_dismissed(&self, key: &str) -> Option<bool>;
}

impl<F> DismissalLookup for F
where
    F: Fn(&str) -> Option<bool>,
{
    fn is_dismissed(&self, key: &str) -> Option<bool> {
        self(key)
    }
}

/// Lookup for hosts without a dismissal store: nothing is dismissed.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDismissals;

impl DismissalLookup for NoDismissals {
    fn is_dismissed(&self, _key: &str) -> Option<bool> {
        Some(false)
    }
}

/// Result of a resolution pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Dismissal status of these entities is still loading.
    Pending { waiting_on: Vec<EntityId> },
    /// Eligible ids in display order.
    Ready(Vec<EntityId>),
}

impl Resolution {
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending { .. })
    }

    /// Eligible ids, `None` while pending.
    #[must_use]
    pub fn ids(&self) -> Option<&[EntityId]> {
        match self {
            Self::Ready(ids) => Some(ids),
            Self::Pending { .. } => None,
        }
    }

    /// Highest-priority eligible id.
    #[must_use]
    pub fn first(&self) -> Option<&EntityId> {
        self.ids().and_then(<[EntityId]>::first)
    }

    #[must_use]
    pub fn into_ids(self) -> Option<Vec<EntityId>> {
        match self {
            Self::Ready(ids) => Some(ids),
            Self::Pending { .. } => None,
        }
    }
}

/// One resolution pass over a registry.
///
/// ```rust
/// use skit_kernel::prelude::*;
/// use skit_kernel::domain::StateSnapshot;
///
/// struct Banner(i32);
/// impl Candidate for Banner {
///     fn priority(&self) -> i32 { self.0 }
///     fn requirement(&self) -> Option<&Requirement> { None }
///     fn is_dismissible(&self) -> bool { false }
/// }
///
/// let registry = Registry::new("banner");
/// let graph = AssignmentGraph::new();
/// graph.assign_area_to_context("top", "dashboard").unwrap();
/// for (id, priority) in [("b", 20), ("a", 5)] {
///     registry.register(id, Banner(priority)).unwrap();
///     graph.assign_entity_to_area(id, "top").unwrap();
/// }
///
/// let state = StateSnapshot::default();
/// let resolution = Resolver::new(&registry, &graph).state(&state).resolve("top", "dashboard");
/// assert_eq!(resolution.first().unwrap(), "a");
/// ```
pub struct Resolver<'a, D> {
    registry: &'a Registry<D>,
    graph: &'a AssignmentGraph,
    state: Option<&'a StateSnapshot>,
    dismissals: &'a dyn DismissalLookup,
    catalog: &'a dyn Catalog,
}

impl<D> std::fmt::Debug for Resolver<'_, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver")
            .field("registry", self.registry)
            .field("has_state", &self.state.is_some())
            .finish_non_exhaustive()
    }
}

impl<'a, D: Candidate> Resolver<'a, D> {
    #[must_use]
    pub fn new(registry: &'a Registry<D>, graph: &'a AssignmentGraph) -> Self {
        Self { registry, graph, state: None, dismissals: &NoDismissals, catalog: &EmptyCatalog }
    }

    #[must_use]
    pub const fn state(mut self, state: &'a StateSnapshot) -> Self {
        self.state = Some(state);
        self
    }

    #[must_use]
    pub fn dismissals(mut self, dismissals: &'a dyn DismissalLookup) -> Self {
        self.dismissals = dismissals;
        self
    }

    #[must_use]
    pub fn catalog(mut self, catalog: &'a dyn Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Resolves the eligible entities for `area` in `context`.
    #[must_use]
    pub fn resolve(&self, area: &str, context: &str) -> Resolution {
        let default_state = StateSnapshot::default();
        let state = self.state.unwrap_or(&default_state);

        let candidates: Vec<(EntityId, usize, Arc<D>)> = self
            .graph
            .entities_for_area_in_context(area, context)
            .into_iter()
            .filter_map(|id| {
                let Some((sequence, descriptor)) = self.registry.get_indexed(&id) else {
                    trace!(id = %id, area, "Assigned but not registered, skipping");
                    return None;
                };
                descriptor.shown_in(context).then_some((id, sequence, descriptor))
            })
            .collect();

        let mut waiting_on = Vec::new();
        let mut undismissed = Vec::with_capacity(candidates.len());
        for (id, sequence, descriptor) in candidates {
            if !descriptor.is_dismissible() {
                undismissed.push((id, sequence, descriptor));
                continue;
            }
            match self.dismissals.is_dismissed(descriptor.dismissal_key(&id)) {
                Some(false) => undismissed.push((id, sequence, descriptor)),
                Some(true) => trace!(id = %id, "Dismissed"),
                None => waiting_on.push(id),
            }
        }

        if !waiting_on.is_empty() {
            debug!(area, context, pending = waiting_on.len(), "Dismissals not resolved yet");
            return Resolution::Pending { waiting_on };
        }

        let ctx = RequirementContext { state, catalog: self.catalog, context };
        let mut eligible: Vec<_> = undismissed
            .into_iter()
            .filter(|(id, _, descriptor)| {
                let Some(requirement) = descriptor.requirement() else {
                    return true;
                };
                match requirement.check(&ctx) {
                    Ok(passed) => passed,
                    Err(err) => {
                        warn!(kind = self.registry.kind(), id = %id, error = %err, "Requirement check failed");
                        false
                    },
                }
            })
            .map(|(id, sequence, descriptor)| (descriptor.priority(), sequence, id))
            .collect();

        eligible.sort_by_key(|(priority, sequence, _)| (*priority, *sequence));
        debug!(area, context, eligible = eligible.len(), "Resolved");

        Resolution::Ready(eligible.into_iter().map(|(_, _, id)| id).collect())
    }
}
