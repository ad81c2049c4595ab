//! Requirement predicates.
//!
//! A requirement is a pure function of the [`StateSnapshot`] and a read-only
//! [`Catalog`] of the other registrations. It may fail; the resolver then treats
//! the entry as ineligible for that pass and moves on.

use crate::id::EntityId;
use skit_domain::StateSnapshot;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

#[skit_derive::skit_error]
pub enum RequirementError {
    /// A piece of state the predicate needs has not been loaded.
    #[error("State not loaded{}: {message}", format_context(.context))]
    Unresolved { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Requirement failed{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl RequirementError {
    pub fn unresolved(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Unresolved { message: message.into(), context: None }
    }
}

/// Read-only view over registrations that predicates may consult.
pub trait Catalog: Send + Sync {
    /// Entities assigned to `area` when `area` is shown in `context`.
    fn entities_for_area_in_context(&self, area: &str, context: &str) -> Vec<EntityId>;

    /// Module slugs `entity` depends on. Empty for unknown entities.
    fn modules_of(&self, entity: &str) -> Vec<String>;
}

/// Catalog with no registrations.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyCatalog;

impl Catalog for EmptyCatalog {
    fn entities_for_area_in_context(&self, _area: &str, _context: &str) -> Vec<EntityId> {
        Vec::new()
    }

    fn modules_of(&self, _entity: &str) -> Vec<String> {
        Vec::new()
    }
}

/// Inputs of a predicate call.
#[derive(Clone, Copy)]
pub struct RequirementContext<'a> {
    pub state: &'a StateSnapshot,
    pub catalog: &'a dyn Catalog,
    /// Context the resolver is resolving for.
    pub context: &'a str,
}

impl fmt::Debug for RequirementContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequirementContext")
            .field("state", self.state)
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}

type Predicate = dyn Fn(&RequirementContext<'_>) -> Result<bool, RequirementError> + Send + Sync;

/// Shared eligibility predicate.
#[derive(Clone)]
pub struct Requirement(Arc<Predicate>);

impl Requirement {
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&RequirementContext<'_>) -> Result<bool, RequirementError> + Send + Sync + 'static,
    {
        Self(Arc::new(predicate))
    }

    /// Predicate over the snapshot only. It cannot fail.
    pub fn from_state<F>(predicate: F) -> Self
    where
        F: Fn(&StateSnapshot) -> bool + Send + Sync + 'static,
    {
        Self::new(move |ctx| Ok(predicate(ctx.state)))
    }

    /// # Errors
    /// Whatever the predicate returns.
    pub fn check(&self, ctx: &RequirementContext<'_>) -> Result<bool, RequirementError> {
        (self.0)(ctx)
    }
}

impl fmt::Debug for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Requirement(..)")
    }
}
