use parking_lot::Mutex;
use skit_kernel::prelude::*;
use std::sync::Arc;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

/// Minimal descriptor used to drive the registry and resolver.
#[derive(Debug, Clone, Default)]
pub struct Entry {
    pub priority: i32,
    pub dismissible: bool,
    pub dismissal_key: Option<String>,
    pub contexts: Option<Vec<String>>,
    pub requirement: Option<Requirement>,
}

impl Entry {
    #[must_use]
    pub fn with_priority(priority: i32) -> Self {
        Self { priority, ..Self::default() }
    }

    #[must_use]
    pub const fn dismissible(mut self) -> Self {
        self.dismissible = true;
        self
    }

    #[must_use]
    pub fn requiring(mut self, requirement: Requirement) -> Self {
        self.requirement = Some(requirement);
        self
    }

    #[must_use]
    pub fn only_in(mut self, contexts: &[&str]) -> Self {
        self.contexts = Some(contexts.iter().map(ToString::to_string).collect());
        self
    }
}

impl Candidate for Entry {
    fn priority(&self) -> i32 {
        self.priority
    }

    fn requirement(&self) -> Option<&Requirement> {
        self.requirement.as_ref()
    }

    fn is_dismissible(&self) -> bool {
        self.dismissible
    }

    fn dismissal_key<'a>(&'a self, id: &'a str) -> &'a str {
        self.dismissal_key.as_deref().unwrap_or(id)
    }

    fn shown_in(&self, context: &str) -> bool {
        self.contexts.as_ref().is_none_or(|c| c.iter().any(|x| x == context))
    }
}

/// Registry + graph with one area assigned to one context.
#[must_use]
pub fn setup(area: &str, context: &str) -> (Registry<Entry>, AssignmentGraph) {
    let registry = Registry::new("notification");
    let graph = AssignmentGraph::new();
    graph.assign_area_to_context(area, context).expect("area assignment");
    (registry, graph)
}

/// Registers `entry` and assigns it to `area`.
pub fn add(registry: &Registry<Entry>, graph: &AssignmentGraph, id: &str, area: &str, entry: Entry) {
    registry.register(id, entry).expect("register");
    graph.assign_entity_to_area(id, area).expect("entity assignment");
}

/// Layer that records the message of every WARN event.
#[derive(Clone, Default)]
pub struct WarnCapture(Arc<Mutex<Vec<String>>>);

impl WarnCapture {
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.0.lock().clone()
    }
}

struct MessageVisitor(String);

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{value:?}");
        }
    }
}

impl<S: Subscriber> Layer<S> for WarnCapture {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::WARN {
            let mut visitor = MessageVisitor(String::new());
            event.record(&mut visitor);
            self.0.lock().push(visitor.0);
        }
    }
}

/// Runs `f` with a subscriber that captures warnings.
pub fn capture_warnings<T>(f: impl FnOnce() -> T) -> (T, Vec<String>) {
    let capture = WarnCapture::default();
    let subscriber = tracing_subscriber::registry().with(capture.clone());
    let out = tracing::subscriber::with_default(subscriber, f);
    (out, capture.messages())
}
