//! Opaque renderable components.
//!
//! The stores keep components only to hand them back to the presentation
//! layer; nothing in the kernel renders.

use std::fmt;
use std::sync::Arc;

/// Props passed to a component when the presentation layer renders it.
pub type Props = serde_json::Map<String, serde_json::Value>;

/// Anything that can turn props into markup.
pub trait Renderable: Send + Sync + 'static {
    fn render(&self, props: &Props) -> String;
}

impl<F> Renderable for F
where
    F: Fn(&Props) -> String + Send + Sync + 'static,
{
    fn render(&self, props: &Props) -> String {
        self(props)
    }
}

/// Shared handle to a registered component.
#[derive(Clone)]
pub struct Component {
    name: &'static str,
    inner: Arc<dyn Renderable>,
}

impl Component {
    pub fn new<R: Renderable>(renderable: R) -> Self {
        Self { name: std::any::type_name::<R>(), inner: Arc::new(renderable) }
    }

    /// Type name of the wrapped renderable, for diagnostics.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn render(&self, props: &Props) -> String {
        self.inner.render(props)
    }

    /// Whether both handles point at the same registered component.
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Component").field(&self.name).finish()
    }
}
