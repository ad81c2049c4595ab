use crate::error::RegistryError;
use crate::id::EntityId;
use fxhash::FxHashMap;
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;
use tracing::{trace, warn};

/// Outcome of [`Registry::register`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    /// Stored under a fresh id.
    Added,
    /// The id was taken; the existing descriptor was kept.
    Duplicate,
}

#[derive(Debug)]
struct Entry<D> {
    sequence: usize,
    descriptor: Arc<D>,
}

#[derive(Debug)]
struct Entries<D> {
    order: Vec<EntityId>,
    items: FxHashMap<EntityId, Entry<D>>,
}

impl<D> Default for Entries<D> {
    fn default() -> Self {
        Self { order: Vec::new(), items: FxHashMap::default() }
    }
}

/// Ordered id → descriptor store.
///
/// Cloning yields another handle to the same entries. The first registration
/// of an id wins; later ones only log a warning.
pub struct Registry<D> {
    kind: &'static str,
    entries: Arc<RwLock<Entries<D>>>,
}

impl<D> Clone for Registry<D> {
    fn clone(&self) -> Self {
        Self { kind: self.kind, entries: Arc::clone(&self.entries) }
    }
}

impl<D> fmt::Debug for Registry<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry").field("kind", &self.kind).field("len", &self.len()).finish()
    }
}

impl<D> Registry<D> {
    /// `kind` names the entries in log lines ("notification", "widget", ...).
    #[must_use]
    pub fn new(kind: &'static str) -> Self {
        Self { kind, entries: Arc::new(RwLock::new(Entries::default())) }
    }

    #[must_use]
    pub const fn kind(&self) -> &'static str {
        self.kind
    }

    /// Stores `descriptor` under `id` unless the id is already taken.
    ///
    /// # Errors
    /// Returns [`RegistryError::Validation`] for a blank id. Nothing is stored.
    pub fn register(
        &self,
        id: impl AsRef<str>,
        descriptor: D,
    ) -> Result<Registration, RegistryError> {
        let id = EntityId::new(id)?;
        let mut entries = self.entries.write();

        if entries.items.contains_key(&id) {
            warn!(
                kind = self.kind,
                "Could not register {} with ID \"{id}\". {} \"{id}\" is already registered.",
                self.kind,
                capitalize(self.kind),
            );
            return Ok(Registration::Duplicate);
        }

        let sequence = entries.order.len();
        entries.order.push(id.clone());
        entries.items.insert(id.clone(), Entry { sequence, descriptor: Arc::new(descriptor) });
        trace!(kind = self.kind, id = %id, sequence, "Registered");

        Ok(Registration::Added)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<Arc<D>> {
        self.entries.read().items.get(id).map(|e| Arc::clone(&e.descriptor))
    }

    /// Descriptor together with its registration sequence number.
    #[must_use]
    pub fn get_indexed(&self, id: &str) -> Option<(usize, Arc<D>)> {
        self.entries.read().items.get(id).map(|e| (e.sequence, Arc::clone(&e.descriptor)))
    }

    /// All entries in registration order.
    #[must_use]
    pub fn get_all(&self) -> Vec<(EntityId, Arc<D>)> {
        let entries = self.entries.read();
        entries
            .order
            .iter()
            .filter_map(|id| entries.items.get(id).map(|e| (id.clone(), Arc::clone(&e.descriptor))))
            .collect()
    }

    #[must_use]
    pub fn ids(&self) -> Vec<EntityId> {
        self.entries.read().order.clone()
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.entries.read().items.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        let mut entries = self.entries.write();
        entries.order.clear();
        entries.items.clear();
        trace!(kind = self.kind, "Registry cleared");
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| first.to_uppercase().chain(chars).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_registration_wins() {
        let registry = Registry::new("notification");
        assert_eq!(registry.register("a", 1).unwrap(), Registration::Added);
        assert_eq!(registry.register("a", 2).unwrap(), Registration::Duplicate);
        assert_eq!(*registry.get("a").unwrap(), 1);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn blank_id_is_rejected_without_storing() {
        let registry = Registry::<u8>::new("widget");
        assert!(matches!(registry.register("", 1), Err(RegistryError::Validation { .. })));
        assert!(registry.is_empty());
    }

    #[test]
    fn keeps_registration_order() {
        let registry = Registry::new("widget");
        for id in ["c", "a", "b"] {
            registry.register(id, ()).unwrap();
        }
        assert_eq!(registry.ids(), vec!["c", "a", "b"]);
        assert_eq!(registry.get_indexed("b").map(|(seq, _)| seq), Some(2));
    }

    #[test]
    fn clones_share_entries() {
        let registry = Registry::new("widget");
        let handle = registry.clone();
        handle.register("x", ()).unwrap();
        assert!(registry.contains("x"));
        registry.clear();
        assert!(handle.is_empty());
    }

    #[test]
    fn capitalize_kind() {
        assert_eq!(capitalize("notification"), "Notification");
        assert_eq!(capitalize(""), "");
    }
}
