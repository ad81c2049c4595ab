use sitekit::dismissals::{DismissItemRequest, DismissalError, DismissalRemote};
use std::sync::{Arc, Mutex};

/// Remote store keeping dismissed ids in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryRemote {
    items: Arc<Mutex<Vec<String>>>,
}

impl MemoryRemote {
    #[must_use]
    pub fn with_items(items: &[&str]) -> Self {
        Self { items: Arc::new(Mutex::new(items.iter().map(ToString::to_string).collect())) }
    }

    #[must_use]
    pub fn items(&self) -> Vec<String> {
        self.items.lock().unwrap().clone()
    }
}

impl DismissalRemote for MemoryRemote {
    async fn fetch_dismissed_items(&self) -> Result<Vec<String>, DismissalError> {
        Ok(self.items())
    }

    async fn dismiss_item(&self, request: DismissItemRequest) -> Result<Vec<String>, DismissalError> {
        let mut items = self.items.lock().unwrap();
        items.push(request.data.slug);
        Ok(items.clone())
    }
}
