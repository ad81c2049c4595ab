use parking_lot::Mutex;
use skit_dismissals::{DismissItemRequest, DismissalError, DismissalRemote};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// In-memory stand-in for the dismissed-items endpoints.
#[derive(Debug, Clone, Default)]
pub struct MockRemote {
    state: Arc<MockState>,
}

#[derive(Debug, Default)]
struct MockState {
    server: Mutex<Vec<String>>,
    requests: Mutex<Vec<DismissItemRequest>>,
    fetches: AtomicUsize,
    fail_fetch: Mutex<bool>,
    fail_dismiss: Mutex<bool>,
    latency: Mutex<Duration>,
}

impl MockRemote {
    #[must_use]
    pub fn with_items(items: &[&str]) -> Self {
        let remote = Self::default();
        *remote.state.server.lock() = items.iter().map(ToString::to_string).collect();
        remote
    }

    #[must_use]
    pub fn failing_dismiss(self) -> Self {
        *self.state.fail_dismiss.lock() = true;
        self
    }

    #[must_use]
    pub fn failing_fetch(self) -> Self {
        *self.state.fail_fetch.lock() = true;
        self
    }

    #[must_use]
    pub fn with_latency(self, latency: Duration) -> Self {
        *self.state.latency.lock() = latency;
        self
    }

    pub fn set_fetch_failure(&self, fail: bool) {
        *self.state.fail_fetch.lock() = fail;
    }

    #[must_use]
    pub fn fetch_count(&self) -> usize {
        self.state.fetches.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn requests(&self) -> Vec<DismissItemRequest> {
        self.state.requests.lock().clone()
    }

    async fn delay(&self) {
        let latency = *self.state.latency.lock();
        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }
    }
}

impl DismissalRemote for MockRemote {
    async fn fetch_dismissed_items(&self) -> Result<Vec<String>, DismissalError> {
        self.state.fetches.fetch_add(1, Ordering::SeqCst);
        self.delay().await;
        if *self.state.fail_fetch.lock() {
            return Err(DismissalError::remote("500 Internal Server Error"));
        }
        Ok(self.state.server.lock().clone())
    }

    async fn dismiss_item(&self, request: DismissItemRequest) -> Result<Vec<String>, DismissalError> {
        self.state.requests.lock().push(request.clone());
        self.delay().await;
        if *self.state.fail_dismiss.lock() {
            return Err(DismissalError::remote("403 Forbidden"));
        }
        let mut server = self.state.server.lock();
        if !server.contains(&request.data.slug) {
            server.push(request.data.slug);
        }
        Ok(server.clone())
    }
}

/// Lets spawned tasks run to completion on a current-thread runtime.
pub async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}
