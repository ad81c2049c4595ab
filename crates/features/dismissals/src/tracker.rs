use crate::error::{DismissalError, DismissalErrorExt};
use crate::record::{DismissOptions, DismissalRecord};
use crate::remote::{DismissItemRequest, DismissalRemote};
use fxhash::{FxHashMap, FxHashSet};
use parking_lot::RwLock;
use skit_domain::config::DismissalsConfig;
use skit_kernel::resolver::DismissalLookup;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::task::{Context, Poll};
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, trace, warn};

/// Progress of the dismissed-items fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FetchState {
    #[default]
    Idle,
    Fetching,
    Resolved,
    /// Last fetch failed; the next read retries.
    Failed(String),
}

/// Published on every change so callers know when to resolve again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackerStatus {
    pub fetch: FetchState,
    /// Bumped on every mutation.
    pub revision: u64,
}

#[derive(Debug, Default)]
struct Items {
    // dismissed in this session, with expiry
    local: FxHashMap<String, DismissalRecord>,
    // server list; `None` until fetched or received
    remote: Option<FxHashSet<String>>,
    // bumped by `reset`; remote results from an older generation are dropped
    generation: u64,
}

struct Inner<R> {
    remote: R,
    fetch_on_first_read: bool,
    items: RwLock<Items>,
    fetching: AtomicBool,
    status: watch::Sender<TrackerStatus>,
}

/// Shared dismissal state. Cloning yields another handle to the same state.
pub struct DismissalTracker<R> {
    inner: Arc<Inner<R>>,
}

impl<R> Clone for DismissalTracker<R> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<R> fmt::Debug for DismissalTracker<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DismissalTracker")
            .field("items", &*self.inner.items.read())
            .field("status", &*self.inner.status.borrow())
            .finish_non_exhaustive()
    }
}

impl<R: DismissalRemote> DismissalTracker<R> {
    #[must_use]
    pub fn new(remote: R) -> Self {
        Self::with_config(remote, &DismissalsConfig::default())
    }

    #[must_use]
    pub fn with_config(remote: R, config: &DismissalsConfig) -> Self {
        let (status, _) = watch::channel(TrackerStatus::default());
        Self {
            inner: Arc::new(Inner {
                remote,
                fetch_on_first_read: config.fetch_on_first_read,
                items: RwLock::new(Items::default()),
                fetching: AtomicBool::new(false),
                status,
            }),
        }
    }

    #[must_use]
    pub fn remote(&self) -> &R {
        &self.inner.remote
    }

    /// `None` until the dismissed-items list is known, then whether `id` is
    /// currently dismissed.
    ///
    /// A live local dismissal answers `Some(true)` right away. An expired one
    /// only answers `Some(false)` once the list is known.
    ///
    /// The first unresolved read starts the fetch. Reads made while it is in
    /// flight return `None` without starting another one.
    pub fn is_dismissed(&self, id: &str) -> Option<bool> {
        let known = {
            let items = self.inner.items.read();
            match (items.local.get(id), items.remote.as_ref()) {
                (Some(record), _) if record.is_active() => Some(true),
                (Some(_), remote) => remote.map(|_| false),
                (None, remote) => remote.map(|ids| ids.contains(id)),
            }
        };

        if known.is_none() && self.inner.fetch_on_first_read {
            self.start_fetch();
        }
        known
    }

    /// Dismisses `id` locally and persists it in a detached task.
    ///
    /// The local state is updated before this returns and is kept even if the
    /// remote call fails. Await the handle to learn the remote outcome, or drop
    /// it to fire and forget.
    ///
    /// # Errors
    /// [`DismissalError::Validation`] for a blank id and
    /// [`DismissalError::Runtime`] outside a Tokio runtime. Nothing changes
    /// in either case.
    pub fn dismiss(
        &self,
        id: &str,
        options: DismissOptions,
    ) -> Result<DismissHandle, DismissalError> {
        if id.trim().is_empty() {
            return Err(DismissalError::validation("An id is required to dismiss an item."));
        }
        let runtime = Handle::try_current().context("dismiss")?;

        let expiration = options.expires_in_seconds;
        let generation = {
            let mut items = self.inner.items.write();
            items.local.insert(id.to_owned(), DismissalRecord::new(expiration));
            items.generation
        };
        self.bump();
        debug!(id, expiration, "Dismissed locally");

        let tracker = self.clone();
        let request = DismissItemRequest::new(id, expiration);
        let task = runtime.spawn(async move { tracker.persist(request, generation).await });

        Ok(DismissHandle { id: id.to_owned(), task })
    }

    /// Hydrates the list from preloaded data, as if the fetch had resolved.
    pub fn receive_dismissed_items<I, S>(&self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut items = self.inner.items.write();
        items.remote = Some(ids.into_iter().map(Into::into).collect());
        self.set_fetch_state(FetchState::Resolved);
    }

    /// Waits until the dismissed-items list is known, fetching it if needed.
    ///
    /// A fetch discarded by [`reset`](Self::reset) is followed by a fresh one.
    ///
    /// # Errors
    /// [`DismissalError::Remote`] if the fetch failed and
    /// [`DismissalError::Runtime`] outside a Tokio runtime.
    pub async fn resolve(&self) -> Result<(), DismissalError> {
        Handle::try_current().context("resolve")?;
        let mut rx = self.inner.status.subscribe();

        loop {
            if self.inner.items.read().remote.is_some() {
                return Ok(());
            }

            self.start_fetch();
            let fetch = rx
                .wait_for(|s| s.fetch != FetchState::Fetching)
                .await
                .map_err(|_| DismissalError::from("status channel closed"))?
                .fetch
                .clone();

            match fetch {
                FetchState::Failed(message) => {
                    return Err(DismissalError::Remote {
                        message: message.into(),
                        context: Some("dismissed-items".into()),
                    });
                },
                FetchState::Resolved => return Ok(()),
                FetchState::Idle | FetchState::Fetching => {},
            }
        }
    }

    /// Receiver of [`TrackerStatus`] updates.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<TrackerStatus> {
        self.inner.status.subscribe()
    }

    #[must_use]
    pub fn status(&self) -> TrackerStatus {
        self.inner.status.borrow().clone()
    }

    /// Forgets `id` locally. Returns whether anything was removed.
    pub fn clear(&self, id: &str) -> bool {
        let removed = {
            let mut items = self.inner.items.write();
            let local = items.local.remove(id).is_some();
            let remote = items.remote.as_mut().is_some_and(|ids| ids.remove(id));
            local || remote
        };
        if removed {
            self.bump();
            trace!(id, "Dismissal cleared");
        }
        removed
    }

    /// Back to the initial, unfetched state.
    ///
    /// Remote calls already in flight finish, but their lists are dropped. A
    /// fetch in flight keeps the status at [`FetchState::Fetching`] until it
    /// lands, so no second fetch overlaps it.
    pub fn reset(&self) {
        let mut items = self.inner.items.write();
        let generation = items.generation.wrapping_add(1);
        *items = Items { generation, ..Items::default() };
        let fetch = if self.inner.fetching.load(Ordering::Acquire) {
            FetchState::Fetching
        } else {
            FetchState::Idle
        };
        self.set_fetch_state(fetch);
        drop(items);
        debug!(generation, "Dismissal tracker reset");
    }

    /// Ids currently dismissed, sorted.
    #[must_use]
    pub fn dismissed_items(&self) -> Vec<String> {
        let now = Instant::now();
        let items = self.inner.items.read();
        let mut ids: Vec<String> = items
            .remote
            .iter()
            .flatten()
            .filter(|id| items.local.get(*id).is_none_or(|r| r.is_active_at(now)))
            .chain(items.local.iter().filter(|(_, r)| r.is_active_at(now)).map(|(id, _)| id))
            .cloned()
            .collect::<FxHashSet<_>>()
            .into_iter()
            .collect();
        ids.sort_unstable();
        ids
    }

    fn start_fetch(&self) -> bool {
        let Ok(runtime) = Handle::try_current() else {
            warn!("No Tokio runtime, dismissed items cannot be fetched");
            return false;
        };

        // Held across the swap: a fetch completes under the write lock, so the
        // list cannot land between the check and the claim.
        let items = self.inner.items.read();
        if items.remote.is_some() {
            return false;
        }
        if self.inner.fetching.swap(true, Ordering::AcqRel) {
            trace!("Dismissed items fetch already in flight");
            return false;
        }
        let generation = items.generation;
        self.set_fetch_state(FetchState::Fetching);
        drop(items);

        let tracker = self.clone();
        runtime.spawn(async move { tracker.run_fetch(generation).await });
        true
    }

    async fn run_fetch(&self, generation: u64) {
        debug!(generation, "Fetching dismissed items");
        let result = self.inner.remote.fetch_dismissed_items().await;

        let mut items = self.inner.items.write();
        self.inner.fetching.store(false, Ordering::Release);
        if items.generation != generation {
            debug!(generation, "Dropping dismissed items fetched before reset");
            self.set_fetch_state(FetchState::Idle);
            return;
        }

        match result {
            Ok(ids) => {
                let count = ids.len();
                items.remote = Some(ids.into_iter().collect());
                self.set_fetch_state(FetchState::Resolved);
                debug!(count, "Dismissed items resolved");
            },
            Err(err) => {
                warn!(error = %err, "Failed to fetch dismissed items");
                // a persist may have delivered the list meanwhile
                let fetch = if items.remote.is_some() {
                    FetchState::Resolved
                } else {
                    FetchState::Failed(err.to_string())
                };
                self.set_fetch_state(fetch);
            },
        }
    }

    async fn persist(
        &self,
        request: DismissItemRequest,
        generation: u64,
    ) -> Result<(), DismissalError> {
        let id = request.data.slug.clone();
        match self.inner.remote.dismiss_item(request).await {
            Ok(ids) => {
                let mut items = self.inner.items.write();
                if items.generation == generation {
                    items.remote = Some(ids.into_iter().collect());
                    self.set_fetch_state(FetchState::Resolved);
                    debug!(id = %id, "Dismissal persisted");
                } else {
                    debug!(id = %id, "Dismissal persisted after reset, list dropped");
                }
                Ok(())
            },
            Err(err) => {
                warn!(id = %id, error = %err, "Failed to persist dismissal");
                Err(err)
            },
        }
    }

    fn set_fetch_state(&self, fetch: FetchState) {
        self.inner.status.send_modify(|status| {
            status.fetch = fetch;
            status.revision = status.revision.wrapping_add(1);
        });
    }

    fn bump(&self) {
        self.inner.status.send_modify(|status| status.revision = status.revision.wrapping_add(1));
    }
}

impl<R: DismissalRemote> DismissalLookup for DismissalTracker<R> {
    fn is_dismissed(&self, key: &str) -> Option<bool> {
        Self::is_dismissed(self, key)
    }
}

/// Remote outcome of a dismissal. Resolves once the persist call finished.
#[derive(Debug)]
pub struct DismissHandle {
    id: String,
    task: JoinHandle<Result<(), DismissalError>>,
}

impl DismissHandle {
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Future for DismissHandle {
    type Output = Result<(), DismissalError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.task).poll(cx).map(|joined| joined.context("persist task")?)
    }
}
