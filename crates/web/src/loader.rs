//! Per-request data loading.
//!
//! Independent reads are spawned as tasks under one [`PageLoader`]. The
//! loader owns a cancellation token behind a drop guard: if the request
//! future is dropped (client went away), the token fires and every
//! outstanding load resolves to [`LoadError::Cancelled`] without publishing
//! a result.

use std::future::Future;

use folio_core::notice::Notice;
use folio_feeds::{Feed, FeedError};
use folio_remote::RemoteError;
use tokio::task::JoinHandle;
use tokio_util::sync::{CancellationToken, DropGuard};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("load cancelled")]
    Cancelled,

    #[error(transparent)]
    Remote(#[from] RemoteError),

    #[error(transparent)]
    Feed(#[from] FeedError),

    #[error("load task failed: {0}")]
    Join(String),
}

pub struct PageLoader {
    token: CancellationToken,
    _guard: DropGuard,
}

impl Default for PageLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl PageLoader {
    pub fn new() -> Self {
        let token = CancellationToken::new();
        let guard = token.clone().drop_guard();
        Self {
            token,
            _guard: guard,
        }
    }

    /// Spawn `fut` as a load named `label`.
    pub fn spawn<T, E, F>(&self, label: &'static str, fut: F) -> Load<T>
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
        T: Send + 'static,
        E: Into<LoadError> + Send + 'static,
    {
        let token = self.token.clone();
        let handle = tokio::spawn(async move {
            tokio::select! {
                biased;
                () = token.cancelled() => Err(LoadError::Cancelled),
                result = fut => result.map_err(Into::into),
            }
        });
        Load { label, handle }
    }

    /// Spawn a fetch of `feed`.
    pub fn spawn_feed<F>(&self, feed: F) -> Load<Vec<F::Item>>
    where
        F: Feed + 'static,
        F::Item: 'static,
    {
        let label = feed.source();
        self.spawn(label, async move { feed.fetch().await })
    }
}

/// Handle to one spawned load.
pub struct Load<T> {
    label: &'static str,
    handle: JoinHandle<Result<T, LoadError>>,
}

impl<T> Load<T> {
    pub async fn join(self) -> Result<T, LoadError> {
        match self.handle.await {
            Ok(result) => result,
            Err(e) => Err(LoadError::Join(e.to_string())),
        }
    }
}

impl<T: Default> Load<T> {
    /// Wait for the load, falling back to `T::default()` on failure.
    ///
    /// Failures are logged and `notice` is pushed onto `notices`. A disabled
    /// feed and a cancelled load fall back silently.
    pub async fn or_default(self, notices: &mut Vec<Notice>, notice: Notice) -> T {
        let label = self.label;
        match self.join().await {
            Ok(value) => value,
            Err(LoadError::Cancelled) => {
                tracing::debug!(load = label, "Load cancelled");
                T::default()
            }
            Err(LoadError::Feed(FeedError::Disabled(source))) => {
                tracing::info!(load = label, source, "Feed disabled, rendering empty");
                T::default()
            }
            Err(e) => {
                tracing::warn!(load = label, error = %e, "Load failed, rendering empty state");
                if !notices.contains(&notice) {
                    notices.push(notice);
                }
                T::default()
            }
        }
    }
}
