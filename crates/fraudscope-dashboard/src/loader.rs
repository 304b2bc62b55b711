//! Fetch-on-mount lifecycle shared by every data panel
//!
//! A [`Loader`] is created when its panel mounts. It spawns exactly one
//! request task and owns the only receiver for its result, so:
//!
//! - dropping the loader (unmounting the panel) aborts the request,
//! - a result can only ever land in the loader that asked for it,
//! - re-mounting builds a fresh loader and therefore re-fetches.

use fraudscope_client::{ClientError, ClientResult};
use fraudscope_types::*;
use std::future::Future;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// Whether a successful response has anything to show
pub trait PanelData {
    fn is_empty(&self) -> bool;
}

impl<T> PanelData for Vec<T> {
    fn is_empty(&self) -> bool {
        Vec::is_empty(self)
    }
}

macro_rules! panel_data {
    ($($ty:ty),* $(,)?) => {
        $(impl PanelData for $ty {
            fn is_empty(&self) -> bool {
                <$ty>::is_empty(self)
            }
        })*
    };
}

panel_data!(
    StatSummary,
    AnalyticsSeries,
    IsolationForestReport,
    GhostReport,
    FraudNetwork,
    ConcurrentReport,
    UpcodingReport,
);

impl PanelData for BackendStatus {
    fn is_empty(&self) -> bool {
        false
    }
}

/// Render state of a data panel
#[derive(Debug, Clone, PartialEq)]
pub enum PanelState<T> {
    Loading,
    Loaded(T),
    Empty,
    Failed(String),
}

impl<T> PanelState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// One panel's request and its outcome
pub struct Loader<T> {
    panel: &'static str,
    state: PanelState<T>,
    rx: Option<oneshot::Receiver<ClientResult<T>>>,
    task: Option<JoinHandle<()>>,
}

impl<T: PanelData + Send + 'static> Loader<T> {
    /// Spawn `fetch` on the current runtime and start in [`PanelState::Loading`]
    pub fn mount<F>(panel: &'static str, fetch: F) -> Self
    where
        F: Future<Output = ClientResult<T>> + Send + 'static,
    {
        let mut loader = Self {
            panel,
            state: PanelState::Loading,
            rx: None,
            task: None,
        };
        loader.spawn(fetch);
        loader
    }

    /// A loader whose fetch already finished; no task is spawned
    pub fn resolved(panel: &'static str, result: ClientResult<T>) -> Self {
        let mut loader = Self {
            panel,
            state: PanelState::Loading,
            rx: None,
            task: None,
        };
        loader.apply(result);
        loader
    }

    /// Abort whatever is in flight, drop the current data and fetch again
    pub fn remount<F>(&mut self, fetch: F)
    where
        F: Future<Output = ClientResult<T>> + Send + 'static,
    {
        self.abort();
        self.state = PanelState::Loading;
        self.spawn(fetch);
    }

    fn spawn<F>(&mut self, fetch: F)
    where
        F: Future<Output = ClientResult<T>> + Send + 'static,
    {
        tracing::info!(panel = self.panel, "mounting panel");
        let (tx, rx) = oneshot::channel();
        let task = tokio::spawn(async move {
            // receiver gone means the panel was unmounted
            let _ = tx.send(fetch.await);
        });
        self.rx = Some(rx);
        self.task = Some(task);
    }

    /// Pick up a finished request without blocking. Returns true when the
    /// state changed.
    pub fn poll(&mut self) -> bool {
        let Some(rx) = self.rx.as_mut() else {
            return false;
        };
        match rx.try_recv() {
            Ok(result) => {
                self.rx = None;
                self.task = None;
                self.apply(result);
                true
            }
            Err(oneshot::error::TryRecvError::Empty) => false,
            Err(oneshot::error::TryRecvError::Closed) => {
                self.rx = None;
                self.task = None;
                self.lost();
                true
            }
        }
    }

    /// Wait for the in-flight request, if any
    pub async fn settle(&mut self) -> &PanelState<T> {
        if let Some(rx) = self.rx.take() {
            match rx.await {
                Ok(result) => self.apply(result),
                Err(_) => self.lost(),
            }
            self.task = None;
        }
        &self.state
    }

    fn apply(&mut self, result: ClientResult<T>) {
        self.state = match result {
            Ok(data) if data.is_empty() => {
                tracing::info!(panel = self.panel, "panel resolved with no data");
                PanelState::Empty
            }
            Ok(data) => {
                tracing::info!(panel = self.panel, "panel resolved");
                PanelState::Loaded(data)
            }
            Err(err) => {
                tracing::warn!(panel = self.panel, error = %err, "panel fetch failed");
                PanelState::Failed(describe(&err))
            }
        };
    }

    fn lost(&mut self) {
        tracing::warn!(panel = self.panel, "panel request ended without a result");
        self.state = PanelState::Failed("request ended without a result".to_string());
    }
}

impl<T> Loader<T> {
    pub fn panel(&self) -> &'static str {
        self.panel
    }

    pub fn state(&self) -> &PanelState<T> {
        &self.state
    }

    pub fn data(&self) -> Option<&T> {
        self.state.data()
    }

    pub fn is_pending(&self) -> bool {
        self.rx.is_some()
    }

    fn abort(&mut self) {
        self.rx = None;
        if let Some(task) = self.task.take() {
            task.abort();
            tracing::debug!(panel = self.panel, "aborted in-flight request");
        }
    }
}

impl<T> Drop for Loader<T> {
    fn drop(&mut self) {
        self.abort();
    }
}

/// Short user-facing text for a failed fetch
pub fn describe(err: &ClientError) -> String {
    match err {
        ClientError::NetworkError(e) if e.is_timeout() => "request timed out".to_string(),
        ClientError::NetworkError(e) if e.is_connect() => "backend unreachable".to_string(),
        ClientError::ApiError { status, message } if message.is_empty() => {
            format!("backend answered {}", status)
        }
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    fn api_error() -> ClientError {
        ClientError::ApiError {
            status: 500,
            message: "boom".to_string(),
        }
    }

    #[tokio::test]
    async fn test_loading_until_resolved() {
        let (tx, rx) = oneshot::channel::<()>();
        let mut loader = Loader::mount("test", async move {
            let _ = rx.await;
            Ok(vec![1, 2, 3])
        });
        assert!(loader.state().is_loading());
        assert!(!loader.poll());
        assert!(loader.data().is_none());

        tx.send(()).unwrap();
        let state = loader.settle().await;
        assert_eq!(state, &PanelState::Loaded(vec![1, 2, 3]));
        assert!(!loader.is_pending());
    }

    #[tokio::test]
    async fn test_poll_picks_up_result() {
        let mut loader = Loader::mount("test", async { Ok(vec!["row"]) });
        let mut changed = false;
        for _ in 0..50 {
            if loader.poll() {
                changed = true;
                break;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        assert!(changed);
        assert_eq!(loader.data(), Some(&vec!["row"]));
    }

    #[tokio::test]
    async fn test_empty_and_failed_states() {
        let mut empty = Loader::<Vec<u8>>::mount("test", async { Ok(Vec::new()) });
        assert_eq!(empty.settle().await, &PanelState::Empty);

        let mut failed = Loader::<Vec<u8>>::mount("test", async { Err(api_error()) });
        let state = failed.settle().await;
        assert_eq!(state.error(), Some("API error: 500 - boom"));
    }

    #[tokio::test]
    async fn test_drop_aborts_request() {
        let finished = Arc::new(AtomicBool::new(false));
        let flag = finished.clone();
        let loader = Loader::mount("test", async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            flag.store(true, Ordering::SeqCst);
            Ok(vec![1])
        });
        drop(loader);
        tokio::time::sleep(Duration::from_millis(120)).await;
        assert!(!finished.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_failed_remount_discards_previous_data() {
        let mut loader = Loader::mount("test", async { Ok(vec![7]) });
        loader.settle().await;
        assert_eq!(loader.data(), Some(&vec![7]));

        loader.remount(async { Err(api_error()) });
        assert!(loader.state().is_loading());
        assert!(loader.data().is_none());

        loader.settle().await;
        assert!(loader.data().is_none());
        assert!(loader.state().error().is_some());
    }

    #[tokio::test]
    async fn test_remount_ignores_superseded_request() {
        let (slow_tx, slow_rx) = oneshot::channel::<()>();
        let mut loader = Loader::mount("test", async move {
            let _ = slow_rx.await;
            Ok(vec!["stale"])
        });
        loader.remount(async { Ok(vec!["fresh"]) });
        // releasing the first request must not leak into the new mount
        let _ = slow_tx.send(());
        loader.settle().await;
        assert_eq!(loader.data(), Some(&vec!["fresh"]));
    }

    #[test]
    fn test_resolved_without_runtime() {
        let loader = Loader::resolved("test", Ok(StatSummary::default()));
        assert_eq!(loader.state(), &PanelState::Empty);
        let status = Loader::resolved("status", Ok(BackendStatus::default()));
        assert!(status.data().is_some());
    }
}
