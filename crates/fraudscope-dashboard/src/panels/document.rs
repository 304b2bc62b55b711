//! Document-investigation panel: upload one claim document and show what the
//! backend extracted from it

use crate::loader::describe;
use fraudscope_client::{ClaimAnalyzer, ClientResult, UploadError, UploadFile};
use fraudscope_types::AnalysisResult;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Progress step while the analysis is pending
pub const PROGRESS_STEP: u8 = 10;
/// Time between progress steps
pub const PROGRESS_TICK: Duration = Duration::from_millis(200);
/// Progress never passes this until the response arrives
pub const PROGRESS_CAP: u8 = 90;

/// Progress shown `elapsed` after the upload started
pub fn progress_at(elapsed: Duration) -> u8 {
    let steps = elapsed.as_millis() / PROGRESS_TICK.as_millis();
    let value = steps.saturating_mul(PROGRESS_STEP as u128);
    value.min(PROGRESS_CAP as u128) as u8
}

#[derive(Debug, Clone, PartialEq)]
pub enum DocumentState {
    Idle,
    Analyzing { file_name: String, started: Instant },
    Resolved { file_name: String, result: AnalysisResult },
    Failed { file_name: String, error: String },
}

pub struct DocumentInvestigation {
    analyzer: Arc<dyn ClaimAnalyzer>,
    state: DocumentState,
    rx: Option<oneshot::Receiver<ClientResult<AnalysisResult>>>,
    task: Option<JoinHandle<()>>,
    /// Path typed into the file prompt
    pub path_input: String,
}

impl DocumentInvestigation {
    pub const NAME: &'static str = "document-investigation";

    pub fn new(analyzer: Arc<dyn ClaimAnalyzer>) -> Self {
        Self {
            analyzer,
            state: DocumentState::Idle,
            rx: None,
            task: None,
            path_input: String::new(),
        }
    }

    pub fn state(&self) -> &DocumentState {
        &self.state
    }

    pub fn is_analyzing(&self) -> bool {
        matches!(self.state, DocumentState::Analyzing { .. })
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match &self.state {
            DocumentState::Resolved { result, .. } => Some(result),
            _ => None,
        }
    }

    /// Validate `file` and start the analysis.
    ///
    /// A rejected file leaves the panel as it was and sends nothing; the
    /// caller shows the error as an alert.
    pub fn select(&mut self, file: UploadFile) -> Result<(), UploadError> {
        if let Err(err) = file.validate() {
            tracing::warn!(panel = Self::NAME, error = %err, "document rejected");
            return Err(err);
        }
        self.abort();

        let (tx, rx) = oneshot::channel();
        let analyzer = self.analyzer.clone();
        let file_name = file.file_name.clone();
        let task = tokio::spawn(async move {
            let _ = tx.send(analyzer.analyze_claim(&file).await);
        });
        tracing::info!(panel = Self::NAME, file = %file_name, "analysis started");
        self.state = DocumentState::Analyzing {
            file_name,
            started: Instant::now(),
        };
        self.rx = Some(rx);
        self.task = Some(task);
        Ok(())
    }

    /// Read `path` from disk and select it
    pub async fn select_path(&mut self, path: &Path) -> Result<(), UploadError> {
        let file = match UploadFile::from_path(path).await {
            Ok(file) => file,
            Err(err) => {
                tracing::warn!(panel = Self::NAME, error = %err, "document rejected");
                return Err(err);
            }
        };
        self.select(file)
    }

    /// Pick up a finished analysis without blocking
    pub fn poll(&mut self) -> bool {
        let Some(rx) = self.rx.as_mut() else {
            return false;
        };
        match rx.try_recv() {
            Ok(result) => {
                self.finish(Some(result));
                true
            }
            Err(oneshot::error::TryRecvError::Empty) => false,
            Err(oneshot::error::TryRecvError::Closed) => {
                self.finish(None);
                true
            }
        }
    }

    /// Wait for the pending analysis, if any
    pub async fn settle(&mut self) -> &DocumentState {
        if let Some(rx) = self.rx.take() {
            let result = rx.await.ok();
            self.finish(result);
        }
        &self.state
    }

    fn finish(&mut self, result: Option<ClientResult<AnalysisResult>>) {
        self.rx = None;
        self.task = None;
        let file_name = match &self.state {
            DocumentState::Analyzing { file_name, .. } => file_name.clone(),
            _ => String::new(),
        };
        self.state = match result {
            Some(Ok(result)) => {
                tracing::info!(
                    panel = Self::NAME,
                    file = %file_name,
                    risk_score = result.risk_score,
                    flags = result.flags.len(),
                    "analysis resolved"
                );
                DocumentState::Resolved { file_name, result }
            }
            Some(Err(err)) => {
                tracing::warn!(panel = Self::NAME, file = %file_name, error = %err, "analysis failed");
                DocumentState::Failed {
                    file_name,
                    error: describe(&err),
                }
            }
            None => DocumentState::Failed {
                file_name,
                error: "request ended without a result".to_string(),
            },
        };
    }

    /// Drop any result or pending analysis and go back to the file prompt
    pub fn reset(&mut self) {
        self.abort();
        self.state = DocumentState::Idle;
        self.path_input.clear();
    }

    /// Progress bar value, 0 to 100
    pub fn progress(&self) -> u8 {
        match &self.state {
            DocumentState::Idle | DocumentState::Failed { .. } => 0,
            DocumentState::Analyzing { started, .. } => progress_at(started.elapsed()),
            DocumentState::Resolved { .. } => 100,
        }
    }

    fn abort(&mut self) {
        self.rx = None;
        if let Some(task) = self.task.take() {
            task.abort();
            tracing::debug!(panel = Self::NAME, "aborted pending analysis");
        }
    }
}

impl Drop for DocumentInvestigation {
    fn drop(&mut self) {
        self.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use fraudscope_client::ClientError;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::Notify;

    struct MockAnalyzer {
        calls: AtomicUsize,
        gate: Notify,
        fail: bool,
    }

    #[async_trait]
    impl ClaimAnalyzer for MockAnalyzer {
        async fn analyze_claim(&self, file: &UploadFile) -> ClientResult<AnalysisResult> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.gate.notified().await;
            if self.fail {
                return Err(ClientError::ApiError {
                    status: 500,
                    message: "OCR pipeline down".to_string(),
                });
            }
            Ok(AnalysisResult {
                patient_id: "PMJAY-1234567".to_string(),
                hospital_id: "HOSP_0042".to_string(),
                claimed_amount: "₹85,000".to_string(),
                risk_score: 87.5,
                flags: vec![format!("{}: image reuse", file.file_name)],
                ..Default::default()
            })
        }
    }

    fn mock(fail: bool) -> Arc<MockAnalyzer> {
        Arc::new(MockAnalyzer {
            calls: AtomicUsize::new(0),
            gate: Notify::new(),
            fail,
        })
    }

    #[test]
    fn test_progress_curve() {
        assert_eq!(progress_at(Duration::ZERO), 0);
        assert_eq!(progress_at(Duration::from_millis(199)), 0);
        assert_eq!(progress_at(Duration::from_millis(200)), 10);
        assert_eq!(progress_at(Duration::from_millis(1000)), 50);
        assert_eq!(progress_at(Duration::from_millis(1800)), 90);
        assert_eq!(progress_at(Duration::from_secs(60)), 90);
    }

    #[tokio::test]
    async fn test_disallowed_types_never_reach_analyzer() {
        let analyzer = mock(false);
        let mut panel = DocumentInvestigation::new(analyzer.clone());
        for mime in ["image/gif", "text/plain", "application/zip", ""] {
            let file = UploadFile::new("claim", mime, b"data".to_vec());
            let err = panel.select(file).unwrap_err();
            assert!(matches!(err, UploadError::UnsupportedType { .. }));
            assert_eq!(panel.state(), &DocumentState::Idle);
        }
        let empty = UploadFile::new("claim.pdf", "application/pdf", Vec::new());
        assert!(matches!(panel.select(empty), Err(UploadError::Empty { .. })));

        tokio::task::yield_now().await;
        assert_eq!(analyzer.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_analyzing_then_resolved() {
        let analyzer = mock(false);
        let mut panel = DocumentInvestigation::new(analyzer.clone());
        let file = UploadFile::new("claim.pdf", "application/pdf", b"%PDF-1.4".to_vec());
        panel.select(file).unwrap();
        assert!(panel.is_analyzing());
        assert!(panel.progress() <= PROGRESS_CAP);

        // let the task register on the gate before opening it
        while analyzer.calls.load(Ordering::SeqCst) == 0 {
            tokio::task::yield_now().await;
        }
        analyzer.gate.notify_one();
        panel.settle().await;

        let result = panel.result().unwrap();
        assert_eq!(result.hospital_id, "HOSP_0042");
        assert_eq!(panel.progress(), 100);

        panel.reset();
        assert_eq!(panel.state(), &DocumentState::Idle);
        assert_eq!(panel.progress(), 0);
    }

    #[tokio::test]
    async fn test_failure_enters_failed_state() {
        let analyzer = mock(true);
        let mut panel = DocumentInvestigation::new(analyzer.clone());
        let file = UploadFile::new("scan.png", "image/png", vec![0x89, 0x50]);
        panel.select(file).unwrap();
        while analyzer.calls.load(Ordering::SeqCst) == 0 {
            tokio::task::yield_now().await;
        }
        analyzer.gate.notify_one();

        match panel.settle().await {
            DocumentState::Failed { file_name, error } => {
                assert_eq!(file_name, "scan.png");
                assert!(error.contains("OCR pipeline down"));
            }
            other => panic!("unexpected state {:?}", other),
        }
        assert!(panel.result().is_none());
    }

    #[tokio::test]
    async fn test_select_path_rejects_by_extension() {
        let analyzer = mock(false);
        let mut panel = DocumentInvestigation::new(analyzer.clone());
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        tokio::fs::write(&path, b"not a claim").await.unwrap();

        let err = panel.select_path(&path).await.unwrap_err();
        assert!(err.to_string().contains("unsupported file type text/plain"));
        assert_eq!(analyzer.calls.load(Ordering::SeqCst), 0);
    }
}
