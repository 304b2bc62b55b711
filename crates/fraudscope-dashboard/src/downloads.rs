//! Per-row report downloads
//!
//! Each trigger spawns one task that asks the backend for the report and
//! writes it into the download directory. The in-flight set drives the
//! per-row spinner; a row already downloading ignores further triggers.

use fraudscope_client::ReportSource;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// How a download ended
#[derive(Debug, Clone, PartialEq)]
pub enum DownloadOutcome {
    Saved { hospital_id: String, path: PathBuf },
    Failed { hospital_id: String, error: String },
}

impl DownloadOutcome {
    pub fn hospital_id(&self) -> &str {
        match self {
            Self::Saved { hospital_id, .. } | Self::Failed { hospital_id, .. } => hospital_id,
        }
    }

    /// Status-line text
    pub fn message(&self) -> String {
        match self {
            Self::Saved { hospital_id, path } => {
                format!("report for {} saved to {}", hospital_id, path.display())
            }
            Self::Failed { hospital_id, error } => {
                format!("report for {} failed: {}", hospital_id, error)
            }
        }
    }
}

pub struct ReportDownloads {
    source: Arc<dyn ReportSource>,
    dir: PathBuf,
    in_flight: HashMap<String, JoinHandle<()>>,
    tx: mpsc::UnboundedSender<DownloadOutcome>,
    rx: mpsc::UnboundedReceiver<DownloadOutcome>,
}

impl ReportDownloads {
    pub fn new(source: Arc<dyn ReportSource>, dir: impl Into<PathBuf>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            source,
            dir: dir.into(),
            in_flight: HashMap::new(),
            tx,
            rx,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn is_downloading(&self, hospital_id: &str) -> bool {
        self.in_flight.contains_key(hospital_id)
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    /// Start a download; returns false when that row is already in flight
    pub fn trigger(&mut self, hospital_id: &str) -> bool {
        if self.is_downloading(hospital_id) {
            return false;
        }
        let source = self.source.clone();
        let dir = self.dir.clone();
        let tx = self.tx.clone();
        let id = hospital_id.to_string();
        let task = tokio::spawn(async move {
            let outcome = match source.generate_report(&id).await {
                Ok(report) => match report.save_to(&dir).await {
                    Ok(path) => DownloadOutcome::Saved {
                        hospital_id: id,
                        path,
                    },
                    Err(err) => DownloadOutcome::Failed {
                        hospital_id: id,
                        error: err.to_string(),
                    },
                },
                Err(err) => DownloadOutcome::Failed {
                    hospital_id: id,
                    error: err.to_string(),
                },
            };
            let _ = tx.send(outcome);
        });
        self.in_flight.insert(hospital_id.to_string(), task);
        tracing::info!(hospital_id, "report download started");
        true
    }

    /// Collect finished downloads and clear their spinners
    pub fn poll(&mut self) -> Vec<DownloadOutcome> {
        let mut done = Vec::new();
        while let Ok(outcome) = self.rx.try_recv() {
            self.finish(&outcome);
            done.push(outcome);
        }
        done
    }

    /// Wait for the next download to finish
    pub async fn next(&mut self) -> Option<DownloadOutcome> {
        if self.in_flight.is_empty() {
            return None;
        }
        let outcome = self.rx.recv().await?;
        self.finish(&outcome);
        Some(outcome)
    }

    fn finish(&mut self, outcome: &DownloadOutcome) {
        self.in_flight.remove(outcome.hospital_id());
        match outcome {
            DownloadOutcome::Saved { hospital_id, path } => {
                tracing::info!(hospital_id = %hospital_id, path = %path.display(), "report saved")
            }
            DownloadOutcome::Failed { hospital_id, error } => {
                tracing::warn!(hospital_id = %hospital_id, error = %error, "report download failed")
            }
        }
    }
}

impl Drop for ReportDownloads {
    fn drop(&mut self) {
        for (_, task) in self.in_flight.drain() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use fraudscope_client::{ClientError, ClientResult, ReportFile};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::Notify;

    struct FakeReports {
        calls: AtomicUsize,
        gate: Notify,
    }

    #[async_trait]
    impl ReportSource for FakeReports {
        async fn generate_report(&self, hospital_id: &str) -> ClientResult<ReportFile> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.gate.notified().await;
            if hospital_id == "HOSP_9999" {
                return Err(ClientError::ApiError {
                    status: 404,
                    message: "Hospital not found".to_string(),
                });
            }
            Ok(ReportFile {
                hospital_id: hospital_id.to_string(),
                file_name: format!("audit_{}.pdf", hospital_id),
                bytes: b"%PDF".to_vec(),
            })
        }
    }

    fn fake() -> Arc<FakeReports> {
        Arc::new(FakeReports {
            calls: AtomicUsize::new(0),
            gate: Notify::new(),
        })
    }

    #[tokio::test]
    async fn test_spinner_until_saved() {
        let dir = tempfile::tempdir().unwrap();
        let source = fake();
        let mut downloads = ReportDownloads::new(source.clone(), dir.path());

        assert!(downloads.trigger("HOSP_0042"));
        assert!(downloads.is_downloading("HOSP_0042"));
        // second click on the same row is ignored
        assert!(!downloads.trigger("HOSP_0042"));

        source.gate.notify_one();
        let outcome = downloads.next().await.unwrap();
        assert_eq!(
            outcome,
            DownloadOutcome::Saved {
                hospital_id: "HOSP_0042".to_string(),
                path: dir.path().join("audit_HOSP_0042.pdf"),
            }
        );
        assert!(!downloads.is_downloading("HOSP_0042"));
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failure_clears_spinner() {
        let dir = tempfile::tempdir().unwrap();
        let source = fake();
        let mut downloads = ReportDownloads::new(source.clone(), dir.path());

        downloads.trigger("HOSP_9999");
        source.gate.notify_one();
        let outcome = downloads.next().await.unwrap();
        assert!(outcome.message().contains("Hospital not found"));
        assert_eq!(downloads.in_flight(), 0);
        assert!(downloads.next().await.is_none());
    }
}
