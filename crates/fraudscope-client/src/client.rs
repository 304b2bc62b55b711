//! The API client

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::report::{file_name_from_disposition, ReportFile};
use crate::upload::UploadFile;
use async_trait::async_trait;
use fraudscope_types::*;
use reqwest::header::CONTENT_DISPOSITION;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Endpoint paths, relative to the configured origin
pub mod endpoints {
    pub const STATS: &str = "/api/stats";
    pub const ANALYTICS: &str = "/api/analytics";
    pub const STATE_INTELLIGENCE: &str = "/api/state-intelligence";
    pub const ISOLATION_FOREST: &str = "/api/isolation-forest-data";
    pub const GHOST_BENEFICIARIES: &str = "/api/ghost-beneficiaries";
    pub const FRAUD_NETWORK: &str = "/api/fraud-network";
    pub const HOSPITALS: &str = "/api/hospitals";
    pub const CLAIMS: &str = "/api/claims";
    pub const ANALYZE_CLAIM: &str = "/api/analyze-claim";
    pub const GENERATE_REPORT: &str = "/api/generate-report";
    pub const CONCURRENT_CLAIMS: &str = "/api/concurrent-claims";
    pub const UPCODING_ANALYSIS: &str = "/api/upcoding-analysis";
    pub const DB_STATUS: &str = "/api/db-status";
}

/// Sends a claim document to the analysis endpoint
#[async_trait]
pub trait ClaimAnalyzer: Send + Sync {
    async fn analyze_claim(&self, file: &UploadFile) -> ClientResult<AnalysisResult>;
}

/// Produces the audit report for one hospital
#[async_trait]
pub trait ReportSource: Send + Sync {
    async fn generate_report(&self, hospital_id: &str) -> ClientResult<ReportFile>;
}

/// HTTP client for the fraud-analytics API
///
/// Cheap to clone; every panel holds its own handle.
#[derive(Clone)]
pub struct FraudScopeClient {
    config: Arc<ClientConfig>,
    client: Client,
}

impl FraudScopeClient {
    /// Client for a backend on the default local origin
    pub fn local() -> ClientResult<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Client for a specific origin
    pub fn connect(endpoint: &str) -> ClientResult<Self> {
        Self::with_config(ClientConfig::with_endpoint(endpoint))
    }

    /// Create with custom configuration
    pub fn with_config(config: ClientConfig) -> ClientResult<Self> {
        if !config.endpoint.starts_with("http://") && !config.endpoint.starts_with("https://") {
            return Err(ClientError::ConfigError(format!(
                "endpoint must be an http(s) URL, got '{}'",
                config.endpoint
            )));
        }
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClientError::ConfigError(e.to_string()))?;

        Ok(Self {
            config: Arc::new(config),
            client,
        })
    }

    /// Get the endpoint
    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    /// Get the configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.get_json_with_query(path, &[]).await
    }

    async fn get_json_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> ClientResult<T> {
        let url = self.config.url(path);
        tracing::debug!(%url, "GET");
        let resp = self.client.get(&url).query(query).send().await?;
        decode(path, resp).await
    }

    /// Aggregate counters
    pub async fn stats(&self) -> ClientResult<StatSummary> {
        self.get_json(endpoints::STATS).await
    }

    /// Monthly timeline and regional split
    pub async fn analytics(&self) -> ClientResult<AnalyticsSeries> {
        self.get_json(endpoints::ANALYTICS).await
    }

    /// Per-state threat rows
    pub async fn state_intelligence(&self) -> ClientResult<Vec<StateRiskRow>> {
        self.get_json(endpoints::STATE_INTELLIGENCE).await
    }

    /// Isolation-forest scatter sample and evaluation
    pub async fn isolation_forest(&self) -> ClientResult<IsolationForestReport> {
        self.get_json(endpoints::ISOLATION_FOREST).await
    }

    /// Ghost-beneficiary summary and cases
    pub async fn ghost_beneficiaries(&self) -> ClientResult<GhostReport> {
        self.get_json(endpoints::GHOST_BENEFICIARIES).await
    }

    /// Hospital co-claim network
    pub async fn fraud_network(&self) -> ClientResult<FraudNetwork> {
        self.get_json(endpoints::FRAUD_NETWORK).await
    }

    /// Provider aggregates, optionally restricted to one state
    pub async fn hospitals(&self, state: Option<&str>) -> ClientResult<Vec<HospitalRow>> {
        match state {
            Some(state) if !state.is_empty() && state != "All" => {
                self.get_json_with_query(endpoints::HOSPITALS, &[("state", state)])
                    .await
            }
            _ => self.get_json(endpoints::HOSPITALS).await,
        }
    }

    /// Claim rows, optionally restricted to one hospital
    ///
    /// Without a hospital the backend returns its first 100 claims.
    pub async fn claims(&self, hospital_id: Option<&str>) -> ClientResult<Vec<Claim>> {
        match hospital_id {
            Some(id) if !id.is_empty() => {
                self.get_json_with_query(endpoints::CLAIMS, &[("hospital_id", id)])
                    .await
            }
            _ => self.get_json(endpoints::CLAIMS).await,
        }
    }

    /// Report URL with the hospital id as one encoded path segment
    fn report_url(&self, hospital_id: &str) -> ClientResult<reqwest::Url> {
        if matches!(hospital_id, "" | "." | "..") {
            return Err(ClientError::InvalidHospitalId(hospital_id.to_string()));
        }
        let mut url = reqwest::Url::parse(&self.config.url(endpoints::GENERATE_REPORT))
            .map_err(|e| ClientError::ConfigError(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| ClientError::ConfigError("endpoint cannot carry a path".to_string()))?
            .push(hospital_id);
        Ok(url)
    }

    /// Patients with claims at several hospitals
    pub async fn concurrent_claims(&self) -> ClientResult<ConcurrentReport> {
        self.get_json(endpoints::CONCURRENT_CLAIMS).await
    }

    /// Procedures billed above their package rate
    pub async fn upcoding_analysis(&self) -> ClientResult<UpcodingReport> {
        self.get_json(endpoints::UPCODING_ANALYSIS).await
    }

    /// Backend claim-store status
    pub async fn db_status(&self) -> ClientResult<BackendStatus> {
        self.get_json(endpoints::DB_STATUS).await
    }
}

#[async_trait]
impl ClaimAnalyzer for FraudScopeClient {
    async fn analyze_claim(&self, file: &UploadFile) -> ClientResult<AnalysisResult> {
        let mime = file.validate()?;

        let part = Part::bytes(file.bytes.clone())
            .file_name(file.file_name.clone())
            .mime_str(mime.as_str())?;
        let form = Form::new().part("file", part);

        let url = self.config.url(endpoints::ANALYZE_CLAIM);
        tracing::info!(file = %file.file_name, %mime, size = file.bytes.len(), "uploading claim document");
        let resp = self.client.post(&url).multipart(form).send().await?;
        decode(endpoints::ANALYZE_CLAIM, resp).await
    }
}

#[async_trait]
impl ReportSource for FraudScopeClient {
    async fn generate_report(&self, hospital_id: &str) -> ClientResult<ReportFile> {
        let url = self.report_url(hospital_id)?;
        tracing::info!(hospital_id, "requesting audit report");
        let resp = self.client.post(url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ClientError::from_status(status.as_u16(), &body));
        }

        let file_name = resp
            .headers()
            .get(CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .and_then(file_name_from_disposition)
            .unwrap_or_else(|| ReportFile::default_file_name(hospital_id));
        let bytes = resp.bytes().await?.to_vec();

        Ok(ReportFile {
            hospital_id: hospital_id.to_string(),
            file_name,
            bytes,
        })
    }
}

async fn decode<T: DeserializeOwned>(endpoint: &str, resp: Response) -> ClientResult<T> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ClientError::from_status(status.as_u16(), &body));
    }
    let bytes = resp.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|source| ClientError::DecodeError {
        endpoint: endpoint.to_string(),
        source,
    })
}
