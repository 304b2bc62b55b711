//! FraudScope Types - View models for the claim-fraud dashboard
//!
//! Every type in this crate is a read-only view of a JSON document produced
//! by the fraud-analytics backend. Nothing here is computed locally: the
//! scoring engine, the isolation-forest model and the document forensics all
//! live behind the API.
//!
//! Fields the backend omits deserialize to zero or empty values so that a
//! partial response still renders.
//!
//! - Aggregate counters ([`StatSummary`])
//! - Timeline, regional and per-state series ([`AnalyticsSeries`], [`StateRiskRow`])
//! - Isolation-forest output ([`IsolationForestReport`])
//! - Ghost beneficiaries, collisions and upcoding ([`GhostReport`], [`ConcurrentReport`], [`UpcodingReport`])
//! - Provider network and rankings ([`FraudNetwork`], [`HospitalRow`])
//! - Individual claim rows ([`Claim`])
//! - Document analysis results ([`AnalysisResult`])

pub mod analytics;
pub mod anomaly;
pub mod beneficiary;
pub mod claim;
pub mod document;
pub mod format;
pub mod investigation;
pub mod network;
pub mod provider;
pub mod stats;

pub use analytics::*;
pub use anomaly::*;
pub use beneficiary::*;
pub use claim::*;
pub use document::*;
pub use format::*;
pub use investigation::*;
pub use network::*;
pub use provider::*;
pub use stats::*;

/// Version of the view-model schema
pub const TYPES_VERSION: &str = "0.1.0";
