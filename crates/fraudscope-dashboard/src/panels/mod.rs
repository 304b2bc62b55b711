//! Display panels, one fetch-and-render cycle each

pub mod analytics;
pub mod anomaly;
pub mod beneficiary;
pub mod document;
pub mod investigation;
pub mod network;
pub mod overview;
pub mod provider;
pub mod reports;

pub use analytics::{AnalyticsData, AnalyticsPanel};
pub use anomaly::AnomalyPanel;
pub use beneficiary::{filter_cases, BeneficiaryScanner};
pub use document::{progress_at, DocumentInvestigation, DocumentState};
pub use investigation::{CollisionsPanel, UpcodingPanel};
pub use network::{rank_edges, rank_nodes, NetworkPanel, TOP_EDGES, TOP_NODES};
pub use overview::{stat_cards, ActivityEntry, ActivityKind, CardTone, OverviewPanel, StatCard, ACTIVITY_LOG};
pub use provider::{paginate, PageSize, ProviderRanking};
pub use reports::{AuditReportEntry, ReportStatus, AUDIT_REPORTS};
