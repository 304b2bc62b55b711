//! Aggregate counters and backend status

use serde::{Deserialize, Serialize};

/// Headline counters shown as stat cards on the overview panel
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatSummary {
    pub total_claims: u64,
    pub fraud_count: u64,
    pub avg_risk_score: f64,
    pub critical_cases: u64,
    pub ghost_beneficiaries: u64,
    pub concurrent_fraud: u64,
    pub upcoding_cases: u64,
    /// Suspicious claim value, already converted to rupees upstream
    pub funds_at_risk_inr: f64,
}

impl StatSummary {
    /// Share of claims flagged as fraudulent, in percent
    pub fn fraud_rate_pct(&self) -> f64 {
        if self.total_claims == 0 {
            return 0.0;
        }
        self.fraud_count as f64 * 100.0 / self.total_claims as f64
    }

    /// True when the backend returned nothing worth a card
    pub fn is_empty(&self) -> bool {
        self.total_claims == 0 && self.fraud_count == 0
    }
}

/// Health of the backend claim store (`/api/db-status`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendStatus {
    pub sqlite_active: bool,
    pub total_rows: Option<u64>,
    pub tables: Vec<String>,
    pub error: Option<String>,
}

impl BackendStatus {
    /// One-line label for the shell header
    pub fn label(&self) -> String {
        match (self.sqlite_active, self.total_rows, &self.error) {
            (true, Some(rows), _) => format!("store online ({} rows)", rows),
            (true, None, _) => "store online".to_string(),
            (false, _, Some(err)) => format!("store offline: {}", err),
            (false, _, None) => "store offline".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_stats_default_to_zero() {
        let stats: StatSummary = serde_json::from_str(r#"{"total_claims": 10000}"#).unwrap();
        assert_eq!(stats.total_claims, 10000);
        assert_eq!(stats.fraud_count, 0);
        assert_eq!(stats.funds_at_risk_inr, 0.0);
        assert!(!stats.is_empty());
    }

    #[test]
    fn test_fraud_rate() {
        let stats = StatSummary {
            total_claims: 200,
            fraud_count: 30,
            ..Default::default()
        };
        assert!((stats.fraud_rate_pct() - 15.0).abs() < f64::EPSILON);
        assert_eq!(StatSummary::default().fraud_rate_pct(), 0.0);
    }

    #[test]
    fn test_backend_status_label() {
        let online: BackendStatus =
            serde_json::from_str(r#"{"sqlite_active": true, "total_rows": 10000}"#).unwrap();
        assert_eq!(online.label(), "store online (10000 rows)");

        let offline: BackendStatus =
            serde_json::from_str(r#"{"sqlite_active": false, "error": "locked"}"#).unwrap();
        assert_eq!(offline.label(), "store offline: locked");
    }
}
