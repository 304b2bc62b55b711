//! Concurrent-claim collisions and procedure upcoding

use serde::{Deserialize, Serialize};

/// One patient id seen at several hospitals
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Collision {
    pub patient_id: String,
    pub hospitals_involved: Vec<String>,
    pub num_claims: u64,
    pub max_risk_score: f64,
    pub states: Vec<String>,
}

/// Response of `/api/concurrent-claims`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConcurrentReport {
    pub total_concurrent_flags: u64,
    pub unique_collision_patients: u64,
    pub top_collisions: Vec<Collision>,
}

impl ConcurrentReport {
    pub fn is_empty(&self) -> bool {
        self.top_collisions.is_empty() && self.total_concurrent_flags == 0
    }
}

/// Billing of one procedure against its package rate
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcedureDeviation {
    pub procedure_code: String,
    pub procedure_name: String,
    pub avg_billed_inr: f64,
    pub expected_max_inr: f64,
    pub deviation_pct: f64,
    pub upcoded_claims: u64,
}

/// Response of `/api/upcoding-analysis`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpcodingReport {
    pub total_upcoding_cases: u64,
    pub estimated_excess_inr: f64,
    pub top_upcoded_procedures: Vec<ProcedureDeviation>,
}

impl UpcodingReport {
    pub fn is_empty(&self) -> bool {
        self.top_upcoded_procedures.is_empty() && self.total_upcoding_cases == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concurrent_report() {
        let report: ConcurrentReport = serde_json::from_str(
            r#"{"total_concurrent_flags": 200, "unique_collision_patients": 41,
                "top_collisions": [{"patient_id": "PMJAY-9999999",
                    "hospitals_involved": ["HOSP_0001", "HOSP_0042"],
                    "num_claims": 50, "max_risk_score": 97.1,
                    "states": ["Bihar"]}]}"#,
        )
        .unwrap();
        assert_eq!(report.top_collisions[0].hospitals_involved.len(), 2);
        assert!(!report.is_empty());
    }

    #[test]
    fn test_empty_upcoding() {
        let report: UpcodingReport = serde_json::from_str("{}").unwrap();
        assert!(report.is_empty());
    }
}
