//! Provider (hospital) aggregates

use serde::{Deserialize, Serialize};

/// One row of `/api/hospitals`, already ordered by descending risk upstream
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HospitalRow {
    pub hospital_id: String,
    pub state: String,
    pub total_claims: u64,
    pub avg_claim_amount: f64,
    pub avg_risk_score: f64,
    pub image_reuse_count: u64,
    pub duplicate_count: u64,
    pub concurrent_count: u64,
    pub ghost_count: u64,
    pub upcoding_count: u64,
    pub avg_upcoding_deviation: f64,
}

impl HospitalRow {
    /// Sum of every rule-based fraud flag raised for this hospital
    pub fn total_flags(&self) -> u64 {
        self.image_reuse_count
            + self.duplicate_count
            + self.concurrent_count
            + self.ghost_count
            + self.upcoding_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_flags() {
        let row: HospitalRow = serde_json::from_str(
            r#"{"hospital_id": "HOSP_0013", "state": "Bihar", "total_claims": 112,
                "image_reuse_count": 7, "duplicate_count": 4, "ghost_count": 2}"#,
        )
        .unwrap();
        assert_eq!(row.total_flags(), 13);
        assert_eq!(row.avg_risk_score, 0.0);
    }
}
