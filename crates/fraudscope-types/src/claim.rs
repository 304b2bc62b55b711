//! Individual claim records

use serde::{Deserialize, Serialize};

/// One row of `/api/claims`
///
/// Rule flags arrive as `0`/`1` integers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Claim {
    pub claim_id: String,
    pub patient_id: String,
    pub hospital_id: String,
    pub state: String,
    pub procedure_code: String,
    pub claim_amount: f64,
    pub anomaly_score: f64,
    pub image_reuse_flag: u8,
    pub duplicate_flag: u8,
    pub concurrent_flag: u8,
    pub ghost_flag: u8,
    pub upcoding_flag: u8,
    pub upcoding_deviation: f64,
    pub risk_score: f64,
    pub risk_category: String,
    #[serde(rename = "is_suspicious")]
    pub suspicious_flag: u8,
}

impl Claim {
    /// Names of the rule flags raised on this claim
    pub fn flag_labels(&self) -> Vec<&'static str> {
        [
            (self.image_reuse_flag, "image reuse"),
            (self.duplicate_flag, "duplicate"),
            (self.concurrent_flag, "concurrent"),
            (self.ghost_flag, "ghost"),
            (self.upcoding_flag, "upcoding"),
        ]
        .into_iter()
        .filter(|(flag, _)| *flag != 0)
        .map(|(_, label)| label)
        .collect()
    }

    pub fn is_suspicious(&self) -> bool {
        self.suspicious_flag != 0 || self.risk_score > 60.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_row() {
        let claim: Claim = serde_json::from_str(
            r#"{"claim_id": "CLM_1A2B3C4D", "patient_id": "PMJAY-9999999",
                "hospital_id": "HOSP_0042", "state": "Bihar", "procedure_code": "PROC_004",
                "claim_amount": 1200.5, "ghost_flag": 1, "upcoding_flag": 1,
                "risk_score": 72.4, "risk_category": "High", "is_suspicious": 1}"#,
        )
        .unwrap();
        assert_eq!(claim.flag_labels(), vec!["ghost", "upcoding"]);
        assert!(claim.is_suspicious());
        assert_eq!(claim.duplicate_flag, 0);
    }

    #[test]
    fn test_clean_claim() {
        let claim = Claim {
            risk_score: 12.0,
            ..Default::default()
        };
        assert!(claim.flag_labels().is_empty());
        assert!(!claim.is_suspicious());
    }
}
