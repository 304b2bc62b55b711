//! Ghost-beneficiary cases

use serde::{Deserialize, Serialize};

/// Headline counters of the beneficiary validation engine
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GhostSummary {
    pub total_ghost_flags: u64,
    pub unique_suspicious_beneficiaries: u64,
    pub multi_hospital_patients: u64,
    pub states_affected: u64,
    pub total_fraudulent_amount_inr: f64,
}

/// One claim tied to a suspected ghost beneficiary
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GhostCase {
    pub claim_id: String,
    pub patient_id: String,
    pub hospital_id: String,
    pub state: String,
    pub risk_score: f64,
    pub claim_amount: f64,
}

impl GhostCase {
    /// Case-insensitive substring match on patient id, hospital id or state.
    ///
    /// `needle` must already be lowercase.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        [&self.patient_id, &self.hospital_id, &self.state]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Response of `/api/ghost-beneficiaries`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GhostReport {
    pub summary: GhostSummary,
    pub cases: Vec<GhostCase>,
}

impl GhostReport {
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty() && self.summary.total_ghost_flags == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_any_designated_field() {
        let case = GhostCase {
            claim_id: "CLM_KERALA".to_string(),
            patient_id: "PMJAY-9999999".to_string(),
            hospital_id: "HOSP_0042".to_string(),
            state: "Uttar Pradesh".to_string(),
            ..Default::default()
        };
        assert!(case.matches_lowercase("pmjay-9999"));
        assert!(case.matches_lowercase("hosp_0042"));
        assert!(case.matches_lowercase("uttar"));
        // claim id is not one of the searchable fields
        assert!(!case.matches_lowercase("kerala"));
    }
}
