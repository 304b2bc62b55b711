//! Timeline, regional and per-state risk series

use serde::{Deserialize, Serialize};
use std::fmt;

/// One month of claim processing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelinePoint {
    pub month: String,
    pub processed: u64,
    pub flagged: u64,
    /// Rupees recovered by flagging, when the backend reports it
    pub saved: f64,
}

/// Legitimate vs fraudulent claim counts for one region
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionBucket {
    pub region: String,
    pub legitimate: u64,
    pub fraudulent: u64,
}

impl RegionBucket {
    pub fn total(&self) -> u64 {
        self.legitimate + self.fraudulent
    }
}

/// Response of `/api/analytics`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsSeries {
    pub timeline: Vec<TimelinePoint>,
    pub regions: Vec<RegionBucket>,
}

impl AnalyticsSeries {
    pub fn is_empty(&self) -> bool {
        self.timeline.is_empty() && self.regions.is_empty()
    }

    /// Largest `processed` value, used to scale the timeline chart
    pub fn peak_processed(&self) -> u64 {
        self.timeline.iter().map(|p| p.processed).max().unwrap_or(0)
    }
}

/// Categorical threat label assigned upstream
///
/// Labels the dashboard does not know collapse into [`ThreatLevel::Unknown`]
/// instead of failing the whole response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThreatLevel {
    Critical,
    High,
    Elevated,
    Low,
    #[default]
    #[serde(other)]
    Unknown,
}

impl ThreatLevel {
    /// Ordering weight, higher is worse
    pub fn severity(&self) -> u8 {
        match self {
            Self::Critical => 4,
            Self::High => 3,
            Self::Elevated => 2,
            Self::Low => 1,
            Self::Unknown => 0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Elevated => "Elevated",
            Self::Low => "Low",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for ThreatLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of `/api/state-intelligence`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StateRiskRow {
    pub state: String,
    pub total_claims: u64,
    pub fraud_count: u64,
    pub fraud_rate_pct: f64,
    pub avg_risk_score: f64,
    pub threat_level: ThreatLevel,
    pub primary_fraud_type: String,
    pub ghost_beneficiaries: u64,
    pub concurrent_claims: u64,
    pub upcoding_cases: u64,
    pub estimated_loss_inr: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threat_level_parsing() {
        let row: StateRiskRow = serde_json::from_str(
            r#"{"state": "Bihar", "threat_level": "Critical", "fraud_rate_pct": 24.3}"#,
        )
        .unwrap();
        assert_eq!(row.threat_level, ThreatLevel::Critical);
        assert_eq!(row.total_claims, 0);

        let odd: StateRiskRow =
            serde_json::from_str(r#"{"state": "Goa", "threat_level": "Severe"}"#).unwrap();
        assert_eq!(odd.threat_level, ThreatLevel::Unknown);
    }

    #[test]
    fn test_threat_severity_order() {
        assert!(ThreatLevel::Critical.severity() > ThreatLevel::High.severity());
        assert!(ThreatLevel::High.severity() > ThreatLevel::Elevated.severity());
        assert!(ThreatLevel::Elevated.severity() > ThreatLevel::Low.severity());
        assert_eq!(ThreatLevel::Elevated.to_string(), "Elevated");
    }

    #[test]
    fn test_analytics_series() {
        let series: AnalyticsSeries = serde_json::from_str(
            r#"{
                "timeline": [
                    {"month": "Jan", "processed": 2100, "flagged": 310, "saved": 120000},
                    {"month": "Feb", "processed": 1570, "flagged": 240}
                ],
                "regions": [{"region": "Bihar", "legitimate": 800, "fraudulent": 260}]
            }"#,
        )
        .unwrap();
        assert_eq!(series.peak_processed(), 2100);
        assert_eq!(series.timeline[1].saved, 0.0);
        assert_eq!(series.regions[0].total(), 1060);
        assert!(AnalyticsSeries::default().is_empty());
    }
}
