//! Hospital co-claim network

use serde::{Deserialize, Serialize};

/// A hospital in the co-claim network
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkNode {
    pub id: String,
    pub risk_score: f64,
}

/// Two hospitals that share patients
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkEdge {
    pub source: String,
    pub target: String,
    pub shared_patients: u64,
    pub suspicion_score: f64,
}

/// Response of `/api/fraud-network`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FraudNetwork {
    pub nodes: Vec<NetworkNode>,
    pub edges: Vec<NetworkEdge>,
    pub high_centrality_count: u64,
}

impl FraudNetwork {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}
