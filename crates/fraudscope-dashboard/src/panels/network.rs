//! Network-graph panel: ranked hospitals and hospital pairs

use crate::loader::Loader;
use fraudscope_client::FraudScopeClient;
use fraudscope_types::{FraudNetwork, NetworkEdge, NetworkNode};

/// Hospitals shown in the ranking
pub const TOP_NODES: usize = 8;
/// Hospital pairs shown in the ranking
pub const TOP_EDGES: usize = 15;

/// The `limit` riskiest nodes; equal scores keep their original order
pub fn rank_nodes(nodes: &[NetworkNode], limit: usize) -> Vec<&NetworkNode> {
    let mut ranked: Vec<&NetworkNode> = nodes.iter().collect();
    ranked.sort_by(|a, b| b.risk_score.total_cmp(&a.risk_score));
    ranked.truncate(limit);
    ranked
}

/// The `limit` most suspicious edges, re-sorted here rather than trusting
/// the upstream order; ties fall back to shared patient count, then input order
pub fn rank_edges(edges: &[NetworkEdge], limit: usize) -> Vec<&NetworkEdge> {
    let mut ranked: Vec<&NetworkEdge> = edges.iter().collect();
    ranked.sort_by(|a, b| {
        b.suspicion_score
            .total_cmp(&a.suspicion_score)
            .then(b.shared_patients.cmp(&a.shared_patients))
    });
    ranked.truncate(limit);
    ranked
}

pub struct NetworkPanel {
    pub loader: Loader<FraudNetwork>,
}

impl NetworkPanel {
    pub const NAME: &'static str = "network-graph";

    pub fn mount(client: &FraudScopeClient) -> Self {
        let client = client.clone();
        Self::new(Loader::mount(Self::NAME, async move {
            client.fraud_network().await
        }))
    }

    pub fn new(loader: Loader<FraudNetwork>) -> Self {
        Self { loader }
    }

    pub fn poll(&mut self) -> bool {
        self.loader.poll()
    }

    pub fn top_nodes(&self) -> Vec<&NetworkNode> {
        self.loader
            .data()
            .map(|n| rank_nodes(&n.nodes, TOP_NODES))
            .unwrap_or_default()
    }

    pub fn top_edges(&self) -> Vec<&NetworkEdge> {
        self.loader
            .data()
            .map(|n| rank_edges(&n.edges, TOP_EDGES))
            .unwrap_or_default()
    }

    pub fn high_centrality_count(&self) -> u64 {
        self.loader
            .data()
            .map(|n| n.high_centrality_count)
            .unwrap_or(0)
    }
}
