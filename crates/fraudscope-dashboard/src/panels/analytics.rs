//! Analytics panel: claim timeline, regional split and state risk table

use crate::loader::{Loader, PanelData};
use fraudscope_client::FraudScopeClient;
use fraudscope_types::{AnalyticsSeries, RegionBucket, StateRiskRow, TimelinePoint};

/// Both responses the panel renders
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalyticsData {
    pub series: AnalyticsSeries,
    pub states: Vec<StateRiskRow>,
}

impl PanelData for AnalyticsData {
    fn is_empty(&self) -> bool {
        self.series.is_empty() && self.states.is_empty()
    }
}

pub struct AnalyticsPanel {
    pub loader: Loader<AnalyticsData>,
}

impl AnalyticsPanel {
    pub const NAME: &'static str = "analytics";

    /// Fetch the series and the state table together; either failing fails
    /// the panel
    pub fn mount(client: &FraudScopeClient) -> Self {
        let client = client.clone();
        Self::new(Loader::mount(Self::NAME, async move {
            let (series, states) =
                tokio::try_join!(client.analytics(), client.state_intelligence())?;
            Ok(AnalyticsData { series, states })
        }))
    }

    pub fn new(loader: Loader<AnalyticsData>) -> Self {
        Self { loader }
    }

    pub fn poll(&mut self) -> bool {
        self.loader.poll()
    }

    pub fn timeline(&self) -> &[TimelinePoint] {
        self.loader
            .data()
            .map(|d| d.series.timeline.as_slice())
            .unwrap_or_default()
    }

    pub fn regions(&self) -> &[RegionBucket] {
        self.loader
            .data()
            .map(|d| d.series.regions.as_slice())
            .unwrap_or_default()
    }

    /// State rows, worst threat first; equal threat keeps the upstream order
    pub fn states_by_threat(&self) -> Vec<&StateRiskRow> {
        let mut rows: Vec<&StateRiskRow> = self
            .loader
            .data()
            .map(|d| d.states.iter().collect())
            .unwrap_or_default();
        rows.sort_by(|a, b| b.threat_level.severity().cmp(&a.threat_level.severity()));
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fraudscope_types::ThreatLevel;

    fn row(state: &str, threat_level: ThreatLevel) -> StateRiskRow {
        StateRiskRow {
            state: state.to_string(),
            threat_level,
            ..Default::default()
        }
    }

    #[test]
    fn test_states_by_threat_is_stable() {
        let data = AnalyticsData {
            series: AnalyticsSeries::default(),
            states: vec![
                row("Gujarat", ThreatLevel::Low),
                row("Bihar", ThreatLevel::Critical),
                row("Kerala", ThreatLevel::High),
                row("Uttar Pradesh", ThreatLevel::Critical),
            ],
        };
        let panel = AnalyticsPanel::new(Loader::resolved(AnalyticsPanel::NAME, Ok(data)));
        let order: Vec<&str> = panel
            .states_by_threat()
            .iter()
            .map(|r| r.state.as_str())
            .collect();
        assert_eq!(order, vec!["Bihar", "Uttar Pradesh", "Kerala", "Gujarat"]);
        assert!(panel.timeline().is_empty());
    }

    #[test]
    fn test_empty_responses_mark_panel_empty() {
        let panel = AnalyticsPanel::new(Loader::resolved(
            AnalyticsPanel::NAME,
            Ok(AnalyticsData::default()),
        ));
        assert_eq!(panel.loader.state(), &crate::loader::PanelState::Empty);
    }
}
