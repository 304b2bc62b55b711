//! Anomaly-detection panel: isolation-forest scatter with an explanation overlay

use crate::loader::Loader;
use fraudscope_client::FraudScopeClient;
use fraudscope_types::{format_pct, IsolationForestReport, ScatterSeries};

pub struct AnomalyPanel {
    pub loader: Loader<IsolationForestReport>,
    series: Option<ScatterSeries>,
    /// Whether the explanation overlay is shown over the plot
    pub show_overlay: bool,
}

impl AnomalyPanel {
    pub const NAME: &'static str = "anomaly-detection";

    pub fn mount(client: &FraudScopeClient) -> Self {
        let client = client.clone();
        Self::new(Loader::mount(Self::NAME, async move {
            client.isolation_forest().await
        }))
    }

    pub fn new(loader: Loader<IsolationForestReport>) -> Self {
        let mut panel = Self {
            loader,
            series: None,
            show_overlay: true,
        };
        panel.refresh_series();
        panel
    }

    pub fn poll(&mut self) -> bool {
        let changed = self.loader.poll();
        if changed {
            self.refresh_series();
        }
        changed
    }

    pub async fn settle(&mut self) {
        self.loader.settle().await;
        self.refresh_series();
    }

    fn refresh_series(&mut self) {
        self.series = self
            .loader
            .data()
            .map(|report| ScatterSeries::partition(&report.scatter_data));
    }

    /// Normal and anomalous points, once loaded
    pub fn series(&self) -> Option<&ScatterSeries> {
        self.series.as_ref()
    }

    pub fn toggle_overlay(&mut self) {
        self.show_overlay = !self.show_overlay;
    }

    /// Explanation text for the overlay
    pub fn overlay_lines(&self) -> Vec<String> {
        let Some(report) = self.loader.data() else {
            return Vec::new();
        };
        let eval = &report.evaluation;
        let mut lines = vec![
            format!(
                "Isolation forest, {} trees, contamination {}",
                report.model_n_estimators,
                format_pct(report.contamination_rate * 100.0)
            ),
            format!(
                "{} anomalies detected across the claim set",
                report.total_anomalies_detected
            ),
            format!(
                "ROC-AUC {:.3} | precision {:.3} | recall {:.3} | F1 {:.3}",
                eval.roc_auc, eval.precision, eval.recall, eval.f1_score
            ),
            "Short isolation paths mark claims that split away from the bulk early".to_string(),
            "x: normalized claim amount, y: deviation from hospital average".to_string(),
        ];
        if !report.features_used.is_empty() {
            lines.push(format!("features: {}", report.features_used.join(", ")));
        }
        if !eval.note.is_empty() {
            lines.push(eval.note.clone());
        }
        lines
    }
}
