//! Isolation-forest output
//!
//! The model runs upstream; these types only carry its scatter sample and
//! evaluation metrics to the scatter panel.

use serde::{Deserialize, Serialize};

/// One sampled claim projected onto two normalized features
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScatterPoint {
    /// Normalized claim amount
    pub x: f64,
    /// Normalized deviation from the hospital average
    pub y: f64,
    /// Marker size hint
    pub z: f64,
    #[serde(rename = "isAnomaly")]
    pub is_anomaly: bool,
    #[serde(rename = "anomalyScore")]
    pub anomaly_score: f64,
    pub id: String,
}

/// Model quality against rule-based fraud labels
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelEvaluation {
    pub roc_auc: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
    pub note: String,
}

/// Response of `/api/isolation-forest-data`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IsolationForestReport {
    pub total_anomalies_detected: u64,
    pub contamination_rate: f64,
    pub model_n_estimators: u32,
    pub features_used: Vec<String>,
    pub evaluation: ModelEvaluation,
    pub scatter_data: Vec<ScatterPoint>,
}

impl IsolationForestReport {
    pub fn is_empty(&self) -> bool {
        self.scatter_data.is_empty() && self.total_anomalies_detected == 0
    }
}

/// Scatter sample split into the two plotted series
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScatterSeries {
    pub normal: Vec<(f64, f64)>,
    pub anomalies: Vec<(f64, f64)>,
}

impl ScatterSeries {
    /// Partition points by their `isAnomaly` flag, keeping input order
    pub fn partition(points: &[ScatterPoint]) -> Self {
        let mut series = Self::default();
        for point in points {
            if point.is_anomaly {
                series.anomalies.push((point.x, point.y));
            } else {
                series.normal.push((point.x, point.y));
            }
        }
        series
    }

    /// Axis bounds covering every point, padded by `pad` on each side
    pub fn bounds(&self, pad: f64) -> ([f64; 2], [f64; 2]) {
        let all = self.normal.iter().chain(self.anomalies.iter());
        let mut x = [f64::INFINITY, f64::NEG_INFINITY];
        let mut y = [f64::INFINITY, f64::NEG_INFINITY];
        for &(px, py) in all {
            x = [x[0].min(px), x[1].max(px)];
            y = [y[0].min(py), y[1].max(py)];
        }
        if !x[0].is_finite() {
            return ([-1.0, 1.0], [-1.0, 1.0]);
        }
        ([x[0] - pad, x[1] + pad], [y[0] - pad, y[1] + pad])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(x: f64, y: f64, is_anomaly: bool) -> ScatterPoint {
        ScatterPoint {
            x,
            y,
            is_anomaly,
            ..Default::default()
        }
    }

    #[test]
    fn test_wire_names() {
        let p: ScatterPoint = serde_json::from_str(
            r#"{"x": 1.2, "y": -0.4, "z": 80, "isAnomaly": true, "anomalyScore": 0.71, "id": "CLM_1"}"#,
        )
        .unwrap();
        assert!(p.is_anomaly);
        assert_eq!(p.anomaly_score, 0.71);
        assert_eq!(p.z, 80.0);
    }

    #[test]
    fn test_partition_preserves_order() {
        let points = vec![
            point(0.0, 0.0, false),
            point(3.0, 2.0, true),
            point(1.0, 1.0, false),
            point(-2.0, 4.0, true),
        ];
        let series = ScatterSeries::partition(&points);
        assert_eq!(series.normal, vec![(0.0, 0.0), (1.0, 1.0)]);
        assert_eq!(series.anomalies, vec![(3.0, 2.0), (-2.0, 4.0)]);
        assert_eq!(series.normal.len() + series.anomalies.len(), points.len());
    }

    #[test]
    fn test_bounds() {
        let series = ScatterSeries::partition(&[point(-1.0, 2.0, false), point(3.0, -2.0, true)]);
        assert_eq!(series.bounds(0.5), ([-1.5, 3.5], [-2.5, 2.5]));
        assert_eq!(ScatterSeries::default().bounds(0.5), ([-1.0, 1.0], [-1.0, 1.0]));
    }
}
