//! Concurrent-claim collisions and procedure upcoding panels

use crate::loader::Loader;
use crate::panels::overview::{CardTone, StatCard};
use fraudscope_client::FraudScopeClient;
use fraudscope_types::{
    format_count, format_inr_compact, Collision, ConcurrentReport, ProcedureDeviation,
    UpcodingReport,
};

/// Collisions shown in the table
pub const TOP_COLLISIONS: usize = 10;
/// Procedures shown in the table
pub const TOP_PROCEDURES: usize = 10;

pub struct CollisionsPanel {
    pub loader: Loader<ConcurrentReport>,
}

impl CollisionsPanel {
    pub const NAME: &'static str = "concurrent-claims";

    pub fn mount(client: &FraudScopeClient) -> Self {
        let client = client.clone();
        Self::new(Loader::mount(Self::NAME, async move {
            client.concurrent_claims().await
        }))
    }

    pub fn new(loader: Loader<ConcurrentReport>) -> Self {
        Self { loader }
    }

    pub fn poll(&mut self) -> bool {
        self.loader.poll()
    }

    pub fn cards(&self) -> Vec<StatCard> {
        let Some(report) = self.loader.data() else {
            return Vec::new();
        };
        vec![
            StatCard {
                label: "Collision Flags",
                value: format_count(report.total_concurrent_flags),
                hint: "overlapping admissions".to_string(),
                tone: CardTone::Danger,
            },
            StatCard {
                label: "Patients",
                value: format_count(report.unique_collision_patients),
                hint: "seen at 2+ hospitals".to_string(),
                tone: CardTone::Warning,
            },
        ]
    }

    /// Widest collisions first: most hospitals, then most claims
    pub fn top_collisions(&self) -> Vec<&Collision> {
        let Some(report) = self.loader.data() else {
            return Vec::new();
        };
        let mut rows: Vec<&Collision> = report.top_collisions.iter().collect();
        rows.sort_by(|a, b| {
            b.hospitals_involved
                .len()
                .cmp(&a.hospitals_involved.len())
                .then(b.num_claims.cmp(&a.num_claims))
        });
        rows.truncate(TOP_COLLISIONS);
        rows
    }
}

pub struct UpcodingPanel {
    pub loader: Loader<UpcodingReport>,
}

impl UpcodingPanel {
    pub const NAME: &'static str = "upcoding";

    pub fn mount(client: &FraudScopeClient) -> Self {
        let client = client.clone();
        Self::new(Loader::mount(Self::NAME, async move {
            client.upcoding_analysis().await
        }))
    }

    pub fn new(loader: Loader<UpcodingReport>) -> Self {
        Self { loader }
    }

    pub fn poll(&mut self) -> bool {
        self.loader.poll()
    }

    pub fn cards(&self) -> Vec<StatCard> {
        let Some(report) = self.loader.data() else {
            return Vec::new();
        };
        vec![
            StatCard {
                label: "Upcoded Claims",
                value: format_count(report.total_upcoding_cases),
                hint: "billed above package rate".to_string(),
                tone: CardTone::Warning,
            },
            StatCard {
                label: "Excess Billing",
                value: format_inr_compact(report.estimated_excess_inr),
                hint: "over expected maximum".to_string(),
                tone: CardTone::Danger,
            },
        ]
    }

    /// Procedures with the largest deviation first
    pub fn top_procedures(&self) -> Vec<&ProcedureDeviation> {
        let Some(report) = self.loader.data() else {
            return Vec::new();
        };
        let mut rows: Vec<&ProcedureDeviation> = report.top_upcoded_procedures.iter().collect();
        rows.sort_by(|a, b| b.deviation_pct.total_cmp(&a.deviation_pct));
        rows.truncate(TOP_PROCEDURES);
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collision(patient_id: &str, hospitals: usize, num_claims: u64) -> Collision {
        Collision {
            patient_id: patient_id.to_string(),
            hospitals_involved: (0..hospitals).map(|i| format!("HOSP_{:04}", i)).collect(),
            num_claims,
            ..Default::default()
        }
    }

    #[test]
    fn test_collisions_widest_first() {
        let report = ConcurrentReport {
            total_concurrent_flags: 12,
            unique_collision_patients: 3,
            top_collisions: vec![
                collision("P1", 2, 9),
                collision("P2", 4, 4),
                collision("P3", 2, 20),
            ],
        };
        let panel = CollisionsPanel::new(Loader::resolved(CollisionsPanel::NAME, Ok(report)));
        let ids: Vec<&str> = panel
            .top_collisions()
            .iter()
            .map(|c| c.patient_id.as_str())
            .collect();
        assert_eq!(ids, vec!["P2", "P3", "P1"]);
        assert_eq!(panel.cards()[0].value, "12");
    }

    #[test]
    fn test_upcoding_sorted_by_deviation() {
        let report = UpcodingReport {
            total_upcoding_cases: 1200,
            estimated_excess_inr: 2_500_000.0,
            top_upcoded_procedures: vec![
                ProcedureDeviation {
                    procedure_code: "PROC_A".to_string(),
                    deviation_pct: 12.0,
                    ..Default::default()
                },
                ProcedureDeviation {
                    procedure_code: "PROC_B".to_string(),
                    deviation_pct: 48.5,
                    ..Default::default()
                },
            ],
        };
        let panel = UpcodingPanel::new(Loader::resolved(UpcodingPanel::NAME, Ok(report)));
        assert_eq!(panel.top_procedures()[0].procedure_code, "PROC_B");
        assert_eq!(panel.cards()[0].value, "1,200");
        assert_eq!(panel.cards()[1].value, "₹25.00 L");
    }

    #[test]
    fn test_empty_report_is_empty_state() {
        let panel = UpcodingPanel::new(Loader::resolved(
            UpcodingPanel::NAME,
            Ok(UpcodingReport::default()),
        ));
        assert_eq!(panel.loader.state(), &crate::loader::PanelState::Empty);
        assert!(panel.top_procedures().is_empty());
    }
}
