//! Beneficiary-scanner panel: ghost-beneficiary cases with live search

use crate::loader::Loader;
use crate::panels::overview::{CardTone, StatCard};
use fraudscope_client::FraudScopeClient;
use fraudscope_types::{format_count, format_inr_compact, GhostCase, GhostReport};

/// Cases whose patient id, hospital id or state contains `query`, ignoring
/// case. The query is used as typed, whitespace included; the empty query
/// keeps every case.
pub fn filter_cases<'a>(cases: &'a [GhostCase], query: &str) -> Vec<&'a GhostCase> {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return cases.iter().collect();
    }
    cases
        .iter()
        .filter(|case| case.matches_lowercase(&needle))
        .collect()
}

pub struct BeneficiaryScanner {
    pub loader: Loader<GhostReport>,
    query: String,
}

impl BeneficiaryScanner {
    pub const NAME: &'static str = "beneficiary-scanner";

    pub fn mount(client: &FraudScopeClient) -> Self {
        let client = client.clone();
        Self::new(Loader::mount(Self::NAME, async move {
            client.ghost_beneficiaries().await
        }))
    }

    pub fn new(loader: Loader<GhostReport>) -> Self {
        Self {
            loader,
            query: String::new(),
        }
    }

    pub fn poll(&mut self) -> bool {
        self.loader.poll()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
    }

    pub fn pop_char(&mut self) {
        self.query.pop();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    /// Rows for the table body, recomputed against the full result set
    pub fn visible(&self) -> Vec<&GhostCase> {
        self.loader
            .data()
            .map(|report| filter_cases(&report.cases, &self.query))
            .unwrap_or_default()
    }

    pub fn total_cases(&self) -> usize {
        self.loader.data().map(|r| r.cases.len()).unwrap_or(0)
    }

    pub fn cards(&self) -> Vec<StatCard> {
        let Some(report) = self.loader.data() else {
            return Vec::new();
        };
        let summary = &report.summary;
        vec![
            StatCard {
                label: "Ghost Flags",
                value: format_count(summary.total_ghost_flags),
                hint: "claims on invalid identities".to_string(),
                tone: CardTone::Danger,
            },
            StatCard {
                label: "Suspicious IDs",
                value: format_count(summary.unique_suspicious_beneficiaries),
                hint: "unique beneficiaries".to_string(),
                tone: CardTone::Warning,
            },
            StatCard {
                label: "Multi-Hospital",
                value: format_count(summary.multi_hospital_patients),
                hint: "patients at 3+ hospitals".to_string(),
                tone: CardTone::Warning,
            },
            StatCard {
                label: "States Affected",
                value: format_count(summary.states_affected),
                hint: "with ghost claims".to_string(),
                tone: CardTone::Neutral,
            },
            StatCard {
                label: "Exposure",
                value: format_inr_compact(summary.total_fraudulent_amount_inr),
                hint: "paid to ghost identities".to_string(),
                tone: CardTone::Danger,
            },
        ]
    }
}
