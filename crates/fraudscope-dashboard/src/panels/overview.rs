//! Overview panel: headline stat cards and the activity log

use crate::loader::Loader;
use fraudscope_client::FraudScopeClient;
use fraudscope_types::{format_count, format_inr_compact, format_pct, StatSummary};

/// Emphasis of a stat card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardTone {
    Neutral,
    Warning,
    Danger,
}

/// One headline number
#[derive(Debug, Clone, PartialEq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: String,
    pub hint: String,
    pub tone: CardTone,
}

/// Severity of an activity log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Alert,
    Info,
    Success,
}

/// Fixed entries of the activity feed
pub struct ActivityEntry {
    pub when: &'static str,
    pub kind: ActivityKind,
    pub message: &'static str,
}

pub const ACTIVITY_LOG: &[ActivityEntry] = &[
    ActivityEntry {
        when: "2 min ago",
        kind: ActivityKind::Alert,
        message: "Concurrent admission detected: PMJAY-9999999 at 3 hospitals",
    },
    ActivityEntry {
        when: "11 min ago",
        kind: ActivityKind::Alert,
        message: "Diagnostic image reuse flagged at HOSP_0042",
    },
    ActivityEntry {
        when: "26 min ago",
        kind: ActivityKind::Info,
        message: "Isolation forest rescored the latest claim batch",
    },
    ActivityEntry {
        when: "48 min ago",
        kind: ActivityKind::Success,
        message: "Audit report issued for HOSP_0077",
    },
    ActivityEntry {
        when: "1 h ago",
        kind: ActivityKind::Info,
        message: "Upcoding baselines refreshed from package rates",
    },
    ActivityEntry {
        when: "3 h ago",
        kind: ActivityKind::Alert,
        message: "Ghost beneficiary cluster traced to Madhya Pradesh",
    },
];

pub struct OverviewPanel {
    pub loader: Loader<StatSummary>,
}

impl OverviewPanel {
    pub const NAME: &'static str = "overview";

    pub fn mount(client: &FraudScopeClient) -> Self {
        let client = client.clone();
        Self::new(Loader::mount(Self::NAME, async move { client.stats().await }))
    }

    pub fn new(loader: Loader<StatSummary>) -> Self {
        Self { loader }
    }

    pub fn poll(&mut self) -> bool {
        self.loader.poll()
    }

    /// Stat cards; empty until the counters arrive
    pub fn cards(&self) -> Vec<StatCard> {
        self.loader.data().map(stat_cards).unwrap_or_default()
    }
}

/// Build the card row for a set of counters
pub fn stat_cards(stats: &StatSummary) -> Vec<StatCard> {
    vec![
        StatCard {
            label: "Total Claims",
            value: format_count(stats.total_claims),
            hint: "processed".to_string(),
            tone: CardTone::Neutral,
        },
        StatCard {
            label: "Flagged",
            value: format_count(stats.fraud_count),
            hint: format!("{} of claims", format_pct(stats.fraud_rate_pct())),
            tone: CardTone::Warning,
        },
        StatCard {
            label: "Critical Cases",
            value: format_count(stats.critical_cases),
            hint: format!("avg risk {:.1}", stats.avg_risk_score),
            tone: CardTone::Danger,
        },
        StatCard {
            label: "Funds at Risk",
            value: format_inr_compact(stats.funds_at_risk_inr),
            hint: "suspicious claim value".to_string(),
            tone: CardTone::Danger,
        },
        StatCard {
            label: "Ghost Beneficiaries",
            value: format_count(stats.ghost_beneficiaries),
            hint: "invalid identities".to_string(),
            tone: CardTone::Warning,
        },
        StatCard {
            label: "Concurrent Claims",
            value: format_count(stats.concurrent_fraud),
            hint: "same patient, many hospitals".to_string(),
            tone: CardTone::Warning,
        },
        StatCard {
            label: "Upcoding",
            value: format_count(stats.upcoding_cases),
            hint: "billed above package rate".to_string(),
            tone: CardTone::Warning,
        },
    ]
}
