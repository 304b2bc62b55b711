//! Audit-reports panel: a fixed list of issued reports, nothing is fetched

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportStatus {
    Final,
    UnderReview,
    Draft,
}

impl ReportStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Final => "Final",
            Self::UnderReview => "Under review",
            Self::Draft => "Draft",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuditReportEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub scope: &'static str,
    pub generated: &'static str,
    pub status: ReportStatus,
}

pub const AUDIT_REPORTS: &[AuditReportEntry] = &[
    AuditReportEntry {
        id: "AR-2024-031",
        title: "Concurrent admissions across border districts",
        scope: "Bihar, Uttar Pradesh",
        generated: "2024-03-28",
        status: ReportStatus::Final,
    },
    AuditReportEntry {
        id: "AR-2024-029",
        title: "Diagnostic image reuse at HOSP_0042",
        scope: "HOSP_0042",
        generated: "2024-03-21",
        status: ReportStatus::Final,
    },
    AuditReportEntry {
        id: "AR-2024-027",
        title: "Ghost beneficiary cluster",
        scope: "Madhya Pradesh",
        generated: "2024-03-14",
        status: ReportStatus::UnderReview,
    },
    AuditReportEntry {
        id: "AR-2024-024",
        title: "Cardiac package upcoding review",
        scope: "National",
        generated: "2024-03-02",
        status: ReportStatus::UnderReview,
    },
    AuditReportEntry {
        id: "AR-2024-020",
        title: "Duplicate claim submissions, Q4",
        scope: "West Bengal",
        generated: "2024-02-19",
        status: ReportStatus::Draft,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_report_ids_unique() {
        let ids: HashSet<&str> = AUDIT_REPORTS.iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), AUDIT_REPORTS.len());
    }
}
