//! Composition root: the navigation shell and whichever panels are mounted
//!
//! Panels exist only while their view is shown. Switching views drops the
//! old view's panels, which aborts their requests, and mounts fresh ones
//! that fetch again.

use crate::loader::Loader;
use crate::panels::{
    AnalyticsPanel, AnomalyPanel, BeneficiaryScanner, CollisionsPanel, DocumentInvestigation,
    NetworkPanel, OverviewPanel, ProviderRanking, UpcodingPanel,
};
use crate::shell::{Section, Shell, View};
use fraudscope_client::{ClaimAnalyzer, FraudScopeClient};
use fraudscope_types::BackendStatus;
use std::path::PathBuf;
use std::sync::Arc;

/// Startup choices that outlive individual panels
#[derive(Debug, Clone)]
pub struct DashboardOptions {
    /// Where downloaded reports are written
    pub download_dir: PathBuf,
    /// Restrict the provider ranking to one state
    pub hospital_state: Option<String>,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            download_dir: PathBuf::from("."),
            hospital_state: None,
        }
    }
}

/// Every panel of the home view
pub struct HomePanels {
    pub overview: OverviewPanel,
    pub analytics: AnalyticsPanel,
    pub network: NetworkPanel,
    pub beneficiaries: BeneficiaryScanner,
    pub collisions: CollisionsPanel,
    pub upcoding: UpcodingPanel,
    pub providers: ProviderRanking,
    pub documents: DocumentInvestigation,
}

impl HomePanels {
    pub fn mount(client: &FraudScopeClient, options: &DashboardOptions) -> Self {
        let analyzer: Arc<dyn ClaimAnalyzer> = Arc::new(client.clone());
        Self {
            overview: OverviewPanel::mount(client),
            analytics: AnalyticsPanel::mount(client),
            network: NetworkPanel::mount(client),
            beneficiaries: BeneficiaryScanner::mount(client),
            collisions: CollisionsPanel::mount(client),
            upcoding: UpcodingPanel::mount(client),
            providers: ProviderRanking::mount(
                client,
                options.hospital_state.clone(),
                options.download_dir.clone(),
            ),
            documents: DocumentInvestigation::new(analyzer),
        }
    }

    /// Poll every panel; the latest finished download replaces `notice`
    pub fn poll(&mut self, notice: &mut Option<String>) -> bool {
        let mut changed = false;
        changed |= self.overview.poll();
        changed |= self.analytics.poll();
        changed |= self.network.poll();
        changed |= self.beneficiaries.poll();
        changed |= self.collisions.poll();
        changed |= self.upcoding.poll();
        let (rows_changed, downloads) = self.providers.poll();
        changed |= rows_changed || !downloads.is_empty();
        if let Some(last) = downloads.last() {
            *notice = Some(last.message());
        }
        changed |= self.documents.poll();
        changed
    }
}

pub struct Dashboard {
    client: FraudScopeClient,
    options: DashboardOptions,
    shell: Shell,
    home: Option<HomePanels>,
    models: Option<AnomalyPanel>,
    status: Loader<BackendStatus>,
    /// Status-line message; each new one replaces the last
    notice: Option<String>,
}

impl Dashboard {
    /// Mount the home view and the status line. Must run inside a tokio
    /// runtime.
    pub fn new(client: FraudScopeClient, options: DashboardOptions) -> Self {
        let status_client = client.clone();
        let status = Loader::mount("db-status", async move { status_client.db_status().await });
        let home = HomePanels::mount(&client, &options);
        tracing::info!(endpoint = client.endpoint(), "dashboard started");
        Self {
            client,
            options,
            shell: Shell::default(),
            home: Some(home),
            models: None,
            status,
            notice: None,
        }
    }

    pub fn client(&self) -> &FraudScopeClient {
        &self.client
    }

    pub fn options(&self) -> &DashboardOptions {
        &self.options
    }

    pub fn shell(&self) -> &Shell {
        &self.shell
    }

    pub fn view(&self) -> View {
        self.shell.view()
    }

    pub fn active(&self) -> Section {
        self.shell.active()
    }

    pub fn next_section(&mut self) {
        self.shell.next_section();
    }

    pub fn prev_section(&mut self) {
        self.shell.prev_section();
    }

    pub fn scroll_to(&mut self, section: Section) {
        self.shell.scroll_to(section);
    }

    /// Switch views, unmounting the old panels and mounting the new ones
    pub fn set_view(&mut self, view: View) {
        if !self.shell.set_view(view) {
            return;
        }
        match view {
            View::Home => {
                self.models = None;
                self.home = Some(HomePanels::mount(&self.client, &self.options));
            }
            View::Models => {
                self.home = None;
                self.models = Some(AnomalyPanel::mount(&self.client));
            }
        }
    }

    pub fn toggle_view(&mut self) {
        self.set_view(self.view().toggle());
    }

    pub fn home(&self) -> Option<&HomePanels> {
        self.home.as_ref()
    }

    pub fn home_mut(&mut self) -> Option<&mut HomePanels> {
        self.home.as_mut()
    }

    pub fn models(&self) -> Option<&AnomalyPanel> {
        self.models.as_ref()
    }

    pub fn models_mut(&mut self) -> Option<&mut AnomalyPanel> {
        self.models.as_mut()
    }

    pub fn status(&self) -> &Loader<BackendStatus> {
        &self.status
    }

    /// Header text for the backend store
    pub fn status_label(&self) -> String {
        if let Some(status) = self.status.data() {
            return status.label();
        }
        match self.status.state().error() {
            Some(err) => format!("backend: {}", err),
            None => "backend: checking".to_string(),
        }
    }

    /// Poll everything mounted; returns true when something changed
    pub fn poll(&mut self) -> bool {
        let mut changed = self.status.poll();
        if let Some(home) = self.home.as_mut() {
            changed |= home.poll(&mut self.notice);
        }
        if let Some(models) = self.models.as_mut() {
            changed |= models.poll();
        }
        changed
    }

    /// Show a message on the status line
    pub fn notify(&mut self, message: impl Into<String>) {
        self.notice = Some(message.into());
    }

    /// Most recent status-line message
    pub fn last_notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn offline_dashboard() -> Dashboard {
        let client = FraudScopeClient::connect("http://127.0.0.1:9").unwrap();
        Dashboard::new(client, DashboardOptions::default())
    }

    #[tokio::test]
    async fn test_notice_keeps_only_latest() {
        let mut dashboard = offline_dashboard();
        assert_eq!(dashboard.last_notice(), None);

        dashboard.notify("analyzing claim.pdf");
        dashboard.notify("generating report for HOSP_0001");
        assert_eq!(dashboard.last_notice(), Some("generating report for HOSP_0001"));

        dashboard.clear_notice();
        assert_eq!(dashboard.last_notice(), None);
    }

    #[tokio::test]
    async fn test_download_outcome_replaces_notice() {
        let mut dashboard = offline_dashboard();
        dashboard.notify("generating report for HOSP_0007");
        let home = dashboard.home_mut().unwrap();
        assert!(home.providers.downloads.trigger("HOSP_0007"));

        for _ in 0..200 {
            dashboard.poll();
            if dashboard
                .last_notice()
                .is_some_and(|n| n.starts_with("report for HOSP_0007 failed"))
            {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        let notice = dashboard.last_notice().unwrap();
        assert!(notice.starts_with("report for HOSP_0007 failed"), "{}", notice);
    }
}
