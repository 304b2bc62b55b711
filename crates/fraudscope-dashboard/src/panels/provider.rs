//! Provider-ranking panel: hospital aggregates, page sizes and report downloads

use crate::downloads::{DownloadOutcome, ReportDownloads};
use crate::loader::Loader;
use fraudscope_client::{FraudScopeClient, ReportSource};
use fraudscope_types::HospitalRow;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Fixed page sizes offered by the ranking table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSize {
    #[default]
    Ten,
    TwentyFive,
    Fifty,
    SeventyFive,
    All,
}

impl PageSize {
    pub const OPTIONS: [PageSize; 5] = [
        Self::Ten,
        Self::TwentyFive,
        Self::Fifty,
        Self::SeventyFive,
        Self::All,
    ];

    /// Row limit, `None` for all rows
    pub fn limit(&self) -> Option<usize> {
        match self {
            Self::Ten => Some(10),
            Self::TwentyFive => Some(25),
            Self::Fifty => Some(50),
            Self::SeventyFive => Some(75),
            Self::All => None,
        }
    }

    /// Page size for a numeric option; `0` means all rows
    pub fn from_count(count: usize) -> Option<Self> {
        match count {
            0 => Some(Self::All),
            10 => Some(Self::Ten),
            25 => Some(Self::TwentyFive),
            50 => Some(Self::Fifty),
            75 => Some(Self::SeventyFive),
            _ => None,
        }
    }

    /// "Load more": the next larger size; `All` stays `All`
    pub fn next(self) -> Self {
        match self {
            Self::Ten => Self::TwentyFive,
            Self::TwentyFive => Self::Fifty,
            Self::Fifty => Self::SeventyFive,
            Self::SeventyFive | Self::All => Self::All,
        }
    }

    /// Visible row count for a list of `total` rows
    pub fn visible_len(&self, total: usize) -> usize {
        self.limit().map_or(total, |limit| limit.min(total))
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.limit() {
            Some(limit) => write!(f, "{}", limit),
            None => f.write_str("all"),
        }
    }
}

/// Truncate `rows` to the page size
pub fn paginate(rows: &[HospitalRow], page_size: PageSize) -> &[HospitalRow] {
    &rows[..page_size.visible_len(rows.len())]
}

pub struct ProviderRanking {
    pub loader: Loader<Vec<HospitalRow>>,
    page_size: PageSize,
    selected: usize,
    pub downloads: ReportDownloads,
}

impl ProviderRanking {
    pub const NAME: &'static str = "provider-ranking";

    /// Fetch hospital rows, restricted to `state` when one is given
    pub fn mount(
        client: &FraudScopeClient,
        state: Option<String>,
        download_dir: impl Into<PathBuf>,
    ) -> Self {
        let fetch_client = client.clone();
        let loader = Loader::mount(Self::NAME, async move {
            fetch_client.hospitals(state.as_deref()).await
        });
        let source: Arc<dyn ReportSource> = Arc::new(client.clone());
        Self::new(loader, ReportDownloads::new(source, download_dir))
    }

    pub fn new(loader: Loader<Vec<HospitalRow>>, downloads: ReportDownloads) -> Self {
        Self {
            loader,
            page_size: PageSize::default(),
            selected: 0,
            downloads,
        }
    }

    /// Poll the fetch and collect finished downloads
    pub fn poll(&mut self) -> (bool, Vec<DownloadOutcome>) {
        let changed = self.loader.poll();
        (changed, self.downloads.poll())
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.page_size = page_size;
        self.clamp_selection();
    }

    pub fn load_more(&mut self) {
        self.set_page_size(self.page_size.next());
    }

    pub fn total(&self) -> usize {
        self.loader.data().map_or(0, Vec::len)
    }

    /// Rows currently shown
    pub fn visible(&self) -> &[HospitalRow] {
        self.loader
            .data()
            .map(|rows| paginate(rows, self.page_size))
            .unwrap_or_default()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.visible().len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        let len = self.visible().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    /// Download the report for the selected row; returns the hospital id
    /// when a download actually started
    pub fn download_selected(&mut self) -> Option<String> {
        let id = self.visible().get(self.selected)?.hospital_id.clone();
        self.downloads.trigger(&id).then_some(id)
    }
}
