//! FraudScope Dashboard - Panel lifecycle and view logic
//!
//! Each panel fetches its own data when it is mounted and renders from
//! panel-local state only:
//!
//! ```text
//! mount ──► Loading ──► Loaded(data) | Empty | Failed(message)
//!   │
//!   └── drop ──► in-flight request aborted
//! ```
//!
//! Nothing is shared between panels and nothing is cached across mounts.
//! Rendering lives in `fraudscope-tui`; this crate owns the state machines
//! and the client-side filtering, pagination and ranking rules.

pub mod dashboard;
pub mod downloads;
pub mod loader;
pub mod panels;
pub mod shell;

pub use dashboard::{Dashboard, DashboardOptions, HomePanels};
pub use downloads::{DownloadOutcome, ReportDownloads};
pub use loader::{describe, Loader, PanelData, PanelState};
pub use panels::*;
pub use shell::{Section, Shell, View};
