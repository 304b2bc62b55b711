//! FraudScope Client - Typed access to the fraud-analytics API
//!
//! The backend computes everything: risk scores, the isolation forest, the
//! co-claim network, document forensics and PDF reports. This crate only
//! fetches those results and hands them over as [`fraudscope_types`] view
//! models.
//!
//! # Quick Start
//!
//! ```ignore
//! use fraudscope_client::FraudScopeClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FraudScopeClient::connect("http://localhost:8000")?;
//!     let stats = client.stats().await?;
//!     println!("{} claims, {} flagged", stats.total_claims, stats.fraud_count);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod report;
pub mod upload;

pub use client::{endpoints, ClaimAnalyzer, FraudScopeClient, ReportSource};
pub use config::{ClientConfig, DEFAULT_ENDPOINT};
pub use error::{ClientError, ClientResult};
pub use report::{file_name_from_disposition, ReportFile};
pub use upload::{UploadError, UploadFile, MAX_UPLOAD_BYTES};

pub use fraudscope_types as types;
