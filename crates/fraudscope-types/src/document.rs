//! Document analysis results and the accepted upload types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Upload types the analysis endpoint accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentMime {
    Pdf,
    Jpeg,
    Png,
}

impl DocumentMime {
    pub const ALLOWED: [DocumentMime; 3] = [Self::Pdf, Self::Jpeg, Self::Png];

    /// Match a MIME type string against the allow-list
    pub fn parse(mime: &str) -> Option<Self> {
        match mime.trim().to_ascii_lowercase().as_str() {
            "application/pdf" => Some(Self::Pdf),
            "image/jpeg" => Some(Self::Jpeg),
            "image/png" => Some(Self::Png),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
        }
    }
}

impl fmt::Display for DocumentMime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// MIME type a file picker would report for `file_name`, judged by extension
pub fn mime_from_file_name(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "pdf" => "application/pdf",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "tif" | "tiff" => "image/tiff",
        "txt" => "text/plain",
        "csv" => "text/csv",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        _ => "application/octet-stream",
    }
}

/// Structured fields extracted from one uploaded claim document
///
/// The backend answers in snake_case; camelCase is accepted too.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisResult {
    #[serde(alias = "patientId")]
    pub patient_id: String,
    #[serde(alias = "hospitalId")]
    pub hospital_id: String,
    #[serde(alias = "procedureCode")]
    pub procedure_code: String,
    /// Pre-formatted by the backend, e.g. `₹45,000`
    #[serde(alias = "claimedAmount")]
    pub claimed_amount: String,
    #[serde(alias = "riskScore")]
    pub risk_score: f64,
    pub confidence: f64,
    pub flags: Vec<String>,
    /// Number of documents the forensics archive compared against
    #[serde(alias = "archiveSize")]
    pub archive_size: u64,
}

impl AnalysisResult {
    /// A document is treated as suspicious once it carries any flag or a
    /// risk score above 60
    pub fn is_suspicious(&self) -> bool {
        !self.flags.is_empty() || self.risk_score > 60.0
    }
}
