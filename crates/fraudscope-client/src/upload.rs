//! Claim document uploads
//!
//! A document is validated locally before it may be sent: the MIME type
//! must be on the allow-list and the body must be non-empty and no larger
//! than [`MAX_UPLOAD_BYTES`]. Rejected files never reach the network.

use fraudscope_types::{mime_from_file_name, DocumentMime};
use std::path::Path;

/// Largest document the analysis endpoint accepts
pub const MAX_UPLOAD_BYTES: u64 = 50 * 1024 * 1024;

/// Why a document was refused before upload
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("{file_name}: unsupported file type {mime} (PDF, JPEG or PNG only)")]
    UnsupportedType { file_name: String, mime: String },

    #[error("{file_name}: file is empty")]
    Empty { file_name: String },

    #[error("{file_name}: file too large ({size} bytes, limit {limit})")]
    TooLarge { file_name: String, size: u64, limit: u64 },

    #[error("{file_name}: {source}")]
    Read {
        file_name: String,
        #[source]
        source: std::io::Error,
    },
}

/// A document selected for analysis
#[derive(Debug, Clone, PartialEq)]
pub struct UploadFile {
    pub file_name: String,
    /// MIME type as reported by the picker
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(file_name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime: mime.into(),
            bytes,
        }
    }

    /// Read a document from disk, deriving its MIME type from the extension.
    ///
    /// The type is checked before the file is read so that a rejected
    /// selection costs nothing.
    pub async fn from_path(path: &Path) -> Result<Self, UploadError> {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let mime = mime_from_file_name(&file_name);
        if DocumentMime::parse(mime).is_none() {
            return Err(UploadError::UnsupportedType {
                file_name,
                mime: mime.to_string(),
            });
        }

        let metadata = tokio::fs::metadata(path).await.map_err(|source| UploadError::Read {
            file_name: file_name.clone(),
            source,
        })?;
        if metadata.len() > MAX_UPLOAD_BYTES {
            return Err(UploadError::TooLarge {
                file_name,
                size: metadata.len(),
                limit: MAX_UPLOAD_BYTES,
            });
        }

        let bytes = tokio::fs::read(path).await.map_err(|source| UploadError::Read {
            file_name: file_name.clone(),
            source,
        })?;
        let file = Self::new(file_name, mime, bytes);
        file.validate()?;
        Ok(file)
    }

    /// Check the document against the allow-list and size limits
    pub fn validate(&self) -> Result<DocumentMime, UploadError> {
        let mime = DocumentMime::parse(&self.mime).ok_or_else(|| UploadError::UnsupportedType {
            file_name: self.file_name.clone(),
            mime: self.mime.clone(),
        })?;
        if self.bytes.is_empty() {
            return Err(UploadError::Empty {
                file_name: self.file_name.clone(),
            });
        }
        let size = self.bytes.len() as u64;
        if size > MAX_UPLOAD_BYTES {
            return Err(UploadError::TooLarge {
                file_name: self.file_name.clone(),
                size,
                limit: MAX_UPLOAD_BYTES,
            });
        }
        Ok(mime)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_allowed_types() {
        let pdf = UploadFile::new("claim.pdf", "application/pdf", b"%PDF-1.4".to_vec());
        assert_eq!(pdf.validate().unwrap(), DocumentMime::Pdf);

        let png = UploadFile::new("xray.png", "image/png", vec![0x89, b'P', b'N', b'G']);
        assert_eq!(png.validate().unwrap(), DocumentMime::Png);
    }

    #[test]
    fn test_validate_rejects_other_types() {
        let gif = UploadFile::new("scan.gif", "image/gif", vec![1, 2, 3]);
        assert!(matches!(
            gif.validate(),
            Err(UploadError::UnsupportedType { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_empty() {
        let empty = UploadFile::new("claim.pdf", "application/pdf", Vec::new());
        assert!(matches!(empty.validate(), Err(UploadError::Empty { .. })));
    }

    #[tokio::test]
    async fn test_from_path_reads_allowed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("discharge.JPG");
        std::fs::write(&path, [0xFF, 0xD8, 0xFF, 0xE0]).unwrap();

        let file = UploadFile::from_path(&path).await.unwrap();
        assert_eq!(file.file_name, "discharge.JPG");
        assert_eq!(file.mime, "image/jpeg");
        assert_eq!(file.bytes.len(), 4);
    }

    #[tokio::test]
    async fn test_from_path_rejects_before_reading() {
        // the file does not exist; the type check must fire first
        let err = UploadFile::from_path(Path::new("/nonexistent/notes.txt"))
            .await
            .unwrap_err();
        assert!(matches!(err, UploadError::UnsupportedType { .. }));
    }
}
