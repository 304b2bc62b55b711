//! Generated audit reports

use std::path::{Path, PathBuf};

/// A binary report returned by `/api/generate-report/{id}`
#[derive(Debug, Clone, PartialEq)]
pub struct ReportFile {
    pub hospital_id: String,
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ReportFile {
    /// Name used when the response does not carry one
    pub fn default_file_name(hospital_id: &str) -> String {
        format!("audit_report_{}.pdf", hospital_id)
    }

    /// Write the report into `dir`, returning the full path.
    ///
    /// Only the final path component of the server-supplied name is used.
    pub async fn save_to(&self, dir: &Path) -> std::io::Result<PathBuf> {
        let name = Path::new(&self.file_name)
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| Self::default_file_name(&self.hospital_id).into());
        tokio::fs::create_dir_all(dir).await?;
        let path = dir.join(name);
        tokio::fs::write(&path, &self.bytes).await?;
        Ok(path)
    }
}

/// Pull the file name out of a `Content-Disposition` header value
pub fn file_name_from_disposition(value: &str) -> Option<String> {
    value.split(';').map(str::trim).find_map(|part| {
        let (key, raw) = part.split_once('=')?;
        if !key.trim().eq_ignore_ascii_case("filename") {
            return None;
        }
        let name = raw.trim().trim_matches('"');
        if name.is_empty() {
            None
        } else {
            Some(name.to_string())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disposition_quoted() {
        assert_eq!(
            file_name_from_disposition(r#"attachment; filename="audit_HOSP_0042.pdf""#),
            Some("audit_HOSP_0042.pdf".to_string())
        );
    }

    #[test]
    fn test_disposition_bare_and_missing() {
        assert_eq!(
            file_name_from_disposition("attachment; filename=report.pdf"),
            Some("report.pdf".to_string())
        );
        assert_eq!(file_name_from_disposition("inline"), None);
        assert_eq!(file_name_from_disposition("attachment; filename=\"\""), None);
    }

    #[tokio::test]
    async fn test_save_strips_directories() {
        let dir = tempfile::tempdir().unwrap();
        let report = ReportFile {
            hospital_id: "HOSP_0013".to_string(),
            file_name: "../../etc/audit.pdf".to_string(),
            bytes: b"%PDF-1.4".to_vec(),
        };
        let path = report.save_to(dir.path()).await.unwrap();
        assert_eq!(path, dir.path().join("audit.pdf"));
        assert_eq!(std::fs::read(path).unwrap(), b"%PDF-1.4");
    }
}
