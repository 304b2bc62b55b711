//! Client error types

use crate::upload::UploadError;

/// Errors raised while talking to the fraud-analytics API
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Malformed response from {endpoint}: {source}")]
    DecodeError {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid hospital id: {0:?}")]
    InvalidHospitalId(String),

    #[error("Upload rejected: {0}")]
    UploadRejected(#[from] UploadError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClientError {
    /// Build an [`ClientError::ApiError`] from a non-success body.
    ///
    /// The backend reports failures as `{"detail": ...}` or
    /// `{"message": ...}`; anything else is passed through verbatim.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| {
                v.get("detail")
                    .or_else(|| v.get("message"))
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| body.trim().to_string());
        Self::ApiError { status, message }
    }

    /// Validation failures never reached the network
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::UploadRejected(_) | Self::InvalidHospitalId(_))
    }
}

/// Client result type
pub type ClientResult<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_message_extracted() {
        let err = ClientError::from_status(404, r#"{"detail": "Hospital not found"}"#);
        assert_eq!(err.to_string(), "API error: 404 - Hospital not found");
    }

    #[test]
    fn test_plain_body_passed_through() {
        let err = ClientError::from_status(502, "Bad Gateway\n");
        match err {
            ClientError::ApiError { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "Bad Gateway");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
