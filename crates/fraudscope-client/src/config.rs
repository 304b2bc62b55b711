//! Client configuration

use std::time::Duration;

/// Default backend origin
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000";

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API origin, without the `/api` prefix
    pub endpoint: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl ClientConfig {
    /// Configuration pointing at `endpoint` with default settings
    pub fn with_endpoint(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            ..Default::default()
        }
    }

    /// Absolute URL for an API path such as `/api/stats`
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.endpoint.trim_end_matches('/'), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.endpoint, "http://localhost:8000");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_url_join() {
        let config = ClientConfig::with_endpoint("http://10.0.0.5:8000/");
        assert_eq!(config.url("/api/stats"), "http://10.0.0.5:8000/api/stats");
    }
}
