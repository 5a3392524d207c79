//! Client configuration.

/// Default service root, matching the development deployment.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api/v1";

/// Environment variable overriding the service root.
pub const BASE_URL_ENV: &str = "AUTOSHOP_API_URL";

/// Configuration for connecting to the shop-management service.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Service root, including the API prefix (e.g.
    /// `http://localhost:8000/api/v1`).
    pub base_url: String,

    /// Request timeout in seconds.
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a configuration pointing at the given service root.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
        }
    }

    /// Read the service root from `AUTOSHOP_API_URL`, falling back to the
    /// development default.
    pub fn from_env() -> Self {
        let base_url = std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_the_development_service() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, 30);
    }

    #[test]
    fn builder_overrides_timeout() {
        let config = ClientConfig::new("http://shop.internal/api/v1").with_timeout(5);
        assert_eq!(config.timeout, 5);
        assert_eq!(config.base_url, "http://shop.internal/api/v1");
    }
}
