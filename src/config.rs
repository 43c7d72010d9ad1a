// Client configuration. The library itself never reads the environment;
// `from_env` exists for the binary and for callers that want the same
// convention.

use std::time::Duration;

/// Production endpoint of the Wordstream API.
pub const DEFAULT_BASE_URL: &str = "https://api.wordstream.com";

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    /// Per-request timeout. `None` keeps reqwest's default.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: DEFAULT_BASE_URL.into(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    /// Configuration pointing at another host, e.g. a stub server.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        ClientConfig {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Read `WORDSTREAM_API_URL` and `WORDSTREAM_TIMEOUT_SECS`, falling back
    /// to the defaults when unset or unparsable.
    pub fn from_env() -> Self {
        let mut cfg = match std::env::var("WORDSTREAM_API_URL") {
            Ok(url) if !url.trim().is_empty() => ClientConfig::new(url.trim()),
            _ => ClientConfig::default(),
        };
        if let Some(secs) = std::env::var("WORDSTREAM_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.trim().parse::<u64>().ok())
        {
            cfg.timeout = Some(Duration::from_secs(secs));
        }
        cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_production() {
        let cfg = ClientConfig::default();
        assert_eq!(cfg.base_url, "https://api.wordstream.com");
        assert!(cfg.timeout.is_none());
    }

    #[test]
    fn new_strips_trailing_slash() {
        let cfg = ClientConfig::new("http://127.0.0.1:8080/").with_timeout(Duration::from_secs(5));
        assert_eq!(cfg.base_url, "http://127.0.0.1:8080");
        assert_eq!(cfg.timeout, Some(Duration::from_secs(5)));
    }
}
