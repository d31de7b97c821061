//! Client configuration

use std::time::Duration;

/// Default key-issuing endpoint
pub const DEFAULT_KEY_URL: &str = "https://731xy9c2ak.execute-api.eu-north-1.amazonaws.com/key";

/// Default booking endpoint
pub const DEFAULT_BOOKING_URL: &str =
    "https://731xy9c2ak.execute-api.eu-north-1.amazonaws.com/booking";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration for the booking service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Endpoint that issues API keys (GET)
    pub key_url: String,

    /// Endpoint that accepts bookings (POST)
    pub booking_url: String,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a configuration with explicit endpoints
    pub fn new(key_url: impl Into<String>, booking_url: impl Into<String>) -> Self {
        Self {
            key_url: key_url.into(),
            booking_url: booking_url.into(),
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Load configuration from environment variables
    ///
    /// - `STRIKE_KEY_URL`
    /// - `STRIKE_BOOKING_URL`
    /// - `STRIKE_TIMEOUT_SECS`
    ///
    /// Unset or empty values keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Self {
            key_url: var("STRIKE_KEY_URL").unwrap_or(defaults.key_url),
            booking_url: var("STRIKE_BOOKING_URL").unwrap_or(defaults.booking_url),
            timeout: var("STRIKE_TIMEOUT_SECS")
                .and_then(|t| t.trim().parse().ok())
                .filter(|t| *t > 0)
                .unwrap_or(defaults.timeout),
        }
    }

    /// Set the key endpoint
    pub fn with_key_url(mut self, url: impl Into<String>) -> Self {
        self.key_url = url.into();
        self
    }

    /// Set the booking endpoint
    pub fn with_booking_url(mut self, url: impl Into<String>) -> Self {
        self.booking_url = url.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_KEY_URL, DEFAULT_BOOKING_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ClientConfig::from_lookup(lookup(&[]));
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.timeout, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_env_overrides() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("STRIKE_KEY_URL", "http://localhost:9000/key"),
            ("STRIKE_BOOKING_URL", "http://localhost:9000/booking"),
            ("STRIKE_TIMEOUT_SECS", "5"),
        ]));
        assert_eq!(config.key_url, "http://localhost:9000/key");
        assert_eq!(config.booking_url, "http://localhost:9000/booking");
        assert_eq!(config.timeout_duration(), Duration::from_secs(5));
    }

    #[test]
    fn test_bad_timeout_falls_back() {
        for raw in ["abc", "0", "-3", ""] {
            let config = ClientConfig::from_lookup(lookup(&[("STRIKE_TIMEOUT_SECS", raw)]));
            assert_eq!(config.timeout, DEFAULT_TIMEOUT_SECS, "value {raw:?}");
        }
    }

    #[test]
    fn test_builder_setters() {
        let config = ClientConfig::default()
            .with_key_url("http://a/key")
            .with_booking_url("http://a/booking")
            .with_timeout(3);
        assert_eq!(config.key_url, "http://a/key");
        assert_eq!(config.booking_url, "http://a/booking");
        assert_eq!(config.timeout, 3);
    }
}
