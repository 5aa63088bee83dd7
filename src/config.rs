//! Application configuration, loaded from environment variables.

use std::env;
use std::time::Duration;

/// Complete application configuration.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub client: ClientConfig,
}

impl AppConfig {
    /// Creates a configuration from the currently available environment
    /// variables.
    pub fn from_env() -> Self {
        Self {
            client: ClientConfig::from_env(),
        }
    }
}

/// Configuration for the packing service client.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    endpoint: String,
    timeout: Duration,
}

impl ClientConfig {
    /// The packing endpoint of the service as deployed alongside the
    /// original client.
    pub const DEFAULT_ENDPOINT: &'static str = "http://localhost:8081/api/containerpacking";
    const DEFAULT_TIMEOUT_SECS: u64 = 30;

    const ENDPOINT_VAR: &'static str = "PACKVIEW_ENDPOINT";
    const TIMEOUT_VAR: &'static str = "PACKVIEW_HTTP_TIMEOUT_SECS";

    pub fn from_env() -> Self {
        let endpoint = env_string(Self::ENDPOINT_VAR)
            .unwrap_or_else(|| Self::DEFAULT_ENDPOINT.to_string());

        let timeout = match env_string(Self::TIMEOUT_VAR) {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                Ok(_) => {
                    eprintln!(
                        "⚠️ {} must not be 0. Using {}s.",
                        Self::TIMEOUT_VAR,
                        Self::DEFAULT_TIMEOUT_SECS
                    );
                    Duration::from_secs(Self::DEFAULT_TIMEOUT_SECS)
                }
                Err(err) => {
                    eprintln!(
                        "⚠️ Could not parse {} ('{}'): {}. Using {}s.",
                        Self::TIMEOUT_VAR,
                        raw,
                        err,
                        Self::DEFAULT_TIMEOUT_SECS
                    );
                    Duration::from_secs(Self::DEFAULT_TIMEOUT_SECS)
                }
            },
            None => Duration::from_secs(Self::DEFAULT_TIMEOUT_SECS),
        };

        Self { endpoint, timeout }
    }

    /// Creates a configuration pointing at an explicit endpoint, keeping the
    /// default timeout. Useful for tests and embedded setups.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout: Duration::from_secs(Self::DEFAULT_TIMEOUT_SECS),
        }
    }

    /// The packing endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The HTTP request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

fn env_string(name: &str) -> Option<String> {
    match env::var(name) {
        Ok(value) => {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_owned())
            }
        }
        Err(env::VarError::NotPresent) => None,
        Err(err) => {
            eprintln!(
                "⚠️ Access to {} failed: {}. Using default value.",
                name, err
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_endpoint_keeps_default_timeout() {
        let config = ClientConfig::with_endpoint("http://example.test/pack");
        assert_eq!(config.endpoint(), "http://example.test/pack");
        assert_eq!(
            config.timeout(),
            Duration::from_secs(ClientConfig::DEFAULT_TIMEOUT_SECS)
        );
    }

    #[test]
    fn test_default_endpoint_matches_service_route() {
        assert!(ClientConfig::DEFAULT_ENDPOINT.ends_with("/api/containerpacking"));
    }
}
