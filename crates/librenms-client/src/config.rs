//! Client configuration loaded from the environment

use crate::error::LibreNmsError;
use std::env;
use std::time::Duration;

/// Default LibreNMS URL when `LIBRENMS_URL` is unset
pub const DEFAULT_URL: &str = "http://localhost:8000/";

/// Connection settings for [`LibreNmsClient`](crate::LibreNmsClient)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// `http[s]://host[:port]/`
    pub base_url: String,
    /// API token
    pub token: String,
    /// Per-request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// Settings with no timeout
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
            timeout: None,
        }
    }

    /// Load settings from the environment.
    ///
    /// * `LIBRENMS_URL` - base URL, defaults to [`DEFAULT_URL`]
    /// * `LIBRENMS_TOKEN` - API token, required
    /// * `LIBRENMS_TIMEOUT_SECS` - request timeout in seconds, optional
    pub fn from_env() -> Result<Self, LibreNmsError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, LibreNmsError> {
        let base_url = lookup("LIBRENMS_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_URL.to_string());
        let token = lookup("LIBRENMS_TOKEN")
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| {
                LibreNmsError::Config("LIBRENMS_TOKEN environment variable is required".to_string())
            })?;
        let timeout = match lookup("LIBRENMS_TIMEOUT_SECS") {
            Some(raw) if !raw.trim().is_empty() => {
                let secs = raw.trim().parse::<u64>().map_err(|e| {
                    LibreNmsError::Config(format!("LIBRENMS_TIMEOUT_SECS must be a number of seconds: {e}"))
                })?;
                Some(Duration::from_secs(secs))
            }
            _ => None,
        };

        Ok(Self {
            base_url,
            token,
            timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<ClientConfig, LibreNmsError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        ClientConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn token_is_required() {
        let err = load(&[("LIBRENMS_URL", "http://nms:8000")]).unwrap_err();
        assert!(matches!(err, LibreNmsError::Config(_)));
    }

    #[test]
    fn defaults_apply() {
        let config = load(&[("LIBRENMS_TOKEN", "abc")]).unwrap();
        assert_eq!(config.base_url, DEFAULT_URL);
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn timeout_is_parsed() {
        let config = load(&[("LIBRENMS_TOKEN", "abc"), ("LIBRENMS_TIMEOUT_SECS", "15")]).unwrap();
        assert_eq!(config.timeout, Some(Duration::from_secs(15)));

        let err = load(&[("LIBRENMS_TOKEN", "abc"), ("LIBRENMS_TIMEOUT_SECS", "soon")]).unwrap_err();
        assert!(matches!(err, LibreNmsError::Config(_)));
    }
}
