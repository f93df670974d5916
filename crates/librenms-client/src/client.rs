//! LibreNMS API client
//!
//! [`LibreNmsClient`] owns the connection settings and hands out one
//! borrowed namespace per resource group (`client.devices()`,
//! `client.alerts()`, ...). Clones share the same connection pool.

use crate::api::{
    AlertApi, AlertRuleApi, DeviceApi, DeviceGroupApi, InventoryApi, LocationApi, LogsApi, PortApi,
    RoutingApi, ServiceApi, SwitchingApi, SystemApi,
};
use crate::common::HttpClient;
use crate::config::ClientConfig;
use crate::error::LibreNmsError;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// LibreNMS API client
#[derive(Debug, Clone)]
pub struct LibreNmsClient {
    http: Arc<HttpClient>,
}

impl LibreNmsClient {
    /// Create a new LibreNMS client
    ///
    /// # Arguments
    /// * `base_url` - LibreNMS base URL (e.g., "http://librenms:8000/")
    /// * `token` - API token for authentication
    ///
    /// No request timeout is set; use [`LibreNmsClient::builder`] for one.
    pub fn new(base_url: &str, token: impl Into<String>) -> Result<Self, LibreNmsError> {
        Self::builder(base_url, token).build()
    }

    /// Start configuring a client
    pub fn builder(base_url: &str, token: impl Into<String>) -> ClientBuilder {
        ClientBuilder {
            base_url: base_url.to_string(),
            token: token.into(),
            http_client: None,
            timeout: None,
            user_agent: None,
        }
    }

    /// Create a client from [`ClientConfig`]
    pub fn from_config(config: &ClientConfig) -> Result<Self, LibreNmsError> {
        let mut builder = Self::builder(&config.base_url, config.token.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        builder.build()
    }

    /// The versioned API root, e.g. `http://librenms:8000/api/v0/`
    pub fn base_url(&self) -> &Url {
        self.http.base_url()
    }

    /// The API token
    pub fn token(&self) -> &str {
        self.http.token()
    }

    pub(crate) fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Device operations
    pub fn devices(&self) -> DeviceApi<'_> {
        DeviceApi::new(self)
    }

    /// Device group operations
    pub fn device_groups(&self) -> DeviceGroupApi<'_> {
        DeviceGroupApi::new(self)
    }

    /// Alert operations
    pub fn alerts(&self) -> AlertApi<'_> {
        AlertApi::new(self)
    }

    /// Alert rule operations
    pub fn alert_rules(&self) -> AlertRuleApi<'_> {
        AlertRuleApi::new(self)
    }

    /// Inventory operations
    pub fn inventory(&self) -> InventoryApi<'_> {
        InventoryApi::new(self)
    }

    /// Location operations
    pub fn locations(&self) -> LocationApi<'_> {
        LocationApi::new(self)
    }

    /// Log operations
    pub fn logs(&self) -> LogsApi<'_> {
        LogsApi::new(self)
    }

    /// Port operations
    pub fn ports(&self) -> PortApi<'_> {
        PortApi::new(self)
    }

    /// Routing operations (BGP, OSPF, VRF, MPLS, IPsec, IP resources)
    pub fn routing(&self) -> RoutingApi<'_> {
        RoutingApi::new(self)
    }

    /// Service operations
    pub fn services(&self) -> ServiceApi<'_> {
        ServiceApi::new(self)
    }

    /// Switching operations (VLANs, links, FDB, NAC)
    pub fn switching(&self) -> SwitchingApi<'_> {
        SwitchingApi::new(self)
    }

    /// System information
    pub fn system(&self) -> SystemApi<'_> {
        SystemApi::new(self)
    }
}

/// Builder for [`LibreNmsClient`]
#[derive(Debug)]
pub struct ClientBuilder {
    base_url: String,
    token: String,
    http_client: Option<Client>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl ClientBuilder {
    /// Use a preconfigured `reqwest::Client`.
    ///
    /// `timeout` and `user_agent` are ignored when one is supplied.
    #[must_use]
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Per-request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// `User-Agent` header value
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Validate the base URL and build the client
    pub fn build(self) -> Result<LibreNmsClient, LibreNmsError> {
        let client = match self.http_client {
            Some(client) => client,
            None => {
                let mut builder = Client::builder();
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                if let Some(user_agent) = self.user_agent {
                    builder = builder.user_agent(user_agent);
                }
                builder.build()?
            }
        };

        let http = HttpClient::new(client, &self.base_url, self.token)?;
        debug!(api_root = %http.base_url(), "created LibreNMS client");
        Ok(LibreNmsClient { http: Arc::new(http) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_transport() {
        let client = LibreNmsClient::new("http://nms:8000", "secret").unwrap();
        let clone = client.clone();
        assert!(Arc::ptr_eq(&client.http, &clone.http));
        assert_eq!(clone.base_url().as_str(), "http://nms:8000/api/v0/");
        assert_eq!(clone.token(), "secret");
    }

    #[test]
    fn builder_rejects_bad_url() {
        let err = LibreNmsClient::builder("ftp://nms", "t")
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap_err();
        assert!(matches!(err, LibreNmsError::InvalidBaseUrl(_)));
    }

    #[test]
    fn from_config_applies_settings() {
        let mut config = ClientConfig::new("https://nms.example.com/", "abc");
        config.timeout = Some(Duration::from_secs(10));
        let client = LibreNmsClient::from_config(&config).unwrap();
        assert_eq!(client.base_url().as_str(), "https://nms.example.com/api/v0/");
    }

    #[test]
    fn client_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LibreNmsClient>();
    }
}
