//! System endpoint

use crate::client::LibreNmsClient;
use crate::error::LibreNmsError;
use crate::models::SystemResponse;

/// System information, obtained from [`LibreNmsClient::system`]
#[derive(Debug, Clone, Copy)]
pub struct SystemApi<'a> {
    client: &'a LibreNmsClient,
}

impl<'a> SystemApi<'a> {
    pub(crate) fn new(client: &'a LibreNmsClient) -> Self {
        Self { client }
    }

    /// Versions of LibreNMS and its dependencies
    pub async fn get(&self) -> Result<SystemResponse, LibreNmsError> {
        self.client.http().get("system", None).await
    }
}
