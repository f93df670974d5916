//! Inventory endpoints (`/inventory`)

use crate::client::LibreNmsClient;
use crate::common::query::{ToQuery, segment};
use crate::error::LibreNmsError;
use crate::models::{InventoryParams, InventoryResponse};

/// Inventory operations, obtained from [`LibreNmsClient::inventory`]
#[derive(Debug, Clone, Copy)]
pub struct InventoryApi<'a> {
    client: &'a LibreNmsClient,
}

impl<'a> InventoryApi<'a> {
    pub(crate) fn new(client: &'a LibreNmsClient) -> Self {
        Self { client }
    }

    /// Inventory of a device.
    ///
    /// Without filters the API returns only top-level entries
    /// (`entPhysicalContainedIn = 0`).
    pub async fn get(&self, hostname: &str, params: &InventoryParams) -> Result<InventoryResponse, LibreNmsError> {
        let query = params.to_query();
        self.client
            .http()
            .get(&format!("inventory/{}", segment(hostname)), Some(&query))
            .await
    }

    /// Full inventory tree of a device
    pub async fn get_all(&self, hostname: &str) -> Result<InventoryResponse, LibreNmsError> {
        self.client
            .http()
            .get(&format!("inventory/{}/all", segment(hostname)), None)
            .await
    }
}
