//! Location endpoints

use crate::client::LibreNmsClient;
use crate::error::LibreNmsError;
use crate::models::{
    BaseResponse, LocationCreateRequest, LocationResponse, LocationUpdateRequest, LocationsResponse,
};

/// Location operations, obtained from [`LibreNmsClient::locations`]
#[derive(Debug, Clone, Copy)]
pub struct LocationApi<'a> {
    client: &'a LibreNmsClient,
}

impl<'a> LocationApi<'a> {
    pub(crate) fn new(client: &'a LibreNmsClient) -> Self {
        Self { client }
    }

    /// Create a location
    pub async fn create(&self, request: &LocationCreateRequest) -> Result<BaseResponse, LibreNmsError> {
        self.client.http().post("locations", Some(request)).await
    }

    /// Delete a location
    pub async fn delete(&self, location_id: i64) -> Result<BaseResponse, LibreNmsError> {
        self.client.http().delete(&format!("locations/{location_id}")).await
    }

    /// Get one location (note the singular `location/` path)
    pub async fn get(&self, location_id: i64) -> Result<LocationResponse, LibreNmsError> {
        self.client.http().get(&format!("location/{location_id}"), None).await
    }

    /// List all locations
    pub async fn list(&self) -> Result<LocationsResponse, LibreNmsError> {
        self.client.http().get("resources/locations", None).await
    }

    /// Update a location; only the fields set on `request` are sent
    pub async fn update(
        &self,
        location_id: i64,
        request: &LocationUpdateRequest,
    ) -> Result<BaseResponse, LibreNmsError> {
        if request.is_empty() {
            return Err(LibreNmsError::InvalidRequest(
                "location update needs at least one field".to_string(),
            ));
        }
        self.client
            .http()
            .patch(&format!("locations/{location_id}"), Some(request))
            .await
    }
}
