//! LibreNmsApi trait for mocking
//!
//! This trait abstracts the most used LibreNMS operations so code built on
//! the client can be unit tested against `MockLibreNmsClient` (feature
//! `test-util`) instead of a live server. [`LibreNmsClient`] implements it
//! by delegating to its resource namespaces.

use crate::client::LibreNmsClient;
use crate::error::LibreNmsError;
use crate::models::*;

/// Trait for LibreNMS API client operations
///
/// All async methods are `Send` so implementations work on Tokio's
/// work-stealing runtime.
#[async_trait::async_trait]
pub trait LibreNmsApi: Send + Sync {
    /// The versioned API root
    fn base_url(&self) -> &str;

    // System
    async fn get_system(&self) -> Result<SystemResponse, LibreNmsError>;

    // Devices
    async fn list_devices(&self, query: &DevicesQuery) -> Result<DeviceResponse, LibreNmsError>;
    async fn get_device(&self, identifier: &str) -> Result<DeviceResponse, LibreNmsError>;
    async fn create_device(&self, request: &DeviceCreateRequest) -> Result<DeviceResponse, LibreNmsError>;
    async fn delete_device(&self, identifier: &str) -> Result<DeviceResponse, LibreNmsError>;
    async fn list_device_groups(&self) -> Result<DeviceGroupResponse, LibreNmsError>;

    // Alerts
    async fn list_alerts(&self, query: &AlertsQuery) -> Result<AlertsResponse, LibreNmsError>;
    async fn ack_alert(&self, alert_id: i64, request: &AlertAckRequest) -> Result<BaseResponse, LibreNmsError>;

    // Locations
    async fn list_locations(&self) -> Result<LocationsResponse, LibreNmsError>;
    async fn create_location(&self, request: &LocationCreateRequest) -> Result<BaseResponse, LibreNmsError>;

    // Services
    async fn list_services(&self) -> Result<ServiceResponse, LibreNmsError>;
    async fn services_for_host(&self, device: &str) -> Result<ServiceResponse, LibreNmsError>;
}

#[async_trait::async_trait]
impl LibreNmsApi for LibreNmsClient {
    fn base_url(&self) -> &str {
        LibreNmsClient::base_url(self).as_str()
    }

    async fn get_system(&self) -> Result<SystemResponse, LibreNmsError> {
        self.system().get().await
    }

    async fn list_devices(&self, query: &DevicesQuery) -> Result<DeviceResponse, LibreNmsError> {
        self.devices().list(query).await
    }

    async fn get_device(&self, identifier: &str) -> Result<DeviceResponse, LibreNmsError> {
        self.devices().get(identifier).await
    }

    async fn create_device(&self, request: &DeviceCreateRequest) -> Result<DeviceResponse, LibreNmsError> {
        self.devices().create(request).await
    }

    async fn delete_device(&self, identifier: &str) -> Result<DeviceResponse, LibreNmsError> {
        self.devices().delete(identifier).await
    }

    async fn list_device_groups(&self) -> Result<DeviceGroupResponse, LibreNmsError> {
        self.device_groups().list().await
    }

    async fn list_alerts(&self, query: &AlertsQuery) -> Result<AlertsResponse, LibreNmsError> {
        self.alerts().list(query).await
    }

    async fn ack_alert(&self, alert_id: i64, request: &AlertAckRequest) -> Result<BaseResponse, LibreNmsError> {
        self.alerts().ack(alert_id, request).await
    }

    async fn list_locations(&self) -> Result<LocationsResponse, LibreNmsError> {
        self.locations().list().await
    }

    async fn create_location(&self, request: &LocationCreateRequest) -> Result<BaseResponse, LibreNmsError> {
        self.locations().create(request).await
    }

    async fn list_services(&self) -> Result<ServiceResponse, LibreNmsError> {
        self.services().list().await
    }

    async fn services_for_host(&self, device: &str) -> Result<ServiceResponse, LibreNmsError> {
        self.services().for_host(device).await
    }
}
