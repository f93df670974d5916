//! Mock LibreNmsClient for unit testing
//!
//! This module provides a mock implementation of [`LibreNmsApi`] that can be
//! used in unit tests without requiring a running LibreNMS instance.
//!
//! The mock is organized into domain-specific modules:
//! - `devices.rs` - devices and device groups
//! - `monitoring.rs` - alerts and services
//! - `resources.rs` - locations and system information

mod devices;
mod monitoring;
mod resources;

use crate::error::LibreNmsError;
use crate::librenms_trait::LibreNmsApi;
use crate::models::*;
use reqwest::StatusCode;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Mock LibreNmsClient for testing
///
/// Stores resources in memory. Seed it with the `add_*` methods, then hand
/// it to the code under test as a `&dyn LibreNmsApi`.
#[derive(Debug, Clone)]
pub struct MockLibreNmsClient {
    pub(crate) base_url: String,
    // In-memory storage for resources
    pub(crate) devices: Arc<Mutex<HashMap<i64, Device>>>,
    pub(crate) device_groups: Arc<Mutex<HashMap<i64, DeviceGroup>>>,
    pub(crate) alerts: Arc<Mutex<HashMap<i64, Alert>>>,
    pub(crate) locations: Arc<Mutex<HashMap<i64, Location>>>,
    pub(crate) services: Arc<Mutex<HashMap<i64, Service>>>,
    pub(crate) system: Arc<Mutex<Option<SystemInfo>>>,
    // Counter for generating IDs
    pub(crate) next_id: Arc<Mutex<i64>>,
}

impl MockLibreNmsClient {
    /// Create a new mock client
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            devices: Arc::new(Mutex::new(HashMap::new())),
            device_groups: Arc::new(Mutex::new(HashMap::new())),
            alerts: Arc::new(Mutex::new(HashMap::new())),
            locations: Arc::new(Mutex::new(HashMap::new())),
            services: Arc::new(Mutex::new(HashMap::new())),
            system: Arc::new(Mutex::new(None)),
            next_id: Arc::new(Mutex::new(1)),
        }
    }

    /// Add a device to the mock store (for test setup)
    pub fn add_device(&self, device: Device) {
        lock(&self.devices).insert(device.device_id, device);
    }

    /// Add a device group to the mock store (for test setup)
    pub fn add_device_group(&self, group: DeviceGroup) {
        lock(&self.device_groups).insert(group.id, group);
    }

    /// Add an alert to the mock store (for test setup)
    pub fn add_alert(&self, alert: Alert) {
        lock(&self.alerts).insert(alert.id, alert);
    }

    /// Add a location to the mock store (for test setup)
    pub fn add_location(&self, location: Location) {
        lock(&self.locations).insert(location.id, location);
    }

    /// Add a service to the mock store (for test setup)
    pub fn add_service(&self, service: Service) {
        lock(&self.services).insert(service.id, service);
    }

    /// Set what `get_system` returns
    pub fn set_system(&self, system: SystemInfo) {
        *lock(&self.system) = Some(system);
    }

    /// Generate next ID
    pub(crate) fn next_id(&self) -> i64 {
        let mut id = lock(&self.next_id);
        let current = *id;
        *id += 1;
        current
    }
}

/// Lock a store, recovering the data if a panicking test poisoned it
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Envelope for a successful mock response holding `count` records
pub(crate) fn ok(count: usize, message: impl Into<String>) -> BaseResponse {
    BaseResponse {
        status: "ok".to_string(),
        message: message.into(),
        count: i64::try_from(count).unwrap_or(i64::MAX),
    }
}

/// The error LibreNMS returns for an unknown resource
pub(crate) fn not_found(message: impl Into<String>) -> LibreNmsError {
    LibreNmsError::Api {
        status: StatusCode::NOT_FOUND,
        message: message.into(),
    }
}

/// Values of a store ordered by id
pub(crate) fn sorted<T: Clone>(store: &HashMap<i64, T>) -> Vec<T> {
    let mut entries: Vec<(&i64, &T)> = store.iter().collect();
    entries.sort_by_key(|(id, _)| **id);
    entries.into_iter().map(|(_, v)| v.clone()).collect()
}

#[async_trait::async_trait]
impl LibreNmsApi for MockLibreNmsClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_system(&self) -> Result<SystemResponse, LibreNmsError> {
        resources::get_system(self).await
    }

    // Devices - delegated to devices module
    async fn list_devices(&self, query: &DevicesQuery) -> Result<DeviceResponse, LibreNmsError> {
        devices::list_devices(self, query).await
    }

    async fn get_device(&self, identifier: &str) -> Result<DeviceResponse, LibreNmsError> {
        devices::get_device(self, identifier).await
    }

    async fn create_device(&self, request: &DeviceCreateRequest) -> Result<DeviceResponse, LibreNmsError> {
        devices::create_device(self, request).await
    }

    async fn delete_device(&self, identifier: &str) -> Result<DeviceResponse, LibreNmsError> {
        devices::delete_device(self, identifier).await
    }

    async fn list_device_groups(&self) -> Result<DeviceGroupResponse, LibreNmsError> {
        devices::list_device_groups(self).await
    }

    // Alerts and services - delegated to monitoring module
    async fn list_alerts(&self, query: &AlertsQuery) -> Result<AlertsResponse, LibreNmsError> {
        monitoring::list_alerts(self, query).await
    }

    async fn ack_alert(&self, alert_id: i64, request: &AlertAckRequest) -> Result<BaseResponse, LibreNmsError> {
        monitoring::ack_alert(self, alert_id, request).await
    }

    async fn list_services(&self) -> Result<ServiceResponse, LibreNmsError> {
        monitoring::list_services(self).await
    }

    async fn services_for_host(&self, device: &str) -> Result<ServiceResponse, LibreNmsError> {
        monitoring::services_for_host(self, device).await
    }

    // Locations - delegated to resources module
    async fn list_locations(&self) -> Result<LocationsResponse, LibreNmsError> {
        resources::list_locations(self).await
    }

    async fn create_location(&self, request: &LocationCreateRequest) -> Result<BaseResponse, LibreNmsError> {
        resources::create_location(self, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn device(id: i64, hostname: &str, os: &str) -> Device {
        Device {
            device_id: id,
            hostname: hostname.to_string(),
            os: os.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn devices_are_listed_and_filtered() {
        let mock = MockLibreNmsClient::new("http://mock/api/v0/");
        mock.add_device(device(2, "edge1", "junos"));
        mock.add_device(device(1, "core1", "ios"));

        let all = mock.list_devices(&DevicesQuery::new()).await.unwrap();
        assert_eq!(all.base.count, 2);
        assert_eq!(all.devices[0].hostname, "core1");

        let ios = mock.list_devices(&DevicesQuery::new().os("ios")).await.unwrap();
        assert_eq!(ios.devices.len(), 1);
        assert_eq!(ios.devices[0].device_id, 1);
    }

    #[tokio::test]
    async fn get_device_by_id_or_hostname() {
        let mock = MockLibreNmsClient::new("http://mock/api/v0/");
        mock.add_device(device(5, "core1", "ios"));

        let by_id = mock.get_device("5").await.unwrap();
        assert_eq!(by_id.devices[0].hostname, "core1");

        let by_name = mock.get_device("core1").await.unwrap();
        assert_eq!(by_name.devices[0].device_id, 5);

        let err = mock.get_device("nope").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn create_then_delete_device() {
        let mock = MockLibreNmsClient::new("http://mock/api/v0/");
        let created = mock
            .create_device(&DeviceCreateRequest::new("10.0.0.9"))
            .await
            .unwrap();
        let id = created.devices[0].device_id;

        mock.delete_device(&id.to_string()).await.unwrap();
        assert!(mock.get_device("10.0.0.9").await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn duplicate_device_is_rejected() {
        let mock = MockLibreNmsClient::new("http://mock/api/v0/");
        mock.add_device(device(1, "core1", "ios"));
        let err = mock
            .create_device(&DeviceCreateRequest::new("core1"))
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[tokio::test]
    async fn ack_moves_alert_to_acknowledged() {
        let mock = MockLibreNmsClient::new("http://mock/api/v0/");
        mock.add_alert(Alert {
            id: 3,
            state: AlertState::Alert.code(),
            severity: "critical".to_string(),
            ..Default::default()
        });

        let open = mock
            .list_alerts(&AlertsQuery::new().state(AlertState::Alert))
            .await
            .unwrap();
        assert_eq!(open.alerts.len(), 1);

        let request = AlertAckRequest {
            note: Some("on it".to_string()),
            until_clear: true,
        };
        mock.ack_alert(3, &request).await.unwrap();

        let acked = mock
            .list_alerts(&AlertsQuery::new().state(AlertState::Acknowledged))
            .await
            .unwrap();
        assert_eq!(acked.alerts[0].note.as_deref(), Some("on it"));
        assert!(mock.ack_alert(99, &request).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn services_for_host_resolves_hostname() {
        let mock = MockLibreNmsClient::new("http://mock/api/v0/");
        mock.add_device(device(4, "web1", "linux"));
        mock.add_service(Service {
            id: 1,
            device_id: 4,
            service_type: "http".to_string(),
            ..Default::default()
        });
        mock.add_service(Service {
            id: 2,
            device_id: 8,
            service_type: "icmp".to_string(),
            ..Default::default()
        });

        let web = mock.services_for_host("web1").await.unwrap();
        assert_eq!(web.base.count, 1);
        assert_eq!(web.services[0].service_type, "http");
        assert_eq!(mock.list_services().await.unwrap().services.len(), 2);
    }

    #[tokio::test]
    async fn locations_and_system() {
        let mock = MockLibreNmsClient::new("http://mock/api/v0/");
        mock.create_location(&LocationCreateRequest::new("DC1", 51.5, -0.12))
            .await
            .unwrap();
        let locations = mock.list_locations().await.unwrap();
        assert_eq!(locations.locations[0].name, "DC1");
        assert_eq!(locations.locations[0].latitude, Some(Float64(51.5)));

        assert!(mock.get_system().await.unwrap_err().is_not_found());
        mock.set_system(SystemInfo {
            local_ver: "24.1.0".to_string(),
            ..Default::default()
        });
        assert_eq!(mock.get_system().await.unwrap().system[0].local_ver, "24.1.0");
    }
}
