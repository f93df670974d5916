//! Device endpoints (`/devices`)

use crate::client::LibreNmsClient;
use crate::common::query::{QueryParams, ToQuery, segment};
use crate::error::LibreNmsError;
use crate::models::*;
use std::collections::BTreeMap;
use tracing::debug;

const ENDPOINT: &str = "devices";

/// Device operations, obtained from [`LibreNmsClient::devices`]
#[derive(Debug, Clone, Copy)]
pub struct DeviceApi<'a> {
    client: &'a LibreNmsClient,
}

impl<'a> DeviceApi<'a> {
    pub(crate) fn new(client: &'a LibreNmsClient) -> Self {
        Self { client }
    }

    fn path(identifier: &str, rest: &str) -> String {
        if rest.is_empty() {
            format!("{ENDPOINT}/{}", segment(identifier))
        } else {
            format!("{ENDPOINT}/{}/{rest}", segment(identifier))
        }
    }

    /// Add a device.
    ///
    /// The response carries the created device in `devices`.
    pub async fn create(&self, request: &DeviceCreateRequest) -> Result<DeviceResponse, LibreNmsError> {
        debug!(hostname = %request.hostname, "creating device");
        self.client.http().post(ENDPOINT, Some(request)).await
    }

    /// Delete a device by id or hostname
    pub async fn delete(&self, identifier: &str) -> Result<DeviceResponse, LibreNmsError> {
        self.client.http().delete(&Self::path(identifier, "")).await
    }

    /// Get a device by id or hostname
    pub async fn get(&self, identifier: &str) -> Result<DeviceResponse, LibreNmsError> {
        self.client.http().get(&Self::path(identifier, ""), None).await
    }

    /// List devices, optionally filtered
    pub async fn list(&self, query: &DevicesQuery) -> Result<DeviceResponse, LibreNmsError> {
        let params = query.to_query();
        self.client.http().get(ENDPOINT, Some(&params)).await
    }

    /// Update columns of a device.
    ///
    /// # Arguments
    /// * `identifier` - device id or hostname
    /// * `request` - parallel `field`/`data` lists
    pub async fn update(
        &self,
        identifier: &str,
        request: &DeviceUpdateRequest,
    ) -> Result<BaseResponse, LibreNmsError> {
        if request.is_empty() {
            return Err(LibreNmsError::InvalidRequest(
                "device update needs at least one field".to_string(),
            ));
        }
        self.client.http().patch(&Self::path(identifier, ""), Some(request)).await
    }

    /// Trigger a discovery run for a device
    pub async fn discover(&self, identifier: &str) -> Result<BaseResponse, LibreNmsError> {
        self.client.http().get(&Self::path(identifier, "discover"), None).await
    }

    /// Availability percentages over the standard windows
    pub async fn availability(&self, identifier: &str) -> Result<DeviceAvailabilityResponse, LibreNmsError> {
        self.client.http().get(&Self::path(identifier, "availability"), None).await
    }

    /// Recorded outages of a device
    pub async fn outages(&self, identifier: &str) -> Result<DeviceOutagesResponse, LibreNmsError> {
        self.client.http().get(&Self::path(identifier, "outages"), None).await
    }

    /// Graph types available for a device
    pub async fn graphs(&self, identifier: &str) -> Result<DeviceGraphsResponse, LibreNmsError> {
        self.client.http().get(&Self::path(identifier, "graphs"), None).await
    }

    /// Health graphs.
    ///
    /// Without `graph_type` lists the health graph types; with it lists the
    /// sensors of that type; with both selects one sensor. `sensor_id`
    /// without `graph_type` is ignored.
    pub async fn health_graphs(
        &self,
        identifier: &str,
        graph_type: Option<&str>,
        sensor_id: Option<&str>,
    ) -> Result<DeviceGraphsResponse, LibreNmsError> {
        let path = Self::path(identifier, &sensor_path("health", graph_type, sensor_id));
        self.client.http().get(&path, None).await
    }

    /// Wireless graphs, with the same selection rules as
    /// [`DeviceApi::health_graphs`]
    pub async fn wireless_graphs(
        &self,
        identifier: &str,
        graph_type: Option<&str>,
        sensor_id: Option<&str>,
    ) -> Result<DeviceGraphsResponse, LibreNmsError> {
        let path = Self::path(identifier, &sensor_path("wireless", graph_type, sensor_id));
        self.client.http().get(&path, None).await
    }

    /// Ports of a device.
    ///
    /// `columns` is a comma separated column list; the API default is
    /// `ifName` only.
    pub async fn ports(&self, identifier: &str, columns: Option<&str>) -> Result<DevicePortsResponse, LibreNmsError> {
        let mut params = QueryParams::new();
        params.set_opt("columns", columns);
        self.client.http().get(&Self::path(identifier, "ports"), Some(&params)).await
    }

    /// Forwarding database of a device
    pub async fn fdb(&self, identifier: &str) -> Result<DeviceFdbResponse, LibreNmsError> {
        self.client.http().get(&Self::path(identifier, "fdb"), None).await
    }

    /// NAC sessions on a device
    pub async fn nac(&self, identifier: &str) -> Result<DeviceNacResponse, LibreNmsError> {
        self.client.http().get(&Self::path(identifier, "nac"), None).await
    }

    /// IP addresses configured on a device
    pub async fn ip_addresses(&self, identifier: &str) -> Result<DeviceIpAddressesResponse, LibreNmsError> {
        self.client.http().get(&Self::path(identifier, "ip"), None).await
    }

    /// Port stack (parent/child interface) mappings.
    ///
    /// With `valid_mappings` only mappings where both ports exist are returned.
    pub async fn port_stack(
        &self,
        identifier: &str,
        valid_mappings: bool,
    ) -> Result<DevicePortStackResponse, LibreNmsError> {
        let mut params = QueryParams::new();
        if valid_mappings {
            params.set_flag("valid_mappings");
        }
        self.client.http().get(&Self::path(identifier, "port_stack"), Some(&params)).await
    }

    /// Transceivers of a device
    pub async fn transceivers(&self, identifier: &str) -> Result<DeviceTransceiversResponse, LibreNmsError> {
        self.client.http().get(&Self::path(identifier, "transceivers"), None).await
    }

    /// Components of a device, optionally filtered
    pub async fn components(
        &self,
        identifier: &str,
        query: &ComponentsQuery,
    ) -> Result<DeviceComponentsResponse, LibreNmsError> {
        let params = query.to_query();
        self.client.http().get(&Self::path(identifier, "components"), Some(&params)).await
    }

    /// Create an empty component of `component_type`
    pub async fn add_component(
        &self,
        identifier: &str,
        component_type: &str,
    ) -> Result<DeviceComponentsResponse, LibreNmsError> {
        let path = Self::path(identifier, &format!("components/{}", segment(component_type)));
        self.client.http().post::<_, ()>(&path, None).await
    }

    /// Replace components, keyed by component id
    pub async fn edit_components(
        &self,
        identifier: &str,
        components: &BTreeMap<String, DeviceComponent>,
    ) -> Result<BaseResponse, LibreNmsError> {
        self.client
            .http()
            .put(&Self::path(identifier, "components"), Some(components))
            .await
    }

    /// Delete one component
    pub async fn delete_component(&self, identifier: &str, component_id: i64) -> Result<BaseResponse, LibreNmsError> {
        let path = Self::path(identifier, &format!("components/{component_id}"));
        self.client.http().delete(&path).await
    }

    /// Polling info of one port, addressed by `ifName`
    pub async fn port_stats(
        &self,
        identifier: &str,
        if_name: &str,
        columns: Option<&str>,
    ) -> Result<DevicePortStatsResponse, LibreNmsError> {
        let mut params = QueryParams::new();
        params.set_opt("columns", columns);
        let path = Self::path(identifier, &format!("ports/{}", segment(if_name)));
        self.client.http().get(&path, Some(&params)).await
    }

    /// Whether a device is in a maintenance window
    pub async fn maintenance(&self, identifier: &str) -> Result<DeviceMaintenanceResponse, LibreNmsError> {
        self.client.http().get(&Self::path(identifier, "maintenance"), None).await
    }

    /// Put a device into maintenance
    pub async fn set_maintenance(
        &self,
        identifier: &str,
        request: &DeviceMaintenanceRequest,
    ) -> Result<BaseResponse, LibreNmsError> {
        self.client
            .http()
            .post(&Self::path(identifier, "maintenance"), Some(request))
            .await
    }

    /// Change the hostname of a device
    pub async fn rename(&self, identifier: &str, new_hostname: &str) -> Result<BaseResponse, LibreNmsError> {
        let path = Self::path(identifier, &format!("rename/{}", segment(new_hostname)));
        self.client.http().patch::<_, ()>(&path, None).await
    }

    /// Device groups the device belongs to
    pub async fn groups(&self, identifier: &str) -> Result<DeviceGroupsResponse, LibreNmsError> {
        self.client.http().get(&Self::path(identifier, "groups"), None).await
    }

    /// Set the notes of a port
    pub async fn update_port_notes(
        &self,
        identifier: &str,
        port_id: i64,
        notes: &str,
    ) -> Result<BaseResponse, LibreNmsError> {
        let body = serde_json::json!({ "notes": notes });
        let path = Self::path(identifier, &format!("port/{port_id}"));
        self.client.http().patch(&path, Some(&body)).await
    }

    /// Render a device graph and return the image bytes.
    ///
    /// `graph_type` is one of the names returned by [`DeviceApi::graphs`],
    /// e.g. `device_processor`. `params` takes the usual graph options
    /// (`from`, `to`, `width`, `height`, `output`).
    pub async fn graph(
        &self,
        identifier: &str,
        graph_type: &str,
        params: Option<&QueryParams>,
    ) -> Result<Vec<u8>, LibreNmsError> {
        let path = Self::path(identifier, &segment(graph_type));
        self.client.http().send_raw(reqwest::Method::GET, &path, params).await
    }
}

/// `kind[/type[/sensor]]`
fn sensor_path(kind: &str, graph_type: Option<&str>, sensor_id: Option<&str>) -> String {
    match (graph_type.filter(|t| !t.is_empty()), sensor_id.filter(|s| !s.is_empty())) {
        (Some(t), Some(s)) => format!("{kind}/{}/{}", segment(t), segment(s)),
        (Some(t), None) => format!("{kind}/{}", segment(t)),
        (None, _) => kind.to_string(),
    }
}
