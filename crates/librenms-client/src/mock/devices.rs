//! Device operations for MockLibreNmsClient
//!
//! Handles devices and device groups

use super::{MockLibreNmsClient, lock, not_found, ok, sorted};
use crate::error::LibreNmsError;
use crate::models::*;
use reqwest::StatusCode;

/// Id of the device matching `identifier` (numeric id or hostname)
pub(crate) fn resolve_device(client: &MockLibreNmsClient, identifier: &str) -> Option<i64> {
    let devices = lock(&client.devices);
    if let Ok(id) = identifier.parse::<i64>() {
        if devices.contains_key(&id) {
            return Some(id);
        }
    }
    devices
        .values()
        .find(|d| d.hostname == identifier)
        .map(|d| d.device_id)
}

/// An unset or empty filter matches everything
fn field_matches(filter: Option<&str>, value: Option<&str>) -> bool {
    filter.is_none_or(|f| f.is_empty() || value == Some(f))
}

fn matches(device: &Device, query: &DevicesQuery) -> bool {
    query.device_id.is_none_or(|id| id == device.device_id)
        && field_matches(query.hostname.as_deref(), Some(&device.hostname))
        && field_matches(query.os.as_deref(), Some(&device.os))
        && field_matches(query.location.as_deref(), device.location.as_deref())
        && field_matches(query.device_type.as_deref(), Some(&device.device_type))
        && field_matches(query.sys_name.as_deref(), device.sys_name.as_deref())
        && field_matches(query.ipv4.as_deref(), device.ip.as_deref())
        && query.location_id.is_none_or(|id| device.location_id == Some(id))
}

pub async fn list_devices(client: &MockLibreNmsClient, query: &DevicesQuery) -> Result<DeviceResponse, LibreNmsError> {
    let devices: Vec<Device> = sorted(&lock(&client.devices))
        .into_iter()
        .filter(|d| matches(d, query))
        .collect();
    Ok(DeviceResponse {
        base: ok(devices.len(), ""),
        devices,
    })
}

pub async fn get_device(client: &MockLibreNmsClient, identifier: &str) -> Result<DeviceResponse, LibreNmsError> {
    let id = resolve_device(client, identifier)
        .ok_or_else(|| not_found(format!("Device {identifier} does not exist")))?;
    let device = lock(&client.devices)
        .get(&id)
        .cloned()
        .ok_or_else(|| not_found(format!("Device {identifier} does not exist")))?;
    Ok(DeviceResponse {
        base: ok(1, ""),
        devices: vec![device],
    })
}

pub async fn create_device(
    client: &MockLibreNmsClient,
    request: &DeviceCreateRequest,
) -> Result<DeviceResponse, LibreNmsError> {
    if resolve_device(client, &request.hostname).is_some() {
        return Err(LibreNmsError::Api {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: format!("Already have device {}", request.hostname),
        });
    }

    let id = client.next_id();
    let device = Device {
        device_id: id,
        hostname: request.hostname.clone(),
        display: request.display.clone(),
        hardware: request.hardware.clone(),
        location: request.location.clone(),
        location_id: request.location_id,
        os: request.os.clone().unwrap_or_else(|| "generic".to_string()),
        port: request.port.map(i64::from),
        poller_group: request.poller_group,
        snmp_disable: Bool(request.snmp_disable),
        snmp_version: request.snmp_version.clone().unwrap_or_else(|| "v2c".to_string()),
        sys_name: request.sys_name.clone(),
        transport: request.transport.clone().unwrap_or_else(|| "udp".to_string()),
        status: Bool(true),
        ..Default::default()
    };

    lock(&client.devices).insert(id, device.clone());
    Ok(DeviceResponse {
        base: ok(1, format!("Device {} ({id}) has been added successfully", device.hostname)),
        devices: vec![device],
    })
}

pub async fn delete_device(client: &MockLibreNmsClient, identifier: &str) -> Result<DeviceResponse, LibreNmsError> {
    let id = resolve_device(client, identifier)
        .ok_or_else(|| not_found(format!("Device {identifier} not found")))?;
    let removed = lock(&client.devices)
        .remove(&id)
        .ok_or_else(|| not_found(format!("Device {identifier} not found")))?;
    Ok(DeviceResponse {
        base: ok(1, format!("Removed device {}", removed.hostname)),
        devices: vec![removed],
    })
}

pub async fn list_device_groups(client: &MockLibreNmsClient) -> Result<DeviceGroupResponse, LibreNmsError> {
    let groups = sorted(&lock(&client.device_groups));
    Ok(DeviceGroupResponse {
        base: ok(groups.len(), format!("Found {} device groups", groups.len())),
        groups,
    })
}
