//! Device models
//!
//! Match the `/api/v0/devices` family of endpoints.
//! See: https://docs.librenms.org/API/Devices/

use super::base::BaseResponse;
use super::device_group::DeviceGroup;
use super::scalar::{Bool, Float64, null_default, opt_i64, opt_string};
use crate::common::query::{QueryParams, ToQuery};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

/// Device as returned by `GET /devices` and `GET /devices/{id}`.
///
/// `status` comes back as `0`/`1` from the list endpoint and as
/// `true`/`false` from the single-device endpoint, hence `Bool`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Device {
    #[serde(deserialize_with = "null_default")]
    pub device_id: i64,
    #[serde(deserialize_with = "null_default")]
    pub agent_uptime: i64,
    #[serde(rename = "authalgo")]
    pub auth_algorithm: Option<String>,
    #[serde(rename = "authlevel")]
    pub auth_level: Option<String>,
    #[serde(rename = "authname")]
    pub auth_name: Option<String>,
    #[serde(rename = "authpass")]
    pub auth_pass: Option<String>,
    #[serde(rename = "bgpLocalAs", deserialize_with = "opt_i64")]
    pub bgp_local_as: Option<i64>,
    pub community: Option<String>,
    #[serde(rename = "cryptoalgo")]
    pub crypto_algorithm: Option<String>,
    #[serde(rename = "cryptopass")]
    pub crypto_pass: Option<String>,
    pub disable_notify: Bool,
    pub disabled: Bool,
    pub display: Option<String>,
    pub features: Option<String>,
    #[serde(deserialize_with = "opt_string")]
    pub hardware: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub hostname: String,
    #[serde(deserialize_with = "opt_string")]
    pub icon: Option<String>,
    pub ignore: Bool,
    pub ignore_status: Bool,
    #[serde(deserialize_with = "opt_string")]
    pub inserted: Option<String>,
    #[serde(deserialize_with = "opt_string")]
    pub ip: Option<String>,
    pub last_discovered: Option<String>,
    #[serde(rename = "last_discovered_timetaken")]
    pub last_discovered_time_taken: Option<Float64>,
    pub last_ping: Option<String>,
    #[serde(rename = "last_ping_timetaken")]
    pub last_ping_time_taken: Option<Float64>,
    pub last_poll_attempted: Option<String>,
    /// Last poll time. The API key really is `last_pulled`.
    #[serde(rename = "last_pulled")]
    pub last_polled: Option<String>,
    #[serde(rename = "last_polled_timetaken")]
    pub last_polled_time_taken: Option<Float64>,
    #[serde(rename = "lat")]
    pub latitude: Option<Float64>,
    #[serde(rename = "lng")]
    pub longitude: Option<Float64>,
    pub location: Option<String>,
    #[serde(deserialize_with = "opt_i64")]
    pub location_id: Option<i64>,
    #[serde(deserialize_with = "opt_i64")]
    pub max_depth: Option<i64>,
    pub notes: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub os: String,
    #[serde(rename = "override_sysLocation")]
    pub override_sys_location: Bool,
    #[serde(deserialize_with = "opt_string")]
    pub overwrite_ip: Option<String>,
    #[serde(deserialize_with = "opt_i64")]
    pub poller_group: Option<i64>,
    #[serde(deserialize_with = "opt_i64")]
    pub port: Option<i64>,
    #[serde(deserialize_with = "opt_i64")]
    pub port_association_mode: Option<i64>,
    pub purpose: Option<String>,
    #[serde(deserialize_with = "opt_i64")]
    pub retries: Option<i64>,
    pub serial: Option<String>,
    pub snmp_disable: Bool,
    #[serde(rename = "snmpver", deserialize_with = "null_default")]
    pub snmp_version: String,
    pub status: Bool,
    #[serde(deserialize_with = "null_default")]
    pub status_reason: String,
    #[serde(rename = "sysContact")]
    pub sys_contact: Option<String>,
    #[serde(rename = "sysDescr")]
    pub sys_descr: Option<String>,
    #[serde(rename = "sysName", deserialize_with = "opt_string")]
    pub sys_name: Option<String>,
    #[serde(rename = "sysObjectID")]
    pub sys_object_id: Option<String>,
    #[serde(deserialize_with = "opt_i64")]
    pub timeout: Option<i64>,
    #[serde(deserialize_with = "null_default")]
    pub transport: String,
    #[serde(rename = "type", deserialize_with = "null_default")]
    pub device_type: String,
    #[serde(deserialize_with = "opt_i64")]
    pub uptime: Option<i64>,
    pub version: Option<String>,
}

/// Request body for `POST /devices`.
///
/// Only `hostname` is required; unset fields are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceCreateRequest {
    #[serde(default, deserialize_with = "null_default")]
    pub hostname: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not", deserialize_with = "null_default")]
    pub force_add: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hardware: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os: Option<String>,
    #[serde(rename = "override_sysLocation", default, skip_serializing_if = "std::ops::Not::not", deserialize_with = "null_default")]
    pub override_sys_location: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not", deserialize_with = "null_default")]
    pub ping_fallback: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poller_group: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    /// ifIndex(1), ifName(2), ifDescr(3), ifAlias(4)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port_association_mode: Option<i64>,
    /// MD5, SHA, SHA-224, SHA-256, SHA-384, SHA-512
    #[serde(rename = "authalgo", skip_serializing_if = "Option::is_none")]
    pub snmp_auth_algo: Option<String>,
    /// noAuthNoPriv, authNoPriv, authPriv
    #[serde(rename = "authlevel", skip_serializing_if = "Option::is_none")]
    pub snmp_auth_level: Option<String>,
    #[serde(rename = "authname", skip_serializing_if = "Option::is_none")]
    pub snmp_auth_name: Option<String>,
    #[serde(rename = "authpass", skip_serializing_if = "Option::is_none")]
    pub snmp_auth_pass: Option<String>,
    /// DES, AES, AES-192, AES-256, AES-256-C
    #[serde(rename = "cryptoalgo", skip_serializing_if = "Option::is_none")]
    pub snmp_crypto_algo: Option<String>,
    #[serde(rename = "cryptopass", skip_serializing_if = "Option::is_none")]
    pub snmp_crypto_pass: Option<String>,
    #[serde(rename = "community", skip_serializing_if = "Option::is_none")]
    pub snmp_community: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not", deserialize_with = "null_default")]
    pub snmp_disable: bool,
    /// v1, v2c, v3
    #[serde(rename = "snmpver", skip_serializing_if = "Option::is_none")]
    pub snmp_version: Option<String>,
    #[serde(rename = "sysName", skip_serializing_if = "Option::is_none")]
    pub sys_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transport: Option<String>,
}

impl DeviceCreateRequest {
    /// Minimal request for `hostname`; set other fields directly
    pub fn new(hostname: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            ..Self::default()
        }
    }
}

/// Request body for `PATCH /devices/{id}`.
///
/// `field` and `data` are parallel arrays: `data[i]` is the new value of
/// `field[i]`. Only list the columns being changed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceUpdateRequest {
    #[serde(default, deserialize_with = "null_default")]
    pub field: Vec<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub data: Vec<serde_json::Value>,
}

impl DeviceUpdateRequest {
    /// Create an empty update
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `field = value` to the update
    #[must_use]
    pub fn set(mut self, field: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.field.push(field.into());
        self.data.push(value.into());
        self
    }

    /// True when no field has been set
    pub fn is_empty(&self) -> bool {
        self.field.is_empty()
    }
}

/// List of devices
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(deserialize_with = "null_default")]
    pub devices: Vec<Device>,
}

/// Filters for `GET /devices`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DevicesQuery {
    pub device_id: Option<i64>,
    pub display: Option<String>,
    pub hostname: Option<String>,
    pub ipv4: Option<String>,
    pub ipv6: Option<String>,
    pub location: Option<String>,
    pub location_id: Option<i64>,
    pub mac: Option<String>,
    pub order: Option<String>,
    pub os: Option<String>,
    pub sys_name: Option<String>,
    pub device_type: Option<String>,
}

impl DevicesQuery {
    /// Empty filter set, lists every device
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter on device id
    #[must_use]
    pub fn device_id(mut self, id: i64) -> Self {
        self.device_id = Some(id);
        self
    }

    /// Filter on hostname
    #[must_use]
    pub fn hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = Some(hostname.into());
        self
    }

    /// Filter on OS
    #[must_use]
    pub fn os(mut self, os: impl Into<String>) -> Self {
        self.os = Some(os.into());
        self
    }

    /// Filter on location name
    #[must_use]
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Filter on location id
    #[must_use]
    pub fn location_id(mut self, id: i64) -> Self {
        self.location_id = Some(id);
        self
    }

    /// Filter on MAC address
    #[must_use]
    pub fn mac(mut self, mac: impl Into<String>) -> Self {
        self.mac = Some(mac.into());
        self
    }

    /// Filter on IPv4 address
    #[must_use]
    pub fn ipv4(mut self, ip: impl Into<String>) -> Self {
        self.ipv4 = Some(ip.into());
        self
    }

    /// Filter on IPv6 address
    #[must_use]
    pub fn ipv6(mut self, ip: impl Into<String>) -> Self {
        self.ipv6 = Some(ip.into());
        self
    }

    /// Filter on device type (`server`, `network`, ...)
    #[must_use]
    pub fn device_type(mut self, device_type: impl Into<String>) -> Self {
        self.device_type = Some(device_type.into());
        self
    }

    /// Sort order, e.g. `hostname DESC`
    #[must_use]
    pub fn order(mut self, order: impl Into<String>) -> Self {
        self.order = Some(order.into());
        self
    }
}

impl ToQuery for DevicesQuery {
    fn to_query(&self) -> QueryParams {
        let mut q = QueryParams::new();
        q.set_opt("device_id", self.device_id)
            .set_opt("display", self.display.as_deref())
            .set_opt("hostname", self.hostname.as_deref())
            .set_opt("ipv4", self.ipv4.as_deref())
            .set_opt("ipv6", self.ipv6.as_deref())
            .set_opt("location", self.location.as_deref())
            .set_opt("location_id", self.location_id)
            .set_opt("mac", self.mac.as_deref())
            .set_opt("order", self.order.as_deref())
            .set_opt("os", self.os.as_deref())
            .set_opt("sysName", self.sys_name.as_deref())
            .set_opt("type", self.device_type.as_deref());
        q
    }
}

/// Availability over one window
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceAvailability {
    /// Window length in seconds
    #[serde(deserialize_with = "null_default")]
    pub duration: i64,
    pub availability_perc: Float64,
}

/// Availability windows for a device
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceAvailabilityResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(deserialize_with = "null_default")]
    pub availability: Vec<DeviceAvailability>,
}

/// A detected outage, unix timestamps
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceOutage {
    #[serde(deserialize_with = "null_default")]
    pub going_down: i64,
    #[serde(deserialize_with = "opt_i64")]
    pub up_again: Option<i64>,
}

/// Outages for a device
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceOutagesResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(deserialize_with = "null_default")]
    pub outages: Vec<DeviceOutage>,
}

/// Graph descriptor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceGraph {
    #[serde(deserialize_with = "null_default")]
    pub desc: String,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
}

/// Available graphs (also used for health and wireless graphs)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceGraphsResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(deserialize_with = "null_default")]
    pub graphs: Vec<DeviceGraph>,
}

/// Port of a device.
///
/// Only `ifName` is returned unless `columns` asks for more; the extra
/// columns land in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DevicePort {
    #[serde(rename = "ifName", deserialize_with = "null_default")]
    pub if_name: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Ports of a device
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DevicePortsResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(deserialize_with = "null_default")]
    pub ports: Vec<DevicePort>,
}

/// Forwarding database entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceFdb {
    #[serde(deserialize_with = "null_default")]
    pub ports_fdb_id: i64,
    #[serde(deserialize_with = "null_default")]
    pub port_id: i64,
    #[serde(deserialize_with = "null_default")]
    pub mac_address: String,
    #[serde(deserialize_with = "null_default")]
    pub vlan_id: i64,
    #[serde(deserialize_with = "null_default")]
    pub device_id: i64,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// FDB entries of a device
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceFdbResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(deserialize_with = "null_default")]
    pub fdb: Vec<DeviceFdb>,
}

/// Network access control session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceNac {
    #[serde(deserialize_with = "null_default")]
    pub ports_nac_id: i64,
    #[serde(deserialize_with = "null_default")]
    pub auth_id: String,
    #[serde(deserialize_with = "null_default")]
    pub device_id: i64,
    #[serde(deserialize_with = "null_default")]
    pub port_id: i64,
    #[serde(deserialize_with = "null_default")]
    pub domain: String,
    #[serde(deserialize_with = "null_default")]
    pub username: String,
    #[serde(deserialize_with = "null_default")]
    pub mac_address: String,
    #[serde(deserialize_with = "null_default")]
    pub ip_address: String,
    #[serde(deserialize_with = "null_default")]
    pub host_mode: String,
    #[serde(deserialize_with = "null_default")]
    pub authz_status: String,
    #[serde(deserialize_with = "null_default")]
    pub authz_by: String,
    #[serde(deserialize_with = "null_default")]
    pub authc_status: String,
    #[serde(deserialize_with = "null_default")]
    pub method: String,
    #[serde(deserialize_with = "opt_string")]
    pub timeout: Option<String>,
    #[serde(deserialize_with = "opt_string")]
    pub time_left: Option<String>,
    #[serde(deserialize_with = "opt_i64")]
    pub vlan: Option<i64>,
    pub time_elapsed: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub historical: i64,
}

/// NAC sessions of a device
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceNacResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(deserialize_with = "null_default")]
    pub nac: Vec<DeviceNac>,
}

/// IPv4 address configured on a device
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceIpAddress {
    #[serde(deserialize_with = "null_default")]
    pub ipv4_address_id: i64,
    #[serde(deserialize_with = "null_default")]
    pub ipv4_address: String,
    #[serde(deserialize_with = "null_default")]
    pub ipv4_prefixlen: i64,
    #[serde(deserialize_with = "null_default")]
    pub ipv4_network_id: i64,
    #[serde(deserialize_with = "null_default")]
    pub port_id: i64,
    #[serde(deserialize_with = "null_default")]
    pub context_name: String,
}

/// Addresses of a device
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceIpAddressesResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(rename = "addresses", deserialize_with = "null_default")]
    pub ip_addresses: Vec<DeviceIpAddress>,
}

/// Port stack mapping (`ifStackTable`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DevicePortStack {
    #[serde(deserialize_with = "null_default")]
    pub device_id: i64,
    #[serde(deserialize_with = "null_default")]
    pub port_id_high: i64,
    #[serde(deserialize_with = "null_default")]
    pub port_id_low: i64,
    #[serde(rename = "ifStackStatus", deserialize_with = "null_default")]
    pub if_stack_status: String,
}

/// Port stack of a device
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DevicePortStackResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(rename = "mappings", deserialize_with = "null_default")]
    pub port_stack: Vec<DevicePortStack>,
}

/// Optical transceiver
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceTransceiver {
    #[serde(deserialize_with = "null_default")]
    pub id: i64,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub device_id: i64,
    #[serde(deserialize_with = "null_default")]
    pub port_id: i64,
    #[serde(deserialize_with = "opt_string")]
    pub index: Option<String>,
    #[serde(rename = "type")]
    pub transceiver_type: Option<String>,
    pub vendor: Option<String>,
    pub oui: Option<String>,
    pub model: Option<String>,
    pub revision: Option<String>,
    pub serial: Option<String>,
    pub date: Option<String>,
    pub ddm: Bool,
    pub encoding: Option<String>,
    pub cable: Option<String>,
    #[serde(deserialize_with = "opt_i64")]
    pub distance: Option<i64>,
    #[serde(deserialize_with = "opt_i64")]
    pub wavelength: Option<i64>,
    pub connector: Option<String>,
    #[serde(deserialize_with = "opt_i64")]
    pub channels: Option<i64>,
}

/// Transceivers of a device
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceTransceiversResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(deserialize_with = "null_default")]
    pub transceivers: Vec<DeviceTransceiver>,
}

/// Filters for `GET /devices/{id}/components`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentsQuery {
    pub component_type: Option<String>,
    pub id: Option<i64>,
    pub label: Option<String>,
    pub status: Option<String>,
    pub disabled: Option<bool>,
    pub ignore: Option<bool>,
}

impl ComponentsQuery {
    /// Empty filter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter on component type
    #[must_use]
    pub fn component_type(mut self, component_type: impl Into<String>) -> Self {
        self.component_type = Some(component_type.into());
        self
    }

    /// Filter on component id
    #[must_use]
    pub fn id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Filter on label
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Filter on status
    #[must_use]
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Filter on the disabled flag
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = Some(disabled);
        self
    }

    /// Filter on the ignore flag
    #[must_use]
    pub fn ignore(mut self, ignore: bool) -> Self {
        self.ignore = Some(ignore);
        self
    }
}

impl ToQuery for ComponentsQuery {
    fn to_query(&self) -> QueryParams {
        let mut q = QueryParams::new();
        q.set_opt("type", self.component_type.as_deref())
            .set_opt("id", self.id)
            .set_opt("label", self.label.as_deref())
            .set_opt("status", self.status.as_deref())
            .set_opt("disabled", self.disabled.map(u8::from))
            .set_opt("ignore", self.ignore.map(u8::from));
        q
    }
}

/// Device component.
///
/// Components carry arbitrary per-type attributes next to the fixed
/// columns; those are kept in `attributes`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceComponent {
    #[serde(rename = "type", deserialize_with = "null_default")]
    pub component_type: String,
    #[serde(deserialize_with = "null_default")]
    pub label: String,
    #[serde(deserialize_with = "opt_string")]
    pub status: Option<String>,
    pub ignore: Bool,
    pub disabled: Bool,
    #[serde(deserialize_with = "opt_string")]
    pub error: Option<String>,
    #[serde(flatten)]
    pub attributes: HashMap<String, serde_json::Value>,
}

/// Components of a device, keyed by component id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceComponentsResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(deserialize_with = "null_default")]
    pub components: BTreeMap<String, DeviceComponent>,
}

/// Polling info of a single port
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortStats {
    #[serde(deserialize_with = "null_default")]
    pub port_id: i64,
    #[serde(deserialize_with = "null_default")]
    pub device_id: i64,
    #[serde(deserialize_with = "opt_i64")]
    pub poll_prev: Option<i64>,
    #[serde(deserialize_with = "opt_i64")]
    pub poll_period: Option<i64>,
    /// Columns requested through `columns`
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Response of `GET /devices/{id}/ports/{ifname}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DevicePortStatsResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(deserialize_with = "null_default")]
    pub port: PortStats,
}

/// Maintenance state of a device
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceMaintenanceResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(deserialize_with = "null_default")]
    pub is_under_maintenance: bool,
}

/// Request body for `POST /devices/{id}/maintenance`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceMaintenanceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// `Y-m-d H:i:s`, defaults to now on the server
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    /// `H:i`, e.g. `2:00`
    #[serde(default, deserialize_with = "null_default")]
    pub duration: String,
}

impl DeviceMaintenanceRequest {
    /// Maintenance window of `duration`, starting now.
    ///
    /// Sub-minute precision is dropped.
    pub fn new(duration: Duration) -> Self {
        let minutes = duration.as_secs() / 60;
        Self {
            duration: format!("{}:{:02}", minutes / 60, minutes % 60),
            ..Self::default()
        }
    }

    /// Set the title
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the notes
    #[must_use]
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Start the window at `start` (server local time)
    #[must_use]
    pub fn start(mut self, start: NaiveDateTime) -> Self {
        self.start = Some(start.format("%Y-%m-%d %H:%M:%S").to_string());
        self
    }
}

/// Groups a device belongs to
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceGroupsResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(deserialize_with = "null_default")]
    pub groups: Vec<DeviceGroup>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn device_decodes_mixed_types() {
        let json = r#"{
            "device_id": 12,
            "hostname": "core-sw1",
            "sysName": "core-sw1.example.net",
            "os": "ios",
            "status": true,
            "disabled": 0,
            "ignore": 1,
            "lat": "51.5072",
            "lng": -0.1276,
            "last_pulled": "2024-01-02 03:04:05",
            "poller_group": "0",
            "uptime": null,
            "type": "network"
        }"#;
        let device: Device = serde_json::from_str(json).unwrap();
        assert_eq!(device.device_id, 12);
        assert_eq!(device.sys_name.as_deref(), Some("core-sw1.example.net"));
        assert!(device.status.get());
        assert!(!device.disabled.get());
        assert!(device.ignore.get());
        assert_eq!(device.latitude, Some(Float64(51.5072)));
        assert_eq!(device.longitude, Some(Float64(-0.1276)));
        assert_eq!(device.last_polled.as_deref(), Some("2024-01-02 03:04:05"));
        assert_eq!(device.poller_group, Some(0));
        assert_eq!(device.uptime, None);
        assert_eq!(device.device_type, "network");
    }

    #[test]
    fn create_request_omits_unset_fields() {
        let mut req = DeviceCreateRequest::new("10.0.0.1");
        req.snmp_version = Some("v2c".to_string());
        req.snmp_community = Some("public".to_string());
        req.force_add = true;

        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "hostname": "10.0.0.1",
                "snmpver": "v2c",
                "community": "public",
                "force_add": true
            })
        );
    }

    #[test]
    fn update_request_keeps_fields_aligned() {
        let req = DeviceUpdateRequest::new()
            .set("notes", "moved to rack 4")
            .set("ignore", 1)
            .set("purpose", serde_json::Value::Null);

        assert_eq!(req.field, vec!["notes", "ignore", "purpose"]);
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({
                "field": ["notes", "ignore", "purpose"],
                "data": ["moved to rack 4", 1, null]
            })
        );
    }

    #[test]
    fn devices_query_uses_api_names() {
        let q = DevicesQuery::new()
            .hostname("core-sw1")
            .device_type("network")
            .location_id(3)
            .to_query();
        assert_eq!(q.encode(), "hostname=core-sw1&location_id=3&type=network");
        assert!(DevicesQuery::new().to_query().is_empty());
    }

    #[test]
    fn components_query_sends_flags_as_ints() {
        let q = ComponentsQuery::new().component_type("ntp").disabled(false).to_query();
        assert_eq!(q.encode(), "disabled=0&type=ntp");
    }

    #[test]
    fn component_keeps_extra_attributes() {
        let json = r#"{
            "2": {"TestAttribute-1": "Value1", "type": "TestComponent", "label": "Test",
                  "status": 1, "ignore": 0, "disabled": 0, "error": ""}
        }"#;
        let components: BTreeMap<String, DeviceComponent> = serde_json::from_str(json).unwrap();
        let c = &components["2"];
        assert_eq!(c.component_type, "TestComponent");
        assert_eq!(c.status.as_deref(), Some("1"));
        assert_eq!(c.attributes["TestAttribute-1"], "Value1");
        assert!(!c.attributes.contains_key("label"));
    }

    #[test]
    fn maintenance_request_formats_duration_and_start() {
        let start = NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(22, 0, 0)
            .unwrap();
        let req = DeviceMaintenanceRequest::new(Duration::from_secs(90 * 60))
            .title("firmware upgrade")
            .start(start);

        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({
                "title": "firmware upgrade",
                "start": "2024-06-01 22:00:00",
                "duration": "1:30"
            })
        );
    }
}
