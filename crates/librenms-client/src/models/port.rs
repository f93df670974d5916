//! Port models
//!
//! The ports table is wide (well over a hundred IF-MIB columns, many only
//! present on some platforms). The commonly used columns are typed; every
//! other returned column is kept in `extra`.

use super::base::BaseResponse;
use super::routing::IpAddress;
use super::scalar::{Bool, null_default, opt_i64, opt_string};
use crate::common::query::{QueryParams, ToQuery};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Port (interface)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Port {
    #[serde(deserialize_with = "null_default")]
    pub port_id: i64,
    #[serde(deserialize_with = "opt_i64")]
    pub device_id: Option<i64>,
    #[serde(deserialize_with = "opt_string")]
    pub port_descr_type: Option<String>,
    #[serde(deserialize_with = "opt_string")]
    pub port_descr_descr: Option<String>,
    #[serde(deserialize_with = "opt_string")]
    pub port_descr_circuit: Option<String>,
    #[serde(deserialize_with = "opt_string")]
    pub port_descr_speed: Option<String>,
    #[serde(deserialize_with = "opt_string")]
    pub port_descr_notes: Option<String>,
    #[serde(rename = "ifDescr", deserialize_with = "opt_string")]
    pub if_descr: Option<String>,
    #[serde(rename = "ifName", deserialize_with = "opt_string")]
    pub if_name: Option<String>,
    #[serde(rename = "portName", deserialize_with = "opt_string")]
    pub port_name: Option<String>,
    #[serde(rename = "ifIndex", deserialize_with = "opt_i64")]
    pub if_index: Option<i64>,
    #[serde(rename = "ifSpeed", deserialize_with = "opt_i64")]
    pub if_speed: Option<i64>,
    #[serde(rename = "ifHighSpeed", deserialize_with = "opt_i64")]
    pub if_high_speed: Option<i64>,
    #[serde(rename = "ifOperStatus", deserialize_with = "opt_string")]
    pub if_oper_status: Option<String>,
    #[serde(rename = "ifOperStatus_prev", deserialize_with = "opt_string")]
    pub if_oper_status_prev: Option<String>,
    #[serde(rename = "ifAdminStatus", deserialize_with = "opt_string")]
    pub if_admin_status: Option<String>,
    #[serde(rename = "ifAdminStatus_prev", deserialize_with = "opt_string")]
    pub if_admin_status_prev: Option<String>,
    #[serde(rename = "ifDuplex", deserialize_with = "opt_string")]
    pub if_duplex: Option<String>,
    #[serde(rename = "ifMtu", deserialize_with = "opt_i64")]
    pub if_mtu: Option<i64>,
    #[serde(rename = "ifType", deserialize_with = "opt_string")]
    pub if_type: Option<String>,
    #[serde(rename = "ifAlias", deserialize_with = "opt_string")]
    pub if_alias: Option<String>,
    #[serde(rename = "ifPhysAddress", deserialize_with = "opt_string")]
    pub if_phys_address: Option<String>,
    #[serde(rename = "ifLastChange", deserialize_with = "opt_i64")]
    pub if_last_change: Option<i64>,
    #[serde(rename = "ifVlan", deserialize_with = "opt_string")]
    pub if_vlan: Option<String>,
    #[serde(rename = "ifTrunk", deserialize_with = "opt_string")]
    pub if_trunk: Option<String>,
    #[serde(rename = "ifVrf", deserialize_with = "opt_i64")]
    pub if_vrf: Option<i64>,
    pub ignore: Bool,
    pub disabled: Bool,
    pub deleted: Bool,
    #[serde(rename = "ifInOctets", deserialize_with = "opt_i64")]
    pub if_in_octets: Option<i64>,
    #[serde(rename = "ifOutOctets", deserialize_with = "opt_i64")]
    pub if_out_octets: Option<i64>,
    #[serde(rename = "ifInOctets_rate", deserialize_with = "opt_i64")]
    pub if_in_octets_rate: Option<i64>,
    #[serde(rename = "ifOutOctets_rate", deserialize_with = "opt_i64")]
    pub if_out_octets_rate: Option<i64>,
    #[serde(rename = "ifInErrors", deserialize_with = "opt_i64")]
    pub if_in_errors: Option<i64>,
    #[serde(rename = "ifOutErrors", deserialize_with = "opt_i64")]
    pub if_out_errors: Option<i64>,
    #[serde(rename = "ifInUcastPkts", deserialize_with = "opt_i64")]
    pub if_in_ucast_pkts: Option<i64>,
    #[serde(rename = "ifOutUcastPkts", deserialize_with = "opt_i64")]
    pub if_out_ucast_pkts: Option<i64>,
    #[serde(deserialize_with = "opt_i64")]
    pub poll_time: Option<i64>,
    #[serde(deserialize_with = "opt_i64")]
    pub poll_prev: Option<i64>,
    #[serde(deserialize_with = "opt_i64")]
    pub poll_period: Option<i64>,
    /// Remaining columns (counter deltas, PAgP state, ...)
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Optical transceiver of a port
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortTransceiver {
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

/// Request body for `PATCH /ports/{id}/description`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortDescriptionUpdateRequest {
    #[serde(default, deserialize_with = "null_default")]
    pub description: String,
}

/// List of ports
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortsResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(deserialize_with = "null_default")]
    pub ports: Vec<Port>,
}

/// Single port lookups (by id or MAC); the API still returns a list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(deserialize_with = "null_default")]
    pub port: Vec<Port>,
}

/// Addresses configured on a port
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortIpResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(deserialize_with = "null_default")]
    pub addresses: Vec<IpAddress>,
}

/// Transceivers of a port
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortTransceiverResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(deserialize_with = "null_default")]
    pub transceivers: Vec<PortTransceiver>,
}

/// Description of a port
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortDescriptionResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(deserialize_with = "opt_string")]
    pub port_description: Option<String>,
}

/// `columns` / `filter` options of the port endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortsQuery {
    /// Comma separated column list, e.g. `ifName,ifAlias,port_id`
    pub columns: Option<String>,
    pub filter: Option<String>,
}

impl PortsQuery {
    /// No options
    pub fn new() -> Self {
        Self::default()
    }

    /// Return only `columns`
    #[must_use]
    pub fn columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = columns
            .into_iter()
            .map(|c| c.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(",");
        self.columns = Some(joined);
        self
    }

    /// Server-side filter (only used by the MAC lookup)
    #[must_use]
    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }
}

impl ToQuery for PortsQuery {
    fn to_query(&self) -> QueryParams {
        let mut q = QueryParams::new();
        q.set_opt("columns", self.columns.as_deref())
            .set_opt("filter", self.filter.as_deref());
        q
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_keeps_unknown_columns() {
        let json = r#"{"port_id":5,"device_id":"2","ifName":"Gi0/1","ifSpeed":"1000000000",
                       "ifOperStatus":"up","ignore":0,"pagpPortState":"x","ifInOctets_delta":"12"}"#;
        let port: Port = serde_json::from_str(json).unwrap();
        assert_eq!(port.device_id, Some(2));
        assert_eq!(port.if_speed, Some(1_000_000_000));
        assert_eq!(port.if_name.as_deref(), Some("Gi0/1"));
        assert_eq!(port.extra["pagpPortState"], "x");
        assert_eq!(port.extra["ifInOctets_delta"], "12");
        assert!(!port.extra.contains_key("ifName"));
    }

    #[test]
    fn columns_are_comma_joined() {
        let q = PortsQuery::new().columns(["ifName", "port_id"]).to_query();
        assert_eq!(q.get("columns"), Some("ifName,port_id"));
    }
}
