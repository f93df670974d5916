//! Layer 2 models: VLANs, discovered links, forwarding and NAC tables

use super::base::BaseResponse;
use super::scalar::{Bool, null_default, opt_i64, opt_string};
use crate::common::query::{QueryParams, ToQuery};
use serde::{Deserialize, Serialize};

/// VLAN seen on a device
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vlan {
    #[serde(deserialize_with = "opt_i64")]
    pub vlan_id: Option<i64>,
    #[serde(deserialize_with = "opt_i64")]
    pub device_id: Option<i64>,
    /// 802.1Q tag
    #[serde(deserialize_with = "opt_i64")]
    pub vlan_vlan: Option<i64>,
    #[serde(deserialize_with = "opt_i64")]
    pub vlan_domain: Option<i64>,
    #[serde(deserialize_with = "opt_string")]
    pub vlan_name: Option<String>,
    #[serde(deserialize_with = "opt_string")]
    pub vlan_type: Option<String>,
    #[serde(deserialize_with = "opt_i64")]
    pub vlan_state: Option<i64>,
}

/// List of VLANs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VlansResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(deserialize_with = "null_default")]
    pub vlans: Vec<Vlan>,
}

/// CDP/LLDP neighbour link
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
    #[serde(deserialize_with = "null_default")]
    pub id: i64,
    #[serde(deserialize_with = "opt_i64")]
    pub local_port_id: Option<i64>,
    #[serde(deserialize_with = "opt_i64")]
    pub local_device_id: Option<i64>,
    #[serde(deserialize_with = "opt_i64")]
    pub remote_port_id: Option<i64>,
    pub active: Bool,
    pub protocol: Option<String>,
    pub remote_hostname: Option<String>,
    #[serde(deserialize_with = "opt_i64")]
    pub remote_device_id: Option<i64>,
    pub remote_port: Option<String>,
    pub remote_platform: Option<String>,
    pub remote_version: Option<String>,
}

/// List of links
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinksResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(deserialize_with = "null_default")]
    pub links: Vec<Link>,
}

/// Forwarding database entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortFdb {
    #[serde(deserialize_with = "null_default")]
    pub ports_fdb_id: i64,
    #[serde(deserialize_with = "opt_i64")]
    pub port_id: Option<i64>,
    #[serde(deserialize_with = "null_default")]
    pub mac_address: String,
    #[serde(deserialize_with = "opt_i64")]
    pub vlan_id: Option<i64>,
    #[serde(deserialize_with = "opt_i64")]
    pub device_id: Option<i64>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Forwarding database entries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortFdbResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(deserialize_with = "null_default")]
    pub ports_fdb: Vec<PortFdb>,
}

/// Where a MAC address was learned, resolved to device and port names
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortFdbDetail {
    pub hostname: Option<String>,
    #[serde(rename = "sysName")]
    pub sys_name: Option<String>,
    #[serde(rename = "ifName")]
    pub if_name: Option<String>,
    #[serde(rename = "ifAlias")]
    pub if_alias: Option<String>,
    #[serde(rename = "ifDescr")]
    pub if_descr: Option<String>,
    pub last_seen: Option<String>,
    pub updated_at: Option<String>,
}

/// Response of `GET /resources/fdb/{mac}/detail`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortFdbDetailResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(deserialize_with = "null_default")]
    pub mac: String,
    /// Vendor resolved from the OUI
    #[serde(deserialize_with = "null_default")]
    pub mac_oui: String,
    #[serde(deserialize_with = "null_default")]
    pub ports_fdb: Vec<PortFdbDetail>,
}

/// 802.1X / MAB session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortNac {
    #[serde(deserialize_with = "opt_i64")]
    pub ports_nac_id: Option<i64>,
    #[serde(deserialize_with = "opt_string")]
    pub auth_id: Option<String>,
    #[serde(deserialize_with = "opt_i64")]
    pub device_id: Option<i64>,
    #[serde(deserialize_with = "opt_i64")]
    pub port_id: Option<i64>,
    pub domain: Option<String>,
    pub username: Option<String>,
    pub mac_address: Option<String>,
    pub ip_address: Option<String>,
    pub host_mode: Option<String>,
    pub authz_status: Option<String>,
    pub authz_by: Option<String>,
    pub authc_status: Option<String>,
    pub method: Option<String>,
    #[serde(deserialize_with = "opt_string")]
    pub timeout: Option<String>,
    #[serde(deserialize_with = "opt_string")]
    pub time_left: Option<String>,
    #[serde(deserialize_with = "opt_i64")]
    pub vlan: Option<i64>,
    #[serde(deserialize_with = "opt_string")]
    pub time_elapsed: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub historical: Bool,
}

/// NAC sessions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortNacResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(deserialize_with = "null_default")]
    pub ports_nac: Vec<PortNac>,
}

/// `columns` / `filter` options shared by the switching endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SwitchingQuery {
    pub columns: Option<String>,
    pub filter: Option<String>,
}

impl SwitchingQuery {
    /// No options
    pub fn new() -> Self {
        Self::default()
    }

    /// Comma separated column list
    #[must_use]
    pub fn columns(mut self, columns: impl Into<String>) -> Self {
        self.columns = Some(columns.into());
        self
    }

    /// Server-side filter expression
    #[must_use]
    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }
}

impl ToQuery for SwitchingQuery {
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
    fn vlan_accepts_string_ids() {
        let json = r#"{"vlan_id":"7","device_id":"1","vlan_vlan":"100","vlan_domain":"1",
                       "vlan_name":"users","vlan_type":"ethernet","vlan_state":0}"#;
        let vlan: Vlan = serde_json::from_str(json).unwrap();
        assert_eq!(vlan.vlan_vlan, Some(100));
        assert_eq!(vlan.vlan_state, Some(0));
        assert_eq!(vlan.vlan_name.as_deref(), Some("users"));
    }

    #[test]
    fn link_with_null_platform() {
        let json = r#"{"id":3,"local_port_id":10,"active":1,"protocol":"lldp",
                       "remote_hostname":"sw2","remote_platform":null}"#;
        let link: Link = serde_json::from_str(json).unwrap();
        assert!(link.active.get());
        assert_eq!(link.remote_platform, None);
    }
}
