//! Routing models: BGP, OSPF, VRF, MPLS, IPsec and IP address resources
//!
//! Most of these rows are raw MIB columns whose JSON type differs between
//! LibreNMS releases, so ids and counters go through the lenient helpers.

use super::base::BaseResponse;
use super::scalar::{null_default, opt_i64, opt_string};
use crate::common::query::{QueryParams, ToQuery};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// BGP peer session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BgpSession {
    #[serde(rename = "bgpPeer_id", deserialize_with = "null_default")]
    pub bgp_peer_id: i64,
    #[serde(deserialize_with = "null_default")]
    pub device_id: i64,
    #[serde(deserialize_with = "opt_i64")]
    pub vrf_id: Option<i64>,
    pub astext: Option<String>,
    #[serde(rename = "bgpPeerIdentifier", deserialize_with = "null_default")]
    pub peer_identifier: String,
    #[serde(rename = "bgpPeerRemoteAs", deserialize_with = "opt_i64")]
    pub peer_remote_as: Option<i64>,
    #[serde(rename = "bgpPeerState", deserialize_with = "null_default")]
    pub peer_state: String,
    #[serde(rename = "bgpPeerAdminStatus", deserialize_with = "null_default")]
    pub peer_admin_status: String,
    #[serde(rename = "bgpPeerLastErrorCode", deserialize_with = "opt_i64")]
    pub last_error_code: Option<i64>,
    #[serde(rename = "bgpPeerLastErrorSubCode", deserialize_with = "opt_i64")]
    pub last_error_sub_code: Option<i64>,
    #[serde(rename = "bgpPeerLastErrorText")]
    pub last_error_text: Option<String>,
    #[serde(rename = "bgpPeerIface", deserialize_with = "opt_i64")]
    pub peer_iface: Option<i64>,
    #[serde(rename = "bgpLocalAddr")]
    pub local_addr: Option<String>,
    #[serde(rename = "bgpPeerRemoteAddr")]
    pub peer_remote_addr: Option<String>,
    #[serde(rename = "bgpPeerDescr")]
    pub peer_descr: Option<String>,
    #[serde(rename = "bgpPeerInUpdates", deserialize_with = "opt_i64")]
    pub in_updates: Option<i64>,
    #[serde(rename = "bgpPeerOutUpdates", deserialize_with = "opt_i64")]
    pub out_updates: Option<i64>,
    #[serde(rename = "bgpPeerInTotalMessages", deserialize_with = "opt_i64")]
    pub in_total_messages: Option<i64>,
    #[serde(rename = "bgpPeerOutTotalMessages", deserialize_with = "opt_i64")]
    pub out_total_messages: Option<i64>,
    #[serde(rename = "bgpPeerFsmEstablishedTime", deserialize_with = "opt_i64")]
    pub fsm_established_time: Option<i64>,
    #[serde(rename = "bgpPeerInUpdateElapsedTime", deserialize_with = "opt_i64")]
    pub in_update_elapsed_time: Option<i64>,
    pub context_name: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Filters for `GET /bgp`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BgpQuery {
    pub hostname: Option<String>,
    pub asn: Option<i64>,
    pub remote_asn: Option<i64>,
    pub remote_address: Option<String>,
    pub local_address: Option<String>,
    pub bgp_descr: Option<String>,
    pub bgp_state: Option<String>,
    pub bgp_adminstate: Option<String>,
    /// 4 or 6
    pub bgp_family: Option<u8>,
}

impl BgpQuery {
    /// Empty filter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Sessions of one device
    #[must_use]
    pub fn hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = Some(hostname.into());
        self
    }

    /// Sessions whose local AS is `asn`
    #[must_use]
    pub fn asn(mut self, asn: i64) -> Self {
        self.asn = Some(asn);
        self
    }

    /// Sessions to remote AS `asn`
    #[must_use]
    pub fn remote_asn(mut self, asn: i64) -> Self {
        self.remote_asn = Some(asn);
        self
    }

    /// Sessions to `address`
    #[must_use]
    pub fn remote_address(mut self, address: impl Into<String>) -> Self {
        self.remote_address = Some(address.into());
        self
    }

    /// Sessions sourced from `address`
    #[must_use]
    pub fn local_address(mut self, address: impl Into<String>) -> Self {
        self.local_address = Some(address.into());
        self
    }

    /// Sessions whose description matches
    #[must_use]
    pub fn bgp_descr(mut self, descr: impl Into<String>) -> Self {
        self.bgp_descr = Some(descr.into());
        self
    }

    /// Sessions in `state`, e.g. `established`
    #[must_use]
    pub fn bgp_state(mut self, state: impl Into<String>) -> Self {
        self.bgp_state = Some(state.into());
        self
    }

    /// Sessions with admin state `state`, e.g. `start`
    #[must_use]
    pub fn bgp_adminstate(mut self, state: impl Into<String>) -> Self {
        self.bgp_adminstate = Some(state.into());
        self
    }

    /// Address family, 4 or 6
    #[must_use]
    pub fn bgp_family(mut self, family: u8) -> Self {
        self.bgp_family = Some(family);
        self
    }
}

impl ToQuery for BgpQuery {
    fn to_query(&self) -> QueryParams {
        let mut q = QueryParams::new();
        q.set_opt("hostname", self.hostname.as_deref())
            .set_opt("asn", self.asn)
            .set_opt("remote_asn", self.remote_asn)
            .set_opt("remote_address", self.remote_address.as_deref())
            .set_opt("local_address", self.local_address.as_deref())
            .set_opt("bgp_descr", self.bgp_descr.as_deref())
            .set_opt("bgp_state", self.bgp_state.as_deref())
            .set_opt("bgp_adminstate", self.bgp_adminstate.as_deref())
            .set_opt("bgp_family", self.bgp_family);
        q
    }
}

/// List of BGP sessions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BgpResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(deserialize_with = "null_default")]
    pub bgp_sessions: Vec<BgpSession>,
}

/// Single BGP session lookup; the API returns a one-element list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BgpSessionResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(deserialize_with = "null_default")]
    pub bgp_session: Vec<BgpSession>,
}

/// Request body for `POST /bgp/{id}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BgpDescriptionUpdate {
    #[serde(default, deserialize_with = "null_default")]
    pub bgp_descr: String,
}

/// Per address-family BGP prefix counters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BgpCounters {
    #[serde(deserialize_with = "opt_i64")]
    pub device_id: Option<i64>,
    #[serde(rename = "bgpPeerIdentifier", deserialize_with = "null_default")]
    pub peer_identifier: String,
    pub afi: Option<String>,
    pub safi: Option<String>,
    #[serde(rename = "AcceptedPrefixes", deserialize_with = "opt_i64")]
    pub accepted_prefixes: Option<i64>,
    #[serde(rename = "DeniedPrefixes", deserialize_with = "opt_i64")]
    pub denied_prefixes: Option<i64>,
    #[serde(rename = "PrefixAdminLimit", deserialize_with = "opt_i64")]
    pub prefix_admin_limit: Option<i64>,
    #[serde(rename = "PrefixThreshold", deserialize_with = "opt_i64")]
    pub prefix_threshold: Option<i64>,
    #[serde(rename = "PrefixClearThreshold", deserialize_with = "opt_i64")]
    pub prefix_clear_threshold: Option<i64>,
    #[serde(rename = "AdvertisedPrefixes", deserialize_with = "opt_i64")]
    pub advertised_prefixes: Option<i64>,
    #[serde(rename = "SuppressedPrefixes", deserialize_with = "opt_i64")]
    pub suppressed_prefixes: Option<i64>,
    #[serde(rename = "WithdrawnPrefixes", deserialize_with = "opt_i64")]
    pub withdrawn_prefixes: Option<i64>,
    pub context_name: Option<String>,
    /// `*_delta` / `*_prev` counters
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// BGP counters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BgpCountersResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(deserialize_with = "null_default")]
    pub bgp_counters: Vec<BgpCounters>,
}

/// OSPF neighbour
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OspfNeighbor {
    #[serde(deserialize_with = "opt_i64")]
    pub device_id: Option<i64>,
    #[serde(deserialize_with = "opt_i64")]
    pub port_id: Option<i64>,
    #[serde(deserialize_with = "opt_string")]
    pub ospf_nbr_id: Option<String>,
    #[serde(rename = "ospfNbrIpAddr")]
    pub ip_addr: Option<String>,
    #[serde(rename = "ospfNbrAddressLessIndex", deserialize_with = "opt_i64")]
    pub address_less_index: Option<i64>,
    #[serde(rename = "ospfNbrRtrId")]
    pub rtr_id: Option<String>,
    #[serde(rename = "ospfNbrOptions", deserialize_with = "opt_i64")]
    pub options: Option<i64>,
    #[serde(rename = "ospfNbrPriority", deserialize_with = "opt_i64")]
    pub priority: Option<i64>,
    #[serde(rename = "ospfNbrState")]
    pub state: Option<String>,
    #[serde(rename = "ospfNbrEvents", deserialize_with = "opt_i64")]
    pub events: Option<i64>,
    #[serde(rename = "ospfNbrLsRetransQLen", deserialize_with = "opt_i64")]
    pub ls_retrans_q_len: Option<i64>,
    #[serde(rename = "ospfNbmaNbrStatus")]
    pub nbma_nbr_status: Option<String>,
    #[serde(rename = "ospfNbmaNbrPermanence")]
    pub nbma_nbr_permanence: Option<String>,
    #[serde(rename = "ospfNbrHelloSuppressed")]
    pub hello_suppressed: Option<String>,
    pub context_name: Option<String>,
}

/// OSPF neighbours
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OspfResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(rename = "ospf_neighbours", deserialize_with = "null_default")]
    pub neighbors: Vec<OspfNeighbor>,
}

/// OSPF interface.
///
/// Timer and metric columns beyond the ones below are kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OspfPort {
    #[serde(deserialize_with = "null_default")]
    pub id: i64,
    #[serde(deserialize_with = "opt_i64")]
    pub device_id: Option<i64>,
    #[serde(deserialize_with = "opt_i64")]
    pub port_id: Option<i64>,
    #[serde(deserialize_with = "opt_string")]
    pub ospf_port_id: Option<String>,
    #[serde(rename = "ospfIfIpAddress")]
    pub ip_address: Option<String>,
    #[serde(rename = "ospfIfAreaId")]
    pub area_id: Option<String>,
    #[serde(rename = "ospfIfType")]
    pub if_type: Option<String>,
    #[serde(rename = "ospfIfAdminStat")]
    pub admin_stat: Option<String>,
    #[serde(rename = "ospfIfState")]
    pub state: Option<String>,
    #[serde(rename = "ospfIfDesignatedRouter")]
    pub designated_router: Option<String>,
    #[serde(rename = "ospfIfBackupDesignatedRouter")]
    pub backup_designated_router: Option<String>,
    #[serde(rename = "ospfIfHelloInterval", deserialize_with = "opt_i64")]
    pub hello_interval: Option<i64>,
    #[serde(rename = "ospfIfRtrDeadInterval", deserialize_with = "opt_i64")]
    pub rtr_dead_interval: Option<i64>,
    #[serde(rename = "ospfIfMetricValue", deserialize_with = "opt_i64")]
    pub metric_value: Option<i64>,
    pub context_name: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// OSPF interfaces
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OspfPortsResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(deserialize_with = "null_default")]
    pub ospf_ports: Vec<OspfPort>,
}

/// OSPFv3 neighbour
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ospfv3Neighbor {
    #[serde(deserialize_with = "null_default")]
    pub id: i64,
    #[serde(deserialize_with = "opt_i64")]
    pub device_id: Option<i64>,
    #[serde(deserialize_with = "opt_i64")]
    pub ospfv3_instance_id: Option<i64>,
    #[serde(deserialize_with = "opt_i64")]
    pub port_id: Option<i64>,
    pub router_id: Option<String>,
    #[serde(rename = "ospfv3NbrIfIndex", deserialize_with = "opt_i64")]
    pub if_index: Option<i64>,
    #[serde(rename = "ospfv3NbrRtrId", deserialize_with = "opt_i64")]
    pub rtr_id: Option<i64>,
    #[serde(rename = "ospfv3NbrAddressType")]
    pub address_type: Option<String>,
    #[serde(rename = "ospfv3NbrAddress")]
    pub address: Option<String>,
    #[serde(rename = "ospfv3NbrPriority", deserialize_with = "opt_i64")]
    pub priority: Option<i64>,
    #[serde(rename = "ospfv3NbrState")]
    pub state: Option<String>,
    #[serde(rename = "ospfv3NbrEvents", deserialize_with = "opt_i64")]
    pub events: Option<i64>,
    pub context_name: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// OSPFv3 neighbours
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ospfv3Response {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(rename = "ospfv3_neighbours", deserialize_with = "null_default")]
    pub neighbors: Vec<Ospfv3Neighbor>,
}

/// OSPFv3 interface
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ospfv3Port {
    #[serde(deserialize_with = "null_default")]
    pub id: i64,
    #[serde(deserialize_with = "opt_i64")]
    pub device_id: Option<i64>,
    #[serde(deserialize_with = "opt_i64")]
    pub ospfv3_instance_id: Option<i64>,
    #[serde(deserialize_with = "opt_i64")]
    pub ospfv3_area_id: Option<i64>,
    #[serde(deserialize_with = "opt_i64")]
    pub port_id: Option<i64>,
    #[serde(rename = "ospfv3IfIndex", deserialize_with = "opt_i64")]
    pub if_index: Option<i64>,
    #[serde(rename = "ospfv3IfType")]
    pub if_type: Option<String>,
    #[serde(rename = "ospfv3IfAdminStatus")]
    pub admin_status: Option<String>,
    #[serde(rename = "ospfv3IfState")]
    pub state: Option<String>,
    #[serde(rename = "ospfv3IfDesignatedRouter", deserialize_with = "opt_string")]
    pub designated_router: Option<String>,
    #[serde(rename = "ospfv3IfBackupDesignatedRouter", deserialize_with = "opt_string")]
    pub backup_designated_router: Option<String>,
    #[serde(rename = "ospfv3IfMetricValue", deserialize_with = "opt_i64")]
    pub metric_value: Option<i64>,
    pub context_name: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// OSPFv3 interfaces
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ospfv3PortsResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(deserialize_with = "null_default")]
    pub ospfv3_ports: Vec<Ospfv3Port>,
}

/// VRF
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vrf {
    #[serde(deserialize_with = "opt_i64")]
    pub vrf_id: Option<i64>,
    #[serde(deserialize_with = "opt_string")]
    pub vrf_oid: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub vrf_name: String,
    #[serde(rename = "mplsVpnVrfRouteDistinguisher")]
    pub route_distinguisher: Option<String>,
    #[serde(rename = "mplsVpnVrfDescription")]
    pub description: Option<String>,
    #[serde(deserialize_with = "opt_i64")]
    pub device_id: Option<i64>,
}

/// List of VRFs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VrfResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(deserialize_with = "null_default")]
    pub vrfs: Vec<Vrf>,
}

/// Filters for `GET /routing/vrf`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VrfQuery {
    pub hostname: Option<String>,
    pub vrfname: Option<String>,
}

impl VrfQuery {
    /// Empty filter set
    pub fn new() -> Self {
        Self::default()
    }

    /// VRFs of one device
    #[must_use]
    pub fn hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = Some(hostname.into());
        self
    }

    /// VRFs named `name`
    #[must_use]
    pub fn vrfname(mut self, name: impl Into<String>) -> Self {
        self.vrfname = Some(name.into());
        self
    }
}

impl ToQuery for VrfQuery {
    fn to_query(&self) -> QueryParams {
        let mut q = QueryParams::new();
        q.set_opt("hostname", self.hostname.as_deref())
            .set_opt("vrfname", self.vrfname.as_deref());
        q
    }
}

/// MPLS service (Nokia TiMOS `svc*` table)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MplsService {
    #[serde(deserialize_with = "null_default")]
    pub svc_id: i64,
    #[serde(deserialize_with = "opt_i64")]
    pub svc_oid: Option<i64>,
    #[serde(deserialize_with = "null_default")]
    pub device_id: i64,
    #[serde(rename = "svcRowStatus")]
    pub row_status: Option<String>,
    #[serde(rename = "svcType")]
    pub svc_type: Option<String>,
    #[serde(rename = "svcCustId", deserialize_with = "opt_i64")]
    pub cust_id: Option<i64>,
    #[serde(rename = "svcAdminStatus")]
    pub admin_status: Option<String>,
    #[serde(rename = "svcOperStatus")]
    pub oper_status: Option<String>,
    #[serde(rename = "svcDescription")]
    pub description: Option<String>,
    #[serde(rename = "svcMtu", deserialize_with = "opt_i64")]
    pub mtu: Option<i64>,
    #[serde(rename = "svcNumSaps", deserialize_with = "opt_i64")]
    pub num_saps: Option<i64>,
    #[serde(rename = "svcNumSdps", deserialize_with = "opt_i64")]
    pub num_sdps: Option<i64>,
    #[serde(rename = "svcLastMgmtChange", deserialize_with = "opt_i64")]
    pub last_mgmt_change: Option<i64>,
    #[serde(rename = "svcLastStatusChange", deserialize_with = "opt_i64")]
    pub last_status_change: Option<i64>,
    #[serde(rename = "svcVRouterId", deserialize_with = "opt_i64")]
    pub vrouter_id: Option<i64>,
    pub hostname: Option<String>,
    /// TLS (VPLS) specific columns
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// MPLS services
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MplsServicesResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(deserialize_with = "null_default")]
    pub mpls_services: Vec<MplsService>,
}

/// MPLS service access point
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MplsSap {
    #[serde(deserialize_with = "null_default")]
    pub sap_id: i64,
    #[serde(deserialize_with = "null_default")]
    pub svc_id: i64,
    #[serde(deserialize_with = "opt_i64")]
    pub svc_oid: Option<i64>,
    #[serde(rename = "sapPortId", deserialize_with = "opt_i64")]
    pub sap_port_id: Option<i64>,
    #[serde(rename = "ifName")]
    pub if_name: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub device_id: i64,
    #[serde(rename = "sapEncapValue", deserialize_with = "opt_string")]
    pub encap_value: Option<String>,
    #[serde(rename = "sapRowStatus")]
    pub row_status: Option<String>,
    #[serde(rename = "sapType")]
    pub sap_type: Option<String>,
    #[serde(rename = "sapDescription")]
    pub description: Option<String>,
    #[serde(rename = "sapAdminStatus")]
    pub admin_status: Option<String>,
    #[serde(rename = "sapOperStatus")]
    pub oper_status: Option<String>,
    #[serde(rename = "sapLastMgmtChange", deserialize_with = "opt_i64")]
    pub last_mgmt_change: Option<i64>,
    #[serde(rename = "sapLastStatusChange", deserialize_with = "opt_i64")]
    pub last_status_change: Option<i64>,
    pub hostname: Option<String>,
}

/// MPLS SAPs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MplsSapsResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(deserialize_with = "null_default")]
    pub saps: Vec<MplsSap>,
}

/// IPsec tunnel
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IpsecTunnel {
    #[serde(deserialize_with = "opt_i64")]
    pub tunnel_id: Option<i64>,
    #[serde(deserialize_with = "opt_i64")]
    pub device_id: Option<i64>,
    #[serde(deserialize_with = "opt_i64")]
    pub peer_port: Option<i64>,
    pub peer_addr: Option<String>,
    pub local_addr: Option<String>,
    #[serde(deserialize_with = "opt_i64")]
    pub local_port: Option<i64>,
    pub tunnel_name: Option<String>,
    pub tunnel_status: Option<String>,
}

/// IPsec tunnels of a device
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IpsecResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(deserialize_with = "null_default")]
    pub ipsec: Vec<IpsecTunnel>,
}

/// IP address row.
///
/// IPv6 rows use the same keys with `ipv6_` prefixes; those land in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IpAddress {
    #[serde(deserialize_with = "opt_i64")]
    pub ipv4_address_id: Option<i64>,
    pub ipv4_address: Option<String>,
    #[serde(deserialize_with = "opt_i64")]
    pub ipv4_prefixlen: Option<i64>,
    #[serde(deserialize_with = "opt_i64")]
    pub ipv4_network_id: Option<i64>,
    #[serde(deserialize_with = "opt_i64")]
    pub port_id: Option<i64>,
    pub context_name: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// List of IP addresses
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IpAddressesResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(deserialize_with = "null_default")]
    pub ip_addresses: Vec<IpAddress>,
}

/// IP network row
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IpNetwork {
    #[serde(deserialize_with = "opt_i64")]
    pub ipv4_network_id: Option<i64>,
    pub ipv4_network: Option<String>,
    pub context_name: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// List of IP networks
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IpNetworksResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(deserialize_with = "null_default")]
    pub ip_networks: Vec<IpNetwork>,
}
