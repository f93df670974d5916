//! Routing endpoints: BGP, OSPF, VRF, MPLS, IPsec and IP resources

use crate::client::LibreNmsClient;
use crate::common::query::{QueryParams, ToQuery, segment};
use crate::error::LibreNmsError;
use crate::models::*;
use std::fmt;

/// Address family selector for the IP resource endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IpFamily {
    Ipv4,
    Ipv6,
}

impl IpFamily {
    /// Path segment
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ipv4 => "ipv4",
            Self::Ipv6 => "ipv6",
        }
    }
}

impl fmt::Display for IpFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Routing operations, obtained from [`LibreNmsClient::routing`]
#[derive(Debug, Clone, Copy)]
pub struct RoutingApi<'a> {
    client: &'a LibreNmsClient,
}

impl<'a> RoutingApi<'a> {
    pub(crate) fn new(client: &'a LibreNmsClient) -> Self {
        Self { client }
    }

    /// BGP sessions matching `query`
    pub async fn list_bgp(&self, query: &BgpQuery) -> Result<BgpResponse, LibreNmsError> {
        let params = query.to_query();
        self.client.http().get("bgp", Some(&params)).await
    }

    /// One BGP session by id
    pub async fn get_bgp(&self, id: i64) -> Result<BgpSessionResponse, LibreNmsError> {
        self.client.http().get(&format!("bgp/{id}"), None).await
    }

    /// Set the description of a BGP session
    pub async fn update_bgp_description(&self, id: i64, description: &str) -> Result<BaseResponse, LibreNmsError> {
        let body = BgpDescriptionUpdate {
            bgp_descr: description.to_string(),
        };
        self.client.http().post(&format!("bgp/{id}"), Some(&body)).await
    }

    /// BGP prefix counters, optionally for one device
    pub async fn list_bgp_counters(&self, hostname: Option<&str>) -> Result<BgpCountersResponse, LibreNmsError> {
        self.client
            .http()
            .get("routing/bgp/cbgp", Some(&hostname_query(hostname)))
            .await
    }

    /// IP addresses, optionally of one family
    pub async fn list_ip_addresses(&self, family: Option<IpFamily>) -> Result<IpAddressesResponse, LibreNmsError> {
        let path = match family {
            Some(f) => format!("resources/ip/addresses/{f}"),
            None => "resources/ip/addresses".to_string(),
        };
        self.client.http().get(&path, None).await
    }

    /// IP addresses inside one network
    pub async fn network_ip_addresses(&self, network_id: i64) -> Result<IpAddressesResponse, LibreNmsError> {
        self.client
            .http()
            .get(&format!("resources/ip/networks/{network_id}/ip"), None)
            .await
    }

    /// IP networks, optionally of one family
    pub async fn list_ip_networks(&self, family: Option<IpFamily>) -> Result<IpNetworksResponse, LibreNmsError> {
        let path = match family {
            Some(f) => format!("resources/ip/networks/{f}"),
            None => "resources/ip/networks".to_string(),
        };
        self.client.http().get(&path, None).await
    }

    /// IPsec tunnels of a device
    pub async fn list_ipsec(&self, hostname: &str) -> Result<IpsecResponse, LibreNmsError> {
        self.client
            .http()
            .get(&format!("routing/ipsec/data/{}", segment(hostname)), None)
            .await
    }

    /// OSPF neighbours, optionally of one device
    pub async fn list_ospf(&self, hostname: Option<&str>) -> Result<OspfResponse, LibreNmsError> {
        self.client.http().get("ospf", Some(&hostname_query(hostname))).await
    }

    /// OSPF interfaces
    pub async fn list_ospf_ports(&self) -> Result<OspfPortsResponse, LibreNmsError> {
        self.client.http().get("ospf_ports", None).await
    }

    /// OSPFv3 neighbours, optionally of one device
    pub async fn list_ospfv3(&self, hostname: Option<&str>) -> Result<Ospfv3Response, LibreNmsError> {
        self.client.http().get("ospfv3", Some(&hostname_query(hostname))).await
    }

    /// OSPFv3 interfaces
    pub async fn list_ospfv3_ports(&self) -> Result<Ospfv3PortsResponse, LibreNmsError> {
        self.client.http().get("ospfv3_ports", None).await
    }

    /// VRFs matching `query`
    pub async fn list_vrf(&self, query: &VrfQuery) -> Result<VrfResponse, LibreNmsError> {
        let params = query.to_query();
        self.client.http().get("routing/vrf", Some(&params)).await
    }

    /// One VRF by id; the API wraps it in a list
    pub async fn get_vrf(&self, id: i64) -> Result<VrfResponse, LibreNmsError> {
        self.client.http().get(&format!("routing/vrf/{id}"), None).await
    }

    /// MPLS services, optionally of one device
    pub async fn list_mpls_services(&self, hostname: Option<&str>) -> Result<MplsServicesResponse, LibreNmsError> {
        self.client
            .http()
            .get("routing/mpls/services", Some(&hostname_query(hostname)))
            .await
    }

    /// MPLS SAPs, optionally of one device
    pub async fn list_mpls_saps(&self, hostname: Option<&str>) -> Result<MplsSapsResponse, LibreNmsError> {
        self.client
            .http()
            .get("routing/mpls/saps", Some(&hostname_query(hostname)))
            .await
    }
}

fn hostname_query(hostname: Option<&str>) -> QueryParams {
    let mut params = QueryParams::new();
    params.set_opt("hostname", hostname);
    params
}
