//! Switching endpoints: VLANs, links, FDB and NAC

use crate::client::LibreNmsClient;
use crate::common::query::{ToQuery, segment};
use crate::error::LibreNmsError;
use crate::models::{
    LinksResponse, PortFdbDetailResponse, PortFdbResponse, PortNacResponse, SwitchingQuery, VlansResponse,
};

/// Switching operations, obtained from [`LibreNmsClient::switching`]
///
/// Every method takes a [`SwitchingQuery`] for the optional `columns` and
/// `filter` parameters; pass `&SwitchingQuery::default()` for none.
#[derive(Debug, Clone, Copy)]
pub struct SwitchingApi<'a> {
    client: &'a LibreNmsClient,
}

impl<'a> SwitchingApi<'a> {
    pub(crate) fn new(client: &'a LibreNmsClient) -> Self {
        Self { client }
    }

    /// VLANs of all devices
    pub async fn vlans(&self, query: &SwitchingQuery) -> Result<VlansResponse, LibreNmsError> {
        self.client.http().get("resources/vlans", Some(&query.to_query())).await
    }

    /// VLANs of one device
    pub async fn device_vlans(&self, hostname: &str, query: &SwitchingQuery) -> Result<VlansResponse, LibreNmsError> {
        let path = format!("devices/{}/vlans", segment(hostname));
        self.client.http().get(&path, Some(&query.to_query())).await
    }

    /// Discovered links of all devices
    pub async fn links(&self, query: &SwitchingQuery) -> Result<LinksResponse, LibreNmsError> {
        self.client.http().get("resources/links", Some(&query.to_query())).await
    }

    /// Discovered links of one device
    pub async fn device_links(&self, hostname: &str, query: &SwitchingQuery) -> Result<LinksResponse, LibreNmsError> {
        let path = format!("devices/{}/links", segment(hostname));
        self.client.http().get(&path, Some(&query.to_query())).await
    }

    /// One link by id
    pub async fn link(&self, link_id: i64, query: &SwitchingQuery) -> Result<LinksResponse, LibreNmsError> {
        let path = format!("resources/links/{link_id}");
        self.client.http().get(&path, Some(&query.to_query())).await
    }

    /// Forwarding database, all entries or those of one MAC
    pub async fn fdb(&self, mac: Option<&str>, query: &SwitchingQuery) -> Result<PortFdbResponse, LibreNmsError> {
        let path = with_optional_mac("resources/fdb", mac);
        self.client.http().get(&path, Some(&query.to_query())).await
    }

    /// Where `mac` was learned, with device and port names
    pub async fn fdb_detail(&self, mac: &str, query: &SwitchingQuery) -> Result<PortFdbDetailResponse, LibreNmsError> {
        let path = format!("resources/fdb/{}/detail", segment(mac));
        self.client.http().get(&path, Some(&query.to_query())).await
    }

    /// NAC sessions, all or those of one MAC
    pub async fn nac(&self, mac: Option<&str>, query: &SwitchingQuery) -> Result<PortNacResponse, LibreNmsError> {
        let path = with_optional_mac("resources/nac", mac);
        self.client.http().get(&path, Some(&query.to_query())).await
    }
}

fn with_optional_mac(base: &str, mac: Option<&str>) -> String {
    match mac.filter(|m| !m.is_empty()) {
        Some(mac) => format!("{base}/{}", segment(mac)),
        None => base.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mac_is_optional() {
        assert_eq!(with_optional_mac("resources/fdb", None), "resources/fdb");
        assert_eq!(with_optional_mac("resources/fdb", Some("")), "resources/fdb");
        assert_eq!(
            with_optional_mac("resources/nac", Some("00:11:22:33:44:55")),
            "resources/nac/00:11:22:33:44:55"
        );
    }
}
