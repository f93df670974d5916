//! Port endpoints (`/ports`)

use crate::client::LibreNmsClient;
use crate::common::query::{QueryParams, segment};
use crate::error::LibreNmsError;
use crate::models::{
    PortDescriptionResponse, PortDescriptionUpdateRequest, PortIpResponse, PortResponse,
    PortTransceiverResponse, PortsQuery, PortsResponse,
};

const ENDPOINT: &str = "ports";

/// Port operations, obtained from [`LibreNmsClient::ports`]
#[derive(Debug, Clone, Copy)]
pub struct PortApi<'a> {
    client: &'a LibreNmsClient,
}

impl<'a> PortApi<'a> {
    pub(crate) fn new(client: &'a LibreNmsClient) -> Self {
        Self { client }
    }

    /// All ports, limited to `query.columns` when set
    pub async fn all(&self, query: &PortsQuery) -> Result<PortsResponse, LibreNmsError> {
        let params = columns_only(query);
        self.client.http().get(ENDPOINT, Some(&params)).await
    }

    /// Ports whose ifAlias, ifDescr or ifName contain `search`
    pub async fn search(&self, search: &str, query: &PortsQuery) -> Result<PortsResponse, LibreNmsError> {
        let params = columns_only(query);
        let path = format!("{ENDPOINT}/search/{}", segment(search));
        self.client.http().get(&path, Some(&params)).await
    }

    /// Ports whose `field` contains `search`.
    ///
    /// `field` may list several columns separated by commas.
    pub async fn search_in_field(
        &self,
        field: &str,
        search: &str,
        query: &PortsQuery,
    ) -> Result<PortsResponse, LibreNmsError> {
        let params = columns_only(query);
        let path = format!("{ENDPOINT}/search/{}/{}", segment(field), segment(search));
        self.client.http().get(&path, Some(&params)).await
    }

    /// Ports that have seen `mac` in their forwarding table.
    ///
    /// Only `query.filter` is used here (e.g. `first` to return one port).
    pub async fn with_mac(&self, mac: &str, query: &PortsQuery) -> Result<PortResponse, LibreNmsError> {
        let mut params = QueryParams::new();
        params.set_opt("filter", query.filter.as_deref());
        let path = format!("{ENDPOINT}/mac/{}", segment(mac));
        self.client.http().get(&path, Some(&params)).await
    }

    /// Details of one port, optionally loading relations such as `vlans`
    /// or `device`
    pub async fn info(&self, port_id: i64, with: &[&str]) -> Result<PortResponse, LibreNmsError> {
        let mut params = QueryParams::new();
        params.set("with", with.join(","));
        self.client
            .http()
            .get(&format!("{ENDPOINT}/{port_id}"), Some(&params))
            .await
    }

    /// IPv4 and IPv6 addresses of a port
    pub async fn ip_info(&self, port_id: i64) -> Result<PortIpResponse, LibreNmsError> {
        self.client.http().get(&format!("{ENDPOINT}/{port_id}/ip"), None).await
    }

    /// Transceiver of a port
    pub async fn transceiver(&self, port_id: i64) -> Result<PortTransceiverResponse, LibreNmsError> {
        self.client
            .http()
            .get(&format!("{ENDPOINT}/{port_id}/transceiver"), None)
            .await
    }

    /// Description (ifAlias) of a port
    pub async fn description(&self, port_id: i64) -> Result<PortDescriptionResponse, LibreNmsError> {
        self.client
            .http()
            .get(&format!("{ENDPOINT}/{port_id}/description"), None)
            .await
    }

    /// Set the description of a port; an empty string restores the
    /// polled value
    pub async fn update_description(
        &self,
        port_id: i64,
        description: &str,
    ) -> Result<PortDescriptionResponse, LibreNmsError> {
        let body = PortDescriptionUpdateRequest {
            description: description.to_string(),
        };
        self.client
            .http()
            .patch(&format!("{ENDPOINT}/{port_id}/description"), Some(&body))
            .await
    }
}

/// The list/search endpoints take `columns` but not `filter`
fn columns_only(query: &PortsQuery) -> QueryParams {
    let mut params = QueryParams::new();
    params.set_opt("columns", query.columns.as_deref());
    params
}
