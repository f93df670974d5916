//! Alert endpoints (`/alerts`)

use crate::client::LibreNmsClient;
use crate::common::query::ToQuery;
use crate::error::LibreNmsError;
use crate::models::{AlertAckRequest, AlertsQuery, AlertsResponse, BaseResponse};
use tracing::debug;

const ENDPOINT: &str = "alerts";

/// Alert operations, obtained from [`LibreNmsClient::alerts`]
#[derive(Debug, Clone, Copy)]
pub struct AlertApi<'a> {
    client: &'a LibreNmsClient,
}

impl<'a> AlertApi<'a> {
    pub(crate) fn new(client: &'a LibreNmsClient) -> Self {
        Self { client }
    }

    /// Acknowledge an alert
    pub async fn ack(&self, alert_id: i64, request: &AlertAckRequest) -> Result<BaseResponse, LibreNmsError> {
        debug!(alert_id, until_clear = request.until_clear, "acknowledging alert");
        self.client
            .http()
            .put(&format!("{ENDPOINT}/{alert_id}"), Some(request))
            .await
    }

    /// Get one alert; the API wraps it in a list
    pub async fn get(&self, alert_id: i64) -> Result<AlertsResponse, LibreNmsError> {
        self.client.http().get(&format!("{ENDPOINT}/{alert_id}"), None).await
    }

    /// List alerts. With an empty query the API returns only open alerts.
    pub async fn list(&self, query: &AlertsQuery) -> Result<AlertsResponse, LibreNmsError> {
        let params = query.to_query();
        self.client.http().get(ENDPOINT, Some(&params)).await
    }

    /// Unmute an acknowledged alert
    pub async fn unmute(&self, alert_id: i64) -> Result<BaseResponse, LibreNmsError> {
        self.client
            .http()
            .put::<_, ()>(&format!("{ENDPOINT}/unmute/{alert_id}"), None)
            .await
    }
}
