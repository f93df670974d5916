//! Monitoring operations for MockLibreNmsClient
//!
//! Handles alerts and services

use super::devices::resolve_device;
use super::{MockLibreNmsClient, lock, not_found, ok, sorted};
use crate::error::LibreNmsError;
use crate::models::*;

pub async fn list_alerts(client: &MockLibreNmsClient, query: &AlertsQuery) -> Result<AlertsResponse, LibreNmsError> {
    let alerts: Vec<Alert> = sorted(&lock(&client.alerts))
        .into_iter()
        .filter(|a| query.state.is_none_or(|s| a.state == s.code()))
        .filter(|a| query.severity.is_none_or(|s| a.severity == s.as_str()))
        .filter(|a| query.rule_id.is_none_or(|id| a.rule_id == id))
        .collect();
    Ok(AlertsResponse {
        base: ok(alerts.len(), ""),
        alerts,
    })
}

pub async fn ack_alert(
    client: &MockLibreNmsClient,
    alert_id: i64,
    request: &AlertAckRequest,
) -> Result<BaseResponse, LibreNmsError> {
    let mut alerts = lock(&client.alerts);
    let alert = alerts
        .get_mut(&alert_id)
        .ok_or_else(|| not_found(format!("No alert by id {alert_id}")))?;
    alert.state = AlertState::Acknowledged.code();
    alert.note.clone_from(&request.note);
    Ok(ok(0, format!("Alert {alert_id} has been acknowledged")))
}

pub async fn list_services(client: &MockLibreNmsClient) -> Result<ServiceResponse, LibreNmsError> {
    let services = sorted(&lock(&client.services));
    Ok(ServiceResponse {
        base: ok(services.len(), ""),
        services,
    })
}

pub async fn services_for_host(client: &MockLibreNmsClient, device: &str) -> Result<ServiceResponse, LibreNmsError> {
    let device_id = resolve_device(client, device)
        .ok_or_else(|| not_found(format!("Device {device} not found")))?;
    let services: Vec<Service> = sorted(&lock(&client.services))
        .into_iter()
        .filter(|s| s.device_id == device_id)
        .collect();
    Ok(ServiceResponse {
        base: ok(services.len(), ""),
        services,
    })
}
