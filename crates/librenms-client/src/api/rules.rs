//! Alert rule endpoints (`/rules`)

use crate::client::LibreNmsClient;
use crate::error::LibreNmsError;
use crate::models::{AlertRuleCreateRequest, AlertRuleResponse, AlertRuleUpdateRequest, BaseResponse};

const ENDPOINT: &str = "rules";

/// Alert rule operations, obtained from [`LibreNmsClient::alert_rules`]
#[derive(Debug, Clone, Copy)]
pub struct AlertRuleApi<'a> {
    client: &'a LibreNmsClient,
}

impl<'a> AlertRuleApi<'a> {
    pub(crate) fn new(client: &'a LibreNmsClient) -> Self {
        Self { client }
    }

    /// Create a rule. An empty device list applies the rule to all devices.
    pub async fn create(&self, request: &AlertRuleCreateRequest) -> Result<BaseResponse, LibreNmsError> {
        let mut request = request.clone();
        request.normalize_devices();
        self.client.http().post(ENDPOINT, Some(&request)).await
    }

    /// Delete a rule
    pub async fn delete(&self, rule_id: i64) -> Result<BaseResponse, LibreNmsError> {
        self.client.http().delete(&format!("{ENDPOINT}/{rule_id}")).await
    }

    /// Get one rule; the API wraps it in a list
    pub async fn get(&self, rule_id: i64) -> Result<AlertRuleResponse, LibreNmsError> {
        self.client.http().get(&format!("{ENDPOINT}/{rule_id}"), None).await
    }

    /// List all rules
    pub async fn list(&self) -> Result<AlertRuleResponse, LibreNmsError> {
        self.client.http().get(ENDPOINT, None).await
    }

    /// Replace a rule.
    ///
    /// Fails with [`LibreNmsError::InvalidRequest`] before sending anything
    /// when `rule_id` is not set.
    pub async fn update(&self, request: &AlertRuleUpdateRequest) -> Result<BaseResponse, LibreNmsError> {
        let request = prepare_update(request)?;
        self.client.http().put(ENDPOINT, Some(&request)).await
    }
}

fn prepare_update(request: &AlertRuleUpdateRequest) -> Result<AlertRuleUpdateRequest, LibreNmsError> {
    if request.rule_id < 1 {
        return Err(LibreNmsError::InvalidRequest(
            "rule ID is required for updating an alert rule".to_string(),
        ));
    }
    let mut request = request.clone();
    request.rule.normalize_devices();
    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Severity;

    #[test]
    fn update_requires_rule_id() {
        let rule = AlertRuleCreateRequest::new("Device down", "{}", Severity::Critical);
        let err = prepare_update(&AlertRuleUpdateRequest::new(0, rule)).unwrap_err();
        assert!(matches!(err, LibreNmsError::InvalidRequest(_)));
    }

    #[test]
    fn update_fills_devices() {
        let rule = AlertRuleCreateRequest::new("Device down", "{}", Severity::Warning);
        let prepared = prepare_update(&AlertRuleUpdateRequest::new(4, rule)).unwrap();
        assert_eq!(prepared.rule.devices, vec![-1]);

        let body = serde_json::to_value(&prepared).unwrap();
        assert_eq!(body["rule_id"], 4);
        assert_eq!(body["severity"], "warning");
        assert_eq!(body["devices"], serde_json::json!([-1]));
    }
}
