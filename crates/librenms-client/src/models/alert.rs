//! Alert and alert rule models

use super::base::BaseResponse;
use super::scalar::{Bool, null_default};
use crate::common::query::{QueryParams, ToQuery};
use serde::{Deserialize, Serialize};

/// Alert severity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Ok,
    Warning,
    #[default]
    Critical,
}

impl Severity {
    /// Wire value
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Alert state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlertState {
    Ok,
    Alert,
    Acknowledged,
}

impl AlertState {
    /// Numeric value used by the API
    pub fn code(self) -> i64 {
        match self {
            Self::Ok => 0,
            Self::Alert => 1,
            Self::Acknowledged => 2,
        }
    }

    /// Map an API state code, `None` for codes this client does not know
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Ok),
            1 => Some(Self::Alert),
            2 => Some(Self::Acknowledged),
            _ => None,
        }
    }
}

/// Alert
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Alert {
    #[serde(deserialize_with = "null_default")]
    pub id: i64,
    pub alerted: Bool,
    #[serde(deserialize_with = "null_default")]
    pub device_id: i64,
    #[serde(deserialize_with = "null_default")]
    pub hostname: String,
    pub info: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    pub note: Option<String>,
    pub notes: Option<String>,
    pub open: Bool,
    /// Procedure URL
    #[serde(rename = "proc")]
    pub procedure_url: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub rule_id: i64,
    /// `ok`, `warning` or `critical`
    #[serde(deserialize_with = "null_default")]
    pub severity: String,
    /// 0 = ok, 1 = alert, 2 = acknowledged
    #[serde(deserialize_with = "null_default")]
    pub state: i64,
    #[serde(deserialize_with = "null_default")]
    pub timestamp: String,
}

impl Alert {
    /// Typed view of `state`
    pub fn alert_state(&self) -> Option<AlertState> {
        AlertState::from_code(self.state)
    }
}

/// Request body for `PUT /alerts/{id}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertAckRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// When false the alert re-fires if it gets worse, better or changes
    #[serde(default, deserialize_with = "null_default")]
    pub until_clear: bool,
}

/// Filters for `GET /alerts`.
///
/// Every set field is sent, including zero values such as `state = 0`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertsQuery {
    pub order: Option<String>,
    pub rule_id: Option<i64>,
    pub severity: Option<Severity>,
    pub state: Option<AlertState>,
}

impl AlertsQuery {
    /// Empty filter set (the API then returns open alerts)
    pub fn new() -> Self {
        Self::default()
    }

    /// Sort order, e.g. `timestamp desc`
    #[must_use]
    pub fn order(mut self, order: impl Into<String>) -> Self {
        self.order = Some(order.into());
        self
    }

    /// Only alerts raised by rule `rule_id`
    #[must_use]
    pub fn rule_id(mut self, rule_id: i64) -> Self {
        self.rule_id = Some(rule_id);
        self
    }

    /// Only alerts of `severity`
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    /// Only alerts in `state`
    #[must_use]
    pub fn state(mut self, state: AlertState) -> Self {
        self.state = Some(state);
        self
    }
}

impl ToQuery for AlertsQuery {
    fn to_query(&self) -> QueryParams {
        let mut q = QueryParams::new();
        q.set_opt("order", self.order.as_deref())
            .set_opt("alert_rule", self.rule_id)
            .set_opt("severity", self.severity)
            .set_opt("state", self.state.map(AlertState::code));
        q
    }
}

/// List of alerts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertsResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(deserialize_with = "null_default")]
    pub alerts: Vec<Alert>,
}

/// Alert rule
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertRule {
    #[serde(deserialize_with = "null_default")]
    pub id: i64,
    /// Query builder JSON
    #[serde(deserialize_with = "null_default")]
    pub builder: String,
    #[serde(deserialize_with = "null_default")]
    pub devices: Vec<i64>,
    pub disabled: Bool,
    /// Encoded JSON of mute/count/delay/interval settings
    #[serde(deserialize_with = "null_default")]
    pub extra: String,
    #[serde(deserialize_with = "null_default")]
    pub groups: Vec<i64>,
    pub invert_map: Bool,
    #[serde(deserialize_with = "null_default")]
    pub locations: Vec<i64>,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    pub notes: Option<String>,
    #[serde(rename = "proc")]
    pub procedure_url: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub query: String,
    #[serde(deserialize_with = "null_default")]
    pub rule: String,
    #[serde(deserialize_with = "null_default")]
    pub severity: String,
}

/// Request body for `POST /rules`.
///
/// An empty `devices` list is sent as `[-1]`, which the API reads as
/// "all devices".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertRuleCreateRequest {
    /// Encoded query builder JSON
    #[serde(default, deserialize_with = "null_default")]
    pub builder: String,
    /// Max alerts shown in the UI
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub devices: Vec<i64>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub disabled: Bool,
    #[serde(default, deserialize_with = "null_default")]
    pub groups: Vec<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub locations: Vec<i64>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not", deserialize_with = "null_default")]
    pub mute: bool,
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(rename = "proc", skip_serializing_if = "Option::is_none")]
    pub procedure_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub severity: Severity,
}

fn is_false(value: &Bool) -> bool {
    !value.get()
}

impl AlertRuleCreateRequest {
    /// Rule named `name` built from query builder JSON
    pub fn new(name: impl Into<String>, builder: impl Into<String>, severity: Severity) -> Self {
        Self {
            name: name.into(),
            builder: builder.into(),
            severity,
            ..Self::default()
        }
    }

    /// Replace an empty device list with `[-1]` (all devices)
    pub(crate) fn normalize_devices(&mut self) {
        if self.devices.is_empty() {
            self.devices = vec![-1];
        }
    }
}

/// Request body for `PUT /rules`: the create fields plus `rule_id`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertRuleUpdateRequest {
    #[serde(flatten)]
    pub rule: AlertRuleCreateRequest,
    /// Must be >= 1
    #[serde(default, deserialize_with = "null_default")]
    pub rule_id: i64,
}

impl AlertRuleUpdateRequest {
    /// Update rule `rule_id` to match `rule`
    pub fn new(rule_id: i64, rule: AlertRuleCreateRequest) -> Self {
        Self { rule, rule_id }
    }
}

/// List of alert rules
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertRuleResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(deserialize_with = "null_default")]
    pub rules: Vec<AlertRule>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alerts_query_sends_zero_state() {
        let q = AlertsQuery::new()
            .state(AlertState::Ok)
            .severity(Severity::Critical)
            .rule_id(7)
            .to_query();
        assert_eq!(q.encode(), "alert_rule=7&severity=critical&state=0");
    }

    #[test]
    fn alert_decodes_int_booleans() {
        let json = r#"{"id":1,"alerted":1,"open":0,"device_id":3,"hostname":"edge1","rule_id":2,
                       "severity":"critical","state":2,"timestamp":"2024-01-01 00:00:00","proc":null}"#;
        let alert: Alert = serde_json::from_str(json).unwrap();
        assert!(alert.alerted.get());
        assert!(!alert.open.get());
        assert_eq!(alert.alert_state(), Some(AlertState::Acknowledged));
        assert_eq!(alert.procedure_url, None);
    }

    #[test]
    fn update_request_flattens_rule() {
        let mut req = AlertRuleUpdateRequest::new(
            9,
            AlertRuleCreateRequest::new("Device down", "{}", Severity::Warning),
        );
        req.rule.normalize_devices();

        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({
                "builder": "{}",
                "devices": [-1],
                "groups": [],
                "locations": [],
                "name": "Device down",
                "severity": "warning",
                "rule_id": 9
            })
        );
    }
}
