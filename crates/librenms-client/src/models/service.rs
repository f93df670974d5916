//! Service (Nagios check) models

use super::base::BaseResponse;
use super::scalar::{Bool, null_default, opt_i64, opt_string};
use serde::{Deserialize, Serialize};

/// Service check attached to a device
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Service {
    #[serde(rename = "service_id", deserialize_with = "null_default")]
    pub id: i64,
    #[serde(rename = "service_changed", deserialize_with = "opt_i64")]
    pub changed: Option<i64>,
    #[serde(rename = "service_desc", deserialize_with = "opt_string")]
    pub description: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub device_id: i64,
    #[serde(rename = "service_ds", deserialize_with = "opt_string")]
    pub ds: Option<String>,
    #[serde(rename = "service_ignore")]
    pub ignore: Bool,
    #[serde(rename = "service_ip", deserialize_with = "opt_string")]
    pub ip: Option<String>,
    #[serde(rename = "service_message", deserialize_with = "opt_string")]
    pub message: Option<String>,
    #[serde(rename = "service_name", deserialize_with = "opt_string")]
    pub name: Option<String>,
    #[serde(rename = "service_param", deserialize_with = "opt_string")]
    pub param: Option<String>,
    /// Nagios convention: 0 ok, 1 warning, 2 critical, 3 unknown
    #[serde(rename = "service_status", deserialize_with = "null_default")]
    pub status: i64,
    #[serde(rename = "service_template_id", deserialize_with = "opt_i64")]
    pub template_id: Option<i64>,
    #[serde(rename = "service_type", deserialize_with = "null_default")]
    pub service_type: String,
}

/// Request body for `POST /services/{device}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCreateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "desc", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore: Option<Bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
    /// Check plugin, e.g. `http`, `icmp`
    #[serde(default, rename = "type", deserialize_with = "null_default")]
    pub service_type: String,
}

impl ServiceCreateRequest {
    /// Check of `service_type`
    pub fn new(service_type: impl Into<String>) -> Self {
        Self {
            service_type: service_type.into(),
            ..Self::default()
        }
    }
}

/// Partial update for `PATCH /services/{id}`.
///
/// Only set fields are sent; patching an unchanged field makes LibreNMS
/// answer 500. `ignore` goes out as `0`/`1`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ServiceUpdateRequest {
    #[serde(rename = "service_name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "service_desc", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "service_ip", skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    #[serde(rename = "service_ignore", skip_serializing_if = "Option::is_none")]
    pub ignore: Option<Bool>,
    #[serde(rename = "service_param", skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
    #[serde(rename = "service_type", skip_serializing_if = "Option::is_none")]
    pub service_type: Option<String>,
}

impl ServiceUpdateRequest {
    /// Empty update
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the description
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the target IP
    #[must_use]
    pub fn ip(mut self, ip: impl Into<String>) -> Self {
        self.ip = Some(ip.into());
        self
    }

    /// Set the ignore flag
    #[must_use]
    pub fn ignore(mut self, ignore: bool) -> Self {
        self.ignore = Some(Bool(ignore));
        self
    }

    /// Set the plugin parameters
    #[must_use]
    pub fn param(mut self, param: impl Into<String>) -> Self {
        self.param = Some(param.into());
        self
    }

    /// Set the check type
    #[must_use]
    pub fn service_type(mut self, service_type: impl Into<String>) -> Self {
        self.service_type = Some(service_type.into());
        self
    }
}

/// Raw service list.
///
/// The API nests services one level deep (`[[...]]`) and always reports
/// `count: 1`; [`ServiceResponseMulti::flatten`] fixes both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub(crate) struct ServiceResponseMulti {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(deserialize_with = "null_default")]
    pub services: Vec<Vec<Service>>,
}

impl ServiceResponseMulti {
    /// Collapse the nested lists and recompute `count`
    pub fn flatten(self) -> ServiceResponse {
        let services: Vec<Service> = self.services.into_iter().flatten().collect();
        ServiceResponse {
            base: BaseResponse {
                count: i64::try_from(services.len()).unwrap_or(i64::MAX),
                ..self.base
            },
            services,
        }
    }
}

/// List of services
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(deserialize_with = "null_default")]
    pub services: Vec<Service>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_services_are_flattened() {
        let json = r#"{"status":"ok","count":1,"services":[[
            {"service_id":1,"device_id":4,"service_type":"http","service_ignore":0,"service_status":0},
            {"service_id":2,"device_id":4,"service_type":"icmp","service_ignore":1,"service_status":2}
        ]]}"#;
        let raw: ServiceResponseMulti = serde_json::from_str(json).unwrap();
        let resp = raw.flatten();
        assert_eq!(resp.base.count, 2);
        assert_eq!(resp.base.status, "ok");
        assert_eq!(resp.services[1].id, 2);
        assert!(resp.services[1].ignore.get());
    }

    #[test]
    fn update_sends_ignore_as_int() {
        let req = ServiceUpdateRequest::new().ignore(true).param("-p 8443");
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({"service_ignore": 1, "service_param": "-p 8443"})
        );
    }
}
