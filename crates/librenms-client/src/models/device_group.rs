//! Device group models

use super::base::BaseResponse;
use super::scalar::{null_default, opt_i64};
use crate::error::LibreNmsError;
use serde::{Deserialize, Serialize};

/// Device group
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceGroup {
    #[serde(deserialize_with = "null_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(rename = "desc")]
    pub description: Option<String>,
    pub pattern: Option<String>,
    /// Rule tree; null for static groups
    pub rules: Option<DeviceGroupRuleContainer>,
    /// `dynamic` or `static`
    #[serde(rename = "type", deserialize_with = "null_default")]
    pub group_type: String,
}

/// Top-level container of a dynamic group's rules
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceGroupRuleContainer {
    /// `AND` or `OR`
    #[serde(deserialize_with = "null_default")]
    pub condition: String,
    #[serde(deserialize_with = "null_default")]
    pub joins: Vec<Vec<String>>,
    #[serde(deserialize_with = "null_default")]
    pub rules: Vec<DeviceGroupRule>,
    #[serde(deserialize_with = "null_default")]
    pub valid: bool,
}

impl DeviceGroupRuleContainer {
    /// Serialize the rules into the JSON string the create/update endpoints expect
    pub fn to_json(&self) -> Result<String, LibreNmsError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// A rule node.
///
/// Terminal nodes set `id`, `field`, `type`, `input`, `operator` and
/// `value`; group nodes set `condition` and `rules`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceGroupRule {
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_default")]
    pub id: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_default")]
    pub condition: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_default")]
    pub field: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_default")]
    pub input: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_default")]
    pub operator: String,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_default")]
    pub rules: Vec<DeviceGroupRule>,
    #[serde(rename = "type", skip_serializing_if = "String::is_empty", deserialize_with = "null_default")]
    pub rule_type: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_default")]
    pub value: String,
}

impl DeviceGroupRule {
    /// Terminal rule comparing `field` (e.g. `devices.hostname`) with `value`
    pub fn matching(
        field: impl Into<String>,
        operator: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        let field = field.into();
        Self {
            id: field.clone(),
            field,
            input: "text".to_string(),
            operator: operator.into(),
            rule_type: "string".to_string(),
            value: value.into(),
            ..Self::default()
        }
    }

    /// Nested group of rules joined by `condition`
    pub fn group(condition: impl Into<String>, rules: Vec<DeviceGroupRule>) -> Self {
        Self {
            condition: condition.into(),
            rules,
            ..Self::default()
        }
    }
}

/// Request body for `POST /devicegroups`.
///
/// `rules` is the JSON string produced by [`DeviceGroupRuleContainer::to_json`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceGroupCreateRequest {
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
    #[serde(rename = "desc", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Members of a static group
    #[serde(default, skip_serializing_if = "Vec::is_empty", deserialize_with = "null_default")]
    pub devices: Vec<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<String>,
    #[serde(default, rename = "type", deserialize_with = "null_default")]
    pub group_type: String,
}

impl DeviceGroupCreateRequest {
    /// Static group with an explicit member list
    pub fn static_group(name: impl Into<String>, devices: Vec<i64>) -> Self {
        Self {
            name: name.into(),
            devices,
            group_type: "static".to_string(),
            ..Self::default()
        }
    }

    /// Dynamic group whose members match `rules`
    pub fn dynamic_group(
        name: impl Into<String>,
        rules: &DeviceGroupRuleContainer,
    ) -> Result<Self, LibreNmsError> {
        Ok(Self {
            name: name.into(),
            rules: Some(rules.to_json()?),
            group_type: "dynamic".to_string(),
            ..Self::default()
        })
    }
}

/// Request body for `PATCH /devicegroups/{name}`; unset fields are omitted
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceGroupUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "desc", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty", deserialize_with = "null_default")]
    pub devices: Vec<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub group_type: Option<String>,
}

/// List of device groups
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceGroupResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(deserialize_with = "null_default")]
    pub groups: Vec<DeviceGroup>,
}

/// Member of a device group
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceGroupMember {
    #[serde(rename = "device_id", deserialize_with = "null_default")]
    pub id: i64,
}

/// Members of a device group
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceGroupMembersResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(deserialize_with = "null_default")]
    pub devices: Vec<DeviceGroupMember>,
}

/// Response of `POST /devicegroups`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceGroupCreateResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(deserialize_with = "opt_i64")]
    pub id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules_serialize_without_empty_fields() {
        let rules = DeviceGroupRuleContainer {
            condition: "AND".to_string(),
            rules: vec![DeviceGroupRule::matching("devices.hostname", "begins_with", "core-")],
            valid: true,
            ..Default::default()
        };

        assert_eq!(
            rules.to_json().unwrap(),
            r#"{"condition":"AND","joins":[],"rules":[{"id":"devices.hostname","field":"devices.hostname","input":"text","operator":"begins_with","type":"string","value":"core-"}],"valid":true}"#
        );
    }

    #[test]
    fn nested_rules_round_trip() {
        let json = r#"{"condition":"OR","joins":[],"valid":true,"rules":[
            {"condition":"AND","rules":[{"id":"devices.os","field":"devices.os","type":"string","input":"text","operator":"equal","value":"ios"}]}
        ]}"#;
        let rules: DeviceGroupRuleContainer = serde_json::from_str(json).unwrap();
        assert_eq!(rules.rules[0].condition, "AND");
        assert_eq!(rules.rules[0].rules[0].value, "ios");
    }

    #[test]
    fn static_group_request() {
        let req = DeviceGroupCreateRequest::static_group("edge", vec![1, 2]);
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({"name": "edge", "devices": [1, 2], "type": "static"})
        );
    }

    #[test]
    fn static_group_decodes_null_rules() {
        let json = r#"{"id":4,"name":"edge","desc":null,"pattern":null,"rules":null,"type":"static"}"#;
        let group: DeviceGroup = serde_json::from_str(json).unwrap();
        assert_eq!(group.rules, None);
        assert_eq!(group.group_type, "static");
    }
}
