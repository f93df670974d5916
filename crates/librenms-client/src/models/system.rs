//! System information model

use super::base::BaseResponse;
use super::scalar::null_default;
use serde::{Deserialize, Serialize};

/// Versions of the LibreNMS install and its dependencies
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemInfo {
    #[serde(deserialize_with = "null_default")]
    pub local_ver: String,
    #[serde(deserialize_with = "null_default")]
    pub local_sha: String,
    #[serde(deserialize_with = "null_default")]
    pub local_date: String,
    #[serde(deserialize_with = "null_default")]
    pub local_branch: String,
    #[serde(deserialize_with = "null_default")]
    pub db_schema: String,
    #[serde(deserialize_with = "null_default")]
    pub php_ver: String,
    #[serde(deserialize_with = "null_default")]
    pub python_ver: String,
    #[serde(deserialize_with = "null_default")]
    pub database_ver: String,
    #[serde(deserialize_with = "null_default")]
    pub rrdtool_ver: String,
    #[serde(deserialize_with = "null_default")]
    pub netsnmp_ver: String,
}

/// Response of `GET /system`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(deserialize_with = "null_default")]
    pub system: Vec<SystemInfo>,
}
