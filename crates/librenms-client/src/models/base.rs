//! Response envelope shared by every endpoint

use super::scalar::null_default;
use serde::{Deserialize, Serialize};

/// Common fields of every LibreNMS response.
///
/// Embedded with `#[serde(flatten)]` into each typed response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseResponse {
    /// `"ok"` or `"error"`
    #[serde(deserialize_with = "null_default")]
    pub status: String,
    /// Human readable detail, mostly set on writes
    #[serde(deserialize_with = "null_default")]
    pub message: String,
    /// Number of records in the payload
    #[serde(deserialize_with = "null_default")]
    pub count: i64,
}

impl BaseResponse {
    /// True when the API reported `status: "ok"`
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_default() {
        let resp: BaseResponse = serde_json::from_str(r#"{"status":"ok"}"#).unwrap();
        assert!(resp.is_ok());
        assert_eq!(resp.count, 0);
        assert!(resp.message.is_empty());
    }

    #[test]
    fn null_fields_default() {
        let resp: BaseResponse = serde_json::from_str(r#"{"status":"ok","message":null,"count":null}"#).unwrap();
        assert!(resp.is_ok());
        assert_eq!(resp.count, 0);
        assert!(resp.message.is_empty());
    }
}
