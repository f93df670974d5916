//! Event, syslog, alert and auth log models

use super::base::BaseResponse;
use super::scalar::{null_default, opt_i64, opt_string};
use crate::common::query::{QueryParams, ToQuery};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Format LibreNMS uses for `from`/`to` timestamps
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Log entry.
///
/// The four log kinds share one row shape; columns a kind does not have
/// stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Log {
    #[serde(deserialize_with = "opt_string")]
    pub hostname: Option<String>,
    #[serde(rename = "sysName", deserialize_with = "opt_string")]
    pub sys_name: Option<String>,
    #[serde(deserialize_with = "opt_i64")]
    pub event_id: Option<i64>,
    #[serde(deserialize_with = "opt_string")]
    pub host: Option<String>,
    #[serde(deserialize_with = "opt_i64")]
    pub device_id: Option<i64>,
    #[serde(deserialize_with = "opt_string")]
    pub datetime: Option<String>,
    #[serde(deserialize_with = "opt_string")]
    pub message: Option<String>,
    #[serde(rename = "type", deserialize_with = "opt_string")]
    pub log_type: Option<String>,
    #[serde(deserialize_with = "opt_string")]
    pub reference: Option<String>,
    #[serde(deserialize_with = "opt_string")]
    pub username: Option<String>,
    #[serde(deserialize_with = "opt_i64")]
    pub severity: Option<i64>,
}

/// Page of log entries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogsResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    /// Entries matching the query across all pages
    #[serde(deserialize_with = "opt_i64")]
    pub total: Option<i64>,
    #[serde(deserialize_with = "null_default")]
    pub logs: Vec<Log>,
}

/// Result ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Wire value
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Paging and range options for the log endpoints.
///
/// `from`/`to` take either an event id or a `YYYY-MM-DD HH:MM:SS` timestamp;
/// use [`LogsQuery::from_time`] and [`LogsQuery::to_time`] for the latter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogsQuery {
    /// Page number
    pub start: Option<u32>,
    pub limit: Option<u32>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub sort_order: Option<SortOrder>,
}

impl LogsQuery {
    /// No options
    pub fn new() -> Self {
        Self::default()
    }

    /// Page to request
    #[must_use]
    pub fn start(mut self, start: u32) -> Self {
        self.start = Some(start);
        self
    }

    /// Page size
    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Lower bound, event id or timestamp string
    #[must_use]
    pub fn from(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }

    /// Upper bound, event id or timestamp string
    #[must_use]
    pub fn to(mut self, to: impl Into<String>) -> Self {
        self.to = Some(to.into());
        self
    }

    /// Lower bound as a timestamp
    #[must_use]
    pub fn from_time(self, from: NaiveDateTime) -> Self {
        self.from(from.format(TIME_FORMAT).to_string())
    }

    /// Upper bound as a timestamp
    #[must_use]
    pub fn to_time(self, to: NaiveDateTime) -> Self {
        self.to(to.format(TIME_FORMAT).to_string())
    }

    /// Result ordering
    #[must_use]
    pub fn sort_order(mut self, order: SortOrder) -> Self {
        self.sort_order = Some(order);
        self
    }
}

impl ToQuery for LogsQuery {
    fn to_query(&self) -> QueryParams {
        let mut q = QueryParams::new();
        // LibreNMS treats 0 as "unset" for both paging fields
        q.set_opt("start", self.start.filter(|&s| s > 0))
            .set_opt("limit", self.limit.filter(|&l| l > 0))
            .set_opt("from", self.from.as_deref())
            .set_opt("to", self.to.as_deref())
            .set_opt("sortorder", self.sort_order.map(SortOrder::as_str));
        q
    }
}

/// One message for `POST /logs/syslogsink`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyslogMessage {
    #[serde(default, deserialize_with = "null_default")]
    pub msg: String,
    /// Hostname or IP the message is attributed to
    #[serde(default, deserialize_with = "null_default")]
    pub host: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facility: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program: Option<String>,
    /// ISO 8601
    #[serde(rename = "@timestamp", skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

impl SyslogMessage {
    /// Message `msg` from `host`
    pub fn new(host: impl Into<String>, msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            host: host.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn query_formats_time_bounds() {
        let from = NaiveDate::from_ymd_opt(2017, 7, 22)
            .unwrap()
            .and_hms_opt(23, 0, 0)
            .unwrap();
        let q = LogsQuery::new()
            .start(1)
            .limit(20)
            .from_time(from)
            .sort_order(SortOrder::Desc)
            .to_query();
        assert_eq!(q.get("from"), Some("2017-07-22 23:00:00"));
        assert_eq!(q.get("sortorder"), Some("DESC"));
        assert_eq!(q.get("limit"), Some("20"));
        assert_eq!(q.get("to"), None);
    }

    #[test]
    fn zero_paging_is_omitted() {
        let q = LogsQuery::new().start(0).limit(0).to_query();
        assert_eq!(q.get("start"), None);
        assert_eq!(q.get("limit"), None);

        let q = LogsQuery::new().start(5).limit(0).to_query();
        assert_eq!(q.get("start"), Some("5"));
        assert_eq!(q.get("limit"), None);
    }

    #[test]
    fn syslog_message_omits_unset_fields() {
        let mut msg = SyslogMessage::new("10.0.0.1", "link down");
        msg.severity = Some(3);
        msg.timestamp = Some("2024-01-01T00:00:00Z".into());
        assert_eq!(
            serde_json::to_value(&msg).unwrap(),
            serde_json::json!({
                "msg": "link down",
                "host": "10.0.0.1",
                "@timestamp": "2024-01-01T00:00:00Z",
                "severity": 3
            })
        );
    }

    #[test]
    fn log_reads_string_ids() {
        let json = r#"{"event_id":"10050349","device_id":"279","severity":"3","type":"interface"}"#;
        let log: Log = serde_json::from_str(json).unwrap();
        assert_eq!(log.event_id, Some(10_050_349));
        assert_eq!(log.device_id, Some(279));
        assert_eq!(log.severity, Some(3));
        assert_eq!(log.log_type.as_deref(), Some("interface"));
    }
}
