//! Log endpoints (`/logs`)

use crate::client::LibreNmsClient;
use crate::common::query::{ToQuery, segment};
use crate::error::LibreNmsError;
use crate::models::{BaseResponse, LogsQuery, LogsResponse, SyslogMessage};
use std::fmt;
use tracing::debug;

/// Which log to read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogKind {
    Event,
    Syslog,
    Alert,
    Auth,
}

impl LogKind {
    /// Path segment
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Event => "eventlog",
            Self::Syslog => "syslog",
            Self::Alert => "alertlog",
            Self::Auth => "authlog",
        }
    }
}

impl fmt::Display for LogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Log operations, obtained from [`LibreNmsClient::logs`]
#[derive(Debug, Clone, Copy)]
pub struct LogsApi<'a> {
    client: &'a LibreNmsClient,
}

impl<'a> LogsApi<'a> {
    pub(crate) fn new(client: &'a LibreNmsClient) -> Self {
        Self { client }
    }

    /// Entries of `kind` for a device (id or hostname)
    pub async fn list(&self, kind: LogKind, identifier: &str, query: &LogsQuery) -> Result<LogsResponse, LibreNmsError> {
        let path = format!("logs/{kind}/{}", segment(identifier));
        self.client.http().get(&path, Some(&query.to_query())).await
    }

    /// Event log of a device
    pub async fn list_event_logs(&self, identifier: &str, query: &LogsQuery) -> Result<LogsResponse, LibreNmsError> {
        self.list(LogKind::Event, identifier, query).await
    }

    /// Syslog of a device
    pub async fn list_syslogs(&self, identifier: &str, query: &LogsQuery) -> Result<LogsResponse, LibreNmsError> {
        self.list(LogKind::Syslog, identifier, query).await
    }

    /// Alert log of a device
    pub async fn list_alert_logs(&self, identifier: &str, query: &LogsQuery) -> Result<LogsResponse, LibreNmsError> {
        self.list(LogKind::Alert, identifier, query).await
    }

    /// Auth log
    pub async fn list_auth_logs(&self, identifier: &str, query: &LogsQuery) -> Result<LogsResponse, LibreNmsError> {
        self.list(LogKind::Auth, identifier, query).await
    }

    /// Same as [`LogsApi::list_event_logs`]
    pub async fn list_logs(&self, identifier: &str, query: &LogsQuery) -> Result<LogsResponse, LibreNmsError> {
        self.list_event_logs(identifier, query).await
    }

    /// Push syslog messages into LibreNMS
    pub async fn syslogsink(&self, messages: &[SyslogMessage]) -> Result<BaseResponse, LibreNmsError> {
        debug!(count = messages.len(), "sending syslog messages");
        self.client.http().post("logs/syslogsink", Some(messages)).await
    }
}
