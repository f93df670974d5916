//! Inventory summary gathered through [`LibreNmsApi`]

use anyhow::{Context, Result};
use librenms_client::{AlertState, AlertsQuery, DevicesQuery, LibreNmsApi};
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, warn};

/// Snapshot of a LibreNMS install
#[derive(Debug, Default)]
pub struct Summary {
    pub version: Option<String>,
    pub devices: usize,
    pub devices_down: Vec<String>,
    /// Device count per OS
    pub by_os: BTreeMap<String, usize>,
    pub open_alerts: usize,
    pub locations: usize,
    pub services: usize,
}

/// Collect a [`Summary`].
///
/// A failing system endpoint only costs the version line; everything else
/// is required.
pub async fn summarize(api: &dyn LibreNmsApi) -> Result<Summary> {
    let mut summary = Summary::default();

    match api.get_system().await {
        Ok(system) => summary.version = system.system.first().map(|s| s.local_ver.clone()),
        Err(e) => warn!(error = %e, "system info unavailable"),
    }

    let devices = api
        .list_devices(&DevicesQuery::new())
        .await
        .context("listing devices")?;
    summary.devices = devices.devices.len();
    for device in &devices.devices {
        *summary.by_os.entry(device.os.clone()).or_default() += 1;
        if !device.status.get() && !device.disabled.get() {
            summary.devices_down.push(device.hostname.clone());
        }
    }
    debug!(devices = summary.devices, "devices loaded");

    let alerts = api
        .list_alerts(&AlertsQuery::new().state(AlertState::Alert))
        .await
        .context("listing alerts")?;
    summary.open_alerts = alerts.alerts.len();

    summary.locations = api.list_locations().await.context("listing locations")?.locations.len();
    summary.services = api.list_services().await.context("listing services")?.services.len();

    Ok(summary)
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "LibreNMS {}", self.version.as_deref().unwrap_or("(unknown version)"))?;
        writeln!(f, "devices:   {}", self.devices)?;
        for (os, count) in &self.by_os {
            writeln!(f, "  {os:<12} {count}")?;
        }
        if !self.devices_down.is_empty() {
            writeln!(f, "down:      {}", self.devices_down.join(", "))?;
        }
        writeln!(f, "alerts:    {}", self.open_alerts)?;
        writeln!(f, "locations: {}", self.locations)?;
        write!(f, "services:  {}", self.services)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use librenms_client::{Alert, Bool, Device, MockLibreNmsClient, SystemInfo};

    fn device(id: i64, hostname: &str, os: &str, up: bool) -> Device {
        Device {
            device_id: id,
            hostname: hostname.to_string(),
            os: os.to_string(),
            status: Bool(up),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn summary_counts_resources() {
        let mock = MockLibreNmsClient::new("http://mock/api/v0/");
        mock.set_system(SystemInfo {
            local_ver: "24.2.0".to_string(),
            ..Default::default()
        });
        mock.add_device(device(1, "core1", "ios", true));
        mock.add_device(device(2, "core2", "ios", false));
        mock.add_device(device(3, "web1", "linux", true));
        mock.add_alert(Alert {
            id: 1,
            state: AlertState::Alert.code(),
            ..Default::default()
        });
        mock.add_alert(Alert {
            id: 2,
            state: AlertState::Ok.code(),
            ..Default::default()
        });

        let summary = summarize(&mock).await.unwrap();

        assert_eq!(summary.version.as_deref(), Some("24.2.0"));
        assert_eq!(summary.devices, 3);
        assert_eq!(summary.by_os.get("ios"), Some(&2));
        assert_eq!(summary.devices_down, vec!["core2".to_string()]);
        assert_eq!(summary.open_alerts, 1);
        assert_eq!(summary.locations, 0);
    }

    #[tokio::test]
    async fn missing_system_info_is_not_fatal() {
        let mock = MockLibreNmsClient::new("http://mock/api/v0/");
        let summary = summarize(&mock).await.unwrap();

        assert!(summary.version.is_none());
        assert!(summary.to_string().contains("(unknown version)"));
    }
}
