//! Live tests for the LibreNMS client
//!
//! These tests require a running LibreNMS instance.
//! Set LIBRENMS_URL and LIBRENMS_TOKEN environment variables to run.

use librenms_client::{AlertsQuery, DevicesQuery, LibreNmsClient, LogsQuery};

fn client() -> LibreNmsClient {
    let url = std::env::var("LIBRENMS_URL").unwrap_or_else(|_| "http://localhost:8000".to_string());
    let token = std::env::var("LIBRENMS_TOKEN").expect("LIBRENMS_TOKEN environment variable must be set");

    LibreNmsClient::new(&url, token).expect("Failed to create client")
}

#[tokio::test]
#[ignore] // Requires running LibreNMS instance
async fn test_get_system() {
    let system = client().system().get().await.expect("Failed to get system info");

    assert!(system.base.is_ok());
    println!("LibreNMS {}", system.system[0].local_ver);
}

#[tokio::test]
#[ignore]
async fn test_list_devices() {
    let devices = client()
        .devices()
        .list(&DevicesQuery::new())
        .await
        .expect("Failed to list devices");

    println!("Found {} devices", devices.devices.len());
}

#[tokio::test]
#[ignore]
async fn test_list_alerts() {
    let alerts = client()
        .alerts()
        .list(&AlertsQuery::new())
        .await
        .expect("Failed to list alerts");

    println!("Found {} alerts", alerts.alerts.len());
}

#[tokio::test]
#[ignore]
async fn test_event_logs_of_first_device() {
    let client = client();
    let devices = client
        .devices()
        .list(&DevicesQuery::new())
        .await
        .expect("Failed to list devices");

    let Some(device) = devices.devices.first() else {
        println!("No devices, skipping");
        return;
    };

    let logs = client
        .logs()
        .list_event_logs(&device.hostname, &LogsQuery::new().limit(5))
        .await
        .expect("Failed to list event logs");

    assert!(logs.logs.len() <= 5);
}

#[tokio::test]
#[ignore]
async fn test_services_and_locations() {
    let client = client();

    let services = client.services().list().await.expect("Failed to list services");
    println!("Found {} services", services.services.len());

    let locations = client.locations().list().await.expect("Failed to list locations");
    println!("Found {} locations", locations.locations.len());
}
