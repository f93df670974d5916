//! LibreNMS REST API Client
//!
//! A Rust client library for the LibreNMS v0 REST API. Every endpoint group
//! (devices, ports, alerts, routing, logs, ...) is exposed as a namespace on
//! [`LibreNmsClient`] with typed request and response models.
//!
//! # Example
//!
//! ```no_run
//! use librenms_client::{AlertState, AlertsQuery, DevicesQuery, LibreNmsClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a client
//! let client = LibreNmsClient::new("http://librenms:8000", "your-api-token")?;
//!
//! // List Linux devices
//! let devices = client.devices().list(&DevicesQuery::new().os("linux")).await?;
//! for device in &devices.devices {
//!     println!("{} ({})", device.hostname, device.device_id);
//! }
//!
//! // Open alerts
//! let alerts = client
//!     .alerts()
//!     .list(&AlertsQuery::new().state(AlertState::Alert))
//!     .await?;
//! println!("{} open alerts", alerts.base.count);
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - **Typed models**: lenient decoding of the API's mixed JSON types
//! - **Resource namespaces**: devices, device groups, alerts, alert rules,
//!   inventory, locations, logs, ports, routing, services, switching, system
//! - **Mocking**: [`LibreNmsApi`] plus an in-memory mock behind the
//!   `test-util` feature

pub mod api;
pub mod client;
pub mod common;
pub mod config;
pub mod error;
pub mod models;
#[path = "trait.rs"]
pub mod librenms_trait;
#[cfg(any(test, feature = "test-util"))]
pub mod mock;

pub use api::{
    AlertApi, AlertRuleApi, DeviceApi, DeviceGroupApi, InventoryApi, IpFamily, LocationApi, LogKind, LogsApi,
    PortApi, RoutingApi, ServiceApi, SwitchingApi, SystemApi,
};
pub use client::{ClientBuilder, LibreNmsClient};
pub use common::HttpClient;
pub use common::query::{QueryParams, ToQuery};
pub use config::ClientConfig;
pub use error::LibreNmsError;
pub use librenms_trait::LibreNmsApi;
pub use models::*;
#[cfg(any(test, feature = "test-util"))]
pub use mock::MockLibreNmsClient;
