//! Resource namespaces
//!
//! Each namespace is a cheap borrowed view over [`LibreNmsClient`]
//! exposing one method per REST endpoint. Identifiers passed by callers
//! are escaped with [`segment`] before being placed in a path.
//!
//! [`LibreNmsClient`]: crate::LibreNmsClient
//! [`segment`]: crate::common::query::segment

mod alerts;
mod device_groups;
mod devices;
mod inventory;
mod locations;
mod logs;
mod ports;
mod routing;
mod rules;
mod services;
mod switching;
mod system;

pub use alerts::AlertApi;
pub use device_groups::DeviceGroupApi;
pub use devices::DeviceApi;
pub use inventory::InventoryApi;
pub use locations::LocationApi;
pub use logs::{LogKind, LogsApi};
pub use ports::PortApi;
pub use routing::{IpFamily, RoutingApi};
pub use rules::AlertRuleApi;
pub use services::ServiceApi;
pub use switching::SwitchingApi;
pub use system::SystemApi;
