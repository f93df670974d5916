//! Request and response types for the LibreNMS API
//!
//! One submodule per resource group. Every response embeds a
//! [`BaseResponse`] envelope; the field types in [`scalar`] absorb the
//! places where the API's JSON typing drifts between releases.

pub mod alert;
pub mod base;
pub mod device;
pub mod device_group;
pub mod inventory;
pub mod location;
pub mod logs;
pub mod port;
pub mod routing;
pub mod scalar;
pub mod service;
pub mod switching;
pub mod system;

pub use alert::*;
pub use base::BaseResponse;
pub use device::*;
pub use device_group::*;
pub use inventory::*;
pub use location::*;
pub use logs::*;
pub use port::*;
pub use routing::*;
pub use scalar::{Bool, Float64};
pub use service::{Service, ServiceCreateRequest, ServiceResponse, ServiceUpdateRequest};
pub use switching::*;
pub use system::*;
