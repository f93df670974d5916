//! ENTITY-MIB inventory models

use super::base::BaseResponse;
use super::scalar::{Bool, null_default, opt_i64, opt_string};
use crate::common::query::{QueryParams, ToQuery};
use serde::{Deserialize, Serialize};

/// Physical inventory entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryItem {
    #[serde(rename = "entPhysical_id", deserialize_with = "null_default")]
    pub ent_physical_id: i64,
    #[serde(deserialize_with = "null_default")]
    pub device_id: i64,
    #[serde(rename = "entPhysicalIndex", deserialize_with = "opt_i64")]
    pub index: Option<i64>,
    #[serde(rename = "entPhysicalDescr")]
    pub descr: Option<String>,
    #[serde(rename = "entPhysicalClass")]
    pub class: Option<String>,
    #[serde(rename = "entPhysicalName")]
    pub name: Option<String>,
    #[serde(rename = "entPhysicalHardwareRev")]
    pub hardware_rev: Option<String>,
    #[serde(rename = "entPhysicalFirmwareRev")]
    pub firmware_rev: Option<String>,
    #[serde(rename = "entPhysicalSoftwareRev")]
    pub software_rev: Option<String>,
    #[serde(rename = "entPhysicalSerialNum")]
    pub serial_num: Option<String>,
    #[serde(rename = "entPhysicalModelName")]
    pub model_name: Option<String>,
    #[serde(rename = "entPhysicalMfgName")]
    pub mfg_name: Option<String>,
    #[serde(rename = "entPhysicalIsFRU")]
    pub is_fru: Bool,
    #[serde(rename = "entPhysicalAlias")]
    pub alias: Option<String>,
    #[serde(rename = "entPhysicalAssetID")]
    pub asset_id: Option<String>,
    #[serde(rename = "entPhysicalContainedIn", deserialize_with = "opt_i64")]
    pub contained_in: Option<i64>,
    #[serde(rename = "entPhysicalParentRelPos", deserialize_with = "opt_i64")]
    pub parent_rel_pos: Option<i64>,
    #[serde(rename = "entPhysicalMfgDate")]
    pub mfg_date: Option<String>,
    #[serde(rename = "entPhysicalUris")]
    pub uris: Option<String>,
    #[serde(rename = "entPhysicalVendorType")]
    pub vendor_type: Option<String>,
    #[serde(rename = "ifIndex", deserialize_with = "opt_string")]
    pub if_index: Option<String>,
    pub deleted: Bool,
}

/// Inventory of a device
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(deserialize_with = "null_default")]
    pub inventory: Vec<InventoryItem>,
}

/// Filters for `GET /inventory/{host}`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryParams {
    /// e.g. `chassis`, `module`, `port`
    pub ent_physical_class: Option<String>,
    /// Parent `entPhysicalIndex`
    pub ent_physical_contained_in: Option<String>,
}

impl InventoryParams {
    /// Empty filter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Only entries of `class`
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.ent_physical_class = Some(class.into());
        self
    }

    /// Only children of `parent`
    #[must_use]
    pub fn contained_in(mut self, parent: impl ToString) -> Self {
        self.ent_physical_contained_in = Some(parent.to_string());
        self
    }
}

impl ToQuery for InventoryParams {
    fn to_query(&self) -> QueryParams {
        let mut q = QueryParams::new();
        q.set_opt("entPhysicalClass", self.ent_physical_class.as_deref())
            .set_opt("entPhysicalContainedIn", self.ent_physical_contained_in.as_deref());
        q
    }
}
