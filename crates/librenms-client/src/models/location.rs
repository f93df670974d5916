//! Location models

use super::base::BaseResponse;
use super::scalar::{Bool, Float64, null_default};
use serde::{Deserialize, Serialize};

/// Location
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    #[serde(deserialize_with = "null_default")]
    pub id: i64,
    pub fixed_coordinates: Bool,
    #[serde(rename = "lat")]
    pub latitude: Option<Float64>,
    #[serde(rename = "lng")]
    pub longitude: Option<Float64>,
    /// Location name
    #[serde(rename = "location", deserialize_with = "null_default")]
    pub name: String,
    pub timestamp: Option<String>,
}

/// Request body for `POST /locations`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationCreateRequest {
    #[serde(default, rename = "location", deserialize_with = "null_default")]
    pub name: String,
    pub fixed_coordinates: Bool,
    #[serde(rename = "lat", skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(rename = "lng", skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

impl LocationCreateRequest {
    /// Location `name` with fixed coordinates
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            fixed_coordinates: Bool(true),
            latitude: Some(latitude),
            longitude: Some(longitude),
        }
    }
}

/// Partial update for `PATCH /locations/{id}`.
///
/// Only set what changes: patching a field to its current value makes
/// LibreNMS answer 500.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LocationUpdateRequest {
    #[serde(rename = "location", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_coordinates: Option<bool>,
    #[serde(rename = "lat", skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(rename = "lng", skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

impl LocationUpdateRequest {
    /// Empty update
    pub fn new() -> Self {
        Self::default()
    }

    /// Rename the location; an empty name is ignored
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !name.is_empty() {
            self.name = Some(name);
        }
        self
    }

    /// Set whether coordinates are fixed or resolved from the address
    #[must_use]
    pub fn fixed_coordinates(mut self, fixed: bool) -> Self {
        self.fixed_coordinates = Some(fixed);
        self
    }

    /// Set the latitude
    #[must_use]
    pub fn latitude(mut self, lat: f64) -> Self {
        self.latitude = Some(lat);
        self
    }

    /// Set the longitude
    #[must_use]
    pub fn longitude(mut self, lng: f64) -> Self {
        self.longitude = Some(lng);
        self
    }

    /// True when nothing would be sent
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.fixed_coordinates.is_none()
            && self.latitude.is_none()
            && self.longitude.is_none()
    }
}

/// Response of `GET /location/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationResponse {
    #[serde(deserialize_with = "null_default")]
    pub status: String,
    #[serde(rename = "get_location", deserialize_with = "null_default")]
    pub location: Location,
}

/// List of locations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationsResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(deserialize_with = "null_default")]
    pub locations: Vec<Location>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_sends_only_set_fields() {
        let req = LocationUpdateRequest::new().name("").latitude(0.0);
        assert_eq!(serde_json::to_value(&req).unwrap(), serde_json::json!({"lat": 0.0}));

        let req = LocationUpdateRequest::new().name("DC2").fixed_coordinates(false);
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({"location": "DC2", "fixed_coordinates": false})
        );
        assert!(LocationUpdateRequest::new().is_empty());
    }

    #[test]
    fn location_decodes_string_coordinates() {
        let json = r#"{"id":3,"location":"DC1","lat":"52.3676","lng":"4.9041","timestamp":"2024-03-01 10:00:00","fixed_coordinates":1}"#;
        let loc: Location = serde_json::from_str(json).unwrap();
        assert_eq!(loc.name, "DC1");
        assert_eq!(loc.latitude, Some(Float64(52.3676)));
        assert!(loc.fixed_coordinates.get());
    }
}
