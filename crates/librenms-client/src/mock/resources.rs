//! Resource operations for MockLibreNmsClient
//!
//! Handles locations and system information

use super::{MockLibreNmsClient, lock, not_found, ok, sorted};
use crate::error::LibreNmsError;
use crate::models::*;

pub async fn get_system(client: &MockLibreNmsClient) -> Result<SystemResponse, LibreNmsError> {
    let info = lock(&client.system)
        .clone()
        .ok_or_else(|| not_found("System information unavailable"))?;
    Ok(SystemResponse {
        base: ok(1, ""),
        system: vec![info],
    })
}

pub async fn list_locations(client: &MockLibreNmsClient) -> Result<LocationsResponse, LibreNmsError> {
    let locations = sorted(&lock(&client.locations));
    Ok(LocationsResponse {
        base: ok(locations.len(), ""),
        locations,
    })
}

pub async fn create_location(
    client: &MockLibreNmsClient,
    request: &LocationCreateRequest,
) -> Result<BaseResponse, LibreNmsError> {
    let id = client.next_id();
    let location = Location {
        id,
        name: request.name.clone(),
        latitude: request.latitude.map(Float64),
        longitude: request.longitude.map(Float64),
        fixed_coordinates: request.fixed_coordinates,
        ..Default::default()
    };
    lock(&client.locations).insert(id, location);
    Ok(ok(0, format!("Location added with id #{id}")))
}
