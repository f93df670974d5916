//! Device group endpoints (`/devicegroups`)

use crate::client::LibreNmsClient;
use crate::common::query::segment;
use crate::error::LibreNmsError;
use crate::models::*;

const ENDPOINT: &str = "devicegroups";

/// Device group operations, obtained from [`LibreNmsClient::device_groups`]
#[derive(Debug, Clone, Copy)]
pub struct DeviceGroupApi<'a> {
    client: &'a LibreNmsClient,
}

impl<'a> DeviceGroupApi<'a> {
    pub(crate) fn new(client: &'a LibreNmsClient) -> Self {
        Self { client }
    }

    /// Create a group; the response carries the new group id
    pub async fn create(
        &self,
        request: &DeviceGroupCreateRequest,
    ) -> Result<DeviceGroupCreateResponse, LibreNmsError> {
        self.client.http().post(ENDPOINT, Some(request)).await
    }

    /// Delete a group by name or id
    pub async fn delete(&self, identifier: &str) -> Result<BaseResponse, LibreNmsError> {
        self.client
            .http()
            .delete(&format!("{ENDPOINT}/{}", segment(identifier)))
            .await
    }

    /// Look up one group by name or id.
    ///
    /// The API has no single-group endpoint, so this lists all groups and
    /// keeps the first match. `groups` is empty and `count` is 0 when
    /// nothing matches.
    pub async fn get(&self, identifier: &str) -> Result<DeviceGroupResponse, LibreNmsError> {
        let all = self.list().await?;
        Ok(select_group(all, identifier))
    }

    /// List all groups
    pub async fn list(&self) -> Result<DeviceGroupResponse, LibreNmsError> {
        self.client.http().get(ENDPOINT, None).await
    }

    /// Devices in a group
    pub async fn members(&self, identifier: &str) -> Result<DeviceGroupMembersResponse, LibreNmsError> {
        self.client
            .http()
            .get(&format!("{ENDPOINT}/{}", segment(identifier)), None)
            .await
    }

    /// Update a group by name or id
    pub async fn update(
        &self,
        identifier: &str,
        request: &DeviceGroupUpdateRequest,
    ) -> Result<BaseResponse, LibreNmsError> {
        self.client
            .http()
            .patch(&format!("{ENDPOINT}/{}", segment(identifier)), Some(request))
            .await
    }
}

/// Keep the first group whose name or id equals `identifier`
fn select_group(all: DeviceGroupResponse, identifier: &str) -> DeviceGroupResponse {
    if all.groups.is_empty() {
        return all;
    }

    let found = all
        .groups
        .into_iter()
        .find(|g| g.name == identifier || g.id.to_string() == identifier);

    DeviceGroupResponse {
        base: BaseResponse {
            status: all.base.status,
            message: all.base.message,
            count: i64::from(found.is_some()),
        },
        groups: found.into_iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groups() -> DeviceGroupResponse {
        DeviceGroupResponse {
            base: BaseResponse {
                status: "ok".to_string(),
                message: "Found 2 device groups".to_string(),
                count: 2,
            },
            groups: vec![
                DeviceGroup {
                    id: 1,
                    name: "core".to_string(),
                    ..Default::default()
                },
                DeviceGroup {
                    id: 7,
                    name: "edge".to_string(),
                    ..Default::default()
                },
            ],
        }
    }

    #[test]
    fn selects_by_name_or_id() {
        let by_name = select_group(groups(), "edge");
        assert_eq!(by_name.base.count, 1);
        assert_eq!(by_name.groups[0].id, 7);
        assert_eq!(by_name.base.message, "Found 2 device groups");

        let by_id = select_group(groups(), "1");
        assert_eq!(by_id.groups[0].name, "core");
    }

    #[test]
    fn no_match_is_empty() {
        let none = select_group(groups(), "dc2");
        assert!(none.groups.is_empty());
        assert_eq!(none.base.count, 0);
        assert!(none.base.is_ok());
    }
}
