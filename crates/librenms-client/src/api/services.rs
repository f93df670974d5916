//! Service endpoints (`/services`)

use crate::client::LibreNmsClient;
use crate::common::query::segment;
use crate::error::LibreNmsError;
use crate::models::service::ServiceResponseMulti;
use crate::models::{BaseResponse, ServiceCreateRequest, ServiceResponse, ServiceUpdateRequest};

const ENDPOINT: &str = "services";

/// Service operations, obtained from [`LibreNmsClient::services`]
#[derive(Debug, Clone, Copy)]
pub struct ServiceApi<'a> {
    client: &'a LibreNmsClient,
}

impl<'a> ServiceApi<'a> {
    pub(crate) fn new(client: &'a LibreNmsClient) -> Self {
        Self { client }
    }

    /// Add a service check to a device (id or hostname)
    pub async fn create(
        &self,
        device: &str,
        request: &ServiceCreateRequest,
    ) -> Result<BaseResponse, LibreNmsError> {
        self.client
            .http()
            .post(&format!("{ENDPOINT}/{}", segment(device)), Some(request))
            .await
    }

    /// Delete a service
    pub async fn delete(&self, service_id: i64) -> Result<BaseResponse, LibreNmsError> {
        self.client.http().delete(&format!("{ENDPOINT}/{service_id}")).await
    }

    /// Look up one service by id.
    ///
    /// Lists every service and keeps the match; `services` is empty when the
    /// id is unknown.
    pub async fn get(&self, service_id: i64) -> Result<ServiceResponse, LibreNmsError> {
        let all = self.list().await?;
        Ok(select_service(all, service_id))
    }

    /// List all services
    pub async fn list(&self) -> Result<ServiceResponse, LibreNmsError> {
        let raw: ServiceResponseMulti = self.client.http().get(ENDPOINT, None).await?;
        Ok(raw.flatten())
    }

    /// Services of one device (id or hostname)
    pub async fn for_host(&self, device: &str) -> Result<ServiceResponse, LibreNmsError> {
        let raw: ServiceResponseMulti = self
            .client
            .http()
            .get(&format!("{ENDPOINT}/{}", segment(device)), None)
            .await?;
        Ok(raw.flatten())
    }

    /// Update a service.
    ///
    /// Only the fields set on `request` are sent; LibreNMS rejects a patch
    /// that changes nothing, so an empty request fails locally.
    pub async fn update(
        &self,
        service_id: i64,
        request: &ServiceUpdateRequest,
    ) -> Result<BaseResponse, LibreNmsError> {
        if *request == ServiceUpdateRequest::default() {
            return Err(LibreNmsError::InvalidRequest(
                "service update needs at least one field".to_string(),
            ));
        }
        self.client
            .http()
            .patch(&format!("{ENDPOINT}/{service_id}"), Some(request))
            .await
    }
}

fn select_service(all: ServiceResponse, service_id: i64) -> ServiceResponse {
    if all.services.is_empty() {
        return all;
    }

    let found = all.services.into_iter().find(|s| s.id == service_id);
    ServiceResponse {
        base: BaseResponse {
            status: all.base.status,
            message: all.base.message,
            count: i64::from(found.is_some()),
        },
        services: found.into_iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Service;

    #[test]
    fn select_keeps_only_the_match() {
        let all = ServiceResponse {
            base: BaseResponse {
                status: "ok".to_string(),
                message: String::new(),
                count: 2,
            },
            services: vec![
                Service {
                    id: 3,
                    ..Default::default()
                },
                Service {
                    id: 9,
                    ..Default::default()
                },
            ],
        };

        let hit = select_service(all.clone(), 9);
        assert_eq!(hit.base.count, 1);
        assert_eq!(hit.services.len(), 1);
        assert_eq!(hit.services[0].id, 9);

        let miss = select_service(all, 4);
        assert_eq!(miss.base.count, 0);
        assert!(miss.services.is_empty());
    }
}
