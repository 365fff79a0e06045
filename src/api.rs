//! HTTP client for the remote permissions API
//!
//! Endpoints:
//! - `GET  {base}/permissions` — full catalog
//! - `GET  {base}/permissions/role/{role}` — grants for a role
//! - `POST {base}/permissions/role` — replace a role's grants
//!
//! Every request carries a bearer token from the configured [`TokenSource`],
//! queried per request so rotated credentials are picked up immediately.

use crate::config::ClientConfig;
use crate::error::{PermitError, Result};
use crate::transport::PermissionTransport;
use crate::types::{PermissionsResponse, RolePermissionsUpdate};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, RequestBuilder};
use tracing::debug;
use url::Url;

/// Reqwest-backed implementation of [`PermissionTransport`]
pub struct HttpPermissionsApi {
    client: Client,
    config: ClientConfig,
}

impl HttpPermissionsApi {
    /// Create a new API client from a configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = ClientBuilder::new()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self { client, config })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.config.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| PermitError::config("base_url cannot serve as a base"))?;
            // pop_if_empty keeps trailing-slash base URLs from doubling separators
            path.pop_if_empty();
            for segment in segments {
                path.push(segment);
            }
        }
        Ok(url)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.config.token_source.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn execute(&self, request: RequestBuilder) -> Result<PermissionsResponse> {
        let response = self.authorize(request).send().await?;
        let response = response.error_for_status()?;
        let envelope = response.json::<PermissionsResponse>().await?;
        Ok(envelope)
    }
}

#[async_trait]
impl PermissionTransport for HttpPermissionsApi {
    async fn fetch_all_permissions(&self) -> Result<PermissionsResponse> {
        let url = self.endpoint(&["permissions"])?;
        debug!(url = %url, "fetching permission catalog");
        self.execute(self.client.get(url)).await
    }

    async fn fetch_role_permissions(&self, role: &str) -> Result<PermissionsResponse> {
        let url = self.endpoint(&["permissions", "role", role])?;
        debug!(url = %url, role, "fetching role permissions");
        self.execute(self.client.get(url)).await
    }

    async fn update_role_permissions(
        &self,
        role: &str,
        permission_names: &[String],
    ) -> Result<PermissionsResponse> {
        let url = self.endpoint(&["permissions", "role"])?;
        let body = RolePermissionsUpdate {
            role: role.to_string(),
            permission_names: permission_names.to_vec(),
        };
        debug!(url = %url, role, count = permission_names.len(), "updating role permissions");
        self.execute(self.client.post(url).json(&body)).await
    }
}
