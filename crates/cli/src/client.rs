//! HTTP client for the Kubecost allocation and asset endpoints

use anyhow::{Context, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use report_lib::{AllocationCost, ApiResponse, AssetCost, QueryParams};

/// Client for the cost-reporting API
pub struct ApiClient {
    client: Client,
    base_url: Url,
    username: Option<String>,
    password: Option<String>,
}

impl ApiClient {
    /// Create a new API client with optional basic-auth credentials
    pub fn new(base_url: &str, username: Option<String>, password: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        // A trailing slash keeps Url::join from eating the last path segment
        let mut base = base_url.to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base).context("Invalid API URL")?;

        Ok(Self {
            client,
            base_url,
            username,
            password,
        })
    }

    /// Fetch from the allocation endpoint
    pub async fn allocation(&self, params: &QueryParams) -> Result<ApiResponse<AllocationCost>> {
        self.get("allocation", params).await
    }

    /// Fetch from the assets endpoint
    pub async fn assets(&self, params: &QueryParams) -> Result<ApiResponse<AssetCost>> {
        self.get("assets", params).await
    }

    async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &QueryParams,
    ) -> Result<ApiResponse<T>> {
        let url = self.base_url.join(endpoint).context("Invalid path")?;
        let query = params.to_query();
        debug!(endpoint, ?query, "fetching cost data");

        let mut request = self.client.get(url).query(&query);
        if let Some(username) = &self.username {
            request = request.basic_auth(username, self.password.as_deref());
        }

        let response = request.send().await.context("Failed to send request")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Cost API error ({}): {}", status, body);
        }

        response
            .json()
            .await
            .context("Failed to decode cost API response")
    }
}
