use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::Config;
use crate::providers::fyfeio::error::FyfeProviderError;
use crate::providers::fyfeio::types::*;

/// The three zone endpoints the provider talks to.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ZoneApi: Send + Sync {
    async fn list_records(&self, zone: &str) -> Result<ListRecordsResponse, FyfeProviderError>;

    async fn put_records(
        &self,
        zone: &str,
        req: &AppendRecordsRequest,
    ) -> Result<AppendRecordsResponse, FyfeProviderError>;

    async fn delete_records(
        &self,
        zone: &str,
        req: &AppendRecordsRequest,
    ) -> Result<AppendRecordsResponse, FyfeProviderError>;
}

pub struct FyfeClient {
    base_url: Url,
    api_token: Option<String>,
    client: Client,
}

impl FyfeClient {
    pub fn new(config: &Config) -> Result<Self, FyfeProviderError> {
        let base_url = Url::parse(&config.api_url).map_err(|e| {
            FyfeProviderError::InvalidInput(format!("invalid api url {}: {e}", config.api_url))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(FyfeProviderError::InvalidInput(format!(
                "api url {} cannot be a base",
                config.api_url
            )));
        }

        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            base_url,
            api_token: config.api_token.clone(),
            client,
        })
    }

    pub fn zone_url(&self, zone: &str) -> Result<Url, FyfeProviderError> {
        // `push` drops dot segments, which would address a different resource.
        if matches!(zone, "" | "." | "..") {
            return Err(FyfeProviderError::InvalidInput(format!(
                "invalid zone {zone:?}"
            )));
        }
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| FyfeProviderError::InvalidInput("api url cannot be a base".into()))?
            .pop_if_empty()
            .push("zone")
            .push(zone);
        Ok(url)
    }

    async fn handle_request<T>(&self, request: RequestBuilder) -> Result<T, FyfeProviderError>
    where
        T: DeserializeOwned,
    {
        let request = request.header(ACCEPT, "application/json");
        let request = match &self.api_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!(%status, bytes = body.len(), "zone api responded");

        if status.is_success() {
            return Ok(serde_json::from_str(&body)?);
        }

        let message = match serde_json::from_str::<AppendRecordsResponse>(&body) {
            Ok(res) => res.message,
            Err(_) if !body.trim().is_empty() => body,
            Err(_) => status.canonical_reason().unwrap_or("unknown").to_string(),
        };
        Err(FyfeProviderError::from_status(status, message))
    }
}

#[async_trait]
impl ZoneApi for FyfeClient {
    async fn list_records(&self, zone: &str) -> Result<ListRecordsResponse, FyfeProviderError> {
        let url = self.zone_url(zone)?;
        self.handle_request(self.client.get(url)).await
    }

    async fn put_records(
        &self,
        zone: &str,
        req: &AppendRecordsRequest,
    ) -> Result<AppendRecordsResponse, FyfeProviderError> {
        let url = self.zone_url(zone)?;
        self.handle_request(self.client.put(url).json(req)).await
    }

    async fn delete_records(
        &self,
        zone: &str,
        req: &AppendRecordsRequest,
    ) -> Result<AppendRecordsResponse, FyfeProviderError> {
        let url = self.zone_url(zone)?;
        self.handle_request(self.client.delete(url).json(req)).await
    }
}
