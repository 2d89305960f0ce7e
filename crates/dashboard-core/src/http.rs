//! REST Client Plumbing
//!
//! Thin wrapper around `reqwest::Client` bound to one base URL. Maps
//! non-2xx responses to [`DomainError`] and decodes JSON bodies.

use reqwest::header::ACCEPT;
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::DashboardConfig;
use crate::domain::{DomainError, DomainResult};

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> DomainResult<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(DomainError::Config("api base url is empty".to_string()));
        }
        Ok(Self {
            client: reqwest::Client::new(),
            base_url,
        })
    }

    pub fn from_config(config: &DashboardConfig) -> DomainResult<Self> {
        Self::new(config.api_base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> DomainResult<T> {
        let url = self.url(path);
        log::debug!("GET {}", url);
        let request = self.client.get(&url).query(query);
        let response = Self::send(request, &url).await?;
        Ok(response.json::<T>().await?)
    }

    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> DomainResult<T> {
        let url = self.url(path);
        log::debug!("POST {}", url);
        let response = Self::send(self.client.post(&url).json(body), &url).await?;
        Ok(response.json::<T>().await?)
    }

    /// PUT; a 2xx with an empty body (such as 204) yields `None`
    pub async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> DomainResult<Option<T>> {
        let url = self.url(path);
        log::debug!("PUT {}", url);
        let response = Self::send(self.client.put(&url).json(body), &url).await?;
        let bytes = response.bytes().await?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }
        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    /// DELETE; any 2xx counts as success and the body is ignored
    pub async fn delete(&self, path: &str) -> DomainResult<()> {
        let url = self.url(path);
        log::debug!("DELETE {}", url);
        Self::send(self.client.delete(&url), &url).await?;
        Ok(())
    }

    async fn send(request: RequestBuilder, url: &str) -> DomainResult<Response> {
        let response = request.header(ACCEPT, "application/json").send().await?;
        match response.status() {
            status if status.is_success() => Ok(response),
            StatusCode::NOT_FOUND => Err(DomainError::NotFound(url.to_string())),
            status => Err(DomainError::Http {
                status: status.as_u16(),
                url: url.to_string(),
            }),
        }
    }
}
