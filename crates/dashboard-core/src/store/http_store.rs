//! REST Milestone Store
//!
//! `GET/POST {path}`, `PUT/DELETE {path}/{id}` with JSON bodies. A PUT
//! answered without a body keeps the record that was sent.

use async_trait::async_trait;

use super::traits::MilestoneStore;
use crate::config::DashboardConfig;
use crate::domain::{DomainResult, Milestone, MilestoneId, NewMilestone};
use crate::http::ApiClient;

#[derive(Debug, Clone)]
pub struct HttpMilestoneStore {
    api: ApiClient,
    path: String,
}

impl HttpMilestoneStore {
    pub fn new(api: ApiClient, path: impl Into<String>) -> Self {
        Self {
            api,
            path: path.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &DashboardConfig) -> DomainResult<Self> {
        Ok(Self::new(ApiClient::from_config(config)?, config.endpoints.milestones.clone()))
    }

    fn item_path(&self, id: MilestoneId) -> String {
        format!("{}/{}", self.path, id)
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl MilestoneStore for HttpMilestoneStore {
    async fn list(&self) -> DomainResult<Vec<Milestone>> {
        self.api.get_json(&self.path, &[]).await
    }

    async fn create(&self, milestone: &NewMilestone) -> DomainResult<Milestone> {
        self.api.post_json(&self.path, milestone).await
    }

    async fn update(&self, milestone: &Milestone) -> DomainResult<Milestone> {
        let echoed = self.api.put_json(&self.item_path(milestone.id), milestone).await?;
        Ok(echoed.unwrap_or_else(|| milestone.clone()))
    }

    async fn delete(&self, id: MilestoneId) -> DomainResult<()> {
        self.api.delete(&self.item_path(id)).await
    }
}
