use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use super::tenders_model::{BudgetTotal, HeaderNote, NewTender, TenderRecord, TenderUpdate};
use crate::tenders::tenders_errors::{Result, TenderError};
use crate::tenders::tenders_traits::TenderRepositoryTrait;

/// REST-backed implementation of the tender collaborator
pub struct HttpTenderRepository {
    client: Client,
    base_url: String,
}

impl HttpTenderRepository {
    pub fn new(base_url: impl Into<String>) -> Self {
        HttpTenderRepository {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn decode<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TenderError::Remote(format!(
                "Server responded with {}: {}",
                status, body
            )));
        }
        response.json::<T>().await.map_err(TenderError::from)
    }
}

#[async_trait]
impl TenderRepositoryTrait for HttpTenderRepository {
    async fn list(&self) -> Result<Vec<TenderRecord>> {
        debug!("Fetching tender list from {}", self.base_url);
        let response = self.client.get(self.url("/tenders")).send().await?;
        Self::decode(response).await
    }

    async fn create(&self, new_tender: NewTender) -> Result<TenderRecord> {
        let response = self
            .client
            .post(self.url("/tenders"))
            .json(&new_tender)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn update(&self, id: i64, update: TenderUpdate) -> Result<TenderRecord> {
        let response = self
            .client
            .patch(self.url(&format!("/tenders/{}", id)))
            .json(&update)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let response = self
            .client
            .delete(self.url(&format!("/tenders/{}", id)))
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TenderError::Remote(format!(
                "Server responded with {}: {}",
                status, body
            )));
        }
        Ok(())
    }

    async fn get_budget_total(&self, tender_group_id: i64) -> Result<BudgetTotal> {
        let response = self
            .client
            .get(self.url(&format!("/tender-groups/{}/budget", tender_group_id)))
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn get_header_note(&self) -> Result<HeaderNote> {
        let response = self.client.get(self.url("/header-note")).send().await?;
        Self::decode(response).await
    }

    async fn save_header_note(&self, content: &str) -> Result<HeaderNote> {
        let response = self
            .client
            .put(self.url("/header-note"))
            .json(&HeaderNote {
                content: content.to_string(),
            })
            .send()
            .await?;
        Self::decode(response).await
    }
}
