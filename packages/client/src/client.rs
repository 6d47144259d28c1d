use listkeep_core::{
    DeleteConfirmation, Item, ItemCreateInput, ItemUpdateInput, List, ListCreateInput,
    ListUpdateInput,
};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::error::{ClientError, ClientResult};

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// HTTP API client for communicating with a Listkeep server
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check server health
    pub async fn health_check(&self) -> ClientResult<bool> {
        let response = self.client.get(self.url("/api/health")).send().await?;

        Ok(response.status().is_success())
    }

    /// Get all lists
    pub async fn get_all_lists(&self) -> ClientResult<Vec<List>> {
        let response = self.client.get(self.url("/api/lists")).send().await?;
        Self::decode(response).await
    }

    pub async fn get_list(&self, id: i64) -> ClientResult<List> {
        let response = self
            .client
            .get(self.url(&format!("/api/lists/{}", id)))
            .send()
            .await?;
        Self::decode(response).await
    }

    pub async fn create_list(&self, input: &ListCreateInput) -> ClientResult<List> {
        let response = self
            .client
            .post(self.url("/api/lists"))
            .json(input)
            .send()
            .await?;
        Self::decode(response).await
    }

    pub async fn update_list(&self, id: i64, input: &ListUpdateInput) -> ClientResult<List> {
        let response = self
            .client
            .put(self.url(&format!("/api/lists/{}", id)))
            .json(input)
            .send()
            .await?;
        Self::decode(response).await
    }

    pub async fn delete_list(&self, id: i64) -> ClientResult<DeleteConfirmation> {
        let response = self
            .client
            .delete(self.url(&format!("/api/lists/{}", id)))
            .send()
            .await?;
        Self::decode(response).await
    }

    /// Get all items across lists, newest first
    pub async fn get_all_items(&self) -> ClientResult<Vec<Item>> {
        let response = self.client.get(self.url("/api/items")).send().await?;
        Self::decode(response).await
    }

    /// Get the items of one list, newest first
    pub async fn get_items_by_list_id(&self, list_id: i64) -> ClientResult<Vec<Item>> {
        let response = self
            .client
            .get(self.url("/api/items"))
            .query(&[("listId", list_id)])
            .send()
            .await?;
        Self::decode(response).await
    }

    pub async fn get_item(&self, id: i64) -> ClientResult<Item> {
        let response = self
            .client
            .get(self.url(&format!("/api/items/{}", id)))
            .send()
            .await?;
        Self::decode(response).await
    }

    pub async fn create_item(&self, input: &ItemCreateInput) -> ClientResult<Item> {
        let response = self
            .client
            .post(self.url("/api/items"))
            .json(input)
            .send()
            .await?;
        Self::decode(response).await
    }

    pub async fn update_item(&self, id: i64, input: &ItemUpdateInput) -> ClientResult<Item> {
        let response = self
            .client
            .put(self.url(&format!("/api/items/{}", id)))
            .json(input)
            .send()
            .await?;
        Self::decode(response).await
    }

    pub async fn delete_item(&self, id: i64) -> ClientResult<DeleteConfirmation> {
        let response = self
            .client
            .delete(self.url(&format!("/api/items/{}", id)))
            .send()
            .await?;
        Self::decode(response).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
        let status = response.status();
        debug!("{} {}", status, response.url());

        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        let text = response.text().await?;
        let message = match serde_json::from_str::<ErrorBody>(&text) {
            Ok(body) => body.error,
            Err(_) if !text.trim().is_empty() => text,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string(),
        };

        Err(ClientError::Api { status, message })
    }
}
