//! HTTP client for the remote character API.
//!
//! One fixed resource per user: `GET {base_url}/{user}/character` loads,
//! `POST` to the same path saves.

use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use std::time::Duration;

use pointbuy_shared::{decode_load_response, CharacterData};

use super::config::{StoreConfig, DEFAULT_CHARACTER_API_TIMEOUT_SECS};
use super::ports::{CharacterStore, StoreError};

#[derive(Clone)]
pub struct HttpCharacterStore {
    client: Client,
    base_url: String,
    user: String,
}

impl HttpCharacterStore {
    pub fn new(base_url: &str, user: &str) -> Self {
        Self::with_timeout(
            base_url,
            user,
            Duration::from_secs(DEFAULT_CHARACTER_API_TIMEOUT_SECS),
        )
    }

    pub fn with_timeout(base_url: &str, user: &str, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            user: user.to_string(),
        }
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        Self::with_timeout(&config.base_url, &config.user, config.timeout)
    }

    pub fn character_url(&self) -> String {
        format!("{}/{}/character", self.base_url, self.user)
    }
}

#[async_trait]
impl CharacterStore for HttpCharacterStore {
    async fn load(&self) -> Result<Option<CharacterData>, StoreError> {
        let url = self.character_url();
        let response = self
            .client
            .get(&url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| StoreError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            tracing::info!(url = %url, "No saved character found");
            return Ok(None);
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(StoreError::Status {
                code: status.as_u16(),
                message,
            });
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| StoreError::InvalidResponse(e.to_string()))?;
        let data =
            decode_load_response(body).map_err(|e| StoreError::InvalidResponse(e.to_string()))?;

        tracing::debug!(url = %url, found = data.is_some(), "Character loaded");
        Ok(data)
    }

    async fn save(&self, data: &CharacterData) -> Result<(), StoreError> {
        let url = self.character_url();
        let body =
            serde_json::to_vec(data).map_err(|e| StoreError::Serialization(e.to_string()))?;

        let response = self
            .client
            .post(&url)
            .header(header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| StoreError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(StoreError::Status {
                code: status.as_u16(),
                message,
            });
        }

        tracing::debug!(url = %url, "Character saved");
        Ok(())
    }
}
