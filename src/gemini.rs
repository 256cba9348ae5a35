//! Gemini API連携（reqwest）

use crate::config::Config;
use crate::error::{FarReviewError, Result};
use async_trait::async_trait;
use far_review_common::{
    endpoint_url, AssistantConfig, AssistantRequest, Error, GeminiRequest, GeminiResponse,
    TextGenerator,
};
use reqwest::Client;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct HttpGenerator {
    client: Client,
    config: AssistantConfig,
}

impl HttpGenerator {
    pub fn new(config: AssistantConfig, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FarReviewError::HttpClient(e.to_string()))?;

        Ok(Self { client, config })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.assistant_config(),
            Duration::from_secs(config.timeout_seconds),
        )
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }
}

#[async_trait(?Send)]
impl TextGenerator for HttpGenerator {
    async fn generate(&self, request: &AssistantRequest) -> far_review_common::Result<String> {
        let api_key = self.config.require_api_key()?;
        let url = endpoint_url(&self.config.api_base, &request.model, api_key);
        let body = GeminiRequest::new(&request.system_instruction, &request.user_content);

        let response = self
            .client
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Api { status: status.as_u16() });
        }

        let payload: GeminiResponse = response
            .json()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        Ok(payload.text())
    }
}
