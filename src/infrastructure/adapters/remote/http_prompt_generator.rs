//! HTTP Prompt Generator - 图片提示词生成服务客户端
//!
//! POST {url}
//! Request: {"prompt": "<segment>", "bookTitle": "..."}
//! Response: {"response": "<image prompt>"}

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::service_client::{map_reqwest_error, RemoteServiceConfig, ServiceClient};
use crate::application::ports::{PromptGeneratorPort, RemoteFailure, ServiceError};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PromptRequest<'a> {
    prompt: &'a str,
    book_title: &'a str,
}

#[derive(Debug, Deserialize)]
struct PromptResponse {
    response: Option<String>,
}

pub struct HttpPromptGenerator {
    client: ServiceClient,
}

impl HttpPromptGenerator {
    pub fn new(config: RemoteServiceConfig) -> Result<Self, ServiceError> {
        let client = ServiceClient::new(config).map_err(ServiceError::PromptGeneration)?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PromptGeneratorPort for HttpPromptGenerator {
    async fn generate(&self, segment: &str, book_title: &str) -> Result<String, ServiceError> {
        tracing::debug!(
            url = %self.client.url(),
            segment_len = segment.len(),
            "Sending prompt request"
        );

        let request = PromptRequest {
            prompt: segment,
            book_title,
        };
        let response = self
            .client
            .post_json(&request)
            .await
            .map_err(ServiceError::PromptGeneration)?;

        let body: PromptResponse = response
            .json()
            .await
            .map_err(|e| ServiceError::PromptGeneration(map_reqwest_error(e)))?;

        let prompt = body
            .response
            .filter(|p| !p.trim().is_empty())
            .ok_or_else(|| {
                ServiceError::PromptGeneration(RemoteFailure::InvalidResponse(
                    "Missing prompt in response".to_string(),
                ))
            })?;

        tracing::info!(prompt = %prompt, "Image prompt generated");
        Ok(prompt)
    }
}
