//! HTTP Image Generator - 图片生成服务客户端
//!
//! POST {url}
//! Request: {"prompt": "..."}
//! Response: {"result": "<image url>"}

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::service_client::{map_reqwest_error, RemoteServiceConfig, ServiceClient};
use crate::application::ports::{ImageGeneratorPort, RemoteFailure, ServiceError};

#[derive(Debug, Serialize)]
struct ImageRequest<'a> {
    prompt: &'a str,
}

#[derive(Debug, Deserialize)]
struct ImageResponse {
    result: Option<String>,
}

pub struct HttpImageGenerator {
    client: ServiceClient,
}

impl HttpImageGenerator {
    pub fn new(config: RemoteServiceConfig) -> Result<Self, ServiceError> {
        let client = ServiceClient::new(config).map_err(ServiceError::ImageGeneration)?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ImageGeneratorPort for HttpImageGenerator {
    async fn generate(&self, prompt: &str, book_title: &str) -> Result<String, ServiceError> {
        tracing::debug!(
            url = %self.client.url(),
            book = %book_title,
            "Sending image request"
        );

        let response = self
            .client
            .post_json(&ImageRequest { prompt })
            .await
            .map_err(ServiceError::ImageGeneration)?;

        let body: ImageResponse = response
            .json()
            .await
            .map_err(|e| ServiceError::ImageGeneration(map_reqwest_error(e)))?;

        let image_url = body
            .result
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| {
                ServiceError::ImageGeneration(RemoteFailure::InvalidResponse(
                    "Image URL not received from API".to_string(),
                ))
            })?;

        tracing::info!(image_url = %image_url, "Image generated");
        Ok(image_url)
    }
}
