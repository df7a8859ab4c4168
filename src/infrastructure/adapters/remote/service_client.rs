//! Remote Service Client - 远程服务公共 HTTP 调用
//!
//! 四个远程服务的请求形态相同：JSON POST，非 2xx 即失败，不重试

use reqwest::{Client, Response};
use serde::Serialize;
use std::time::Duration;

use crate::application::ports::RemoteFailure;

/// 远程服务配置
#[derive(Debug, Clone)]
pub struct RemoteServiceConfig {
    /// 服务端点完整 URL
    pub url: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for RemoteServiceConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:8000".to_string(),
            timeout_secs: 60,
        }
    }
}

impl RemoteServiceConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// 远程服务 HTTP 客户端
pub struct ServiceClient {
    client: Client,
    config: RemoteServiceConfig,
}

impl ServiceClient {
    pub fn new(config: RemoteServiceConfig) -> Result<Self, RemoteFailure> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| RemoteFailure::Network(e.to_string()))?;

        Ok(Self { client, config })
    }

    pub fn url(&self) -> &str {
        &self.config.url
    }

    /// 发送 JSON POST，非 2xx 状态转为 `RemoteFailure::Status`
    pub async fn post_json<T: Serialize + ?Sized>(
        &self,
        body: &T,
    ) -> Result<Response, RemoteFailure> {
        let response = self
            .client
            .post(&self.config.url)
            .json(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(RemoteFailure::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }
}

/// reqwest 错误分类
pub fn map_reqwest_error(e: reqwest::Error) -> RemoteFailure {
    if e.is_timeout() {
        RemoteFailure::Timeout
    } else if e.is_connect() {
        RemoteFailure::Network(format!("Cannot connect to service: {}", e))
    } else if e.is_decode() {
        RemoteFailure::InvalidResponse(e.to_string())
    } else {
        RemoteFailure::Network(e.to_string())
    }
}
