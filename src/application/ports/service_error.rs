//! Remote Service Errors - 远程服务错误定义

use thiserror::Error;

/// 单次远程调用的失败原因
#[derive(Debug, Error)]
pub enum RemoteFailure {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timeout")]
    Timeout,

    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// 远程服务错误，按客户端区分
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Segmentation failed: {0}")]
    Segmentation(RemoteFailure),

    #[error("Prompt generation failed: {0}")]
    PromptGeneration(RemoteFailure),

    #[error("Image generation failed: {0}")]
    ImageGeneration(RemoteFailure),

    #[error("Audio generation failed: {0}")]
    AudioGeneration(RemoteFailure),
}

impl ServiceError {
    pub fn failure(&self) -> &RemoteFailure {
        match self {
            ServiceError::Segmentation(f)
            | ServiceError::PromptGeneration(f)
            | ServiceError::ImageGeneration(f)
            | ServiceError::AudioGeneration(f) => f,
        }
    }
}
