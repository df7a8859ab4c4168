//! Prompt Generator Port - 由片段生成图片提示词

use async_trait::async_trait;

use super::ServiceError;

#[async_trait]
pub trait PromptGeneratorPort: Send + Sync {
    async fn generate(&self, segment: &str, book_title: &str) -> Result<String, ServiceError>;
}
