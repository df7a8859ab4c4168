//! Image Generator Port - 由提示词生成图片

use async_trait::async_trait;

use super::ServiceError;

#[async_trait]
pub trait ImageGeneratorPort: Send + Sync {
    /// 返回生成图片的 URL
    async fn generate(&self, prompt: &str, book_title: &str) -> Result<String, ServiceError>;
}
