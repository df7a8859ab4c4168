//! Text Segmenter Port - 章节分段判定

use async_trait::async_trait;

use super::ServiceError;
use crate::domain::SegmentOutcome;

/// Text Segmenter Port
///
/// 判断章节是否属于情节，并返回代表性片段
#[async_trait]
pub trait TextSegmenterPort: Send + Sync {
    async fn segment(&self, text: &str, book_title: &str) -> Result<SegmentOutcome, ServiceError>;
}
