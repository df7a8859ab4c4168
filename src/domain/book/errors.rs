//! Book Context - Errors

use thiserror::Error;

use super::ChapterPosition;

#[derive(Debug, Error)]
pub enum BookError {
    #[error("EPUB 解析失败: {0}")]
    Parse(String),

    #[error("章节渲染失败: {0}")]
    Render(String),

    #[error("无效的目录位置: {0}")]
    InvalidPosition(ChapterPosition),

    #[error("无效的目录")]
    InvalidTableOfContents,
}
