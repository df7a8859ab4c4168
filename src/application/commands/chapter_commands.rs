//! Chapter Commands - 章节处理

use crate::domain::book::{BookId, ChapterPosition};
use crate::domain::GenerationResult;

/// 处理指定位置的章节
#[derive(Debug, Clone)]
pub struct ProcessChapter {
    pub book_id: BookId,
    pub position: ChapterPosition,
}

/// 章节处理响应
#[derive(Debug, Clone)]
pub struct ProcessChapterResponse {
    pub position: ChapterPosition,
    pub label: String,
    pub result: GenerationResult,
}
