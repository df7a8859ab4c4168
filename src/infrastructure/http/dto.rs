//! Data Transfer Objects
//!
//! HTTP 请求/响应结构，与应用层类型解耦

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::{BookSummary, ChapterSummary, ProcessChapterResponse};
use crate::domain::book::{BookId, BookMetadata, ChapterOption, ChapterPosition, TableOfContents};

// ============================================================================
// 统一响应结构
// ============================================================================

/// 统一 API 响应格式
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub errno: i32,
    pub error: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 成功响应
    pub fn success(data: T) -> Self {
        Self {
            errno: 0,
            error: String::new(),
            data: Some(data),
        }
    }
}

/// 空数据响应
#[derive(Debug, Serialize)]
pub struct Empty {}

impl ApiResponse<Empty> {
    /// 成功但无数据
    pub fn ok() -> Self {
        Self::success(Empty {})
    }
}

// ============================================================================
// Book DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct BookIdRequest {
    pub book_id: Uuid,
}

impl BookIdRequest {
    pub fn book_id(&self) -> BookId {
        BookId::from_uuid(self.book_id)
    }
}

#[derive(Debug, Serialize)]
pub struct BookResponse {
    pub id: Uuid,
    pub title: String,
    pub metadata: BookMetadata,
    pub cover_url: String,
    pub cover_is_placeholder: bool,
    pub toc: TableOfContents,
    pub chapters: Vec<ChapterOption>,
}

impl From<BookSummary> for BookResponse {
    fn from(summary: BookSummary) -> Self {
        Self {
            id: *summary.id.as_uuid(),
            title: summary.title,
            metadata: summary.metadata,
            cover_url: summary.cover.url().to_string(),
            cover_is_placeholder: summary.cover.is_placeholder(),
            toc: summary.toc,
            chapters: summary.chapters,
        }
    }
}

// ============================================================================
// Chapter DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ChapterRequest {
    pub book_id: Uuid,
    pub chapter_index: usize,
    #[serde(default)]
    pub subitem_index: usize,
}

impl ChapterRequest {
    pub fn book_id(&self) -> BookId {
        BookId::from_uuid(self.book_id)
    }

    pub fn position(&self) -> ChapterPosition {
        ChapterPosition::new(self.chapter_index, self.subitem_index)
    }
}

#[derive(Debug, Serialize)]
pub struct ChapterResponse {
    pub chapter_index: usize,
    pub subitem_index: usize,
    pub label: String,
    pub href: String,
    pub non_story: bool,
}

impl From<ChapterSummary> for ChapterResponse {
    fn from(summary: ChapterSummary) -> Self {
        Self {
            chapter_index: summary.position.chapter_index,
            subitem_index: summary.position.subitem_index,
            label: summary.label,
            href: summary.href,
            non_story: summary.non_story,
        }
    }
}

/// 下一章节响应，`end_of_book` 为 true 时 `next` 为空
#[derive(Debug, Serialize)]
pub struct NextChapterResponseDto {
    pub end_of_book: bool,
    pub next: Option<ChapterResponse>,
}

#[derive(Debug, Serialize)]
pub struct ProcessChapterResponseDto {
    pub chapter_index: usize,
    pub subitem_index: usize,
    pub label: String,
    pub display_prompt: String,
    pub image_url: String,
    pub audio_id: Option<Uuid>,
    pub audio_url: Option<String>,
    pub skipped: bool,
}

impl From<ProcessChapterResponse> for ProcessChapterResponseDto {
    fn from(response: ProcessChapterResponse) -> Self {
        let skipped = response.result.is_skipped();
        let audio_id = response.result.audio.as_ref().map(|audio| audio.id);
        Self {
            chapter_index: response.position.chapter_index,
            subitem_index: response.position.subitem_index,
            label: response.label,
            display_prompt: response.result.display_prompt,
            image_url: response.result.image_url,
            audio_id,
            audio_url: audio_id.map(|id| format!("/api/audio/{}", id)),
            skipped,
        }
    }
}

// ============================================================================
// Audio DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ReleaseAudioRequest {
    pub audio_id: Uuid,
}
