//! Chapter HTTP Handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::{NextChapter, ProcessChapter};
use crate::infrastructure::http::dto::{
    ApiResponse, ChapterRequest, NextChapterResponseDto, ProcessChapterResponseDto,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 计算下一章节位置
pub async fn next_chapter(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ChapterRequest>,
) -> Result<Json<ApiResponse<NextChapterResponseDto>>, ApiError> {
    let response = state.next_chapter_handler.handle(NextChapter {
        book_id: req.book_id(),
        position: req.position(),
    })?;

    Ok(Json(ApiResponse::success(NextChapterResponseDto {
        end_of_book: response.next.is_none(),
        next: response.next.map(Into::into),
    })))
}

/// 处理章节：生成插图与朗读音频
pub async fn process_chapter(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ChapterRequest>,
) -> Result<Json<ApiResponse<ProcessChapterResponseDto>>, ApiError> {
    let response = state
        .process_chapter_handler
        .handle(ProcessChapter {
            book_id: req.book_id(),
            position: req.position(),
        })
        .await?;

    Ok(Json(ApiResponse::success(response.into())))
}
