//! Book HTTP Handlers

use axum::{
    extract::{Multipart, State},
    Json,
};
use std::sync::Arc;

use crate::application::{CloseBook, GetBook, LoadBook};
use crate::infrastructure::http::dto::{ApiResponse, BookIdRequest, BookResponse, Empty};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 上传 EPUB 文件并解析
pub async fn upload_book(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<BookResponse>>, ApiError> {
    let mut upload: Option<(Option<String>, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        ApiError::BadRequest(format!("Failed to read multipart field: {}", e))
    })? {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().map(|s| s.to_string());
        let is_epub = filename
            .as_ref()
            .map(|f| f.to_lowercase().ends_with(".epub"))
            .unwrap_or(false);
        let is_epub_type = field
            .content_type()
            .map(|ct| ct == "application/epub+zip")
            .unwrap_or(false);

        if !is_epub && !is_epub_type {
            return Err(ApiError::BadRequest(
                "Only EPUB files are allowed".to_string(),
            ));
        }

        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Failed to read file: {}", e)))?;

        upload = Some((filename, bytes.to_vec()));
    }

    let (file_name, bytes) =
        upload.ok_or_else(|| ApiError::BadRequest("Missing file field".to_string()))?;

    tracing::info!(
        file_name = ?file_name,
        size = bytes.len(),
        "Received EPUB upload"
    );

    // EPUB 解析是同步 CPU 工作，放到阻塞线程池
    let result = tokio::task::spawn_blocking(move || {
        state
            .load_book_handler
            .handle(LoadBook { bytes, file_name })
    })
    .await
    .map_err(|e| ApiError::Internal(format!("Book loading task failed: {}", e)))??;

    Ok(Json(ApiResponse::success(result.book.into())))
}

/// 获取已加载书籍的概要
pub async fn get_book(
    State(state): State<Arc<AppState>>,
    Json(req): Json<BookIdRequest>,
) -> Result<Json<ApiResponse<BookResponse>>, ApiError> {
    let summary = state.get_book_handler.handle(GetBook {
        book_id: req.book_id(),
    })?;

    Ok(Json(ApiResponse::success(summary.into())))
}

/// 关闭书籍
pub async fn close_book(
    State(state): State<Arc<AppState>>,
    Json(req): Json<BookIdRequest>,
) -> Result<Json<ApiResponse<Empty>>, ApiError> {
    state.close_book_handler.handle(CloseBook {
        book_id: req.book_id(),
    })?;

    Ok(Json(ApiResponse::ok()))
}
