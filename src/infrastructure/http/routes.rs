//! HTTP Routes
//!
//! API Endpoints:
//! - /api/ping                 GET   健康检查
//! - /api/book/upload          POST  上传 EPUB（multipart，字段 file）
//! - /api/book/get             POST  获取书籍概要
//! - /api/book/close           POST  关闭书籍
//! - /api/chapter/next         POST  计算下一章节
//! - /api/chapter/process      POST  生成章节插图与音频
//! - /api/audio/:audio_id      GET   下载音频
//! - /api/audio/release        POST  释放音频

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .nest("/book", book_routes())
        .nest("/chapter", chapter_routes())
        .nest("/audio", audio_routes())
}

/// Book 路由
fn book_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/upload", post(handlers::upload_book))
        .route("/get", post(handlers::get_book))
        .route("/close", post(handlers::close_book))
}

/// Chapter 路由
fn chapter_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/next", post(handlers::next_chapter))
        .route("/process", post(handlers::process_chapter))
}

/// Audio 路由
fn audio_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/release", post(handlers::release_audio))
        .route("/:audio_id", get(handlers::get_audio))
}
