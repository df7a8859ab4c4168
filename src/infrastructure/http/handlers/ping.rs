//! Ping Handler
//!
//! 健康检查，附带内存中资源数量

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::infrastructure::http::state::AppState;

#[derive(Serialize)]
pub struct PingResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub loaded_books: usize,
    pub stored_audio: usize,
}

pub async fn ping(State(state): State<Arc<AppState>>) -> Json<PingResponse> {
    Json(PingResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        loaded_books: state.book_store.len(),
        stored_audio: state.audio_store.len(),
    })
}
