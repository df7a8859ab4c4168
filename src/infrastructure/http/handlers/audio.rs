//! Audio Handlers

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::Response,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::application::{GetAudioQuery, ReleaseAudio};
use crate::infrastructure::http::dto::{ApiResponse, Empty, ReleaseAudioRequest};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 音频下载文件名
const AUDIO_FILE_NAME: &str = "chapter_audio.mp3";

pub async fn get_audio(
    State(state): State<Arc<AppState>>,
    Path(audio_id): Path<Uuid>,
) -> Result<Response, ApiError> {
    let result = state.get_audio_handler.handle(GetAudioQuery { audio_id })?;

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, result.content_type)
        .header(header::CONTENT_LENGTH, result.audio_data.len())
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", AUDIO_FILE_NAME),
        )
        .body(Body::from(result.audio_data))
        .map_err(|e| ApiError::Internal(format!("Failed to build audio response: {}", e)))
}

pub async fn release_audio(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ReleaseAudioRequest>,
) -> Result<Json<ApiResponse<Empty>>, ApiError> {
    state.release_audio_handler.handle(ReleaseAudio {
        audio_id: req.audio_id,
    })?;

    Ok(Json(ApiResponse::ok()))
}
