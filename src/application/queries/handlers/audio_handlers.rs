//! Audio Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::AudioStorePort;
use crate::application::queries::audio_queries::*;

/// GetAudio Handler
pub struct GetAudioHandler {
    audio_store: Arc<dyn AudioStorePort>,
}

impl GetAudioHandler {
    pub fn new(audio_store: Arc<dyn AudioStorePort>) -> Self {
        Self { audio_store }
    }

    pub fn handle(&self, query: GetAudioQuery) -> Result<GetAudioResponse, ApplicationError> {
        let audio = self
            .audio_store
            .get(&query.audio_id)
            .ok_or_else(|| ApplicationError::not_found("Audio", query.audio_id))?;

        Ok(GetAudioResponse {
            audio_data: audio.audio_data,
            content_type: audio.content_type,
        })
    }
}
