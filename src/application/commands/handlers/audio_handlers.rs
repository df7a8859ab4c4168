//! Audio Command Handlers

use std::sync::Arc;

use crate::application::commands::audio_commands::*;
use crate::application::error::ApplicationError;
use crate::application::ports::AudioStorePort;

/// ReleaseAudio Handler - 调用方不再展示音频时释放
pub struct ReleaseAudioHandler {
    audio_store: Arc<dyn AudioStorePort>,
}

impl ReleaseAudioHandler {
    pub fn new(audio_store: Arc<dyn AudioStorePort>) -> Self {
        Self { audio_store }
    }

    pub fn handle(&self, cmd: ReleaseAudio) -> Result<(), ApplicationError> {
        if !self.audio_store.release(&cmd.audio_id) {
            return Err(ApplicationError::not_found("Audio", cmd.audio_id));
        }
        tracing::debug!(audio_id = %cmd.audio_id, "Audio released");
        Ok(())
    }
}
