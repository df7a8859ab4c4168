//! HTTP Audio Synthesizer - 朗读音频合成服务客户端
//!
//! POST {url}
//! Request: {"text": "..."}  (JSON)
//! Response: 音频二进制，类型见 Content-Type

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;

use super::service_client::{RemoteServiceConfig, ServiceClient};
use crate::application::ports::{
    AudioSynthesizerPort, RemoteFailure, ServiceError, SynthesizedAudio,
};

/// 服务未返回 Content-Type 时的默认值
const DEFAULT_AUDIO_CONTENT_TYPE: &str = "audio/mpeg";

#[derive(Debug, Serialize)]
struct AudioRequest<'a> {
    text: &'a str,
}

pub struct HttpAudioSynthesizer {
    client: ServiceClient,
}

impl HttpAudioSynthesizer {
    pub fn new(config: RemoteServiceConfig) -> Result<Self, ServiceError> {
        let client = ServiceClient::new(config).map_err(ServiceError::AudioGeneration)?;
        Ok(Self { client })
    }
}

#[async_trait]
impl AudioSynthesizerPort for HttpAudioSynthesizer {
    async fn synthesize(&self, text: &str) -> Result<SynthesizedAudio, ServiceError> {
        tracing::debug!(
            url = %self.client.url(),
            text_len = text.len(),
            "Sending audio request"
        );

        let response = self
            .client
            .post_json(&AudioRequest { text })
            .await
            .map_err(ServiceError::AudioGeneration)?;

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_AUDIO_CONTENT_TYPE)
            .to_string();

        let audio_data = response
            .bytes()
            .await
            .map_err(|e| {
                ServiceError::AudioGeneration(RemoteFailure::InvalidResponse(format!(
                    "Failed to read audio: {}",
                    e
                )))
            })?
            .to_vec();

        if audio_data.is_empty() {
            return Err(ServiceError::AudioGeneration(RemoteFailure::InvalidResponse(
                "Empty audio payload".to_string(),
            )));
        }

        tracing::info!(
            audio_size = audio_data.len(),
            content_type = %content_type,
            "Audio synthesis completed"
        );

        Ok(SynthesizedAudio {
            audio_data,
            content_type,
        })
    }
}
