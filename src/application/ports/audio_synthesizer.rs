//! Audio Synthesizer Port - 章节朗读音频合成

use async_trait::async_trait;

use super::ServiceError;

/// 合成得到的音频
#[derive(Debug, Clone)]
pub struct SynthesizedAudio {
    /// 原始音频数据
    pub audio_data: Vec<u8>,
    /// 服务返回的 Content-Type
    pub content_type: String,
}

#[async_trait]
pub trait AudioSynthesizerPort: Send + Sync {
    async fn synthesize(&self, text: &str) -> Result<SynthesizedAudio, ServiceError>;
}
