//! Audio Queries - 音频查询

use bytes::Bytes;
use uuid::Uuid;

/// 获取已生成的章节音频
#[derive(Debug, Clone)]
pub struct GetAudioQuery {
    pub audio_id: Uuid,
}

/// 音频数据响应
#[derive(Debug, Clone)]
pub struct GetAudioResponse {
    pub audio_data: Bytes,
    pub content_type: String,
}
