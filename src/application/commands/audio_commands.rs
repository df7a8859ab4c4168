//! Audio Commands

use uuid::Uuid;

/// 释放章节音频
#[derive(Debug, Clone)]
pub struct ReleaseAudio {
    pub audio_id: Uuid,
}
