//! Audio Store Port - 合成音频的内存存储
//!
//! 句柄由调用方持有并负责释放

use bytes::Bytes;
use uuid::Uuid;

use super::SynthesizedAudio;
use crate::domain::AudioHandle;

/// 已存储音频
#[derive(Debug, Clone)]
pub struct StoredAudio {
    pub audio_data: Bytes,
    pub content_type: String,
}

pub trait AudioStorePort: Send + Sync {
    fn put(&self, audio: SynthesizedAudio) -> AudioHandle;

    fn get(&self, id: &Uuid) -> Option<StoredAudio>;

    /// 释放音频，返回是否存在
    fn release(&self, id: &Uuid) -> bool;

    /// 释放空闲超过 `idle_secs` 的音频，返回释放数量
    fn expire_idle(&self, idle_secs: u64) -> usize;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
