//! In-Memory Audio Store Implementation
//!
//! 替代浏览器 object URL：音频按句柄存储，由调用方释放

use bytes::Bytes;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use uuid::Uuid;

use crate::application::ports::{AudioStorePort, StoredAudio, SynthesizedAudio};
use crate::domain::AudioHandle;

struct AudioEntry {
    audio: StoredAudio,
    last_accessed: DateTime<Utc>,
}

/// 内存音频存储
pub struct InMemoryAudioStore {
    clips: DashMap<Uuid, AudioEntry>,
}

impl InMemoryAudioStore {
    pub fn new() -> Self {
        Self {
            clips: DashMap::new(),
        }
    }

    /// 当前存储的音频总字节数
    pub fn total_bytes(&self) -> usize {
        self.clips
            .iter()
            .map(|entry| entry.audio.audio_data.len())
            .sum()
    }
}

impl Default for InMemoryAudioStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioStorePort for InMemoryAudioStore {
    fn put(&self, audio: SynthesizedAudio) -> AudioHandle {
        let handle = AudioHandle {
            id: Uuid::new_v4(),
            content_type: audio.content_type.clone(),
            size_bytes: audio.audio_data.len(),
        };
        self.clips.insert(
            handle.id,
            AudioEntry {
                audio: StoredAudio {
                    audio_data: Bytes::from(audio.audio_data),
                    content_type: audio.content_type,
                },
                last_accessed: Utc::now(),
            },
        );
        handle
    }

    fn get(&self, id: &Uuid) -> Option<StoredAudio> {
        self.clips.get_mut(id).map(|mut entry| {
            entry.last_accessed = Utc::now();
            entry.audio.clone()
        })
    }

    fn release(&self, id: &Uuid) -> bool {
        self.clips.remove(id).is_some()
    }

    fn expire_idle(&self, idle_secs: u64) -> usize {
        // 超出 chrono 表示范围的闲置时间视为永不过期
        let Some(timeout) = i64::try_from(idle_secs)
            .ok()
            .and_then(chrono::Duration::try_seconds)
        else {
            return 0;
        };
        let now = Utc::now();
        let before = self.clips.len();

        self.clips.retain(|_, entry| now - entry.last_accessed <= timeout);

        let expired = before.saturating_sub(self.clips.len());
        if expired > 0 {
            tracing::info!(expired = expired, "Expired idle audio");
        }
        expired
    }

    fn len(&self) -> usize {
        self.clips.len()
    }
}
