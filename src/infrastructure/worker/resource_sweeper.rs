//! Resource Sweeper - 闲置资源回收

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

use crate::application::ports::{AudioStorePort, BookStorePort};

/// Sweeper 配置
#[derive(Debug, Clone)]
pub struct SweeperConfig {
    /// 回收间隔
    pub interval: Duration,
    /// 书籍闲置超过该秒数即移除
    pub book_idle_secs: u64,
    /// 音频闲置超过该秒数即释放
    pub audio_idle_secs: u64,
}

impl Default for SweeperConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(600),
            book_idle_secs: 7200,
            audio_idle_secs: 3600,
        }
    }
}

impl From<&crate::config::GcConfig> for SweeperConfig {
    fn from(gc: &crate::config::GcConfig) -> Self {
        Self {
            interval: Duration::from_secs(gc.interval_secs),
            book_idle_secs: gc.book_idle_secs,
            audio_idle_secs: gc.audio_idle_secs,
        }
    }
}

/// 单次回收结果
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepReport {
    pub books_evicted: usize,
    pub audio_released: usize,
}

/// 资源回收 Worker
pub struct ResourceSweeper {
    config: SweeperConfig,
    book_store: Arc<dyn BookStorePort>,
    audio_store: Arc<dyn AudioStorePort>,
}

impl ResourceSweeper {
    pub fn new(
        config: SweeperConfig,
        book_store: Arc<dyn BookStorePort>,
        audio_store: Arc<dyn AudioStorePort>,
    ) -> Self {
        Self {
            config,
            book_store,
            audio_store,
        }
    }

    /// 执行一次回收
    pub fn sweep(&self) -> SweepReport {
        let report = SweepReport {
            books_evicted: self.book_store.evict_idle(self.config.book_idle_secs),
            audio_released: self.audio_store.expire_idle(self.config.audio_idle_secs),
        };

        if report.books_evicted > 0 || report.audio_released > 0 {
            tracing::info!(
                books_evicted = report.books_evicted,
                audio_released = report.audio_released,
                books_remaining = self.book_store.len(),
                audio_remaining = self.audio_store.len(),
                "Idle resources swept"
            );
        } else {
            tracing::debug!("Sweep found no idle resources");
        }

        report
    }

    /// 启动 Worker，直到收到关闭信号
    pub async fn run(self, mut shutdown: watch::Receiver<bool>) {
        tracing::info!(
            interval_secs = self.config.interval.as_secs(),
            book_idle_secs = self.config.book_idle_secs,
            audio_idle_secs = self.config.audio_idle_secs,
            "ResourceSweeper started"
        );

        let mut ticker = tokio::time::interval(self.config.interval);
        // 第一次 tick 立即完成，跳过
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.sweep();
                }
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
            }
        }

        tracing::info!("ResourceSweeper stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::SynthesizedAudio;
    use crate::infrastructure::memory::{InMemoryAudioStore, InMemoryBookStore};

    fn sweeper(book_idle_secs: u64, audio_idle_secs: u64) -> (ResourceSweeper, Arc<InMemoryAudioStore>) {
        let audio_store = Arc::new(InMemoryAudioStore::new());
        let sweeper = ResourceSweeper::new(
            SweeperConfig {
                interval: Duration::from_millis(10),
                book_idle_secs,
                audio_idle_secs,
            },
            Arc::new(InMemoryBookStore::new()),
            audio_store.clone(),
        );
        (sweeper, audio_store)
    }

    fn clip() -> SynthesizedAudio {
        SynthesizedAudio {
            audio_data: vec![1, 2, 3],
            content_type: "audio/mpeg".to_string(),
        }
    }

    #[test]
    fn test_sweep_keeps_fresh_audio() {
        let (sweeper, audio_store) = sweeper(3600, 3600);
        audio_store.put(clip());

        assert_eq!(sweeper.sweep(), SweepReport::default());
        assert_eq!(audio_store.len(), 1);
    }

    #[test]
    fn test_sweep_releases_idle_audio() {
        let (sweeper, audio_store) = sweeper(0, 0);
        audio_store.put(clip());
        std::thread::sleep(Duration::from_millis(20));

        let report = sweeper.sweep();
        assert_eq!(report.audio_released, 1);
        assert!(audio_store.is_empty());
    }

    #[tokio::test]
    async fn test_run_stops_on_shutdown() {
        let (sweeper, _) = sweeper(3600, 3600);
        let (tx, rx) = watch::channel(false);

        let handle = tokio::spawn(sweeper.run(rx));
        tx.send(true).unwrap();

        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("sweeper did not stop")
            .unwrap();
    }
}
