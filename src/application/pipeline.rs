//! Chapter Pipeline - 单章处理编排
//!
//! 渲染章节文本后分两路并发执行:
//! - 音频分支: 朗读合成
//! - 图片链: 分段判定 → 提示词生成 → 图片生成
//!
//! 两路都结束后才合并结果。音频失败不影响结果；合成的音频只在
//! 返回完整结果时写入存储，跳过、失败或请求被取消时直接丢弃。

use futures_util::future::join;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::application::error::ApplicationError;
use crate::application::ports::{
    AudioStorePort, AudioSynthesizerPort, BookDocumentPort, ImageGeneratorPort,
    PromptGeneratorPort, ServiceError, SynthesizedAudio, TextSegmenterPort,
};
use crate::domain::book::ChapterEntry;
use crate::domain::{AudioHandle, GenerationOutcome, GenerationResult, SegmentOutcome};

/// 流水线配置
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// 非正文章节的提示文本
    pub skip_notice: String,
    /// 非正文章节的占位图
    pub skip_image_url: String,
    /// 超过该时长记录慢调用警告
    pub slow_call_threshold: Duration,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            skip_notice: "This chapter is not part of the plot, please click next chapter."
                .to_string(),
            skip_image_url: "https://cdn2.iconfinder.com/data/icons/picons-basic-2/57/basic2-085_warning_attention-512.png"
                .to_string(),
            slow_call_threshold: Duration::from_secs(15),
        }
    }
}

/// 图片链结果
#[derive(Debug)]
enum ImageChainOutcome {
    Illustrated { segment: String, image_url: String },
    NotPartOfPlot,
}

/// 章节处理流水线
pub struct ChapterPipeline {
    segmenter: Arc<dyn TextSegmenterPort>,
    prompt_generator: Arc<dyn PromptGeneratorPort>,
    image_generator: Arc<dyn ImageGeneratorPort>,
    audio_synthesizer: Arc<dyn AudioSynthesizerPort>,
    audio_store: Arc<dyn AudioStorePort>,
    config: PipelineConfig,
}

impl ChapterPipeline {
    pub fn new(
        segmenter: Arc<dyn TextSegmenterPort>,
        prompt_generator: Arc<dyn PromptGeneratorPort>,
        image_generator: Arc<dyn ImageGeneratorPort>,
        audio_synthesizer: Arc<dyn AudioSynthesizerPort>,
        audio_store: Arc<dyn AudioStorePort>,
        config: PipelineConfig,
    ) -> Self {
        Self {
            segmenter,
            prompt_generator,
            image_generator,
            audio_synthesizer,
            audio_store,
            config,
        }
    }

    /// 处理单个章节
    pub async fn process(
        &self,
        chapter: &ChapterEntry,
        document: &dyn BookDocumentPort,
        book_title: &str,
    ) -> Result<GenerationResult, ApplicationError> {
        if chapter.href.trim().is_empty() {
            return Err(ApplicationError::invalid_input("Chapter has no href"));
        }
        if book_title.trim().is_empty() {
            return Err(ApplicationError::invalid_input("Book title is empty"));
        }

        let started = Instant::now();

        // Step 1: 渲染失败直接终止，不发起任何远程调用
        let text = document.render_chapter_text(&chapter.href)?;

        tracing::info!(
            book = %book_title,
            chapter = %chapter.label,
            text_chars = text.char_count(),
            "Processing chapter"
        );

        // Step 2-3: 音频分支与图片链并发，等待两者都结束
        let (audio, image_chain) = join(
            self.synthesize_audio(text.as_str()),
            self.run_image_chain(text.as_str(), book_title),
        )
        .await;

        let elapsed = started.elapsed();
        if elapsed > self.config.slow_call_threshold {
            tracing::warn!(
                chapter = %chapter.label,
                elapsed_ms = elapsed.as_millis() as u64,
                "Chapter processing is taking longer than expected"
            );
        }

        match image_chain {
            Ok(ImageChainOutcome::Illustrated { segment, image_url }) => {
                let audio = audio.map(|audio| self.store_audio(audio));
                tracing::info!(
                    chapter = %chapter.label,
                    has_audio = audio.is_some(),
                    elapsed_ms = elapsed.as_millis() as u64,
                    "Chapter processed"
                );
                Ok(GenerationResult {
                    display_prompt: segment,
                    image_url,
                    audio,
                    outcome: GenerationOutcome::Full,
                })
            }
            Ok(ImageChainOutcome::NotPartOfPlot) => {
                tracing::info!(chapter = %chapter.label, "Chapter is not part of the plot");
                Ok(GenerationResult {
                    display_prompt: self.config.skip_notice.clone(),
                    image_url: self.config.skip_image_url.clone(),
                    audio: None,
                    outcome: GenerationOutcome::Skipped,
                })
            }
            Err(e) => {
                tracing::error!(chapter = %chapter.label, error = %e, "Image chain failed");
                Err(e.into())
            }
        }
    }

    /// 音频分支，失败时返回 None
    async fn synthesize_audio(&self, text: &str) -> Option<SynthesizedAudio> {
        match self.audio_synthesizer.synthesize(text).await {
            Ok(audio) => Some(audio),
            Err(e) => {
                tracing::warn!(error = %e, "Audio synthesis failed, continuing without audio");
                None
            }
        }
    }

    /// 图片链: 分段判定 → 提示词 → 图片
    async fn run_image_chain(
        &self,
        text: &str,
        book_title: &str,
    ) -> Result<ImageChainOutcome, ServiceError> {
        let segment = match self.segmenter.segment(text, book_title).await? {
            SegmentOutcome::NotPartOfPlot => return Ok(ImageChainOutcome::NotPartOfPlot),
            SegmentOutcome::Relevant(segment) => segment,
        };

        let prompt = self.prompt_generator.generate(&segment, book_title).await?;
        let image_url = self.image_generator.generate(&prompt, book_title).await?;

        Ok(ImageChainOutcome::Illustrated { segment, image_url })
    }

    fn store_audio(&self, audio: SynthesizedAudio) -> AudioHandle {
        let handle = self.audio_store.put(audio);
        tracing::debug!(
            audio_id = %handle.id,
            size_bytes = handle.size_bytes,
            "Chapter audio stored"
        );
        handle
    }
}
