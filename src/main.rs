//! Visuai - EPUB 章节插图与朗读服务
//!
//! 启动流程：加载配置 → 初始化日志 → 组装适配器 → 启动回收 Worker → 启动 HTTP 服务

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use visuai::application::{ChapterPipeline, PipelineConfig};
use visuai::config::{load_config, print_config, AppConfig, ServiceEndpoint};
use visuai::infrastructure::adapters::{
    EpubLoader, EpubLoaderConfig, HttpAudioSynthesizer, HttpImageGenerator, HttpPromptGenerator,
    HttpTextSegmenter, RemoteServiceConfig,
};
use visuai::infrastructure::http::{AppState, HttpServer, HttpServerConfig};
use visuai::infrastructure::memory::{InMemoryAudioStore, InMemoryBookStore};
use visuai::infrastructure::worker::{ResourceSweeper, SweeperConfig};

fn remote(endpoint: &ServiceEndpoint) -> RemoteServiceConfig {
    RemoteServiceConfig::new(&endpoint.url).with_timeout(endpoint.timeout_secs)
}

fn init_tracing(config: &AppConfig) {
    let log_filter = format!(
        "{},visuai={},tower_http=debug",
        config.log.level, config.log.level
    );
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if config.log.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config);

    tracing::info!("Visuai - EPUB 章节插图与朗读服务");
    print_config(&config);

    // 远程服务客户端
    let segmenter = Arc::new(HttpTextSegmenter::new(remote(&config.services.segment))?);
    let prompt_generator = Arc::new(HttpPromptGenerator::new(remote(&config.services.prompt))?);
    let image_generator = Arc::new(HttpImageGenerator::new(remote(&config.services.image))?);
    let audio_synthesizer = Arc::new(HttpAudioSynthesizer::new(remote(&config.services.audio))?);

    // 内存存储
    let book_store = Arc::new(InMemoryBookStore::new());
    let audio_store = Arc::new(InMemoryAudioStore::new());

    // EPUB 解析器
    let loader = Arc::new(EpubLoader::new(EpubLoaderConfig {
        max_chapter_chars: config.pipeline.max_chapter_chars,
        placeholder_cover_url: config.assets.placeholder_cover_url.clone(),
    }));

    // 章节流水线
    let pipeline = Arc::new(ChapterPipeline::new(
        segmenter,
        prompt_generator,
        image_generator,
        audio_synthesizer,
        audio_store.clone(),
        PipelineConfig {
            skip_notice: config.assets.skip_notice.clone(),
            skip_image_url: config.assets.skip_image_url.clone(),
            slow_call_threshold: Duration::from_secs(config.pipeline.slow_call_threshold_secs),
        },
    ));

    // 启动资源回收 Worker
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let sweeper_handle = if config.gc.enabled {
        let sweeper = ResourceSweeper::new(
            SweeperConfig::from(&config.gc),
            book_store.clone(),
            audio_store.clone(),
        );
        Some(tokio::spawn(sweeper.run(shutdown_rx)))
    } else {
        tracing::info!("Resource sweeper disabled");
        None
    };

    let state = Arc::new(AppState::new(loader, book_store, audio_store, pipeline));
    let server = HttpServer::new(HttpServerConfig::from(&config.server), state);

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                // 无法监听信号时保持运行
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    let _ = shutdown_tx.send(true);
    if let Some(handle) = sweeper_handle {
        let _ = handle.await;
    }

    tracing::info!("Server shutdown complete");

    Ok(())
}
