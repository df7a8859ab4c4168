//! HTTP Server
//!
//! Axum HTTP 服务器启动和配置

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::Router;
use http::header::CONTENT_TYPE;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use super::middleware::error_logging_middleware;
use super::routes::create_routes;
use super::state::AppState;

/// HTTP 服务器配置
#[derive(Debug, Clone)]
pub struct HttpServerConfig {
    pub host: String,
    pub port: u16,
    /// 请求体大小上限（用于 EPUB 上传）
    pub max_body_bytes: usize,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5060,
            max_body_bytes: 50 * 1024 * 1024,
        }
    }
}

impl HttpServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl From<&crate::config::ServerConfig> for HttpServerConfig {
    fn from(config: &crate::config::ServerConfig) -> Self {
        Self {
            host: config.host.clone(),
            port: config.port,
            max_body_bytes: config.max_upload_bytes,
        }
    }
}

/// 构建带全部中间件的 Router
pub fn build_router(state: Arc<AppState>, max_body_bytes: usize) -> Router {
    // CORS 配置 - 允许所有来源的跨域请求
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers([CONTENT_TYPE])
        .expose_headers(Any)
        .max_age(std::time::Duration::from_secs(3600));

    create_routes()
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(middleware::from_fn(error_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// HTTP 服务器
pub struct HttpServer {
    config: HttpServerConfig,
    state: Arc<AppState>,
}

impl HttpServer {
    pub fn new(config: HttpServerConfig, state: Arc<AppState>) -> Self {
        Self { config, state }
    }

    /// 启动服务器（带优雅关闭）
    pub async fn run_with_shutdown<F>(self, shutdown_signal: F) -> Result<(), std::io::Error>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let router = build_router(self.state, self.config.max_body_bytes);
        let addr = self.config.addr();

        info!("Starting HTTP server on {} (with graceful shutdown)", addr);

        let listener = TcpListener::bind(&addr).await?;
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    use crate::application::{
        AudioSynthesizerPort, ChapterPipeline, ImageGeneratorPort, PipelineConfig, PromptGeneratorPort,
        ServiceError, SynthesizedAudio, TextSegmenterPort,
    };
    use crate::domain::SegmentOutcome;
    use crate::infrastructure::adapters::epub::fixtures::sample_epub;
    use crate::infrastructure::adapters::EpubLoader;
    use crate::infrastructure::memory::{InMemoryAudioStore, InMemoryBookStore};

    struct KeywordSegmenter;

    #[async_trait]
    impl TextSegmenterPort for KeywordSegmenter {
        async fn segment(&self, text: &str, _book_title: &str) -> Result<SegmentOutcome, ServiceError> {
            if text.contains("rights reserved") {
                Ok(SegmentOutcome::NotPartOfPlot)
            } else {
                Ok(SegmentOutcome::Relevant("The harbour was quiet".to_string()))
            }
        }
    }

    struct EchoPrompt;

    #[async_trait]
    impl PromptGeneratorPort for EchoPrompt {
        async fn generate(&self, segment: &str, book_title: &str) -> Result<String, ServiceError> {
            Ok(format!("{} ({})", segment, book_title))
        }
    }

    struct FixedImage;

    #[async_trait]
    impl ImageGeneratorPort for FixedImage {
        async fn generate(&self, _prompt: &str, _book_title: &str) -> Result<String, ServiceError> {
            Ok("https://images.test/harbour.png".to_string())
        }
    }

    struct TextAudio;

    #[async_trait]
    impl AudioSynthesizerPort for TextAudio {
        async fn synthesize(&self, text: &str) -> Result<SynthesizedAudio, ServiceError> {
            Ok(SynthesizedAudio {
                audio_data: text.as_bytes().to_vec(),
                content_type: "audio/mpeg".to_string(),
            })
        }
    }

    fn test_router() -> Router {
        let book_store = Arc::new(InMemoryBookStore::new());
        let audio_store = Arc::new(InMemoryAudioStore::new());
        let pipeline = Arc::new(ChapterPipeline::new(
            Arc::new(KeywordSegmenter),
            Arc::new(EchoPrompt),
            Arc::new(FixedImage),
            Arc::new(TextAudio),
            audio_store.clone(),
            PipelineConfig::default(),
        ));
        let state = AppState::new(
            Arc::new(EpubLoader::default()),
            book_store,
            audio_store,
            pipeline,
        );
        build_router(Arc::new(state), 1024 * 1024)
    }

    fn multipart_request(file_name: &str, data: &[u8]) -> Request<Body> {
        let boundary = "visuai-test-boundary";
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{boundary}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

        Request::builder()
            .method("POST")
            .uri("/api/book/upload")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    fn json_request(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn send(router: &Router, request: Request<Body>) -> Value {
        let response = router.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn upload(router: &Router) -> String {
        let body = send(router, multipart_request("voyage.epub", &sample_epub(false))).await;
        assert_eq!(body["errno"], 0, "upload failed: {body}");
        body["data"]["id"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_ping() {
        let router = test_router();
        let request = Request::builder().uri("/api/ping").body(Body::empty()).unwrap();
        let body = send(&router, request).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["loaded_books"], 0);
    }

    #[tokio::test]
    async fn test_upload_returns_summary() {
        let router = test_router();
        let body = send(&router, multipart_request("voyage.epub", &sample_epub(false))).await;

        let data = &body["data"];
        assert_eq!(data["title"], "The Test Voyage");
        assert_eq!(data["metadata"]["creator"], "Jane Doe");
        assert_eq!(data["cover_is_placeholder"], true);
        let values: Vec<&str> = data["chapters"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["value"].as_str().unwrap())
            .collect();
        assert_eq!(values, vec!["0", "1", "1.0", "1.1"]);
    }

    #[tokio::test]
    async fn test_upload_rejects_non_epub() {
        let router = test_router();
        let body = send(&router, multipart_request("notes.txt", b"hello")).await;
        assert_eq!(body["errno"], 400);
    }

    #[tokio::test]
    async fn test_upload_rejects_corrupt_epub() {
        let router = test_router();
        let body = send(&router, multipart_request("broken.epub", b"not a zip")).await;
        assert_eq!(body["errno"], 422);
    }

    #[tokio::test]
    async fn test_process_chapter_and_fetch_audio() {
        let router = test_router();
        let book_id = upload(&router).await;

        let body = send(
            &router,
            json_request(
                "/api/chapter/process",
                json!({ "book_id": book_id, "chapter_index": 1, "subitem_index": 0 }),
            ),
        )
        .await;
        let data = &body["data"];
        assert_eq!(data["skipped"], false);
        assert_eq!(data["display_prompt"], "The harbour was quiet");
        assert_eq!(data["image_url"], "https://images.test/harbour.png");

        let audio_url = data["audio_url"].as_str().unwrap().to_string();
        let audio_id = data["audio_id"].as_str().unwrap().to_string();

        let response = router
            .clone()
            .oneshot(Request::builder().uri(&audio_url).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"chapter_audio.mp3\""
        );
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(String::from_utf8_lossy(&bytes).contains("harbour"));

        let released = send(
            &router,
            json_request("/api/audio/release", json!({ "audio_id": audio_id })),
        )
        .await;
        assert_eq!(released["errno"], 0);

        let again = send(
            &router,
            json_request("/api/audio/release", json!({ "audio_id": audio_id })),
        )
        .await;
        assert_eq!(again["errno"], 404);
    }

    #[tokio::test]
    async fn test_process_non_story_chapter_is_skipped() {
        let router = test_router();
        let book_id = upload(&router).await;

        let body = send(
            &router,
            json_request(
                "/api/chapter/process",
                json!({ "book_id": book_id, "chapter_index": 0, "subitem_index": 0 }),
            ),
        )
        .await;
        let data = &body["data"];
        assert_eq!(data["skipped"], true);
        assert_eq!(data["audio_url"], Value::Null);
        assert_eq!(data["image_url"], PipelineConfig::default().skip_image_url);
    }

    #[tokio::test]
    async fn test_next_chapter_walks_to_end() {
        let router = test_router();
        let book_id = upload(&router).await;

        let body = send(
            &router,
            json_request(
                "/api/chapter/next",
                json!({ "book_id": book_id, "chapter_index": 1, "subitem_index": 0 }),
            ),
        )
        .await;
        assert_eq!(body["data"]["end_of_book"], false);
        assert_eq!(body["data"]["next"]["label"], "Chapter 2");
        assert_eq!(body["data"]["next"]["subitem_index"], 1);

        let end = send(
            &router,
            json_request(
                "/api/chapter/next",
                json!({ "book_id": book_id, "chapter_index": 1, "subitem_index": 1 }),
            ),
        )
        .await;
        assert_eq!(end["data"]["end_of_book"], true);
    }

    #[tokio::test]
    async fn test_invalid_position_and_unknown_book() {
        let router = test_router();
        let book_id = upload(&router).await;

        let invalid = send(
            &router,
            json_request(
                "/api/chapter/process",
                json!({ "book_id": book_id, "chapter_index": 7, "subitem_index": 0 }),
            ),
        )
        .await;
        assert_eq!(invalid["errno"], 400);

        let unknown = send(
            &router,
            json_request(
                "/api/book/get",
                json!({ "book_id": uuid::Uuid::new_v4() }),
            ),
        )
        .await;
        assert_eq!(unknown["errno"], 404);
    }

    #[tokio::test]
    async fn test_close_book() {
        let router = test_router();
        let book_id = upload(&router).await;

        let closed = send(&router, json_request("/api/book/close", json!({ "book_id": book_id }))).await;
        assert_eq!(closed["errno"], 0);

        let gone = send(&router, json_request("/api/book/get", json!({ "book_id": book_id }))).await;
        assert_eq!(gone["errno"], 404);
    }
}
