//! HTTP Middleware
//!
//! 请求耗时与 HTTP 状态码错误日志

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::{Duration, Instant};

/// 超过该时长的请求记录为慢请求（章节处理通常需要数秒）
const SLOW_REQUEST_THRESHOLD: Duration = Duration::from_secs(30);

/// HTTP 状态码错误日志中间件
///
/// 状态码为 4xx/5xx 或请求过慢时记录日志。
/// 业务错误（errno != 0）在 `ApiError::into_response()` 中记录
pub async fn error_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = Instant::now();

    let response = next.run(request).await;
    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis() as u64;

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            uri = %uri,
            status = status.as_u16(),
            elapsed_ms,
            "HTTP server error"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            method = %method,
            uri = %uri,
            status = status.as_u16(),
            elapsed_ms,
            "HTTP client error"
        );
    } else if started.elapsed() > SLOW_REQUEST_THRESHOLD {
        tracing::warn!(method = %method, uri = %uri, elapsed_ms, "Slow HTTP request");
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request as HttpRequest, StatusCode},
        routing::get,
        Router,
    };
    use tower::util::ServiceExt;

    fn create_test_router() -> Router {
        Router::new()
            .route("/ok", get(|| async { "OK" }))
            .route("/payload-too-large", get(|| async { StatusCode::PAYLOAD_TOO_LARGE }))
            .route("/bad-gateway", get(|| async { StatusCode::BAD_GATEWAY }))
            .layer(axum::middleware::from_fn(error_logging_middleware))
    }

    async fn status_of(uri: &str) -> StatusCode {
        let request = HttpRequest::builder().uri(uri).body(Body::empty()).unwrap();
        create_test_router().oneshot(request).await.unwrap().status()
    }

    #[tokio::test]
    async fn test_passes_through_success() {
        assert_eq!(status_of("/ok").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_passes_through_client_error() {
        assert_eq!(status_of("/payload-too-large").await, StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_passes_through_server_error() {
        assert_eq!(status_of("/bad-gateway").await, StatusCode::BAD_GATEWAY);
    }
}
