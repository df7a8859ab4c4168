//! HTTP Text Segmenter - 章节分段服务客户端
//!
//! POST {url}
//! Request: {"prompt": "...", "bookName": "..."}
//! Response: {"response": "<segment>" | "False"}

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::service_client::{map_reqwest_error, RemoteServiceConfig, ServiceClient};
use crate::application::ports::{RemoteFailure, ServiceError, TextSegmenterPort};
use crate::domain::SegmentOutcome;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SegmentRequest<'a> {
    prompt: &'a str,
    book_name: &'a str,
}

#[derive(Debug, Deserialize)]
struct SegmentResponse {
    response: Option<String>,
}

pub struct HttpTextSegmenter {
    client: ServiceClient,
}

impl HttpTextSegmenter {
    pub fn new(config: RemoteServiceConfig) -> Result<Self, ServiceError> {
        let client = ServiceClient::new(config).map_err(ServiceError::Segmentation)?;
        Ok(Self { client })
    }
}

#[async_trait]
impl TextSegmenterPort for HttpTextSegmenter {
    async fn segment(&self, text: &str, book_title: &str) -> Result<SegmentOutcome, ServiceError> {
        tracing::debug!(
            url = %self.client.url(),
            text_len = text.len(),
            book = %book_title,
            "Sending segment request"
        );

        let request = SegmentRequest {
            prompt: text,
            book_name: book_title,
        };
        let response = self
            .client
            .post_json(&request)
            .await
            .map_err(ServiceError::Segmentation)?;

        let body: SegmentResponse = response
            .json()
            .await
            .map_err(|e| ServiceError::Segmentation(map_reqwest_error(e)))?;

        let outcome = body
            .response
            .as_deref()
            .and_then(SegmentOutcome::from_response)
            .ok_or_else(|| {
                ServiceError::Segmentation(RemoteFailure::InvalidResponse(
                    "Missing segment in response".to_string(),
                ))
            })?;

        tracing::info!(relevant = outcome.is_relevant(), "Segment received");
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::adapters::remote::service_client::test_server;
    use axum::{http::StatusCode, routing::post, Json, Router};
    use serde_json::{json, Value};

    async fn echo_segment(Json(body): Json<Value>) -> Json<Value> {
        let prompt = body["prompt"].as_str().unwrap_or_default();
        let book = body["bookName"].as_str().unwrap_or_default();
        if prompt.contains("copyright") {
            Json(json!({ "response": "False" }))
        } else {
            Json(json!({ "response": format!("{}|{}", book, prompt) }))
        }
    }

    async fn segmenter() -> HttpTextSegmenter {
        let base = test_server::spawn(Router::new().route("/segment", post(echo_segment))).await;
        HttpTextSegmenter::new(RemoteServiceConfig::new(format!("{}/segment", base))).unwrap()
    }

    #[tokio::test]
    async fn test_relevant_segment() {
        let outcome = segmenter().await.segment("a storm", "Dune").await.unwrap();
        assert_eq!(outcome, SegmentOutcome::Relevant("Dune|a storm".to_string()));
    }

    #[tokio::test]
    async fn test_not_part_of_plot() {
        let outcome = segmenter().await.segment("copyright 2020", "Dune").await.unwrap();
        assert_eq!(outcome, SegmentOutcome::NotPartOfPlot);
    }

    #[tokio::test]
    async fn test_error_status() {
        let router = Router::new().route(
            "/segment",
            post(|| async { (StatusCode::BAD_GATEWAY, "upstream down") }),
        );
        let base = test_server::spawn(router).await;
        let client =
            HttpTextSegmenter::new(RemoteServiceConfig::new(format!("{}/segment", base))).unwrap();

        let err = client.segment("text", "Dune").await.unwrap_err();
        match err {
            ServiceError::Segmentation(RemoteFailure::Status { status, message }) => {
                assert_eq!(status, 502);
                assert_eq!(message, "upstream down");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_response_is_invalid() {
        let router = Router::new().route(
            "/segment",
            post(|| async { Json(json!({ "response": "" })) }),
        );
        let base = test_server::spawn(router).await;
        let client =
            HttpTextSegmenter::new(RemoteServiceConfig::new(format!("{}/segment", base))).unwrap();

        let err = client.segment("text", "Dune").await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Segmentation(RemoteFailure::InvalidResponse(_))
        ));
    }
}
