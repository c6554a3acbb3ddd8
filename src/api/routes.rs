/*
 * Responsibility
 * - URL 構造を定義 (/ と /health の 2 本のみ)
 * - 未定義の path / method は AppError の JSON で返す
 */
use axum::{Router, http::Uri, routing::get};

use crate::api::handlers::{health::health, root::root};
use crate::error::AppError;

pub fn routes() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
}

async fn not_found(uri: Uri) -> AppError {
    tracing::debug!(path = %uri.path(), "no route");
    AppError::not_found(uri.path())
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode, header};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;

    async fn call(method: Method, path: &str) -> (StatusCode, Option<String>, Vec<u8>) {
        let req = Request::builder()
            .method(method)
            .uri(path)
            .body(Body::empty())
            .unwrap();
        let res = routes().oneshot(req).await.unwrap();

        let status = res.status();
        let content_type = res
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|v| v.to_str().unwrap().to_string());
        let bytes = res.into_body().collect().await.unwrap().to_bytes();
        (status, content_type, bytes.to_vec())
    }

    #[tokio::test]
    async fn root_returns_message() {
        let (status, content_type, body) = call(Method::GET, "/").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("application/json"));
        assert_eq!(
            body,
            br#"{"message":"UK Tax Calculator - Frontend Only Application"}"#
        );
    }

    #[tokio::test]
    async fn health_returns_status_and_note() {
        let (status, content_type, body) = call(Method::GET, "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("application/json"));
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            body,
            json!({"status": "healthy", "note": "All calculations run in frontend"})
        );
    }

    #[tokio::test]
    async fn repeated_calls_are_identical() {
        let first = call(Method::GET, "/health").await;
        let root = call(Method::GET, "/").await;
        let second = call(Method::GET, "/health").await;
        let root_again = call(Method::GET, "/").await;

        assert_eq!(first, second);
        assert_eq!(root, root_again);
    }

    #[tokio::test]
    async fn head_is_served_without_body() {
        let (status, _, body) = call(Method::HEAD, "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn unknown_path_is_not_found() {
        let (status, _, body) = call(Method::GET, "/nonexistent").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn post_to_root_is_method_not_allowed() {
        let (status, _, body) = call(Method::POST, "/").await;

        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["error"]["code"], "METHOD_NOT_ALLOWED");
        assert!(body.get("message").is_none());
    }

    #[tokio::test]
    async fn delete_on_health_is_rejected() {
        let (status, _, _) = call(Method::DELETE, "/health").await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }
}
