/*
 * Responsibility
 * - GET /health (疎通用)
 * - 依存サービスが無いので常に healthy
 */
use axum::{Json, http::StatusCode, response::IntoResponse};

use crate::api::dto::HealthResponse;

pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy",
            note: "All calculations run in frontend",
        }),
    )
}
