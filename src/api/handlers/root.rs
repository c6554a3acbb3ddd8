/*
 * Responsibility
 * - GET / (アプリ名の表示のみ)
 * - 計算はすべて frontend 側で行うので入力は受け取らない
 */
use axum::{Json, http::StatusCode, response::IntoResponse};

use crate::api::dto::RootResponse;

pub const ROOT_MESSAGE: &str = "UK Tax Calculator - Frontend Only Application";

pub async fn root() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(RootResponse {
            message: ROOT_MESSAGE,
        }),
    )
}
