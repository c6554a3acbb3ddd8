/*
 * Responsibility
 * - "/" と "/health" の response DTO
 * - フィールド順 = JSON のキー順
 */
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub note: &'static str,
}
