/*
 * Responsibility
 * - GET /health (疎通用)
 * - Bearer フィルタの外側に置く (トークン無しで叩ける)
 */
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}
