/*
 * Responsibility
 * - GET /api/v1/ping
 * - Bearer フィルタの内側。届いた時点でフィルタを通過済み
 */
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

pub async fn ping() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"message": "pong"})))
}
