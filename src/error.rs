/*
 * Responsibility
 * - アプリ共通の AppError 定義
 * - IntoResponse 実装 (HTTP status / JSON error body)
 * - 検証エラーは詳細をログにだけ残し、クライアントには一律 403 を返す
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::services::auth::VerifyError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("forbidden")]
    Forbidden,

    #[error("internal server error")]
    Internal,
}

#[derive(Debug, Serialize)]
struct ErrorResponseBody {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: &'static str,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::Forbidden => (StatusCode::FORBIDDEN, "FORBIDDEN"),
            AppError::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL"),
        };

        let body = ErrorResponseBody {
            error: ErrorBody {
                code,
                message: self.to_string(),
            },
        };

        (status, Json(body)).into_response()
    }
}

// どの検証で落ちたかはクライアントに伝えない
impl From<VerifyError> for AppError {
    fn from(_: VerifyError) -> Self {
        AppError::Forbidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn every_verify_error_becomes_the_same_denial() {
        let errors = [
            VerifyError::MalformedToken,
            VerifyError::SignatureInvalid,
            VerifyError::IssuerMismatch,
            VerifyError::Expired,
            VerifyError::NotYetValid,
        ];

        for err in errors {
            let response = AppError::from(err).into_response();
            assert_eq!(response.status(), StatusCode::FORBIDDEN);
            assert_eq!(
                body_json(response).await,
                serde_json::json!({ "error": { "code": "FORBIDDEN", "message": "forbidden" } })
            );
        }
    }

    #[tokio::test]
    async fn internal_maps_to_500() {
        let response = AppError::Internal.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
