//! Bearer token filter: Authorization ヘッダ抽出 → RS512 JWT 検証 → 通過 or 403
//!
//! - ヘッダが無いリクエストの扱いは `MissingTokenPolicy` で決める (既定は通過)
//! - 失敗理由はサーバ側のログにのみ残し、クライアントには一律 403 を返す
//! - 成功時もリクエストには手を加えずに次へ渡す

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{HeaderValue, Request, header},
    middleware::{self, Next},
    response::Response,
};

use crate::error::AppError;
use crate::services::auth::{Claims, VerifyError};
use crate::state::AppState;

/// What to do with a request that carries no `Authorization` header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingTokenPolicy {
    /// Forward it without any verification (optional auth).
    #[default]
    Allow,
    /// Reject it like any other failed verification.
    Deny,
}

/// Router に Bearer フィルタを掛ける。
///
/// 例：
/// ```ignore
/// let v1 = middleware::auth::bearer::apply(api_v1_router, state.clone());
/// app = app.nest("/api/v1", v1);
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // axum 0.8 の from_fn は State extractor を受け取れないため、`from_fn_with_state` で明示的に state を渡す
    router.layer(middleware::from_fn_with_state(state, bearer_middleware))
}

async fn bearer_middleware(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    // 空のヘッダ値はヘッダ無しと同じ扱い
    let outcome = req
        .headers()
        .get(header::AUTHORIZATION)
        .filter(|value| !value.is_empty())
        .map(|value| verify_header(&state, value));

    match outcome {
        None => match state.missing_token_policy {
            MissingTokenPolicy::Allow => {
                tracing::debug!("no bearer token, passing through");
                Ok(next.run(req).await)
            }
            MissingTokenPolicy::Deny => {
                tracing::warn!("request without bearer token denied");
                Err(AppError::Forbidden)
            }
        },
        Some(Ok(claims)) => {
            tracing::debug!(
                iss = %claims.issuer,
                exp = claims.expires_at,
                "bearer token accepted"
            );
            Ok(next.run(req).await)
        }
        Some(Err(err)) => {
            tracing::warn!(
                error = %err,
                kind = err.kind(),
                "bearer token verification failed"
            );
            Err(err.into())
        }
    }
}

fn verify_header(state: &AppState, value: &HeaderValue) -> Result<Claims, VerifyError> {
    // 可視 ASCII 以外を含む値は compact JWT になり得ない
    let raw = value.to_str().map_err(|_| VerifyError::MalformedToken)?;
    state.verifier.verify(raw, state.clock.now())
}
