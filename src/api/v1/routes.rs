/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - v1 配下はすべて Bearer フィルタを通す
 */
use axum::{Router, routing::get};

use crate::api::v1::handlers::ping::ping;
use crate::middleware;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    let router = Router::new().route("/ping", get(ping));

    middleware::auth::bearer::apply(router, state)
}
