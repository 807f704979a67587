/*
 * Responsibility
 * - tracing / panic hook の初期化
 * - Config読み込み → JwtVerifier 生成 → Router 組み立て
 * - Middleware の適用 (Bearer / request-id / trace など)
 * - axum::serve() で起動
 */
use std::{panic, process, time::Duration};

use anyhow::{Context, Result};
use axum::{Router, routing::get};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::api;
use crate::api::v1::handlers::health::health;
use crate::config::Config;
use crate::middleware;
use crate::services::auth::build_jwt_verifier;
use crate::state::AppState;

fn init_tracing() {
    // Prefer RUST_LOG if set; otherwise use a sensible default.
    // Ex:
    // RUST_LOG=info,jwt_gate=debug,tower_http=debug cargo run
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn init_panic_hook(abort_on_panic: bool) {
    // Keep the default hook as a fallback (prints to stderr with location/payload).
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        // Always surface panics via tracing so they don't get "lost".
        tracing::error!(?info, "panic");

        // In development, fail fast: crash the whole process so we notice immediately.
        if abort_on_panic {
            process::abort();
        } else {
            default_hook(info);
        }
    }))
}

pub async fn run() -> Result<()> {
    init_tracing();
    let config = Config::from_env().context("failed to load configuration")?;

    init_panic_hook(!config.app_env.is_production());

    let state = build_state(&config)?;

    tracing::info!(
        env = ?config.app_env,
        addr = %config.addr,
        issuer = %state.verifier.issuer(),
        missing_token_policy = ?state.missing_token_policy,
        "starting jwt gate"
    );

    let app = build_router(state, config.request_timeout);

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_state(config: &Config) -> Result<AppState> {
    // Verifier is built once here and shared read-only by every request.
    let verifier = build_jwt_verifier(config).context("invalid JWT verifier configuration")?;

    Ok(AppState::new(verifier, config.missing_token_policy))
}

/// `/health` stays outside the bearer filter, everything under `/api/v1` is behind it.
pub fn build_router(state: AppState, request_timeout: Duration) -> Router {
    let router = Router::new()
        .route("/health", get(health))
        .nest("/api/v1", api::v1::routes(state.clone()))
        .with_state(state);

    middleware::http::apply(router, request_timeout)
}
