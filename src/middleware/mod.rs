/*
 * Responsibility
 * - middleware の公開インターフェース (re-export)
 * - auth: Bearer JWT フィルタ / http: request-id, trace, body limit, timeout
 */
pub mod auth;
pub mod http;
