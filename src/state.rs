/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - ex: verifier: JwtVerifier, clock: Clock, 匿名アクセス方針
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
use std::sync::Arc;

use crate::middleware::auth::MissingTokenPolicy;
use crate::services::{
    auth::JwtVerifier,
    clock::{Clock, SystemClock},
};

#[derive(Clone, Debug)]
pub struct AppState {
    pub verifier: Arc<JwtVerifier>,
    pub clock: Arc<dyn Clock>,
    pub missing_token_policy: MissingTokenPolicy,
}

impl AppState {
    pub fn new(verifier: Arc<JwtVerifier>, missing_token_policy: MissingTokenPolicy) -> Self {
        Self {
            verifier,
            clock: Arc::new(SystemClock),
            missing_token_policy,
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }
}
