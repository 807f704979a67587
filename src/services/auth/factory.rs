//! Factory: build `JwtVerifier` from application `Config`.

use std::sync::Arc;

use crate::config::Config;
use crate::services::auth::{JwtVerifier, SetupError};

pub fn build_jwt_verifier(config: &Config) -> Result<Arc<JwtVerifier>, SetupError> {
    let verifier = JwtVerifier::new(&config.jwt_public_key, &config.jwt_issuer).map_err(|e| {
        tracing::error!(error = %e, "failed to build jwt verifier");
        e
    })?;

    Ok(Arc::new(verifier))
}
