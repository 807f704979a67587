//! RS512 bearer-token filter for axum.
//!
//! A request carrying `Authorization: Bearer <jwt>` is forwarded only if the
//! token is a compact JWT signed with the configured RSA key (RS512), carries
//! the expected `iss`, and is inside its `nbf`/`exp` window. Every failure is
//! answered with the same 403. Requests without the header are governed by
//! [`middleware::auth::MissingTokenPolicy`].
//!
//! The verification pipeline lives in [`services::auth`] and does not depend
//! on axum:
//!
//! ```ignore
//! let verifier = JwtVerifier::new(public_key_body, "https://issuer.example")?;
//! let claims = verifier.verify(authorization_header, now)?;
//! ```

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod services;
pub mod state;

#[cfg(test)]
mod testutil;
