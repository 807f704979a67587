//! Errors raised while building the verifier and while verifying a token.
//!
//! Callers get the detailed variant so it can be logged server-side.
//! The HTTP layer collapses every `VerifyError` into one generic denial.

use std::fmt;

use thiserror::Error;

/// Configuration errors. Fatal at startup: the verifier is never built.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("issuer cannot be empty")]
    EmptyIssuer,

    #[error("public key cannot be empty")]
    EmptyKey,

    #[error("key is not a valid RSA public key: {0}")]
    KeyDecode(String),
}

/// Which token segment failed base64url decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Payload,
    Signature,
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Payload => f.write_str("payload"),
            Segment::Signature => f.write_str("signature"),
        }
    }
}

/// Per-request verification errors. All of them are terminal for the request.
#[derive(Debug, Error)]
pub enum VerifyError {
    // Structural: the caller sent something we cannot parse.
    #[error("invalid jwt token")]
    MalformedToken,

    #[error("invalid base64url in {segment}: {source}")]
    InvalidEncoding {
        segment: Segment,
        #[source]
        source: base64::DecodeError,
    },

    #[error("invalid claims: {0}")]
    MalformedClaims(#[from] serde_json::Error),

    // Semantic: well-formed, but not trusted or not currently valid.
    #[error("invalid signature")]
    SignatureInvalid,

    #[error("invalid iss")]
    IssuerMismatch,

    #[error("invalid exp")]
    Expired,

    #[error("invalid nbf")]
    NotYetValid,
}

impl VerifyError {
    /// Stable label for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            VerifyError::MalformedToken => "malformed_token",
            VerifyError::InvalidEncoding { .. } => "invalid_encoding",
            VerifyError::MalformedClaims(_) => "malformed_claims",
            VerifyError::SignatureInvalid => "signature_invalid",
            VerifyError::IssuerMismatch => "issuer_mismatch",
            VerifyError::Expired => "expired",
            VerifyError::NotYetValid => "not_yet_valid",
        }
    }

    pub(crate) fn encoding(segment: Segment) -> impl FnOnce(base64::DecodeError) -> Self {
        move |source| VerifyError::InvalidEncoding { segment, source }
    }
}
