use std::fmt;

use rsa::RsaPublicKey;

use crate::services::auth::claims::{Claims, verify_claims};
use crate::services::auth::error::{SetupError, VerifyError};
use crate::services::auth::public_key::parse_public_key;
use crate::services::auth::signature::{SIGNING_ALGORITHM, verify_signature};
use crate::services::auth::token::Token;

/// RS512 bearer-token verifier.
///
/// Holds the trust context (public key + expected issuer). Built once at
/// startup, then shared read-only between requests.
///
/// - Key material is intentionally not printable via Debug.
#[derive(Clone)]
pub struct JwtVerifier {
    public_key: RsaPublicKey,
    issuer: String,
}

impl fmt::Debug for JwtVerifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Do not print key material
        f.debug_struct("JwtVerifier")
            .field("algorithm", &SIGNING_ALGORITHM)
            .field("issuer", &self.issuer)
            .finish()
    }
}

impl JwtVerifier {
    /// `public_key` is the base64 body of an RSA `PUBLIC KEY` PEM (a full PEM
    /// document also works). `issuer` is the exact `iss` every token must carry.
    pub fn new(public_key: &str, issuer: &str) -> Result<Self, SetupError> {
        // Key before issuer: with both unset, operators are told about the key.
        if public_key.trim().is_empty() {
            return Err(SetupError::EmptyKey);
        }
        if issuer.is_empty() {
            return Err(SetupError::EmptyIssuer);
        }

        let public_key = parse_public_key(public_key)?;

        Ok(Self {
            public_key,
            issuer: issuer.to_string(),
        })
    }

    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    /// Parse, check the signature, then check the claims against `now`
    /// (seconds since the epoch). Stops at the first failure.
    pub fn verify(&self, authorization: &str, now: i64) -> Result<Claims, VerifyError> {
        let token = Token::parse(authorization)?;
        verify_signature(&token, &self.public_key)?;
        verify_claims(&token, now, &self.issuer)
    }
}
