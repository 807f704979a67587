use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use serde::{Deserialize, Deserializer};

use crate::services::auth::error::{Segment, VerifyError};
use crate::services::auth::token::Token;

/// Registered claims this filter cares about.
///
/// NOTE:
/// - Missing (or `null`) fields decode to `""` / `0` instead of failing.
///   A token without `exp` therefore never passes the expiry check.
/// - Any other claim in the payload is ignored.
/// - A registered claim given twice is `MalformedClaims`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Claims {
    #[serde(rename = "iss", deserialize_with = "null_as_default")]
    pub issuer: String,
    #[serde(rename = "exp", deserialize_with = "null_as_default")]
    pub expires_at: i64,
    #[serde(rename = "nbf", deserialize_with = "null_as_default")]
    pub not_before: i64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Claims {
    /// Decode the payload segment of `token`.
    pub fn decode(token: &Token<'_>) -> Result<Self, VerifyError> {
        let payload = URL_SAFE_NO_PAD
            .decode(token.payload)
            .map_err(VerifyError::encoding(Segment::Payload))?;

        Ok(serde_json::from_slice(&payload)?)
    }

    /// Issuer, then expiry, then not-before. The first failing check wins.
    pub fn verify(&self, now: i64, issuer: &str) -> Result<(), VerifyError> {
        if !self.verify_issuer(issuer) {
            return Err(VerifyError::IssuerMismatch);
        }
        if !self.verify_expires_at(now) {
            return Err(VerifyError::Expired);
        }
        if !self.verify_not_before(now) {
            return Err(VerifyError::NotYetValid);
        }
        Ok(())
    }

    pub fn verify_issuer(&self, issuer: &str) -> bool {
        self.issuer == issuer
    }

    // exp is exclusive: a token expiring at `now` is already dead.
    pub fn verify_expires_at(&self, now: i64) -> bool {
        now < self.expires_at
    }

    // nbf is inclusive.
    pub fn verify_not_before(&self, now: i64) -> bool {
        self.not_before <= now
    }
}

/// Decode the claims carried by `token` and check them against `now` and `issuer`.
pub fn verify_claims(token: &Token<'_>, now: i64, issuer: &str) -> Result<Claims, VerifyError> {
    let claims = Claims::decode(token)?;
    claims.verify(now, issuer)?;
    Ok(claims)
}
