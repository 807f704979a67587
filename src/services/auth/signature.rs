use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rsa::{Pkcs1v15Sign, RsaPublicKey};
use sha2::{Digest, Sha512};

use crate::services::auth::error::{Segment, VerifyError};
use crate::services::auth::token::Token;

/// The only accepted JWS algorithm. Fixed here, never read from the token header.
pub const SIGNING_ALGORITHM: &str = "RS512";

/// Check that `token.signature` is an RSASSA-PKCS1-v1_5 SHA-512 signature
/// over `header.payload` made by the owner of `public_key`.
pub fn verify_signature(token: &Token<'_>, public_key: &RsaPublicKey) -> Result<(), VerifyError> {
    let digest = Sha512::digest(token.signing_input().as_bytes());

    let signature = URL_SAFE_NO_PAD
        .decode(token.signature)
        .map_err(VerifyError::encoding(Segment::Signature))?;

    public_key
        .verify(Pkcs1v15Sign::new::<Sha512>(), &digest, &signature)
        .map_err(|_| VerifyError::SignatureInvalid)
}
