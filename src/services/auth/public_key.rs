//! RSA public key loading.
//!
//! Operators usually configure the base64 body of a `PUBLIC KEY` PEM without
//! the armor lines. A full PEM document and PKCS#1 `RSA PUBLIC KEY` material
//! are accepted too. Anything that does not end up as an RSA key is rejected.

use base64::{Engine, engine::general_purpose::STANDARD};
use rsa::pkcs1::der::{Decode, pem};
use rsa::pkcs1::{self, RsaPublicKey as Pkcs1PublicKey};
use rsa::pkcs8::spki::SubjectPublicKeyInfoRef;
use rsa::{BigUint, RsaPublicKey};

use crate::services::auth::error::SetupError;

/// Largest accepted modulus, in bits. `RsaPublicKey::new` stops at 4096,
/// which would turn away valid RSA-8192 issuers.
pub const MAX_MODULUS_BITS: usize = 16384;

const SPKI_PEM_LABEL: &str = "PUBLIC KEY";
const PKCS1_PEM_LABEL: &str = "RSA PUBLIC KEY";

pub fn parse_public_key(material: &str) -> Result<RsaPublicKey, SetupError> {
    let material = material.trim();
    if material.is_empty() {
        return Err(SetupError::EmptyKey);
    }

    if material.starts_with("-----BEGIN") {
        return parse_pem(material);
    }

    // PEM bodies are often pasted with their line breaks still in place.
    let body: String = material.split_whitespace().collect();
    let der = STANDARD
        .decode(body)
        .map_err(|e| SetupError::KeyDecode(format!("invalid base64 key body: {e}")))?;

    parse_der(&der)
}

fn parse_pem(document: &str) -> Result<RsaPublicKey, SetupError> {
    let (label, der) = pem::decode_vec(document.as_bytes())
        .map_err(|e| SetupError::KeyDecode(format!("invalid PEM document: {e}")))?;

    match label {
        SPKI_PEM_LABEL => from_spki_der(&der),
        PKCS1_PEM_LABEL => from_pkcs1_der(&der),
        other => Err(SetupError::KeyDecode(format!(
            "unsupported PEM label {other:?}"
        ))),
    }
}

// Bare bodies carry no label: SPKI first, PKCS#1 as a fallback.
fn parse_der(der: &[u8]) -> Result<RsaPublicKey, SetupError> {
    from_spki_der(der).or_else(|spki_err| from_pkcs1_der(der).map_err(|_| spki_err))
}

fn from_spki_der(der: &[u8]) -> Result<RsaPublicKey, SetupError> {
    let spki = SubjectPublicKeyInfoRef::try_from(der)
        .map_err(|e| SetupError::KeyDecode(format!("invalid SubjectPublicKeyInfo: {e}")))?;

    if spki.algorithm.oid != pkcs1::ALGORITHM_OID {
        return Err(SetupError::KeyDecode(format!(
            "not an RSA key (algorithm {})",
            spki.algorithm.oid
        )));
    }

    let key = spki.subject_public_key.as_bytes().ok_or_else(|| {
        SetupError::KeyDecode("subjectPublicKey is not a whole number of bytes".to_string())
    })?;

    from_pkcs1_der(key)
}

fn from_pkcs1_der(der: &[u8]) -> Result<RsaPublicKey, SetupError> {
    let key = Pkcs1PublicKey::from_der(der)
        .map_err(|e| SetupError::KeyDecode(format!("invalid RSAPublicKey: {e}")))?;

    let n = BigUint::from_bytes_be(key.modulus.as_bytes());
    let e = BigUint::from_bytes_be(key.public_exponent.as_bytes());

    RsaPublicKey::new_with_max_size(n, e, MAX_MODULUS_BITS)
        .map_err(|err| SetupError::KeyDecode(format!("unusable RSA key: {err}")))
}
