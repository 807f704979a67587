//! Test helpers: fixture keys and an RS512 token minter.
//!
//! The minter signs whatever header and claims it is given, which is what the
//! attack-style tests need (bogus `alg`, missing claims, ...).

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rsa::RsaPrivateKey;
use rsa::pkcs1::DecodeRsaPrivateKey;
use rsa::pkcs1v15::SigningKey;
use rsa::signature::{SignatureEncoding, Signer};
use sha2::Sha512;

pub const TRUSTED_PRIVATE_PEM: &str = include_str!("../tests/fixtures/trusted_private.pem");
pub const TRUSTED_PUBLIC_PEM: &str = include_str!("../tests/fixtures/trusted_public.pem");
pub const UNTRUSTED_PRIVATE_PEM: &str = include_str!("../tests/fixtures/untrusted_private.pem");
pub const UNTRUSTED_PUBLIC_PEM: &str = include_str!("../tests/fixtures/untrusted_public.pem");
pub const EC_PUBLIC_PEM: &str = include_str!("../tests/fixtures/ec_public.pem");
/// RSA-8192 public key; its private half is not kept.
pub const LARGE_PUBLIC_PEM: &str = include_str!("../tests/fixtures/large_public.pem");
/// RS512 token `{"iss":"X","exp":1700000100,"nbf":1699999900}` signed by the
/// `LARGE_PUBLIC_PEM` key. Ends with a newline.
pub const LARGE_KEY_TOKEN: &str = include_str!("../tests/fixtures/large_key_token.txt");

/// PEM body without the armor lines, as operators configure it.
pub fn pem_body(pem: &str) -> String {
    pem.lines()
        .filter(|line| !line.starts_with("-----"))
        .map(str::trim)
        .collect()
}

fn signing_key(private_pem: &str) -> SigningKey<Sha512> {
    let key = RsaPrivateKey::from_pkcs1_pem(private_pem).expect("fixture private key");
    SigningKey::<Sha512>::new(key)
}

pub fn trusted_signing_key() -> SigningKey<Sha512> {
    signing_key(TRUSTED_PRIVATE_PEM)
}

pub fn untrusted_signing_key() -> SigningKey<Sha512> {
    signing_key(UNTRUSTED_PRIVATE_PEM)
}

/// Build `header.payload.signature` with an RSASSA-PKCS1-v1_5 SHA-512 signature.
pub fn sign_compact(
    header: &serde_json::Value,
    claims: &serde_json::Value,
    key: &SigningKey<Sha512>,
) -> String {
    let header = URL_SAFE_NO_PAD.encode(header.to_string());
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
    let signing_input = format!("{header}.{payload}");

    let signature = key.sign(signing_input.as_bytes());
    format!(
        "{signing_input}.{}",
        URL_SAFE_NO_PAD.encode(signature.to_bytes())
    )
}
