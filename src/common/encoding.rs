//! PEM encoding of RSA keys.
//!
//! Public keys are written as SubjectPublicKeyInfo (`PUBLIC KEY`) or PKCS#1
//! (`RSA PUBLIC KEY`); private keys always use PKCS#1 (`RSA PRIVATE KEY`).

use rsa::pkcs1::{
    DecodeRsaPrivateKey, DecodeRsaPublicKey, EncodeRsaPrivateKey, EncodeRsaPublicKey, LineEnding,
};
use rsa::pkcs8::der::zeroize::Zeroizing;
use rsa::pkcs8::{DecodePublicKey, EncodePublicKey};
use rsa::{RsaPrivateKey, RsaPublicKey};

use crate::common::error::{KeygenError, Result};
use crate::common::types::PublicKeyFormat;

pub const PRIVATE_KEY_LABEL: &str = "RSA PRIVATE KEY";
pub const PKIX_PUBLIC_KEY_LABEL: &str = "PUBLIC KEY";
pub const PKCS1_PUBLIC_KEY_LABEL: &str = "RSA PUBLIC KEY";

pub fn encode_public_key(public_key: &RsaPublicKey, format: PublicKeyFormat) -> Result<String> {
    let pem = match format {
        PublicKeyFormat::Pkix => public_key.to_public_key_pem(LineEnding::LF)?,
        PublicKeyFormat::Pkcs1 => public_key.to_pkcs1_pem(LineEnding::LF)?,
    };
    Ok(pem)
}

pub fn encode_private_key(private_key: &RsaPrivateKey) -> Result<Zeroizing<String>> {
    Ok(private_key.to_pkcs1_pem(LineEnding::LF)?)
}

/// Decodes either public key label.
pub fn decode_public_key(pem: &str) -> Result<RsaPublicKey> {
    let block = pem::parse(pem)?;
    match block.tag() {
        PKIX_PUBLIC_KEY_LABEL => Ok(RsaPublicKey::from_public_key_pem(pem)?),
        PKCS1_PUBLIC_KEY_LABEL => Ok(RsaPublicKey::from_pkcs1_pem(pem)?),
        other => Err(KeygenError::UnexpectedLabel {
            found: other.to_string(),
            expected: PKIX_PUBLIC_KEY_LABEL,
        }),
    }
}

/// Decodes an unencrypted PKCS#1 private key.
pub fn decode_private_key(pem: &str) -> Result<RsaPrivateKey> {
    Ok(RsaPrivateKey::from_pkcs1_pem(pem)?)
}
