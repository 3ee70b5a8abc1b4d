use base64::{engine::general_purpose::STANDARD_NO_PAD as BASE64, Engine};
use rand::{CryptoRng, RngCore};
use rsa::pkcs8::EncodePublicKey;
use rsa::{RsaPrivateKey, RsaPublicKey};
use sha2::{Digest, Sha256};
use tracing::{debug, info};

use crate::common::error::Result;
use crate::common::types::KeyPair;

/// Generates an RSA key pair whose modulus is exactly `bits` long.
pub fn generate_key_pair<R>(rng: &mut R, bits: usize) -> Result<KeyPair>
where
    R: CryptoRng + RngCore,
{
    debug!(bits, "generating RSA key pair");
    let private_key = RsaPrivateKey::new(rng, bits)?;
    let pair = KeyPair::new(private_key);
    info!(bits = pair.bits(), "generated RSA key pair");
    Ok(pair)
}

/// `SHA256:<base64>` digest of the DER-encoded SubjectPublicKeyInfo.
pub fn fingerprint(public_key: &RsaPublicKey) -> Result<String> {
    let der = public_key.to_public_key_der()?;

    let mut hasher = Sha256::new();
    hasher.update(der.as_bytes());
    let hash = hasher.finalize();

    Ok(format!("SHA256:{}", BASE64.encode(hash)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils;
    use rand::rngs::OsRng;
    use rsa::traits::PublicKeyParts;

    #[test]
    fn test_generated_modulus_has_requested_bits() {
        for bits in [512, 768] {
            let pair = generate_key_pair(&mut OsRng, bits).unwrap();
            assert_eq!(pair.bits(), bits);
            assert_eq!(pair.private_key.n().bits(), bits);
        }
    }

    #[test]
    fn test_public_key_matches_private_key() {
        let pair = test_utils::test_key_pair();
        assert_eq!(pair.public_key, RsaPublicKey::from(&pair.private_key));
        pair.private_key.validate().unwrap();
    }

    #[test]
    fn test_fingerprint_is_stable_and_distinct() {
        let pair = test_utils::test_key_pair();
        let first = fingerprint(&pair.public_key).unwrap();
        let second = fingerprint(&pair.public_key).unwrap();
        assert_eq!(first, second);
        assert!(first.starts_with("SHA256:"));
        // 32 byte digest, unpadded base64
        assert_eq!(first.len(), "SHA256:".len() + 43);

        let other = generate_key_pair(&mut OsRng, 512).unwrap();
        assert_ne!(first, fingerprint(&other.public_key).unwrap());
    }
}
