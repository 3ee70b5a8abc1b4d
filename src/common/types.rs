use std::fmt;

use clap::ValueEnum;
use rsa::traits::PublicKeyParts;
use rsa::{RsaPrivateKey, RsaPublicKey};

/// Smallest modulus any policy may admit.
pub const MIN_SUPPORTED_BITS: usize = 512;

/// Largest modulus `rsa` will decode again from a public key PEM.
pub const MAX_SUPPORTED_BITS: usize = 4096;

/// A freshly generated RSA key pair.
#[derive(Clone, Debug)]
pub struct KeyPair {
    pub private_key: RsaPrivateKey,
    pub public_key: RsaPublicKey,
}

impl KeyPair {
    pub fn new(private_key: RsaPrivateKey) -> Self {
        let public_key = RsaPublicKey::from(&private_key);
        Self {
            private_key,
            public_key,
        }
    }

    /// Bit length of the modulus.
    pub fn bits(&self) -> usize {
        self.public_key.n().bits()
    }
}

/// Which bit lengths the prompt accepts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BitLengthPolicy {
    /// Any value in `min..=max`.
    Range { min: usize, max: usize },
    /// Exactly one of the listed values.
    AllowList(Vec<usize>),
}

impl Default for BitLengthPolicy {
    fn default() -> Self {
        BitLengthPolicy::Range {
            min: MIN_SUPPORTED_BITS,
            max: MAX_SUPPORTED_BITS,
        }
    }
}

impl BitLengthPolicy {
    pub fn allows(&self, bits: usize) -> bool {
        match self {
            BitLengthPolicy::Range { min, max } => (*min..=*max).contains(&bits),
            BitLengthPolicy::AllowList(allowed) => allowed.contains(&bits),
        }
    }

    /// Message shown when input is rejected.
    pub fn hint(&self) -> String {
        match self {
            BitLengthPolicy::Range { min, max } => {
                format!("Please enter a valid integer between {} and {}.", min, max)
            }
            BitLengthPolicy::AllowList(allowed) => {
                format!("Please enter one of: {}.", join(allowed))
            }
        }
    }

    /// Example value for the prompt text.
    pub fn example(&self) -> usize {
        match self {
            BitLengthPolicy::Range { min, max } => 2048.clamp(*min, *max),
            BitLengthPolicy::AllowList(allowed) => allowed.first().copied().unwrap_or(2048),
        }
    }
}

impl fmt::Display for BitLengthPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitLengthPolicy::Range { min, max } => write!(f, "{}..={}", min, max),
            BitLengthPolicy::AllowList(allowed) => write!(f, "{{{}}}", join(allowed)),
        }
    }
}

fn join(values: &[usize]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Encoding used for the exported public key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum PublicKeyFormat {
    /// SubjectPublicKeyInfo, `PUBLIC KEY`.
    #[default]
    Pkix,
    /// RSA-specific, `RSA PUBLIC KEY`.
    Pkcs1,
}
