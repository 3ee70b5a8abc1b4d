use std::path::PathBuf;

use clap::Parser;

use crate::common::error::{KeygenError, Result};
use crate::common::types::{
    BitLengthPolicy, PublicKeyFormat, MAX_SUPPORTED_BITS, MIN_SUPPORTED_BITS,
};

/// Interactive RSA key pair generator.
///
/// Every option can also be set through the environment variable shown.
#[derive(Clone, Debug, Parser)]
#[command(name = "keygen", version)]
pub struct Config {
    /// Directory the key files are written to
    #[arg(long, env = "KEYGEN_OUT_DIR", default_value = ".")]
    pub out_dir: PathBuf,

    /// File name of the public key
    #[arg(long, env = "KEYGEN_PUBLIC_FILE", default_value = "public.pem")]
    pub public_file: PathBuf,

    /// File name of the private key
    #[arg(long, env = "KEYGEN_PRIVATE_FILE", default_value = "private.pem")]
    pub private_file: PathBuf,

    /// Smallest accepted modulus size in bits
    #[arg(long, env = "KEYGEN_MIN_BITS", default_value_t = MIN_SUPPORTED_BITS)]
    pub min_bits: usize,

    /// Largest accepted modulus size in bits
    #[arg(long, env = "KEYGEN_MAX_BITS", default_value_t = MAX_SUPPORTED_BITS)]
    pub max_bits: usize,

    /// Accept only these sizes, e.g. 2048,3072,4096 (overrides the range)
    #[arg(long, env = "KEYGEN_ALLOWED_BITS", value_delimiter = ',')]
    pub allowed_bits: Vec<usize>,

    /// Encoding of the exported public key
    #[arg(
        long,
        env = "KEYGEN_PUBLIC_FORMAT",
        value_enum,
        default_value_t = PublicKeyFormat::Pkix
    )]
    pub public_format: PublicKeyFormat,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            out_dir: PathBuf::from("."),
            public_file: PathBuf::from("public.pem"),
            private_file: PathBuf::from("private.pem"),
            min_bits: MIN_SUPPORTED_BITS,
            max_bits: MAX_SUPPORTED_BITS,
            allowed_bits: Vec::new(),
            public_format: PublicKeyFormat::Pkix,
        }
    }
}

impl Config {
    pub fn public_key_path(&self) -> PathBuf {
        self.out_dir.join(&self.public_file)
    }

    pub fn private_key_path(&self) -> PathBuf {
        self.out_dir.join(&self.private_file)
    }

    pub fn bit_length_policy(&self) -> Result<BitLengthPolicy> {
        if !self.allowed_bits.is_empty() {
            if let Some(bits) = self.allowed_bits.iter().find(|b| **b < MIN_SUPPORTED_BITS) {
                return Err(KeygenError::Config(format!(
                    "allowed bit length {} is below {}",
                    bits, MIN_SUPPORTED_BITS
                )));
            }
            if let Some(bits) = self.allowed_bits.iter().find(|b| **b > MAX_SUPPORTED_BITS) {
                return Err(KeygenError::Config(format!(
                    "allowed bit length {} is above {}",
                    bits, MAX_SUPPORTED_BITS
                )));
            }
            let mut allowed = self.allowed_bits.clone();
            allowed.sort_unstable();
            allowed.dedup();
            return Ok(BitLengthPolicy::AllowList(allowed));
        }

        if self.min_bits < MIN_SUPPORTED_BITS {
            return Err(KeygenError::Config(format!(
                "minimum bit length must be at least {}",
                MIN_SUPPORTED_BITS
            )));
        }
        if self.max_bits > MAX_SUPPORTED_BITS {
            return Err(KeygenError::Config(format!(
                "maximum bit length must be at most {}",
                MAX_SUPPORTED_BITS
            )));
        }
        if self.min_bits > self.max_bits {
            return Err(KeygenError::Config(format!(
                "minimum bit length {} exceeds maximum {}",
                self.min_bits, self.max_bits
            )));
        }
        Ok(BitLengthPolicy::Range {
            min: self.min_bits,
            max: self.max_bits,
        })
    }
}
