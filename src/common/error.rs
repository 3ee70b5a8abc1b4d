use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while generating, encoding, protecting or storing keys.
#[derive(Debug, Error)]
pub enum KeygenError {
    #[error("failed to generate RSA key pair: {0}")]
    Generation(#[from] rsa::Error),

    #[error("failed to encode PKCS#1 key: {0}")]
    Pkcs1(#[from] rsa::pkcs1::Error),

    #[error("failed to encode public key: {0}")]
    Spki(#[from] rsa::pkcs8::spki::Error),

    #[error("malformed PEM: {0}")]
    Pem(#[from] pem::PemError),

    #[error("unexpected PEM label {found:?}, expected {expected}")]
    UnexpectedLabel { found: String, expected: &'static str },

    #[error("malformed encryption header: {0}")]
    InvalidHeader(String),

    #[error("OpenSSL error: {0}")]
    OpenSsl(#[from] openssl::error::ErrorStack),

    #[error("private key is encrypted and no password was given")]
    PasswordRequired,

    #[error("failed to decrypt private key (wrong password?)")]
    Decryption,

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("error reading input: {0}")]
    Input(#[from] io::Error),

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, KeygenError>;
