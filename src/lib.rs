//! Interactive RSA key-pair generator writing PEM files, with optional
//! password protection of the private key.

pub mod client;
pub mod common;
pub mod utils;

#[cfg(test)]
pub mod test_utils;

pub use common::error::{KeygenError, Result};
