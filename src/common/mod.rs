pub mod encoding;
pub mod error;
pub mod keys;
pub mod protect;
pub mod storage;
pub mod types;
