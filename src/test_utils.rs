use std::sync::OnceLock;

use rand::rngs::OsRng;

use crate::common::keys::generate_key_pair;
use crate::common::types::KeyPair;

/// Small modulus so tests stay fast.
pub const TEST_KEY_BITS: usize = 1024;

/// Shared key pair, generated once per test binary.
pub fn test_key_pair() -> &'static KeyPair {
    static PAIR: OnceLock<KeyPair> = OnceLock::new();
    PAIR.get_or_init(|| generate_key_pair(&mut OsRng, TEST_KEY_BITS).unwrap())
}

/// Console input built from lines.
pub fn input(lines: &[&str]) -> std::io::Cursor<Vec<u8>> {
    let mut text = lines.join("\n");
    text.push('\n');
    std::io::Cursor::new(text.into_bytes())
}
