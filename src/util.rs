// src/util.rs
//! Small helpers shared across modules

use blake3::Hasher;

use crate::consts::FINGERPRINT_LEN_HEX;

/// Compute BLAKE3 hash and return as lowercase hex string
pub fn blake3_hex(data: &[u8]) -> String {
    Hasher::new().update(data).finalize().to_hex().to_string()
}

/// Short, non-reversible tag for a secret, safe to log
pub fn fingerprint(secret: &str) -> String {
    let mut hex = blake3_hex(secret.as_bytes());
    hex.truncate(FINGERPRINT_LEN_HEX);
    hex
}
