// src/key_ops.rs
//! Key material generation and the identity sentinel
//!
//! The identity key is a fixed, publicly known value. Its base64 form is
//! the sentinel that marks a real-encryption-shaped provider as a named
//! no-op key.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use once_cell::sync::Lazy;
use rand::RngCore;

use crate::aliases::KeyMaterial;
use crate::consts::{IDENTITY_KEY_LEN, SYMMETRIC_KEY_LEN};
use crate::enums::Mode;
use crate::wire::Key;

static EMPTY_STATIC_IDENTITY_KEY: Lazy<String> =
    Lazy::new(|| STANDARD.encode(new_identity_key().expose_secret()));

/// The all-zero identity key
pub fn new_identity_key() -> KeyMaterial {
    KeyMaterial::new(vec![0u8; IDENTITY_KEY_LEN])
}

/// Base64 of the identity key, computed once per process
pub fn empty_static_identity_key() -> &'static str {
    EMPTY_STATIC_IDENTITY_KEY.as_str()
}

/// Fresh key bytes suitable for `mode`
pub fn new_key_material(mode: Mode) -> KeyMaterial {
    match mode {
        Mode::AesCbc | Mode::SecretBox => {
            let mut bytes = vec![0u8; SYMMETRIC_KEY_LEN];
            rand::rng().fill_bytes(&mut bytes);
            KeyMaterial::new(bytes)
        }
        Mode::Identity => new_identity_key(),
    }
}

/// Wire key named `name` with fresh material for `mode`
pub fn new_key(name: impl Into<String>, mode: Mode) -> Key {
    Key::new(name, encode_material(&new_key_material(mode)))
}

pub fn encode_material(material: &KeyMaterial) -> String {
    STANDARD.encode(material.expose_secret())
}
