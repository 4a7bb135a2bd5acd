// tests/common.rs
//! Shared test utilities: logging setup and key builders

#![allow(dead_code)] // each test binary uses a different subset

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use encryption_config::config::RecordSettings;
use encryption_config::records::from_key_state;
use encryption_config::{Key, KeyRecord, KeyState, Mode};

#[cfg(feature = "logging")]
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize test-friendly logging
/// Call once at the start of any test that needs logs
pub fn setup() {
    #[cfg(feature = "logging")]
    tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer())
        .with(EnvFilter::from_default_env())
        .try_init()
        .ok(); // idempotent, safe to call multiple times

    #[cfg(not(feature = "logging"))]
    { /* no-op */ }
}

/// Deterministic base64 secret derived from the key name
pub fn secret_for(name: &str) -> String {
    STANDARD.encode(format!("secret-material-{name}"))
}

pub fn aescbc(name: &str) -> KeyState {
    KeyState::new(Key::new(name, secret_for(name)), Mode::AesCbc)
}

pub fn secretbox(name: &str) -> KeyState {
    KeyState::new(Key::new(name, secret_for(name)), Mode::SecretBox)
}

pub fn identity(name: &str) -> KeyState {
    KeyState::identity(name)
}

pub fn settings() -> RecordSettings {
    RecordSettings {
        component: "kube-apiserver".into(),
        namespace: "encryption-managed".into(),
    }
}

/// Persisted record for `ks`, as the storage layer would hand it back
pub fn record_for(ks: &KeyState) -> KeyRecord {
    from_key_state(&settings(), ks).expect("valid key state")
}

pub fn names(keys: &[KeyState]) -> Vec<&str> {
    keys.iter().map(|k| k.key.name.as_str()).collect()
}
