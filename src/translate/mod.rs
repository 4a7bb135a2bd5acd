// src/translate/mod.rs
//! Translation between the API server's encryption configuration and
//! per-resource key state.
//!
//! The wire format can only say "no encryption" with an anonymous identity
//! provider. To keep track of *named* no-op generations, every
//! identity-mode key is also written as a single-key `aesgcm` provider
//! whose secret is [`empty_static_identity_key`]. That provider is never a
//! real key: the decoder reads it back as [`Mode::Identity`].
//!
//! Both directions are pure. Malformed input is skipped with a warning and
//! never fails the whole call.
//!
//! [`empty_static_identity_key`]: crate::key_ops::empty_static_identity_key
//! [`Mode::Identity`]: crate::enums::Mode::Identity

pub mod decode;
pub mod encode;

pub use decode::decode;
pub use encode::{encode, state_to_providers};
