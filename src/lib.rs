// src/lib.rs
//! encryption-config: API server encryption configuration ⇄ key state
//!
//! Features:
//! - Decode an `EncryptionConfiguration` plus persisted key records into
//!   per-resource write/read keys
//! - Encode per-resource key state back into a stable configuration
//! - Named identity (no-op) keys carried through `aesgcm` sentinel providers
//! - Key record conversion with migration metadata

pub mod aliases;
pub mod config;
pub mod consts;
pub mod enums;
pub mod error;
pub mod key_ops;
#[cfg(feature = "logging")]
pub mod logging;
pub mod records;
pub mod state;
pub mod translate;
pub mod util;
pub mod wire;

// Re-export everything users need at the crate root
pub use config::load as load_config;
pub use enums::Mode;
pub use error::{CoreError, Result};
pub use key_ops::empty_static_identity_key;
pub use records::KeyRecord;
pub use state::{GroupResource, GroupResourceState, KeyState, MigrationState, ResourceMap};
pub use translate::{decode, encode, state_to_providers};
pub use wire::{EncryptionConfiguration, Key, ProviderConfiguration, ResourceConfiguration};
