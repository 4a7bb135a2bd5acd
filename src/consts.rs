// src/consts.rs
//! Shared constants: wire identifiers, record layout and defaults

/// `kind` of the API server encryption configuration document
pub const ENCRYPTION_CONFIG_KIND: &str = "EncryptionConfiguration";

/// `apiVersion` of the API server encryption configuration document
pub const ENCRYPTION_CONFIG_API_VERSION: &str = "apiserver.config.k8s.io/v1";

/// Raw length of the identity key; all zero bytes
pub const IDENTITY_KEY_LEN: usize = 16;

/// Raw length of generated AES-CBC and secretbox keys
pub const SYMMETRIC_KEY_LEN: usize = 32;

/// Prefix shared by every key record name: `encryption-key-<component>-<keyid>`
pub const RECORD_NAME_PREFIX: &str = "encryption-key";

/// Data field holding the raw key bytes of a key record
pub const RECORD_KEY_DATA: &str = "encryption.apiserver.operator/key";

pub const RECORD_COMPONENT_LABEL: &str = "encryption.apiserver.operator/component";
pub const RECORD_MODE_ANNOTATION: &str = "encryption.apiserver.operator/mode";
pub const RECORD_MIGRATED_TIMESTAMP_ANNOTATION: &str =
    "encryption.apiserver.operator/migrated-timestamp";
pub const RECORD_MIGRATED_RESOURCES_ANNOTATION: &str =
    "encryption.apiserver.operator/migrated-resources";
pub const RECORD_INTERNAL_REASON_ANNOTATION: &str = "encryption.apiserver.operator/internal-reason";
pub const RECORD_EXTERNAL_REASON_ANNOTATION: &str = "encryption.apiserver.operator/external-reason";

/// Hex characters of a secret fingerprint shown in logs and `Debug` output
pub const FINGERPRINT_LEN_HEX: usize = 12;

/// Env var pointing at the TOML config file
pub const CONFIG_PATH_ENV: &str = "ENCRYPTION_CONFIG";

/// Env var overriding `records.component`
pub const COMPONENT_ENV: &str = "ENCRYPTION_COMPONENT";
