// src/wire.rs
//! Encryption configuration as read by the API server
//!
//! This schema is an external contract. Types here mirror it field for
//! field; nothing in this module interprets providers. See
//! [`crate::translate`] for the mapping to key state.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{ENCRYPTION_CONFIG_API_VERSION, ENCRYPTION_CONFIG_KIND};
use crate::error::Result;
use crate::util::fingerprint;

/// Top-level document: one entry per group of resources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncryptionConfiguration {
    #[serde(default = "default_kind")]
    pub kind: String,
    #[serde(default = "default_api_version")]
    pub api_version: String,
    #[serde(default)]
    pub resources: Vec<ResourceConfiguration>,
}

fn default_kind() -> String {
    ENCRYPTION_CONFIG_KIND.to_string()
}

fn default_api_version() -> String {
    ENCRYPTION_CONFIG_API_VERSION.to_string()
}

impl Default for EncryptionConfiguration {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl EncryptionConfiguration {
    pub fn new(resources: Vec<ResourceConfiguration>) -> Self {
        Self {
            kind: default_kind(),
            api_version: default_api_version(),
            resources,
        }
    }

    pub fn from_yaml(input: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(input)?)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Resources sharing an ordered provider list.
///
/// The API allows several resources per entry; everything produced by this
/// crate names exactly one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceConfiguration {
    #[serde(default)]
    pub resources: Vec<String>,
    #[serde(default)]
    pub providers: Vec<ProviderConfiguration>,
}

/// One provider; exactly one field is expected to be set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfiguration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aesgcm: Option<AesConfiguration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aescbc: Option<AesConfiguration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secretbox: Option<SecretboxConfiguration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity: Option<IdentityConfiguration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kms: Option<KmsConfiguration>,
}

impl ProviderConfiguration {
    pub fn identity() -> Self {
        Self {
            identity: Some(IdentityConfiguration::default()),
            ..Self::default()
        }
    }

    pub fn aescbc(key: Key) -> Self {
        Self {
            aescbc: Some(AesConfiguration { keys: vec![key] }),
            ..Self::default()
        }
    }

    pub fn aesgcm(key: Key) -> Self {
        Self {
            aesgcm: Some(AesConfiguration { keys: vec![key] }),
            ..Self::default()
        }
    }

    pub fn secretbox(key: Key) -> Self {
        Self {
            secretbox: Some(SecretboxConfiguration { keys: vec![key] }),
            ..Self::default()
        }
    }

    pub fn is_identity(&self) -> bool {
        self.identity.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AesConfiguration {
    #[serde(default)]
    pub keys: Vec<Key>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretboxConfiguration {
    #[serde(default)]
    pub keys: Vec<Key>,
}

/// The no-op provider; carries no key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityConfiguration {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KmsConfiguration {
    pub name: String,
    #[serde(default)]
    pub endpoint: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cachesize: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
}

/// A named key; `secret` is the base64 of the raw key bytes.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Key {
    pub name: String,
    pub secret: String,
}

impl Key {
    pub fn new(name: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            secret: secret.into(),
        }
    }
}

// Never print the secret itself
impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Key")
            .field("name", &self.name)
            .field("secret", &format_args!("<{}>", fingerprint(&self.secret)))
            .finish()
    }
}
