// src/enums.rs
//! Public enum types used throughout the crate

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// How data for a resource is (or was) written.
///
/// `Identity` means "no real encryption". It is still tracked by name so
/// that a rotation layer can tell which no-op generation some data may have
/// been written under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    #[serde(rename = "aescbc")]
    AesCbc,
    #[serde(rename = "secretbox")]
    SecretBox,
    #[serde(rename = "identity")]
    Identity,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::AesCbc, Mode::SecretBox, Mode::Identity];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::AesCbc => "aescbc",
            Mode::SecretBox => "secretbox",
            Mode::Identity => "identity",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| CoreError::InvalidMode(s.to_string()))
    }
}
