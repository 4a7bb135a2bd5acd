// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid encryption mode {0:?}")]
    InvalidMode(String),

    #[error("invalid key record {record}: {reason}")]
    InvalidRecord { record: String, reason: String },

    #[error("invalid migration timestamp: {0}")]
    Timestamp(#[from] chrono::ParseError),

    #[error("base64 decode failed: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl CoreError {
    pub(crate) fn invalid_record(record: &str, reason: impl Into<String>) -> Self {
        CoreError::InvalidRecord {
            record: record.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
