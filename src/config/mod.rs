// src/config/mod.rs
//! Configuration system for encryption-config
//!
//! Central, lazy-loaded global config with TOML + env overrides.

pub use app::{config_path, load, Config, LoggingSettings, RecordSettings};

mod app;
mod defaults;
