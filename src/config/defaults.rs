use crate::config::app::{LoggingSettings, RecordSettings};

pub const DEFAULT_COMPONENT: &str = "kube-apiserver";
pub const DEFAULT_NAMESPACE: &str = "encryption-config-managed";
pub const DEFAULT_LOG_FILTER: &str = "info";

pub fn default_records() -> RecordSettings {
    RecordSettings {
        component: DEFAULT_COMPONENT.into(),
        namespace: DEFAULT_NAMESPACE.into(),
    }
}

pub fn default_logging() -> LoggingSettings {
    LoggingSettings {
        filter: DEFAULT_LOG_FILTER.into(),
    }
}
