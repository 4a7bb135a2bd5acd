// src/records.rs
//! Persisted key records
//!
//! A key record is the secret-like storage object holding one key's raw
//! bytes plus its bookkeeping annotations. Records are produced and stored
//! by the caller; this module only converts between a record and a
//! [`KeyState`].

use std::collections::BTreeMap;
use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::config::RecordSettings;
use crate::consts::{
    RECORD_COMPONENT_LABEL, RECORD_EXTERNAL_REASON_ANNOTATION, RECORD_INTERNAL_REASON_ANNOTATION,
    RECORD_KEY_DATA, RECORD_MIGRATED_RESOURCES_ANNOTATION, RECORD_MIGRATED_TIMESTAMP_ANNOTATION,
    RECORD_MODE_ANNOTATION, RECORD_NAME_PREFIX,
};
use crate::enums::Mode;
use crate::error::{CoreError, Result};
use crate::state::{GroupResource, KeyState, MigrationState};
use crate::wire::Key;

#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyRecord {
    pub name: String,
    #[serde(default)]
    pub namespace: String,
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
    #[serde(default)]
    pub annotations: BTreeMap<String, String>,
    #[serde(default)]
    pub data: BTreeMap<String, Vec<u8>>,
}

impl fmt::Debug for KeyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyRecord")
            .field("name", &self.name)
            .field("namespace", &self.namespace)
            .field("labels", &self.labels)
            .field("annotations", &self.annotations)
            .field("data", &self.data.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Payload of the migrated-resources annotation
#[derive(Debug, Default, Serialize, Deserialize)]
struct MigratedResources {
    resources: Vec<GroupResource>,
}

/// Record name for key `key_id` owned by `component`
pub fn record_name(component: &str, key_id: u64) -> String {
    format!("{RECORD_NAME_PREFIX}-{component}-{key_id}")
}

/// Key id encoded in a record name: the suffix after the last `-`
pub fn record_key_id(name: &str) -> Option<u64> {
    let (_, suffix) = name.rsplit_once('-')?;
    suffix.parse().ok()
}

/// Read a record into a [`KeyState`]. The result is not yet marked backed.
pub fn to_key_state(record: &KeyRecord) -> Result<KeyState> {
    let raw = record
        .data
        .get(RECORD_KEY_DATA)
        .ok_or_else(|| CoreError::invalid_record(&record.name, "missing key data"))?;

    let key_id = record_key_id(&record.name)
        .ok_or_else(|| CoreError::invalid_record(&record.name, "name carries no key id"))?;

    let mode: Mode = record
        .annotations
        .get(RECORD_MODE_ANNOTATION)
        .ok_or_else(|| CoreError::invalid_record(&record.name, "missing mode annotation"))?
        .parse()?;

    let mut ks = KeyState::new(Key::new(key_id.to_string(), STANDARD.encode(raw)), mode);

    if let Some(ts) = record.annotations.get(RECORD_MIGRATED_TIMESTAMP_ANNOTATION) {
        ks.migrated.timestamp = Some(DateTime::parse_from_rfc3339(ts)?.with_timezone(&Utc));
    }
    if let Some(json) = record.annotations.get(RECORD_MIGRATED_RESOURCES_ANNOTATION) {
        let migrated: MigratedResources = serde_json::from_str(json)?;
        ks.migrated.resources = migrated.resources;
    }
    if let Some(reason) = record.annotations.get(RECORD_INTERNAL_REASON_ANNOTATION) {
        ks.internal_reason = reason.clone();
    }
    if let Some(reason) = record.annotations.get(RECORD_EXTERNAL_REASON_ANNOTATION) {
        ks.external_reason = reason.clone();
    }

    Ok(ks)
}

/// Build the record persisting `ks`.
pub fn from_key_state(settings: &RecordSettings, ks: &KeyState) -> Result<KeyRecord> {
    let key_id = ks
        .key_id()
        .ok_or_else(|| CoreError::invalid_record(&ks.key.name, "key name carries no key id"))?;
    let raw = STANDARD.decode(&ks.key.secret)?;

    let mut annotations = BTreeMap::new();
    annotations.insert(RECORD_MODE_ANNOTATION.to_string(), ks.mode.to_string());
    write_migration(&mut annotations, &ks.migrated)?;
    if !ks.internal_reason.is_empty() {
        annotations.insert(
            RECORD_INTERNAL_REASON_ANNOTATION.to_string(),
            ks.internal_reason.clone(),
        );
    }
    if !ks.external_reason.is_empty() {
        annotations.insert(
            RECORD_EXTERNAL_REASON_ANNOTATION.to_string(),
            ks.external_reason.clone(),
        );
    }

    Ok(KeyRecord {
        name: record_name(&settings.component, key_id),
        namespace: settings.namespace.clone(),
        labels: BTreeMap::from([(
            RECORD_COMPONENT_LABEL.to_string(),
            settings.component.clone(),
        )]),
        annotations,
        data: BTreeMap::from([(RECORD_KEY_DATA.to_string(), raw)]),
    })
}

fn write_migration(
    annotations: &mut BTreeMap<String, String>,
    migrated: &MigrationState,
) -> Result<()> {
    if let Some(ts) = migrated.timestamp {
        annotations.insert(
            RECORD_MIGRATED_TIMESTAMP_ANNOTATION.to_string(),
            ts.to_rfc3339_opts(SecondsFormat::Secs, true),
        );
    }
    if !migrated.resources.is_empty() {
        let json = serde_json::to_string(&MigratedResources {
            resources: migrated.resources.clone(),
        })?;
        annotations.insert(RECORD_MIGRATED_RESOURCES_ANNOTATION.to_string(), json);
    }
    Ok(())
}
