// src/state.rs
//! Per-resource key state
//!
//! The operator's view of encryption at rest: for every resource, which key
//! writes new data and which keys can still read old data. Values are built
//! fresh by [`crate::translate`] and never mutated afterwards.

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::Mode;
use crate::key_ops::empty_static_identity_key;
use crate::wire::Key;

/// An API group plus resource, e.g. `configmaps.apps` or `secrets`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GroupResource {
    #[serde(default)]
    pub group: String,
    pub resource: String,
}

impl GroupResource {
    pub fn new(group: impl Into<String>, resource: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            resource: resource.into(),
        }
    }

    /// Split at the first `.`: resource before, group after.
    pub fn parse(s: &str) -> Self {
        match s.split_once('.') {
            Some((resource, group)) => Self::new(group, resource),
            None => Self::new("", s),
        }
    }
}

impl fmt::Display for GroupResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.group.is_empty() {
            f.write_str(&self.resource)
        } else {
            write!(f, "{}.{}", self.resource, self.group)
        }
    }
}

/// Which resources have been migrated off older keys onto this one, and when.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrationState {
    pub timestamp: Option<DateTime<Utc>>,
    pub resources: Vec<GroupResource>,
}

impl MigrationState {
    pub fn is_migrated(&self, gr: &GroupResource) -> bool {
        self.timestamp.is_some() && self.resources.contains(gr)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyState {
    pub key: Key,
    pub mode: Mode,

    pub migrated: MigrationState,
    /// Why the operator created this key
    pub internal_reason: String,
    /// Why an administrator requested this key
    pub external_reason: String,

    /// Corroborated by a persisted key record
    pub backed: bool,
}

impl KeyState {
    pub fn new(key: Key, mode: Mode) -> Self {
        Self {
            key,
            mode,
            migrated: MigrationState::default(),
            internal_reason: String::new(),
            external_reason: String::new(),
            backed: false,
        }
    }

    /// A named no-op key carrying the identity sentinel as its secret.
    pub fn identity(name: impl Into<String>) -> Self {
        Self::new(Key::new(name, empty_static_identity_key()), Mode::Identity)
    }

    pub fn key_id(&self) -> Option<u64> {
        name_to_key_id(&self.key.name)
    }

    /// Same name and same secret; mode and bookkeeping are ignored.
    pub fn same_key(&self, other: &KeyState) -> bool {
        equal_key_and_equal_id(self, other)
    }
}

/// Identity comparison of two key states: name and secret must match exactly.
pub fn equal_key_and_equal_id(a: &KeyState, b: &KeyState) -> bool {
    a.key.name == b.key.name && a.key.secret == b.key.secret
}

/// Numeric id of a key name.
///
/// `"7"` is 7; otherwise the trailing digits count, so `"k3"` is 3. A name
/// without trailing digits has no id.
pub fn name_to_key_id(name: &str) -> Option<u64> {
    if let Ok(id) = name.parse::<u64>() {
        return Some(id);
    }
    let digits = name
        .bytes()
        .rev()
        .take_while(|b| b.is_ascii_digit())
        .count();
    name[name.len() - digits..].parse().ok()
}

/// Stable sort by key id, highest first. Keys without an id go last.
pub fn sort_recent_first(mut keys: Vec<KeyState>) -> Vec<KeyState> {
    keys.sort_by(|a, b| b.key_id().cmp(&a.key_id()));
    keys
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupResourceState {
    /// Key encrypting new data. Also present in `read_keys`.
    pub write_key: Option<KeyState>,
    /// Keys able to decrypt existing data, most recent first.
    pub read_keys: Vec<KeyState>,
}

impl GroupResourceState {
    pub fn has_write_key(&self) -> bool {
        self.write_key.is_some()
    }
}

pub type ResourceMap = HashMap<GroupResource, GroupResourceState>;
