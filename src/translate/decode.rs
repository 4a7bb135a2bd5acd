// src/translate/decode.rs
//! config → state

use tracing::{debug, warn};

use crate::enums::Mode;
use crate::key_ops::empty_static_identity_key;
use crate::records::{to_key_state, KeyRecord};
use crate::state::{sort_recent_first, GroupResource, GroupResourceState, KeyState, ResourceMap};
use crate::wire::{EncryptionConfiguration, Key, ProviderConfiguration};

/// What a single provider entry means for key state
enum Classified {
    Keyed(KeyState),
    /// Anonymous identity provider; names no key on its own
    Placeholder,
    Unrecognized,
}

/// Reconstruct per-resource key state from `config`.
///
/// Also returns every parseable record as a backed key, most recent first,
/// so callers can spot records no resource refers to. Read keys in the map
/// are sorted most recent first and include the write key.
///
/// Expects the shape produced by [`encode`](super::encode): one resource
/// per entry, one key per provider, the write key first, sentinel `aesgcm`
/// providers last.
pub fn decode(
    config: Option<&EncryptionConfiguration>,
    records: &[KeyRecord],
) -> (ResourceMap, Vec<KeyState>) {
    let backed_keys = collect_backed_keys(records);

    let Some(config) = config else {
        return (ResourceMap::new(), backed_keys);
    };

    let mut out = ResourceMap::with_capacity(config.resources.len());
    for resource_config in &config.resources {
        let [resource] = resource_config.resources.as_slice() else {
            // should never happen
            warn!(
                resources = ?resource_config.resources,
                "skipping encryption config entry not naming exactly one resource"
            );
            continue;
        };

        let leading_placeholder = resource_config
            .providers
            .first()
            .is_some_and(ProviderConfiguration::is_identity);

        let mut grs = GroupResourceState::default();
        for (index, provider) in resource_config.providers.iter().enumerate() {
            let ks = match classify(provider) {
                Classified::Keyed(ks) => ks,
                Classified::Placeholder => continue,
                Classified::Unrecognized => {
                    warn!(resource = %resource, index, "skipping invalid provider");
                    continue;
                }
            };

            // a matching record wins: it is backed and carries metadata
            let ks = backed_keys
                .iter()
                .find(|backed| backed.same_key(&ks))
                .cloned()
                .unwrap_or(ks);

            if grs.read_keys.iter().any(|k| k.same_key(&ks)) {
                debug!(resource = %resource, index, key = %ks.key.name, "dropping duplicate key");
                continue;
            }

            if index == 0
                || (leading_placeholder && ks.mode == Mode::Identity && !grs.has_write_key())
            {
                grs.write_key = Some(ks.clone());
            }

            // the write key is a read key too
            grs.read_keys.push(ks);
        }

        grs.read_keys = sort_recent_first(grs.read_keys);

        debug!(
            resource = %resource,
            write_key = grs.write_key.as_ref().map(|k| k.key.name.as_str()),
            read_keys = grs.read_keys.len(),
            "decoded resource"
        );

        let gr = GroupResource::parse(resource);
        if out.insert(gr, grs).is_some() {
            warn!(resource = %resource, "resource configured more than once, keeping the last entry");
        }
    }

    (out, backed_keys)
}

fn collect_backed_keys(records: &[KeyRecord]) -> Vec<KeyState> {
    let mut keys = Vec::with_capacity(records.len());
    for record in records {
        match to_key_state(record) {
            Ok(mut ks) => {
                ks.backed = true;
                keys.push(ks);
            }
            Err(err) => warn!(record = %record.name, error = %err, "skipping invalid key record"),
        }
    }
    sort_recent_first(keys)
}

fn single(keys: &[Key]) -> Option<&Key> {
    match keys {
        [key] => Some(key),
        _ => None,
    }
}

fn classify(provider: &ProviderConfiguration) -> Classified {
    if let Some(key) = provider.aescbc.as_ref().and_then(|c| single(&c.keys)) {
        return Classified::Keyed(KeyState::new(key.clone(), Mode::AesCbc));
    }
    if let Some(key) = provider.secretbox.as_ref().and_then(|c| single(&c.keys)) {
        return Classified::Keyed(KeyState::new(key.clone(), Mode::SecretBox));
    }
    if provider.is_identity() {
        return Classified::Placeholder;
    }
    match provider.aesgcm.as_ref().and_then(|c| single(&c.keys)) {
        Some(key) if key.secret == empty_static_identity_key() => {
            Classified::Keyed(KeyState::new(key.clone(), Mode::Identity))
        }
        _ => Classified::Unrecognized,
    }
}
