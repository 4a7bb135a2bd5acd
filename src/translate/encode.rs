// src/translate/encode.rs
//! state → config

use tracing::debug;

use crate::enums::Mode;
use crate::key_ops::empty_static_identity_key;
use crate::state::{GroupResource, GroupResourceState};
use crate::wire::{EncryptionConfiguration, Key, ProviderConfiguration, ResourceConfiguration};

/// Build the configuration for every resource in `state`.
///
/// Each entry names exactly one resource; entries are sorted by resource
/// name so the output does not depend on map iteration order.
pub fn encode<'a, I>(state: I) -> EncryptionConfiguration
where
    I: IntoIterator<Item = (&'a GroupResource, &'a GroupResourceState)>,
{
    let mut resources: Vec<(String, Vec<ProviderConfiguration>)> = state
        .into_iter()
        .map(|(gr, grs)| (gr.to_string(), state_to_providers(grs)))
        .collect();

    resources.sort_by(|a, b| a.0.cmp(&b.0));

    EncryptionConfiguration::new(
        resources
            .into_iter()
            .map(|(resource, providers)| ResourceConfiguration {
                resources: vec![resource],
                providers,
            })
            .collect(),
    )
}

/// Providers for one resource: write key first, then read keys, an
/// identity fallback, and finally the sentinel `aesgcm` providers naming
/// identity keys.
pub fn state_to_providers(desired: &GroupResourceState) -> Vec<ProviderConfiguration> {
    let mut all_keys = desired.read_keys.clone();
    // one extra for the identity fallback
    let mut providers = Vec::with_capacity(all_keys.len() + 1);

    match &desired.write_key {
        Some(write_key) => {
            all_keys.retain(|k| !k.same_key(write_key));
            all_keys.insert(0, write_key.clone());
        }
        // no write key => new data is written unencrypted
        None => providers.push(ProviderConfiguration::identity()),
    }

    let mut sentinel_providers = Vec::new();
    for (i, ks) in all_keys.iter().enumerate() {
        match ks.mode {
            Mode::AesCbc => providers.push(ProviderConfiguration::aescbc(ks.key.clone())),
            Mode::SecretBox => providers.push(ProviderConfiguration::secretbox(ks.key.clone())),
            Mode::Identity => {
                if i == 0 && desired.has_write_key() {
                    providers.push(ProviderConfiguration::identity());
                }
                sentinel_providers.push(ProviderConfiguration::aesgcm(Key::new(
                    ks.key.name.clone(),
                    empty_static_identity_key(),
                )));
            }
        }
    }

    // reads can always fall back to unencrypted data
    if !providers.first().is_some_and(ProviderConfiguration::is_identity) {
        providers.push(ProviderConfiguration::identity());
    }

    let sentinels = sentinel_providers.len();
    providers.extend(sentinel_providers);

    debug!(
        write_key = desired.write_key.as_ref().map(|k| k.key.name.as_str()),
        providers = providers.len(),
        sentinels,
        "encoded resource providers"
    );

    providers
}
