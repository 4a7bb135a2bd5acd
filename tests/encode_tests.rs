// tests/encode_tests.rs
//! state → config

mod common;
use common::{aescbc, identity, secretbox, setup};

use encryption_config::{
    empty_static_identity_key, encode, state_to_providers, GroupResource, GroupResourceState, Key,
    KeyState, ProviderConfiguration, ResourceMap,
};

fn resource_state(write_key: Option<KeyState>, read_keys: Vec<KeyState>) -> GroupResourceState {
    GroupResourceState { write_key, read_keys }
}

#[test]
fn write_key_comes_first_with_identity_fallback() {
    setup();
    let state = resource_state(Some(aescbc("k3")), vec![aescbc("k3")]);

    let providers = state_to_providers(&state);

    assert_eq!(
        providers,
        vec![
            ProviderConfiguration::aescbc(aescbc("k3").key),
            ProviderConfiguration::identity(),
        ]
    );
}

#[test]
fn no_write_key_starts_with_identity_placeholder() {
    setup();
    let state = resource_state(None, vec![aescbc("k2"), secretbox("k1")]);

    let providers = state_to_providers(&state);

    assert_eq!(
        providers,
        vec![
            ProviderConfiguration::identity(),
            ProviderConfiguration::aescbc(aescbc("k2").key),
            ProviderConfiguration::secretbox(secretbox("k1").key),
        ]
    );
}

#[test]
fn empty_state_is_a_single_identity_provider() {
    let providers = state_to_providers(&GroupResourceState::default());
    assert_eq!(providers, vec![ProviderConfiguration::identity()]);
}

#[test]
fn identity_read_key_without_write_key_becomes_sentinel() {
    setup();
    let state = resource_state(None, vec![identity("k1")]);

    let providers = state_to_providers(&state);

    assert_eq!(
        providers,
        vec![
            ProviderConfiguration::identity(),
            ProviderConfiguration::aesgcm(Key::new("k1", empty_static_identity_key())),
        ]
    );
}

#[test]
fn identity_write_key_emits_leading_placeholder() {
    setup();
    let state = resource_state(Some(identity("k4")), vec![identity("k4"), aescbc("k3")]);

    let providers = state_to_providers(&state);

    assert_eq!(
        providers,
        vec![
            ProviderConfiguration::identity(),
            ProviderConfiguration::aescbc(aescbc("k3").key),
            ProviderConfiguration::aesgcm(Key::new("k4", empty_static_identity_key())),
        ]
    );
}

#[test]
fn sentinels_follow_encounter_order_after_fallback() {
    setup();
    let state = resource_state(
        Some(aescbc("k5")),
        vec![aescbc("k5"), identity("k4"), secretbox("k3"), identity("k2")],
    );

    let providers = state_to_providers(&state);

    assert_eq!(
        providers,
        vec![
            ProviderConfiguration::aescbc(aescbc("k5").key),
            ProviderConfiguration::secretbox(secretbox("k3").key),
            ProviderConfiguration::identity(),
            ProviderConfiguration::aesgcm(Key::new("k4", empty_static_identity_key())),
            ProviderConfiguration::aesgcm(Key::new("k2", empty_static_identity_key())),
        ]
    );
}

#[test]
fn write_key_is_moved_to_front_and_deduplicated() {
    setup();
    // write key listed last among read keys, and listed twice
    let state = resource_state(
        Some(aescbc("k2")),
        vec![aescbc("k3"), aescbc("k2"), aescbc("k2")],
    );

    let providers = state_to_providers(&state);

    assert_eq!(
        providers,
        vec![
            ProviderConfiguration::aescbc(aescbc("k2").key),
            ProviderConfiguration::aescbc(aescbc("k3").key),
            ProviderConfiguration::identity(),
        ]
    );
}

#[test]
fn write_key_missing_from_read_keys_is_still_emitted() {
    let state = resource_state(Some(secretbox("k9")), vec![]);

    let providers = state_to_providers(&state);

    assert_eq!(
        providers,
        vec![
            ProviderConfiguration::secretbox(secretbox("k9").key),
            ProviderConfiguration::identity(),
        ]
    );
}

#[test]
fn sentinel_secret_ignores_stored_secret() {
    let mut odd = identity("k1");
    odd.key.secret = "c29tZXRoaW5nLWVsc2U=".into();
    let state = resource_state(None, vec![odd]);

    let providers = state_to_providers(&state);

    let sentinel = providers[1].aesgcm.as_ref().expect("sentinel provider");
    assert_eq!(sentinel.keys, vec![Key::new("k1", empty_static_identity_key())]);
}

#[test]
fn encode_sorts_resources_and_names_one_each() {
    setup();
    let mut map = ResourceMap::new();
    map.insert(
        GroupResource::parse("secrets"),
        resource_state(Some(aescbc("k1")), vec![aescbc("k1")]),
    );
    map.insert(
        GroupResource::parse("configmaps"),
        resource_state(None, vec![]),
    );
    map.insert(
        GroupResource::parse("routes.route.openshift.io"),
        resource_state(None, vec![identity("k2")]),
    );
    map.insert(
        GroupResource::parse("deployments.apps"),
        resource_state(Some(secretbox("k3")), vec![secretbox("k3")]),
    );

    let config = encode(&map);

    let resources: Vec<&[String]> = config
        .resources
        .iter()
        .map(|r| r.resources.as_slice())
        .collect();
    assert_eq!(
        resources,
        vec![
            &["configmaps".to_string()][..],
            &["deployments.apps".to_string()][..],
            &["routes.route.openshift.io".to_string()][..],
            &["secrets".to_string()][..],
        ]
    );
    assert_eq!(config.kind, "EncryptionConfiguration");
    assert_eq!(config.api_version, "apiserver.config.k8s.io/v1");
}

#[test]
fn encode_is_independent_of_input_order() {
    let a = (GroupResource::parse("secrets"), resource_state(None, vec![]));
    let b = (GroupResource::parse("configmaps"), resource_state(None, vec![]));

    let forward = encode([(&a.0, &a.1), (&b.0, &b.1)]);
    let backward = encode([(&b.0, &b.1), (&a.0, &a.1)]);

    assert_eq!(forward, backward);
    assert_eq!(forward.resources[0].resources, vec!["configmaps".to_string()]);
}

#[test]
fn encode_of_empty_map_has_no_resources() {
    let config = encode(&ResourceMap::new());
    assert!(config.resources.is_empty());
}
