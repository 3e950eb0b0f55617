//! Property-based tests for default resolution

use proptest::prelude::*;
use service_config::{BearerToken, ServiceConfig, ServiceDiscoveryConfig, SslConfiguration};
use std::collections::BTreeMap;

fn arb_token() -> impl Strategy<Value = Option<BearerToken>> {
    proptest::option::of("[A-Za-z0-9]{1,12}".prop_map(BearerToken::new))
}

fn arb_security() -> impl Strategy<Value = Option<SslConfiguration>> {
    proptest::option::of("/etc/ssl/[a-z]{1,8}\\.pem".prop_map(SslConfiguration::trust_only))
}

fn arb_service() -> impl Strategy<Value = ServiceConfig> {
    (
        proptest::collection::vec("https?://[a-z]{1,8}(:[0-9]{2,4})?", 0..4),
        arb_token(),
        arb_security(),
    )
        .prop_map(|(uris, api_token, security)| ServiceConfig {
            uris,
            api_token,
            security,
        })
}

fn arb_services() -> impl Strategy<Value = BTreeMap<String, ServiceConfig>> {
    proptest::collection::btree_map("[a-z][a-z0-9-]{0,10}", arb_service(), 0..8)
}

fn build(
    default_token: &Option<BearerToken>,
    default_security: &Option<SslConfiguration>,
    services: &BTreeMap<String, ServiceConfig>,
) -> ServiceDiscoveryConfig {
    let mut builder = ServiceDiscoveryConfig::builder();
    if let Some(token) = default_token {
        builder = builder.default_api_token(token.clone());
    }
    if let Some(security) = default_security {
        builder = builder.default_security(security.clone());
    }
    builder.services(services.clone()).build().unwrap()
}

proptest! {
    #[test]
    fn effective_keys_equal_input_keys(
        default_token in arb_token(),
        default_security in arb_security(),
        services in arb_services(),
    ) {
        let registry = build(&default_token, &default_security, &services);
        let effective: Vec<&String> = registry.services().keys().collect();
        let input: Vec<&String> = services.keys().collect();
        prop_assert_eq!(effective, input);
    }

    #[test]
    fn present_value_wins_else_default(
        default_token in arb_token(),
        default_security in arb_security(),
        services in arb_services(),
    ) {
        let registry = build(&default_token, &default_security, &services);
        for (name, raw) in &services {
            let expected_token = raw.api_token.as_ref().or(default_token.as_ref());
            let expected_security = raw.security.as_ref().or(default_security.as_ref());
            prop_assert_eq!(registry.api_token(name).unwrap(), expected_token);
            prop_assert_eq!(registry.security(name).unwrap(), expected_security);
        }
    }

    #[test]
    fn uris_are_copied_verbatim(
        default_token in arb_token(),
        services in arb_services(),
    ) {
        let registry = build(&default_token, &None, &services);
        for (name, raw) in &services {
            prop_assert_eq!(registry.uris(name).unwrap(), raw.uris.as_slice());
        }
    }

    #[test]
    fn unknown_names_are_not_found(
        services in arb_services(),
        unknown in "[A-Z]{1,6}",
    ) {
        // generated service names are lower-case, so an upper-case name never matches
        let registry = build(&None, &None, &services);
        prop_assert!(registry.api_token(&unknown).is_err());
        prop_assert!(registry.security(&unknown).is_err());
        prop_assert!(registry.uris(&unknown).is_err());
    }

    #[test]
    fn serialized_document_round_trips(
        default_token in arb_token(),
        default_security in arb_security(),
        services in arb_services(),
    ) {
        let registry = build(&default_token, &default_security, &services);
        let json = serde_json::to_string(&registry).unwrap();
        let reparsed: ServiceDiscoveryConfig = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(reparsed, registry);
    }
}
