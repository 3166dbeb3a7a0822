//! Property-based tests for URL normalization.
//!
//! Verify that normalization prepends a scheme exactly once, is idempotent,
//! and always yields a URL that passes validation for well-formed hosts.

use proptest::prelude::*;

use linkstash::services::url_service::{is_valid, normalize};

/// Strategy for scheme-less host inputs with an optional path.
fn arb_schemeless() -> impl Strategy<Value = String> {
    (
        "[a-z][a-z0-9]{2,15}",
        prop_oneof![Just(".com"), Just(".org"), Just(".net"), Just(".io")],
        proptest::option::of("/[a-z0-9]{1,10}"),
    )
        .prop_map(|(host, tld, path)| format!("{}{}{}", host, tld, path.unwrap_or_default()))
}

/// Strategy for inputs that already carry a scheme.
fn arb_with_scheme() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just("https"), Just("http"), Just("ftp")],
        "[a-z][a-z0-9]{2,15}",
        prop_oneof![Just(".com"), Just(".org")],
    )
        .prop_map(|(scheme, host, tld)| format!("{}://{}{}", scheme, host, tld))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn schemeless_input_gets_https_exactly_once(raw in arb_schemeless()) {
        let normalized = normalize(&raw);
        prop_assert_eq!(&normalized, &format!("https://{}", raw));
        prop_assert!(!normalized[8..].contains("://"), "scheme prepended twice: {}", normalized);
    }

    #[test]
    fn normalize_is_idempotent(raw in arb_schemeless()) {
        let once = normalize(&raw);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn scheme_carrying_input_is_untouched(url in arb_with_scheme()) {
        prop_assert_eq!(normalize(&url), url);
    }

    #[test]
    fn normalized_wellformed_hosts_validate(raw in arb_schemeless()) {
        prop_assert!(is_valid(&normalize(&raw)));
    }
}
