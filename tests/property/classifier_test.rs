//! Property-based tests for category detection.
//!
//! Detection must be total and deterministic: any input yields exactly one
//! of the known labels, and the color mapping covers every label it can
//! produce.

use proptest::prelude::*;

use linkstash::services::category_service::{category_color, classify};

const KNOWN_LABELS: &[&str] = &[
    "Video",
    "Music",
    "Development",
    "Jobs",
    "Shopping",
    "Social",
    "Email",
    "Productivity",
    "News",
    "Learning",
    "Travel",
    "Other",
];

/// Strategy for arbitrary host-shaped strings, including ones no rule matches.
fn arb_host() -> impl Strategy<Value = String> {
    (
        "[a-z][a-z0-9-]{1,20}",
        prop_oneof![Just(".com"), Just(".org"), Just(".tv"), Just(".example")],
    )
        .prop_map(|(label, tld)| format!("{}{}", label, tld))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn classification_is_total(host in arb_host()) {
        let label = classify(&format!("https://{}", host));
        prop_assert!(
            KNOWN_LABELS.contains(&label.as_str()),
            "unexpected label {:?} for host {}",
            label,
            host
        );
    }

    #[test]
    fn classification_is_deterministic(host in arb_host()) {
        let url = format!("https://{}", host);
        prop_assert_eq!(classify(&url), classify(&url));
    }

    #[test]
    fn every_produced_label_has_its_own_color(host in arb_host()) {
        let label = classify(&format!("https://{}", host));
        let color = category_color(&label);
        prop_assert!(color.starts_with('#') && color.len() == 7);
        // The fallback color belongs to exactly one label
        if color == category_color("Other") {
            prop_assert_eq!(label, "Other");
        }
    }
}
