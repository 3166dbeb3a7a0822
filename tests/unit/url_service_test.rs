//! Unit tests for URL normalization, validation, and derivation helpers.

use linkstash::services::url_service::{
    domain, favicon_url, is_valid, normalize, suggested_title,
};

// === normalize ===

#[test]
fn normalize_prepends_https_when_scheme_missing() {
    assert_eq!(normalize("github.com"), "https://github.com");
    assert_eq!(
        normalize("reddit.com/r/rust"),
        "https://reddit.com/r/rust"
    );
}

#[test]
fn normalize_keeps_existing_scheme() {
    assert_eq!(normalize("https://github.com"), "https://github.com");
    assert_eq!(normalize("http://example.org"), "http://example.org");
    assert_eq!(normalize("ftp://files.example.com"), "ftp://files.example.com");
}

#[test]
fn normalize_is_idempotent() {
    let once = normalize("youtube.com");
    assert_eq!(normalize(&once), once);
}

#[test]
fn normalize_applies_no_other_transformation() {
    // No lowercasing, no trailing-slash removal
    assert_eq!(normalize("GitHub.com/Path/"), "https://GitHub.com/Path/");
}

#[test]
fn normalize_leaves_empty_input_untouched() {
    assert_eq!(normalize(""), "");
}

// === is_valid ===

#[test]
fn is_valid_accepts_normalized_urls() {
    assert!(is_valid("https://github.com"));
    assert!(is_valid(&normalize("example.org")));
}

#[test]
fn is_valid_rejects_unparseable_input() {
    assert!(!is_valid("not a url"));
    assert!(!is_valid(""));
    assert!(!is_valid("https://"));
}

#[test]
fn is_valid_requires_a_host() {
    // Parses as a URL but has no host component
    assert!(!is_valid("mailto:someone@example.com"));
}

// === domain ===

#[test]
fn domain_returns_host() {
    assert_eq!(domain("https://github.com/rust-lang"), Some("github.com".to_string()));
}

#[test]
fn domain_strips_a_single_leading_www() {
    assert_eq!(domain("https://www.github.com"), Some("github.com".to_string()));
    // Only one www. is stripped
    assert_eq!(
        domain("https://www.www.example.com"),
        Some("www.example.com".to_string())
    );
}

#[test]
fn domain_soft_fails_to_none() {
    assert_eq!(domain("not a url"), None);
    assert_eq!(domain(""), None);
}

// === favicon_url ===

#[test]
fn favicon_url_builds_icon_service_request() {
    assert_eq!(
        favicon_url("https://www.github.com/rust-lang"),
        Some("https://www.google.com/s2/favicons?domain=github.com&sz=128".to_string())
    );
}

#[test]
fn favicon_url_soft_fails_to_none() {
    assert_eq!(favicon_url("not a url"), None);
}

// === suggested_title ===

#[test]
fn suggested_title_capitalizes_site_label() {
    assert_eq!(suggested_title("https://www.github.com"), "Github");
    assert_eq!(suggested_title("https://news.ycombinator.com"), "Ycombinator");
}

#[test]
fn suggested_title_falls_back_to_bare_domain() {
    assert_eq!(suggested_title("https://localhost"), "localhost");
}

#[test]
fn suggested_title_falls_back_to_untitled() {
    assert_eq!(suggested_title("not a url"), "Untitled");
}
