//! URL helpers: normalization, validation, domain extraction, favicon
//! resolution, and best-effort title derivation.
//!
//! Domain and favicon extraction soft-fail to `None` on unparseable input.
//! Callers that need the original empty-string behavior choose that
//! fallback at the presentation boundary.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;
use url::Url;

/// Matches an explicit scheme prefix such as `https://` or `ftp://`.
static SCHEME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z]+://").unwrap());

/// Base address of the external favicon service. Only ever used to build
/// request URLs; this crate never performs the fetch itself.
pub const FAVICON_SERVICE: &str = "https://www.google.com/s2/favicons";

/// Prepends `https://` when the input carries no scheme of its own.
///
/// No other transformation is applied: no lowercasing, no trailing-slash
/// removal. Idempotent, and leaves empty input untouched (empty submissions
/// are rejected by the caller before normalization).
pub fn normalize(raw: &str) -> String {
    if !raw.is_empty() && !SCHEME_RE.is_match(raw) {
        format!("https://{}", raw)
    } else {
        raw.to_string()
    }
}

/// True iff the string parses as an absolute URL with both a scheme and a
/// host. Syntax only; reachability is never checked.
pub fn is_valid(url: &str) -> bool {
    match Url::parse(url) {
        Ok(parsed) => parsed.has_host(),
        Err(_) => false,
    }
}

/// Extracts the host from a URL, with a single leading `www.` stripped.
///
/// Returns `None` when the input does not parse or has no host component.
pub fn domain(url: &str) -> Option<String> {
    let parsed = match Url::parse(url) {
        Ok(parsed) => parsed,
        Err(err) => {
            debug!(url, %err, "domain extraction failed");
            return None;
        }
    };
    let host = parsed.host_str()?;
    Some(host.strip_prefix("www.").unwrap_or(host).to_string())
}

/// Builds the external favicon-service request URL for a link.
///
/// Pure string construction; `None` when the domain cannot be extracted.
pub fn favicon_url(url: &str) -> Option<String> {
    let domain = domain(url)?;
    Some(format!("{}?domain={}&sz=128", FAVICON_SERVICE, domain))
}

/// Derives a display title from a URL's domain: the capitalized
/// second-level label (`github.com` → `Github`). Falls back to the bare
/// domain, then to `"Untitled"`.
pub fn suggested_title(url: &str) -> String {
    let domain = match domain(url) {
        Some(domain) if !domain.is_empty() => domain,
        _ => return "Untitled".to_string(),
    };

    let parts: Vec<&str> = domain.split('.').collect();
    if parts.len() >= 2 {
        let label = parts[parts.len() - 2];
        let mut chars = label.chars();
        if let Some(first) = chars.next() {
            return first.to_uppercase().collect::<String>() + chars.as_str();
        }
    }
    domain
}
