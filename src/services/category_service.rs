//! Domain-based category detection and category display colors.
//!
//! Detection evaluates an ordered rule table against the link's domain.
//! Rules are checked top to bottom and the first match wins, so overlapping
//! patterns resolve by position, not specificity.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::services::url_service;

/// Label assigned when no detection rule matches.
pub const FALLBACK_CATEGORY: &str = "Other";

/// Ordered detection rules: (domain pattern, category label).
static CATEGORY_RULES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (r"(youtube|vimeo|dailymotion|netflix|hulu|disney|twitch)", "Video"),
        (r"(spotify|apple.com/music|soundcloud|pandora|deezer|tidal)", "Music"),
        (r"(github|gitlab|stackoverflow|dev.to|medium.com|freecodecamp)", "Development"),
        (r"(linkedin|indeed|glassdoor|monster|ziprecruiter)", "Jobs"),
        (r"(amazon|ebay|etsy|walmart|target|aliexpress|shopify)", "Shopping"),
        (r"(facebook|twitter|instagram|pinterest|reddit|tumblr|tiktok)", "Social"),
        (r"(gmail|outlook|yahoo.com/mail|zoho|protonmail)", "Email"),
        (r"(google.com/docs|office|notion|evernote|onenote|dropbox|drive.google)", "Productivity"),
        (r"(cnn|bbc|nytimes|reuters|bloomberg|wsj|huffpost)", "News"),
        (r"(udemy|coursera|edx|khanacademy|skillshare|pluralsight)", "Learning"),
        (r"(airbnb|booking|expedia|tripadvisor|hotels|kayak)", "Travel"),
    ]
    .iter()
    .map(|(pattern, label)| (Regex::new(pattern).expect("static rule pattern"), *label))
    .collect()
});

/// Pastel display color per category label, with the fallback color last.
const CATEGORY_COLORS: &[(&str, &str)] = &[
    ("Video", "#FFD6E0"),
    ("Music", "#C5FAD5"),
    ("Development", "#D4F1F9"),
    ("Jobs", "#E2BEF1"),
    ("Shopping", "#FFE4C8"),
    ("Social", "#DECDFF"),
    ("Email", "#FFF3CD"),
    ("Productivity", "#B5EAD7"),
    ("News", "#C7CEEA"),
    ("Learning", "#E2F0CB"),
    ("Travel", "#FFCCF9"),
    (FALLBACK_CATEGORY, "#E0E0E0"),
];

/// Detects the category for a URL from its domain.
///
/// Total and deterministic: every input yields exactly one label, and an
/// unparseable URL (empty domain) falls through to [`FALLBACK_CATEGORY`].
pub fn classify(url: &str) -> String {
    let domain = url_service::domain(url).unwrap_or_default();

    for (pattern, label) in CATEGORY_RULES.iter() {
        if pattern.is_match(&domain) {
            return (*label).to_string();
        }
    }

    FALLBACK_CATEGORY.to_string()
}

/// Display color for a category label. Unknown labels get the fallback
/// category's color, so the mapping is total.
pub fn category_color(category: &str) -> &'static str {
    CATEGORY_COLORS
        .iter()
        .find(|(label, _)| *label == category)
        .map(|(_, color)| *color)
        .unwrap_or("#E0E0E0")
}
