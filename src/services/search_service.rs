//! Pure queries over a link collection snapshot: text search, category
//! grouping, and ordering. These run on every render pass, so they borrow
//! the collection instead of cloning it.

use std::collections::BTreeMap;

use crate::types::link::Link;

/// Case-insensitive substring search across title, url, and category.
///
/// A link matches when any one of the three fields contains the query. An
/// empty or whitespace-only query matches everything. Collection order is
/// preserved.
pub fn search_links<'a>(links: &'a [Link], query: &str) -> Vec<&'a Link> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return links.iter().collect();
    }

    links
        .iter()
        .filter(|link| {
            link.title.to_lowercase().contains(&needle)
                || link.url.to_lowercase().contains(&needle)
                || link.category.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Stable partition of links by category.
///
/// Within each group the input order (most-recent-first for a collection
/// snapshot) is preserved; a category key exists iff at least one link
/// currently holds it. The `BTreeMap` iterates keys lexicographically,
/// which is exactly the group ordering the rendered view presents.
pub fn group_by_category<'a, I>(links: I) -> BTreeMap<&'a str, Vec<&'a Link>>
where
    I: IntoIterator<Item = &'a Link>,
{
    let mut groups: BTreeMap<&str, Vec<&Link>> = BTreeMap::new();
    for link in links {
        groups.entry(link.category.as_str()).or_default().push(link);
    }
    groups
}

/// Distinct category names currently in use, lexicographic.
///
/// Categories are derived, never stored: one with no remaining links
/// simply does not appear.
pub fn category_names(links: &[Link]) -> Vec<String> {
    group_by_category(links)
        .keys()
        .map(|name| name.to_string())
        .collect()
}

/// Sorts links newest-first by creation time.
pub fn sort_links_by_date(links: &mut [Link]) {
    links.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}
