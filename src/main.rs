//! linkstash — a personal bookmark manager with automatic link categorization.
//!
//! Entry point: runs a console walkthrough of the engine against an
//! in-memory database.

use linkstash::app::App;
use linkstash::managers::link_manager::LinkManagerTrait;
use linkstash::services::{category_service, url_service};
use linkstash::store::{LinkStore, SnapshotStore};
use linkstash::types::link::LinkPatch;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    println!();
    println!("╔══════════════════════════════════════════════════════════╗");
    println!("║            linkstash v{} — Demo Mode                  ║", env!("CARGO_PKG_VERSION"));
    println!("║     Save links, get them organized automatically        ║");
    println!("╚══════════════════════════════════════════════════════════╝");
    println!();

    demo_classifier();
    demo_collection();
    demo_snapshot_store();

    println!();
    println!("═══════════════════════════════════════════════════════════");
    println!("  ✅ Demo complete.");
    println!("═══════════════════════════════════════════════════════════");
}

fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────");
    println!("  📦 {}", name);
    println!("───────────────────────────────────────────────────────────");
}

fn demo_classifier() {
    section("URL Normalization & Category Detection");

    for raw in ["github.com", "www.youtube.com/watch?v=x", "example.org"] {
        let url = url_service::normalize(raw);
        let category = category_service::classify(&url);
        let color = category_service::category_color(&category);
        println!(
            "  {:<28} → {:<24} [{} {}]",
            raw,
            url,
            category,
            color
        );
    }
    println!();
}

fn demo_collection() {
    section("Link Collection (SQLite, in-memory)");

    let mut app = App::open_in_memory().expect("failed to open in-memory database");

    for raw in [
        "github.com/rust-lang/rust",
        "https://www.youtube.com/feed/subscriptions",
        "spotify.com",
        "reddit.com/r/rust",
        "example.org",
    ] {
        let link = app.links.add_link(raw, None, None).expect("add failed");
        println!("  + {:<16} {:<40} ({})", link.title, link.url, link.category);
    }

    println!();
    println!("  Search \"rust\":");
    for link in app.links.search("rust") {
        println!("    · {} — {}", link.title, link.url);
    }

    println!();
    println!("  Grouped by category:");
    for (category, members) in app.links.grouped() {
        println!("    {} ({})", category, members.len());
    }

    let moved = app
        .links
        .rename_category("Social", "Forums")
        .expect("rename failed");
    println!();
    println!("  Renamed Social → Forums ({} link(s) moved)", moved);
    println!("  Categories now: {}", app.links.categories().join(", "));

    // Edit the last-added link's title
    if let Some(id) = app.links.links().first().map(|l| l.id.clone()) {
        let patch = LinkPatch {
            title: Some("Example".to_string()),
            ..Default::default()
        };
        app.links.update_link(&id, patch).expect("update failed");
        println!("  Retitled {} → Example", id);
    }
    println!();
}

fn demo_snapshot_store() {
    section("JSON Snapshot Fallback");

    let path = std::env::temp_dir().join("linkstash_demo_snapshot.json");
    let mut store = SnapshotStore::open(&path).expect("failed to open snapshot");
    let draft = linkstash::types::link::LinkDraft {
        url: "https://news.ycombinator.com".to_string(),
        title: "Hacker News".to_string(),
        category: "News".to_string(),
        favicon: url_service::favicon_url("https://news.ycombinator.com"),
    };
    let link = store.insert(&draft).expect("snapshot insert failed");
    println!("  Wrote {} link(s) to {}", store.list_all().map(|l| l.len()).unwrap_or(0), path.display());

    store.delete_by_id(&link.id).expect("snapshot delete failed");
    std::fs::remove_file(&path).ok();
    println!("  Cleaned up demo snapshot");
    println!();
}
