//! Changelog feeds.
//!
//! - **JSON** (`changelog.json`): every entry, newest first.
//! - **RSS 2.0** (`feed.xml`): the ten most recent entries.
//!
//! Both are pure functions of the parsed changelog and the site config.

mod json;
mod rss;

pub use json::{json_feed, render_json_feed, JsonFeed, JsonFeedItem};
pub use rss::{item_description, render_rss, RSS_ITEM_LIMIT};

use crate::config::SiteConfig;

/// Anchor on the changelog page for a version, e.g. `<site>/changelog/#v1.2.0`.
pub fn release_url(config: &SiteConfig, version: &str) -> String {
    format!("{}/changelog/#v{}", config.site_url, version)
}
