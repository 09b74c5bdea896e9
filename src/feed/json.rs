use serde::{Deserialize, Serialize};

use super::release_url;
use crate::config::SiteConfig;
use crate::error::Result;
use crate::models::{ChangeKind, ChangelogEntry, ParsedChangelog};

const JSON_FEED_VERSION: &str = "1.0";

/// Body of `changelog.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonFeed {
    pub version: String,
    pub title: String,
    pub home_page_url: String,
    pub feed_url: String,
    pub description: String,
    pub latest_version: Option<String>,
    pub latest_date: Option<String>,
    pub items: Vec<JsonFeedItem>,
}

/// One release in the JSON feed. Absent sections are empty arrays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonFeedItem {
    pub id: String,
    pub version: String,
    pub date: String,
    pub url: String,
    pub added: Vec<String>,
    pub changed: Vec<String>,
    pub fixed: Vec<String>,
    pub removed: Vec<String>,
}

impl JsonFeedItem {
    fn from_entry(entry: &ChangelogEntry, config: &SiteConfig) -> Self {
        Self {
            id: format!("v{}", entry.version),
            version: entry.version.clone(),
            date: entry.date.clone(),
            url: release_url(config, &entry.version),
            added: entry.changes(ChangeKind::Added).to_vec(),
            changed: entry.changes(ChangeKind::Changed).to_vec(),
            fixed: entry.changes(ChangeKind::Fixed).to_vec(),
            removed: entry.changes(ChangeKind::Removed).to_vec(),
        }
    }
}

pub fn json_feed(parsed: &ParsedChangelog, config: &SiteConfig) -> JsonFeed {
    JsonFeed {
        version: JSON_FEED_VERSION.to_string(),
        title: config.feed_title.clone(),
        home_page_url: format!("{}/", config.site_url),
        feed_url: format!("{}/changelog.json", config.site_url),
        description: config.feed_description.clone(),
        latest_version: parsed.latest_version.clone(),
        latest_date: parsed.latest_date.clone(),
        items: parsed
            .entries
            .iter()
            .map(|entry| JsonFeedItem::from_entry(entry, config))
            .collect(),
    }
}

/// Pretty-printed `changelog.json`.
pub fn render_json_feed(parsed: &ParsedChangelog, config: &SiteConfig) -> Result<String> {
    Ok(serde_json::to_string_pretty(&json_feed(parsed, config))?)
}
