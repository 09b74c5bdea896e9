use std::fmt;

use serde::{Deserialize, Serialize};

/// Summary text used when the latest entry has nothing to headline.
pub const DEFAULT_RELEASE_SUMMARY: &str = "New release";

/// Printed by `latest` when the changelog has no releases.
pub const NO_RELEASES: &str = "No releases found";

/// Date recorded for a release heading without a `YYYY-MM-DD` date.
pub const UNDATED: &str = "TBD";

/// One released version from the changelog.
///
/// Each change list is present only when it has at least one item; a parsed
/// entry always has at least one of the four.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangelogEntry {
    pub version: String,
    /// ISO date (`YYYY-MM-DD`) or [`UNDATED`].
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changed: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub removed: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed: Option<Vec<String>>,
}

impl ChangelogEntry {
    /// Create an entry with no changes recorded yet.
    pub fn new(version: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            date: date.into(),
            added: None,
            changed: None,
            removed: None,
            fixed: None,
        }
    }

    /// Items listed under the given section, empty if the section is absent.
    pub fn changes(&self, kind: ChangeKind) -> &[String] {
        let list = match kind {
            ChangeKind::Added => &self.added,
            ChangeKind::Changed => &self.changed,
            ChangeKind::Removed => &self.removed,
            ChangeKind::Fixed => &self.fixed,
        };
        list.as_deref().unwrap_or_default()
    }

    /// Store a section's items. An empty list leaves the section absent.
    pub fn set_changes(&mut self, kind: ChangeKind, items: Vec<String>) {
        let value = if items.is_empty() { None } else { Some(items) };
        match kind {
            ChangeKind::Added => self.added = value,
            ChangeKind::Changed => self.changed = value,
            ChangeKind::Removed => self.removed = value,
            ChangeKind::Fixed => self.fixed = value,
        }
    }

    pub fn has_changes(&self) -> bool {
        ChangeKind::ALL
            .iter()
            .any(|kind| !self.changes(*kind).is_empty())
    }
}

/// The changelog sections recognised inside a release block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    Added,
    Changed,
    Removed,
    Fixed,
}

impl ChangeKind {
    pub const ALL: [ChangeKind; 4] = [Self::Added, Self::Changed, Self::Removed, Self::Fixed];

    /// Heading text as written after `### ` in the changelog.
    pub fn heading(&self) -> &'static str {
        match self {
            Self::Added => "Added",
            Self::Changed => "Changed",
            Self::Removed => "Removed",
            Self::Fixed => "Fixed",
        }
    }

    /// Match a heading exactly (section names are case-sensitive).
    pub fn from_heading(s: &str) -> Option<Self> {
        match s {
            "Added" => Some(Self::Added),
            "Changed" => Some(Self::Changed),
            "Removed" => Some(Self::Removed),
            "Fixed" => Some(Self::Fixed),
            _ => None,
        }
    }
}

/// Result of parsing a changelog: entries newest first, as written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedChangelog {
    pub entries: Vec<ChangelogEntry>,
    pub latest_version: Option<String>,
    pub latest_date: Option<String>,
}

impl ParsedChangelog {
    pub fn new(entries: Vec<ChangelogEntry>) -> Self {
        let latest_version = entries.first().map(|e| e.version.clone());
        let latest_date = entries.first().map(|e| e.date.clone());
        Self {
            entries,
            latest_version,
            latest_date,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The most recent entry (the first one in the document).
    pub fn latest(&self) -> Option<&ChangelogEntry> {
        self.entries.first()
    }

    /// Headline for the "what's new" banner, built from the latest entry.
    pub fn release_summary(&self) -> Option<ReleaseSummary> {
        self.latest().map(ReleaseSummary::from_entry)
    }

    /// One-line description of the latest release, or [`NO_RELEASES`].
    pub fn latest_line(&self) -> String {
        match self.release_summary() {
            Some(summary) => summary.to_string(),
            None => NO_RELEASES.to_string(),
        }
    }
}

/// Compact view of a release for banners and the `latest` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseSummary {
    pub version: String,
    pub date: String,
    /// First added item, else first changed, else first fixed.
    pub summary: String,
    /// Number of added, changed and fixed items. Removals are not counted.
    pub change_count: usize,
}

impl ReleaseSummary {
    pub fn from_entry(entry: &ChangelogEntry) -> Self {
        let headline = [ChangeKind::Added, ChangeKind::Changed, ChangeKind::Fixed];

        let summary = headline
            .iter()
            .find_map(|kind| entry.changes(*kind).first())
            .cloned()
            .unwrap_or_else(|| DEFAULT_RELEASE_SUMMARY.to_string());

        let change_count = headline
            .iter()
            .map(|kind| entry.changes(*kind).len())
            .sum();

        Self {
            version: entry.version.clone(),
            date: entry.date.clone(),
            summary,
            change_count,
        }
    }
}

impl fmt::Display for ReleaseSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "v{} ({}) - {} [{} changes]",
            self.version, self.date, self.summary, self.change_count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn set_changes_with_empty_list_leaves_section_absent() {
        let mut entry = ChangelogEntry::new("1.0.0", "2025-01-01");
        entry.set_changes(ChangeKind::Fixed, Vec::new());
        assert!(entry.fixed.is_none());
        assert!(!entry.has_changes());
    }

    #[test]
    fn summary_prefers_added_then_changed_then_fixed() {
        let mut entry = ChangelogEntry::new("1.0.0", "2025-01-01");
        entry.set_changes(ChangeKind::Fixed, items(&["Crash on load"]));
        entry.set_changes(ChangeKind::Changed, items(&["Faster palette"]));

        let summary = ReleaseSummary::from_entry(&entry);
        assert_eq!(summary.summary, "Faster palette");
        assert_eq!(summary.change_count, 2);
    }

    #[test]
    fn summary_ignores_removals() {
        let mut entry = ChangelogEntry::new("1.0.0", "TBD");
        entry.set_changes(ChangeKind::Removed, items(&["Old menu", "Legacy hotkeys"]));

        let summary = ReleaseSummary::from_entry(&entry);
        assert_eq!(summary.summary, DEFAULT_RELEASE_SUMMARY);
        assert_eq!(summary.change_count, 0);
    }

    #[test]
    fn absent_sections_are_not_serialized() {
        let mut entry = ChangelogEntry::new("0.2.0", "2025-12-30");
        entry.set_changes(ChangeKind::Added, items(&["Thing"]));

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["added"], serde_json::json!(["Thing"]));
        assert!(json.get("changed").is_none());
        assert!(json.get("removed").is_none());
        assert!(json.get("fixed").is_none());
    }
}
