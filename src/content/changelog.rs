//! Keep-a-Changelog style `CHANGELOG.md` parsing.
//!
//! ```text
//! ## [0.2.0] - 2025-12-30
//! ### Added
//! - Command palette
//! ### Fixed
//! - N/A
//! ```

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::read_source;
use crate::models::{ChangeKind, ChangelogEntry, ParsedChangelog, UNDATED};

/// Start of every release block. The text before the first match is preamble.
static RELEASE_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^## \[").expect("release start pattern"));

/// `<version>] - <date>` at the start of a block (the `## [` is consumed by the split).
static RELEASE_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([^\]\n]+)\](?: - (\d{4}-\d{2}-\d{2}))?").expect("release header pattern")
});

static SECTION_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^###\s+(Added|Changed|Removed|Fixed)\s*$").expect("section heading pattern")
});

/// `-` with or without following space; `*` only when a space follows, so
/// `**Bold**` items keep their emphasis.
static LIST_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:-|\*(?:\s|$))").expect("list marker pattern"));

const PLACEHOLDERS: [&str; 2] = ["N/A", "-"];

/// Read and parse the changelog at `path`.
///
/// A missing or unreadable file yields an empty result and a warning.
pub fn load_changelog(path: &Path) -> ParsedChangelog {
    match read_source(path) {
        Ok(text) => {
            let parsed = parse_changelog(&text);
            tracing::debug!(
                "Parsed {} changelog entries from {}",
                parsed.entries.len(),
                path.display()
            );
            parsed
        }
        Err(e) => {
            tracing::warn!("Could not read changelog: {}", e);
            ParsedChangelog::default()
        }
    }
}

/// Parse changelog text into entries, newest first as written.
///
/// `Unreleased` blocks, blocks with an unreadable heading, and blocks whose
/// sections hold only placeholders are left out.
pub fn parse_changelog(text: &str) -> ParsedChangelog {
    let entries = RELEASE_START
        .split(text)
        .skip(1)
        .filter_map(parse_release)
        .collect();

    ParsedChangelog::new(entries)
}

fn parse_release(block: &str) -> Option<ChangelogEntry> {
    let header = RELEASE_HEADER.captures(block)?;
    let version = header[1].trim();
    if version.is_empty() || version.eq_ignore_ascii_case("unreleased") {
        return None;
    }
    let date = header.get(2).map_or(UNDATED, |m| m.as_str());

    // First occurrence of each section wins; a repeated heading is ignored.
    let mut sections: Vec<(ChangeKind, Vec<String>)> = Vec::new();
    let mut current: Option<usize> = None;

    for line in block.lines().skip(1) {
        if line.starts_with('#') {
            current = SECTION_HEADING
                .captures(line.trim_end())
                .and_then(|caps| ChangeKind::from_heading(&caps[1]))
                .filter(|kind| !sections.iter().any(|(seen, _)| seen == kind))
                .map(|kind| {
                    sections.push((kind, Vec::new()));
                    sections.len() - 1
                });
            continue;
        }

        if let (Some(index), Some(item)) = (current, list_item(line)) {
            sections[index].1.push(item);
        }
    }

    let mut entry = ChangelogEntry::new(version, date);
    for (kind, items) in sections {
        entry.set_changes(kind, items);
    }

    entry.has_changes().then_some(entry)
}

/// Strip the list marker and surrounding whitespace; `None` for blanks and
/// placeholder lines.
fn list_item(line: &str) -> Option<String> {
    let trimmed = line.trim();
    let item = LIST_MARKER.replace(trimmed, "");
    let item = item.trim();

    if item.is_empty() || PLACEHOLDERS.contains(&item) {
        None
    } else {
        Some(item.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_item_strips_markers_and_placeholders() {
        assert_eq!(list_item("- Thing one"), Some("Thing one".to_string()));
        assert_eq!(list_item("  *   Indented"), Some("Indented".to_string()));
        assert_eq!(list_item("- N/A"), None);
        assert_eq!(list_item("-"), None);
        assert_eq!(list_item("- -"), None);
        assert_eq!(list_item("   "), None);
    }

    #[test]
    fn list_item_strips_dash_without_space() {
        assert_eq!(list_item("-Thing"), Some("Thing".to_string()));
        assert_eq!(list_item("-N/A"), None);
    }

    #[test]
    fn list_item_keeps_leading_emphasis() {
        assert_eq!(
            list_item("**Palette**: opens faster"),
            Some("**Palette**: opens faster".to_string())
        );
    }

    #[test]
    fn header_without_closing_bracket_is_skipped() {
        assert!(parse_release("1.0.0 - 2025-01-01\n### Added\n- Thing\n").is_none());
    }
}
