use speculate2::speculate;
use tajs_docs::content::{load_changelog, parse_changelog};
use tajs_docs::models::*;

const CHANGELOG: &str = "\
# Changelog

All notable changes to this project will be documented in this file.

## [Unreleased]
### Added
- Screenshot gallery

## [0.3.0] - 2026-02-14
### Fixed
- Palette closing on right click
### Added
- Custom keybinds
- Theme presets
### Removed
- Legacy settings page

## [0.2.1]
### Changed
* Faster group rendering

## [0.2.0] - 2025-12-30
### Added
- N/A
### Fixed
-

## [0.1.0] - 2025-11-01
### Added
- Initial release
";

fn strings(values: &[&str]) -> Option<Vec<String>> {
    Some(values.iter().map(|s| s.to_string()).collect())
}

speculate! {
    describe "parse_changelog" {
        before {
            let parsed = parse_changelog(CHANGELOG);
        }

        it "keeps document order with newest first" {
            let versions: Vec<&str> = parsed.entries.iter().map(|e| e.version.as_str()).collect();
            assert_eq!(versions, vec!["0.3.0", "0.2.1", "0.1.0"]);
        }

        it "never includes the unreleased block" {
            assert!(parsed
                .entries
                .iter()
                .all(|e| !e.version.eq_ignore_ascii_case("unreleased")));
        }

        it "drops entries with only placeholder sections" {
            assert!(parsed.entries.iter().all(|e| e.version != "0.2.0"));
        }

        it "reads sections in any order" {
            let entry = &parsed.entries[0];
            assert_eq!(entry.date, "2026-02-14");
            assert_eq!(entry.added, strings(&["Custom keybinds", "Theme presets"]));
            assert_eq!(entry.fixed, strings(&["Palette closing on right click"]));
            assert_eq!(entry.removed, strings(&["Legacy settings page"]));
            assert!(entry.changed.is_none());
        }

        it "defaults a missing date to TBD" {
            let entry = &parsed.entries[1];
            assert_eq!(entry.date, UNDATED);
            assert_eq!(entry.changed, strings(&["Faster group rendering"]));
        }

        it "exposes the latest version and date" {
            assert_eq!(parsed.latest_version.as_deref(), Some("0.3.0"));
            assert_eq!(parsed.latest_date.as_deref(), Some("2026-02-14"));
            assert_eq!(parsed.latest().map(|e| e.version.as_str()), Some("0.3.0"));
        }
    }

    describe "single release" {
        it "yields exactly the listed item and drops placeholders" {
            let parsed = parse_changelog("## [1.2.0] - 2025-01-01\n### Added\n- Thing one\n- N/A\n");

            let mut expected = ChangelogEntry::new("1.2.0", "2025-01-01");
            expected.added = strings(&["Thing one"]);
            assert_eq!(parsed.entries, vec![expected]);
        }

        it "skips blank lines inside a section" {
            let parsed = parse_changelog("## [1.0.0] - 2025-01-01\n### Fixed\n\n- One\n\n- Two\n");
            assert_eq!(parsed.entries[0].fixed, strings(&["One", "Two"]));
        }

        it "treats unreleased case-insensitively" {
            let parsed = parse_changelog("## [UNRELEASED]\n### Added\n- Soon\n");
            assert!(parsed.is_empty());
        }

        it "matches section names case-sensitively" {
            let parsed = parse_changelog("## [1.0.0] - 2025-01-01\n### added\n- Lowercase\n");
            assert!(parsed.is_empty());
        }

        it "stops a section at the next third-level heading" {
            let parsed = parse_changelog(
                "## [1.0.0] - 2025-01-01\n### Added\n- Kept\n### Security\n- Not captured\n",
            );
            assert_eq!(parsed.entries[0].added, strings(&["Kept"]));
        }

        it "keeps the first of repeated section headings" {
            let parsed = parse_changelog(
                "## [1.0.0] - 2025-01-01\n### Added\n- First\n### Added\n- Second\n",
            );
            assert_eq!(parsed.entries[0].added, strings(&["First"]));
        }

        it "preserves duplicate versions in document order" {
            let parsed = parse_changelog(
                "## [1.0.0] - 2025-02-01\n### Added\n- B\n## [1.0.0] - 2025-01-01\n### Added\n- A\n",
            );
            let dates: Vec<&str> = parsed.entries.iter().map(|e| e.date.as_str()).collect();
            assert_eq!(dates, vec!["2025-02-01", "2025-01-01"]);
        }

        it "skips a block with a malformed heading and keeps the rest" {
            let parsed = parse_changelog(
                "## [broken heading\n### Added\n- Lost\n## [1.0.0] - 2025-01-01\n### Added\n- Kept\n",
            );
            assert_eq!(parsed.entries.len(), 1);
            assert_eq!(parsed.entries[0].version, "1.0.0");
        }

        it "ignores text before the first release" {
            let parsed = parse_changelog("### Added\n- Preamble\n");
            assert!(parsed.is_empty());
            assert!(parsed.latest_version.is_none());
        }
    }

    describe "release_summary" {
        it "summarises the most recent entry" {
            let summary = parse_changelog(CHANGELOG).release_summary().expect("has entries");

            assert_eq!(summary.version, "0.3.0");
            assert_eq!(summary.summary, "Custom keybinds");
            assert_eq!(summary.change_count, 3);
        }

        it "is None for an empty changelog" {
            assert!(parse_changelog("").release_summary().is_none());
        }

        it "formats the latest line" {
            assert_eq!(
                parse_changelog(CHANGELOG).latest_line(),
                "v0.3.0 (2026-02-14) - Custom keybinds [3 changes]"
            );
        }

        it "reports no releases for an empty changelog" {
            assert_eq!(parse_changelog("## [Unreleased]\n### Added\n- Soon\n").latest_line(), NO_RELEASES);
            assert_eq!(NO_RELEASES, "No releases found");
        }
    }

    describe "load_changelog" {
        it "returns an empty result for a missing file" {
            let dir = tempfile::tempdir().expect("Failed to create temp dir");
            let parsed = load_changelog(&dir.path().join("CHANGELOG.md"));

            assert_eq!(parsed, ParsedChangelog::default());
        }

        it "parses the file on every call" {
            let dir = tempfile::tempdir().expect("Failed to create temp dir");
            let path = dir.path().join("CHANGELOG.md");

            std::fs::write(&path, "## [1.0.0] - 2025-01-01\n### Added\n- One\n").unwrap();
            assert_eq!(load_changelog(&path).latest_version.as_deref(), Some("1.0.0"));

            std::fs::write(&path, "## [1.1.0] - 2025-02-01\n### Added\n- Two\n").unwrap();
            assert_eq!(load_changelog(&path).latest_version.as_deref(), Some("1.1.0"));
        }

        it "replaces invalid UTF-8 instead of dropping the file" {
            let dir = tempfile::tempdir().expect("Failed to create temp dir");
            let path = dir.path().join("CHANGELOG.md");
            std::fs::write(&path, b"## [1.0.0] - 2025-01-01\n### Added\n- Caf\xE9 menu\n- Second item\n").unwrap();

            let parsed = load_changelog(&path);
            assert_eq!(parsed.entries.len(), 1);
            assert_eq!(parsed.entries[0].added, strings(&["Caf\u{FFFD} menu", "Second item"]));
        }
    }
}
