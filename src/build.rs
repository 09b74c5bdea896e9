//! One-shot generation of every site data file into an output directory.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::SiteConfig;
use crate::content::{load_changelog, LicenseParser, ScreenshotScanner};
use crate::error::{DocsError, Result};
use crate::feed::{render_json_feed, render_rss};

pub const CHANGELOG_JSON: &str = "changelog.json";
pub const RSS_FEED: &str = "feed.xml";
pub const LATEST_JSON: &str = "latest.json";
pub const LICENSE_JSON: &str = "license.json";
pub const SCREENSHOTS_JSON: &str = "screenshots.json";

/// What a build produced.
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub files: Vec<PathBuf>,
    pub releases: usize,
    pub license_sections: usize,
    pub screenshots: usize,
}

/// Parse all sources named by `config` and write the feeds and JSON records
/// into `out_dir`, creating it if needed.
///
/// Missing sources never fail the build; they produce empty or default
/// output. `latest.json` is only written when the changelog has entries.
pub fn build_site(
    config: &SiteConfig,
    out_dir: &Path,
    build_time: DateTime<Utc>,
) -> Result<BuildReport> {
    std::fs::create_dir_all(out_dir).map_err(|source| DocsError::Write {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let changelog = load_changelog(&config.changelog_path);
    let license = LicenseParser::new(config.default_copyright.clone()).load(&config.license_path);
    let screenshots = ScreenshotScanner::from_config(config).scan();

    let mut files = Vec::new();
    let mut write = |name: &str, contents: String| -> Result<()> {
        let path = out_dir.join(name);
        std::fs::write(&path, contents).map_err(|source| DocsError::Write {
            path: path.clone(),
            source,
        })?;
        tracing::debug!("Wrote {}", path.display());
        files.push(path);
        Ok(())
    };

    write(CHANGELOG_JSON, render_json_feed(&changelog, config)?)?;
    write(RSS_FEED, render_rss(&changelog, config, build_time)?)?;
    if let Some(summary) = changelog.release_summary() {
        write(LATEST_JSON, to_json(&summary)?)?;
    }
    write(LICENSE_JSON, to_json(&license)?)?;
    write(SCREENSHOTS_JSON, to_json(&screenshots)?)?;

    let report = BuildReport {
        files,
        releases: changelog.entries.len(),
        license_sections: license.sections.len(),
        screenshots: screenshots.len(),
    };
    tracing::info!(
        "Built {} files ({} releases, {} license sections, {} screenshots) in {}",
        report.files.len(),
        report.releases,
        report.license_sections,
        report.screenshots,
        out_dir.display()
    );
    Ok(report)
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
