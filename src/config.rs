//! Site configuration.
//!
//! Loaded from a JSON file (by default `<config dir>/tajs-docs/config.json`),
//! then overridden by environment variables:
//! - `TAJS_DOCS_SITE_URL` - Public base URL of the site
//! - `TAJS_DOCS_CHANGELOG` - Path to `CHANGELOG.md`
//! - `TAJS_DOCS_LICENSE` - Path to `LICENSE.md`
//! - `TAJS_DOCS_SCREENSHOTS` - Screenshots directory

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{read_source, DocsError, Result};
use crate::models::DEFAULT_COPYRIGHT;

const APP_NAME: &str = "tajs-docs";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Base URL without trailing slash, e.g. `https://TajemnikTV.github.io/TajsMod`.
    pub site_url: String,
    /// Product name used in feed item titles ("<project> v1.2.0").
    pub project_name: String,
    pub feed_title: String,
    /// Description for the JSON feed.
    pub feed_description: String,
    /// Channel description for the RSS feed.
    pub rss_description: String,
    pub language: String,
    pub changelog_path: PathBuf,
    pub license_path: PathBuf,
    pub screenshots_dir: PathBuf,
    /// URL path screenshots are served under.
    pub screenshots_url_prefix: String,
    /// Copyright line used when the license has none.
    pub default_copyright: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_url: "https://TajemnikTV.github.io/TajsMod".to_string(),
            project_name: "Taj's Mod".to_string(),
            feed_title: "Taj's Mod Changelog".to_string(),
            feed_description: "Release notes and changelog for Taj's Mod for Upload Labs"
                .to_string(),
            rss_description: "Release notes and updates for Taj's Mod for Upload Labs"
                .to_string(),
            language: "en-us".to_string(),
            changelog_path: PathBuf::from("CHANGELOG.md"),
            license_path: PathBuf::from("LICENSE.md"),
            screenshots_dir: PathBuf::from("public/screenshots"),
            screenshots_url_prefix: "/screenshots".to_string(),
            default_copyright: DEFAULT_COPYRIGHT.to_string(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from `path`, or the user's config directory when
    /// `path` is `None`, then apply environment overrides.
    /// Falls back to defaults if the file doesn't exist or fails to parse.
    pub fn load(path: Option<&Path>) -> Self {
        let config = match Self::try_load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to load config, using defaults: {}", e);
                Self::default()
            }
        };
        config.with_env_overrides(|key| std::env::var(key).ok())
    }

    fn try_load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(path) => path.to_path_buf(),
            None => match default_config_path() {
                Some(path) => path,
                None => return Ok(Self::default()),
            },
        };

        // An explicit path that is missing is an error; the default one is optional.
        if path.is_none() && !config_path.exists() {
            return Ok(Self::default());
        }

        Self::from_file(&config_path)
    }

    /// Parse a JSON config file. Missing keys take their default values.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = read_source(path)?;
        let mut config: Self =
            serde_json::from_str(&content).map_err(|source| DocsError::Config {
                path: path.to_path_buf(),
                source,
            })?;
        config.site_url = trim_site_url(&config.site_url);
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Apply `TAJS_DOCS_*` overrides using the given variable lookup.
    pub fn with_env_overrides(mut self, var: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = var("TAJS_DOCS_SITE_URL") {
            self.site_url = trim_site_url(&url);
        }
        if let Some(path) = var("TAJS_DOCS_CHANGELOG") {
            self.changelog_path = PathBuf::from(path);
        }
        if let Some(path) = var("TAJS_DOCS_LICENSE") {
            self.license_path = PathBuf::from(path);
        }
        if let Some(path) = var("TAJS_DOCS_SCREENSHOTS") {
            self.screenshots_dir = PathBuf::from(path);
        }
        self
    }
}

fn trim_site_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

fn default_config_path() -> Option<PathBuf> {
    let mut path = dirs::config_dir()?;
    path.push(APP_NAME);
    path.push(CONFIG_FILE);
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "project_name": "Other Mod" }"#).unwrap();

        let config = SiteConfig::from_file(&path).unwrap();
        assert_eq!(config.project_name, "Other Mod");
        assert_eq!(config.changelog_path, PathBuf::from("CHANGELOG.md"));
    }

    #[test]
    fn config_file_site_url_loses_trailing_slash() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "site_url": "https://example.org/docs/" }"#).unwrap();

        let config = SiteConfig::from_file(&path).unwrap();
        assert_eq!(config.site_url, "https://example.org/docs");
    }

    #[test]
    fn invalid_json_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = SiteConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, DocsError::Config { .. }));
    }

    #[test]
    fn missing_explicit_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = SiteConfig::load(Some(&dir.path().join("absent.json")));
        assert_eq!(config.project_name, SiteConfig::default().project_name);
    }

    #[test]
    fn env_overrides_replace_paths_and_trim_url() {
        let config = SiteConfig::default().with_env_overrides(|key| match key {
            "TAJS_DOCS_SITE_URL" => Some("https://example.org/docs/".to_string()),
            "TAJS_DOCS_CHANGELOG" => Some("../CHANGELOG.md".to_string()),
            _ => None,
        });

        assert_eq!(config.site_url, "https://example.org/docs");
        assert_eq!(config.changelog_path, PathBuf::from("../CHANGELOG.md"));
        assert_eq!(config.license_path, PathBuf::from("LICENSE.md"));
    }
}
