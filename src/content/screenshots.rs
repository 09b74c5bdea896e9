use std::path::{Path, PathBuf};

use crate::config::SiteConfig;
use crate::models::Screenshot;

/// Extensions (case-insensitive) treated as screenshots.
pub const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "webp"];

/// Import metadata the game engine writes next to each asset.
const SIDECAR_SUFFIX: &str = ".import";

const FALLBACK_ALT_TEXT: &str = "Screenshot";

/// Lists the screenshots directory.
#[derive(Debug, Clone)]
pub struct ScreenshotScanner {
    dir: PathBuf,
    url_prefix: String,
}

impl ScreenshotScanner {
    pub fn new(dir: impl Into<PathBuf>, url_prefix: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            url_prefix: url_prefix.into(),
        }
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(&config.screenshots_dir, &config.screenshots_url_prefix)
    }

    /// One record per image file, sorted by file name.
    ///
    /// A missing or unreadable directory yields an empty list and a warning.
    pub fn scan(&self) -> Vec<Screenshot> {
        let entries = match std::fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(
                    "Screenshot directory {} not readable: {}",
                    self.dir.display(),
                    e
                );
                return Vec::new();
            }
        };

        let mut names: Vec<String> = entries
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::warn!("Skipping unreadable screenshot entry: {}", e);
                    None
                }
            })
            .filter(|entry| entry.path().is_file())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|name| is_screenshot_file(name))
            .collect();
        names.sort();

        let prefix = self.url_prefix.trim_end_matches('/');
        let screenshots: Vec<Screenshot> = names
            .into_iter()
            .map(|name| Screenshot {
                alt_text: alt_text_from_file_name(&name),
                path: format!("{}/{}", prefix, name),
            })
            .collect();

        tracing::info!("Found {} screenshots", screenshots.len());
        screenshots
    }
}

pub fn is_screenshot_file(name: &str) -> bool {
    if name.ends_with(SIDECAR_SUFFIX) {
        return false;
    }

    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
}

/// `01-command_palette.png` becomes `command palette`.
pub fn alt_text_from_file_name(name: &str) -> String {
    let stem = name.rfind('.').map_or(name, |dot| &name[..dot]);

    let spaced: String = stem
        .chars()
        .map(|c| if c == '-' || c == '_' { ' ' } else { c })
        .collect();

    let alt = spaced
        .trim_start_matches(|c: char| c.is_ascii_digit())
        .trim();

    if alt.is_empty() {
        FALLBACK_ALT_TEXT.to_string()
    } else {
        alt.to_string()
    }
}
