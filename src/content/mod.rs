//! Parsers that turn the repository's content files into models.
//!
//! Every `load_*`/`scan` entry point re-reads its source on each call and
//! never fails: unreadable sources are logged with `tracing::warn!` and
//! replaced by an empty or default value. The `parse_*` functions are pure
//! and take the text directly.

mod changelog;
mod license;
mod markdown;
mod screenshots;

pub use changelog::{load_changelog, parse_changelog};
pub use license::LicenseParser;
pub use markdown::markdown_to_html;
pub use screenshots::{alt_text_from_file_name, is_screenshot_file, ScreenshotScanner};
