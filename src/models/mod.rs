//! Domain models for the documentation site content pipeline.
//!
//! # Core Concepts
//!
//! - [`ChangelogEntry`]: One released version and its Added/Changed/Removed/Fixed lists.
//!   Built from `CHANGELOG.md` and immutable once parsed.
//! - [`ParsedChangelog`]: All entries in document order (newest first) plus the
//!   latest version/date shortcut used by the feeds.
//! - [`ReleaseSummary`]: The "what's new" view of the most recent entry.
//! - [`LicenseDocument`]: Title, copyright line and `##` sections of `LICENSE.md`.
//! - [`Screenshot`]: An image in the screenshots directory with alt text derived
//!   from its file name.

mod changelog;
mod license;
mod screenshot;

pub use changelog::*;
pub use license::*;
pub use screenshot::*;
