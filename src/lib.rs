//! Content pipeline for the Taj's Mod documentation site.
//!
//! Raw files flow one way into plain records and then into feeds:
//!
//! ```text
//! CHANGELOG.md ─► content::parse_changelog ─► ParsedChangelog ─► feed::{json, rss}
//! LICENSE.md   ─► content::LicenseParser   ─► LicenseDocument
//! screenshots/ ─► content::ScreenshotScanner ─► Vec<Screenshot>
//! ```
//!
//! [`build::build_site`] writes everything to disk at build time;
//! [`api::create_router`] serves the same data over HTTP.

pub mod api;
pub mod build;
pub mod config;
pub mod content;
pub mod error;
pub mod feed;
pub mod models;

pub use error::{DocsError, Result};
