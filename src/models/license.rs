use serde::{Deserialize, Serialize};

/// Copyright line used when the license has none, or cannot be read.
pub const DEFAULT_COPYRIGHT: &str = "Copyright © 2025 TajemnikTV";

/// Structured view of `LICENSE.md`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseDocument {
    pub title: String,
    /// Normalised to `Copyright © <year> <holder>`.
    pub copyright: String,
    /// The license text exactly as read.
    pub full_text: String,
    /// `##` sections in document order.
    pub sections: Vec<LicenseSection>,
}

impl LicenseDocument {
    /// Document served when the license file cannot be read.
    pub fn unavailable(copyright: impl Into<String>) -> Self {
        Self {
            title: "All Rights Reserved".to_string(),
            copyright: copyright.into(),
            full_text: "License file not found.".to_string(),
            sections: Vec::new(),
        }
    }

    pub fn section(&self, title: &str) -> Option<&LicenseSection> {
        self.sections.iter().find(|s| s.title == title)
    }
}

/// A `##` block of the license. `###` headings inside it are folded into
/// `content` as `**Heading**` lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseSection {
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_html: Option<String>,
}
