use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::content::markdown_to_html;
use crate::error::read_source;
use crate::models::{LicenseDocument, LicenseSection, DEFAULT_COPYRIGHT};

/// A single `#` heading; `##` and deeper do not match.
static TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#[ \t]+(.+)$").expect("title pattern"));

static COPYRIGHT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Copyright \(c\) (\d{4}) (.+)").expect("copyright pattern")
});

/// `## Title`, `## 1) Title` or `## 1. Title`.
static SECTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^##[ \t]+(?:\d+[.)][ \t]*)?(.+)$").expect("section pattern")
});

const DEFAULT_TITLE: &str = "License";

/// Parser for `LICENSE.md`.
#[derive(Debug, Clone)]
pub struct LicenseParser {
    default_copyright: String,
}

impl Default for LicenseParser {
    fn default() -> Self {
        Self::new(DEFAULT_COPYRIGHT)
    }
}

impl LicenseParser {
    /// `default_copyright` is used when the text has no `Copyright (c)` line
    /// and for the placeholder document returned when the file is missing.
    pub fn new(default_copyright: impl Into<String>) -> Self {
        Self {
            default_copyright: default_copyright.into(),
        }
    }

    /// Read and parse the license at `path`, or return the "All Rights
    /// Reserved" placeholder if it cannot be read.
    pub fn load(&self, path: &Path) -> LicenseDocument {
        match read_source(path) {
            Ok(text) => self.parse(&text),
            Err(e) => {
                tracing::warn!("Could not read license: {}", e);
                LicenseDocument::unavailable(self.default_copyright.clone())
            }
        }
    }

    pub fn parse(&self, text: &str) -> LicenseDocument {
        let title = TITLE
            .captures(text)
            .map(|caps| strip_emphasis(&caps[1]))
            .filter(|title| !title.is_empty())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());

        let copyright = COPYRIGHT
            .captures(text)
            .map(|caps| format!("Copyright © {} {}", &caps[1], caps[2].trim()))
            .unwrap_or_else(|| self.default_copyright.clone());

        LicenseDocument {
            title,
            copyright,
            full_text: text.to_string(),
            sections: parse_sections(text),
        }
    }
}

fn parse_sections(text: &str) -> Vec<LicenseSection> {
    let mut sections = Vec::new();
    let mut current: Option<(String, String)> = None;

    for line in text.lines() {
        if let Some(caps) = SECTION.captures(line) {
            if let Some((title, content)) = current.take() {
                sections.push(finish_section(title, content));
            }
            current = Some((strip_emphasis(&caps[1]), String::new()));
            continue;
        }

        let Some((_, content)) = current.as_mut() else {
            continue;
        };
        if line.trim().is_empty() {
            continue;
        }

        // Sub-headings stay inside the section as an emphasised line.
        if let Some(heading) = line.strip_prefix("###") {
            let heading = heading.trim_start_matches('#').trim();
            content.push_str(&format!("\n**{}**\n", heading));
        } else {
            content.push_str(line.trim_end());
            content.push('\n');
        }
    }

    if let Some((title, content)) = current {
        sections.push(finish_section(title, content));
    }

    sections
}

fn finish_section(title: String, content: String) -> LicenseSection {
    let content_html = markdown_to_html(&content);
    LicenseSection {
        title,
        content,
        content_html: Some(content_html),
    }
}

fn strip_emphasis(s: &str) -> String {
    s.trim()
        .trim_matches(|c| c == '*' || c == '_')
        .trim()
        .to_string()
}
