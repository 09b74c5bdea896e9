//! Minimal Markdown to HTML for license section bodies.
//!
//! Handles the inline subset license text uses: bold, italic, links, inline
//! code, `*`/`-` list items and paragraph breaks. Input is HTML-escaped first.
//! Links are only rendered for `http`, `https` and `mailto` targets; any other
//! scheme is left as its label text.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static LIST_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[*-][ \t]+(.+)$").expect("list item pattern"));
static BOLD_STARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("bold pattern"));
static BOLD_UNDERSCORES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"__(.+?)__").expect("bold pattern"));
static ITALIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*([^*\n]+)\*").expect("italic pattern"));
static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)\s]+)\)").expect("link pattern"));
static INLINE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`]+)`").expect("inline code pattern"));

pub fn markdown_to_html(text: &str) -> String {
    let html = html_escape::encode_double_quoted_attribute(text.trim());
    let html = LIST_ITEM.replace_all(&html, "<li>${1}</li>").into_owned();
    let html = BOLD_STARS
        .replace_all(&html, "<strong>${1}</strong>")
        .into_owned();
    let html = BOLD_UNDERSCORES
        .replace_all(&html, "<strong>${1}</strong>")
        .into_owned();
    let html = ITALIC.replace_all(&html, "<em>${1}</em>").into_owned();
    let html = LINK.replace_all(&html, render_link).into_owned();
    let html = INLINE_CODE
        .replace_all(&html, "<code>${1}</code>")
        .into_owned();

    let html = html.replace("\n\n", "</p><p>").replace('\n', "<br>");
    format!("<p>{}</p>", html)
}

fn render_link(caps: &Captures) -> String {
    let (label, href) = (&caps[1], &caps[2]);
    if is_allowed_href(href) {
        format!(r#"<a href="{href}" target="_blank" rel="noopener noreferrer">{label}</a>"#)
    } else {
        label.to_string()
    }
}

fn is_allowed_href(href: &str) -> bool {
    let lower = href.to_ascii_lowercase();
    ["http://", "https://", "mailto:"]
        .iter()
        .any(|scheme| lower.starts_with(scheme))
}
