use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use super::release_url;
use crate::config::SiteConfig;
use crate::error::{DocsError, Result};
use crate::models::{ChangeKind, ChangelogEntry, ParsedChangelog, DEFAULT_RELEASE_SUMMARY};

/// Maximum number of `<item>`s in the RSS feed.
pub const RSS_ITEM_LIMIT: usize = 10;

const ATOM_NAMESPACE: &str = "http://www.w3.org/2005/Atom";

/// Render `feed.xml`.
///
/// `build_time` becomes `lastBuildDate`; the output is otherwise fully
/// determined by the changelog and config.
pub fn render_rss(
    parsed: &ParsedChangelog,
    config: &SiteConfig,
    build_time: DateTime<Utc>,
) -> Result<String> {
    let mut xml = XmlWriter::new();

    xml.event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut rss = BytesStart::new("rss");
    rss.push_attribute(("version", "2.0"));
    rss.push_attribute(("xmlns:atom", ATOM_NAMESPACE));
    xml.event(Event::Start(rss))?;
    xml.event(Event::Start(BytesStart::new("channel")))?;

    xml.text_element("title", &config.feed_title)?;
    xml.text_element("link", &format!("{}/changelog/", config.site_url))?;
    xml.text_element("description", &config.rss_description)?;
    xml.text_element("language", &config.language)?;

    let self_url = format!("{}/feed.xml", config.site_url);
    let mut atom_link = BytesStart::new("atom:link");
    atom_link.push_attribute(("href", self_url.as_str()));
    atom_link.push_attribute(("rel", "self"));
    atom_link.push_attribute(("type", "application/rss+xml"));
    xml.event(Event::Empty(atom_link))?;

    xml.text_element("lastBuildDate", &build_time.to_rfc2822())?;

    for entry in parsed.entries.iter().take(RSS_ITEM_LIMIT) {
        write_item(&mut xml, entry, config)?;
    }

    xml.event(Event::End(BytesEnd::new("channel")))?;
    xml.event(Event::End(BytesEnd::new("rss")))?;

    xml.finish()
}

fn write_item(xml: &mut XmlWriter, entry: &ChangelogEntry, config: &SiteConfig) -> Result<()> {
    let url = release_url(config, &entry.version);

    xml.event(Event::Start(BytesStart::new("item")))?;
    xml.text_element(
        "title",
        &format!("{} v{}", config.project_name, entry.version),
    )?;
    xml.text_element("link", &url)?;

    let mut guid = BytesStart::new("guid");
    guid.push_attribute(("isPermaLink", "true"));
    xml.event(Event::Start(guid))?;
    xml.event(Event::Text(BytesText::new(&url)))?;
    xml.event(Event::End(BytesEnd::new("guid")))?;

    if let Some(pub_date) = pub_date(&entry.date) {
        xml.text_element("pubDate", &pub_date)?;
    }
    xml.text_element("description", &item_description(entry))?;
    xml.event(Event::End(BytesEnd::new("item")))
}

/// `**Added:** a, b | **Changed:** c | **Fixed:** d`, skipping empty
/// sections, or the default summary when all three are empty.
pub fn item_description(entry: &ChangelogEntry) -> String {
    let parts: Vec<String> = [ChangeKind::Added, ChangeKind::Changed, ChangeKind::Fixed]
        .iter()
        .filter(|kind| !entry.changes(**kind).is_empty())
        .map(|kind| format!("**{}:** {}", kind.heading(), entry.changes(*kind).join(", ")))
        .collect();

    if parts.is_empty() {
        DEFAULT_RELEASE_SUMMARY.to_string()
    } else {
        parts.join(" | ")
    }
}

/// RFC 2822 midnight UTC for a `YYYY-MM-DD` date; `None` for `TBD` and
/// anything else that is not a date.
fn pub_date(date: &str) -> Option<String> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .map(|day| day.and_time(NaiveTime::MIN).and_utc().to_rfc2822())
}

/// Indented XML writer that reports failures as [`DocsError::Xml`].
struct XmlWriter {
    inner: Writer<Vec<u8>>,
}

impl XmlWriter {
    fn new() -> Self {
        Self {
            inner: Writer::new_with_indent(Vec::new(), b' ', 2),
        }
    }

    fn event(&mut self, event: Event<'_>) -> Result<()> {
        self.inner
            .write_event(event)
            .map_err(|e| DocsError::Xml(e.to_string()))
    }

    fn text_element(&mut self, name: &str, text: &str) -> Result<()> {
        self.event(Event::Start(BytesStart::new(name)))?;
        self.event(Event::Text(BytesText::new(text)))?;
        self.event(Event::End(BytesEnd::new(name)))
    }

    fn finish(self) -> Result<String> {
        Ok(String::from_utf8(self.inner.into_inner())?)
    }
}
