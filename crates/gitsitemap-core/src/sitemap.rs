//! Sitemap document model and XML serialization.

use crate::error::{Error, Result};
use crate::history::format_lastmod;
use chrono::{DateTime, Utc};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::path::Path;

/// Namespace of the sitemaps.org protocol.
pub const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// One `<url>` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlNode {
    /// Page location, never empty
    pub loc: String,
    /// Stringified priority
    pub priority: Option<String>,
    /// Change frequency
    pub changefreq: Option<String>,
    /// Last commit time of the page's source file
    pub lastmod: Option<DateTime<Utc>>,
}

impl UrlNode {
    /// Create a node for `loc`, falling back to `/` when empty.
    pub fn new(loc: impl Into<String>) -> Self {
        let loc = loc.into();
        Self {
            loc: if loc.is_empty() { "/".to_string() } else { loc },
            priority: None,
            changefreq: None,
            lastmod: None,
        }
    }
}

/// An ordered `<urlset>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SitemapDocument {
    urls: Vec<UrlNode>,
}

impl SitemapDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node.
    pub fn push(&mut self, node: UrlNode) {
        self.urls.push(node);
    }

    /// The nodes in output order.
    pub fn urls(&self) -> &[UrlNode] {
        &self.urls
    }

    /// Number of `<url>` elements.
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    /// Whether the document has no `<url>` elements.
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// Serialize to UTF-8 XML with a declaration.
    ///
    /// Compact output puts the whole `<urlset>` on one line; `pretty` indents by two spaces.
    pub fn to_xml(&self, pretty: bool) -> Result<Vec<u8>> {
        let mut writer = if pretty {
            Writer::new_with_indent(Vec::new(), b' ', 2)
        } else {
            Writer::new(Vec::new())
        };

        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(xml_error)?;
        if !pretty {
            writer.get_mut().push(b'\n');
        }

        let mut urlset = BytesStart::new("urlset");
        urlset.push_attribute(("xmlns", SITEMAP_NS));
        writer.write_event(Event::Start(urlset)).map_err(xml_error)?;

        for node in &self.urls {
            writer
                .write_event(Event::Start(BytesStart::new("url")))
                .map_err(xml_error)?;

            write_text_element(&mut writer, "loc", &node.loc)?;
            if let Some(priority) = &node.priority {
                write_text_element(&mut writer, "priority", priority)?;
            }
            if let Some(changefreq) = &node.changefreq {
                write_text_element(&mut writer, "changefreq", changefreq)?;
            }
            if let Some(lastmod) = &node.lastmod {
                write_text_element(&mut writer, "lastmod", &format_lastmod(lastmod))?;
            }

            writer
                .write_event(Event::End(BytesEnd::new("url")))
                .map_err(xml_error)?;
        }

        writer
            .write_event(Event::End(BytesEnd::new("urlset")))
            .map_err(xml_error)?;

        let mut xml = writer.into_inner();
        xml.push(b'\n');
        Ok(xml)
    }

    /// Serialize and write to `path`, replacing any existing file.
    pub fn write_to(&self, path: impl AsRef<Path>, pretty: bool) -> Result<()> {
        let xml = self.to_xml(pretty)?;
        std::fs::write(path, xml)?;
        Ok(())
    }
}

fn write_text_element(writer: &mut Writer<Vec<u8>>, name: &str, text: &str) -> Result<()> {
    writer
        .write_event(Event::Start(BytesStart::new(name)))
        .map_err(xml_error)?;
    writer
        .write_event(Event::Text(BytesText::new(text)))
        .map_err(xml_error)?;
    writer
        .write_event(Event::End(BytesEnd::new(name)))
        .map_err(xml_error)?;
    Ok(())
}

fn xml_error(e: impl std::fmt::Display) -> Error {
    Error::Xml(e.to_string())
}
