//! Sitemap XML serialization.
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9" xmlns:xhtml="http://www.w3.org/1999/xhtml">
//!   <url>
//!     <loc>https://example.com/en</loc>
//!     <changefreq>monthly</changefreq>
//!     <priority>0.5</priority>
//!     <xhtml:link rel="alternate" hreflang="en" href="https://example.com/en"/>
//!     <xhtml:link rel="alternate" hreflang="pl" href="https://example.com/pl"/>
//!   </url>
//! </urlset>
//! ```

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use sitemap_kit_core::{Error, Result, SitemapDocument, UrlEntry};

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";
const INDENT: usize = 2;

fn emit(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| Error::Xml(e.to_string()))
}

fn text_element(writer: &mut Writer<Vec<u8>>, name: &str, text: &str) -> Result<()> {
    emit(writer, Event::Start(BytesStart::new(name)))?;
    emit(writer, Event::Text(BytesText::new(text)))?;
    emit(writer, Event::End(BytesEnd::new(name)))
}

fn write_url(writer: &mut Writer<Vec<u8>>, entry: &UrlEntry) -> Result<()> {
    emit(writer, Event::Start(BytesStart::new("url")))?;

    text_element(writer, "loc", &entry.loc)?;
    text_element(writer, "changefreq", entry.changefreq.as_str())?;
    text_element(writer, "priority", &entry.priority.to_string())?;

    for link in &entry.links {
        let element = BytesStart::new("xhtml:link").with_attributes([
            ("rel", link.rel),
            ("hreflang", link.hreflang.as_str()),
            ("href", link.href.as_str()),
        ]);
        emit(writer, Event::Empty(element))?;
    }

    emit(writer, Event::End(BytesEnd::new("url")))
}

/// Render the document as a sitemap with alternate-language links.
///
/// Output is deterministic for a given document and ends with a newline.
pub fn to_xml(document: &SitemapDocument) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', INDENT);

    emit(
        &mut writer,
        Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)),
    )?;

    let urlset =
        BytesStart::new("urlset").with_attributes([("xmlns", SITEMAP_NS), ("xmlns:xhtml", XHTML_NS)]);
    emit(&mut writer, Event::Start(urlset))?;

    for entry in &document.urls {
        write_url(&mut writer, entry)?;
    }

    emit(&mut writer, Event::End(BytesEnd::new("urlset")))?;

    let mut xml = String::from_utf8(writer.into_inner()).map_err(|e| Error::Xml(e.to_string()))?;
    xml.push('\n');
    Ok(xml)
}
