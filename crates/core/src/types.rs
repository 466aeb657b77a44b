use crate::error::{Error, Result};
use serde::Deserialize;
use std::fmt;

/// Site language. Every page exists once per language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    En,
    Pl,
}

impl Language {
    /// Languages in output order
    pub const ALL: [Language; 2] = [Language::En, Language::Pl];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Pl => "pl",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Change frequency values for sitemap entries.
///
/// See: https://www.sitemaps.org/protocol.html#changefreqdef
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFreq {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFreq {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFreq::Always => "always",
            ChangeFreq::Hourly => "hourly",
            ChangeFreq::Daily => "daily",
            ChangeFreq::Weekly => "weekly",
            ChangeFreq::Monthly => "monthly",
            ChangeFreq::Yearly => "yearly",
            ChangeFreq::Never => "never",
        }
    }
}

impl fmt::Display for ChangeFreq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier of a dynamic resource (client or author), used as the last
/// path segment of its URL.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Slug(String);

impl Slug {
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(Error::InvalidData("Slug must not be empty".to_string()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Slug {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Slug::new(value)
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Slugs delivered by a source for one run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Slugs {
    pub authors: Vec<Slug>,
    pub clients: Vec<Slug>,
}

/// Alternate-language link attached to a sitemap entry
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub rel: &'static str,
    pub hreflang: Language,
    pub href: String,
}

impl Link {
    pub fn alternate(hreflang: Language, href: impl Into<String>) -> Self {
        Self {
            rel: "alternate",
            hreflang,
            href: href.into(),
        }
    }
}

/// One `<url>` record of the sitemap
#[derive(Debug, Clone, PartialEq)]
pub struct UrlEntry {
    pub loc: String,
    pub changefreq: ChangeFreq,
    /// Relative importance, 0.0 to 1.0
    pub priority: f32,
    /// One link per language, the entry itself included
    pub links: Vec<Link>,
}

/// Ordered list of entries, the root of the XML output
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SitemapDocument {
    pub urls: Vec<UrlEntry>,
}

impl SitemapDocument {
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_rejects_empty() {
        assert!(Slug::new("").is_err());
        assert!(Slug::new("   ").is_err());
        assert_eq!(Slug::new("acme").unwrap().as_str(), "acme");
    }

    #[test]
    fn test_slug_deserializes_through_validation() {
        #[derive(Deserialize)]
        struct Record {
            slug: Slug,
        }

        let record: Record = toml::from_str("slug = \"acme\"").unwrap();
        assert_eq!(record.slug.as_str(), "acme");
        assert!(toml::from_str::<Record>("slug = \"\"").is_err());
    }

    #[test]
    fn test_language_order() {
        assert_eq!(Language::ALL, [Language::En, Language::Pl]);
        assert_eq!(Language::Pl.to_string(), "pl");
    }

    #[test]
    fn test_changefreq_as_str() {
        assert_eq!(ChangeFreq::Monthly.as_str(), "monthly");
        assert_eq!(ChangeFreq::Weekly.to_string(), "weekly");
    }

    #[test]
    fn test_link_alternate() {
        let link = Link::alternate(Language::En, "https://example.com/en");
        assert_eq!(link.rel, "alternate");
        assert_eq!(link.hreflang, Language::En);
        assert_eq!(link.href, "https://example.com/en");
    }
}
