use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Built-in configuration, used when no sitemap.toml is given
pub mod defaults {
    pub const SITE_URL: &str = "https://graalagency.com";
    pub const ENDPOINT: &str = "http://localhost:4000/query";
    pub const QUERY: &str = "{ clients: clients { slug } authors: authors { slug } }";
    pub const OUTPUT_PATH: &str = "./sitemap.xml";
    pub const INCLUDE_AUTHORS: bool = false;
}

/// Resolved sitemap configuration
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    /// Site root without trailing slash
    pub site_url: String,
    /// GraphQL endpoint queried for slugs
    pub endpoint: String,
    pub query: String,
    pub output: PathBuf,
    pub include_authors: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_url: defaults::SITE_URL.to_string(),
            endpoint: defaults::ENDPOINT.to_string(),
            query: defaults::QUERY.to_string(),
            output: PathBuf::from(defaults::OUTPUT_PATH),
            include_authors: defaults::INCLUDE_AUTHORS,
        }
    }
}

/// Raw TOML configuration structure
/// Every section and field is optional and falls back to the defaults
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    site: RawSite,
    #[serde(default)]
    source: RawSource,
    #[serde(default)]
    output: RawOutput,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSite {
    url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSource {
    endpoint: Option<String>,
    query: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawOutput {
    path: Option<String>,
    include_authors: Option<bool>,
}

/// Parse sitemap.toml from a file path
pub fn parse_config_toml<P: AsRef<Path>>(path: P) -> Result<SiteConfig> {
    let content = fs::read_to_string(path)?;
    parse_config_toml_str(&content)
}

/// Parse sitemap.toml from a string (useful for testing)
pub fn parse_config_toml_str(content: &str) -> Result<SiteConfig> {
    let raw: RawConfig = toml::from_str(content)?;
    let defaults = SiteConfig::default();

    let site_url = match raw.site.url {
        Some(url) => validate_url(&url, "site.url")?
            .trim_end_matches('/')
            .to_string(),
        None => defaults.site_url,
    };

    let endpoint = match raw.source.endpoint {
        Some(url) => validate_url(&url, "source.endpoint")?,
        None => defaults.endpoint,
    };

    let query = match raw.source.query {
        Some(query) if query.trim().is_empty() => {
            return Err(Error::ConfigParse(
                "Empty query in 'source.query' field".to_string(),
            ));
        }
        Some(query) => query,
        None => defaults.query,
    };

    let output = match raw.output.path {
        Some(path) if path.trim().is_empty() => {
            return Err(Error::ConfigParse(
                "Empty path in 'output.path' field".to_string(),
            ));
        }
        Some(path) => PathBuf::from(path),
        None => defaults.output,
    };

    Ok(SiteConfig {
        site_url,
        endpoint,
        query,
        output,
        include_authors: raw.output.include_authors.unwrap_or(defaults.include_authors),
    })
}

/// Validate an absolute http(s) URL.
///
/// ```text
/// validate_url("https://example.com/", "site.url")  → Ok("https://example.com/")
/// validate_url("example.com", "site.url")           → Err("... must start with http:// or https://")
/// validate_url("https://", "site.url")              → Err("... has no host ...")
/// ```
fn validate_url(url: &str, field_name: &str) -> Result<String> {
    let url = url.trim();

    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(Error::ConfigParse(format!(
            "URL in '{}' must start with http:// or https://: '{}'",
            field_name, url
        )));
    }

    let has_host = url
        .split_once("://")
        .is_some_and(|(_, rest)| !rest.trim_matches('/').is_empty());
    if !has_host {
        return Err(Error::ConfigParse(format!(
            "URL in '{}' has no host: '{}'",
            field_name, url
        )));
    }

    Ok(url.to_string())
}
