use crate::pages::static_pages;
use crate::urls::{build_dynamic, build_static};
use crate::xml::to_xml;
use sitemap_kit_core::{Result, SiteConfig, SitemapDocument, SlugSource, UrlEntry};

/// Settings the builder needs, independent of where slugs come from
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub site_url: String,
    pub include_authors: bool,
}

impl From<&SiteConfig> for RenderOptions {
    fn from(config: &SiteConfig) -> Self {
        Self {
            site_url: config.site_url.clone(),
            include_authors: config.include_authors,
        }
    }
}

/// Concatenate entry lists: static pages, clients, then authors if present.
pub fn assemble(
    static_urls: Vec<UrlEntry>,
    client_urls: Vec<UrlEntry>,
    author_urls: Option<Vec<UrlEntry>>,
) -> SitemapDocument {
    let mut urls = static_urls;
    urls.extend(client_urls);
    if let Some(author_urls) = author_urls {
        urls.extend(author_urls);
    }
    SitemapDocument { urls }
}

/// Fetch slugs and build the sitemap document.
///
/// A source error is returned as-is; nothing is built in that case.
pub async fn build_document(
    source: &(dyn SlugSource + Sync),
    options: &RenderOptions,
) -> Result<SitemapDocument> {
    let slugs = source.fetch_slugs().await?;
    log::info!(
        target: "sitemap",
        "Fetched {} client and {} author slugs",
        slugs.clients.len(),
        slugs.authors.len()
    );

    let pages = static_pages(options.include_authors && !slugs.authors.is_empty());
    let static_urls = build_static(&options.site_url, pages);
    let client_urls = build_dynamic(&options.site_url, "clients", &slugs.clients);
    let author_urls = options
        .include_authors
        .then(|| build_dynamic(&options.site_url, "authors", &slugs.authors));

    Ok(assemble(static_urls, client_urls, author_urls))
}

/// Fetch slugs, build the document and serialize it to sitemap XML.
pub async fn render_sitemap(
    source: &(dyn SlugSource + Sync),
    options: &RenderOptions,
) -> Result<String> {
    let document = build_document(source, options).await?;
    let xml = to_xml(&document)?;
    log::info!(target: "sitemap", "Rendered sitemap with {} URLs", document.len());
    Ok(xml)
}
