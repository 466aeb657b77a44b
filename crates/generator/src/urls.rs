use sitemap_kit_core::{ChangeFreq, Language, Link, Slug, UrlEntry};

const STATIC_CHANGEFREQ: ChangeFreq = ChangeFreq::Monthly;
const STATIC_PRIORITY: f32 = 0.5;
const DYNAMIC_CHANGEFREQ: ChangeFreq = ChangeFreq::Weekly;
const DYNAMIC_PRIORITY: f32 = 0.7;

/// Language-prefixed URL of a static page.
/// The root page maps to `{site}/{lang}` without a trailing slash.
fn static_location(site_url: &str, lang: Language, page: &str) -> String {
    if page == "/" {
        format!("{}/{}", site_url, lang)
    } else {
        format!("{}/{}{}", site_url, lang, page)
    }
}

fn dynamic_location(site_url: &str, lang: Language, prefix: &str, slug: &Slug) -> String {
    format!("{}/{}/{}/{}", site_url, lang, prefix, slug)
}

/// One entry per language for the same page, all sharing the same links.
fn language_pair(
    locations: impl Fn(Language) -> String,
    changefreq: ChangeFreq,
    priority: f32,
) -> Vec<UrlEntry> {
    let links: Vec<Link> = Language::ALL
        .iter()
        .map(|&lang| Link::alternate(lang, locations(lang)))
        .collect();

    links
        .iter()
        .map(|link| UrlEntry {
            loc: link.href.clone(),
            changefreq,
            priority,
            links: links.clone(),
        })
        .collect()
}

/// Build EN and PL entries for every static page, in page order.
pub fn build_static(site_url: &str, pages: &[&str]) -> Vec<UrlEntry> {
    pages
        .iter()
        .flat_map(|page| {
            language_pair(
                |lang| static_location(site_url, lang, page),
                STATIC_CHANGEFREQ,
                STATIC_PRIORITY,
            )
        })
        .collect()
}

/// Build EN and PL entries for every slug under `/{lang}/{prefix}/`, in slug order.
pub fn build_dynamic(site_url: &str, prefix: &str, slugs: &[Slug]) -> Vec<UrlEntry> {
    slugs
        .iter()
        .flat_map(|slug| {
            language_pair(
                |lang| dynamic_location(site_url, lang, prefix, slug),
                DYNAMIC_CHANGEFREQ,
                DYNAMIC_PRIORITY,
            )
        })
        .collect()
}
