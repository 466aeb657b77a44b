const PAGES: &[&str] = &["/", "/clients", "/mailing-list", "/about-us", "/contact"];

const PAGES_WITH_AUTHORS: &[&str] = &[
    "/",
    "/authors",
    "/clients",
    "/mailing-list",
    "/about-us",
    "/contact",
];

/// Static site paths to list, in output order.
/// The authors index only appears when author pages are published.
pub fn static_pages(include_authors: bool) -> &'static [&'static str] {
    if include_authors {
        PAGES_WITH_AUTHORS
    } else {
        PAGES
    }
}
