use super::load_config;
use anyhow::Result;
use sitemap_kit_core::SiteConfig;
use sitemap_kit_generator::static_pages;
use std::fmt::Write;
use std::path::PathBuf;

/// Validate the configuration and print what a run would use
pub async fn run(config: Option<PathBuf>) -> Result<()> {
    let config = load_config(config.as_deref())?;
    print!("{}", describe(&config));
    Ok(())
}

/// Resolved values as printed by `check`.
///
/// The `/authors` page depends on the slugs a run receives, so with authors
/// enabled both possible page sets are listed.
fn describe(config: &SiteConfig) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "✓ Configuration valid");
    let _ = writeln!(out, "  Site:            {}", config.site_url);
    let _ = writeln!(out, "  Endpoint:        {}", config.endpoint);
    let _ = writeln!(out, "  Query:           {}", config.query);
    let _ = writeln!(out, "  Output:          {}", config.output.display());
    let _ = writeln!(out, "  Include authors: {}", config.include_authors);
    let _ = writeln!(
        out,
        "  Static pages:    {}",
        static_pages(false).join(", ")
    );
    if config.include_authors {
        let _ = writeln!(
            out,
            "  Static pages (when author slugs exist): {}",
            static_pages(true).join(", ")
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn config_in(dir: &TempDir, content: &str) -> SiteConfig {
        let path = dir.path().join("sitemap.toml");
        fs::write(&path, content).unwrap();
        load_config(Some(path.as_path())).unwrap()
    }

    #[test]
    fn test_describe_without_authors() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir, "[site]\nurl = \"https://example.com\"\n");

        let out = describe(&config);
        assert!(out.contains("Site:            https://example.com"));
        assert!(out.contains("Static pages:    /, /clients, /mailing-list, /about-us, /contact"));
        assert!(!out.contains("/authors"));
    }

    #[test]
    fn test_describe_with_authors_lists_both_page_sets() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir, "[output]\ninclude_authors = true\n");

        let out = describe(&config);
        assert!(out.contains("Include authors: true"));
        assert!(out.contains("Static pages:    /, /clients, /mailing-list, /about-us, /contact\n"));
        assert!(out.contains(
            "Static pages (when author slugs exist): /, /authors, /clients, /mailing-list, /about-us, /contact"
        ));
    }

    #[tokio::test]
    async fn test_run_rejects_invalid_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sitemap.toml");
        fs::write(&path, "[site]\nurl = \"example.com\"\n").unwrap();

        assert!(run(Some(path)).await.is_err());
    }
}
