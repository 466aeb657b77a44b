use super::load_config;
use anyhow::{Context, Result};
use sitemap_kit_core::{SiteConfig, SlugSource};
use sitemap_kit_generator::{RenderOptions, render_sitemap};
use sitemap_kit_source::GraphqlClient;
use std::fs;
use std::path::{Path, PathBuf};

/// Fetch slugs from the configured endpoint and write the sitemap file.
///
/// # Arguments
///
/// * `config` - Optional sitemap.toml; built-in defaults otherwise
/// * `output` - Overrides the configured output path
/// * `include_authors` - Forces author pages on
pub async fn run(
    config: Option<PathBuf>,
    output: Option<PathBuf>,
    include_authors: bool,
) -> Result<()> {
    let mut config = load_config(config.as_deref())?;
    if let Some(output) = output {
        config.output = output;
    }
    if include_authors {
        config.include_authors = true;
    }

    log::info!(target: "source", "Querying {}", config.endpoint);
    let source = GraphqlClient::from_config(&config).context("Failed to set up GraphQL client")?;

    generate(&source, &config).await
}

/// Render the sitemap from `source` and write it to the configured path.
///
/// The output file is only touched once the whole document is rendered.
pub async fn generate(source: &(dyn SlugSource + Sync), config: &SiteConfig) -> Result<()> {
    let options = RenderOptions::from(config);
    let xml = render_sitemap(source, &options)
        .await
        .context("Failed to build sitemap")?;

    write_sitemap(&config.output, &xml)?;
    log::info!(target: "sitemap", "Wrote {}", config.output.display());

    Ok(())
}

fn write_sitemap(path: &Path, xml: &str) -> Result<()> {
    fs::write(path, xml).with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use sitemap_kit_core::{Error, Slug, Slugs};
    use tempfile::TempDir;

    struct FixedSource(Slugs);

    #[async_trait]
    impl SlugSource for FixedSource {
        async fn fetch_slugs(&self) -> sitemap_kit_core::Result<Slugs> {
            Ok(self.0.clone())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl SlugSource for FailingSource {
        async fn fetch_slugs(&self) -> sitemap_kit_core::Result<Slugs> {
            Err(Error::Source("HTTP 502".to_string()))
        }
    }

    fn config_in(dir: &TempDir) -> SiteConfig {
        SiteConfig {
            site_url: "https://example.com".to_string(),
            output: dir.path().join("sitemap.xml"),
            ..SiteConfig::default()
        }
    }

    #[tokio::test]
    async fn test_generate_writes_sitemap() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        let source = FixedSource(Slugs {
            authors: vec![],
            clients: vec![Slug::new("acme").unwrap()],
        });

        generate(&source, &config).await.unwrap();

        let xml = fs::read_to_string(&config.output).unwrap();
        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.ends_with("</urlset>\n"));
        assert!(xml.contains("<loc>https://example.com/en</loc>"));
        assert!(xml.contains("<loc>https://example.com/pl/clients/acme</loc>"));
        assert_eq!(xml.matches("<url>").count(), 12);
    }

    #[tokio::test]
    async fn test_generate_source_error_leaves_no_file() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);

        let err = generate(&FailingSource, &config).await.unwrap_err();

        assert!(format!("{:#}", err).contains("HTTP 502"));
        assert!(!config.output.exists());
    }

    #[tokio::test]
    async fn test_generate_unwritable_output() {
        let dir = TempDir::new().unwrap();
        let config = SiteConfig {
            output: dir.path().join("missing").join("sitemap.xml"),
            ..config_in(&dir)
        };
        let source = FixedSource(Slugs::default());

        let err = generate(&source, &config).await.unwrap_err();
        assert!(err.to_string().contains("Failed to write"));
    }
}
