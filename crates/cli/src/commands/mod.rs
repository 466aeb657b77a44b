pub mod check;
pub mod generate;
pub mod init;

use anyhow::{Context, Result};
use sitemap_kit_core::{SiteConfig, parse_config_toml};
use std::path::Path;

/// Load sitemap.toml if given, otherwise the built-in configuration
pub fn load_config(path: Option<&Path>) -> Result<SiteConfig> {
    match path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!(
                    "Config file not found: {}\nRun 'sitemap-kit init' to create one",
                    path.display()
                );
            }
            let config = parse_config_toml(path)
                .with_context(|| format!("Failed to parse {}", path.display()))?;
            log::debug!(target: "config", "Loaded {}", path.display());
            Ok(config)
        }
        None => Ok(SiteConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_config_defaults_without_path() {
        assert_eq!(load_config(None).unwrap(), SiteConfig::default());
    }

    #[test]
    fn test_load_config_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sitemap.toml");
        let result = load_config(Some(path.as_path()));
        assert!(result.unwrap_err().to_string().contains("Config file not found"));
    }

    #[test]
    fn test_load_config_reports_parse_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sitemap.toml");
        fs::write(&path, "[site]\nurl = \"ftp://example.com\"\n").unwrap();

        let err = load_config(Some(path.as_path())).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
        assert!(format!("{:#}", err).contains("site.url"));
    }
}
