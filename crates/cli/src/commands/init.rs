use anyhow::{Context, Result};
use sitemap_kit_core::SiteConfig;
use sitemap_kit_core::config::parse_config_toml_str;
use std::fs;
use std::path::PathBuf;

const CONFIG_FILE_NAME: &str = "sitemap.toml";

/// Escape a string for safe inclusion in a TOML basic string.
///
/// The template keeps its comments, so it is written by hand rather than
/// through the toml serializer.
///
/// See: https://toml.io/en/v1.0.0#string
fn toml_escape_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\x08', "\\b")
        .replace('\x0C', "\\f")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

fn render_template(config: &SiteConfig) -> String {
    format!(
        r#"# sitemap-kit configuration
# Every field is optional; removed fields fall back to the built-in defaults.

[site]
# Site root, without trailing slash. Pages are listed under /en and /pl.
url = "{site_url}"

[source]
# GraphQL endpoint returning clients {{ slug }} and authors {{ slug }}
endpoint = "{endpoint}"
query = "{query}"

[output]
path = "{output}"
# Adds /authors and one page per author slug
include_authors = {include_authors}
"#,
        site_url = toml_escape_string(&config.site_url),
        endpoint = toml_escape_string(&config.endpoint),
        query = toml_escape_string(&config.query),
        output = toml_escape_string(&config.output.to_string_lossy()),
        include_authors = config.include_authors,
    )
}

/// Write a sitemap.toml holding the default configuration.
///
/// `path` is either the directory to create it in or the file itself.
/// An existing file is never overwritten.
pub async fn run(path: Option<PathBuf>) -> Result<()> {
    let path = path.unwrap_or_else(|| PathBuf::from("."));
    let target = if path.is_dir() {
        path.join(CONFIG_FILE_NAME)
    } else {
        path
    };

    if target.exists() {
        anyhow::bail!("{} already exists, not overwriting", target.display());
    }

    let template = render_template(&SiteConfig::default());

    // The template must stay loadable
    parse_config_toml_str(&template).context("Generated template is invalid")?;

    fs::write(&target, template)
        .with_context(|| format!("Failed to write {}", target.display()))?;

    log::info!(target: "init", "Created {}", target.display());
    println!();
    println!("Next steps:");
    println!("  1. Edit {}", target.display());
    println!("  2. sitemap-kit check --config {}", target.display());
    println!("  3. sitemap-kit generate --config {}", target.display());

    Ok(())
}
