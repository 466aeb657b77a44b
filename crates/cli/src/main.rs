mod commands;
mod logging;

use clap::{CommandFactory, Parser};
use clap_complete::{Shell, generate};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "sitemap-kit")]
#[command(version, about = "Bilingual sitemap generator backed by a GraphQL API", long_about = None)]
struct Cli {
    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Defaults to `generate` with the built-in configuration
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Parser)]
enum Command {
    /// Fetch slugs and write the sitemap
    Generate {
        /// Path to sitemap.toml (built-in defaults if omitted)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output file, overrides the configured path
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// List author pages even if the configuration disables them
        #[arg(long)]
        include_authors: bool,
    },

    /// Validate configuration and show the resolved values
    Check {
        /// Path to sitemap.toml (built-in defaults if omitted)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Write a sitemap.toml with the default configuration
    Init {
        /// Directory or file to create (default: ./sitemap.toml)
        path: Option<PathBuf>,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.quiet);

    let result = match cli.command {
        None => commands::generate::run(None, None, false).await,
        Some(Command::Generate {
            config,
            output,
            include_authors,
        }) => commands::generate::run(config, output, include_authors).await,
        Some(Command::Check { config }) => commands::check::run(config).await,
        Some(Command::Init { path }) => commands::init::run(path).await,
        Some(Command::Completions { shell }) => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "sitemap-kit", &mut io::stdout());
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!(target: "sitemap-kit", "{:#}", err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_means_default_run() {
        let cli = Cli::try_parse_from(["sitemap-kit"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.quiet);
    }

    #[test]
    fn test_parse_generate_flags() {
        let cli = Cli::try_parse_from([
            "sitemap-kit",
            "generate",
            "--config",
            "site/sitemap.toml",
            "-o",
            "public/sitemap.xml",
            "--include-authors",
            "--quiet",
        ])
        .unwrap();

        assert!(cli.quiet);
        match cli.command {
            Some(Command::Generate {
                config,
                output,
                include_authors,
            }) => {
                assert_eq!(config, Some(PathBuf::from("site/sitemap.toml")));
                assert_eq!(output, Some(PathBuf::from("public/sitemap.xml")));
                assert!(include_authors);
            }
            _ => panic!("expected generate command"),
        }
    }
}
