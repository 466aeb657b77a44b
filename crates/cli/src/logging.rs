use colored::Colorize;
use env_logger::{Builder, Env};
use log::{Level, LevelFilter};
use std::io::Write;

/// Install the global logger. `RUST_LOG` overrides the default `info` level;
/// `quiet` keeps only errors and ignores `RUST_LOG`.
pub fn init_logging(quiet: bool) {
    logger_builder(quiet).init();
}

fn logger_builder(quiet: bool) -> Builder {
    let mut builder = if quiet {
        let mut builder = Builder::new();
        builder.filter_level(LevelFilter::Error);
        builder
    } else {
        Builder::from_env(Env::default().filter_or("RUST_LOG", "info"))
    };

    builder.format(|buf, record| {
        let target = record.target().to_ascii_lowercase();
        let target = match record.level() {
            Level::Error => target.bold().red(),
            Level::Warn => target.bold().yellow(),
            _ => target.bold().bright_yellow(),
        };

        writeln!(
            buf,
            "{} {} {}",
            chrono::Local::now().format("%H:%M:%S").to_string().dimmed(),
            target,
            record.args()
        )
    });

    builder
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::{Log, Metadata};

    #[test]
    fn test_quiet_ignores_rust_log_directives() {
        unsafe { std::env::set_var("RUST_LOG", "sitemap=debug,source=trace") };
        let logger = logger_builder(true).build();
        unsafe { std::env::remove_var("RUST_LOG") };

        assert_eq!(logger.filter(), LevelFilter::Error);
        let debug = Metadata::builder().level(Level::Debug).target("sitemap").build();
        assert!(!logger.enabled(&debug));
        let error = Metadata::builder().level(Level::Error).target("sitemap").build();
        assert!(logger.enabled(&error));
    }
}
